use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, location, sign_in, test_state};
use astra::Body;
use http::{Method, Request};

#[test]
fn detail_page_shows_pricing_and_landlord() {
    let state = test_state();
    let token = sign_in(&state);
    let resp = get(&state, "/properties/4", Some(&token));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Spacious 4-Bedroom House"));
    assert!(body.contains("12 Biko Street, Khayelitsha, Western Cape"));
    assert!(body.contains("4 Bedrooms"));
    assert!(body.contains("2 Bathrooms"));
    assert!(body.contains("R6,200"));
    assert!(body.contains("R12,400"));
    assert!(body.contains("R18,600"));
    assert!(body.contains("Mandla Ngcobo"));
    assert!(body.contains("+27 81 234 5678"));
    assert!(body.contains("Check out this property: Spacious 4-Bedroom House - R6,200/month"));
}

#[test]
fn detail_singular_room_labels() {
    let state = test_state();
    let token = sign_in(&state);
    let body = body_string(get(&state, "/properties/5", Some(&token)));
    assert!(body.contains("1 Bedroom ·"));
    assert!(body.contains("1 Bathroom"));
    assert!(!body.contains("1 Bathrooms"));
}

#[test]
fn detail_back_link_returns_to_same_results() {
    let state = test_state();
    let token = sign_in(&state);
    let body = body_string(get(&state, "/properties/2?q=flat&bedrooms=1", Some(&token)));
    assert!(body.contains(r#"href="/listings?q=flat&amp;bedrooms=1""#));
}

#[test]
fn unknown_property_is_not_found() {
    let state = test_state();
    let token = sign_in(&state);
    let req = Request::builder()
        .method(Method::GET)
        .uri("/properties/99")
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
}

#[test]
fn detail_requires_login() {
    let state = test_state();
    let resp = get(&state, "/properties/1", None);
    assert_eq!(location(&resp), "/login");
}

#[test]
fn call_redirects_to_tel_uri() {
    let state = test_state();
    let token = sign_in(&state);
    let resp = get(&state, "/properties/1/call", Some(&token));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "tel:+27821234567");
}

#[test]
fn whatsapp_from_detail_greets_landlord() {
    let state = test_state();
    let token = sign_in(&state);
    let resp = get(&state, "/properties/3/whatsapp", Some(&token));
    assert_eq!(resp.status(), 302);

    let loc = location(&resp);
    assert!(loc.starts_with("https://wa.me/27845557890?text="));
    let url = url::Url::parse(&loc).unwrap();
    let (_, text) = url.query_pairs().next().unwrap();
    assert_eq!(
        text,
        "Hi Sipho Khumalo, I'm interested in the property: Family Home with Garden. Can we schedule a viewing?"
    );
}

#[test]
fn whatsapp_from_listing_uses_short_message() {
    let state = test_state();
    let token = sign_in(&state);
    let resp = get(&state, "/properties/2/whatsapp?from=listing", Some(&token));

    let url = url::Url::parse(&location(&resp)).unwrap();
    assert_eq!(url.path(), "/27839876543");
    let (_, text) = url.query_pairs().next().unwrap();
    assert_eq!(text, "Hi, I'm interested in the property: Cozy Bachelor Flat");
}

#[test]
fn contact_redirects_keep_welcome_toast() {
    let state = test_state();
    let token = sign_in(&state);

    assert_eq!(get(&state, "/", Some(&token)).status(), 303);
    assert_eq!(get(&state, "/properties/1/call", Some(&token)).status(), 302);
    assert_eq!(get(&state, "/properties/1/whatsapp", Some(&token)).status(), 302);

    let body = body_string(get(&state, "/properties/1", Some(&token)));
    assert!(body.contains("Welcome back!"));
}
