use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, location, sign_in, test_state};
use astra::Body;
use http::{Method, Request};

fn card_count(body: &str) -> usize {
    body.matches(r#"class="card property-card""#).count()
}

#[test]
fn listings_require_login() {
    let state = test_state();
    let resp = get(&state, "/listings", None);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login");

    let resp = get(&state, "/listings", Some("forged-token"));
    assert_eq!(location(&resp), "/login");
}

#[test]
fn default_listing_shows_all_properties_in_order() {
    let state = test_state();
    let token = sign_in(&state);
    let body = body_string(get(&state, "/listings", Some(&token)));

    assert_eq!(card_count(&body), 5);
    assert!(body.contains("5 properties found"));

    let positions: Vec<usize> = (1..=5)
        .map(|id| body.find(&format!(r#"id="property-{id}""#)).expect("card rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!body.contains("data-active-filters"));
}

#[test]
fn search_soweto_finds_one() {
    let state = test_state();
    let token = sign_in(&state);
    let body = body_string(get(&state, "/listings?q=soweto", Some(&token)));

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("1 property found"));
    assert!(body.contains("Modern 2-Bedroom House"));
    assert!(body.contains("R3,500/month"));
}

#[test]
fn four_bedrooms_finds_khayelitsha_only() {
    let state = test_state();
    let token = sign_in(&state);
    let body = body_string(get(&state, "/listings?bedrooms=4", Some(&token)));

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Spacious 4-Bedroom House"));
    assert!(body.contains(r#"data-active-filters="1""#));
    assert!(body.contains("4 beds"));
}

#[test]
fn tembisa_under_three_thousand_shows_empty_state() {
    let state = test_state();
    let token = sign_in(&state);
    let body = body_string(get(
        &state,
        "/listings?township=Tembisa&min_price=1000&max_price=3000",
        Some(&token),
    ));

    assert_eq!(card_count(&body), 0);
    assert!(body.contains("0 properties found"));
    assert!(body.contains("No properties found matching your search criteria."));
    assert!(body.contains("Clear All Filters"));
    assert!(body.contains(r#"data-active-filters="2""#));
    assert!(body.contains("R1,000 - R3,000"));
}

#[test]
fn clear_filters_link_keeps_search() {
    let state = test_state();
    let token = sign_in(&state);
    let body = body_string(get(
        &state,
        "/listings?q=flat&township=Tembisa",
        Some(&token),
    ));
    assert!(body.contains(r#"href="/listings?q=flat""#));
}

#[test]
fn invalid_filter_values_are_bad_requests() {
    let state = test_state();
    let token = sign_in(&state);

    for uri in [
        "/listings?township=Durban",
        "/listings?bedrooms=4%2B",
        "/listings?min_price=abc",
        "/listings?min_price=9000&max_price=2000",
    ] {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header("Cookie", format!("session={token}"))
            .body(Body::empty())
            .unwrap();
        match handle(req, &state) {
            Err(ServerError::BadRequest(_)) => {}
            other => panic!("{uri}: expected BadRequest, got {:?}", other.map(|r| r.status())),
        }
    }
}

#[test]
fn bottom_nav_highlights_tab() {
    let state = test_state();
    let token = sign_in(&state);
    let body = body_string(get(&state, "/listings?tab=help", Some(&token)));
    assert_eq!(body.matches(r#"class="active""#).count(), 1);
    let active = body.find(r#"class="active""#).unwrap();
    let tag_end = active + body[active..].find("</a>").unwrap();
    assert!(body[active..tag_end].contains("Help Center"));
}

#[test]
fn api_returns_filtered_json() {
    let state = test_state();
    let token = sign_in(&state);
    let resp = get(&state, "/api/properties?bathrooms=2", Some(&token));
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["active_filters"], 1);
    assert_eq!(json["properties"][0]["id"], "3");
    assert_eq!(json["properties"][1]["township"], "Khayelitsha");
}

#[test]
fn api_requires_session() {
    let state = test_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/properties")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &state), Err(ServerError::Unauthorized(_))));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
}

#[test]
fn padded_search_is_matched_as_typed() {
    let state = test_state();
    let token = sign_in(&state);

    let body = body_string(get(&state, "/listings?q=house%20", Some(&token)));
    assert_eq!(card_count(&body), 0);
    assert!(body.contains("0 properties found"));
    assert!(body.contains(r#"value="house ""#));

    let body = body_string(get(&state, "/listings?q=%20%20", Some(&token)));
    assert_eq!(card_count(&body), 0);
}

#[test]
fn api_call_keeps_welcome_toast_for_the_page() {
    let state = test_state();
    let token = sign_in(&state);

    assert_eq!(get(&state, "/api/properties", Some(&token)).status(), 200);
    let body = body_string(get(&state, "/listings", Some(&token)));
    assert!(body.contains("Welcome back!"));
}

#[test]
fn header_carries_signed_in_email() {
    let state = test_state();
    let token = sign_in(&state);
    let body = body_string(get(&state, "/listings", Some(&token)));
    assert!(body.contains(r#"title="tenant@example.com""#));
}
