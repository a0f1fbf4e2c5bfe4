use crate::tests::utils::{body_string, get, location, post_form, sign_in, test_state};

#[test]
fn root_redirects_to_login_without_session() {
    let state = test_state();
    let resp = get(&state, "/", None);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login");
}

#[test]
fn root_redirects_to_listings_with_session() {
    let state = test_state();
    let token = sign_in(&state);
    let resp = get(&state, "/", Some(&token));
    assert_eq!(location(&resp), "/listings");
}

#[test]
fn login_page_loads_successfully() {
    let state = test_state();
    let resp = get(&state, "/login", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("eKasiKwaMastende"));
    assert!(body.contains("Connecting Landlords and Tenants in South African Townships"));
    assert!(body.contains(r#"action="/auth/login""#));
    assert!(body.contains("Forgot Password?"));
}

#[test]
fn signup_page_shows_all_fields() {
    let state = test_state();
    let body = body_string(get(&state, "/signup", None));
    for name in ["full_name", "email", "phone", "password"] {
        assert!(body.contains(&format!(r#"name="{name}""#)), "missing {name}");
    }
    assert!(body.contains("Create Account"));
}

#[test]
fn login_sets_cookie_and_shows_welcome_once() {
    let state = test_state();
    let token = sign_in(&state);

    let first = body_string(get(&state, "/listings", Some(&token)));
    assert!(first.contains("Welcome back!"));
    assert!(first.contains("tenant@example.com"));

    let second = body_string(get(&state, "/listings", Some(&token)));
    assert!(!second.contains("Welcome back!"));
}

#[test]
fn login_with_blank_password_rerenders_form_with_error() {
    let state = test_state();
    let resp = post_form(&state, "/auth/login", "email=a%40b.com&password=", None);
    assert_eq!(resp.status(), 400);
    assert!(resp.headers().get("Set-Cookie").is_none());

    let body = body_string(resp);
    assert!(body.contains("Please fill in all fields."));
    assert!(body.contains(r#"value="a@b.com""#));
    assert_eq!(state.sessions.len().unwrap(), 0);
}

#[test]
fn signup_creates_session_named_after_user() {
    let state = test_state();
    let resp = post_form(
        &state,
        "/auth/signup",
        "full_name=Lerato+Mokoena&email=lerato%40example.com&phone=%2B27+82+000+0000&password=pw",
        None,
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/listings");

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.contains("HttpOnly"));
    let token = cookie
        .strip_prefix("session=")
        .and_then(|c| c.split(';').next())
        .unwrap();

    let body = body_string(get(&state, "/listings", Some(token)));
    assert!(body.contains("Account created!"));
    assert!(body.contains("Lerato Mokoena"));
}

#[test]
fn signup_missing_phone_is_rejected() {
    let state = test_state();
    let resp = post_form(
        &state,
        "/auth/signup",
        "full_name=Lerato&email=l%40x.com&password=pw",
        None,
    );
    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Please fill in all fields."));
    assert!(body.contains(r#"value="Lerato""#));
}

#[test]
fn forgot_password_confirms_and_returns_to_login() {
    let state = test_state();
    let resp = post_form(&state, "/auth/forgot-password", "email=a%40b.com", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Reset link sent!"));
    assert!(body.contains(r#"action="/auth/login""#));
}

#[test]
fn forgot_password_without_email_stays_on_reset_form() {
    let state = test_state();
    let resp = post_form(&state, "/auth/forgot-password", "email=+", None);
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("Please enter your email address."));
    assert!(body.contains("Send Reset Link"));
}

#[test]
fn logout_revokes_session() {
    let state = test_state();
    let token = sign_in(&state);

    let resp = post_form(&state, "/auth/logout", "", Some(&token));
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login");

    let after = get(&state, "/listings", Some(&token));
    assert_eq!(after.status(), 303);
    assert_eq!(location(&after), "/login");
}

#[test]
fn login_page_redirects_when_signed_in() {
    let state = test_state();
    let token = sign_in(&state);
    let resp = get(&state, "/login", Some(&token));
    assert_eq!(location(&resp), "/listings");
}
