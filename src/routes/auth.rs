// src/routes/auth.rs
use crate::auth::mock::{ForgotPasswordForm, LoginForm, SignedIn, SignupForm};
use crate::auth::sessions::{clear_session_cookie, session_cookie};
use crate::auth::Toast;
use crate::responses::{
    html_response, html_response_with_status, see_other, see_other_with_cookie, ResultResp,
};
use crate::router::{current_user, read_form, session_token};
use crate::state::{now_unix, AppState};
use crate::templates::layouts::app::APP_NAME;
use crate::templates::pages::{self, AuthPrefill, AuthTab};
use astra::Request;
use tracing::info;

pub fn login_page(req: &Request, state: &AppState) -> ResultResp {
    auth_tab_page(req, state, AuthTab::Login)
}

pub fn signup_page(req: &Request, state: &AppState) -> ResultResp {
    auth_tab_page(req, state, AuthTab::Signup)
}

fn auth_tab_page(req: &Request, state: &AppState, tab: AuthTab) -> ResultResp {
    if current_user(req, state)?.is_some() {
        return see_other("/listings");
    }
    html_response(pages::auth_page(tab, &AuthPrefill::default(), None))
}

pub fn forgot_password_page() -> ResultResp {
    html_response(pages::forgot_password_page("", None))
}

pub fn login(req: Request, state: &AppState) -> ResultResp {
    let form = LoginForm::from_fields(&read_form(req)?);

    match state.auth.login(&form) {
        Ok(signed_in) => start_session(
            state,
            &signed_in,
            Toast::info("Welcome back!", "You have successfully logged in."),
        ),
        Err(rejected) => {
            let prefill = AuthPrefill {
                email: form.email,
                ..AuthPrefill::default()
            };
            let toast = Toast::error(rejected.0);
            html_response_with_status(
                400,
                pages::auth_page(AuthTab::Login, &prefill, Some(&toast)),
            )
        }
    }
}

pub fn signup(req: Request, state: &AppState) -> ResultResp {
    let form = SignupForm::from_fields(&read_form(req)?);

    match state.auth.signup(&form) {
        Ok(signed_in) => start_session(
            state,
            &signed_in,
            Toast::info("Account created!", &format!("Welcome to {APP_NAME}.")),
        ),
        Err(rejected) => {
            let prefill = AuthPrefill {
                full_name: form.full_name,
                email: form.email,
                phone: form.phone,
            };
            let toast = Toast::error(rejected.0);
            html_response_with_status(
                400,
                pages::auth_page(AuthTab::Signup, &prefill, Some(&toast)),
            )
        }
    }
}

pub fn forgot_password(req: Request, state: &AppState) -> ResultResp {
    let form = ForgotPasswordForm::from_fields(&read_form(req)?);

    match state.auth.forgot_password(&form) {
        Ok(email) => {
            let prefill = AuthPrefill {
                email,
                ..AuthPrefill::default()
            };
            let toast = Toast::info(
                "Reset link sent!",
                "Check your email for password reset instructions.",
            );
            html_response(pages::auth_page(AuthTab::Login, &prefill, Some(&toast)))
        }
        Err(rejected) => {
            let toast = Toast::error(rejected.0);
            html_response_with_status(400, pages::forgot_password_page(&form.email, Some(&toast)))
        }
    }
}

pub fn logout(req: &Request, state: &AppState) -> ResultResp {
    if let Some(token) = session_token(req) {
        if state.sessions.revoke(token)? {
            info!("session revoked");
        }
    }
    see_other_with_cookie("/login", &clear_session_cookie())
}

fn start_session(state: &AppState, signed_in: &SignedIn, welcome: Toast) -> ResultResp {
    let token = state.sessions.create(
        &signed_in.display_name,
        &signed_in.email,
        Some(welcome),
        now_unix(),
    )?;
    see_other_with_cookie("/listings", &session_cookie(&token, state.session_ttl_secs))
}
