use crate::auth::Toast;
use crate::templates::layouts::app::{app_layout, APP_NAME, TAGLINE};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Signup,
}

/// Values echoed back into the form after a rejected submit. Passwords are
/// never echoed.
#[derive(Debug, Clone, Default)]
pub struct AuthPrefill {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

pub fn auth_page(tab: AuthTab, prefill: &AuthPrefill, flash: Option<&Toast>) -> Markup {
    app_layout(
        "Property Search",
        flash,
        html! {
            main class="container" style="max-width: 28rem;" {
                div class="card" {
                    h1 style="text-align: center;" { (APP_NAME) }
                    p class="muted" style="text-align: center;" { (TAGLINE) }

                    nav style="display: grid; grid-template-columns: 1fr 1fr; gap: 0.25rem;" {
                        a.btn.btn-primary[tab == AuthTab::Login] href="/login" { "Login" }
                        a.btn.btn-primary[tab == AuthTab::Signup] href="/signup" { "Sign Up" }
                    }

                    @match tab {
                        AuthTab::Login => { (login_form(prefill)) }
                        AuthTab::Signup => { (signup_form(prefill)) }
                    }
                }
            }
        },
    )
}

fn login_form(prefill: &AuthPrefill) -> Markup {
    html! {
        form method="post" action="/auth/login" style="display: grid; gap: 1rem; margin-top: 1.5rem;" {
            input type="email" name="email" placeholder="Email address" value=(prefill.email) required;
            input type="password" name="password" placeholder="Password" required;
            button type="submit" class="btn btn-primary" { "Login" }
            a href="/forgot-password" style="color: var(--accent); text-align: center;" { "Forgot Password?" }
        }
    }
}

fn signup_form(prefill: &AuthPrefill) -> Markup {
    html! {
        form method="post" action="/auth/signup" style="display: grid; gap: 1rem; margin-top: 1.5rem;" {
            input type="text" name="full_name" placeholder="Full Name" value=(prefill.full_name) required;
            input type="email" name="email" placeholder="Email address" value=(prefill.email) required;
            input type="tel" name="phone" placeholder="Phone Number" value=(prefill.phone) required;
            input type="password" name="password" placeholder="Password" required;
            button type="submit" class="btn btn-primary" { "Create Account" }
        }
    }
}
