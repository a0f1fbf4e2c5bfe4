use crate::auth::Toast;
use crate::templates::layouts::app::app_layout;
use maud::{html, Markup};

pub fn forgot_password_page(email: &str, flash: Option<&Toast>) -> Markup {
    app_layout(
        "Reset Password",
        flash,
        html! {
            main class="container" style="max-width: 28rem;" {
                div class="card" {
                    h1 style="text-align: center;" { "Reset Password" }
                    p class="muted" style="text-align: center;" { "Enter your email to reset your password" }

                    form method="post" action="/auth/forgot-password" style="display: grid; gap: 1rem;" {
                        input type="email" name="email" placeholder="Email address" value=(email) required;
                        button type="submit" class="btn btn-primary" { "Send Reset Link" }
                        a class="btn" href="/login" { "Back to Login" }
                    }
                }
            }
        },
    )
}
