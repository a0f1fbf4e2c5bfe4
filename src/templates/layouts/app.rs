use crate::auth::Toast;
use crate::templates::components::toast;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const APP_NAME: &str = "eKasiKwaMastende";
pub const TAGLINE: &str = "Connecting Landlords and Tenants in South African Townships";

const STYLES: &str = r#"
:root { --accent: #fe5228; --accent-hover: #e04620; --bg: #0d0d0d; --panel: #1a1a1a; --field: #2a2a2a; --muted: #9ca3af; --line: #1f2937; }
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: #fff; font-family: "Red Hat Display", system-ui, sans-serif; }
a { color: inherit; }
.container { max-width: 40rem; margin: 0 auto; padding: 1rem 1rem 5rem; }
.card { background: var(--panel); border: 1px solid var(--line); border-radius: 0.75rem; padding: 1rem; margin-bottom: 1rem; }
.muted { color: var(--muted); }
.btn { display: inline-block; padding: 0.6rem 1rem; border-radius: 0.5rem; border: 1px solid #374151; background: transparent; color: #fff; text-decoration: none; cursor: pointer; text-align: center; }
.btn-primary { background: var(--accent); border-color: var(--accent); }
.btn-primary:hover { background: var(--accent-hover); }
.badge { display: inline-block; background: var(--field); border-radius: 999px; padding: 0.1rem 0.6rem; font-size: 0.8rem; }
.badge-accent { background: var(--accent); }
input, select { width: 100%; padding: 0.6rem; background: var(--field); color: #fff; border: 1px solid #374151; border-radius: 0.5rem; }
.toast { border-radius: 0.5rem; padding: 0.75rem 1rem; margin-bottom: 1rem; background: var(--panel); border: 1px solid var(--line); }
.toast-destructive { border-color: #b91c1c; background: #3f1111; }
.bottom-nav { position: fixed; bottom: 0; left: 0; right: 0; display: flex; justify-content: space-around; background: var(--panel); border-top: 1px solid var(--line); padding: 0.5rem; }
.bottom-nav a { text-decoration: none; color: var(--muted); }
.bottom-nav a.active { color: var(--accent); }
"#;

pub fn app_layout(title: &str, flash: Option<&Toast>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="dark" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(TAGLINE);
                title { (title) " - " (APP_NAME) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                @if let Some(t) = flash {
                    div class="container" style="padding-bottom: 0;" { (toast(t)) }
                }
                (content)
            }
        }
    }
}
