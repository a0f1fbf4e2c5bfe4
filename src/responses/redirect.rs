// responses/redirect.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 303 See Other: after a form post, or when a page needs a session.
pub fn see_other(location: &str) -> ResultResp {
    redirect(303, location, None)
}

/// 303 that also sets a cookie (sign in, sign out).
pub fn see_other_with_cookie(location: &str, cookie: &str) -> ResultResp {
    redirect(303, location, Some(cookie))
}

/// 302 Found: hands the browser off to a `tel:` or WhatsApp URI.
pub fn found(location: &str) -> ResultResp {
    redirect(302, location, None)
}

fn redirect(status: u16, location: &str, cookie: Option<&str>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(status)
        .header("Location", location);
    if let Some(cookie) = cookie {
        builder = builder.header("Set-Cookie", cookie);
    }
    builder
        .body(Body::empty())
        .map_err(|e| ServerError::InternalError(format!("build redirect: {e}")))
}
