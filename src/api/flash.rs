use tower_cookies::{Cookie, Cookies};

const NOTICE_COOKIE: &str = "notice";

// One-shot notice: set on a redirect, consumed by the next rendered page.
// Values are percent-encoded to stay cookie-safe.
pub fn set_notice(cookies: &Cookies, message: &str) {
    let mut cookie = Cookie::new(NOTICE_COOKIE, urlencoding::encode(message).into_owned());
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookies.add(cookie);
}

pub fn take_notice(cookies: &Cookies) -> Option<String> {
    let value = cookies.get(NOTICE_COOKIE)?.value().to_string();
    cookies.remove(Cookie::build((NOTICE_COOKIE, "")).path("/").into());

    match urlencoding::decode(&value) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(value),
    }
}
