//! Till-session cookie
//!
//! The operator tier is carried in a plain cookie holding the employee id.
//! The cookie is not a credential by itself: every request re-validates the
//! id against the employee table under the current store session, so a
//! stale or forged id simply resolves to no operator.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Cookie name for the till-operator session
pub const EMPLOYEE_COOKIE: &str = "kams_pos_employee_id";

const EMPLOYEE_COOKIE_MAX_AGE: Duration = Duration::days(7);

/// Build the operator session cookie set on successful PIN verification
pub fn employee_cookie(employee_id: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((EMPLOYEE_COOKIE, employee_id.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(EMPLOYEE_COOKIE_MAX_AGE)
        .build()
}

/// Build an expired cookie that clears the operator session
pub fn clear_employee_cookie() -> Cookie<'static> {
    Cookie::build((EMPLOYEE_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_cookie_attributes() {
        let cookie = employee_cookie("employee:abc", true);
        assert_eq!(cookie.name(), EMPLOYEE_COOKIE);
        assert_eq!(cookie.value(), "employee:abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_employee_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
