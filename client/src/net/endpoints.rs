//! REST endpoint paths consumed by the UI.
//!
//! All paths are same-origin; the server proxies `/api/*` to the backend.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside the RFC 3986 unreserved set is escaped in an id.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub const LOGIN: &str = "/api/auth/login";
pub const REGISTER: &str = "/api/auth/register";
pub const ME: &str = "/api/auth/me";
pub const LOGOUT: &str = "/api/auth/logout";

pub const SERVICES: &str = "/api/services";
pub const PORTFOLIO: &str = "/api/portfolio";
pub const POSTS: &str = "/api/blog";
pub const PRODUCTS: &str = "/api/products";
pub const CONTACT: &str = "/api/contact";

pub const APPOINTMENTS: &str = "/api/appointments";
pub const QUOTATIONS: &str = "/api/quotations";
pub const ORDERS: &str = "/api/orders";
pub const MESSAGES: &str = "/api/messages";

pub const ADMIN_USERS: &str = "/api/admin/users";
pub const ADMIN_EMPLOYEES: &str = "/api/admin/employees";
pub const ADMIN_APPOINTMENTS: &str = "/api/admin/appointments";
pub const ADMIN_QUOTATIONS: &str = "/api/admin/quotations";
pub const ADMIN_TASKS: &str = "/api/admin/tasks";
pub const ADMIN_PRODUCTS: &str = "/api/admin/products";
pub const ADMIN_ORDERS: &str = "/api/admin/orders";
pub const ADMIN_POSTS: &str = "/api/admin/blog";
pub const ADMIN_ANALYTICS: &str = "/api/admin/analytics";

/// One path segment built from an untrusted id, e.g. a decoded route param.
///
/// Separators, `?` and `#` are percent-encoded. URL parsing collapses a
/// dot-only segment even when its dots are encoded, so those are escaped
/// twice and reach the backend as a literal id.
#[must_use]
pub fn segment(id: &str) -> String {
    if !id.is_empty() && id.chars().all(|c| c == '.') {
        return "%252E".repeat(id.len());
    }
    utf8_percent_encode(id, SEGMENT).to_string()
}

/// `{base}/{id}` for a single resource.
#[must_use]
pub fn item(base: &str, id: &str) -> String {
    format!("{base}/{}", segment(id))
}

/// `{base}/{id}/{action}` for a resource sub-action (status, cancel, respond).
#[must_use]
pub fn action(base: &str, id: &str, action: &str) -> String {
    format!("{base}/{}/{action}", segment(id))
}

#[must_use]
pub fn post(slug: &str) -> String {
    item(POSTS, slug)
}

#[must_use]
pub fn product(id: &str) -> String {
    item(PRODUCTS, id)
}

#[must_use]
pub fn appointment_cancel(id: &str) -> String {
    action(APPOINTMENTS, id, "cancel")
}

#[must_use]
pub fn quotation_response(id: &str) -> String {
    action(QUOTATIONS, id, "respond")
}

#[must_use]
pub fn order(id: &str) -> String {
    item(ORDERS, id)
}

/// Collection path used to create (`id` empty) or item path used to update.
#[must_use]
pub fn save_target(base: &str, id: &str) -> String {
    if id.trim().is_empty() { base.to_owned() } else { item(base, id) }
}
