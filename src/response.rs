//! The response the gate hands back to its host.

use std::fmt;

/// The four statuses the gate can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 204, the request carries the marker
    NoContent,
    /// 302, the marker was issued and the client is sent back
    Found,
    /// 401, no valid marker
    Unauthorized,
    /// 500, the gate itself failed
    InternalServerError,
}

impl Status {
    /// Returns the numeric status code.
    pub const fn code(self) -> u16 {
        match self {
            Status::NoContent => 204,
            Status::Found => 302,
            Status::Unauthorized => 401,
            Status::InternalServerError => 500,
        }
    }

    /// Returns the canonical reason phrase.
    pub const fn reason(self) -> &'static str {
        match self {
            Status::NoContent => "No Content",
            Status::Found => "Found",
            Status::Unauthorized => "Unauthorized",
            Status::InternalServerError => "Internal Server Error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// A bodiless response: a status plus at most one `Set-Cookie` and one
/// `Location` header.
///
/// There is no body field. Denials and faults never explain themselves to
/// the caller.
///
/// # Examples
///
/// ```
/// use admin_gate::{GateResponse, Status};
///
/// let response = GateResponse::new(Status::Unauthorized);
/// assert_eq!(response.status().code(), 401);
/// assert_eq!(response.headers().count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateResponse {
    status: Status,
    set_cookie: Option<String>,
    location: Option<String>,
}

impl GateResponse {
    /// Creates a response with no headers.
    pub fn new(status: Status) -> Self {
        Self {
            status,
            set_cookie: None,
            location: None,
        }
    }

    pub(crate) fn redirect(set_cookie: String, location: String) -> Self {
        Self {
            status: Status::Found,
            set_cookie: Some(set_cookie),
            location: Some(location),
        }
    }

    /// Returns the status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the `Set-Cookie` value, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.set_cookie.as_deref()
    }

    /// Returns the `Location` value, if any.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Iterates the headers to write, `Set-Cookie` first, then `Location`.
    pub fn headers(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        let set_cookie = self.set_cookie().map(|value| ("Set-Cookie", value));
        let location = self.location().map(|value| ("Location", value));
        set_cookie.into_iter().chain(location)
    }
}
