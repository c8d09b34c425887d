//! Owned, framework-free request type.

use std::fmt;

use crate::error::Fault;
use crate::request::GateRequest;
use crate::tainted::Tainted;

/// A request assembled from plain values.
///
/// Hosts that already pulled the cookie header and original URI out of their
/// own request type can hand them over through `RequestAdapter` instead of
/// implementing [`GateRequest`] themselves. It never faults.
///
/// # Examples
///
/// ```
/// use admin_gate::web::RequestAdapter;
/// use admin_gate::{AuthChecker, SessionIssuer, Status};
///
/// let request = RequestAdapter::new()
///     .with_cookie_header("theme=dark")
///     .with_original_uri("/admin/reports");
///
/// assert_eq!(AuthChecker::new().check(&request).status(), Status::Unauthorized);
/// assert_eq!(
///     SessionIssuer::new().issue(&request).location(),
///     Some("/admin/reports")
/// );
/// ```
#[derive(Clone, Default)]
pub struct RequestAdapter {
    cookie_header: Option<Tainted<String>>,
    original_uri: Option<Tainted<String>>,
}

impl RequestAdapter {
    /// Creates a request with no cookie header and no original URI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw `Cookie` header, replacing any previous value.
    pub fn with_cookie_header(mut self, header: impl Into<String>) -> Self {
        self.cookie_header = Some(Tainted::new(header.into()));
        self
    }

    /// Appends one more `Cookie` header field, joined with `"; "`.
    ///
    /// HTTP/2 clients may split cookies across several fields.
    pub fn add_cookie_header(&mut self, header: impl Into<String>) {
        let header = header.into();
        self.cookie_header = Some(Tainted::new(match self.cookie_header.take() {
            Some(existing) => format!("{}; {}", existing.into_inner(), header),
            None => header,
        }));
    }

    /// Sets the original request URI.
    pub fn with_original_uri(mut self, uri: impl Into<String>) -> Self {
        self.original_uri = Some(Tainted::new(uri.into()));
        self
    }
}

impl GateRequest for RequestAdapter {
    fn cookie_header(&self) -> Result<Option<Tainted<String>>, Fault> {
        Ok(self.cookie_header.clone())
    }

    fn original_uri(&self) -> Result<Option<Tainted<String>>, Fault> {
        Ok(self.original_uri.clone())
    }
}

impl fmt::Debug for RequestAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestAdapter")
            .field("cookie_header", &self.cookie_header)
            .field("original_uri", &self.original_uri)
            .finish()
    }
}
