//! Adapters for hosts built on the `http` crate.

use http::header::{HeaderMap, COOKIE};
use http::{Request, Response, StatusCode};

use crate::check::AuthChecker;
use crate::error::{Fault, FaultKind};
use crate::issue::SessionIssuer;
use crate::logging::GateLog;
use crate::request::GateRequest;
use crate::response::GateResponse;
use crate::tainted::Tainted;

/// Header a reverse proxy uses to pass the URI of the request that triggered
/// the auth sub-request or the login redirect.
///
/// Only [`ProxiedRequest`] reads it. A client can send this header itself, so
/// the proxy in front of the gate must overwrite or strip it; otherwise any
/// visitor of the login location picks the `Location` the issuer redirects to.
pub const ORIGINAL_URI_HEADER: &str = "x-original-uri";

/// Reads the gate's fields from an `http::Request`.
///
/// - Several `Cookie` fields are joined with `"; "`.
/// - A `Cookie` value that is not visible ASCII is a
///   [`FaultKind::MalformedHeader`] fault.
/// - The original URI is the request's own target (path and query).
///   [`ORIGINAL_URI_HEADER`] is ignored; wrap the request in
///   [`ProxiedRequest`] to honour it.
impl<B> GateRequest for Request<B> {
    fn cookie_header(&self) -> Result<Option<Tainted<String>>, Fault> {
        joined_cookie_header(self.headers())
    }

    fn original_uri(&self) -> Result<Option<Tainted<String>>, Fault> {
        Ok(request_target(self))
    }
}

/// An `http::Request` whose original URI comes from a trusted proxy.
///
/// The original URI is [`ORIGINAL_URI_HEADER`] when present, otherwise the
/// request target. Use this only behind a proxy that sets or strips that
/// header on every request.
///
/// # Examples
///
/// ```
/// use admin_gate::web::{issue_http, ProxiedRequest, ORIGINAL_URI_HEADER};
/// use admin_gate::SessionIssuer;
///
/// let request = http::Request::builder()
///     .uri("/_admin_login")
///     .header(ORIGINAL_URI_HEADER, "/admin/reports")
///     .body(())
///     .unwrap();
///
/// let response = issue_http(&SessionIssuer::new(), &ProxiedRequest::new(&request));
/// assert_eq!(response.headers()["location"], "/admin/reports");
/// ```
#[derive(Debug)]
pub struct ProxiedRequest<'a, B> {
    request: &'a Request<B>,
}

impl<'a, B> ProxiedRequest<'a, B> {
    /// Wraps a request received from a trusted proxy.
    pub fn new(request: &'a Request<B>) -> Self {
        Self { request }
    }
}

impl<B> GateRequest for ProxiedRequest<'_, B> {
    fn cookie_header(&self) -> Result<Option<Tainted<String>>, Fault> {
        joined_cookie_header(self.request.headers())
    }

    fn original_uri(&self) -> Result<Option<Tainted<String>>, Fault> {
        let Some(value) = self.request.headers().get(ORIGINAL_URI_HEADER) else {
            return Ok(request_target(self.request));
        };
        let uri = value.to_str().map_err(|_| {
            Fault::new(
                FaultKind::MalformedHeader,
                "X-Original-URI header is not visible ASCII",
            )
        })?;
        Ok(Some(Tainted::new(uri.to_string())))
    }
}

fn request_target<B>(request: &Request<B>) -> Option<Tainted<String>> {
    request
        .uri()
        .path_and_query()
        .map(|target| Tainted::new(target.as_str().to_string()))
}

fn joined_cookie_header(headers: &HeaderMap) -> Result<Option<Tainted<String>>, Fault> {
    let mut joined: Option<String> = None;

    for value in headers.get_all(COOKIE) {
        let text = value.to_str().map_err(|_| {
            Fault::new(
                FaultKind::MalformedHeader,
                "Cookie header is not visible ASCII",
            )
        })?;

        match joined.as_mut() {
            Some(existing) => {
                existing.push_str("; ");
                existing.push_str(text);
            }
            None => joined = Some(text.to_string()),
        }
    }

    Ok(joined.map(Tainted::new))
}

/// Converts a gate response into an empty-bodied `http::Response`.
///
/// If the headers cannot be written the result is a bare `500`, and the
/// failure is logged once.
pub fn into_http_response(response: GateResponse) -> Response<()> {
    let mut builder = Response::builder().status(response.status().code());
    for (name, value) in response.headers() {
        builder = builder.header(name, value);
    }

    match builder.body(()) {
        Ok(response) => response,
        Err(err) => {
            GateLog::HTTP.fault(&Fault::new(
                FaultKind::ResponseComposition,
                err.to_string(),
            ));
            let mut fallback = Response::new(());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

/// Runs the auth check against an `http::Request`.
///
/// # Examples
///
/// ```
/// use admin_gate::web::check_http;
/// use admin_gate::AuthChecker;
///
/// let request = http::Request::builder()
///     .uri("/_auth")
///     .header("cookie", "foo=bar; ADMIN_OK=1")
///     .body(())
///     .unwrap();
///
/// let response = check_http(&AuthChecker::new(), &request);
/// assert_eq!(response.status(), http::StatusCode::NO_CONTENT);
/// ```
pub fn check_http<R>(checker: &AuthChecker, request: &R) -> Response<()>
where
    R: GateRequest + ?Sized,
{
    into_http_response(checker.check(request))
}

/// Issues the marker for an `http::Request` and redirects back.
///
/// A bare `http::Request` redirects to its own target. Pass a
/// [`ProxiedRequest`] to redirect to the proxy's [`ORIGINAL_URI_HEADER`].
///
/// # Examples
///
/// ```
/// use admin_gate::web::issue_http;
/// use admin_gate::SessionIssuer;
///
/// let request = http::Request::builder()
///     .uri("/admin/reports?week=12")
///     .body(())
///     .unwrap();
///
/// let response = issue_http(&SessionIssuer::new(), &request);
/// assert_eq!(response.status(), http::StatusCode::FOUND);
/// assert_eq!(response.headers()["location"], "/admin/reports?week=12");
/// ```
pub fn issue_http<R>(issuer: &SessionIssuer, request: &R) -> Response<()>
where
    R: GateRequest + ?Sized,
{
    into_http_response(issuer.issue(request))
}
