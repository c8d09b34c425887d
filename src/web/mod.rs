//! Host integration surface.
//!
//! The handlers only know [`GateRequest`](crate::GateRequest) and
//! [`GateResponse`](crate::GateResponse). This module supplies the glue for
//! the two common cases:
//!
//! - [`RequestAdapter`]: plain owned values, for hosts that already parsed
//!   their request (and for tests).
//! - `http` feature: [`GateRequest`](crate::GateRequest) for
//!   `http::Request<B>`, [`ProxiedRequest`] for requests whose original URI
//!   arrives in a trusted proxy header, plus [`check_http`] / [`issue_http`]
//!   that return an empty-bodied `http::Response<()>`.
//!
//! # Integration Model
//!
//! ```text
//! client ──▶ router ──(auth sub-request)──▶ check  ──▶ 204 / 401 / 500
//!              │ on 401
//!              └──(login location)────────▶ issue  ──▶ 302 + Set-Cookie / 500
//! ```
//!
//! Routing, TLS, and access control for the issue endpoint stay with the
//! router.

mod adapter;
#[cfg(feature = "http")]
mod http;

pub use adapter::RequestAdapter;
#[cfg(feature = "http")]
pub use self::http::{
    check_http, into_http_response, issue_http, ProxiedRequest, ORIGINAL_URI_HEADER,
};
