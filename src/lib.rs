//! Cookie-based admin access gate.
//!
//! Two stateless handlers sit behind a host router:
//! - [`AuthChecker`]: answers an auth sub-request with `204` when the
//!   request's `Cookie` header carries the session marker, `401` when it does
//!   not, and `500` when the checker itself fails
//! - [`SessionIssuer`]: sets the marker cookie and redirects (`302`) back to
//!   the URI the client originally asked for
//!
//! The "session" is a single constant cookie, [`SessionMarker::ADMIN`]
//! (`ADMIN_OK=1`). There is no identity, no server-side store, and no
//! revocation. Anyone who knows the constant can forge it until the cookie's
//! `Max-Age` runs out, and the issuer grants it to anyone who can reach it.
//!
//! # Core Types
//!
//! - [`GateRequest`]: what the gate reads from the host request
//! - [`Verdict`] / [`Issuance`]: pure handler outcomes
//! - [`GateResponse`]: bodiless status plus `Set-Cookie` / `Location`
//! - [`Tainted<T>`]: untrusted request text
//! - [`Secret<T>`]: keeps the marker value out of logs
//!
//! # Examples
//!
//! ```
//! use admin_gate::web::RequestAdapter;
//! use admin_gate::{AuthChecker, SessionIssuer, Status};
//!
//! let checker = AuthChecker::new();
//! let issuer = SessionIssuer::new();
//!
//! // No cookie yet: denied
//! let first = RequestAdapter::new().with_original_uri("/admin/reports");
//! assert_eq!(checker.check(&first).status(), Status::Unauthorized);
//!
//! // The login location issues the marker and sends the client back
//! let issued = issuer.issue(&first);
//! assert_eq!(issued.status(), Status::Found);
//! assert_eq!(issued.location(), Some("/admin/reports"));
//!
//! // The browser returns the cookie pair: allowed
//! let cookie = issued.set_cookie().unwrap().split(';').next().unwrap();
//! let second = RequestAdapter::new().with_cookie_header(cookie);
//! assert_eq!(checker.check(&second).status(), Status::NoContent);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod cookie;
mod error;
mod issue;
mod logging;
mod marker;
mod redirect;
mod request;
mod response;
mod secret;
mod tainted;
mod verified;

#[cfg(test)]
mod test_utils;

pub mod web;

pub use check::{AuthChecker, Verdict};
pub use error::{Error, Fault, FaultKind};
pub use issue::{Issuance, SessionIssuer};
pub use marker::{CookieAttributes, SameSite, SessionMarker};
pub use redirect::DEFAULT_FALLBACK_LOCATION;
pub use request::GateRequest;
pub use response::{GateResponse, Status};
pub use secret::Secret;
pub use tainted::Tainted;
pub use verified::Verified;
