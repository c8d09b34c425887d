//! Admin gate request flow demonstration.
//!
//! This example walks one browser through the gate the way a reverse proxy
//! drives it:
//! 1. Auth sub-request without a cookie is denied (401)
//! 2. The login location issues the marker and redirects back (302)
//! 3. The next auth sub-request carries the cookie and is allowed (204)
//! 4. A broken host turns into a logged 500
//!
//! Run with: `cargo run --example admin_gate_flow`

use admin_gate::web::{check_http, issue_http, ProxiedRequest, ORIGINAL_URI_HEADER};
use admin_gate::{AuthChecker, Fault, FaultKind, GateRequest, SessionIssuer, Tainted};
use http::header::{COOKIE, LOCATION, SET_COOKIE};
use http::Request;

static CHECKER: AuthChecker = AuthChecker::new();
static ISSUER: SessionIssuer = SessionIssuer::new();

/// A host that lost its request context
struct BrokenHost;

impl GateRequest for BrokenHost {
    fn cookie_header(&self) -> Result<Option<Tainted<String>>, Fault> {
        Err(Fault::new(FaultKind::HeaderAccess, "request pool exhausted"))
    }

    fn original_uri(&self) -> Result<Option<Tainted<String>>, Fault> {
        Err(Fault::new(FaultKind::HeaderAccess, "request pool exhausted"))
    }
}

fn subrequest(cookie: Option<&str>) -> Result<Request<()>, http::Error> {
    let mut builder = Request::builder()
        .uri("/_admin_auth")
        .header(ORIGINAL_URI_HEADER, "/admin/reports");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("\n=== 1. First visit, no cookie ===");
    let denied = check_http(&CHECKER, &subrequest(None)?);
    println!("   auth sub-request -> {}", denied.status());

    println!("\n=== 2. Login location ===");
    let login = Request::builder()
        .uri("/_admin_login")
        .header(ORIGINAL_URI_HEADER, "/admin/reports")
        .body(())?;
    // The proxy overwrites X-Original-URI, so its value can be trusted
    let issued = issue_http(&ISSUER, &ProxiedRequest::new(&login));
    let set_cookie = issued.headers()[SET_COOKIE].to_str()?;
    println!("   login -> {}", issued.status());
    println!("   Set-Cookie: {}", set_cookie);
    println!("   Location: {}", issued.headers()[LOCATION].to_str()?);

    println!("\n=== 3. Back with the cookie ===");
    let pair = set_cookie.split(';').next().unwrap_or_default();
    let allowed = check_http(&CHECKER, &subrequest(Some(pair))?);
    println!("   auth sub-request -> {}", allowed.status());

    println!("\n=== 4. Broken host ===");
    let failed = CHECKER.check(&BrokenHost);
    println!("   auth sub-request -> {}", failed.status());

    Ok(())
}
