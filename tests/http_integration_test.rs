//! The gate driven through `http::Request` / `http::Response`, the way a
//! proxy sidecar would mount it.

#![cfg(feature = "http")]

use admin_gate::web::{check_http, issue_http, ProxiedRequest, ORIGINAL_URI_HEADER};
use admin_gate::{AuthChecker, SessionIssuer};
use http::header::{COOKIE, LOCATION, SET_COOKIE};
use http::{Request, StatusCode};

fn auth_subrequest(cookies: &[&str]) -> Request<()> {
    let mut builder = Request::builder()
        .uri("/_admin_auth")
        .header(ORIGINAL_URI_HEADER, "/admin/reports");
    for cookie in cookies {
        builder = builder.header(COOKIE, *cookie);
    }
    builder.body(()).expect("valid request")
}

#[test]
fn subrequest_with_marker_gets_204_without_body_or_headers() {
    let response = check_http(&AuthChecker::new(), &auth_subrequest(&["ADMIN_OK=1"]));

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.headers().is_empty());
    assert_eq!(response.body(), &());
}

#[test]
fn subrequest_without_marker_gets_401() {
    let checker = AuthChecker::new();

    let cases: [&[&str]; 3] = [&[], &["ADMIN_OK=12"], &["session=abc", "ADMIN_OK=0"]];

    for cookies in cases {
        let response = check_http(&checker, &auth_subrequest(cookies));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().is_empty());
    }
}

#[test]
fn marker_in_second_cookie_field_is_found() {
    let response = check_http(
        &AuthChecker::new(),
        &auth_subrequest(&["theme=dark", "ADMIN_OK=1"]),
    );

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[test]
fn login_redirect_uses_proxy_original_uri() {
    let request = Request::builder()
        .uri("/_admin_login")
        .header(ORIGINAL_URI_HEADER, "/admin/reports?range=7d")
        .body(())
        .expect("valid request");

    let response = issue_http(&SessionIssuer::new(), &ProxiedRequest::new(&request));

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/admin/reports?range=7d");
    assert_eq!(
        response.headers()[SET_COOKIE],
        "ADMIN_OK=1; Path=/; Max-Age=3600; HttpOnly; Secure; SameSite=Lax"
    );
}

#[test]
fn client_supplied_original_uri_does_not_steer_the_redirect() {
    let request = Request::builder()
        .uri("/_admin_login")
        .header(ORIGINAL_URI_HEADER, "https://evil.example/")
        .body(())
        .expect("valid request");

    let response = issue_http(&SessionIssuer::new(), &request);

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/_admin_login");
}

#[test]
fn issued_cookie_passes_the_next_subrequest() {
    let login = Request::builder()
        .uri("/admin/")
        .body(())
        .expect("valid request");
    let issued = issue_http(&SessionIssuer::new(), &login);

    let set_cookie = issued.headers()[SET_COOKIE]
        .to_str()
        .expect("ASCII cookie");
    let pair = set_cookie.split(';').next().expect("pair first");

    let response = check_http(&AuthChecker::new(), &auth_subrequest(&[pair]));
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
