//! The session marker and the attributes it is issued with.
//!
//! The marker is a fixed `name=value` pair. Holding it is the whole of the
//! admin "session": there is no identity behind it, no server-side lookup,
//! and no revocation. Its expiry is whatever `Max-Age` the browser honours.

use std::fmt;
use std::time::Duration;

use crate::error::Error;
use crate::secret::Secret;

/// The fixed cookie name/value pair that proves admin access.
///
/// Markers are start-up constants. [`SessionMarker::new`] only accepts
/// `&'static str`, so a marker can never be derived from request content.
///
/// # Examples
///
/// ```
/// use admin_gate::SessionMarker;
///
/// let marker = SessionMarker::ADMIN;
/// assert_eq!(marker.name(), "ADMIN_OK");
/// assert_eq!(marker.cookie_pair(), "ADMIN_OK=1");
///
/// // The value never shows up in Debug output
/// assert!(!format!("{:?}", marker).contains("=1"));
/// ```
#[derive(Debug)]
pub struct SessionMarker {
    name: &'static str,
    value: Secret<&'static str>,
}

impl SessionMarker {
    /// The admin marker, `ADMIN_OK=1`.
    pub const ADMIN: SessionMarker = SessionMarker {
        name: "ADMIN_OK",
        value: Secret::new("1"),
    };

    /// Creates a custom marker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCookie`] if `name` is not an RFC 6265 cookie
    /// name (an HTTP token) or `value` is not a run of cookie-octets. Both
    /// must be non-empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_gate::SessionMarker;
    ///
    /// assert!(SessionMarker::new("OPS_OK", "yes").is_ok());
    /// assert!(SessionMarker::new("OPS OK", "yes").is_err());
    /// assert!(SessionMarker::new("OPS_OK", "a;b").is_err());
    /// ```
    pub fn new(name: &'static str, value: &'static str) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::InvalidCookie {
                reason: "marker name is empty",
            });
        }
        if !name.bytes().all(is_token_byte) {
            return Err(Error::InvalidCookie {
                reason: "marker name is not an HTTP token",
            });
        }
        if value.is_empty() {
            return Err(Error::InvalidCookie {
                reason: "marker value is empty",
            });
        }
        if !value.bytes().all(is_cookie_octet) {
            return Err(Error::InvalidCookie {
                reason: "marker value contains characters not allowed in a cookie",
            });
        }

        Ok(Self {
            name,
            value: Secret::new(value),
        })
    }

    /// Returns the cookie name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Renders the `name=value` pair exactly as a client sends it back in
    /// its `Cookie` header.
    pub fn cookie_pair(&self) -> String {
        format!("{}={}", self.name, self.value.expose_secret())
    }

    /// Renders the `Set-Cookie` header value for this marker.
    ///
    /// Attributes always appear in the order Path, Max-Age, HttpOnly, Secure,
    /// SameSite. Flags that are switched off are left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_gate::{CookieAttributes, SessionMarker};
    ///
    /// assert_eq!(
    ///     SessionMarker::ADMIN.set_cookie(&CookieAttributes::DEFAULT),
    ///     "ADMIN_OK=1; Path=/; Max-Age=3600; HttpOnly; Secure; SameSite=Lax"
    /// );
    /// ```
    pub fn set_cookie(&self, attributes: &CookieAttributes) -> String {
        let mut header = format!(
            "{}; Path={}; Max-Age={}",
            self.cookie_pair(),
            attributes.path,
            attributes.max_age.as_secs()
        );
        if attributes.http_only {
            header.push_str("; HttpOnly");
        }
        if attributes.secure {
            header.push_str("; Secure");
        }
        header.push_str("; SameSite=");
        header.push_str(attributes.same_site.as_str());
        header
    }

    /// Exact, case-sensitive comparison against one parsed cookie pair.
    pub(crate) fn matches(&self, name: &str, value: &str) -> bool {
        self.name == name && *self.value.expose_secret() == value
    }
}

/// The cookie attributes the marker is issued with.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use admin_gate::{CookieAttributes, SameSite, SessionMarker};
///
/// let attributes = CookieAttributes::DEFAULT
///     .with_max_age(Duration::from_secs(600))
///     .with_same_site(SameSite::Strict);
///
/// assert_eq!(
///     SessionMarker::ADMIN.set_cookie(&attributes),
///     "ADMIN_OK=1; Path=/; Max-Age=600; HttpOnly; Secure; SameSite=Strict"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieAttributes {
    path: &'static str,
    max_age: Duration,
    http_only: bool,
    secure: bool,
    same_site: SameSite,
}

impl CookieAttributes {
    /// `Path=/; Max-Age=3600; HttpOnly; Secure; SameSite=Lax`
    pub const DEFAULT: CookieAttributes = CookieAttributes {
        path: "/",
        max_age: Duration::from_secs(3600),
        http_only: true,
        secure: true,
        same_site: SameSite::Lax,
    };

    /// Scopes the cookie to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCookie`] unless `path` starts with `/` and is
    /// free of `;` and control characters.
    pub fn with_path(self, path: &'static str) -> Result<Self, Error> {
        if !path.starts_with('/') {
            return Err(Error::InvalidCookie {
                reason: "cookie path must start with '/'",
            });
        }
        if path.chars().any(|c| c == ';' || c.is_control()) {
            return Err(Error::InvalidCookie {
                reason: "cookie path contains ';' or control characters",
            });
        }
        Ok(Self { path, ..self })
    }

    /// Sets the time-to-live. Sub-second precision is dropped when rendered.
    pub const fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Sets the HttpOnly flag.
    pub const fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// Sets the Secure flag.
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Sets the SameSite policy.
    pub const fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Returns the cookie path.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the time-to-live.
    pub fn max_age(&self) -> Duration {
        self.max_age
    }
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The `SameSite` cookie policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// Never sent on cross-site requests
    Strict,
    /// Sent on top-level cross-site navigations only
    Lax,
    /// Sent on all requests
    None,
}

impl SameSite {
    /// Returns the attribute value as written in `Set-Cookie`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// tchar from RFC 7230 section 3.2.6
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

// cookie-octet from RFC 6265 section 4.1.1
fn is_cookie_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}
