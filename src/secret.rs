use std::fmt;

/// A wrapper that keeps the session marker value out of formatted output.
///
/// The marker value is a shared constant: anyone who reads it can forge an
/// admin cookie. `Secret<T>` makes sure it never ends up in a log line or a
/// `Debug` dump of a handler by accident. The wrapped value can only be
/// reached through [`expose_secret`](Self::expose_secret).
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow`, `Clone`, or `Copy`
/// - Debug and Display output is always `[REDACTED]`
/// - No type information is leaked in formatted output
///
/// # Examples
///
/// ```
/// use admin_gate::Secret;
///
/// let value = Secret::new("1");
///
/// assert_eq!(format!("{:?}", value), "[REDACTED]");
/// assert_eq!(format!("{}", value), "[REDACTED]");
/// assert_eq!(*value.expose_secret(), "1");
/// ```
// BREAKING CHANGE WARNING: Do NOT add Clone, Copy, or Default derives.
// Copies of the marker value should only come from the marker itself.
pub struct Secret<T> {
    // BREAKING CHANGE WARNING: This field MUST remain private (CWE-532).
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value in a `Secret`.
    ///
    /// This is a `const fn` so markers can be declared as compile-time constants.
    pub const fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the secret value.
    ///
    /// The only callers inside this crate are cookie rendering and cookie
    /// matching. Never pass the result to a logging macro.
    pub const fn expose_secret(&self) -> &T {
        &self.inner
    }
}

// BREAKING CHANGE WARNING: Do NOT implement Deref, AsRef, Borrow, or a Debug/Display
// that shows the value. The ONLY access is expose_secret().

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
