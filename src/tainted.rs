use std::fmt;

/// A wrapper for attacker-controlled request text.
///
/// The cookie header and the original request URI arrive as `Tainted<String>`.
/// Host adapters can wrap values, but only the gate's own parsing and redirect
/// resolution can read them back out.
///
/// # Security Properties
///
/// - Does NOT implement `Deref` or any implicit conversion traits
/// - Inner value is inaccessible outside this crate
/// - `Debug` output does not echo the value, so a logged request cannot
///   replay a forged cookie into the log stream
///
/// # Examples
///
/// ```
/// use admin_gate::Tainted;
///
/// let cookie = Tainted::new("ADMIN_OK=1; theme=dark".to_string());
/// assert_eq!(format!("{:?}", cookie), "Tainted { len: 22 }");
///
/// // The value cannot be used directly:
/// // let text: String = cookie; // Won't compile!
/// ```
// BREAKING CHANGE WARNING: Do NOT remove Clone - adapters duplicate headers when joining them.
#[derive(Clone)]
pub struct Tainted<T> {
    // BREAKING CHANGE WARNING: This field MUST remain private (CWE-20).
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an untrusted value in `Tainted`.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the inner value for parsing.
    ///
    /// Only cookie parsing and redirect resolution call this.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }

    /// Borrows the inner value for parsing without consuming the wrapper.
    pub(crate) fn as_inner(&self) -> &T {
        &self.inner
    }
}

impl<T: AsRef<str>> Tainted<T> {
    /// Returns `true` if the wrapped text is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.as_ref().is_empty()
    }
}

// BREAKING CHANGE WARNING: Do NOT add Deref, AsRef, Borrow, From<T>, or Into<T>.

impl<T: AsRef<str>> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("len", &self.inner.as_ref().len())
            .finish()
    }
}
