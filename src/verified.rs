/// A value that passed the gate's checks and is safe to write into a
/// response header.
///
/// The issuer only ever writes a `Verified<String>` into `Location`. There is
/// no public constructor: the only way to get one is through redirect
/// resolution, which rejects text that cannot be a header value.
///
/// # Examples
///
/// External callers cannot create `Verified<T>` directly:
///
/// ```compile_fail
/// use admin_gate::Verified;
///
/// let verified = Verified::new("/admin/".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Wraps a value without checking it.
    ///
    /// Callers must have validated the value first.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the `Verified<T>` and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}
