use std::fmt;

/// Errors raised while configuring the gate.
///
/// Request handling never returns this type; per-request problems are
/// reported as a [`Fault`] inside the handler's outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A session marker, cookie attribute or fallback location cannot be
    /// written into a response header
    InvalidCookie {
        /// Which rule was broken
        reason: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCookie { reason } => {
                write!(f, "Invalid cookie configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {}

/// An internal fault: the gate itself broke, as opposed to a caller
/// presenting no credential.
///
/// Faults are answered with `500 Internal Server Error` and logged once.
/// The message is for operators only. It must not carry raw request text
/// or the marker value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    kind: FaultKind,
    message: String,
}

impl Fault {
    /// Creates a new fault.
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the fault kind.
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Returns the operator-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Fault {}

/// The kind of internal fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// The host failed while handing over a request field
    HeaderAccess,
    /// A request header held bytes that are not valid header text
    MalformedHeader,
    /// The redirect target cannot be written as a `Location` header
    RedirectTarget,
    /// The response could not be assembled
    ResponseComposition,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::HeaderAccess => write!(f, "header access"),
            FaultKind::MalformedHeader => write!(f, "malformed header"),
            FaultKind::RedirectTarget => write!(f, "redirect target"),
            FaultKind::ResponseComposition => write!(f, "response composition"),
        }
    }
}
