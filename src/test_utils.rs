//! Shared helpers for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::error::{Fault, FaultKind};
use crate::request::GateRequest;
use crate::tainted::Tainted;

/// Counts `ERROR` events seen while it is installed.
#[derive(Debug, Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Runs `f` with a scoped subscriber and returns its result together with the
/// number of `ERROR` events it emitted.
pub(crate) fn count_error_events<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, counter.0.load(Ordering::SeqCst))
}

/// A host whose header access breaks.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingRequest {
    cookie_fails: bool,
    uri_fails: bool,
}

impl FailingRequest {
    pub(crate) fn cookie() -> Self {
        Self {
            cookie_fails: true,
            uri_fails: false,
        }
    }

    pub(crate) fn uri() -> Self {
        Self {
            cookie_fails: false,
            uri_fails: true,
        }
    }
}

impl GateRequest for FailingRequest {
    fn cookie_header(&self) -> Result<Option<Tainted<String>>, Fault> {
        if self.cookie_fails {
            return Err(Fault::new(FaultKind::HeaderAccess, "host header map unavailable"));
        }
        Ok(None)
    }

    fn original_uri(&self) -> Result<Option<Tainted<String>>, Fault> {
        if self.uri_fails {
            return Err(Fault::new(FaultKind::HeaderAccess, "host request URI unavailable"));
        }
        Ok(None)
    }
}

/// Strategy: RFC 6265 cookie names
pub(crate) fn arb_cookie_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_.-]{1,12}").unwrap()
}

/// Strategy: RFC 6265 cookie values
pub(crate) fn arb_cookie_value() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_=./-]{1,12}").unwrap()
}

/// Strategy: whitespace that may surround a pair
pub(crate) fn arb_whitespace() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t]{0,3}").unwrap()
}

/// Strategy: `name=value` pairs that are never the admin marker
pub(crate) fn arb_foreign_pairs() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        (arb_cookie_name(), arb_cookie_value())
            .prop_filter("must not be the admin marker", |(name, value)| {
                !(name == "ADMIN_OK" && value == "1")
            })
            .prop_map(|(name, value)| format!("{}={}", name, value)),
        0..6,
    )
}
