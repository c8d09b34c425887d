use crate::error::Fault;

/// Operator diagnostics for one handler.
///
/// The handlers emit nothing on the normal allow/deny/issue paths; a missing
/// credential is ordinary traffic. The only event is a single `error` per
/// internal fault, tagged with the handler name and fault kind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GateLog {
    handler: &'static str,
}

impl GateLog {
    pub(crate) const CHECK: GateLog = GateLog { handler: "check" };
    pub(crate) const ISSUE: GateLog = GateLog { handler: "issue" };
    #[cfg(feature = "http")]
    pub(crate) const HTTP: GateLog = GateLog { handler: "http" };

    /// Logs a caught fault. Call exactly once per fault.
    pub(crate) fn fault(&self, fault: &Fault) {
        tracing::error!(
            handler = self.handler,
            kind = %fault.kind(),
            "admin gate {} failed: {}",
            self.handler,
            fault.message()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaultKind;
    use crate::test_utils::count_error_events;

    #[test]
    fn fault_emits_one_error_event() {
        let fault = Fault::new(FaultKind::HeaderAccess, "host lost the headers");
        let ((), errors) = count_error_events(|| GateLog::CHECK.fault(&fault));

        assert_eq!(errors, 1);
    }
}
