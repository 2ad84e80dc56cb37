//! Logger interface for request diagnostics
//!
//! The client accepts any logger implementing [`ApiLogger`]; the default is
//! a no-op. [`TracingLogger`] forwards everything to the `tracing`
//! ecosystem, collapsing the syslog severities onto tracing's five levels.

use std::fmt::Debug;

/// Syslog-style severity for [`ApiLogger::log`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

/// Structural logging interface injected into the client.
///
/// Every method has a no-op default, so implementors only override the
/// severities they care about.
pub trait ApiLogger: Send + Sync + Debug {
    fn emergency(&self, message: &str) {
        self.log(Severity::Emergency, message);
    }
    fn alert(&self, message: &str) {
        self.log(Severity::Alert, message);
    }
    fn critical(&self, message: &str) {
        self.log(Severity::Critical, message);
    }
    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
    fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }
    fn notice(&self, message: &str) {
        self.log(Severity::Notice, message);
    }
    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }
    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    /// Log a message at an arbitrary severity
    fn log(&self, severity: Severity, message: &str);
}

/// Logger that discards everything. The default when none is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl ApiLogger for NoopLogger {
    fn log(&self, _severity: Severity, _message: &str) {}
}

/// Logger that forwards to the `tracing` ecosystem
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ApiLogger for TracingLogger {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
                tracing::error!("{message}");
            }
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Notice | Severity::Info => tracing::info!("{message}"),
            Severity::Debug => tracing::debug!("{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct CapturingLogger {
        entries: Mutex<Vec<(Severity, String)>>,
    }

    impl ApiLogger for CapturingLogger {
        fn log(&self, severity: Severity, message: &str) {
            self.entries
                .lock()
                .unwrap()
                .push((severity, message.to_string()));
        }
    }

    #[test]
    fn test_default_methods_route_through_log() {
        let logger = CapturingLogger::default();
        logger.warning("slow response");
        logger.debug("request sent");

        let entries = logger.entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (Severity::Warning, "slow response".to_string()));
        assert_eq!(entries[1], (Severity::Debug, "request sent".to_string()));
    }

    #[test]
    fn test_noop_logger_accepts_everything() {
        let logger = NoopLogger;
        logger.emergency("ignored");
        logger.log(Severity::Info, "ignored");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Emergency < Severity::Debug);
        assert!(Severity::Error < Severity::Warning);
    }
}
