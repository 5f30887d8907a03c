//! Scan verdict model.
//!
//! A [`Report`] is created per analysis run and only ever escalates: once a
//! finding raises the severity, nothing lowers it again. Finalizing a report
//! without findings yields the single synthetic no-indicators reason, so
//! consumers never see an empty reason list.

/// Reason attached to a report that carried no findings.
pub const NO_INDICATORS: &str = "No MITM indicators detected";

/// Verdict levels. The derived order is `Ok < Warning < Danger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Danger => "DANGER",
        }
    }
}

/// Outcome of one analysis run: the final severity plus every reason in the
/// order it was raised.
///
/// Fields stay private so the only way up is [`Report::raise`] and there is
/// no way down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    severity: Severity,
    reasons: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            severity: Severity::Ok,
            reasons: Vec::new(),
        }
    }

    /// Records a finding. The severity becomes the maximum of the current
    /// and the raised level.
    pub fn raise(&mut self, severity: Severity, reason: impl Into<String>) {
        self.severity = self.severity.max(severity);
        self.reasons.push(reason.into());
    }

    /// Seals the report. Without findings it stays at [`Severity::Ok`] and
    /// carries [`NO_INDICATORS`] as its only reason.
    pub fn finalize(mut self) -> Self {
        if self.reasons.is_empty() {
            self.severity = Severity::Ok;
            self.reasons.push(NO_INDICATORS.to_string());
        }
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// True when no finding was raised.
    pub fn is_clean(&self) -> bool {
        self.severity == Severity::Ok
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_ok_below_warning_below_danger() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Danger);
        assert_eq!(Severity::Danger.max(Severity::Warning), Severity::Danger);
    }

    #[test]
    fn severity_renders_upper_case_labels() {
        assert_eq!(Severity::Ok.as_str(), "OK");
        assert_eq!(Severity::Warning.as_str(), "WARNING");
        assert_eq!(Severity::Danger.as_str(), "DANGER");
    }

    #[test]
    fn raise_escalates_but_never_lowers() {
        let mut report = Report::new();
        report.raise(Severity::Danger, "spoofed binding");
        report.raise(Severity::Warning, "gateway silent");
        assert_eq!(report.severity(), Severity::Danger);
    }

    #[test]
    fn reasons_keep_insertion_order() {
        let mut report = Report::new();
        report.raise(Severity::Warning, "first");
        report.raise(Severity::Danger, "second");
        report.raise(Severity::Warning, "third");
        assert_eq!(report.reasons(), &["first", "second", "third"]);
    }

    #[test]
    fn finalize_fills_an_empty_report() {
        let report = Report::new().finalize();
        assert_eq!(report.severity(), Severity::Ok);
        assert_eq!(report.reasons(), &[NO_INDICATORS]);
        assert!(report.is_clean());
    }

    #[test]
    fn finalize_leaves_findings_untouched() {
        let mut report = Report::new();
        report.raise(Severity::Warning, "gateway silent");
        let report = report.finalize();
        assert_eq!(report.severity(), Severity::Warning);
        assert_eq!(report.reasons(), &["gateway silent"]);
        assert!(!report.is_clean());
    }
}
