use chrono::NaiveDateTime;

/// Timestamp shape shared by the runner's log lines and the rendered
/// `timestamp` attribute.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub name: String,
    pub total_passed: u32,
    pub total_failed: u32,
    pub duration_seconds: f64,
    pub timestamp: NaiveDateTime,
    pub cases: Vec<CaseResult>,
}

impl SuiteReport {
    pub fn total_cases(&self) -> u32 {
        self.total_passed + self.total_failed
    }
}

#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub duration_seconds: f64,
    pub failure: Option<CaseFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub message: String,
    pub location: Option<String>,
}
