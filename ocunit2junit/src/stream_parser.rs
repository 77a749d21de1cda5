use std::collections::BTreeMap;

use chrono::Duration;
use chrono::NaiveDateTime;

use crate::classify::{LogEvent, classify_line};
use crate::error::ReportError;
use crate::report_model::{CaseFailure, CaseResult, SuiteReport};

#[derive(Debug, Clone)]
struct SuiteAccumulator {
    name: String,
    started_at: NaiveDateTime,
    running_seconds: f64,
    passed: u32,
    failed: u32,
    case_seconds: BTreeMap<String, f64>,
    case_failures: BTreeMap<String, CaseFailure>,
}

impl SuiteAccumulator {
    fn new(name: String, started_at: NaiveDateTime) -> Self {
        Self {
            name,
            started_at,
            running_seconds: 0.0,
            passed: 0,
            failed: 0,
            case_seconds: BTreeMap::new(),
            case_failures: BTreeMap::new(),
        }
    }

    fn record_case(&mut self, name: String, seconds: f64) {
        let seconds = seconds.max(0.0);
        self.running_seconds += seconds;
        self.case_seconds.insert(name, seconds);
    }

    /// Closes under the end marker's name. With an end timestamp the suite
    /// duration is the wall-clock delta in whole seconds; without one it
    /// falls back to the summed case durations, and the timestamp is
    /// projected forward from the start by that sum.
    fn close(self, name: String, ended_at: Option<NaiveDateTime>) -> SuiteReport {
        let (duration_seconds, timestamp) = match ended_at {
            Some(ended_at) => (
                (ended_at - self.started_at).num_seconds().max(0) as f64,
                ended_at,
            ),
            None => (
                self.running_seconds,
                self.started_at + Duration::milliseconds((self.running_seconds * 1000.0) as i64),
            ),
        };
        let mut failures = self.case_failures;
        let cases = self
            .case_seconds
            .into_iter()
            .map(|(case_name, seconds)| CaseResult {
                failure: failures.remove(&case_name),
                name: case_name,
                duration_seconds: seconds,
            })
            .collect();
        SuiteReport {
            name,
            total_passed: self.passed,
            total_failed: self.failed,
            duration_seconds,
            timestamp,
            cases,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogStreamParser {
    current: Option<SuiteAccumulator>,
    in_flight_case: Option<String>,
    last_description: Option<String>,
    build_failed: bool,
    discarded_suites: u32,
}

impl LogStreamParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one line and applies its events in order; returns the
    /// suites the line closed, ready to render.
    pub fn push_line(&mut self, line: &str) -> Result<Vec<SuiteReport>, ReportError> {
        let mut flushed = Vec::new();
        for event in classify_line(line)? {
            if let Some(report) = self.apply_event(event) {
                flushed.push(report);
            }
        }
        Ok(flushed)
    }

    pub fn build_failed(&self) -> bool {
        self.build_failed
    }

    /// Suites that were replaced by a later start marker before closing.
    /// Their recorded cases are gone; the counter only makes the loss
    /// visible in diagnostics.
    pub fn discarded_suites(&self) -> u32 {
        self.discarded_suites
    }

    /// Most recent quoted phrase seen in the log, cleared whenever a suite
    /// or case starts. Case naming never consults it.
    pub fn last_description(&self) -> Option<&str> {
        self.last_description.as_deref()
    }

    /// Ends the stream. An open suite is closed as if an end marker with no
    /// timestamp had been seen; a case still in flight inside it is first
    /// recorded as an UNFINISHED failure so an aborted run surfaces as one
    /// failing test instead of vanishing.
    pub fn finalize(mut self) -> Option<SuiteReport> {
        let suite_name = self.current.as_ref()?.name.clone();
        if let Some(case_name) = self.in_flight_case.take() {
            self.apply_event(LogEvent::CaseError {
                suite: suite_name.clone(),
                name: case_name.clone(),
                message: "UNFINISHED".to_string(),
                location: None,
            });
            self.apply_event(LogEvent::CaseFailed {
                name: case_name,
                seconds: 0.0,
            });
        }
        self.apply_event(LogEvent::SuiteEnded {
            name: suite_name,
            at: None,
        })
    }

    fn apply_event(&mut self, event: LogEvent) -> Option<SuiteReport> {
        match event {
            LogEvent::SuiteStarted { name, at } => {
                if self.current.is_some() {
                    self.discarded_suites += 1;
                }
                self.current = Some(SuiteAccumulator::new(name, at));
                self.last_description = None;
                None
            }
            LogEvent::SuiteEnded { name, at } => {
                let accumulator = self.current.take()?;
                Some(accumulator.close(name, at))
            }
            // The in-flight marker survives a suite replacement on purpose:
            // only a pass/fail for the case clears it.
            LogEvent::CaseStarted { name } => {
                self.in_flight_case = Some(name);
                self.last_description = None;
                None
            }
            LogEvent::CasePassed { name, seconds } => {
                let accumulator = self.current.as_mut()?;
                accumulator.passed += 1;
                accumulator.record_case(name, seconds);
                self.in_flight_case = None;
                None
            }
            LogEvent::CaseFailed { name, seconds } => {
                let accumulator = self.current.as_mut()?;
                accumulator.failed += 1;
                accumulator.record_case(name, seconds);
                self.in_flight_case = None;
                None
            }
            LogEvent::CaseError {
                suite: _,
                name,
                message,
                location,
            } => {
                let accumulator = self.current.as_mut()?;
                accumulator
                    .case_failures
                    .insert(name, CaseFailure { message, location });
                None
            }
            LogEvent::DescriptionSeen { text } => {
                self.last_description = Some(text);
                None
            }
            LogEvent::BuildFailed => {
                self.build_failed = true;
                None
            }
        }
    }
}
