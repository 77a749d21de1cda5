use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ReportError;
use crate::report_model::TIMESTAMP_FORMAT;

static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s'(.+)'\s").unwrap());
static SUITE_STARTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Test Suite '(\S+)'.*started at\s+(.*)").unwrap());
// The trailing dot strips the sentence period from the captured timestamp.
static SUITE_ENDED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Test Suite '(\S+)'.*(?:finished|passed|failed) at\s+(.*).").unwrap());
static CASE_STARTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Test Case '-\[\S+\s+(\S+)\]' started.").unwrap());
static CASE_PASSED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Test Case '-\[\S+\s+(\S+)\]' passed \((.*) seconds\)").unwrap());
static CASE_ERROR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.*): error: -\[(\S+) (\S+)\] : (.*)").unwrap());
static CASE_FAILED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Test Case '-\[\S+ (\S+)\]' failed \((\S+) seconds\)").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub enum LogEvent {
    SuiteStarted {
        name: String,
        at: NaiveDateTime,
    },
    SuiteEnded {
        name: String,
        at: Option<NaiveDateTime>,
    },
    CaseStarted {
        name: String,
    },
    CasePassed {
        name: String,
        seconds: f64,
    },
    CaseFailed {
        name: String,
        seconds: f64,
    },
    CaseError {
        suite: String,
        name: String,
        message: String,
        location: Option<String>,
    },
    DescriptionSeen {
        text: String,
    },
    BuildFailed,
}

/// Applies every pattern to the line, in a fixed order, and returns each
/// match as an event. Patterns are independent: a single line may yield
/// several events, and no match suppresses a later one.
pub fn classify_line(line: &str) -> Result<Vec<LogEvent>, ReportError> {
    let mut events = Vec::new();
    if let Some(captures) = DESCRIPTION_RE.captures(line) {
        events.push(LogEvent::DescriptionSeen {
            text: captures[1].to_string(),
        });
    }
    for captures in SUITE_STARTED_RE.captures_iter(line) {
        events.push(LogEvent::SuiteStarted {
            name: captures[1].to_string(),
            at: parse_log_timestamp(&captures[2])?,
        });
    }
    for captures in SUITE_ENDED_RE.captures_iter(line) {
        events.push(LogEvent::SuiteEnded {
            name: captures[1].to_string(),
            at: Some(parse_log_timestamp(&captures[2])?),
        });
    }
    for captures in CASE_STARTED_RE.captures_iter(line) {
        events.push(LogEvent::CaseStarted {
            name: captures[1].to_string(),
        });
    }
    for captures in CASE_PASSED_RE.captures_iter(line) {
        events.push(LogEvent::CasePassed {
            name: captures[1].to_string(),
            seconds: parse_seconds(&captures[2])?,
        });
    }
    // Error lines carry a location prefix, so the marker never sits at the
    // start of the line.
    if line.find(": error: -").is_some_and(|index| index > 0) {
        for captures in CASE_ERROR_RE.captures_iter(line) {
            events.push(LogEvent::CaseError {
                suite: captures[2].to_string(),
                name: captures[3].to_string(),
                message: escape_xml_text(&captures[4]),
                location: Some(escape_xml_text(&captures[1])),
            });
        }
    }
    for captures in CASE_FAILED_RE.captures_iter(line) {
        events.push(LogEvent::CaseFailed {
            name: captures[1].to_string(),
            seconds: parse_seconds(&captures[2])?,
        });
    }
    if line.contains("BUILD FAILED") {
        events.push(LogEvent::BuildFailed);
    }
    Ok(events)
}

/// Escapes text destined for single-quoted XML attributes or element
/// content. Ampersands go first so the entities themselves survive.
pub(crate) fn escape_xml_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#39;")
}

/// Suite timestamps appear as `2011-10-07 07:57:58 +0000`; the offset is
/// always that literal, so it is dropped before parsing.
pub(crate) fn parse_log_timestamp(raw: &str) -> Result<NaiveDateTime, ReportError> {
    let cleaned = raw.replace("+0000", "");
    let cleaned = cleaned.trim();
    NaiveDateTime::parse_from_str(cleaned, TIMESTAMP_FORMAT).map_err(|_| ReportError::Timestamp {
        text: cleaned.to_string(),
    })
}

pub(crate) fn parse_seconds(raw: &str) -> Result<f64, ReportError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ReportError::Duration {
            text: raw.to_string(),
        })
}
