use chrono::NaiveDate;
use chrono::NaiveDateTime;

use crate::report_model::{CaseFailure, SuiteReport};
use crate::stream_parser::LogStreamParser;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2011, 10, 7)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn push_all(parser: &mut LogStreamParser, lines: &[&str]) -> Vec<SuiteReport> {
    lines
        .iter()
        .flat_map(|line| parser.push_line(line).unwrap())
        .collect()
}

#[test]
fn a_full_suite_flushes_on_its_end_marker_with_sorted_cases() {
    let mut parser = LogStreamParser::new();
    let flushed = push_all(
        &mut parser,
        &[
            "Test Suite 'Foo' started at 2011-10-07 07:57:58 +0000",
            "Test Case '-[Foo testB]' started.",
            "Test Case '-[Foo testB]' passed (0.5 seconds).",
            "Test Case '-[Foo testA]' started.",
            "Test Case '-[Foo testA]' passed (0.25 seconds).",
            "Test Suite 'Foo' finished at 2011-10-07 07:58:00 +0000.",
        ],
    );

    assert_eq!(flushed.len(), 1);
    let report = &flushed[0];
    assert_eq!(report.name, "Foo");
    assert_eq!(report.total_passed, 2);
    assert_eq!(report.total_failed, 0);
    assert_eq!(report.total_cases(), 2);
    assert_eq!(report.duration_seconds, 2.0);
    assert_eq!(report.timestamp, at(7, 58, 0));
    let names: Vec<&str> = report.cases.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["testA", "testB"]);
    assert!(report.cases.iter().all(|c| c.failure.is_none()));
}

#[test]
fn an_error_line_attaches_a_failure_to_the_matching_case() {
    let mut parser = LogStreamParser::new();
    let flushed = push_all(
        &mut parser,
        &[
            "Test Suite 'Foo' started at 2011-10-07 07:57:58 +0000",
            "Test Case '-[Foo testB]' started.",
            "/Users/ci/FooTests.m:21: error: -[Foo testB] : 'a<b' should be true",
            "Test Case '-[Foo testB]' failed (0.04 seconds).",
            "Test Suite 'Foo' finished at 2011-10-07 07:57:59 +0000.",
        ],
    );

    let report = &flushed[0];
    assert_eq!(report.total_failed, 1);
    assert_eq!(report.cases.len(), 1);
    assert_eq!(
        report.cases[0].failure,
        Some(CaseFailure {
            message: "&#39;a&lt;b&#39; should be true".to_string(),
            location: Some("/Users/ci/FooTests.m:21".to_string()),
        })
    );
}

#[test]
fn the_end_markers_name_wins_over_the_start_markers() {
    let mut parser = LogStreamParser::new();
    let flushed = push_all(
        &mut parser,
        &[
            "Test Suite 'Foo' started at 2011-10-07 07:57:58 +0000",
            "Test Case '-[Foo testA]' started.",
            "Test Case '-[Foo testA]' passed (0.012 seconds).",
            "Test Suite 'Bar' finished at 2011-10-07 07:57:59 +0000.",
        ],
    );
    assert_eq!(flushed[0].name, "Bar");
    assert_eq!(flushed[0].cases[0].name, "testA");
}

#[test]
fn an_end_marker_with_no_open_suite_is_a_no_op() {
    let mut parser = LogStreamParser::new();
    let flushed = parser
        .push_line("Test Suite 'Foo' finished at 2011-10-07 07:57:59 +0000.")
        .unwrap();
    assert!(flushed.is_empty());
    assert!(parser.finalize().is_none());
}

#[test]
fn a_second_start_marker_discards_the_open_suite() {
    let mut parser = LogStreamParser::new();
    let flushed = push_all(
        &mut parser,
        &[
            "Test Suite 'Foo' started at 2011-10-07 07:57:58 +0000",
            "Test Case '-[Foo testA]' started.",
            "Test Case '-[Foo testA]' passed (0.012 seconds).",
            "Test Suite 'Bar' started at 2011-10-07 07:58:10 +0000",
            "Test Suite 'Bar' finished at 2011-10-07 07:58:11 +0000.",
        ],
    );

    assert_eq!(flushed.len(), 1);
    assert_eq!(flushed[0].name, "Bar");
    assert!(flushed[0].cases.is_empty());
    assert_eq!(parser.discarded_suites(), 1);
}

#[test]
fn finalize_reports_an_in_flight_case_as_an_unfinished_failure() {
    let mut parser = LogStreamParser::new();
    push_all(
        &mut parser,
        &[
            "Test Suite 'Foo' started at 2011-10-07 07:57:58 +0000",
            "Test Case '-[Foo testA]' started.",
        ],
    );

    let report = parser.finalize().expect("open suite should flush");
    assert_eq!(report.name, "Foo");
    assert_eq!(report.total_failed, 1);
    assert_eq!(report.total_passed, 0);
    assert_eq!(report.cases.len(), 1);
    assert_eq!(report.cases[0].name, "testA");
    assert_eq!(report.cases[0].duration_seconds, 0.0);
    assert_eq!(
        report.cases[0].failure,
        Some(CaseFailure {
            message: "UNFINISHED".to_string(),
            location: None,
        })
    );
    assert_eq!(report.duration_seconds, 0.0);
    assert_eq!(report.timestamp, at(7, 57, 58));
}

#[test]
fn finalize_without_an_end_marker_sums_case_durations() {
    let mut parser = LogStreamParser::new();
    push_all(
        &mut parser,
        &[
            "Test Suite 'Foo' started at 2011-10-07 07:57:58 +0000",
            "Test Case '-[Foo testA]' started.",
            "Test Case '-[Foo testA]' passed (1.5 seconds).",
            "Test Case '-[Foo testB]' started.",
            "Test Case '-[Foo testB]' passed (0.5 seconds).",
        ],
    );

    let report = parser.finalize().expect("open suite should flush");
    assert_eq!(report.duration_seconds, 2.0);
    assert_eq!(report.timestamp, at(7, 58, 0));
    assert_eq!(report.total_passed, 2);
}

#[test]
fn a_build_failed_marker_sets_the_flag_without_touching_suites() {
    let mut parser = LogStreamParser::new();
    assert!(!parser.build_failed());
    let flushed = parser.push_line("** BUILD FAILED **").unwrap();
    assert!(flushed.is_empty());
    assert!(parser.build_failed());
    assert!(parser.finalize().is_none());
}

#[test]
fn case_events_with_no_open_suite_are_ignored() {
    let mut parser = LogStreamParser::new();
    push_all(
        &mut parser,
        &[
            "Test Case '-[Foo testA]' passed (0.012 seconds).",
            "/Users/ci/FooTests.m:21: error: -[Foo testA] : broken",
        ],
    );
    assert!(parser.finalize().is_none());
}

#[test]
fn an_end_timestamp_before_the_start_clamps_the_duration_at_zero() {
    let mut parser = LogStreamParser::new();
    let flushed = push_all(
        &mut parser,
        &[
            "Test Suite 'Foo' started at 2011-10-07 07:58:00 +0000",
            "Test Suite 'Foo' finished at 2011-10-07 07:57:00 +0000.",
        ],
    );
    assert_eq!(flushed[0].duration_seconds, 0.0);
}

#[test]
fn a_repeated_case_name_keeps_the_last_duration_but_counts_both_runs() {
    let mut parser = LogStreamParser::new();
    let flushed = push_all(
        &mut parser,
        &[
            "Test Suite 'Foo' started at 2011-10-07 07:57:58 +0000",
            "Test Case '-[Foo testA]' passed (0.5 seconds).",
            "Test Case '-[Foo testA]' passed (0.7 seconds).",
            "Test Suite 'Foo' finished at 2011-10-07 07:58:00 +0000.",
        ],
    );

    let report = &flushed[0];
    assert_eq!(report.total_passed, 2);
    assert_eq!(report.total_cases(), 2);
    assert_eq!(report.cases.len(), 1);
    assert_eq!(report.cases[0].duration_seconds, 0.7);
}

#[test]
fn descriptions_linger_until_a_suite_or_case_starts() {
    let mut parser = LogStreamParser::new();
    parser
        .push_line("Test Suite 'Foo' started at 2011-10-07 07:57:58 +0000")
        .unwrap();
    assert_eq!(parser.last_description(), None);

    parser
        .push_line("Test Case '-[Foo testA]' passed (0.012 seconds).")
        .unwrap();
    assert_eq!(parser.last_description(), Some("-[Foo testA]"));

    parser.push_line("Test Case '-[Foo testB]' started.").unwrap();
    assert_eq!(parser.last_description(), None);

    let report = parser.finalize().expect("open suite should flush");
    assert!(report.cases.iter().any(|c| c.name == "testA"));
}
