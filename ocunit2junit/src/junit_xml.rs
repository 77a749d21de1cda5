use crate::report_model::{SuiteReport, TIMESTAMP_FORMAT};

/// Renders one closed suite as a standalone JUnit document. Failure
/// message and location arrive already escaped from classification; suite
/// and case names are emitted as-is.
pub fn render_suite_xml(report: &SuiteReport, hostname: &str) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version='1.0' encoding='UTF-8' ?>\n");
    xml.push_str(&format!(
        "<testsuite errors='0' failures='{}' hostname='{}' name='{}' tests='{}' time='{}' timestamp='{}'>\n",
        report.total_failed,
        hostname,
        report.name,
        report.total_cases(),
        format_seconds(report.duration_seconds),
        report.timestamp.format(TIMESTAMP_FORMAT),
    ));
    for case in &report.cases {
        xml.push_str(&format!(
            "<testcase classname='{}' name='{}' time='{}'",
            report.name,
            case.name,
            format_seconds(case.duration_seconds),
        ));
        match &case.failure {
            Some(failure) => {
                xml.push_str(">\n");
                xml.push_str(&format!(
                    "<failure message='{}' type='Failure'>{}</failure>\n",
                    failure.message,
                    failure.location.as_deref().unwrap_or_default(),
                ));
                xml.push_str("</testcase>\n");
            }
            None => xml.push_str(" />\n"),
        }
    }
    xml.push_str("</testsuite>\n");
    xml
}

pub fn suite_report_filename(suite_name: &str) -> String {
    format!("TEST-{suite_name}.xml")
}

/// Shortest decimal form of a seconds value: `0.012`, `1`, `0`.
pub(crate) fn format_seconds(seconds: f64) -> String {
    format!("{seconds}")
}
