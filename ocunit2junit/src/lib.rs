pub mod args;
pub mod classify;
pub mod config;
pub mod diagnostics_trace;
pub mod error;
pub mod help;
pub mod junit_xml;
pub mod report_dir;
pub mod report_model;
pub mod run;
pub mod stream_parser;

#[cfg(test)]
mod stream_parser_test;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
