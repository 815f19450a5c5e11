//! Ready-made reporters for `kerneltest-core` checks.
//!
//! - [`pretty_print_failure`] and [`pretty_print_success`] write colorized
//!   reports to stdout, or to any writer
//! - [`LogReporter`] forwards verdicts to the `log` facade
//! - [`Recorder`] collects the indices it is called with
//!
//! Colors follow [`Style::from_env`], which honors `NO_COLOR`.

mod log_reporter;
mod pretty;
mod recorder;
mod style;

pub use log_reporter::LogReporter;
pub use pretty::{
    PrettyPrintFailure, PrettyPrintSuccess, pretty_print_failure, pretty_print_failure_with,
    pretty_print_success, pretty_print_success_with,
};
pub use recorder::Recorder;
pub use style::Style;
