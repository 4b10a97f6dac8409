mod common;
mod fetch;
mod init;
mod report;
mod validate;

pub use fetch::{FetchArgs, process_fetch};
pub use init::{InitArgs, init_config};
pub use report::{ReportArgs, process_report};
pub use validate::{ValidateArgs, validate_config};
