//! Command implementations

pub mod generate;
pub mod session;
pub mod simple;
pub mod today;

pub use generate::{GenerateConfig, GenerateResult, generate_lines, run_generate};
pub use session::SessionConfig;
pub use simple::run_simple;
pub use today::{run_check, run_today};
