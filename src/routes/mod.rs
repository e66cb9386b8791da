pub use support_forms::error_chain_fmt;

pub mod health_check;
pub mod support_forms;
