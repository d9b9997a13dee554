//! CLI command implementations

pub mod encode;
pub mod json_output;
pub mod plan;
