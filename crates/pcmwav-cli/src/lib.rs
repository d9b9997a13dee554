//! pcmwav CLI library.
//!
//! Input loading and command implementations behind the `pcmwav` binary.

pub mod commands;
pub mod input;
