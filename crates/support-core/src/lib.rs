//! # support-core
//!
//! Configuration and top-level error handling for the support bot.

pub mod config;
pub mod error;
