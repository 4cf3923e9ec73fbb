//! Restaurant forum user model: domain, configuration, and storage adapters.

pub mod config;
pub mod domain;
pub mod outbound;
