//! Shared configuration types for Quotient binaries.
//!
//! The core crate takes catalogs, currency tables, and margins as plain
//! inputs; this crate is where those inputs come from - layered config
//! files plus environment overrides, loaded once at startup.

pub mod config;

pub use config::AppConfig;
