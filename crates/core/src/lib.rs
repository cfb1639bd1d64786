//! Core business logic for Quotient.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! All domain types, validation rules, and calculations live here, so every
//! operation is deterministic and side-effect-free: pricing the same inputs
//! twice produces the same quotation, and rendering never touches the
//! filesystem (the invoice comes back as an in-memory byte stream).
//!
//! # Modules
//!
//! - `catalog` - The immutable service catalog
//! - `currency` - Static currency table, conversion, and money formatting
//! - `pricing` - Margin schedules, line pricing, and tax totals
//! - `invoice` - Invoice document assembly and PDF rendering

pub mod catalog;
pub mod currency;
pub mod invoice;
pub mod pricing;
