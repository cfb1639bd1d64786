//! Invoice party and metadata types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::InvalidClientInfo;

/// The four fixed terms-and-conditions clauses printed on every invoice.
pub const TERMS: [&str; 4] = [
    "1. Payment is due within 30 days",
    "2. Please include invoice number on your payment",
    "3. Make all checks payable to the company name above",
    "4. Bank transfer details will be provided upon request",
];

/// Identity of the company issuing the invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Company name, printed as the document header.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Billing email address.
    pub email: String,
}

/// The client being billed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Client name.
    pub name: String,
    /// Client postal address.
    pub address: String,
    /// Client email address.
    pub email: String,
}

impl ClientInfo {
    /// Caller-side validation: name and address non-empty, email contains
    /// an `@`. Runs before the renderer is ever invoked.
    ///
    /// # Errors
    ///
    /// Returns `InvalidClientInfo` naming the first failing field.
    pub fn validate(&self) -> Result<(), InvalidClientInfo> {
        if self.name.trim().is_empty() {
            return Err(InvalidClientInfo {
                reason: "client name must not be empty".to_string(),
            });
        }
        if self.address.trim().is_empty() {
            return Err(InvalidClientInfo {
                reason: "client address must not be empty".to_string(),
            });
        }
        if !self.email.contains('@') {
            return Err(InvalidClientInfo {
                reason: format!("client email '{}' is not an email address", self.email),
            });
        }
        Ok(())
    }
}

/// Invoice identity and dates.
///
/// The number is caller-generated; the core treats it as an opaque string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceMeta {
    /// Invoice number, e.g. `INV-20260830-003`.
    pub number: String,
    /// Issue date (the render date, supplied by the caller so rendering
    /// stays deterministic).
    pub issued_on: NaiveDate,
}
