//! Invoice document assembly and PDF rendering.

pub mod error;
// Page geometry is in millimetres; the float lint guards money, not layout.
#[allow(clippy::float_arithmetic)]
pub mod render;
pub mod types;


pub use error::{InvalidClientInfo, RenderError};
pub use render::{render_invoice, summary_rows};
pub use types::{ClientInfo, CompanyInfo, InvoiceMeta, TERMS};
