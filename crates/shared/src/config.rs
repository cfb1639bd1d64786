//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Company identity printed on invoices.
    pub company: CompanyConfig,
    /// Invoice defaults (currency, tax rates, numbering).
    pub invoice: InvoiceConfig,
    /// Static currency table.
    pub currency: CurrencyConfig,
    /// Default named margins, applied additively (direct-sale pipeline).
    #[serde(default)]
    pub margins: Vec<MarginConfig>,
    /// The service catalog with base costs in the base currency.
    pub catalog: Vec<CatalogEntryConfig>,
}

/// Company identity printed on invoices.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    /// Company name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Billing email address.
    pub email: String,
}

/// Invoice defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceConfig {
    /// Target invoice currency code.
    #[serde(default = "default_invoice_currency")]
    pub currency: String,
    /// GST percentage; leave unset for no tax line at all (distinct from an
    /// explicit 0).
    pub tax_rate: Option<Decimal>,
    /// Independent second tax percentage on the same subtotal.
    #[serde(default)]
    pub additional_tax_rate: Decimal,
    /// Prefix for generated invoice numbers.
    #[serde(default = "default_number_prefix")]
    pub number_prefix: String,
}

fn default_invoice_currency() -> String {
    "INR".to_string()
}

fn default_number_prefix() -> String {
    "INV".to_string()
}

/// Static currency table configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Base currency code (catalog costs are denominated in it; rate 1).
    pub base: String,
    /// All known currencies, the base included.
    pub rates: Vec<RateConfig>,
}

/// One currency in the static table.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// Currency code, e.g. "USD".
    pub code: String,
    /// Symbol prefixed to formatted amounts.
    pub symbol: String,
    /// Fixed rate from the base currency.
    pub rate: Decimal,
}

/// A named default margin percentage.
#[derive(Debug, Clone, Deserialize)]
pub struct MarginConfig {
    /// Margin name, e.g. "SUN E-Learning".
    pub name: String,
    /// Markup percentage in [0, 100].
    pub percent: Decimal,
}

/// One catalog service.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntryConfig {
    /// Service name (unique key).
    pub name: String,
    /// Base cost in the base currency.
    pub base_cost: Decimal,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Layering: `config/default` then `config/{RUN_MODE}` then `QUOTIENT__`
    /// environment overrides (e.g. `QUOTIENT__INVOICE__CURRENCY=USD`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("QUOTIENT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
