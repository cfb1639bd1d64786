//! Quotient CLI
//!
//! Prices a quote request against the configured catalog and writes the
//! rendered invoice as a PDF. The core stays pure; every read and write
//! happens here.
//!
//! Usage: quotient <request.json> [output.pdf]

use std::fs;

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quotient_core::catalog::{Catalog, CatalogEntry};
use quotient_core::currency::{CurrencySpec, CurrencyTable};
use quotient_core::invoice::{ClientInfo, CompanyInfo, InvoiceMeta, render_invoice};
use quotient_core::pricing::{
    LineSelection, MarginSchedule, NamedMargin, PricingService,
};
use quotient_shared::AppConfig;

/// A quote request as supplied by the user.
#[derive(Debug, Deserialize)]
struct QuoteRequest {
    /// Who is being billed.
    client: ClientInfo,
    /// Selected (service, quantity) pairs.
    selections: Vec<LineSelection>,
    /// Overrides the configured invoice currency.
    currency: Option<String>,
    /// Overrides the configured default margins.
    margins: Option<Vec<MarginOverride>>,
}

/// A margin percentage supplied in the request.
#[derive(Debug, Deserialize)]
struct MarginOverride {
    name: String,
    percent: Decimal,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotient=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(request_path) = args.next() else {
        bail!("usage: quotient <request.json> [output.pdf]");
    };
    let output_path = args.next().unwrap_or_else(|| "invoice.pdf".to_string());

    // Load configuration
    let config = AppConfig::load().context("loading configuration")?;

    let catalog = Catalog::new(config.catalog.iter().map(|entry| CatalogEntry {
        name: entry.name.clone(),
        base_cost: entry.base_cost,
    }));
    let currencies = CurrencyTable::new(
        config.currency.base.clone(),
        config.currency.rates.iter().map(|rate| CurrencySpec {
            code: rate.code.clone(),
            symbol: rate.symbol.clone(),
            rate: rate.rate,
        }),
    )
    .context("building currency table")?;
    info!(
        services = catalog.len(),
        currencies = config.currency.rates.len(),
        base = %currencies.base(),
        "catalog and currency table loaded"
    );

    let raw = fs::read_to_string(&request_path)
        .with_context(|| format!("reading {request_path}"))?;
    let request: QuoteRequest =
        serde_json::from_str(&raw).context("parsing quote request")?;

    // Client info is validated here, before the renderer is ever invoked.
    request.client.validate().context("rejecting quote request")?;

    let margins = match &request.margins {
        Some(overrides) => overrides
            .iter()
            .map(|m| NamedMargin::new(m.name.clone(), m.percent))
            .collect::<Result<Vec<_>, _>>(),
        None => config
            .margins
            .iter()
            .map(|m| NamedMargin::new(m.name.clone(), m.percent))
            .collect(),
    }
    .context("rejecting margin configuration")?;
    let schedule = MarginSchedule::Direct(margins);

    let currency = request
        .currency
        .unwrap_or_else(|| config.invoice.currency.clone());

    let priced = PricingService::price_selection(
        &catalog,
        &request.selections,
        &schedule,
        &currencies,
        &currency,
    )
    .context("pricing selection")?;
    for warning in &priced.warnings {
        warn!(%warning, "line skipped");
    }

    let totals = PricingService::compute_totals(
        &priced.items,
        config.invoice.tax_rate,
        config.invoice.additional_tax_rate,
    );
    info!(
        lines = priced.items.len(),
        subtotal = %totals.subtotal,
        total = %totals.total,
        currency = %currency,
        "selection priced"
    );

    let today = Local::now().date_naive();
    let meta = InvoiceMeta {
        number: invoice_number(&config.invoice.number_prefix, today, priced.items.len()),
        issued_on: today,
    };
    let company = CompanyInfo {
        name: config.company.name.clone(),
        address: config.company.address.clone(),
        phone: config.company.phone.clone(),
        email: config.company.email.clone(),
    };

    let bytes = render_invoice(
        &company,
        &request.client,
        &priced.items,
        &meta,
        config.invoice.tax_rate,
        config.invoice.additional_tax_rate,
        &currencies,
        &currency,
    )
    .context("rendering invoice")?;

    fs::write(&output_path, &bytes).with_context(|| format!("writing {output_path}"))?;
    info!(
        invoice = %meta.number,
        path = %output_path,
        bytes = bytes.len(),
        "invoice written"
    );

    Ok(())
}

/// Invoice numbers follow the original `{prefix}-{YYYYMMDD}-{NNN}` scheme,
/// with the line count as the sequence part.
fn invoice_number(prefix: &str, date: NaiveDate, line_count: usize) -> String {
    format!("{prefix}-{}-{line_count:03}", date.format("%Y%m%d"))
}
