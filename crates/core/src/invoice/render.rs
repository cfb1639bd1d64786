//! Invoice PDF rendering.
//!
//! A pure formatting/layout stage: unit prices arrive margin-inclusive and
//! currency-converted, and the only computation done here is the tax lines
//! explicitly requested. The document is produced entirely in memory and
//! handed back as bytes; persisting or transmitting it is the caller's
//! decision.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};
use rust_decimal::Decimal;

use crate::currency::{CurrencyTable, format_amount};
use crate::pricing::{PricedItem, PricingService, TotalsBreakdown};

use super::error::RenderError;
use super::types::{ClientInfo, CompanyInfo, InvoiceMeta, TERMS};

// US letter, in millimetres.
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;

const LEFT: f32 = 15.0;
const RIGHT: f32 = 200.0;
const BOTTOM: f32 = 25.0;

// Item table column x positions.
const COL_DESC: f32 = 15.0;
const COL_QTY: f32 = 128.0;
const COL_UNIT: f32 = 148.0;
const COL_AMOUNT: f32 = 176.0;

const ROW_STEP: f32 = 6.0;

/// Builds the summary rows (label, formatted amount) for a totals breakdown.
///
/// Split out of the drawing code so the no-tax-line versus explicit-zero-line
/// distinction stays testable without parsing PDF bytes.
#[must_use]
pub fn summary_rows(totals: &TotalsBreakdown, symbol: &str) -> Vec<(String, String)> {
    let mut rows = vec![(
        "Subtotal:".to_string(),
        format_amount(totals.subtotal, symbol),
    )];
    if let Some(tax) = totals.tax {
        rows.push((
            format!("GST ({}%):", tax.rate.normalize()),
            format_amount(tax.amount, symbol),
        ));
    }
    if let Some(extra) = totals.additional_tax {
        rows.push((
            format!("Additional Tax ({}%):", extra.rate.normalize()),
            format_amount(extra.amount, symbol),
        ));
    }
    rows.push(("Total:".to_string(), format_amount(totals.total, symbol)));
    rows
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor {
    fn text(&self, font: &IndirectFontRef, content: &str, size: f32, x: f32) {
        self.layer.use_text(content, size, Mm(x), Mm(self.y), font);
    }

    fn rule(&self) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(LEFT), Mm(self.y)), false),
                (Point::new(Mm(RIGHT), Mm(self.y)), false),
            ],
            is_closed: false,
        });
    }

    /// Starts a fresh page when fewer than `needed` millimetres remain.
    /// Returns true if a page break happened.
    fn ensure_room(&mut self, doc: &PdfDocumentReference, needed: f32) -> bool {
        if self.y - needed >= BOTTOM {
            return false;
        }
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - 15.0;
        true
    }
}

/// Renders a complete invoice PDF and returns its bytes.
///
/// The currency is resolved before any layout work, so an unknown code fails
/// without producing a single byte. An empty item list still renders a
/// valid, mostly-empty document; whether that makes business sense is the
/// caller's call.
///
/// # Errors
///
/// Returns `RenderError::Currency` for a currency code missing from the
/// table, or `RenderError::Pdf` if the PDF backend fails.
#[allow(clippy::too_many_arguments)]
pub fn render_invoice(
    company: &CompanyInfo,
    client: &ClientInfo,
    items: &[PricedItem],
    meta: &InvoiceMeta,
    tax_rate: Option<Decimal>,
    additional_tax_rate: Decimal,
    currencies: &CurrencyTable,
    currency: &str,
) -> Result<Vec<u8>, RenderError> {
    // Fail on a bad currency before any layout work begins.
    let symbol = currencies.symbol(currency)?.to_string();

    let totals = PricingService::compute_totals(items, tax_rate, additional_tax_rate);

    let (doc, page, layer) = PdfDocument::new(
        format!("Invoice {}", meta.number),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
    };
    let mut cursor = Cursor {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT - 18.0,
    };

    draw_company_header(&mut cursor, &fonts, company, meta);
    draw_metadata(&mut cursor, &fonts, meta);
    draw_bill_to(&mut cursor, &fonts, client);
    draw_items(&mut cursor, &doc, &fonts, items, &symbol, currency);
    draw_summary(&mut cursor, &doc, &fonts, &totals, &symbol);
    draw_terms(&mut cursor, &doc, &fonts);

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

fn draw_company_header(cursor: &mut Cursor, fonts: &Fonts, company: &CompanyInfo, meta: &InvoiceMeta) {
    cursor.text(&fonts.bold, &company.name, 20.0, LEFT);
    cursor.text(&fonts.bold, "INVOICE", 22.0, 160.0);
    cursor.y -= 8.0;
    cursor.text(&fonts.regular, &company.address, 10.0, LEFT);
    cursor.text(&fonts.bold, &meta.number, 11.0, 160.0);
    cursor.y -= 5.0;
    cursor.text(
        &fonts.regular,
        &format!("Phone: {} | Email: {}", company.phone, company.email),
        10.0,
        LEFT,
    );
    cursor.y -= 6.0;
    cursor.rule();
    cursor.y -= 10.0;
}

fn draw_metadata(cursor: &mut Cursor, fonts: &Fonts, meta: &InvoiceMeta) {
    let issued = meta.issued_on.format("%B %d, %Y").to_string();
    // Due date mirrors the issue date even though the terms promise net 30;
    // the original quotation tool shipped this way and billing has not
    // signed off on changing it.
    let due = issued.clone();

    for (label, value) in [
        ("Invoice Number:", meta.number.as_str()),
        ("Date:", issued.as_str()),
        ("Due Date:", due.as_str()),
    ] {
        cursor.text(&fonts.bold, label, 10.0, LEFT);
        cursor.text(&fonts.regular, value, 10.0, 55.0);
        cursor.y -= 5.5;
    }
    cursor.y -= 6.0;
}

fn draw_bill_to(cursor: &mut Cursor, fonts: &Fonts, client: &ClientInfo) {
    cursor.text(&fonts.bold, "Bill To:", 12.0, LEFT);
    cursor.y -= 6.0;
    cursor.text(&fonts.regular, &client.name, 10.0, LEFT);
    cursor.y -= 5.0;
    cursor.text(&fonts.regular, &client.address, 10.0, LEFT);
    cursor.y -= 5.0;
    cursor.text(
        &fonts.regular,
        &format!("Email: {}", client.email),
        10.0,
        LEFT,
    );
    cursor.y -= 10.0;
}

fn draw_items_header(cursor: &mut Cursor, fonts: &Fonts, currency: &str) {
    cursor.text(&fonts.bold, "Description", 10.0, COL_DESC);
    cursor.text(&fonts.bold, "Quantity", 10.0, COL_QTY);
    cursor.text(&fonts.bold, &format!("Unit Price ({currency})"), 10.0, COL_UNIT);
    cursor.text(&fonts.bold, &format!("Amount ({currency})"), 10.0, COL_AMOUNT);
    cursor.y -= 2.5;
    cursor.rule();
    cursor.y -= ROW_STEP;
}

fn draw_items(
    cursor: &mut Cursor,
    doc: &PdfDocumentReference,
    fonts: &Fonts,
    items: &[PricedItem],
    symbol: &str,
    currency: &str,
) {
    draw_items_header(cursor, fonts, currency);

    for item in items {
        if cursor.ensure_room(doc, ROW_STEP + 4.0) {
            // Items continuing on a new page get a fresh table header.
            draw_items_header(cursor, fonts, currency);
        }
        cursor.text(&fonts.regular, &item.description, 10.0, COL_DESC);
        cursor.text(&fonts.regular, &item.quantity.to_string(), 10.0, COL_QTY);
        cursor.text(
            &fonts.regular,
            &format_amount(item.unit_price, symbol),
            10.0,
            COL_UNIT,
        );
        cursor.text(
            &fonts.regular,
            &format_amount(item.amount(), symbol),
            10.0,
            COL_AMOUNT,
        );
        cursor.y -= ROW_STEP;
    }

    cursor.y += 2.0;
    cursor.rule();
    cursor.y -= 8.0;
}

fn draw_summary(
    cursor: &mut Cursor,
    doc: &PdfDocumentReference,
    fonts: &Fonts,
    totals: &TotalsBreakdown,
    symbol: &str,
) {
    let rows = summary_rows(totals, symbol);

    #[allow(clippy::cast_precision_loss)]
    let needed = rows.len() as f32 * 6.5 + 4.0;
    cursor.ensure_room(doc, needed);

    let last = rows.len() - 1;
    for (i, (label, amount)) in rows.iter().enumerate() {
        // Total row gets the bold treatment.
        let font = if i == last { &fonts.bold } else { &fonts.regular };
        cursor.text(&fonts.bold, label, 10.5, 138.0);
        cursor.text(font, amount, 10.5, COL_AMOUNT);
        cursor.y -= 6.5;
    }
    cursor.y -= 8.0;
}

fn draw_terms(cursor: &mut Cursor, doc: &PdfDocumentReference, fonts: &Fonts) {
    #[allow(clippy::cast_precision_loss)]
    let needed = TERMS.len() as f32 * 5.0 + 8.0;
    cursor.ensure_room(doc, needed);

    cursor.text(&fonts.bold, "Terms and Conditions:", 11.0, LEFT);
    cursor.y -= 6.0;
    for clause in TERMS {
        cursor.text(&fonts.regular, clause, 9.5, LEFT);
        cursor.y -= 5.0;
    }
}
