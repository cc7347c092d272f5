use crate::domain::model::{DocumentMetadata, NormalizedDocument, RawInvoice};
use chrono::Utc;

pub const CURRENCY: &str = "€";
pub const VENDOR: &str = "template";
pub const DOCUMENT_VERSION: u32 = 1;

/// Maps raw vendor invoices into the platform document shape. Pure 1:1 map:
/// no filtering, no dedup, no re-scaling, order preserved. A missing vendor
/// attribute stays absent in the output instead of being rejected.
pub fn normalize(invoices: Vec<RawInvoice>) -> Vec<NormalizedDocument> {
    invoices
        .into_iter()
        .map(|invoice| NormalizedDocument {
            title: invoice.invoice_number,
            amount: invoice.total_price_with_vat,
            fileurl: invoice.pdf_url,
            filename: invoice
                .billing_month
                .as_ref()
                .map(|month| format!("{}.pdf", month)),
            date: invoice.billing_month,
            currency: CURRENCY.to_string(),
            vendor: VENDOR.to_string(),
            metadata: DocumentMetadata {
                import_date: Utc::now(),
                version: DOCUMENT_VERSION,
            },
        })
        .collect()
}

/// Converts a price string to a float, stripping the currency symbol and
/// surrounding whitespace. Returns NaN when the remainder is not numeric.
pub fn parse_price(price: &str) -> f64 {
    price
        .replace('£', "")
        .trim()
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}
