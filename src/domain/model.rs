use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An invoice record as returned by the Scalingo billing API. The vendor
/// does not guarantee every attribute, so each field is optional and a
/// missing one stays `None` instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RawInvoice {
    pub invoice_number: Option<String>,
    pub total_price_with_vat: Option<f64>,
    pub pdf_url: Option<String>,
    pub billing_month: Option<String>,
}

/// The platform-standard document shape handed to the persistence
/// collaborator. Built once by normalization and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fileurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub currency: String,
    pub vendor: String,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentMetadata {
    /// Wall-clock time at the moment of normalization. Not mandatory for the
    /// platform but useful for debugging and data migration.
    #[serde(rename = "importDate")]
    pub import_date: DateTime<Utc>,
    /// Document schema version, bumped on structure changes.
    pub version: u32,
}

/// Options forwarded to the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveOptions {
    /// Case-insensitive substrings used downstream to link saved documents
    /// to bank operations.
    pub identifiers: Vec<String>,
}
