//! Currency model
//!
//! Mirrors the accounting API's currency records. One currency in the list
//! is flagged as the company default and used as the formatting fallback.

use serde::{Deserialize, Serialize};

/// A currency as defined in the accounting API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Server-issued identifier
    pub id: String,

    /// ISO-style code, e.g. "USD"
    pub code: String,

    /// Human-readable name, e.g. "US Dollar"
    pub name: String,

    /// Display symbol, e.g. "$"
    #[serde(default)]
    pub symbol: String,

    /// Whether this is the company default currency
    #[serde(default)]
    pub is_default: bool,

    /// Whether the currency is active
    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Creation timestamp (ISO string, kept verbatim)
    #[serde(default)]
    pub created_at: String,

    /// Last-update timestamp (ISO string, kept verbatim)
    #[serde(default)]
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

impl Currency {
    /// Pick the default currency from a list, falling back to the first entry
    pub fn default_of(currencies: &[Currency]) -> Option<&Currency> {
        currencies
            .iter()
            .find(|c| c.is_default)
            .or_else(|| currencies.first())
    }
}
