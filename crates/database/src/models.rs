//! Database models.

use sqlx::FromRow;

/// A subscriber row from the `pan_fetch` table.
///
/// Rows are written by an external onboarding system; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Subscriber {
    /// WhatsApp account identifier (e.g., "919999999999")
    pub waid: String,
    /// Tax identifier used to request the portfolio report
    pub pan: String,
    /// Display name, if the onboarding system recorded one
    pub name: Option<String>,
}

impl Subscriber {
    /// Display name, or `fallback` when none was recorded.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or(fallback)
    }
}
