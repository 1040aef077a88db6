//! Outbound content sent to subscribers.

use chrono::NaiveDate;
use wati::InteractiveButtonsMessage;

/// Label of the reply button offering email delivery.
pub const SEND_ON_MAIL: &str = "Send on mail";

/// Footer shown under the follow-up message.
pub const FOOTER: &str = "mNivesh Team";

/// Greeting name used when a subscriber has no recorded name.
pub const FALLBACK_NAME: &str = "Investor";

/// Filename under which the report is delivered.
pub fn report_filename(pan: &str, waid: &str) -> String {
    format!("{}_{}.pdf", pan, waid)
}

/// Human-readable report date, e.g. `05-Jan-2024`.
pub fn display_date(as_of: NaiveDate) -> String {
    as_of.format("%d-%b-%Y").to_string()
}

/// Follow-up sent after the report PDF.
pub fn report_ready_message(name: &str, as_of: NaiveDate) -> InteractiveButtonsMessage {
    let body = format!(
        "Dear {}, \n\nHere's your Portfolio Valuation Report as on {}.",
        name,
        display_date(as_of)
    );
    InteractiveButtonsMessage::new(body, FOOTER).with_button(SEND_ON_MAIL)
}
