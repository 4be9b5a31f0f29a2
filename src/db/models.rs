use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::Type;

// Stored TEXT values; must match the sqlx lowercase renaming
const INVOICE_STATUS_PENDING: &str = "pending";
const INVOICE_STATUS_PAID: &str = "paid";

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => INVOICE_STATUS_PENDING,
            InvoiceStatus::Paid => INVOICE_STATUS_PAID,
        }
    }
}

/// A customer invoices are billed to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbCustomer {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar shown next to the customer's name
    pub image_url: String,
}

/// A stored invoice row
///
/// Amounts are kept in cents so no float rounding leaks into storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbInvoice {
    pub id: String,
    pub customer_id: String,
    pub amount_cents: i64,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
}

/// An invoice joined with the customer it belongs to
///
/// This is the shape the invoices table renders. Each fetch returns a fresh
/// snapshot; nothing downstream mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub customer_name: String,
    pub email: String,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub image_url: String,
}
