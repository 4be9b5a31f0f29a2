use chrono::NaiveDate;
use dashboard::db::{Database, DbCustomer, DbInvoice, InvoiceStatus};
use tempfile::TempDir;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Fresh database in a temporary directory; keep the `TempDir` alive
#[allow(dead_code)]
pub async fn setup_test_database() -> (Database, TempDir) {
    tracing_init();

    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let database = Database::new(db_path.to_str().unwrap())
        .await
        .expect("Failed to create database");

    (database, temp_dir)
}

#[allow(dead_code)]
pub fn create_test_customer(id: &str, name: &str, email: &str) -> DbCustomer {
    DbCustomer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        image_url: format!("/customers/{}.png", id),
    }
}

#[allow(dead_code)]
pub fn create_test_invoice(
    id: &str,
    customer_id: &str,
    amount_cents: i64,
    date: &str,
    status: InvoiceStatus,
) -> DbInvoice {
    DbInvoice {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        amount_cents,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        status,
    }
}
