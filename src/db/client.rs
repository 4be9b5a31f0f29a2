use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use crate::db::models::*;

/// Number of invoices shown on one page of the dashboard table
pub const ITEMS_PER_PAGE: u32 = 6;

// Shared by the row query and the count query so both match the same invoices
const INVOICE_SEARCH_FILTER: &str = r#"
    c.name LIKE ?
    OR c.email LIKE ?
    OR CAST(i.amount AS TEXT) LIKE ?
    OR i.date LIKE ?
    OR i.status LIKE ?
"#;

#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Initialize database connection and create tables
    pub async fn new(database_path: &str) -> Result<Self, sqlx::Error> {
        // Use sqlite:// with ?mode=rwc to create if it doesn't exist
        let database_url = format!("sqlite://{}?mode=rwc", database_path);
        info!("Connecting to {}", database_url);
        let pool = SqlitePool::connect(&database_url).await?;

        let db = Database { pool };
        db.create_tables().await?;
        Ok(db)
    }

    /// Create all necessary tables
    async fn create_tables(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                image_url TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS invoices (
                id TEXT PRIMARY KEY,
                customer_id TEXT NOT NULL,
                amount INTEGER NOT NULL,
                date TEXT NOT NULL,
                status TEXT NOT NULL,
                FOREIGN KEY (customer_id) REFERENCES customers (id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_invoices_date ON invoices (date)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new customer
    pub async fn insert_customer(&self, customer: &DbCustomer) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a new invoice
    pub async fn insert_invoice(&self, invoice: &DbInvoice) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, date, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&invoice.id)
        .bind(&invoice.customer_id)
        .bind(invoice.amount_cents)
        .bind(invoice.date)
        .bind(invoice.status.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Total number of stored invoices, regardless of any search
    pub async fn count_invoices(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM invoices")
            .fetch_one(&self.pool)
            .await?;
        row.try_get("count")
    }

    /// Get one page of invoices matching `query`, newest first.
    ///
    /// The query is matched as a case-insensitive substring against the
    /// customer's name and email and the invoice's amount, date and status.
    /// Pages are 1-based; a page past the end yields an empty list.
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<Invoice>, sqlx::Error> {
        let pattern = format!("%{}%", query);
        let offset = (i64::from(page.max(1)) - 1) * i64::from(ITEMS_PER_PAGE);
        debug!(query, page, offset, "Fetching filtered invoices");

        let sql = format!(
            r#"
            SELECT
                i.id, i.amount, i.date, i.status,
                c.name, c.email, c.image_url
            FROM invoices i
            JOIN customers c ON i.customer_id = c.id
            WHERE {}
            ORDER BY i.date DESC, i.id
            LIMIT ? OFFSET ?
            "#,
            INVOICE_SEARCH_FILTER
        );

        let rows = sqlx::query(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(i64::from(ITEMS_PER_PAGE))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(invoice_from_row).collect()
    }

    /// Count the invoices matching `query` with the same rules as
    /// [`Database::fetch_filtered_invoices`]
    pub async fn count_filtered_invoices(&self, query: &str) -> Result<i64, sqlx::Error> {
        let pattern = format!("%{}%", query);
        let sql = format!(
            r#"
            SELECT COUNT(*) AS count
            FROM invoices i
            JOIN customers c ON i.customer_id = c.id
            WHERE {}
            "#,
            INVOICE_SEARCH_FILTER
        );

        let row = sqlx::query(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await?;
        row.try_get("count")
    }
}

fn invoice_from_row(row: &SqliteRow) -> Result<Invoice, sqlx::Error> {
    Ok(Invoice {
        id: row.try_get("id")?,
        customer_name: row.try_get("name")?,
        email: row.try_get("email")?,
        amount_cents: row.try_get("amount")?,
        due_date: row.try_get("date")?,
        status: row.try_get("status")?,
        image_url: row.try_get("image_url")?,
    })
}
