use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::db::{Database, DbCustomer, DbInvoice, InvoiceStatus};

const DEMO_CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Delba de Oliveira", "delba@oliveira.com", "/customers/delba-de-oliveira.png"),
    ("Lee Robinson", "lee@robinson.com", "/customers/lee-robinson.png"),
    ("Hector Simpson", "hector@simpson.com", "/customers/hector-simpson.png"),
    ("Steven Tey", "steven@tey.com", "/customers/steven-tey.png"),
    ("Steph Dietz", "steph@dietz.com", "/customers/steph-dietz.png"),
    ("Michael Novotny", "michael@novotny.com", "/customers/michael-novotny.png"),
    ("Evil Rabbit", "evil@rabbit.com", "/customers/evil-rabbit.png"),
    ("Emil Kowalski", "emil@kowalski.com", "/customers/emil-kowalski.png"),
    ("Amy Burrell", "amy@burrell.com", "/customers/amy-burrell.png"),
    ("Balazs Orban", "balazs@orban.com", "/customers/balazs-orban.png"),
];

// (customer index, amount in cents, status, yyyy, mm, dd)
const DEMO_INVOICES: &[(usize, i64, InvoiceStatus, i32, u32, u32)] = &[
    (0, 15795, InvoiceStatus::Pending, 2022, 12, 6),
    (1, 20348, InvoiceStatus::Pending, 2022, 11, 14),
    (4, 3040, InvoiceStatus::Paid, 2022, 10, 29),
    (3, 44800, InvoiceStatus::Paid, 2023, 9, 10),
    (5, 34577, InvoiceStatus::Pending, 2023, 8, 5),
    (7, 54246, InvoiceStatus::Pending, 2023, 7, 16),
    (6, 666, InvoiceStatus::Pending, 2023, 6, 27),
    (3, 32545, InvoiceStatus::Paid, 2023, 6, 9),
    (4, 1250, InvoiceStatus::Paid, 2023, 6, 17),
    (5, 8546, InvoiceStatus::Paid, 2023, 6, 7),
    (1, 500, InvoiceStatus::Paid, 2023, 8, 19),
    (5, 8945, InvoiceStatus::Paid, 2023, 6, 3),
    (2, 8945, InvoiceStatus::Paid, 2023, 6, 18),
    (0, 8945, InvoiceStatus::Paid, 2023, 10, 4),
    (2, 1000, InvoiceStatus::Paid, 2022, 6, 5),
    (8, 21500, InvoiceStatus::Pending, 2023, 11, 2),
    (9, 67300, InvoiceStatus::Paid, 2023, 3, 21),
];

/// Fill an empty database with demo customers and invoices.
///
/// Returns the number of invoices inserted; zero when the database already
/// holds invoices.
pub async fn seed_demo_data(database: &Database) -> Result<usize, sqlx::Error> {
    if database.count_invoices().await? > 0 {
        info!("Invoices already present, skipping demo data");
        return Ok(0);
    }

    let mut customer_ids = Vec::with_capacity(DEMO_CUSTOMERS.len());
    for (name, email, image_url) in DEMO_CUSTOMERS {
        let customer = DbCustomer {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            image_url: image_url.to_string(),
        };
        database.insert_customer(&customer).await?;
        customer_ids.push(customer.id);
    }

    let mut inserted = 0;
    for &(customer, amount_cents, status, year, month, day) in DEMO_INVOICES {
        let (Some(customer_id), Some(date)) = (
            customer_ids.get(customer),
            NaiveDate::from_ymd_opt(year, month, day),
        ) else {
            continue;
        };
        let invoice = DbInvoice {
            id: Uuid::new_v4().to_string(),
            customer_id: customer_id.clone(),
            amount_cents,
            date,
            status,
        };
        database.insert_invoice(&invoice).await?;
        inserted += 1;
    }

    info!("Seeded {} demo invoices", inserted);
    Ok(inserted)
}
