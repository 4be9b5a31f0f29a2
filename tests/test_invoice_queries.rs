mod support;

use crate::support::{create_test_customer, create_test_invoice, setup_test_database};
use dashboard::config::Config;
use dashboard::db::{Database, InvoiceStatus, ITEMS_PER_PAGE};
use dashboard::invoices::InvoiceSource;
use dashboard::seed::seed_demo_data;
use dashboard::startup::initialize_database;
use tempfile::TempDir;

/// Two customers, thirteen invoices on distinct days of 2023
async fn insert_fixture(database: &Database) {
    database
        .insert_customer(&create_test_customer("lee", "Lee Robinson", "lee@robinson.com"))
        .await
        .unwrap();
    database
        .insert_customer(&create_test_customer("amy", "Amy Burrell", "amy@burrell.com"))
        .await
        .unwrap();

    for day in 1..=13u32 {
        let (customer, status) = if day % 2 == 0 {
            ("amy", InvoiceStatus::Paid)
        } else {
            ("lee", InvoiceStatus::Pending)
        };
        let invoice = create_test_invoice(
            &format!("inv-{:02}", day),
            customer,
            i64::from(day) * 1000 + 57,
            &format!("2023-03-{:02}", day),
            status,
        );
        database.insert_invoice(&invoice).await.unwrap();
    }
}

#[tokio::test]
async fn test_empty_database_returns_no_rows() {
    let (database, _temp_dir) = setup_test_database().await;

    let invoices = database.fetch_filtered_invoices("", 1).await.unwrap();
    assert!(invoices.is_empty());
    assert_eq!(database.count_filtered_invoices("").await.unwrap(), 0);
    assert_eq!(database.fetch_invoice_pages("").await.unwrap(), 0);
}

#[tokio::test]
async fn test_pages_are_newest_first() {
    let (database, _temp_dir) = setup_test_database().await;
    insert_fixture(&database).await;

    let first = database.fetch_filtered_invoices("", 1).await.unwrap();
    assert_eq!(first.len(), ITEMS_PER_PAGE as usize);
    let ids: Vec<&str> = first.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["inv-13", "inv-12", "inv-11", "inv-10", "inv-09", "inv-08"]);

    let second = database.fetch_filtered_invoices("", 2).await.unwrap();
    assert_eq!(second.first().map(|i| i.id.as_str()), Some("inv-07"));

    let third = database.fetch_filtered_invoices("", 3).await.unwrap();
    assert_eq!(third.len(), 1);
    assert_eq!(third[0].id, "inv-01");

    let past_end = database.fetch_filtered_invoices("", 40).await.unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_rows_join_customer_details() {
    let (database, _temp_dir) = setup_test_database().await;
    insert_fixture(&database).await;

    let invoices = database.fetch_filtered_invoices("", 1).await.unwrap();
    let latest = &invoices[0];
    assert_eq!(latest.customer_name, "Lee Robinson");
    assert_eq!(latest.email, "lee@robinson.com");
    assert_eq!(latest.image_url, "/customers/lee.png");
    assert_eq!(latest.amount_cents, 13057);
    assert_eq!(latest.due_date.to_string(), "2023-03-13");
    assert_eq!(latest.status, InvoiceStatus::Pending);
}

#[tokio::test]
async fn test_search_matches_each_column() {
    let (database, _temp_dir) = setup_test_database().await;
    insert_fixture(&database).await;

    // Customer name, case-insensitive
    assert_eq!(database.count_filtered_invoices("AMY").await.unwrap(), 6);
    // Email
    assert_eq!(database.count_filtered_invoices("robinson.com").await.unwrap(), 7);
    // Status
    assert_eq!(database.count_filtered_invoices("paid").await.unwrap(), 6);
    // Amount in cents
    assert_eq!(database.count_filtered_invoices("12057").await.unwrap(), 1);
    // Date
    assert_eq!(database.count_filtered_invoices("2023-03-1").await.unwrap(), 4);
    // Nothing
    assert_eq!(database.count_filtered_invoices("zzz").await.unwrap(), 0);

    let amy = database.fetch_filtered_invoices("amy", 1).await.unwrap();
    assert!(amy.iter().all(|i| i.customer_name == "Amy Burrell"));
    assert_eq!(amy.first().map(|i| i.id.as_str()), Some("inv-12"));
}

#[tokio::test]
async fn test_invoice_pages_follow_search() {
    let (database, _temp_dir) = setup_test_database().await;
    insert_fixture(&database).await;

    assert_eq!(database.fetch_invoice_pages("").await.unwrap(), 3);
    assert_eq!(database.fetch_invoice_pages("lee").await.unwrap(), 2);
    assert_eq!(database.fetch_invoice_pages("amy").await.unwrap(), 1);
    assert_eq!(database.fetch_invoice_pages("nobody").await.unwrap(), 0);
}

#[tokio::test]
async fn test_seed_demo_data_only_fills_empty_database() {
    let (database, _temp_dir) = setup_test_database().await;

    let inserted = seed_demo_data(&database).await.unwrap();
    assert!(inserted > ITEMS_PER_PAGE as usize);
    assert_eq!(database.count_invoices().await.unwrap(), inserted as i64);

    assert_eq!(seed_demo_data(&database).await.unwrap(), 0);
    assert_eq!(database.count_invoices().await.unwrap(), inserted as i64);
}

#[tokio::test]
async fn test_initialize_database_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        database_path: temp_dir.path().join("nested/data/invoices.db"),
        seed_demo_data: true,
    };

    let database = initialize_database(&config).await.unwrap();
    assert!(config.database_path.exists());
    assert!(database.count_invoices().await.unwrap() > 0);

    let first_page = database.fetch_filtered_invoices("", 1).await.unwrap();
    assert_eq!(first_page.len(), ITEMS_PER_PAGE as usize);
}
