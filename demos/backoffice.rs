//! Back-office walkthrough: bootstrap from fixture files, edit, restart.

use offline_lists::collections::{Order, Product, SupportTicket, ORDER_STATUSES};
use offline_lists::config::PersistenceConfig;
use offline_lists::{error::Result, ListFilter, PersistenceService};
use std::fs;

const ORDERS_FIXTURE: &str = r#"[
  {"id":"1","orderNumber":"ORD-1001","customerName":"John Doe","customerEmail":"john@example.com","total":129.99,"status":"pending","items":3,"createdAt":"2024-03-01","updatedAt":"2024-03-01"},
  {"id":"2","orderNumber":"ORD-1002","customerName":"Jane Smith","customerEmail":"jane@example.com","total":59.5,"status":"shipped","items":1,"createdAt":"2024-03-02","updatedAt":"2024-03-03"},
  {"id":"3","orderNumber":"ORD-1003","customerName":"Bob Johnson","customerEmail":"bob@example.com","total":249.0,"status":"delivered","items":5,"createdAt":"2024-03-04","updatedAt":"2024-03-07"}
]"#;

const PRODUCTS_FIXTURE: &str = r#"[
  {"id":"1","name":"Wireless Mouse","description":"Ergonomic 2.4GHz mouse","price":24.99,"category":"Electronics","stock":42,"status":"active","image":"","createdAt":"2024-01-10"},
  {"id":"2","name":"Desk Lamp","description":"LED lamp with dimmer","price":39.0,"category":"Home & Garden","stock":4,"status":"active","image":"","createdAt":"2024-01-12"}
]"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .try_init()
        .ok();

    println!("\n=== offline-lists - Back-office Example ===\n");

    let workdir = std::env::temp_dir().join(format!("offline-lists-demo-{}", std::process::id()));
    let fixtures = workdir.join("fixtures");
    fs::create_dir_all(fixtures.join("data"))?;
    fs::write(fixtures.join("data/orders.json"), ORDERS_FIXTURE)?;
    fs::write(fixtures.join("data/products.json"), PRODUCTS_FIXTURE)?;

    let config = PersistenceConfig::from_env()
        .with_seed_base(fixtures.to_string_lossy().to_string())
        .with_store_dir(workdir.join("store"));

    // 1. First run - every collection bootstraps from its fixture
    println!("1. First run, empty store:");
    let service = PersistenceService::from_config_offline(&config)?;

    let mut orders = service.adapter::<Order>();
    orders.activate().await;
    println!("   ✓ {} orders loaded from fixtures", orders.len());

    let mut products = service.adapter::<Product>();
    products.activate().await;
    for product in products.records() {
        println!(
            "   - {} ({}): {}",
            product.name,
            product.stock,
            product.stock_level().label()
        );
    }

    // Support has no fixture: the seed fails and the list starts empty
    let mut tickets = service.adapter::<SupportTicket>();
    tickets.activate().await;
    println!("   ✓ {} support tickets (no fixture)\n", tickets.len());

    // 2. Edits are written back immediately
    println!("2. Editing:");
    let first_id = orders.records()[0].id.clone();
    orders.patch(&first_id, |o| o.set_status("processing")).await;
    orders
        .create(Order::new(
            "ORD-1004",
            "Alice Brown",
            "alice@example.com",
            18.25,
            1,
            "pending",
        ))
        .await;

    let ticket = SupportTicket::new(
        tickets.len(),
        "Order ORD-1002 arrived damaged",
        "high",
        "Jane Smith",
        None,
    );
    tickets.create(ticket).await;

    for status in ORDER_STATUSES {
        let count = orders.status_counts().get(*status).copied().unwrap_or(0);
        println!("   {:<11} {}", status, count);
    }

    let pending = orders.filtered(&ListFilter::new().with_status("pending"));
    println!("   ✓ {} pending orders\n", pending.len());

    // 3. Restart - fixtures gone, local copy is authoritative
    println!("3. Restart without fixtures:");
    fs::remove_dir_all(&fixtures)?;

    let service = PersistenceService::from_config_offline(&config)?;
    let orders: Vec<Order> = service.load_collection().await;
    let tickets: Vec<SupportTicket> = service.load_collection().await;
    println!(
        "   ✓ {} orders and {} tickets restored from the local store\n",
        orders.len(),
        tickets.len()
    );

    fs::remove_dir_all(&workdir)?;
    Ok(())
}
