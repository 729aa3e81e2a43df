use anyhow::Context;

use stockroom_demo::{TODAY_ENV, sample_catalog, sweep_date};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let today = sweep_date(
        |key| std::env::var(key).ok(),
        chrono::Local::now().date_naive(),
    )?;
    tracing::info!(%today, override_env = TODAY_ENV, "starting demo");

    let mut inv = sample_catalog().context("failed to seed sample catalog")?;

    for line in inv.list_all_products_at(today) {
        println!("{line}");
    }

    inv.sell_product("C001", 5)
        .context("failed to sell C001")?;

    println!("Total Inventory Value: {}", inv.total_inventory_value());

    let removed = inv.remove_expired_products(today);
    for product in &removed {
        println!("Removed expired: {product}");
    }

    for line in inv.list_all_products() {
        println!("{line}");
    }

    let snapshot = serde_json::to_string_pretty(&inv.snapshot())
        .context("failed to serialize inventory snapshot")?;
    println!("{snapshot}");

    Ok(())
}
