//! Example driver: seeds a small catalog and exercises the inventory.

use anyhow::Context;
use chrono::NaiveDate;

use stockroom_core::DomainResult;
use stockroom_inventory::Inventory;
use stockroom_products::Product;

/// Env var overriding the date used by the expiry sweep (`YYYY-MM-DD`).
pub const TODAY_ENV: &str = "STOCKROOM_TODAY";

/// The four-product sample catalog.
pub fn sample_catalog() -> DomainResult<Inventory> {
    let milk_expiry = NaiveDate::from_ymd_opt(2025, 1, 1)
        .ok_or_else(|| stockroom_core::DomainError::validation("invalid expiry date"))?;

    let mut inv = Inventory::new();
    inv.add_products([
        Product::electronics("E001", "Laptop", 1500.0, 5, 2, "Dell")?,
        Product::electronics("E002", "Computer", 1200.0, 12, 2, "Dell")?,
        Product::grocery("G001", "Milk", 2.5, 10, milk_expiry)?,
        Product::clothing("C001", "T-Shirt", 20.0, 15, "L", "Cotton")?,
    ])?;
    Ok(inv)
}

/// Date the expiry sweep runs against: the override if set, else `fallback`.
pub fn sweep_date(
    lookup: impl Fn(&str) -> Option<String>,
    fallback: NaiveDate,
) -> anyhow::Result<NaiveDate> {
    match lookup(TODAY_ENV) {
        Some(raw) if !raw.trim().is_empty() => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .with_context(|| format!("{TODAY_ENV} must be YYYY-MM-DD (got {raw:?})")),
        _ => Ok(fallback),
    }
}
