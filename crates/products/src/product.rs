use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

/// Discriminant of the closed product variant set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductKind {
    Electronics,
    Grocery,
    Clothing,
}

impl ProductKind {
    pub const ALL: [ProductKind; 3] = [
        ProductKind::Electronics,
        ProductKind::Grocery,
        ProductKind::Clothing,
    ];

    /// The variant name, used as the product's type tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Electronics => "Electronics",
            ProductKind::Grocery => "Grocery",
            ProductKind::Clothing => "Clothing",
        }
    }

    /// Case-insensitive comparison against a type tag. Whitespace is significant.
    pub fn matches(self, tag: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(tag)
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ProductKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductKind::ALL
            .into_iter()
            .find(|kind| kind.matches(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown product type: {s}")))
    }
}

/// Variant-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProductDetails {
    Electronics { warranty_years: u32, brand: String },
    Grocery { expiry_date: NaiveDate },
    Clothing { size: String, material: String },
}

impl ProductDetails {
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductDetails::Electronics { .. } => ProductKind::Electronics,
            ProductDetails::Grocery { .. } => ProductKind::Grocery,
            ProductDetails::Clothing { .. } => ProductKind::Clothing,
        }
    }
}

/// A sellable catalog item.
///
/// The base record (id, name, price, stock) is shared by every variant; the
/// variant-specific part lives in [`ProductDetails`]. Stock is unsigned, so
/// `quantity_in_stock >= 0` holds by construction and [`Product::sell`] keeps
/// it there. Deserialization goes through [`Product::new`], so payloads get
/// the same validation as constructed products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    product_id: ProductId,
    name: String,
    price: f64,
    quantity_in_stock: u32,
    #[serde(flatten)]
    details: ProductDetails,
}

/// Unvalidated wire shape of a [`Product`].
#[derive(Debug, Deserialize)]
struct ProductRecord {
    product_id: ProductId,
    name: String,
    price: f64,
    quantity_in_stock: u32,
    #[serde(flatten)]
    details: ProductDetails,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(
            record.product_id,
            record.name,
            record.price,
            record.quantity_in_stock,
            record.details,
        )
    }
}

impl Product {
    /// Build a product after validating the base record.
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        details: ProductDetails,
    ) -> DomainResult<Self> {
        let product_id = product_id.into();
        let name = name.into();

        if product_id.is_blank() {
            return Err(DomainError::validation("product_id cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be a non-negative number (got {price})"
            )));
        }

        Ok(Self {
            product_id,
            name,
            price,
            quantity_in_stock,
            details,
        })
    }

    pub fn electronics(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        warranty_years: u32,
        brand: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(
            product_id,
            name,
            price,
            quantity_in_stock,
            ProductDetails::Electronics {
                warranty_years,
                brand: brand.into(),
            },
        )
    }

    pub fn grocery(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        expiry_date: NaiveDate,
    ) -> DomainResult<Self> {
        Self::new(
            product_id,
            name,
            price,
            quantity_in_stock,
            ProductDetails::Grocery { expiry_date },
        )
    }

    pub fn clothing(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(
            product_id,
            name,
            price,
            quantity_in_stock,
            ProductDetails::Clothing {
                size: size.into(),
                material: material.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    /// Derived type tag (the variant).
    pub fn kind(&self) -> ProductKind {
        self.details.kind()
    }

    /// Variant name, e.g. `"Electronics"`.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Expiry date, for groceries only.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        match self.details {
            ProductDetails::Grocery { expiry_date } => Some(expiry_date),
            _ => None,
        }
    }

    /// Whether this is a grocery whose expiry date lies strictly before `today`.
    ///
    /// Evaluated on every call; other variants never expire.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date().is_some_and(|expiry| today > expiry)
    }

    /// Case-insensitive exact comparison against the display name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Stock value: `price * quantity_in_stock`.
    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity_in_stock)
    }

    /// Increase stock by `amount`.
    pub fn restock(&mut self, amount: u32) -> DomainResult<()> {
        let new_stock = self.quantity_in_stock.checked_add(amount).ok_or_else(|| {
            DomainError::stock_overflow(&self.product_id, amount, self.quantity_in_stock)
        })?;

        tracing::debug!(
            product_id = %self.product_id,
            amount,
            stock = new_stock,
            "product restocked"
        );
        self.quantity_in_stock = new_stock;
        Ok(())
    }

    /// Decrease stock by `quantity`, refusing to go below zero.
    pub fn sell(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity > self.quantity_in_stock {
            return Err(DomainError::insufficient_stock(
                &self.product_id,
                quantity,
                self.quantity_in_stock,
            ));
        }

        self.quantity_in_stock -= quantity;
        tracing::debug!(
            product_id = %self.product_id,
            quantity,
            stock = self.quantity_in_stock,
            "product sold"
        );
        Ok(())
    }

    /// Display form plus the time-dependent `Expired` flag for groceries.
    pub fn render_at(&self, today: NaiveDate) -> String {
        match self.details {
            ProductDetails::Grocery { .. } => {
                let mut rendered = self.to_string();
                rendered.pop();
                format!("{rendered}, Expired: {}]", self.is_expired(today))
            }
            _ => self.to_string(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self {
            product_id: id,
            name,
            price,
            quantity_in_stock: stock,
            details,
        } = self;

        match details {
            ProductDetails::Electronics {
                warranty_years,
                brand,
            } => write!(
                f,
                "Electronics[ID: {id}, Name: {name}, Brand: {brand}, Price: {price:?}, \
                 Stock: {stock}, Warranty: {warranty_years} years]"
            ),
            ProductDetails::Grocery { expiry_date } => write!(
                f,
                "Grocery[ID: {id}, Name: {name}, Price: {price:?}, Stock: {stock}, \
                 Expiry Date: {expiry_date}]"
            ),
            ProductDetails::Clothing { size, material } => write!(
                f,
                "Clothing[ID: {id}, Name: {name}, Size: {size}, Material: {material}, \
                 Price: {price:?}, Stock: {stock}]"
            ),
        }
    }
}
