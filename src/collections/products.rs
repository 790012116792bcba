use crate::entity::{Collection, Record};
use crate::filter::Searchable;
use crate::ids;
use serde::{Deserialize, Serialize};

pub const PRODUCT_STATUSES: &[&str] = &["active", "inactive", "out_of_stock"];

/// Catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub status: String,
    pub image: String,
    pub created_at: String,
}

/// Stock badge shown next to a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

impl StockLevel {
    /// Below this many units a product counts as low stock.
    pub const LOW_THRESHOLD: u32 = 10;

    pub fn for_stock(stock: u32) -> Self {
        match stock {
            0 => StockLevel::OutOfStock,
            n if n < Self::LOW_THRESHOLD => StockLevel::Low,
            _ => StockLevel::InStock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "Out of Stock",
            StockLevel::Low => "Low Stock",
            StockLevel::InStock => "In Stock",
        }
    }
}

impl Product {
    /// New product with a generated id, created today.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        stock: u32,
        status: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Product {
            id: ids::prefixed_id("product"),
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            stock,
            status: status.into(),
            image: image.into(),
            created_at: ids::today(),
        }
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::for_stock(self.stock)
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Collection for Product {
    const NAME: &'static str = "products";
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn status(&self) -> &str {
        &self.status
    }
}
