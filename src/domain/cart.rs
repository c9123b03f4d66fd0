use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog view of a product as seen by the storefront at add-to-cart time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Decimal price to avoid floating-point issues, e.g. "9.99".
    pub price: BigDecimal,
    pub image: String,
}

/// One cart entry: a snapshot of the product taken when it was added, plus
/// the quantity. Snapshot fields are never re-fetched from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
    pub name: String,
    pub price: BigDecimal,
    pub image: String,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            quantity,
            name: product.name.clone(),
            price: product.price.clone(),
            image: product.image.clone(),
            added_at: Utc::now(),
        }
    }

    /// Shape check applied to lines restored from a persisted snapshot.
    /// A stored line always has a non-blank product id and quantity >= 1.
    pub fn is_well_formed(&self) -> bool {
        !self.product_id.trim().is_empty() && self.quantity >= 1
    }

    /// Line total (`price * quantity`).
    pub fn line_total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: BigDecimal::from_str(price).expect("valid decimal"),
            image: format!("/images/{}.png", id),
        }
    }

    #[test]
    fn new_line_snapshots_product_fields() {
        let p = product("sku-1", "9.99");
        let line = CartLine::new(&p, 3);

        assert_eq!(line.product_id, "sku-1");
        assert_eq!(line.quantity, 3);
        assert_eq!(line.name, "Product sku-1");
        assert_eq!(line.price, p.price);
        assert_eq!(line.image, "/images/sku-1.png");
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let line = CartLine::new(&product("sku-1", "2.50"), 4);
        assert_eq!(line.line_total(), BigDecimal::from_str("10.00").unwrap());
    }

    #[test]
    fn blank_product_id_is_not_well_formed() {
        let mut line = CartLine::new(&product("sku-1", "1.00"), 1);
        line.product_id = "   ".to_string();
        assert!(!line.is_well_formed());
    }

    #[test]
    fn zero_quantity_is_not_well_formed() {
        let mut line = CartLine::new(&product("sku-1", "1.00"), 1);
        line.quantity = 0;
        assert!(!line.is_well_formed());
    }
}
