use bigdecimal::BigDecimal;
use serde_json::Value;

use super::cart::CartLine;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequestLine {
    pub product_id: String,
    pub quantity: u32,
    pub name: String,
    pub image: String,
    pub price: BigDecimal,
}

/// Order submission built from the cart at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub lines: Vec<OrderRequestLine>,
}

impl OrderRequest {
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| OrderRequestLine {
                    product_id: l.product_id.clone(),
                    quantity: l.quantity,
                    name: l.name.clone(),
                    image: l.image.clone(),
                    price: l.price.clone(),
                })
                .collect(),
        }
    }
}

/// Confirmation returned by the order endpoint. The body is carried back
/// opaquely; only the order id is pulled out when the backend provides one.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub order_id: Option<String>,
    pub raw: Value,
}

impl OrderConfirmation {
    pub fn from_response(raw: Value) -> Self {
        let order_id = raw
            .get("id")
            .or_else(|| raw.get("_id"))
            .or_else(|| raw.get("orderId"))
            .and_then(Value::as_str)
            .map(str::to_string);
        Self { order_id, raw }
    }
}
