use std::time::Duration;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::GatewayError;
use crate::domain::order::{OrderConfirmation, OrderRequest};
use crate::domain::ports::OrderGateway;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ── Wire DTOs ─────────────────────────────────────────────────────────────

/// Line item as the order endpoint expects it.
#[derive(Debug, Serialize)]
struct OrderLineDto<'a> {
    #[serde(rename = "productid")]
    product_id: &'a str,
    quantity: u32,
    name: &'a str,
    image: &'a str,
    price: &'a BigDecimal,
}

#[derive(Debug, Serialize)]
struct CreateOrderDto<'a> {
    orderdao: Vec<OrderLineDto<'a>>,
}

impl<'a> CreateOrderDto<'a> {
    fn from_request(request: &'a OrderRequest) -> Self {
        Self {
            orderdao: request
                .lines
                .iter()
                .map(|l| OrderLineDto {
                    product_id: &l.product_id,
                    quantity: l.quantity,
                    name: &l.name,
                    image: &l.image,
                    price: &l.price,
                })
                .collect(),
        }
    }
}

// ── Error conversions (infrastructure concern only) ──────────────────────

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::Request(e.to_string())
    }
}

// ── Gateway ───────────────────────────────────────────────────────────────

/// `reqwest`-backed client for the remote order-creation endpoint.
pub struct HttpOrderGateway {
    http: Client,
    base_url: String,
}

impl HttpOrderGateway {
    /// `base_url` is the backend root, e.g. `https://api.example.com`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn submit(&self, request: &OrderRequest) -> Result<OrderConfirmation, GatewayError> {
        let url = format!("{}/orders", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&CreateOrderDto::from_request(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        Ok(OrderConfirmation::from_response(body))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use serde_json::json;

    use super::CreateOrderDto;
    use crate::domain::cart::{CartLine, Product};
    use crate::domain::order::OrderRequest;

    #[test]
    fn payload_matches_the_endpoint_contract() {
        let lines = vec![
            CartLine::new(
                &Product {
                    id: "1".to_string(),
                    name: "Widget".to_string(),
                    price: BigDecimal::from_str("10").expect("valid decimal"),
                    image: "/images/widget.png".to_string(),
                },
                2,
            ),
            CartLine::new(
                &Product {
                    id: "2".to_string(),
                    name: "Gadget".to_string(),
                    price: BigDecimal::from_str("5").expect("valid decimal"),
                    image: "/images/gadget.png".to_string(),
                },
                1,
            ),
        ];
        let request = OrderRequest::from_lines(&lines);

        let payload = serde_json::to_value(CreateOrderDto::from_request(&request))
            .expect("serialize failed");

        assert_eq!(
            payload,
            json!({
                "orderdao": [
                    {
                        "productid": "1",
                        "quantity": 2,
                        "name": "Widget",
                        "image": "/images/widget.png",
                        "price": "10"
                    },
                    {
                        "productid": "2",
                        "quantity": 1,
                        "name": "Gadget",
                        "image": "/images/gadget.png",
                        "price": "5"
                    }
                ]
            })
        );
    }
}
