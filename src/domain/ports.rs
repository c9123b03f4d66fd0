use async_trait::async_trait;

use super::cart::CartLine;
use super::customer::Customer;
use super::errors::{GatewayError, StoreError};
use super::order::{OrderConfirmation, OrderRequest};

/// Durable snapshot storage for the cart. The whole line list is written on
/// every mutation; `load` returns `None` when no snapshot exists yet.
pub trait CartStore: Send + Sync + 'static {
    fn load(&self) -> Result<Option<Vec<CartLine>>, StoreError>;
    fn save(&self, lines: &[CartLine]) -> Result<(), StoreError>;
}

/// Remote order-creation endpoint.
#[async_trait]
pub trait OrderGateway: Send + Sync + 'static {
    async fn submit(&self, request: &OrderRequest) -> Result<OrderConfirmation, GatewayError>;
}

/// Source of the currently authenticated customer, if any.
pub trait SessionProvider: Send + Sync + 'static {
    fn current_customer(&self) -> Option<Customer>;
}
