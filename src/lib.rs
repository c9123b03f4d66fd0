pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CartService;
pub use domain::cart::{CartLine, Product};
pub use domain::customer::Customer;
pub use domain::errors::{CartError, GatewayError, StoreError};
pub use domain::order::{OrderConfirmation, OrderRequest};
pub use domain::ports::{CartStore, OrderGateway, SessionProvider};
pub use infrastructure::{EnvSessionProvider, HttpOrderGateway, JsonFileCartStore};

/// Cart manager wired with the default file store, HTTP order gateway, and
/// environment-backed session, as used by the demo binary.
pub type StorefrontCart = CartService<JsonFileCartStore, HttpOrderGateway, EnvSessionProvider>;

/// Build a cart manager over a JSON snapshot at `cart_path`, an order
/// endpoint rooted at `api_base_url`, and a session profile read from the
/// `session_var` environment variable.
pub fn open_cart(
    cart_path: &str,
    api_base_url: &str,
    session_var: &str,
) -> Result<StorefrontCart, GatewayError> {
    Ok(CartService::restore(
        JsonFileCartStore::new(cart_path),
        HttpOrderGateway::new(api_base_url)?,
        EnvSessionProvider::new(session_var),
    ))
}
