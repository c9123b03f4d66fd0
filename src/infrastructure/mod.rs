pub mod json_store;
pub mod order_api;
pub mod session;

pub use json_store::JsonFileCartStore;
pub use order_api::HttpOrderGateway;
pub use session::EnvSessionProvider;
