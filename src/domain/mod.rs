pub mod cart;
pub mod customer;
pub mod errors;
pub mod order;
pub mod ports;
