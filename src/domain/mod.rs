pub mod catalogue;
pub mod errors;
pub mod order;
pub mod ports;
