pub mod order_service;
pub mod order_validator;
