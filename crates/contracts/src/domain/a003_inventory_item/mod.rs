pub mod aggregate;
pub mod stock;
