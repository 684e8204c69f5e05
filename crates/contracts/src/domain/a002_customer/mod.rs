pub mod aggregate;
pub mod tier;
