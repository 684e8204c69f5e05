pub mod kitchen;
pub mod list;
