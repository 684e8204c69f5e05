pub mod a001_order;
pub mod a002_customer;
pub mod a003_inventory_item;
pub mod common;
