pub mod order_status;
pub mod order_type;
pub mod staff_role;
