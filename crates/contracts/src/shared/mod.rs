pub mod elapsed;
pub mod lenient;
pub mod money;
