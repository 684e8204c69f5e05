pub mod aggregate;
pub mod stages;
pub mod status;
pub mod urgency;
