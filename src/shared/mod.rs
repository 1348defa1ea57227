pub mod constants;
pub mod pickup_code;
pub mod types;
