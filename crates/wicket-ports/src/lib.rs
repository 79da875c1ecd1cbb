pub mod outbound;
pub mod types;
