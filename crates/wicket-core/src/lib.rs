pub mod error;
pub mod ids;
pub mod input;
pub mod phone;
pub mod step;
pub mod terms;
pub mod token;
