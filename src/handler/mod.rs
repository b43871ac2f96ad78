pub mod dog;
pub mod error;
pub mod extract;
