pub mod dog;

pub use dog::{DogPayload, DogResponse, MissingFields};
