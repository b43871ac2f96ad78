pub mod dog;

pub use dog::{DogStore, InMemoryDogStore, StoreError};
