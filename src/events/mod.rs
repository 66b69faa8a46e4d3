mod decoder;
mod error;
mod models;

#[cfg(test)]
mod tests;

pub use decoder::*;
pub use error::DecodeError;
pub use models::*;
