pub mod codec;
pub mod io;
pub mod models;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use codec::{decode, encode, parse_duration_minutes};
pub use models::*;
pub use store::{RecipeStore, SAMPLE_FILE_NAME};
