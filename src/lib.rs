pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod fields;
pub mod github;
pub mod inference;
pub mod render;
pub mod repl;
pub mod session;
pub mod theme;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use config::Config;
pub use error::ForgeError;
pub use fields::{DocumentFields, FieldName, FieldStore};
pub use github::{GitHubClient, MetadataSource, RepositoryIdentifier, RepositoryMetadata};
pub use session::Session;
