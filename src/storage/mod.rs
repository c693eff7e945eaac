//! Storage layer

pub mod credentials;

pub use credentials::{CredentialStore, StoredCredential};
