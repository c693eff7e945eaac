//! Business logic services

pub mod generation;
pub mod prospects;
pub mod wizard;
