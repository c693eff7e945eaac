//! Data models shared across commands and services

pub mod campaign;
pub mod catalog;
pub mod response;
