//! Domains module containing business logic organized by bounded contexts.

pub mod manifest;
pub mod resources;
pub mod tools;
