//! Shared building blocks for the categorias workspace: response types and
//! logging setup.

pub mod types;
pub mod utils;
