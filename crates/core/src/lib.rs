//! Carrito Core - Shared domain types.
//!
//! This crate provides the domain types used across all Carrito components:
//! - `store` - `PostgreSQL` persistence layer for users and their orders
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The [`types::User`] entity and its identifier newtypes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
