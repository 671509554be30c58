//! Carrito Store - `PostgreSQL` persistence for users and their orders.
//!
//! This crate is the storage side of the shopping cart: it owns the schema
//! of the `usuario` table and the user/order association, and exposes a
//! repository for loading and saving [`carrito_core::User`] records. The
//! domain types themselves live in `carrito-core`; everything here is I/O.
//!
//! # Modules
//!
//! - [`config`] - Configuration loaded from environment variables
//! - [`db`] - Connection pool construction and the [`db::UserRepository`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;

pub use config::{ConfigError, StoreConfig};
pub use db::{RepositoryError, UserRepository, create_pool};
