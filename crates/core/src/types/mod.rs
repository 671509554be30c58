//! Core types for Carrito.
//!
//! This module provides the user entity and type-safe wrappers for the
//! identifiers it is keyed and related by.

pub mod nick;
pub mod order;
pub mod user;

pub use nick::Nick;
pub use order::OrderId;
pub use user::{LoginCredentials, User};
