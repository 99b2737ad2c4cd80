//! Core components of the `prometeo-dashboard` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`DashboardClient`] and its builder.
//! - The primary [`DashboardError`] type.
//! - The [`Credentials`] used for the login handshake.

/// The main client (`DashboardClient`), builder, and login handshake.
pub mod client;
/// The primary error type (`DashboardError`) for the crate.
pub mod error;
/// Shared data models (`Credentials`).
pub mod models;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

pub use client::{DashboardClient, DashboardClientBuilder};
pub use error::DashboardError;
pub use models::Credentials;
