// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for Beacon lifecycle integration.
//!
//! This crate provides the shared value types consumed by the
//! `beacon-lifecycle` gateway: the [`Screen`] handle supplied by the host
//! runtime, the [`GatewayOptions`] flag surface, the [`GatewayConfig`]
//! builder with its per-screen predicates, and the optional
//! [`UpdateListener`] / [`CrashListener`] result callbacks.
//!
//! # Example
//!
//! ```
//! use beacon_lifecycle_core::{GatewayConfig, GatewayOptions};
//!
//! let options = GatewayOptions::from_toml_str(
//!     r#"
//!     update_check = true
//!     crash_report = true
//!     app_id = "bcn_1234"
//!     "#,
//! )?;
//!
//! let config = GatewayConfig::builder()
//!     .options(options)
//!     .update_check_where(|screen| screen.name() != "login")
//!     .build();
//!
//! assert!(config.update_check_enabled());
//! # Ok::<(), toml::de::Error>(())
//! ```

pub mod config;
pub mod listener;
pub mod screen;

pub use config::{GatewayConfig, GatewayConfigBuilder, GatewayOptions, ScreenPredicate};
pub use listener::{CrashListener, UpdateListener};
pub use screen::{AppContext, Screen};
