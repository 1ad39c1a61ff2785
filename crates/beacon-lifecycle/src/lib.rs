// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lifecycle integration gateway for the Beacon app services SDK.
//!
//! Hooks an application's screen lifecycle event stream and forwards events
//! into the Beacon update, crash, tracking, and metrics services, so that
//! individual screens need no boilerplate calls. Per screen and per event
//! the gateway decides whether to dispatch based on the configuration flags
//! and the per-screen predicates in
//! [`GatewayConfig`](beacon_lifecycle_core::GatewayConfig).
//!
//! The gateway is an ordinary value: construct it at your composition root
//! with [`LifecycleGateway::attach`] and hand it to whatever subsystem
//! drives [`ScreenLifecycleObserver`]. For hosts that prefer the classic
//! process-global wiring, [`global::init`] / [`global::instance`] layer a
//! first-call-wins cell on top.
//!
//! # Example
//!
//! ```
//! use beacon_lifecycle::{LifecycleGateway, ScreenLifecycleObserver, ServiceSet};
//! use beacon_lifecycle_core::{AppContext, GatewayConfig, Screen};
//!
//! struct Home;
//!
//! impl Screen for Home {
//!     fn name(&self) -> &str {
//!         "home"
//!     }
//! }
//!
//! let config = GatewayConfig::builder()
//!     .tracking(true)
//!     .update_check(true)
//!     .app_id("bcn_1234")
//!     .update_check_where(|screen| screen.name() != "login")
//!     .build();
//!
//! let app = AppContext::new("com.example.app").with_version("1.2.3");
//! let gateway = LifecycleGateway::attach(&app, config, ServiceSet::noop());
//!
//! // The host runtime drives the observer per screen, in lifecycle order.
//! let screen = Home;
//! gateway.on_screen_created(&screen);
//! gateway.on_screen_resumed(&screen);
//! gateway.on_screen_paused(&screen);
//! ```

pub mod gateway;
pub mod global;
pub mod observer;
pub mod services;

pub use gateway::LifecycleGateway;
pub use global::{init, instance, GatewayCell};
pub use observer::ScreenLifecycleObserver;
pub use services::{
	CrashService, MetricsService, ServiceSet, ServiceSetBuilder, TrackingService, UpdateService,
};
