// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-global gateway registration.
//!
//! Hosts that cannot thread a [`LifecycleGateway`] through their composition
//! root can fall back to the classic pattern: call [`init`] once during
//! application startup, then [`instance`] wherever the lifecycle observer is
//! wired up. The first `init` wins; every later call is silently ignored.

use std::sync::OnceLock;

use beacon_lifecycle_core::{AppContext, GatewayConfig};
use tracing::debug;

use crate::gateway::LifecycleGateway;
use crate::services::ServiceSet;

/// A first-call-wins initialization slot for a [`LifecycleGateway`].
///
/// The check-and-set is atomic: even with racing `init` calls, exactly one
/// gateway is constructed and metrics registration fires at most once.
pub struct GatewayCell {
	slot: OnceLock<LifecycleGateway>,
}

impl GatewayCell {
	#[must_use]
	pub const fn new() -> Self {
		Self {
			slot: OnceLock::new(),
		}
	}

	/// Initializes the cell on the first call; later calls are ignored.
	///
	/// A `None` config falls back to [`GatewayConfig::default`], which leaves
	/// every service disabled.
	pub fn init(&self, app: &AppContext, config: Option<GatewayConfig>, services: ServiceSet) {
		let mut constructed = false;
		self.slot.get_or_init(|| {
			constructed = true;
			LifecycleGateway::attach(app, config.unwrap_or_default(), services)
		});
		if !constructed {
			debug!("lifecycle gateway already initialized, ignoring");
		}
	}

	/// The gateway, or `None` if [`GatewayCell::init`] has not been called.
	#[must_use]
	pub fn get(&self) -> Option<&LifecycleGateway> {
		self.slot.get()
	}
}

impl Default for GatewayCell {
	fn default() -> Self {
		Self::new()
	}
}

static GATEWAY: GatewayCell = GatewayCell::new();

/// Initializes the process-global gateway. Call once, early, from your
/// application's startup path; repeated calls are silently ignored.
pub fn init(app: &AppContext, config: Option<GatewayConfig>, services: ServiceSet) {
	GATEWAY.init(app, config, services);
}

/// The process-global gateway, or `None` before [`init`].
#[must_use]
pub fn instance() -> Option<&'static LifecycleGateway> {
	GATEWAY.get()
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Arc;

	use super::*;
	use crate::services::MetricsService;

	struct CountingMetrics {
		registrations: AtomicUsize,
	}

	impl MetricsService for CountingMetrics {
		fn register(&self, _app: &AppContext, _app_id: &str) {
			self.registrations.fetch_add(1, Ordering::SeqCst);
		}
	}

	fn metrics_services() -> (ServiceSet, Arc<CountingMetrics>) {
		let metrics = Arc::new(CountingMetrics {
			registrations: AtomicUsize::new(0),
		});
		let services = ServiceSet::builder().metrics(metrics.clone()).build();
		(services, metrics)
	}

	#[test]
	fn get_before_init_is_none() {
		let cell = GatewayCell::new();
		assert!(cell.get().is_none());
	}

	#[test]
	fn init_registers_metrics_exactly_once() {
		let cell = GatewayCell::new();
		let app = AppContext::new("com.example.app");
		let config = GatewayConfig::builder().metrics(true).app_id("bcn_1234").build();
		let (services, metrics) = metrics_services();

		cell.init(&app, Some(config.clone()), services.clone());
		assert_eq!(metrics.registrations.load(Ordering::SeqCst), 1);

		// Second init is a silent no-op; no additional registration.
		cell.init(&app, Some(config), services);
		assert_eq!(metrics.registrations.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn init_without_config_uses_all_disabled_defaults() {
		let cell = GatewayCell::new();
		let app = AppContext::new("com.example.app");
		let (services, metrics) = metrics_services();

		cell.init(&app, None, services);

		let gateway = cell.get().unwrap();
		assert!(!gateway.config().update_check_enabled());
		assert!(!gateway.config().crash_report_enabled());
		assert!(!gateway.config().tracking_enabled());
		assert!(!gateway.config().metrics_enabled());
		assert_eq!(metrics.registrations.load(Ordering::SeqCst), 0);
	}

	#[test]
	fn first_init_wins_over_later_configs() {
		let cell = GatewayCell::new();
		let app = AppContext::new("com.example.app");
		let (services, _) = metrics_services();

		cell.init(
			&app,
			Some(GatewayConfig::builder().tracking(true).build()),
			services.clone(),
		);
		cell.init(
			&app,
			Some(GatewayConfig::builder().tracking(false).build()),
			services,
		);

		assert!(cell.get().unwrap().config().tracking_enabled());
	}

	#[test]
	fn racing_inits_construct_a_single_gateway() {
		let cell = Arc::new(GatewayCell::new());
		let app = AppContext::new("com.example.app");
		let config = GatewayConfig::builder().metrics(true).app_id("bcn_1234").build();
		let (services, metrics) = metrics_services();

		std::thread::scope(|scope| {
			for _ in 0..8 {
				let cell = cell.clone();
				let app = app.clone();
				let config = config.clone();
				let services = services.clone();
				scope.spawn(move || cell.init(&app, Some(config), services));
			}
		});

		assert!(cell.get().is_some());
		assert_eq!(metrics.registrations.load(Ordering::SeqCst), 1);
	}
}
