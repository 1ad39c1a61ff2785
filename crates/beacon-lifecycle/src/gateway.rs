// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The lifecycle gateway: forwards screen lifecycle events into Beacon
//! service calls, gated by configuration flags and per-screen predicates.

use beacon_lifecycle_core::{AppContext, GatewayConfig, Screen};
use tracing::{debug, info};

use crate::observer::ScreenLifecycleObserver;
use crate::services::ServiceSet;

/// Mediates between the host's lifecycle event stream and the four Beacon
/// services.
///
/// The gateway holds a write-once configuration and dispatches
/// synchronously on whatever thread the host delivers events from; it never
/// blocks, retries, or spawns work of its own. Construct one at your
/// composition root and hand it to whatever subsystem observes screen
/// lifecycles, or use [`crate::global::init`] for the process-global
/// wiring.
///
/// # Example
///
/// ```
/// use beacon_lifecycle::{LifecycleGateway, ServiceSet};
/// use beacon_lifecycle_core::{AppContext, GatewayConfig};
///
/// let config = GatewayConfig::builder()
///     .tracking(true)
///     .app_id("bcn_1234")
///     .build();
///
/// let app = AppContext::new("com.example.app");
/// let gateway = LifecycleGateway::attach(&app, config, ServiceSet::noop());
/// assert!(gateway.config().tracking_enabled());
/// ```
pub struct LifecycleGateway {
	config: GatewayConfig,
	services: ServiceSet,
}

impl LifecycleGateway {
	/// Plain constructor. No service is contacted.
	#[must_use]
	pub fn new(config: GatewayConfig, services: ServiceSet) -> Self {
		Self { config, services }
	}

	/// Composition-root constructor: builds the gateway and, if metrics are
	/// enabled, performs the one-time metrics registration for `app`.
	#[must_use]
	pub fn attach(app: &AppContext, config: GatewayConfig, services: ServiceSet) -> Self {
		let gateway = Self::new(config, services);
		if gateway.config.metrics_enabled() {
			debug!(package = %app.package_name, "registering metrics");
			gateway
				.services
				.metrics()
				.register(app, gateway.config.app_id());
		}
		info!(package = %app.package_name, "lifecycle gateway attached");
		gateway
	}

	/// The active configuration.
	#[must_use]
	pub fn config(&self) -> &GatewayConfig {
		&self.config
	}

	/// Whether update checking applies to `screen`.
	///
	/// `None` (no current screen) is never eligible; otherwise the global
	/// flag and the per-screen predicate must both agree.
	#[must_use]
	pub fn update_check_enabled_for(&self, screen: Option<&dyn Screen>) -> bool {
		match screen {
			None => false,
			Some(screen) => {
				self.config.update_check_enabled() && self.config.update_predicate_matches(screen)
			}
		}
	}

	/// Whether crash registration applies to `screen`. Symmetric with
	/// [`Self::update_check_enabled_for`].
	#[must_use]
	pub fn crash_report_enabled_for(&self, screen: Option<&dyn Screen>) -> bool {
		match screen {
			None => false,
			Some(screen) => {
				self.config.crash_report_enabled() && self.config.crash_predicate_matches(screen)
			}
		}
	}
}

impl ScreenLifecycleObserver for LifecycleGateway {
	fn on_screen_created(&self, screen: &dyn Screen) {
		if !self.update_check_enabled_for(Some(screen)) {
			return;
		}
		let app_id = self.config.app_id();
		if app_id.is_empty() {
			// Missing credential suppresses registration; not an error.
			debug!(screen = screen.name(), "no app id, skipping update registration");
			return;
		}
		debug!(screen = screen.name(), "registering update check");
		self.services.update().register(
			screen,
			app_id,
			self.config.update_listener(),
			self.config.update_dialog_required(),
		);
	}

	fn on_screen_resumed(&self, screen: &dyn Screen) {
		if self.crash_report_enabled_for(Some(screen)) {
			debug!(screen = screen.name(), "registering crash reporting");
			match self.config.crash_listener() {
				Some(listener) => self.services.crash().register_with_listener(
					screen,
					self.config.app_id(),
					listener,
				),
				None => self.services.crash().register(screen, self.config.app_id()),
			}
		}

		if self.config.tracking_enabled() {
			self.services.tracking().start_usage(screen);
		}
	}

	fn on_screen_paused(&self, screen: &dyn Screen) {
		if self.update_check_enabled_for(Some(screen)) {
			debug!(screen = screen.name(), "unregistering update check");
			self.services.update().unregister();
		}

		if self.config.tracking_enabled() {
			self.services.tracking().stop_usage(screen);
		}
	}
}
