// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Gateway configuration: the flag surface plus per-screen predicates and
//! optional result listeners.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::listener::{CrashListener, UpdateListener};
use crate::screen::Screen;

/// A per-screen override for update/crash gating.
///
/// Returning `false` excludes the screen without touching global flags
/// (e.g. keep the update dialog off the login screen).
pub type ScreenPredicate = Arc<dyn Fn(&dyn Screen) -> bool + Send + Sync>;

/// The plain-data configuration surface.
///
/// This is the part hosts can load from their config files. Predicates and
/// listeners are code, not data, and live on [`GatewayConfig`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayOptions {
	/// Gate update-service calls.
	pub update_check: bool,
	/// Gate crash-service calls.
	pub crash_report: bool,
	/// Gate usage-tracking calls.
	pub tracking: bool,
	/// Gate the one-time metrics registration at init.
	pub metrics: bool,
	/// Passed through to the update service on every registration.
	pub update_dialog_required: bool,
	/// Beacon service credential/identifier. An empty id suppresses update
	/// registration without raising an error.
	pub app_id: String,
}

impl Default for GatewayOptions {
	fn default() -> Self {
		Self {
			update_check: false,
			crash_report: false,
			tracking: false,
			metrics: false,
			update_dialog_required: true,
			app_id: String::new(),
		}
	}
}

impl GatewayOptions {
	/// Parses options from a TOML document, substituting defaults for any
	/// omitted field.
	pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(input)
	}
}

/// Immutable-after-construction gateway configuration.
///
/// Constructed once at process startup via [`GatewayConfig::builder`] and
/// never mutated afterwards; the gateway holds the only long-lived reference.
#[derive(Clone)]
pub struct GatewayConfig {
	options: GatewayOptions,
	update_predicate: ScreenPredicate,
	crash_predicate: ScreenPredicate,
	update_listener: Option<Arc<dyn UpdateListener>>,
	crash_listener: Option<Arc<dyn CrashListener>>,
}

impl GatewayConfig {
	#[must_use]
	pub fn builder() -> GatewayConfigBuilder {
		GatewayConfigBuilder::new()
	}

	/// Wraps a plain options value with default predicates and no listeners.
	#[must_use]
	pub fn from_options(options: GatewayOptions) -> Self {
		GatewayConfigBuilder::new().options(options).build()
	}

	#[must_use]
	pub fn options(&self) -> &GatewayOptions {
		&self.options
	}

	#[must_use]
	pub fn update_check_enabled(&self) -> bool {
		self.options.update_check
	}

	#[must_use]
	pub fn crash_report_enabled(&self) -> bool {
		self.options.crash_report
	}

	#[must_use]
	pub fn tracking_enabled(&self) -> bool {
		self.options.tracking
	}

	#[must_use]
	pub fn metrics_enabled(&self) -> bool {
		self.options.metrics
	}

	#[must_use]
	pub fn update_dialog_required(&self) -> bool {
		self.options.update_dialog_required
	}

	#[must_use]
	pub fn app_id(&self) -> &str {
		&self.options.app_id
	}

	/// Evaluates the per-screen update predicate.
	#[must_use]
	pub fn update_predicate_matches(&self, screen: &dyn Screen) -> bool {
		(self.update_predicate)(screen)
	}

	/// Evaluates the per-screen crash predicate.
	#[must_use]
	pub fn crash_predicate_matches(&self, screen: &dyn Screen) -> bool {
		(self.crash_predicate)(screen)
	}

	#[must_use]
	pub fn update_listener(&self) -> Option<Arc<dyn UpdateListener>> {
		self.update_listener.clone()
	}

	#[must_use]
	pub fn crash_listener(&self) -> Option<Arc<dyn CrashListener>> {
		self.crash_listener.clone()
	}
}

impl Default for GatewayConfig {
	fn default() -> Self {
		GatewayConfigBuilder::new().build()
	}
}

impl fmt::Debug for GatewayConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GatewayConfig")
			.field("options", &self.options)
			.field("update_listener", &self.update_listener.is_some())
			.field("crash_listener", &self.crash_listener.is_some())
			.finish_non_exhaustive()
	}
}

/// Builder for [`GatewayConfig`].
pub struct GatewayConfigBuilder {
	options: GatewayOptions,
	update_predicate: ScreenPredicate,
	crash_predicate: ScreenPredicate,
	update_listener: Option<Arc<dyn UpdateListener>>,
	crash_listener: Option<Arc<dyn CrashListener>>,
}

impl GatewayConfigBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self {
			options: GatewayOptions::default(),
			update_predicate: Arc::new(|_| true),
			crash_predicate: Arc::new(|_| true),
			update_listener: None,
			crash_listener: None,
		}
	}

	/// Replaces the whole flag surface at once (e.g. loaded from TOML).
	#[must_use]
	pub fn options(mut self, options: GatewayOptions) -> Self {
		self.options = options;
		self
	}

	#[must_use]
	pub fn update_check(mut self, enabled: bool) -> Self {
		self.options.update_check = enabled;
		self
	}

	#[must_use]
	pub fn crash_report(mut self, enabled: bool) -> Self {
		self.options.crash_report = enabled;
		self
	}

	#[must_use]
	pub fn tracking(mut self, enabled: bool) -> Self {
		self.options.tracking = enabled;
		self
	}

	#[must_use]
	pub fn metrics(mut self, enabled: bool) -> Self {
		self.options.metrics = enabled;
		self
	}

	#[must_use]
	pub fn update_dialog_required(mut self, required: bool) -> Self {
		self.options.update_dialog_required = required;
		self
	}

	#[must_use]
	pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
		self.options.app_id = app_id.into();
		self
	}

	/// Restricts update checking to screens the predicate accepts.
	#[must_use]
	pub fn update_check_where<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&dyn Screen) -> bool + Send + Sync + 'static,
	{
		self.update_predicate = Arc::new(predicate);
		self
	}

	/// Restricts crash registration to screens the predicate accepts.
	#[must_use]
	pub fn crash_check_where<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&dyn Screen) -> bool + Send + Sync + 'static,
	{
		self.crash_predicate = Arc::new(predicate);
		self
	}

	#[must_use]
	pub fn update_listener(mut self, listener: Arc<dyn UpdateListener>) -> Self {
		self.update_listener = Some(listener);
		self
	}

	#[must_use]
	pub fn crash_listener(mut self, listener: Arc<dyn CrashListener>) -> Self {
		self.crash_listener = Some(listener);
		self
	}

	#[must_use]
	pub fn build(self) -> GatewayConfig {
		GatewayConfig {
			options: self.options,
			update_predicate: self.update_predicate,
			crash_predicate: self.crash_predicate,
			update_listener: self.update_listener,
			crash_listener: self.crash_listener,
		}
	}
}

impl Default for GatewayConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}
