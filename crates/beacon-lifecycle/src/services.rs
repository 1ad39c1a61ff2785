// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outbound seams to the four Beacon services.
//!
//! The gateway only decides *whether* to call a service; everything behind
//! these traits — transport, retries, SDK misconfiguration — is the
//! service's own responsibility. None of the methods return a `Result` and
//! nothing here is caught, wrapped, or retried.

use std::sync::Arc;

use beacon_lifecycle_core::{AppContext, CrashListener, Screen, UpdateListener};

/// In-app update checking.
pub trait UpdateService: Send + Sync {
	/// Registers an update check for the given screen.
	fn register(
		&self,
		screen: &dyn Screen,
		app_id: &str,
		listener: Option<Arc<dyn UpdateListener>>,
		require_dialog: bool,
	);

	/// Tears down update checking. Global, not screen-scoped.
	fn unregister(&self);
}

/// Crash report submission.
///
/// Registration comes in two flavors; the gateway picks based on whether a
/// crash listener is configured.
pub trait CrashService: Send + Sync {
	fn register(&self, screen: &dyn Screen, app_id: &str);

	fn register_with_listener(
		&self,
		screen: &dyn Screen,
		app_id: &str,
		listener: Arc<dyn CrashListener>,
	);
}

/// Per-screen usage tracking.
pub trait TrackingService: Send + Sync {
	fn start_usage(&self, screen: &dyn Screen);

	fn stop_usage(&self, screen: &dyn Screen);
}

/// One-time metrics registration at process startup.
pub trait MetricsService: Send + Sync {
	fn register(&self, app: &AppContext, app_id: &str);
}

/// The four service endpoints the gateway dispatches into.
///
/// Built via [`ServiceSet::builder`]; any slot left unset falls back to a
/// no-op implementation, so a host that only enables tracking wires only the
/// tracking service.
#[derive(Clone)]
pub struct ServiceSet {
	update: Arc<dyn UpdateService>,
	crash: Arc<dyn CrashService>,
	tracking: Arc<dyn TrackingService>,
	metrics: Arc<dyn MetricsService>,
}

impl ServiceSet {
	#[must_use]
	pub fn builder() -> ServiceSetBuilder {
		ServiceSetBuilder::new()
	}

	/// A service set where every endpoint is a no-op. Mostly useful in tests.
	#[must_use]
	pub fn noop() -> Self {
		ServiceSetBuilder::new().build()
	}

	#[must_use]
	pub fn update(&self) -> &dyn UpdateService {
		self.update.as_ref()
	}

	#[must_use]
	pub fn crash(&self) -> &dyn CrashService {
		self.crash.as_ref()
	}

	#[must_use]
	pub fn tracking(&self) -> &dyn TrackingService {
		self.tracking.as_ref()
	}

	#[must_use]
	pub fn metrics(&self) -> &dyn MetricsService {
		self.metrics.as_ref()
	}
}

/// Builder for [`ServiceSet`].
pub struct ServiceSetBuilder {
	update: Option<Arc<dyn UpdateService>>,
	crash: Option<Arc<dyn CrashService>>,
	tracking: Option<Arc<dyn TrackingService>>,
	metrics: Option<Arc<dyn MetricsService>>,
}

impl ServiceSetBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self {
			update: None,
			crash: None,
			tracking: None,
			metrics: None,
		}
	}

	#[must_use]
	pub fn update(mut self, service: Arc<dyn UpdateService>) -> Self {
		self.update = Some(service);
		self
	}

	#[must_use]
	pub fn crash(mut self, service: Arc<dyn CrashService>) -> Self {
		self.crash = Some(service);
		self
	}

	#[must_use]
	pub fn tracking(mut self, service: Arc<dyn TrackingService>) -> Self {
		self.tracking = Some(service);
		self
	}

	#[must_use]
	pub fn metrics(mut self, service: Arc<dyn MetricsService>) -> Self {
		self.metrics = Some(service);
		self
	}

	#[must_use]
	pub fn build(self) -> ServiceSet {
		ServiceSet {
			update: self.update.unwrap_or_else(|| Arc::new(NoopService)),
			crash: self.crash.unwrap_or_else(|| Arc::new(NoopService)),
			tracking: self.tracking.unwrap_or_else(|| Arc::new(NoopService)),
			metrics: self.metrics.unwrap_or_else(|| Arc::new(NoopService)),
		}
	}
}

impl Default for ServiceSetBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Fallback for unwired service slots.
struct NoopService;

impl UpdateService for NoopService {
	fn register(
		&self,
		_screen: &dyn Screen,
		_app_id: &str,
		_listener: Option<Arc<dyn UpdateListener>>,
		_require_dialog: bool,
	) {
	}

	fn unregister(&self) {}
}

impl CrashService for NoopService {
	fn register(&self, _screen: &dyn Screen, _app_id: &str) {}

	fn register_with_listener(
		&self,
		_screen: &dyn Screen,
		_app_id: &str,
		_listener: Arc<dyn CrashListener>,
	) {
	}
}

impl TrackingService for NoopService {
	fn start_usage(&self, _screen: &dyn Screen) {}

	fn stop_usage(&self, _screen: &dyn Screen) {}
}

impl MetricsService for NoopService {
	fn register(&self, _app: &AppContext, _app_id: &str) {}
}
