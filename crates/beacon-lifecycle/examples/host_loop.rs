// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: wire the lifecycle gateway into a minimal host loop.
//!
//! Run with:
//!   cargo run --example host_loop -p beacon-lifecycle

use std::sync::Arc;

use beacon_lifecycle::{
	LifecycleGateway, ScreenLifecycleObserver, ServiceSet, TrackingService, UpdateService,
};
use beacon_lifecycle_core::{AppContext, GatewayConfig, Screen, UpdateListener};

struct NamedScreen(&'static str);

impl Screen for NamedScreen {
	fn name(&self) -> &str {
		self.0
	}
}

struct PrintingUpdates;

impl UpdateService for PrintingUpdates {
	fn register(
		&self,
		screen: &dyn Screen,
		app_id: &str,
		_listener: Option<Arc<dyn UpdateListener>>,
		require_dialog: bool,
	) {
		println!(
			"update service: register screen={} app_id={} dialog={}",
			screen.name(),
			app_id,
			require_dialog
		);
	}

	fn unregister(&self) {
		println!("update service: unregister");
	}
}

struct PrintingTracking;

impl TrackingService for PrintingTracking {
	fn start_usage(&self, screen: &dyn Screen) {
		println!("tracking service: start usage screen={}", screen.name());
	}

	fn stop_usage(&self, screen: &dyn Screen) {
		println!("tracking service: stop usage screen={}", screen.name());
	}
}

fn main() {
	let config = GatewayConfig::builder()
		.update_check(true)
		.tracking(true)
		.app_id("bcn_example")
		.update_check_where(|screen| screen.name() != "login")
		.build();

	let services = ServiceSet::builder()
		.update(Arc::new(PrintingUpdates))
		.tracking(Arc::new(PrintingTracking))
		.build();

	let app = AppContext::new("com.example.host").with_version(env!("CARGO_PKG_VERSION"));
	let gateway = LifecycleGateway::attach(&app, config, services);

	// A host runtime would drive this from its dispatch loop; here we walk
	// two screens through their lifecycles by hand.
	for screen in [NamedScreen("login"), NamedScreen("home")] {
		println!("-- screen: {}", screen.name());
		gateway.on_screen_created(&screen);
		gateway.on_screen_started(&screen);
		gateway.on_screen_resumed(&screen);
		gateway.on_screen_paused(&screen);
		gateway.on_screen_stopped(&screen);
		gateway.on_screen_destroyed(&screen);
	}
}
