// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The host-facing lifecycle seam.

use beacon_lifecycle_core::Screen;

/// Receiver of per-screen lifecycle events.
///
/// The host runtime owns an implementation of this trait and invokes it
/// synchronously on its dispatch thread, one call per event per screen, in
/// the canonical order `created → started → resumed → paused → stopped →
/// destroyed` (with `save_state` possibly between `started` and `stopped`).
/// Implementations must tolerate any subset of events being skipped — a
/// screen may be destroyed before it ever resumes — and must not assume
/// ordering is enforced on their behalf.
///
/// Every method has a no-op default body so implementations override only
/// the events they care about.
pub trait ScreenLifecycleObserver: Send + Sync {
	fn on_screen_created(&self, _screen: &dyn Screen) {}

	fn on_screen_started(&self, _screen: &dyn Screen) {}

	fn on_screen_resumed(&self, _screen: &dyn Screen) {}

	fn on_screen_paused(&self, _screen: &dyn Screen) {}

	fn on_screen_stopped(&self, _screen: &dyn Screen) {}

	/// The host is persisting screen state; delivered between `started` and
	/// `stopped`.
	fn on_screen_save_state(&self, _screen: &dyn Screen) {}

	fn on_screen_destroyed(&self, _screen: &dyn Screen) {}
}
