// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Result callbacks forwarded into the update and crash services.
//!
//! The gateway never invokes these itself; they ride along on the service
//! registration calls so the services can report outcomes back to the host.

/// Callbacks for the outcome of an update check.
///
/// All methods have no-op defaults so hosts implement only what they care
/// about.
pub trait UpdateListener: Send + Sync {
	/// A newer version of the application is available.
	fn on_update_available(&self) {}

	/// The check completed and the running version is current.
	fn on_no_update_available(&self) {}
}

/// Callbacks for crash report submission.
pub trait CrashListener: Send + Sync {
	/// Whether pending crash reports may be sent without prompting the user.
	fn should_auto_send(&self) -> bool {
		false
	}

	/// Pending crash reports were submitted successfully.
	fn on_crashes_sent(&self) {}

	/// Submission of pending crash reports failed.
	fn on_send_failed(&self) {}
}
