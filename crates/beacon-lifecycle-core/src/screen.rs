// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Host-side handles: screens and the application context.

use serde::{Deserialize, Serialize};

/// An opaque handle to one navigable unit of the host application's UI.
///
/// The host runtime supplies a `&dyn Screen` with every lifecycle callback.
/// The handle is borrowed for the duration of the callback and never
/// retained by this crate.
pub trait Screen {
	/// A stable, human-readable name for this screen (e.g. `"login"`,
	/// `"settings"`). Screen predicates typically discriminate on this.
	fn name(&self) -> &str;
}

/// Process-wide application identity, forwarded to metrics registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppContext {
	/// Reverse-DNS package or bundle identifier of the host application.
	pub package_name: String,
	/// Release version of the host application, if known.
	pub version: Option<String>,
}

impl AppContext {
	#[must_use]
	pub fn new(package_name: impl Into<String>) -> Self {
		Self {
			package_name: package_name.into(),
			version: None,
		}
	}

	#[must_use]
	pub fn with_version(mut self, version: impl Into<String>) -> Self {
		self.version = Some(version.into());
		self
	}
}
