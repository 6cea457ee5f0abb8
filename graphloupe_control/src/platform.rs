// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-platform detection for the modifier-wheel zoom speed.
//!
//! Continuous pointing devices (trackpads, precision touchpads) report wheel
//! deltas at a much higher rate than notched wheels, so the same per-event
//! zoom factor feels violently fast on them. The only platform signal this
//! core consumes is a host-provided descriptor string; it is matched against
//! a known set of desktop identifiers to pick a wheel profile, and nothing
//! else is inferred from it.

/// Wheel device profile selected from the host platform descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WheelKind {
    /// Discrete notched wheel: fewer, coarser delta events.
    #[default]
    Notched,
    /// Continuous trackpad-style device: many fine delta events.
    Continuous,
}

/// Desktop identifiers whose default pointing device is trackpad-style.
const CONTINUOUS_PLATFORMS: &[&str] = &["macintel", "macppc", "mac68k", "macos", "darwin"];

impl WheelKind {
    /// Picks the wheel profile for a host platform descriptor.
    ///
    /// Mac-family desktop identifiers select [`WheelKind::Continuous`]; every
    /// other descriptor, and an absent one, selects [`WheelKind::Notched`].
    /// Matching is case-insensitive.
    ///
    /// ```rust
    /// use graphloupe_control::WheelKind;
    ///
    /// assert_eq!(WheelKind::from_platform(Some("MacIntel")), WheelKind::Continuous);
    /// assert_eq!(WheelKind::from_platform(Some("Win32")), WheelKind::Notched);
    /// assert_eq!(WheelKind::from_platform(None), WheelKind::Notched);
    /// ```
    #[must_use]
    pub fn from_platform(descriptor: Option<&str>) -> Self {
        let Some(descriptor) = descriptor else {
            return Self::Notched;
        };
        let lowered = descriptor.trim().to_ascii_lowercase();
        if CONTINUOUS_PLATFORMS.contains(&lowered.as_str()) {
            Self::Continuous
        } else {
            Self::Notched
        }
    }
}
