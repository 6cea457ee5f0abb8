// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Transient visual emphasis applied to a focused diagram node.
///
/// These are configuration constants, not computed values: the scene applies
/// the fill and text size to the node's shape and label, and the binder
/// schedules the revert after [`HighlightStyle::revert_delay`]. Reverting is
/// the scene's job (`clear_emphasis`), which restores its own base
/// presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightStyle {
    /// Fill color applied to the node's shape while highlighted.
    pub fill: String,
    /// Text size applied to the node's label while highlighted.
    pub text_size: f64,
    /// Delay before the emphasis is reverted.
    pub revert_delay: Duration,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            fill: String::from("#FACDEE"),
            text_size: 14.0,
            revert_delay: Duration::from_millis(3000),
        }
    }
}

/// Host timer seam for scheduling highlight reverts.
///
/// The binder schedules one pending revert per node and cancels it when the
/// same node is re-activated before the delay elapses. Tokens identify a
/// particular scheduling: when the host's timer fires it hands the token back
/// through [`TreeGraphBinder::on_revert_elapsed`](crate::TreeGraphBinder::on_revert_elapsed),
/// which honors it only if it is still the pending one. A timer the host
/// could not truly cancel therefore degrades into a harmless stale no-op
/// instead of racing a newer highlight.
pub trait RevertScheduler<Id> {
    /// Identifies one scheduled revert. Compared against the pending token
    /// when a timer fires.
    type Token: PartialEq;

    /// Schedules a revert for `id` after `delay`; the host should arrange to
    /// call `on_revert_elapsed` with the returned token when it fires.
    fn schedule(&mut self, id: &Id, delay: Duration) -> Self::Token;

    /// Cancels a previously scheduled revert, if the host supports it.
    ///
    /// Best effort: hosts whose timers cannot be revoked may ignore this and
    /// rely on the token check at fire time.
    fn cancel(&mut self, id: &Id, token: Self::Token);
}
