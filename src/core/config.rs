//! Rule configuration.
//!
//! The engine plays standard Banqi by default. `RuleConfig` exposes the two
//! knobs that house rules commonly change: the no-progress draw threshold
//! and whether a General may capture a Soldier.

use serde::{Deserialize, Serialize};

/// Consecutive non-capturing relocations that end the game in a draw.
pub const DEFAULT_DRAW_THRESHOLD: u32 = 20;

/// Configurable rule variations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// No-progress count at which `who_wins` reports a draw.
    pub draw_threshold: u32,

    /// Whether a General may capture an adjacent Soldier by the power rule.
    ///
    /// A Soldier may always capture a General. With this off, the converse
    /// capture is forbidden as well.
    pub general_captures_soldier: bool,
}

impl RuleConfig {
    /// Standard rules.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            draw_threshold: DEFAULT_DRAW_THRESHOLD,
            general_captures_soldier: true,
        }
    }

    /// Set the draw threshold.
    #[must_use]
    pub fn with_draw_threshold(mut self, threshold: u32) -> Self {
        assert!(threshold > 0, "Draw threshold must be positive");
        self.draw_threshold = threshold;
        self
    }

    /// Forbid the General from capturing Soldiers.
    #[must_use]
    pub fn general_spares_soldier(mut self) -> Self {
        self.general_captures_soldier = false;
        self
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::new()
    }
}
