//! The Banqi engine.
//!
//! [`BanqiGame`] owns the state, rules, RNG and observers of one game.
//! [`BanqiGameBuilder`] configures seeds, house rules and starting positions.

mod builder;
mod engine;

pub use builder::BanqiGameBuilder;
pub use engine::BanqiGame;
