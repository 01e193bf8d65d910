//! Structured game events and their observers.
//!
//! The engine never prints. Flips, moves, captures and turn changes are
//! reported as [`GameEvent`]s to any closure registered with the game.
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use banqi::events::{EventKind, GameEvent};
//! use banqi::game::BanqiGame;
//!
//! let mut game = BanqiGame::new(42);
//! let flips = Rc::new(RefCell::new(0));
//! let counter = Rc::clone(&flips);
//!
//! game.subscribe_to(&[EventKind::Flipped], move |_: &GameEvent| *counter.borrow_mut() += 1);
//!
//! game.flip(0, 0).unwrap();
//! assert_eq!(*flips.borrow(), 1);
//! ```

mod event;
mod registry;

pub use event::{EventKind, GameEvent};
pub use registry::{Observer, ObserverId, ObserverRegistry};
