//! Game session state
//!
//! Owns the target equation and the per-game counters, and runs each turn
//! through validation and feedback.

mod config;
mod session;

pub use config::{GameConfig, Selection};
pub use session::{GameSession, GameStatus, SessionError, SessionObserver};
