//! Core engine types: players, states, errors, RNG.
//!
//! Nothing here knows about any particular game. Concrete games implement
//! [`GameState`] and plug into the rules and search layers.

pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use error::{Result, SearchError};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
