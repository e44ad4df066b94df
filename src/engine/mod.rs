//! Engine facade exposed to hosts.
//!
//! - `Game`: owns the grid and RNG; moves, spawns, terminal queries
//! - `Session`: per-play-through lifecycle with win bookkeeping

mod game;
mod session;

pub use game::{Game, Snapshot};
pub use session::{GameStatus, Session, Turn};
