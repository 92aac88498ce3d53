//! Library entry point.
//!
//! The whole simulation lives here, window-free: the binary feeds
//! `game::Game` an input snapshot per frame and draws whatever
//! `Game::scene` hands back. Integration tests in `tests/` drive the
//! same surface.

pub mod config;
pub mod entities;
pub mod game;
pub mod geom;
