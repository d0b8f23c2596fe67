//! Route Events — side-event content generation for a campus life simulation.
//!
//! Reads per-route side-event tables and option pools, attaches each
//! route's gate windows, and serializes the result as an event block for
//! the game's data file.

pub mod core;
pub mod schema;
