//! SeaORM entity definitions for the player registry.

pub mod prelude;

pub mod player;
