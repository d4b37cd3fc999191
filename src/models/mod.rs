//! Domain models shared by the ESPN client and the export pipeline.

pub mod league;

pub use league::{League, Player, Team};
