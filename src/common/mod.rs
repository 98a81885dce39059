//! Types shared across plugins: collision layers, game state, tunables.

pub mod layers;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
