pub mod evolution;
pub mod ledger;

#[cfg(test)]
mod tests;

pub use evolution::{evolution_path, flatten, next_evolutions, parse_chain, EvolutionStep};
pub use ledger::{Ledger, LevelUpSummary};
