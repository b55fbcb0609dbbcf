pub mod report;
pub use report::*;

pub mod showdown;
pub use showdown::*;

pub mod simulation;
pub use simulation::*;

pub mod table;
pub use table::*;

pub mod tally;
pub use tally::*;

/// Seed for the `index`th independent stream of a seeded run.
///
/// Batches of one simulation and pairings of one range comparison each
/// draw from their own stream, so results never depend on which thread
/// picked up which piece of work.
pub fn substream(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substreams_differ() {
        let seeds = (0..64).map(|i| substream(7, i)).collect::<std::collections::HashSet<_>>();
        assert_eq!(seeds.len(), 64);
        assert_ne!(substream(7, 0), 7);
    }
}
