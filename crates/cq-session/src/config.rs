//! Configuration for a game session.

use cq_mechanics::StartingStats;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible damage rolls.
    pub seed: u64,
    /// Ticks between a surviving monster being hit and its counter-attack.
    pub reply_delay: u64,
    /// Number of messages the feed retains.
    pub feed_capacity: usize,
    /// Stats the player starts (and restarts) with.
    pub starting: StartingStats,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            reply_delay: 1,
            feed_capacity: 10,
            starting: StartingStats::default(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the counter-attack delay in ticks (at least 1).
    pub fn with_reply_delay(mut self, ticks: u64) -> Self {
        self.reply_delay = ticks.max(1);
        self
    }

    /// Set the feed capacity (at least 1).
    pub fn with_feed_capacity(mut self, capacity: usize) -> Self {
        self.feed_capacity = capacity.max(1);
        self
    }

    /// Set the level-1 player stats.
    pub fn with_starting_stats(mut self, stats: StartingStats) -> Self {
        self.starting = stats;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.reply_delay, 1);
        assert_eq!(cfg.feed_capacity, 10);
        assert_eq!(cfg.starting, StartingStats::default());
    }

    #[test]
    fn builder_methods() {
        let stats = StartingStats {
            hp: 80,
            ..StartingStats::default()
        };
        let cfg = SessionConfig::default()
            .with_seed(7)
            .with_reply_delay(3)
            .with_feed_capacity(20)
            .with_starting_stats(stats.clone());
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.reply_delay, 3);
        assert_eq!(cfg.feed_capacity, 20);
        assert_eq!(cfg.starting, stats);
    }

    #[test]
    fn zero_values_clamped() {
        let cfg = SessionConfig::default()
            .with_reply_delay(0)
            .with_feed_capacity(0);
        assert_eq!(cfg.reply_delay, 1);
        assert_eq!(cfg.feed_capacity, 1);
    }
}
