//! Session-scoped block id generator.
//!
//! Ids combine a per-session CRC32 seed (hashed from the session start
//! instant) with a sequential counter, so no id is ever reused within a
//! session — including after undo, which restores old snapshots but never
//! rewinds the counter.

use std::time::{SystemTime, UNIX_EPOCH};

use crc32fast::Hasher;

#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u64,
}

impl IdGenerator {
    /// Generator seeded from the current instant.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut hasher = Hasher::new();
        hasher.update(&nanos.to_le_bytes());
        Self::from_seed(format!("{:x}", hasher.finalize()))
    }

    /// Generator with a fixed seed, for deterministic tests.
    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Next sequential id.
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("blk-{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
