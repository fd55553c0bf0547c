//! Player identifiers and the pool they are issued from

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::error::{DealerError, Result};

/// Maximum number of players a single dealer can seat
pub const MAX_PLAYERS: usize = 100;

/// Length of an issued identifier, in hex characters
pub const IDENTIFIER_LEN: usize = 22;

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u64 = 0x7ab1_e5ea_7000;

/// Opaque identifier of a seated player
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Pre-generated pool of unique identifiers
///
/// Tokens are derived from `sha256(seed || counter)`. Each candidate is
/// checked against the tokens generated so far, so the pool never holds a
/// duplicate regardless of truncation. The same seed always yields the same
/// tokens in the same order.
#[derive(Debug, Clone)]
pub struct IdentifierPool {
    available: VecDeque<PlayerId>,
    issued: HashSet<PlayerId>,
    capacity: usize,
}

impl IdentifierPool {
    /// Create a pool sized for [`MAX_PLAYERS`]
    pub fn new(seed: u64) -> Self {
        Self::with_capacity(seed, MAX_PLAYERS)
    }

    /// Create a pool holding exactly `capacity` identifiers
    pub fn with_capacity(seed: u64, capacity: usize) -> Self {
        let mut seen = HashSet::with_capacity(capacity);
        let mut available = VecDeque::with_capacity(capacity);
        let mut counter = 0u64;
        while available.len() < capacity {
            let token = derive_token(seed, counter);
            counter += 1;
            if seen.insert(token.clone()) {
                available.push_back(PlayerId(token));
            }
        }
        Self {
            available,
            issued: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Issue the next identifier
    pub fn fetch(&mut self) -> Result<PlayerId> {
        let id = self
            .available
            .pop_front()
            .ok_or(DealerError::PoolExhausted(self.capacity))?;
        self.issued.insert(id.clone());
        Ok(id)
    }

    /// Whether `id` was handed out by this pool
    pub fn was_issued(&self, id: &PlayerId) -> bool {
        self.issued.contains(id)
    }

    /// Identifiers still available
    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    /// Total identifiers the pool was created with
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn derive_token(seed: u64, counter: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(counter.to_le_bytes());
    let mut token = hex::encode(hasher.finalize());
    token.truncate(IDENTIFIER_LEN);
    token
}
