//! Id generation for newly created movies.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::types::MovieId;

/// Source of fresh movie ids.
///
/// Implementations must not hand out the same id twice. The store does not
/// re-check uniqueness on insert.
pub trait IdGenerator: Debug + Send + Sync {
    fn next_id(&self) -> MovieId;
}

/// Random v4 UUIDs in the usual hyphenated lowercase form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> MovieId {
        MovieId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids: `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> MovieId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        MovieId::new(format!("{}-{}", self.prefix, n))
    }
}
