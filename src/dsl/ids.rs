//! Record id generation
//!
//! Ids are opaque tokens. The parser takes its [`IdSource`] as a dependency so
//! tests can use a deterministic sequence instead of the process-wide one.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Process-wide counter. Ids are unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionIds;

impl IdSource for SessionIds {
    fn next_id(&self) -> String {
        format!("dsl_{}", NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Per-instance counter starting at 1
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("dsl_")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        format!("{}{}", self.prefix, self.next.fetch_add(1, Ordering::Relaxed))
    }
}
