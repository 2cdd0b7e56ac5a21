//! Sources of per-run identifiers and timestamps
//!
//! Both are injected so tests can pin them and get byte-identical books.

use chrono::{DateTime, TimeZone, Utc};

/// Produces the publication's unique identifier
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random version 4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Always returns the same identifier
#[derive(Debug, Clone)]
pub struct FixedIdGenerator(pub String);

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

/// Supplies the last-modified timestamp
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, truncated to whole seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        Utc.timestamp_opt(now.timestamp(), 0).single().unwrap_or(now)
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
