//! Item Id Generation
//!
//! Ids are taken from a millisecond clock, bumped past the last issued id so
//! two items created within the same millisecond never collide.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::ItemId;

/// Millisecond clock used to seed ids
pub type Clock = fn() -> u64;

/// Browser clock (`Date.now()`)
pub fn browser_clock() -> u64 {
    js_sys::Date::now() as u64
}

/// Strictly increasing id source for one page session
#[derive(Debug)]
pub struct IdGenerator {
    clock: Clock,
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            last: AtomicU64::new(0),
        }
    }

    /// Never hand out an id at or below `floor` (e.g. seeded item ids)
    pub fn with_floor(clock: Clock, floor: u64) -> Self {
        Self {
            clock,
            last: AtomicU64::new(floor),
        }
    }

    pub fn next_id(&self) -> ItemId {
        let now = (self.clock)();
        let prev = self
            .last
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| Some(now.max(last + 1)))
            .unwrap_or_else(|last| last);
        ItemId(now.max(prev + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen_clock() -> u64 {
        1_700_000_000_000
    }

    fn zero_clock() -> u64 {
        0
    }

    #[test]
    fn test_ids_unique_when_clock_stalls() {
        let ids = IdGenerator::new(frozen_clock);
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert_eq!(a, ItemId(1_700_000_000_000));
        assert!(a < b && b < c);
    }

    #[test]
    fn test_floor_skips_seed_ids() {
        let ids = IdGenerator::with_floor(zero_clock, 5);
        assert_eq!(ids.next_id(), ItemId(6));
        assert_eq!(ids.next_id(), ItemId(7));
    }
}
