//! Generation-ordered id assignment
//!
//! Ids are time-based (`highlight-1731225600000`) with a sequence suffix
//! when the clock has not advanced between calls, so two ids can never
//! collide within one generator.

use crate::core::time::now_millis;
use crate::core::types::Timestamp;

/// Hands out unique, generation-ordered string ids with a fixed prefix.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: &'static str,
    last_stamp: Timestamp,
    seq: u32,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            last_stamp: 0,
            seq: 0,
        }
    }

    /// Next unique id for this generator
    pub fn next_id(&mut self) -> String {
        let now = now_millis().max(self.last_stamp);
        if now == self.last_stamp {
            self.seq += 1;
            format!("{}-{}-{}", self.prefix, self.last_stamp, self.seq)
        } else {
            self.last_stamp = now;
            self.seq = 0;
            format!("{}-{}", self.prefix, now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_carry_prefix() {
        let mut ids = IdGenerator::new("note");
        assert!(ids.next_id().starts_with("note-"));
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut ids = IdGenerator::new("highlight");
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next_id()));
        }
    }
}
