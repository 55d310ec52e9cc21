//! Dashboard stat tiles

/// Gems shown before any tracked XP
pub const BASE_GEMS: u32 = 505;

/// Snapshot of the four dashboard stat tiles. Only the gem counter moves
/// with earned XP; the rest are fixed display values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub lessons: u32,
    pub day_streak: u32,
    pub gems: u32,
    pub lives: u32,
}

impl StatsSnapshot {
    pub fn with_xp(total_xp: u32) -> Self {
        Self {
            lessons: 2,
            day_streak: 2,
            gems: BASE_GEMS + total_xp,
            lives: 5,
        }
    }
}
