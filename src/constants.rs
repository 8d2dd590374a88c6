// Tunables shared across the visualizer

use std::time::Duration;

/// Maximum element count for the array panel
pub const MAX_ARRAY_SIZE: usize = 12;

/// Number of bars on the sorting panel
pub const SORT_ARRAY_SIZE: usize = 20;

/// Bucket count for the hash table panel
pub const TABLE_SIZE: usize = 7;

/// Cadence for structural highlight-then-mutate playback
pub const STRUCT_CADENCE: Duration = Duration::from_millis(500);

/// Cadence for sorting step playback
pub const SORT_CADENCE: Duration = Duration::from_millis(50);

/// How long a transient highlight marker stays lit
pub const HIGHLIGHT_TTL: Duration = Duration::from_millis(1500);

/// How long a flashed error message stays visible
pub const FLASH_TTL: Duration = Duration::from_millis(3000);

/// Event-loop poll timeout; bounds timer resolution for all playback
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);
