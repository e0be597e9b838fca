//! Application constants.

/// Number of items to move when pressing Page Up/Down.
pub const PAGE_SIZE: usize = 10;

/// Channel buffer size for listing results.
pub const LISTING_CHANNEL_SIZE: usize = 4;

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 80;

/// Upper bound on sync/observe rounds after one input.
pub const MAX_SETTLE_ROUNDS: usize = 4;

/// Terminal title when neither a file nor an album name is available.
pub const DEFAULT_TITLE: &str = "picatch";
