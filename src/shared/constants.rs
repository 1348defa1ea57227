/// Prefix carried by every pickup code
pub const CODE_PREFIX: &str = "FV-";

/// Number of random characters after the prefix
pub const CODE_SUFFIX_LEN: usize = 6;

/// Retention window for uploaded files, in days (fixed, not configurable)
pub const RETENTION_DAYS: i64 = 7;

/// Number of records returned by the recent-uploads listing
pub const RECENT_LIMIT: i64 = 10;
