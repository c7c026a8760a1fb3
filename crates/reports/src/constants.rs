/// Base URL used when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:1311";

/// Per-call timeout for report requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Months covered by the default range-driven views
pub const DEFAULT_RANGE_MONTHS: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
