// Resolver constants (no magic values)
use std::time::Duration;

/// Sleep while the queue is empty but producers are still running (50ms)
pub const IDLE_SLEEP_DURATION: Duration = Duration::from_millis(50);

/// Default bound on a single domain lookup (5s)
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);
