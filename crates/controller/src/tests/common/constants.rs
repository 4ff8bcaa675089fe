use std::time::Duration;

pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Long enough for several more ticks to have fired had the monitor kept going.
pub const SETTLE_TIME: Duration = Duration::from_secs(5);
