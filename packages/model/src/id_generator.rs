use crc32fast::Hasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

static SEED: OnceLock<String> = OnceLock::new();
static COUNT: AtomicU64 = AtomicU64::new(0);

/// Per-process seed: CRC32 of the process id and the first-use timestamp
pub fn session_seed() -> &'static str {
    SEED.get_or_init(|| {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();

        let mut hasher = Hasher::new();
        hasher.update(&std::process::id().to_le_bytes());
        hasher.update(&nanos.to_le_bytes());
        format!("{:x}", hasher.finalize())
    })
}

/// Generate the next node identifier.
///
/// Ids are unique for the lifetime of the process and never leave it.
pub fn new_id() -> String {
    let count = COUNT.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{}-{}", session_seed(), count)
}
