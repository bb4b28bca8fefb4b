//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Computes `(level, until_next_level)` for an experience value.
///
/// Factories insert entities directly, bypassing the service layer, so they derive the
/// leveling columns with the same formula the service uses.
///
/// # Arguments
/// - `experience` - Total experience points
///
/// # Returns
/// - `(i32, i32)` - Level and experience remaining to the next level
pub fn leveling(experience: i32) -> (i32, i32) {
    let root = (2500.0 + 200.0 * experience as f64).sqrt();
    let level = (root - 50.0) as i32 / 100;
    let until_next_level = 50 * (level + 1) * (level + 2) - experience;
    (level, until_next_level)
}
