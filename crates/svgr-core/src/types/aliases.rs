//! Type aliases for commonly used complex types.
//!
//! Complex types like `Arc<Mutex<Vec<Option<String>>>>` are hard to read at a
//! glance. The aliases below name the shapes used by the conversion drivers
//! and keep the lock implementation in one place.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svgr_core::types::*;
//!
//! // Instead of: Arc<Mutex<Vec<String>>>
//! let slots: ThreadSafeVec<String> = thread_safe_vec();
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

// =============================================================================
// THREAD-SAFE SHARED TYPES
// =============================================================================

/// A thread-safe vector for cross-thread collection management.
///
/// Uses `parking_lot::Mutex`, whose guard is not poisoned by a panicking
/// holder.
pub type ThreadSafeVec<T> = Arc<Mutex<Vec<T>>>;

// =============================================================================
// CALLBACK TYPES
// =============================================================================

/// A callback receiving a progress milestone as a whole percentage (0..=100).
///
/// Thread-safe so the parallel driver can hand it to its collector task.
pub type MilestoneCallback = Box<dyn FnMut(u8) + Send>;

/// A callback receiving the number of path indices consumed by one emitter step.
pub type AdvanceCallback<'a> = &'a mut dyn FnMut(usize);

// =============================================================================
// CONSTRUCTOR HELPERS
// =============================================================================

/// Create a new empty `ThreadSafeVec<T>`.
#[inline]
pub fn thread_safe_vec<T>() -> ThreadSafeVec<T> {
    Arc::new(Mutex::new(Vec::new()))
}
