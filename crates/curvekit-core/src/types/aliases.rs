//! Type aliases for shared editor state.
//!
//! An editor is normally owned by a single event loop. When a host delivers
//! pointer events from more than one thread, the editor is placed behind this
//! alias so that each stimulus is handled under a single lock.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use curvekit_core::types::*;
//!
//! // Instead of: Arc<Mutex<PathEditor>>
//! let editor: ThreadSafe<PathEditor> = thread_safe(PathEditor::new(path));
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<Mutex<T>>)
// =============================================================================

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Backed by `parking_lot::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

// =============================================================================
// CONSTRUCTOR HELPERS
// =============================================================================

/// Create a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
