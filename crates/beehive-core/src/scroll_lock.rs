//! Reference-counted page scroll lock.
//!
//! The page is non-scrollable while at least one [`ScrollLockGuard`] is
//! alive. Releasing happens in `Drop`, so every exit path of a holder
//! (explicit close, key dismissal, unmount) gives the page back.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

/// Applies the lock to whatever actually scrolls.
pub trait ScrollBackend: Send + Sync {
    /// Enable or disable scrolling of the underlying document.
    fn set_scroll_enabled(&self, enabled: bool);
}

/// Backend that does nothing; for contexts without a document.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBackend;

impl ScrollBackend for NoopBackend {
    fn set_scroll_enabled(&self, _enabled: bool) {}
}

struct Inner {
    holders: AtomicUsize,
    backend: Box<dyn ScrollBackend>,
}

/// Shared handle to the page scroll lock.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Arc<Inner>,
}

impl ScrollLock {
    /// Create a lock driving the given backend.
    pub fn new(backend: impl ScrollBackend + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                holders: AtomicUsize::new(0),
                backend: Box::new(backend),
            }),
        }
    }

    /// Take the lock. Scrolling is disabled on the first acquisition.
    pub fn acquire(&self) -> ScrollLockGuard {
        if self.inner.holders.fetch_add(1, Ordering::AcqRel) == 0 {
            log::debug!("page scroll locked");
            self.inner.backend.set_scroll_enabled(false);
        }
        ScrollLockGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Whether any guard is currently alive.
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of live guards.
    pub fn holders(&self) -> usize {
        self.inner.holders.load(Ordering::Acquire)
    }
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new(NoopBackend)
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

/// Proof of holding the scroll lock; releases on drop.
#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    inner: Arc<Inner>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        if self.inner.holders.fetch_sub(1, Ordering::AcqRel) == 1 {
            log::debug!("page scroll released");
            self.inner.backend.set_scroll_enabled(true);
        }
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollLockGuard")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records every backend call so tests can assert on the page state.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingBackend {
        pub calls: Arc<Mutex<Vec<bool>>>,
    }

    impl RecordingBackend {
        pub fn scroll_enabled(&self) -> bool {
            self.calls
                .lock()
                .expect("lock calls")
                .last()
                .copied()
                .unwrap_or(true)
        }
    }

    impl ScrollBackend for RecordingBackend {
        fn set_scroll_enabled(&self, enabled: bool) {
            self.calls.lock().expect("lock calls").push(enabled);
        }
    }

    #[test]
    fn test_single_guard_round_trip() {
        let backend = RecordingBackend::default();
        let lock = ScrollLock::new(backend.clone());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert!(!backend.scroll_enabled());

        drop(guard);
        assert!(!lock.is_locked());
        assert!(backend.scroll_enabled());
    }

    #[test]
    fn test_nested_guards_release_on_last_drop() {
        let backend = RecordingBackend::default();
        let lock = ScrollLock::new(backend.clone());

        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(!backend.scroll_enabled());

        drop(second);
        assert!(backend.scroll_enabled());
        assert_eq!(*backend.calls.lock().expect("lock calls"), vec![false, true]);
    }

    #[test]
    fn test_clones_share_state() {
        let lock = ScrollLock::default();
        let other = lock.clone();
        let _guard = other.acquire();
        assert!(lock.is_locked());
    }
}
