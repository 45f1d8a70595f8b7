//! Animation scheduler
//!
//! Owns every running typewriter and advances them each frame.
//! Typewriters are registered through [`AnimatedTypewriter`], which removes
//! its entry again when stopped or dropped, so no step can fire for a view
//! that has gone away.

use crate::typewriter::{Typewriter, TypewriterConfig, TypewriterSnapshot};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle to a registered typewriter
    pub struct TypewriterId;
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    typewriters: SlotMap<TypewriterId, Typewriter>,
    last_frame: Instant,
}

fn lock(inner: &Mutex<SchedulerInner>) -> MutexGuard<'_, SchedulerInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The scheduler that ticks all running typewriters
///
/// Typically held by the page and shared with components via [`SchedulerHandle`].
///
/// ```
/// use folio_animation::{AnimatedTypewriter, AnimationScheduler, TypewriterConfig};
/// use std::time::Duration;
///
/// let scheduler = AnimationScheduler::new();
/// let config = TypewriterConfig::single("Hello").unwrap();
/// let tw = AnimatedTypewriter::start(scheduler.handle(), config);
///
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(tw.snapshot().unwrap().text, "H");
/// ```
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                typewriters: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all typewriters by the wall-clock time since the last frame
    ///
    /// Returns true if any typewriter is registered.
    pub fn tick(&self) -> bool {
        let mut inner = lock(&self.inner);
        let now = Instant::now();
        let dt = now - inner.last_frame;
        inner.last_frame = now;

        for (_, typewriter) in inner.typewriters.iter_mut() {
            typewriter.advance(dt);
        }
        !inner.typewriters.is_empty()
    }

    /// Advance all typewriters by a fixed `dt`
    ///
    /// Used by tests and fixed-step frame loops. Does not touch the
    /// wall-clock frame time used by [`tick`](Self::tick).
    pub fn advance(&self, dt: Duration) {
        let mut inner = lock(&self.inner);
        for (_, typewriter) in inner.typewriters.iter_mut() {
            typewriter.advance(dt);
        }
    }

    /// Number of registered typewriters
    pub fn typewriter_count(&self) -> usize {
        lock(&self.inner).typewriters.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to components that need to register typewriters. It won't keep
/// the scheduler alive; every operation on a dropped scheduler is a no-op.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a typewriter and return its ID
    pub fn register_typewriter(&self, typewriter: Typewriter) -> Option<TypewriterId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = lock(&inner);
            // Prevent a huge dt on the first tick after a quiet period
            if guard.typewriters.is_empty() {
                guard.last_frame = Instant::now();
            }
            guard.typewriters.insert(typewriter)
        })
    }

    /// Get a snapshot of a typewriter's current state
    pub fn typewriter_snapshot(&self, id: TypewriterId) -> Option<TypewriterSnapshot> {
        self.with_typewriter(id, |tw| tw.snapshot())
    }

    /// Access a registered typewriter
    ///
    /// Returns None if the scheduler is dropped or the typewriter was removed.
    pub fn with_typewriter<F, R>(&self, id: TypewriterId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Typewriter) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| lock(&inner).typewriters.get_mut(id).map(f))
    }

    /// Remove a typewriter, returning its final state
    pub fn remove_typewriter(&self, id: TypewriterId) -> Option<Typewriter> {
        self.inner
            .upgrade()
            .and_then(|inner| lock(&inner).typewriters.remove(id))
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Typewriter
// ============================================================================

/// A running typewriter owned by a view
///
/// Created with [`start`](Self::start); the animation runs until
/// [`stop`](Self::stop) is called or the value is dropped. After stopping,
/// the last observed state stays readable but never changes again.
///
/// The scheduler owns the running state. If it is dropped before the
/// typewriter stops, that state goes with it and [`snapshot`](Self::snapshot)
/// returns `None`.
pub struct AnimatedTypewriter {
    handle: SchedulerHandle,
    id: Option<TypewriterId>,
    /// Final state captured on stop
    stopped: Option<Typewriter>,
}

impl AnimatedTypewriter {
    /// Begin animating `config` immediately, in `Typing` at the first string
    pub fn start(handle: SchedulerHandle, config: TypewriterConfig) -> Self {
        let typewriter = Typewriter::new(config);
        match handle.register_typewriter(typewriter.clone()) {
            Some(id) => {
                tracing::debug!("AnimatedTypewriter: started {:?}", id);
                Self {
                    handle,
                    id: Some(id),
                    stopped: None,
                }
            }
            None => {
                tracing::warn!("AnimatedTypewriter: scheduler dropped, starting stopped");
                Self {
                    handle,
                    id: None,
                    stopped: Some(typewriter),
                }
            }
        }
    }

    /// Cancel all pending steps and keep the final state
    ///
    /// Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(id) = self.id.take() {
            tracing::debug!("AnimatedTypewriter: stopped {:?}", id);
            if let Some(typewriter) = self.handle.remove_typewriter(id) {
                self.stopped = Some(typewriter);
            }
        }
    }

    /// Whether the typewriter is still registered and animating
    pub fn is_running(&self) -> bool {
        self.id
            .map(|id| self.handle.with_typewriter(id, |_| ()).is_some())
            .unwrap_or(false)
    }

    pub fn id(&self) -> Option<TypewriterId> {
        self.id
    }

    /// Current state, or the frozen final state once stopped
    pub fn snapshot(&self) -> Option<TypewriterSnapshot> {
        match self.id {
            Some(id) => self.handle.typewriter_snapshot(id),
            None => self.stopped.as_ref().map(Typewriter::snapshot),
        }
    }

    /// Displayed text plus the cursor glyph when visible
    pub fn render(&self) -> String {
        self.snapshot()
            .map(|snapshot| snapshot.render())
            .unwrap_or_default()
    }
}

impl Drop for AnimatedTypewriter {
    fn drop(&mut self) {
        self.stop();
    }
}
