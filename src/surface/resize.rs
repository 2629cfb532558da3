use std::fmt;

use tracing::debug;

use crate::core::SurfaceSize;

pub type ResizeCallback = Box<dyn FnMut(SurfaceSize)>;

/// Observes a container's logical size and reports every distinct change.
///
/// Holds at most one observer. Enabling replaces the previous observer;
/// disabling releases it. Hosts feed layout results in through
/// [`ResizeTracker::notify`].
#[derive(Default)]
pub struct ResizeTracker {
    observer: Option<ResizeCallback>,
    last_size: Option<SurfaceSize>,
}

impl fmt::Debug for ResizeTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeTracker")
            .field("observing", &self.observer.is_some())
            .field("last_size", &self.last_size)
            .finish()
    }
}

impl ResizeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self, callback: ResizeCallback) {
        self.observer = Some(callback);
        self.last_size = None;
        debug!("resize observation started");
    }

    pub fn disable(&mut self) {
        if self.observer.take().is_some() {
            debug!("resize observation stopped");
        }
        self.last_size = None;
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    #[must_use]
    pub fn last_size(&self) -> Option<SurfaceSize> {
        self.last_size
    }

    /// Reports a measured container size.
    ///
    /// Returns `true` when the observer was invoked: observation is active and
    /// the size differs from the last one reported.
    pub fn notify(&mut self, size: SurfaceSize) -> bool {
        let Some(observer) = self.observer.as_mut() else {
            return false;
        };
        if self.last_size == Some(size) {
            return false;
        }
        self.last_size = Some(size);
        observer(size);
        true
    }
}
