use serde::{Deserialize, Serialize};

/// Token for one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Source of "next animation frame" callbacks, like `requestAnimationFrame`.
///
/// A requested frame fires once unless cancelled first; the host then hands
/// its handle to whoever requested it.
pub trait FrameRequester {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministic single-threaded frame source.
///
/// Requests queue up until the host's frame tick calls
/// [`FrameQueue::take_ready`], which hands out every outstanding handle in
/// request order.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_raw: u64,
    pending: Vec<FrameHandle>,
    requested_total: u64,
    cancelled_total: u64,
}

impl FrameQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    #[must_use]
    pub fn requested_total(&self) -> u64 {
        self.requested_total
    }

    #[must_use]
    pub fn cancelled_total(&self) -> u64 {
        self.cancelled_total
    }

    /// Handles due on this frame tick, oldest first.
    pub fn take_ready(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameRequester for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_raw += 1;
        self.requested_total += 1;
        let handle = FrameHandle(self.next_raw);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != handle);
        if self.pending.len() != before {
            self.cancelled_total += 1;
        }
    }
}
