//! Next-frame redraw scheduling keyed by a dependency snapshot.

mod frame_queue;

pub use frame_queue::{FrameHandle, FrameQueue, FrameRequester};

use tracing::{debug, trace};

/// Result of asking the scheduler for a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// A new frame was requested.
    Scheduled(FrameHandle),
    /// A frame for the same dependencies is already pending.
    Coalesced,
    /// These dependencies were already drawn.
    Unchanged,
    /// Paused; the request is remembered for when the scheduler resumes.
    Paused,
}

/// What a frame callback did with the frame it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Drawn,
    /// The surface was not ready; the frame is redrawn on the next request.
    Skipped,
}

/// Schedules at most one pending redraw per dependency change.
///
/// A newer dependency set cancels the unrun frame of an older one, so a
/// frame always draws the latest dependencies and never an out-of-date
/// snapshot. Nothing runs continuously: frames are only requested when
/// dependencies change, on [`RenderScheduler::invalidate`], or on resume.
#[derive(Debug)]
pub struct RenderScheduler<D> {
    pending: Option<FrameHandle>,
    latest: Option<D>,
    drawn: Option<D>,
    stale: bool,
    paused: bool,
    generation: u64,
    frames_drawn: u64,
}

impl<D> Default for RenderScheduler<D> {
    fn default() -> Self {
        Self {
            pending: None,
            latest: None,
            drawn: None,
            stale: false,
            paused: false,
            generation: 0,
            frames_drawn: 0,
        }
    }
}

impl<D: PartialEq + Clone> RenderScheduler<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    #[must_use]
    pub fn latest_dependencies(&self) -> Option<&D> {
        self.latest.as_ref()
    }

    /// Number of distinct dependency sets seen so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Requests a redraw for `dependencies` on the next frame.
    pub fn schedule<F: FrameRequester + ?Sized>(
        &mut self,
        dependencies: D,
        frames: &mut F,
    ) -> ScheduleOutcome {
        if self.latest.as_ref() == Some(&dependencies) {
            if self.pending.is_some() {
                return ScheduleOutcome::Coalesced;
            }
            if !self.needs_draw() {
                return ScheduleOutcome::Unchanged;
            }
        } else {
            self.latest = Some(dependencies);
            self.generation += 1;
        }
        self.request(frames)
    }

    /// Forces one redraw of the latest dependencies, e.g. after a resize.
    pub fn invalidate<F: FrameRequester + ?Sized>(&mut self, frames: &mut F) -> ScheduleOutcome {
        if self.latest.is_none() {
            return ScheduleOutcome::Unchanged;
        }
        self.stale = true;
        if self.pending.is_some() {
            return ScheduleOutcome::Coalesced;
        }
        self.request(frames)
    }

    /// Pausing cancels the pending frame; resuming requests one if the
    /// latest dependencies were never drawn.
    pub fn set_paused<F: FrameRequester + ?Sized>(&mut self, paused: bool, frames: &mut F) {
        if paused == self.paused {
            return;
        }
        self.paused = paused;
        if paused {
            self.cancel_pending(frames);
            debug!("render scheduler paused");
        } else {
            debug!("render scheduler resumed");
            if self.needs_draw() {
                self.request(frames);
            }
        }
    }

    /// Runs `draw` if `handle` is the frame this scheduler is waiting for.
    ///
    /// Returns `false` for stale or cancelled handles.
    pub fn run_frame(&mut self, handle: FrameHandle, draw: impl FnOnce(&D) -> FrameStatus) -> bool {
        if self.pending != Some(handle) {
            trace!(frame = handle.raw(), "ignoring stale frame");
            return false;
        }
        self.pending = None;

        let Some(dependencies) = self.latest.as_ref() else {
            return false;
        };
        match draw(dependencies) {
            FrameStatus::Drawn => {
                self.drawn = self.latest.clone();
                self.stale = false;
                self.frames_drawn += 1;
                trace!(frame = handle.raw(), generation = self.generation, "frame drawn");
                true
            }
            FrameStatus::Skipped => {
                self.stale = true;
                debug!(frame = handle.raw(), "frame skipped; surface not ready");
                false
            }
        }
    }

    /// Cancels any pending frame. Call when the surface goes away.
    pub fn teardown<F: FrameRequester + ?Sized>(&mut self, frames: &mut F) {
        self.cancel_pending(frames);
    }

    fn needs_draw(&self) -> bool {
        self.latest.is_some() && (self.stale || self.drawn != self.latest)
    }

    fn request<F: FrameRequester + ?Sized>(&mut self, frames: &mut F) -> ScheduleOutcome {
        if self.paused {
            return ScheduleOutcome::Paused;
        }
        if let Some(previous) = self.pending.take() {
            frames.cancel_frame(previous);
            debug!(frame = previous.raw(), "superseded pending frame");
        }
        let handle = frames.request_frame();
        self.pending = Some(handle);
        ScheduleOutcome::Scheduled(handle)
    }

    fn cancel_pending<F: FrameRequester + ?Sized>(&mut self, frames: &mut F) {
        if let Some(previous) = self.pending.take() {
            frames.cancel_frame(previous);
            debug!(frame = previous.raw(), "cancelled pending frame");
        }
    }
}
