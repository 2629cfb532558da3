//! The mountable unit controls embed: surface setup, frame scheduling,
//! resize tracking and accessibility wiring in one place.

mod handlers;
mod props;
mod view;

pub use handlers::{KeyHandler, PointerHandler, SurfaceHandlers};
pub use props::{DEFAULT_SURFACE_HEIGHT_PX, DEFAULT_SURFACE_ROLE, SurfaceContainerProps};
pub use view::{
    ContainerView, DISABLED_OPACITY, LiveRegionView, SurfaceView, WrapperHeight, WrapperView,
};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::core::{CanvasPoint, KeyEvent, PointerEvent, SurfaceSize, pointer_surface_position};
use crate::scheduler::{
    FrameHandle, FrameQueue, FrameRequester, FrameStatus, RenderScheduler, ScheduleOutcome,
};
use crate::surface::{RasterSurface, ResizeCallback, SurfaceSetup};

/// Paints one frame: `(context, logical size, dependencies)`.
pub type DrawCallback<C, D> = Box<dyn FnMut(&mut C, SurfaceSize, &D)>;

type SharedResizeListener = Rc<RefCell<Option<ResizeCallback>>>;

/// A raster surface plus everything needed to keep it painted.
///
/// The container redraws only when dependencies change (or the surface is
/// resized, remounted or resumed), always through its draw callback. Input
/// events are passed to the caller's handlers untouched.
pub struct SurfaceContainer<S: RasterSurface, D, F = FrameQueue> {
    props: SurfaceContainerProps,
    setup: SurfaceSetup<S>,
    scheduler: RenderScheduler<D>,
    frames: F,
    draw: DrawCallback<S::Context, D>,
    handlers: SurfaceHandlers,
    resize_listener: SharedResizeListener,
}

impl<S, D, F> fmt::Debug for SurfaceContainer<S, D, F>
where
    S: RasterSurface + fmt::Debug,
    D: fmt::Debug,
    F: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceContainer")
            .field("props", &self.props)
            .field("setup", &self.setup)
            .field("scheduler", &self.scheduler)
            .field("frames", &self.frames)
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}

impl<S, D, F> SurfaceContainer<S, D, F>
where
    S: RasterSurface,
    D: PartialEq + Clone,
    F: FrameRequester,
{
    pub fn new(
        props: SurfaceContainerProps,
        frames: F,
        draw: impl FnMut(&mut S::Context, SurfaceSize, &D) + 'static,
    ) -> Self {
        Self {
            props,
            setup: SurfaceSetup::new(),
            scheduler: RenderScheduler::new(),
            frames,
            draw: Box::new(draw),
            handlers: SurfaceHandlers::default(),
            resize_listener: Rc::new(RefCell::new(None)),
        }
    }

    #[must_use]
    pub fn with_handlers(mut self, mut handlers: SurfaceHandlers) -> Self {
        *self.resize_listener.borrow_mut() = handlers.on_resize.take();
        self.handlers = handlers;
        self
    }

    #[must_use]
    pub fn props(&self) -> &SurfaceContainerProps {
        &self.props
    }

    /// Applies new props. Toggling `responsive` starts or stops resize
    /// tracking; a new fixed height triggers a redraw.
    pub fn set_props(&mut self, props: SurfaceContainerProps) {
        let responsive_changed = props.responsive != self.props.responsive;
        let height_changed = props.height != self.props.height;
        self.props = props;

        if responsive_changed {
            self.sync_resize_tracking();
        }
        if responsive_changed || (height_changed && !self.props.responsive) {
            self.scheduler.invalidate(&mut self.frames);
        }
    }

    /// Sets the text of the live region.
    pub fn announce(&mut self, message: impl Into<String>) {
        self.props.live_announcement = Some(message.into());
    }

    #[must_use]
    pub fn view(&self) -> ContainerView {
        ContainerView::from_props(&self.props)
    }

    /// Attaches the raster surface and requests a first frame.
    pub fn mount(&mut self, surface: S) -> Option<S> {
        let previous = self.setup.mount(surface);
        self.sync_resize_tracking();
        self.scheduler.invalidate(&mut self.frames);
        previous
    }

    /// Detaches the surface, cancelling any pending frame and releasing the
    /// resize observer.
    pub fn unmount(&mut self) -> Option<S> {
        self.scheduler.teardown(&mut self.frames);
        self.setup.resize_tracker_mut().disable();
        debug!("surface container unmounted");
        self.setup.unmount()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.setup.is_mounted()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.setup.surface()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.setup.surface_mut()
    }

    #[must_use]
    pub fn surface_size(&self) -> SurfaceSize {
        self.setup.surface_size()
    }

    /// Requests a redraw for a new dependency snapshot.
    pub fn set_dependencies(&mut self, dependencies: D) -> ScheduleOutcome {
        self.scheduler.schedule(dependencies, &mut self.frames)
    }

    pub fn invalidate(&mut self) -> ScheduleOutcome {
        self.scheduler.invalidate(&mut self.frames)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.scheduler.set_paused(paused, &mut self.frames);
    }

    #[must_use]
    pub fn scheduler(&self) -> &RenderScheduler<D> {
        &self.scheduler
    }

    #[must_use]
    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    /// Handles a fired animation frame. Returns `true` if it painted.
    pub fn run_frame(&mut self, handle: FrameHandle) -> bool {
        let setup = &mut self.setup;
        let draw = &mut self.draw;
        self.scheduler.run_frame(handle, |dependencies| {
            let Some(prepared) = setup.prepare_context() else {
                return FrameStatus::Skipped;
            };
            let size = SurfaceSize::new(prepared.width, prepared.height);
            draw(prepared.context, size, dependencies);
            FrameStatus::Drawn
        })
    }

    /// Reports the measured container size while responsive.
    ///
    /// A distinct size is passed to the resize handler and triggers a redraw.
    pub fn notify_container_resize(&mut self, size: SurfaceSize) -> bool {
        let notified = self.setup.resize_tracker_mut().notify(size);
        if notified {
            self.scheduler.invalidate(&mut self.frames);
        }
        notified
    }

    /// Pointer position relative to the mounted surface.
    #[must_use]
    pub fn pointer_position(&self, event: &PointerEvent) -> Option<CanvasPoint> {
        self.setup
            .surface()
            .map(|surface| pointer_surface_position(event, surface))
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        forward(&mut self.handlers.on_pointer_down, event);
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        forward(&mut self.handlers.on_pointer_move, event);
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) {
        forward(&mut self.handlers.on_pointer_up, event);
    }

    pub fn double_click(&mut self, event: &PointerEvent) {
        forward(&mut self.handlers.on_double_click, event);
    }

    pub fn key_down(&mut self, event: &KeyEvent) {
        forward(&mut self.handlers.on_key_down, event);
    }

    fn sync_resize_tracking(&mut self) {
        if !(self.props.responsive && self.setup.is_mounted()) {
            self.setup.resize_tracker_mut().disable();
            return;
        }
        if self.setup.resize_tracker().is_observing() {
            return;
        }
        let listener = Rc::clone(&self.resize_listener);
        self.setup
            .resize_tracker_mut()
            .enable(Box::new(move |size: SurfaceSize| {
                if let Some(callback) = listener.borrow_mut().as_mut() {
                    callback(size);
                }
            }));
    }
}

impl<S, D> SurfaceContainer<S, D, FrameQueue>
where
    S: RasterSurface,
    D: PartialEq + Clone,
{
    /// Runs one animation-frame tick of the owned [`FrameQueue`].
    ///
    /// Returns the number of frames that painted.
    pub fn flush_frames(&mut self) -> usize {
        let ready = self.frames.take_ready();
        ready
            .into_iter()
            .filter(|handle| self.run_frame(*handle))
            .count()
    }
}

fn forward<E: ?Sized>(handler: &mut Option<Box<dyn FnMut(&E)>>, event: &E) {
    if let Some(handler) = handler.as_mut() {
        handler(event);
    }
}
