//! Device-pixel-ratio-correct raster surface setup.

mod memory;
mod resize;

pub use memory::MemorySurface;
pub use resize::{ResizeCallback, ResizeTracker};

use tracing::{debug, trace};

use crate::core::{BackingSize, ClientRect, SurfaceSize};
use crate::render::{DrawingContext, Transform};

/// A pixel-addressable drawing target with a separate backing store.
///
/// Implementations report their laid-out logical size and own the backing
/// pixel buffer. Resizing the backing store clears its contents and resets
/// the context transform, as an HTML canvas does when its width or height
/// attribute is assigned.
pub trait RasterSurface: ClientRect {
    type Context: DrawingContext;

    /// Laid-out size in logical pixels.
    fn logical_size(&self) -> SurfaceSize;

    fn backing_size(&self) -> BackingSize;

    fn resize_backing_store(&mut self, size: BackingSize);

    /// Drawing context, or `None` when the backend could not create one.
    fn context(&mut self) -> Option<&mut Self::Context>;

    /// Physical pixels per logical pixel, when the environment reports one.
    fn device_pixel_ratio(&self) -> Option<f64> {
        None
    }
}

/// Context ready for a frame, already scaled to logical-pixel units.
#[derive(Debug)]
pub struct PreparedContext<'a, C> {
    pub context: &'a mut C,
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

/// Owns a (possibly not yet mounted) surface and keeps its backing store in
/// step with layout size and device pixel ratio.
#[derive(Debug)]
pub struct SurfaceSetup<S> {
    surface: Option<S>,
    resize: ResizeTracker,
}

impl<S> Default for SurfaceSetup<S> {
    fn default() -> Self {
        Self {
            surface: None,
            resize: ResizeTracker::new(),
        }
    }
}

impl<S: RasterSurface> SurfaceSetup<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_surface(surface: S) -> Self {
        Self {
            surface: Some(surface),
            resize: ResizeTracker::new(),
        }
    }

    /// Attaches `surface`, returning the one it replaces.
    pub fn mount(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    pub fn unmount(&mut self) -> Option<S> {
        self.surface.take()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Live logical size, `0×0` before mounting.
    #[must_use]
    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
            .as_ref()
            .map_or_else(SurfaceSize::zero, |surface| surface.logical_size())
    }

    /// Syncs the backing store to `logical size × device pixel ratio` and
    /// returns a context that draws in logical pixels.
    ///
    /// The backing store is only resized when its pixel dimensions differ
    /// from the target; otherwise the scale transform is re-applied. Callers
    /// repaint everything each frame either way.
    pub fn prepare_context(&mut self) -> Option<PreparedContext<'_, S::Context>> {
        let surface = self.surface.as_mut()?;
        if surface.context().is_none() {
            debug!("surface has no drawing context; skipping frame");
            return None;
        }

        let device_pixel_ratio = effective_device_pixel_ratio(surface.device_pixel_ratio());
        let logical = surface.logical_size();
        let target = BackingSize::for_logical(logical, device_pixel_ratio);
        let current = surface.backing_size();

        if current != target {
            debug!(
                from_width = current.width,
                from_height = current.height,
                to_width = target.width,
                to_height = target.height,
                device_pixel_ratio,
                "resizing surface backing store"
            );
            surface.resize_backing_store(target);
        } else {
            trace!(device_pixel_ratio, "backing store up to date; re-applying scale");
        }

        let context = surface.context()?;
        context.set_transform(Transform::scale(device_pixel_ratio));
        Some(PreparedContext {
            context,
            width: logical.width,
            height: logical.height,
            device_pixel_ratio,
        })
    }

    #[must_use]
    pub fn resize_tracker(&self) -> &ResizeTracker {
        &self.resize
    }

    pub fn resize_tracker_mut(&mut self) -> &mut ResizeTracker {
        &mut self.resize
    }
}

/// Ratio to scale by: the reported one when usable, else 1.
#[must_use]
pub fn effective_device_pixel_ratio(reported: Option<f64>) -> f64 {
    match reported {
        Some(ratio) if ratio.is_finite() && ratio > 0.0 => ratio,
        _ => 1.0,
    }
}
