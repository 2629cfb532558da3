use crate::core::{BackingSize, CanvasPoint, ClientRect, SurfaceSize};
use crate::error::{CanvasError, CanvasResult};
use crate::render::RecordingContext;

use super::RasterSurface;

/// In-memory surface backed by a [`RecordingContext`].
///
/// Layout size, client origin and device pixel ratio are set by the host (or
/// a test) directly; backing-store resizes are counted.
#[derive(Debug)]
pub struct MemorySurface {
    logical: SurfaceSize,
    client_origin: CanvasPoint,
    device_pixel_ratio: Option<f64>,
    backing: BackingSize,
    context: Option<RecordingContext>,
    resize_count: usize,
}

impl MemorySurface {
    pub fn new(logical: SurfaceSize) -> CanvasResult<Self> {
        if !logical.is_valid() {
            return Err(CanvasError::InvalidSurfaceSize {
                width: logical.width,
                height: logical.height,
            });
        }
        Ok(Self {
            logical,
            client_origin: CanvasPoint::new(0.0, 0.0),
            device_pixel_ratio: None,
            backing: BackingSize::default(),
            context: Some(RecordingContext::new()),
            resize_count: 0,
        })
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = Some(ratio);
        self
    }

    #[must_use]
    pub fn with_client_origin(mut self, origin: CanvasPoint) -> Self {
        self.client_origin = origin;
        self
    }

    /// Simulates a surface whose drawing context could not be created.
    #[must_use]
    pub fn without_context(mut self) -> Self {
        self.context = None;
        self
    }

    pub fn set_logical_size(&mut self, logical: SurfaceSize) {
        self.logical = logical;
    }

    pub fn set_client_origin(&mut self, origin: CanvasPoint) {
        self.client_origin = origin;
    }

    pub fn set_device_pixel_ratio(&mut self, ratio: Option<f64>) {
        self.device_pixel_ratio = ratio;
    }

    /// Number of times the backing store has been resized.
    #[must_use]
    pub fn resize_count(&self) -> usize {
        self.resize_count
    }

    #[must_use]
    pub fn recording_context(&self) -> Option<&RecordingContext> {
        self.context.as_ref()
    }

    pub fn recording_context_mut(&mut self) -> Option<&mut RecordingContext> {
        self.context.as_mut()
    }
}

impl ClientRect for MemorySurface {
    fn client_origin(&self) -> CanvasPoint {
        self.client_origin
    }
}

impl RasterSurface for MemorySurface {
    type Context = RecordingContext;

    fn logical_size(&self) -> SurfaceSize {
        self.logical
    }

    fn backing_size(&self) -> BackingSize {
        self.backing
    }

    fn resize_backing_store(&mut self, size: BackingSize) {
        self.backing = size;
        self.resize_count += 1;
    }

    fn context(&mut self) -> Option<&mut RecordingContext> {
        self.context.as_mut()
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.device_pixel_ratio
    }
}
