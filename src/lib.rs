//! canvas-rs: coordinate mapping and rendering plumbing for canvas-based controls.
//!
//! The crate splits into pure math (`core`), theme resolution (`theme`),
//! stateless drawing helpers (`draw`), backend-neutral drawing contexts
//! (`render`), device-pixel-ratio aware surface handling (`surface`), frame
//! coalescing (`scheduler`) and the mountable `container` tying them together.

pub mod container;
pub mod core;
pub mod draw;
pub mod error;
pub mod render;
pub mod scheduler;
pub mod surface;
pub mod telemetry;
pub mod theme;

pub use container::{SurfaceContainer, SurfaceContainerProps, SurfaceHandlers};
pub use crate::core::{CanvasPoint, Point2D, SurfaceSize, Viewport};
pub use error::{CanvasError, CanvasResult};
pub use render::{DrawingContext, RecordingContext};
pub use scheduler::{FrameQueue, RenderScheduler};
pub use surface::{MemorySurface, RasterSurface, SurfaceSetup};
pub use theme::{ResolvedThemeColors, ThemeSnapshot, ThemeTokens};
