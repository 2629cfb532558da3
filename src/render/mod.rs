mod context;
mod primitives;
mod recording;

pub use context::DrawingContext;
pub use primitives::{Color, TextAlign, TextBaseline, Transform};
pub use recording::{
    AVERAGE_GLYPH_ADVANCE_EM, CommandRecording, DashPattern, DrawCommand, PathSegment,
    RecordedFill, RecordedStroke, RecordedText, RecordingContext,
};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoDrawingContext, CairoRenderStats, CairoSurface};
