use std::io::Write;

use cairo::{Context, Format, ImageSurface, Matrix, Operator};
use pango::FontDescription;
use tracing::{debug, warn};

use crate::core::{BackingSize, CanvasPoint, ClientRect, SurfaceSize};
use crate::error::{CanvasError, CanvasResult};
use crate::render::{Color, DrawingContext, TextAlign, TextBaseline, Transform};
use crate::surface::RasterSurface;
use crate::theme::DEFAULT_FONT_FAMILY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub strokes: usize,
    pub fills: usize,
    pub texts: usize,
}

#[derive(Debug, Clone)]
struct PaintState {
    stroke: Color,
    fill: Color,
    alpha: f64,
    font_size_px: f64,
    font_family: String,
    align: TextAlign,
    baseline: TextBaseline,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            fill: Color::BLACK,
            alpha: 1.0,
            font_size_px: 10.0,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
        }
    }
}

/// [`DrawingContext`] over a Cairo context, with Pango text.
///
/// Paths persist across `fill`/`stroke` as on an HTML canvas. Cairo errors
/// do not interrupt the frame: the first one is kept and can be collected
/// with [`CairoDrawingContext::take_error`].
#[derive(Debug)]
pub struct CairoDrawingContext {
    context: Context,
    state: PaintState,
    stats: CairoRenderStats,
    error: Option<CanvasError>,
}

impl CairoDrawingContext {
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self {
            context,
            state: PaintState::default(),
            stats: CairoRenderStats::default(),
            error: None,
        }
    }

    #[must_use]
    pub fn cairo_context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    pub fn take_error(&mut self) -> Option<CanvasError> {
        self.error.take()
    }

    fn record_error(&mut self, prefix: &str, err: cairo::Error) {
        warn!(error = %err, "{prefix}");
        if self.error.is_none() {
            self.error = Some(map_backend_error(prefix, err));
        }
    }

    fn apply_color(&self, color: Color) {
        let color = color.with_alpha_factor(self.state.alpha);
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }

    fn create_layout(&self, text: &str) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let mut font_description = FontDescription::new();
        font_description.set_family(&self.state.font_family);
        font_description.set_absolute_size(self.state.font_size_px * f64::from(pango::SCALE));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);
        layout
    }
}

fn parse_style(color: &str, previous: Color) -> Color {
    match Color::parse_css(color) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(%err, "keeping previous color");
            previous
        }
    }
}

impl DrawingContext for CairoDrawingContext {
    fn set_transform(&mut self, transform: Transform) {
        self.context.set_matrix(Matrix::new(
            transform.a,
            transform.b,
            transform.c,
            transform.d,
            transform.e,
            transform.f,
        ));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if let Err(err) = self.context.save() {
            self.record_error("failed to save cairo state", err);
            return;
        }
        self.context.set_operator(Operator::Clear);
        self.context.new_path();
        self.context.rectangle(x, y, width, height);
        if let Err(err) = self.context.fill() {
            self.record_error("failed to clear rectangle", err);
        }
        if let Err(err) = self.context.restore() {
            self.record_error("failed to restore cairo state", err);
        }
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.state.stroke = parse_style(color, self.state.stroke);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.state.fill = parse_style(color, self.state.fill);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        if alpha.is_finite() {
            self.state.alpha = alpha.clamp(0.0, 1.0);
        }
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.context.set_line_width(width);
        }
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.context.set_dash(segments, 0.0);
    }

    fn set_font(&mut self, size_px: f64, family: &str) {
        if size_px.is_finite() && size_px > 0.0 {
            self.state.font_size_px = size_px;
        }
        family.clone_into(&mut self.state.font_family);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.baseline = baseline;
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.context.arc(x, y, radius, start_angle, end_angle);
    }

    fn fill(&mut self) {
        self.apply_color(self.state.fill);
        match self.context.fill_preserve() {
            Ok(()) => self.stats.fills += 1,
            Err(err) => self.record_error("failed to fill path", err),
        }
    }

    fn stroke(&mut self) {
        self.apply_color(self.state.stroke);
        match self.context.stroke_preserve() {
            Ok(()) => self.stats.strokes += 1,
            Err(err) => self.record_error("failed to stroke path", err),
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let layout = self.create_layout(text);
        let (text_width, text_height) = layout.pixel_size();
        let text_width = f64::from(text_width);
        let text_height = f64::from(text_height);

        let left = match self.state.align {
            TextAlign::Left => x,
            TextAlign::Center => x - text_width / 2.0,
            TextAlign::Right => x - text_width,
        };
        let top = match self.state.baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - text_height / 2.0,
            TextBaseline::Alphabetic => y - f64::from(layout.baseline()) / f64::from(pango::SCALE),
            TextBaseline::Bottom => y - text_height,
        };

        self.apply_color(self.state.fill);
        self.context.new_path();
        self.context.move_to(left, top);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.context.new_path();
        self.stats.texts += 1;
    }

    fn measure_text(&self, text: &str) -> f64 {
        f64::from(self.create_layout(text).pixel_size().0)
    }
}

/// Offscreen image surface implementing [`RasterSurface`].
///
/// Resizing the backing store allocates a new image, which starts cleared
/// with an identity transform. If allocation fails the previous image stays
/// in place, so the size mismatch is retried on the next frame.
#[derive(Debug)]
pub struct CairoSurface {
    image: ImageSurface,
    context: Option<CairoDrawingContext>,
    logical: SurfaceSize,
    client_origin: CanvasPoint,
    device_pixel_ratio: Option<f64>,
}

impl CairoSurface {
    pub fn new(logical: SurfaceSize) -> CanvasResult<Self> {
        if logical.is_empty() || !logical.is_valid() {
            return Err(CanvasError::InvalidSurfaceSize {
                width: logical.width,
                height: logical.height,
            });
        }
        let backing = BackingSize::for_logical(logical, 1.0);
        let image = create_image(backing)?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            image,
            context: Some(CairoDrawingContext::new(context)),
            logical,
            client_origin: CanvasPoint::new(0.0, 0.0),
            device_pixel_ratio: None,
        })
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = Some(ratio);
        self
    }

    pub fn set_logical_size(&mut self, logical: SurfaceSize) {
        self.logical = logical;
    }

    pub fn set_client_origin(&mut self, origin: CanvasPoint) {
        self.client_origin = origin;
    }

    #[must_use]
    pub fn image(&self) -> &ImageSurface {
        &self.image
    }

    #[must_use]
    pub fn drawing_context(&self) -> Option<&CairoDrawingContext> {
        self.context.as_ref()
    }

    pub fn write_png<W: Write>(&self, writer: &mut W) -> CanvasResult<()> {
        self.image.flush();
        self.image
            .write_to_png(writer)
            .map_err(|err| CanvasError::Backend(format!("failed to encode png: {err}")))
    }
}

impl ClientRect for CairoSurface {
    fn client_origin(&self) -> CanvasPoint {
        self.client_origin
    }
}

impl RasterSurface for CairoSurface {
    type Context = CairoDrawingContext;

    fn logical_size(&self) -> SurfaceSize {
        self.logical
    }

    fn backing_size(&self) -> BackingSize {
        BackingSize::new(
            u32::try_from(self.image.width()).unwrap_or(0),
            u32::try_from(self.image.height()).unwrap_or(0),
        )
    }

    fn resize_backing_store(&mut self, size: BackingSize) {
        let created = create_image(size).and_then(|image| {
            let context = Context::new(&image)
                .map_err(|err| map_backend_error("failed to create cairo context", err))?;
            Ok((image, context))
        });
        match created {
            Ok((image, context)) => {
                self.image = image;
                self.context = Some(CairoDrawingContext::new(context));
            }
            Err(err) => {
                warn!(
                    %err,
                    width = size.width,
                    height = size.height,
                    "backing store resize failed; keeping previous image"
                );
            }
        }
    }

    fn context(&mut self) -> Option<&mut CairoDrawingContext> {
        self.context.as_mut()
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.device_pixel_ratio
    }
}

fn create_image(size: BackingSize) -> CanvasResult<ImageSurface> {
    let width = i32::try_from(size.width).map_err(|_| CanvasError::InvalidSurfaceSize {
        width: f64::from(size.width),
        height: f64::from(size.height),
    })?;
    let height = i32::try_from(size.height).map_err(|_| CanvasError::InvalidSurfaceSize {
        width: f64::from(size.width),
        height: f64::from(size.height),
    })?;
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> CanvasError {
    CanvasError::Backend(format!("{prefix}: {err}"))
}
