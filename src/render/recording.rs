use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CanvasPoint;
use crate::error::{CanvasError, CanvasResult};
use crate::render::{DrawingContext, TextAlign, TextBaseline, Transform};

/// Average glyph advance, in ems, used by [`RecordingContext::measure_text`].
pub const AVERAGE_GLYPH_ADVANCE_EM: f64 = 0.6;

const DEFAULT_FONT_SIZE_PX: f64 = 10.0;
const DEFAULT_STYLE: &str = "#000000";

pub type DashPattern = SmallVec<[f64; 4]>;

/// One call made against a [`DrawingContext`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetTransform {
        transform: Transform,
    },
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    SetStrokeStyle {
        color: String,
    },
    SetFillStyle {
        color: String,
    },
    SetGlobalAlpha {
        alpha: f64,
    },
    SetLineWidth {
        width: f64,
    },
    SetLineDash {
        segments: DashPattern,
    },
    SetFont {
        size_px: f64,
        family: String,
    },
    SetTextAlign {
        align: TextAlign,
    },
    SetTextBaseline {
        baseline: TextBaseline,
    },
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Fill,
    Stroke,
    FillText {
        text: String,
        x: f64,
        y: f64,
    },
}

/// Piece of a path as it stood when it was stroked or filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    Line { from: CanvasPoint, to: CanvasPoint },
    Arc { center: CanvasPoint, radius: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedStroke {
    pub segments: Vec<PathSegment>,
    pub color: String,
    pub alpha: f64,
    pub line_width: f64,
    pub dash: DashPattern,
}

impl RecordedStroke {
    /// The stroke's only straight segment, if it is a single line.
    #[must_use]
    pub fn as_line(&self) -> Option<(CanvasPoint, CanvasPoint)> {
        match self.segments.as_slice() {
            [PathSegment::Line { from, to }] => Some((*from, *to)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFill {
    pub segments: Vec<PathSegment>,
    pub color: String,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedText {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub alpha: f64,
    pub font_size_px: f64,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Ordered command list captured from one or more frames.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandRecording {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecording {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Stroke))
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Fill))
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::FillText { .. }))
    }

    fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    /// Every stroke with the path and paint state in effect when it ran.
    #[must_use]
    pub fn strokes(&self) -> Vec<RecordedStroke> {
        let mut strokes = Vec::new();
        self.replay(|state, event| {
            if let ReplayEvent::Stroke(segments) = event {
                strokes.push(RecordedStroke {
                    segments: segments.to_vec(),
                    color: state.stroke_style.clone(),
                    alpha: state.alpha,
                    line_width: state.line_width,
                    dash: state.dash.clone(),
                });
            }
        });
        strokes
    }

    #[must_use]
    pub fn fills(&self) -> Vec<RecordedFill> {
        let mut fills = Vec::new();
        self.replay(|state, event| {
            if let ReplayEvent::Fill(segments) = event {
                fills.push(RecordedFill {
                    segments: segments.to_vec(),
                    color: state.fill_style.clone(),
                    alpha: state.alpha,
                });
            }
        });
        fills
    }

    #[must_use]
    pub fn texts(&self) -> Vec<RecordedText> {
        let mut texts = Vec::new();
        self.replay(|state, event| {
            if let ReplayEvent::Text { text, x, y } = event {
                texts.push(RecordedText {
                    text: text.to_owned(),
                    x,
                    y,
                    color: state.fill_style.clone(),
                    alpha: state.alpha,
                    font_size_px: state.font_size_px,
                    align: state.align,
                    baseline: state.baseline,
                });
            }
        });
        texts
    }

    /// Dash pattern in effect after the last command.
    #[must_use]
    pub fn final_line_dash(&self) -> DashPattern {
        let mut dash = DashPattern::new();
        for command in &self.commands {
            if let DrawCommand::SetLineDash { segments } = command {
                dash = segments.clone();
            }
        }
        dash
    }

    pub fn validate(&self) -> CanvasResult<()> {
        for (index, command) in self.commands.iter().enumerate() {
            validate_command(command).map_err(|reason| {
                CanvasError::InvalidData(format!("command #{index} ({command:?}): {reason}"))
            })?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> CanvasResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CanvasError::InvalidData(format!("failed to serialize command recording: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> CanvasResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            CanvasError::InvalidData(format!("failed to parse command recording json: {e}"))
        })
    }

    fn replay(&self, mut visit: impl FnMut(&ReplayState, ReplayEvent<'_>)) {
        let mut state = ReplayState::default();
        let mut path: Vec<PathSegment> = Vec::new();
        let mut cursor: Option<CanvasPoint> = None;

        for command in &self.commands {
            match command {
                DrawCommand::SetStrokeStyle { color } => state.stroke_style.clone_from(color),
                DrawCommand::SetFillStyle { color } => state.fill_style.clone_from(color),
                DrawCommand::SetGlobalAlpha { alpha } => state.alpha = *alpha,
                DrawCommand::SetLineWidth { width } => state.line_width = *width,
                DrawCommand::SetLineDash { segments } => state.dash.clone_from(segments),
                DrawCommand::SetFont { size_px, .. } => state.font_size_px = *size_px,
                DrawCommand::SetTextAlign { align } => state.align = *align,
                DrawCommand::SetTextBaseline { baseline } => state.baseline = *baseline,
                DrawCommand::BeginPath => {
                    path.clear();
                    cursor = None;
                }
                DrawCommand::MoveTo { x, y } => cursor = Some(CanvasPoint::new(*x, *y)),
                DrawCommand::LineTo { x, y } => {
                    let to = CanvasPoint::new(*x, *y);
                    if let Some(from) = cursor {
                        path.push(PathSegment::Line { from, to });
                    }
                    cursor = Some(to);
                }
                DrawCommand::Arc { x, y, radius, .. } => {
                    path.push(PathSegment::Arc {
                        center: CanvasPoint::new(*x, *y),
                        radius: *radius,
                    });
                }
                DrawCommand::Stroke => visit(&state, ReplayEvent::Stroke(&path)),
                DrawCommand::Fill => visit(&state, ReplayEvent::Fill(&path)),
                DrawCommand::FillText { text, x, y } => visit(
                    &state,
                    ReplayEvent::Text {
                        text,
                        x: *x,
                        y: *y,
                    },
                ),
                DrawCommand::SetTransform { .. } | DrawCommand::ClearRect { .. } => {}
            }
        }
    }
}

#[derive(Debug, Clone)]
struct ReplayState {
    stroke_style: String,
    fill_style: String,
    alpha: f64,
    line_width: f64,
    dash: DashPattern,
    font_size_px: f64,
    align: TextAlign,
    baseline: TextBaseline,
}

impl Default for ReplayState {
    fn default() -> Self {
        Self {
            stroke_style: DEFAULT_STYLE.to_owned(),
            fill_style: DEFAULT_STYLE.to_owned(),
            alpha: 1.0,
            line_width: 1.0,
            dash: DashPattern::new(),
            font_size_px: DEFAULT_FONT_SIZE_PX,
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
        }
    }
}

enum ReplayEvent<'a> {
    Stroke(&'a [PathSegment]),
    Fill(&'a [PathSegment]),
    Text { text: &'a str, x: f64, y: f64 },
}

fn validate_command(command: &DrawCommand) -> Result<(), &'static str> {
    let all_finite = |values: &[f64]| values.iter().all(|value| value.is_finite());
    match command {
        DrawCommand::SetTransform { transform } => {
            let Transform { a, b, c, d, e, f } = *transform;
            if !all_finite(&[a, b, c, d, e, f]) {
                return Err("transform must be finite");
            }
        }
        DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        } => {
            if !all_finite(&[*x, *y, *width, *height]) {
                return Err("clear rect must be finite");
            }
        }
        DrawCommand::SetGlobalAlpha { alpha } => {
            if !alpha.is_finite() || !(0.0..=1.0).contains(alpha) {
                return Err("alpha must be finite and in [0, 1]");
            }
        }
        DrawCommand::SetLineWidth { width } => {
            if !width.is_finite() || *width <= 0.0 {
                return Err("line width must be finite and > 0");
            }
        }
        DrawCommand::SetLineDash { segments } => {
            if segments.iter().any(|value| !value.is_finite() || *value < 0.0) {
                return Err("dash segments must be finite and >= 0");
            }
        }
        DrawCommand::SetFont { size_px, .. } => {
            if !size_px.is_finite() || *size_px <= 0.0 {
                return Err("font size must be finite and > 0");
            }
        }
        DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => {
            if !all_finite(&[*x, *y]) {
                return Err("path coordinates must be finite");
            }
        }
        DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        } => {
            if !all_finite(&[*x, *y, *radius, *start_angle, *end_angle]) {
                return Err("arc must be finite");
            }
            if *radius < 0.0 {
                return Err("arc radius must be >= 0");
            }
        }
        DrawCommand::FillText { x, y, .. } => {
            if !all_finite(&[*x, *y]) {
                return Err("text coordinates must be finite");
            }
        }
        DrawCommand::SetStrokeStyle { .. }
        | DrawCommand::SetFillStyle { .. }
        | DrawCommand::SetTextAlign { .. }
        | DrawCommand::SetTextBaseline { .. }
        | DrawCommand::BeginPath
        | DrawCommand::Fill
        | DrawCommand::Stroke => {}
    }
    Ok(())
}

/// Headless drawing context that records every call.
///
/// Used by tests and by hosts that forward commands to another process or
/// rasterize later. Text is measured with a fixed average glyph advance.
#[derive(Debug, Default)]
pub struct RecordingContext {
    recording: CommandRecording,
    font_size_px: Option<f64>,
}

impl RecordingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn recording(&self) -> &CommandRecording {
        &self.recording
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.recording.commands
    }

    /// Hands over everything recorded so far and starts an empty recording.
    pub fn take_recording(&mut self) -> CommandRecording {
        std::mem::take(&mut self.recording)
    }

    #[must_use]
    pub fn into_recording(self) -> CommandRecording {
        self.recording
    }

    fn push(&mut self, command: DrawCommand) {
        self.recording.commands.push(command);
    }
}

impl DrawingContext for RecordingContext {
    fn set_transform(&mut self, transform: Transform) {
        self.push(DrawCommand::SetTransform { transform });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(DrawCommand::SetStrokeStyle {
            color: color.to_owned(),
        });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.push(DrawCommand::SetFillStyle {
            color: color.to_owned(),
        });
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.push(DrawCommand::SetGlobalAlpha { alpha });
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::SetLineWidth { width });
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.push(DrawCommand::SetLineDash {
            segments: DashPattern::from_slice(segments),
        });
    }

    fn set_font(&mut self, size_px: f64, family: &str) {
        self.font_size_px = Some(size_px);
        self.push(DrawCommand::SetFont {
            size_px,
            family: family.to_owned(),
        });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.push(DrawCommand::SetTextAlign { align });
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.push(DrawCommand::SetTextBaseline { baseline });
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.push(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
        });
    }

    fn measure_text(&self, text: &str) -> f64 {
        let font_size_px = self.font_size_px.unwrap_or(DEFAULT_FONT_SIZE_PX);
        text.chars().count() as f64 * font_size_px * AVERAGE_GLYPH_ADVANCE_EM
    }
}
