use approx::assert_relative_eq;
use canvas_rs::core::{CanvasPoint, DomainBounds, Point2D, Viewport};
use canvas_rs::draw::{
    AxisLabelOptions, CROSSHAIR_DASH, CrosshairOptions, GridOptions, OriginAxesOptions,
    PointMarkerOptions, draw_axis_labels, draw_crosshair, draw_origin_axes, draw_point_marker,
};
use canvas_rs::render::{DrawCommand, PathSegment, RecordingContext, TextAlign, TextBaseline};
use canvas_rs::theme::ResolvedThemeColors;

fn unit_viewport() -> Viewport {
    Viewport::new([0.0, 1.0], [0.0, 1.0])
}

#[test]
fn crosshair_is_dashed_and_resets_dash_afterwards() {
    let theme = ResolvedThemeColors::fallback();
    let mut context = RecordingContext::new();
    let options = CrosshairOptions::new(unit_viewport(), Point2D::new(0.5, 0.5));
    draw_crosshair(&mut context, 200.0, 100.0, &theme, &options);

    let recording = context.recording();
    let strokes = recording.strokes();
    assert_eq!(strokes.len(), 2);
    for stroke in &strokes {
        assert_eq!(stroke.dash.as_slice(), CROSSHAIR_DASH.as_slice());
        assert_eq!(stroke.color, theme.accent);
        assert_relative_eq!(stroke.alpha, 0.6);
    }
    assert!(recording.final_line_dash().is_empty());
    assert_eq!(
        recording.commands.last(),
        Some(&DrawCommand::SetGlobalAlpha { alpha: 1.0 })
    );

    let (from, to) = strokes[0].as_line().expect("vertical line");
    assert_eq!(from, CanvasPoint::new(100.5, 0.0));
    assert_eq!(to, CanvasPoint::new(100.5, 100.0));
    let (from, to) = strokes[1].as_line().expect("horizontal line");
    assert_eq!(from, CanvasPoint::new(0.0, 50.5));
    assert_eq!(to, CanvasPoint::new(200.0, 50.5));
}

#[test]
fn solid_short_crosshair_spans_twenty_pixels_each_way() {
    let mut context = RecordingContext::new();
    let options = CrosshairOptions::new(unit_viewport(), Point2D::new(0.5, 0.5))
        .with_dashed(false)
        .with_full_span(false)
        .with_opacity(0.5);
    draw_crosshair(
        &mut context,
        200.0,
        100.0,
        &ResolvedThemeColors::fallback(),
        &options,
    );

    let strokes = context.recording().strokes();
    assert!(strokes.iter().all(|stroke| stroke.dash.is_empty()));
    assert_relative_eq!(strokes[0].alpha, 0.3);

    let (from, to) = strokes[0].as_line().expect("vertical line");
    assert_eq!(from, CanvasPoint::new(100.5, 30.5));
    assert_eq!(to, CanvasPoint::new(100.5, 70.5));
    let (from, to) = strokes[1].as_line().expect("horizontal line");
    assert_eq!(from, CanvasPoint::new(80.5, 50.5));
    assert_eq!(to, CanvasPoint::new(120.5, 50.5));
}

#[test]
fn dash_does_not_leak_into_later_primitives() {
    let theme = ResolvedThemeColors::fallback();
    let mut context = RecordingContext::new();
    draw_crosshair(
        &mut context,
        100.0,
        100.0,
        &theme,
        &CrosshairOptions::new(unit_viewport(), Point2D::new(0.2, 0.8)),
    );
    draw_origin_axes(
        &mut context,
        100.0,
        100.0,
        &theme,
        &OriginAxesOptions::new(Viewport::new([-1.0, 1.0], [-1.0, 1.0])),
    );

    let strokes = context.recording().strokes();
    assert_eq!(strokes.len(), 4);
    assert!(strokes[2..].iter().all(|stroke| stroke.dash.is_empty()));
}

fn arc_radius(segments: &[PathSegment]) -> f64 {
    match segments {
        [PathSegment::Arc { radius, .. }] => *radius,
        other => panic!("expected a single arc, got {other:?}"),
    }
}

#[test]
fn point_marker_draws_ring_and_dot() {
    let theme = ResolvedThemeColors::fallback();
    let mut context = RecordingContext::new();
    let options = PointMarkerOptions::new(unit_viewport(), Point2D::new(0.25, 0.75));
    draw_point_marker(&mut context, 100.0, 100.0, &theme, &options);

    let recording = context.recording();
    let fills = recording.fills();
    let strokes = recording.strokes();
    assert_eq!(fills.len(), 2);
    assert_eq!(strokes.len(), 1);

    assert_eq!(arc_radius(&fills[0].segments), 6.0);
    assert_eq!(fills[0].color, theme.background_secondary);
    assert_eq!(arc_radius(&strokes[0].segments), 6.0);
    assert_eq!(strokes[0].color, theme.accent);
    assert_eq!(strokes[0].line_width, 2.0);

    assert_eq!(arc_radius(&fills[1].segments), 2.0);
    assert_eq!(fills[1].color, theme.accent);

    match fills[1].segments[0] {
        PathSegment::Arc { center, .. } => assert_eq!(center, CanvasPoint::new(25.0, 25.0)),
        PathSegment::Line { .. } => panic!("expected arc"),
    }
}

#[test]
fn hovered_marker_grows_and_keeps_secondary_fill() {
    let theme = ResolvedThemeColors::fallback();
    let mut context = RecordingContext::new();
    let options = PointMarkerOptions::new(unit_viewport(), Point2D::new(0.5, 0.5))
        .with_radius(5.0)
        .with_hovered(true);
    draw_point_marker(&mut context, 100.0, 100.0, &theme, &options);

    let fills = context.recording().fills();
    assert_eq!(arc_radius(&fills[0].segments), 7.0);
    assert_eq!(fills[0].color, theme.background_secondary);
    assert_eq!(arc_radius(&fills[1].segments), 2.0);
}

#[test]
fn dragged_marker_fills_ring_with_accent() {
    let theme = ResolvedThemeColors::fallback();
    let mut context = RecordingContext::new();
    let options =
        PointMarkerOptions::new(unit_viewport(), Point2D::new(0.5, 0.5)).with_dragging(true);
    draw_point_marker(&mut context, 100.0, 100.0, &theme, &options);

    let fills = context.recording().fills();
    assert_eq!(arc_radius(&fills[0].segments), 8.0);
    assert_eq!(fills[0].color, theme.accent);
    assert_eq!(fills[1].color, theme.accent);
}

fn origin_axis_strokes(view_x: [f64; 2], view_y: [f64; 2]) -> usize {
    let mut context = RecordingContext::new();
    draw_origin_axes(
        &mut context,
        120.0,
        80.0,
        &ResolvedThemeColors::fallback(),
        &OriginAxesOptions::new(Viewport::new(view_x, view_y)),
    );
    context.recording().stroke_count()
}

#[test]
fn origin_axes_draw_only_visible_zero_lines() {
    assert_eq!(origin_axis_strokes([-1.0, 1.0], [-1.0, 1.0]), 2);
    assert_eq!(origin_axis_strokes([-1.0, 1.0], [1.0, 2.0]), 1);
    assert_eq!(origin_axis_strokes([1.0, 2.0], [-1.0, 1.0]), 1);
    assert_eq!(origin_axis_strokes([1.0, 2.0], [1.0, 2.0]), 0);
}

#[test]
fn origin_y_axis_is_vertical_through_zero() {
    let mut context = RecordingContext::new();
    draw_origin_axes(
        &mut context,
        100.0,
        100.0,
        &ResolvedThemeColors::fallback(),
        &OriginAxesOptions::new(Viewport::new([-1.0, 1.0], [1.0, 2.0])),
    );
    let strokes = context.recording().strokes();
    let (from, to) = strokes[0].as_line().expect("line");
    assert_eq!(from, CanvasPoint::new(50.5, 0.0));
    assert_eq!(to, CanvasPoint::new(50.5, 100.0));
    assert_relative_eq!(strokes[0].alpha, 0.4);
}

fn unit_label_options() -> AxisLabelOptions {
    let domain = DomainBounds::new([0.0, 1.0], [0.0, 1.0]);
    AxisLabelOptions::new(GridOptions::new(Viewport::from_domain(domain), domain, 4))
}

#[test]
fn axis_labels_draw_one_label_per_boundary() {
    let theme = ResolvedThemeColors::fallback();
    let mut context = RecordingContext::new();
    draw_axis_labels(&mut context, 300.0, 200.0, &theme, &unit_label_options());

    let texts = context.recording().texts();
    assert_eq!(texts.len(), 10);

    let x_labels: Vec<&str> = texts[..5].iter().map(|text| text.text.as_str()).collect();
    assert_eq!(x_labels, ["0", "0.25", "0.5", "0.75", "1"]);
    let y_labels: Vec<&str> = texts[5..].iter().map(|text| text.text.as_str()).collect();
    assert_eq!(y_labels, ["0", "0.25", "0.5", "0.75", "1"]);

    assert!(texts.iter().all(|text| text.color == theme.text_muted));
    assert!(texts.iter().all(|text| text.font_size_px == theme.font_size));
}

#[test]
fn axis_label_alignment_follows_position() {
    let mut context = RecordingContext::new();
    draw_axis_labels(
        &mut context,
        300.0,
        200.0,
        &ResolvedThemeColors::fallback(),
        &unit_label_options(),
    );
    let texts = context.recording().texts();

    let x_aligns: Vec<TextAlign> = texts[..5].iter().map(|text| text.align).collect();
    assert_eq!(
        x_aligns,
        [
            TextAlign::Left,
            TextAlign::Center,
            TextAlign::Center,
            TextAlign::Center,
            TextAlign::Right
        ]
    );
    let y_baselines: Vec<TextBaseline> = texts[5..].iter().map(|text| text.baseline).collect();
    assert_eq!(
        y_baselines,
        [
            TextBaseline::Bottom,
            TextBaseline::Middle,
            TextBaseline::Middle,
            TextBaseline::Middle,
            TextBaseline::Top
        ]
    );
}

fn text_bottom(y: f64, baseline: TextBaseline, font_size: f64) -> f64 {
    match baseline {
        TextBaseline::Top => y + font_size,
        TextBaseline::Middle => y + font_size / 2.0,
        TextBaseline::Alphabetic | TextBaseline::Bottom => y,
    }
}

#[test]
fn y_labels_stay_clear_of_the_tick_row() {
    let theme = ResolvedThemeColors::fallback();
    for (width, height) in [(300.0, 200.0), (120.0, 60.0), (80.0, 40.0)] {
        let mut context = RecordingContext::new();
        draw_axis_labels(&mut context, width, height, &theme, &unit_label_options());
        let texts = context.recording().texts();

        let tick_row_top = texts[0].y - theme.font_size;
        for label in &texts[5..] {
            let bottom = text_bottom(label.y, label.baseline, label.font_size_px);
            assert!(
                bottom < tick_row_top,
                "y label {:?} at {bottom} overlaps tick row at {tick_row_top} ({width}x{height})",
                label.text
            );
        }
        for label in &texts {
            assert!((0.0..=width).contains(&label.x));
            assert!((0.0..=height).contains(&label.y));
        }
    }
}

#[test]
fn axis_names_are_drawn_when_given() {
    let theme = ResolvedThemeColors::fallback();
    let mut context = RecordingContext::new();
    let options = unit_label_options().with_label_x("time").with_label_y("value");
    draw_axis_labels(&mut context, 300.0, 200.0, &theme, &options);

    let texts = context.recording().texts();
    assert_eq!(texts.len(), 12);

    let name_x = &texts[10];
    assert_eq!(name_x.text, "time");
    assert_eq!(name_x.align, TextAlign::Right);
    assert_eq!(name_x.color, theme.text);
    assert_eq!(name_x.x, 296.0);

    let name_y = &texts[11];
    assert_eq!(name_y.text, "value");
    assert_eq!(name_y.baseline, TextBaseline::Top);
    assert_eq!(name_y.y, 4.0);
    assert!(name_y.x > 4.0);
    assert_eq!(
        context.commands().last(),
        Some(&DrawCommand::SetGlobalAlpha { alpha: 1.0 })
    );
}

#[test]
fn empty_axis_names_are_skipped() {
    let mut context = RecordingContext::new();
    let options = unit_label_options().with_label_x("").with_label_y("");
    draw_axis_labels(
        &mut context,
        300.0,
        200.0,
        &ResolvedThemeColors::fallback(),
        &options,
    );
    assert_eq!(context.recording().text_count(), 10);
}
