use approx::assert_relative_eq;
use canvas_rs::core::{CanvasPoint, DomainBounds, Viewport};
use canvas_rs::draw::{GridOptions, draw_domain_bounds, draw_grid};
use canvas_rs::render::RecordingContext;
use canvas_rs::theme::ResolvedThemeColors;

const WIDTH: f64 = 200.0;
const HEIGHT: f64 = 100.0;

fn unit_grid(subdivisions: u32) -> GridOptions {
    let domain = DomainBounds::new([0.0, 1.0], [0.0, 1.0]);
    GridOptions::new(Viewport::from_domain(domain), domain, subdivisions)
}

#[test]
fn grid_strokes_two_lines_per_boundary() {
    let theme = ResolvedThemeColors::fallback();
    for subdivisions in [1_u32, 2, 4, 10] {
        let mut context = RecordingContext::new();
        draw_grid(&mut context, WIDTH, HEIGHT, &theme, &unit_grid(subdivisions));
        let expected = 2 * (subdivisions as usize + 1);
        assert_eq!(context.recording().stroke_count(), expected);
    }
}

#[test]
fn zero_subdivisions_draws_a_single_step() {
    let mut context = RecordingContext::new();
    draw_grid(
        &mut context,
        WIDTH,
        HEIGHT,
        &ResolvedThemeColors::fallback(),
        &unit_grid(0),
    );
    assert_eq!(context.recording().stroke_count(), 4);
}

#[test]
fn grid_edges_are_stronger_than_interior_lines() {
    let mut context = RecordingContext::new();
    draw_grid(
        &mut context,
        WIDTH,
        HEIGHT,
        &ResolvedThemeColors::fallback(),
        &unit_grid(4),
    );

    let alphas: Vec<f64> = context
        .recording()
        .strokes()
        .iter()
        .map(|stroke| stroke.alpha)
        .collect();
    let expected_axis = [0.25, 0.12, 0.12, 0.12, 0.25];
    for (alpha, expected) in alphas.iter().zip(expected_axis.iter().chain(&expected_axis)) {
        assert_relative_eq!(*alpha, *expected);
    }
}

#[test]
fn grid_opacity_scales_every_line() {
    let mut context = RecordingContext::new();
    let options = unit_grid(2).with_opacity(0.5);
    draw_grid(
        &mut context,
        WIDTH,
        HEIGHT,
        &ResolvedThemeColors::fallback(),
        &options,
    );

    let strokes = context.recording().strokes();
    assert_relative_eq!(strokes[0].alpha, 0.125);
    assert_relative_eq!(strokes[1].alpha, 0.06);
    assert_relative_eq!(strokes[2].alpha, 0.125);
}

#[test]
fn grid_lines_are_pixel_snapped() {
    let mut context = RecordingContext::new();
    draw_grid(
        &mut context,
        WIDTH,
        HEIGHT,
        &ResolvedThemeColors::fallback(),
        &unit_grid(4),
    );
    let strokes = context.recording().strokes();

    let (from, to) = strokes[1].as_line().expect("straight line");
    assert_eq!(from, CanvasPoint::new(50.5, 0.0));
    assert_eq!(to, CanvasPoint::new(50.5, HEIGHT));

    // First horizontal line is domain y = 0, the bottom edge.
    let (from, to) = strokes[5].as_line().expect("straight line");
    assert_eq!(from, CanvasPoint::new(0.0, 100.5));
    assert_eq!(to, CanvasPoint::new(WIDTH, 100.5));

    assert!(strokes.iter().all(|stroke| stroke.line_width == 1.0));
}

#[test]
fn grid_uses_theme_text_color_and_resets_alpha() {
    let theme = ResolvedThemeColors::fallback();
    let mut context = RecordingContext::new();
    draw_grid(&mut context, WIDTH, HEIGHT, &theme, &unit_grid(3));

    assert!(
        context
            .recording()
            .strokes()
            .iter()
            .all(|stroke| stroke.color == theme.text)
    );
    assert_eq!(
        context.commands().last(),
        Some(&canvas_rs::render::DrawCommand::SetGlobalAlpha { alpha: 1.0 })
    );
}

#[test]
fn domain_bounds_always_strokes_four_lines() {
    let theme = ResolvedThemeColors::fallback();
    for subdivisions in [0_u32, 1, 8, 64] {
        let mut context = RecordingContext::new();
        draw_domain_bounds(&mut context, WIDTH, HEIGHT, &theme, &unit_grid(subdivisions));

        let strokes = context.recording().strokes();
        assert_eq!(strokes.len(), 4);
        for stroke in &strokes {
            assert_eq!(stroke.line_width, 1.5);
            assert_relative_eq!(stroke.alpha, 0.35);
        }
    }
}

#[test]
fn domain_bounds_follow_the_viewport() {
    let domain = DomainBounds::new([0.0, 10.0], [0.0, 10.0]);
    let viewport = Viewport::new([-10.0, 20.0], [-10.0, 20.0]);
    let mut context = RecordingContext::new();
    draw_domain_bounds(
        &mut context,
        300.0,
        300.0,
        &ResolvedThemeColors::fallback(),
        &GridOptions::new(viewport, domain, 4),
    );

    let strokes = context.recording().strokes();
    let (left, _) = strokes[0].as_line().expect("line");
    let (right, _) = strokes[1].as_line().expect("line");
    assert_eq!(left.px, 100.5);
    assert_eq!(right.px, 200.5);
}
