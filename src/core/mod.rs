pub mod events;
pub mod mapping;
pub mod scale;
pub mod types;

pub use events::{KeyEvent, Modifiers, PointerEvent, PointerKind};
pub use mapping::{
    ClientRect, DEFAULT_HIT_TOLERANCE_PX, NO_HIT, canvas_to_domain, domain_to_canvas,
    hit_test_point, nearest_hit, pointer_surface_position,
};
pub use scale::AxisScale;
pub use types::{AxisRange, BackingSize, CanvasPoint, DomainBounds, Point2D, SurfaceSize, Viewport};
