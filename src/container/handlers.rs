use std::fmt;

use crate::core::{KeyEvent, PointerEvent, SurfaceSize};
use crate::surface::ResizeCallback;

pub type PointerHandler = Box<dyn FnMut(&PointerEvent)>;
pub type KeyHandler = Box<dyn FnMut(&KeyEvent)>;

/// Caller-supplied input handlers. Events reach them exactly as raised;
/// translating positions into domain space is the caller's job.
#[derive(Default)]
pub struct SurfaceHandlers {
    pub on_pointer_down: Option<PointerHandler>,
    pub on_pointer_move: Option<PointerHandler>,
    pub on_pointer_up: Option<PointerHandler>,
    pub on_double_click: Option<PointerHandler>,
    pub on_key_down: Option<KeyHandler>,
    /// Called with each new container size while responsive.
    pub on_resize: Option<ResizeCallback>,
}

impl fmt::Debug for SurfaceHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceHandlers")
            .field("on_pointer_down", &self.on_pointer_down.is_some())
            .field("on_pointer_move", &self.on_pointer_move.is_some())
            .field("on_pointer_up", &self.on_pointer_up.is_some())
            .field("on_double_click", &self.on_double_click.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .finish()
    }
}

impl SurfaceHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_pointer_down(mut self, handler: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_pointer_down = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_pointer_move(mut self, handler: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_pointer_move = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_pointer_up(mut self, handler: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_pointer_up = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_double_click(mut self, handler: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_double_click = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_key_down(mut self, handler: impl FnMut(&KeyEvent) + 'static) -> Self {
        self.on_key_down = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_resize(mut self, handler: impl FnMut(SurfaceSize) + 'static) -> Self {
        self.on_resize = Some(Box::new(handler));
        self
    }
}
