use serde::{Deserialize, Serialize};

/// Modifier keys held while an input event was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

/// Pointer input in viewport-relative ("client") coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub pointer_id: u32,
    pub pointer_kind: PointerKind,
    /// Button that changed state; `0` is the primary button.
    pub button: i16,
    /// Bitmask of buttons currently held.
    pub buttons: u16,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Primary-button mouse event at the given client position.
    #[must_use]
    pub fn at(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            pointer_id: 1,
            pointer_kind: PointerKind::Mouse,
            button: 0,
            buttons: 0,
            modifiers: Modifiers::default(),
        }
    }

    #[must_use]
    pub fn with_buttons(mut self, buttons: u16) -> Self {
        self.buttons = buttons;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Logical key value, e.g. `"ArrowLeft"` or `"a"`.
    pub key: String,
    pub modifiers: Modifiers,
    pub repeat: bool,
}

impl KeyEvent {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }
}
