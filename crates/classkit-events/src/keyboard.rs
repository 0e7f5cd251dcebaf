//! Keyboard Events
//!
//! Key-down event data with key codes and modifiers.

/// Key modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win on Windows
}

impl KeyModifiers {
    /// Create from booleans
    pub fn from_flags(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        Self {
            shift,
            ctrl,
            alt,
            meta,
        }
    }

    /// Check if any modifier is pressed
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// An already-dispatched key-down event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key_code: u32,
    pub modifiers: KeyModifiers,
}

impl KeyboardEvent {
    /// Create a key-down event with no modifiers held
    pub fn new(key_code: u32) -> Self {
        Self {
            key_code,
            modifiers: KeyModifiers::default(),
        }
    }

    /// Add modifiers
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
