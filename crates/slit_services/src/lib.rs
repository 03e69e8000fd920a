//! Slit Services Layer
//!
//! Startup settings and input mapping.

pub mod input;
pub mod settings;

pub use input::{InputAction, KeyBindings, KeyState};
pub use settings::{Settings, SettingsError};
