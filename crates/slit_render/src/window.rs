//! Window management
//!
//! The detection plane has a fixed pixel size, so the window is created at
//! that size and is not resizable.

use winit::{dpi::LogicalSize, window::Window};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// Create window attributes from config
pub fn window_attributes(config: &WindowConfig) -> winit::window::WindowAttributes {
    Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(false)
}
