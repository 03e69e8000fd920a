//! Slit Render System
//!
//! Frames are painted on a CPU [`Canvas`] and presented through wgpu.

pub mod canvas;
pub mod font;
pub mod presenter;
pub mod scene;
pub mod window;

pub use canvas::{rgb, Canvas, Rgba};
pub use presenter::Presenter;
pub use scene::{Palette, Scene};

pub use wgpu;
pub use winit;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create rendering surface")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("failed to create GPU device")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("canvas is {actual:?} but the presentation texture is {expected:?}")]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("failed to acquire surface texture")]
    Surface(#[from] wgpu::SurfaceError),
}

impl RenderError {
    /// Whether reconfiguring the surface lets rendering continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_surface_is_recoverable() {
        assert!(RenderError::Surface(wgpu::SurfaceError::Lost).is_recoverable());
        assert!(RenderError::Surface(wgpu::SurfaceError::Outdated).is_recoverable());
        assert!(!RenderError::Surface(wgpu::SurfaceError::OutOfMemory).is_recoverable());
        assert!(!RenderError::NoAdapter.is_recoverable());
    }
}
