//! Rendering seam
//!
//! Game code only produces `Frame`s. Anything that can draw a list of coloured
//! cubes can implement `FrameRenderer`; the crate ships a headless one.

pub mod frame;
pub mod headless;

pub use frame::{BlockInstance, CameraPose, Frame, RenderBatch, RenderBatches};
pub use headless::{HeadlessRenderer, RenderStats};

/// Failure reported by a drawing backend
///
/// The headless renderer never fails; windowed backends map their surface and
/// device errors into this.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Renderer backend failed: {message}")]
    Backend { message: String },
}

/// Draws one frame of block instances
pub trait FrameRenderer {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError>;
}
