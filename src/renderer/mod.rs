//! Rendering module
//!
//! The game draws through the canvas-like [`DrawSurface`] trait.
//! [`VertexCanvas`] tessellates those calls and [`RenderState`] puts the
//! triangles on screen with WebGPU.

pub mod canvas;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use canvas::VertexCanvas;
pub use pipeline::{RenderError, RenderState};
pub use scene::draw_frame;
pub use surface::DrawSurface;
pub use vertex::{Rgba, Vertex, colors};
