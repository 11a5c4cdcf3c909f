//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Straight RGBA, components in 0..=1, sRGB-encoded like canvas colours
pub type Rgba = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Rgba,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    /// Paddles, ball and scores (#fff)
    pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
    /// Centre net (#888)
    pub const NET: Rgba = [0x88 as f32 / 255.0, 0x88 as f32 / 255.0, 0x88 as f32 / 255.0, 1.0];
    pub const BACKGROUND: Rgba = [0.0, 0.0, 0.0, 1.0];
}
