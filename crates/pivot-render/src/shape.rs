//! Indexed 2D shapes and the pipeline that draws them.
//!
//! A [`Shape`] owns a vertex/index buffer pair uploaded once at
//! construction; a [`ShapeRenderer`] owns the render pipeline and the
//! world-matrix uniform, and issues the indexed draw call.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use pivot_core::Transform2D;
use pivot_core::profiling::profile_function;
use wgpu::util::DeviceExt;

use crate::context::GraphicsContext;
use crate::shader::{ShaderError, compile_shader};

/// Error produced when shape geometry fails validation.
#[derive(Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// The vertex or index list is empty.
    Empty,
    /// An index references a vertex outside the vertex list.
    IndexOutOfBounds { index: u32, vertex_count: usize },
    /// The index count is not a multiple of 3 (triangle-list topology).
    InvalidIndexCount { count: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => {
                write!(f, "shape requires at least one vertex and one index")
            }
            ShapeError::IndexOutOfBounds {
                index,
                vertex_count,
            } => {
                write!(
                    f,
                    "index {} is out of bounds for {} vertices",
                    index, vertex_count
                )
            }
            ShapeError::InvalidIndexCount { count } => {
                write!(f, "index count {} is not a multiple of 3", count)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Check that `indices` form whole triangles and stay within `vertices`.
pub(crate) fn validate(vertices: &[Vec2], indices: &[u32]) -> Result<(), ShapeError> {
    if vertices.is_empty() || indices.is_empty() {
        return Err(ShapeError::Empty);
    }
    if !indices.len().is_multiple_of(3) {
        return Err(ShapeError::InvalidIndexCount {
            count: indices.len(),
        });
    }
    for &index in indices {
        if index as usize >= vertices.len() {
            return Err(ShapeError::IndexOutOfBounds {
                index,
                vertex_count: vertices.len(),
            });
        }
    }
    Ok(())
}

/// A 2D shape with GPU-resident vertex and index buffers.
///
/// Geometry is validated and uploaded once; the buffers are owned for the
/// shape's lifetime and released when it is dropped.
pub struct Shape {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_count: u32,
}

impl Shape {
    pub fn new(
        context: &GraphicsContext,
        vertices: &[Vec2],
        indices: &[u32],
    ) -> Result<Self, ShapeError> {
        validate(vertices, indices)?;

        let vertex_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Shape Vertex Buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Shape Index Buffer"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        Ok(Self {
            vertex_buffer,
            index_buffer,
            vertex_count: vertices.len() as u32,
            index_count: indices.len() as u32,
        })
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Bind the vertex/index buffers and issue the indexed draw call.
    ///
    /// Mutates pass binding state for the duration of the call. The pipeline
    /// and uniforms must already be set; [`ShapeRenderer::draw`] does both.
    pub fn draw(&self, pass: &mut wgpu::RenderPass) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// GPU uniform holding the world matrix.
///
/// Layout (64 bytes, 16-byte aligned): one `mat4x4<f32>`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, PartialEq)]
pub(crate) struct WorldUniform {
    matrix: [[f32; 4]; 4],
}

impl WorldUniform {
    fn new(transform: &Transform2D) -> Self {
        Self {
            matrix: transform.matrix4().to_cols_array_2d(),
        }
    }
}

/// Renders [`Shape`]s under a world transform.
///
/// Owns the render pipeline, the world-matrix uniform buffer, and its bind
/// group. Construction fails if the shader does not compile; the failure is
/// logged and the caller decides whether to keep running.
pub struct ShapeRenderer {
    context: &'static GraphicsContext,
    pipeline: wgpu::RenderPipeline,
    world_buffer: wgpu::Buffer,
    world_bind_group: wgpu::BindGroup,
}

impl ShapeRenderer {
    /// Create a renderer drawing with the given WGSL shader.
    ///
    /// `target_format` must match the render target this renderer will draw
    /// into; for window surfaces use
    /// [`RenderableWindow::format`](crate::RenderableWindow::format).
    pub fn new(
        context: &'static GraphicsContext,
        target_format: wgpu::TextureFormat,
        shader_source: &str,
    ) -> Result<Self, ShaderError> {
        let shader = compile_shader(&context.device, "Shape Shader", shader_source)?;

        let world_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shape World Buffer"),
            size: std::mem::size_of::<WorldUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            context
                .device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Shape Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let world_bind_group = context.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Shape World Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: world_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout =
            context
                .device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("Shape Pipeline Layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    push_constant_ranges: &[],
                });

        let pipeline = context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Shape Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: 8,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 0,
                            shader_location: 0,
                        }],
                    }],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Ok(Self {
            context,
            pipeline,
            world_buffer,
            world_bind_group,
        })
    }

    /// Draw `shape` with the world matrix composed from `transform`.
    ///
    /// The matrix is recomputed from the transform's fields on every call
    /// and uploaded into the uniform buffer before the draw is recorded.
    pub fn draw(&self, pass: &mut wgpu::RenderPass, shape: &Shape, transform: &Transform2D) {
        profile_function!();

        self.context.queue.write_buffer(
            &self.world_buffer,
            0,
            bytemuck::bytes_of(&WorldUniform::new(transform)),
        );

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.world_bind_group, &[]);
        shape.draw(pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> (Vec<Vec2>, Vec<u32>) {
        (
            vec![
                Vec2::new(-1.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
            ],
            vec![0, 1, 2, 3, 2, 1],
        )
    }

    #[test]
    fn test_valid_square_geometry() {
        let (vertices, indices) = square();
        assert!(validate(&vertices, &indices).is_ok());
    }

    #[test]
    fn test_empty_geometry_rejected() {
        let (vertices, _) = square();
        assert_eq!(validate(&vertices, &[]), Err(ShapeError::Empty));
        assert_eq!(validate(&[], &[0, 1, 2]), Err(ShapeError::Empty));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let (vertices, _) = square();
        assert_eq!(
            validate(&vertices, &[0, 1, 4]),
            Err(ShapeError::IndexOutOfBounds {
                index: 4,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn test_partial_triangle_rejected() {
        let (vertices, _) = square();
        assert_eq!(
            validate(&vertices, &[0, 1, 2, 3]),
            Err(ShapeError::InvalidIndexCount { count: 4 })
        );
    }

    #[test]
    fn test_world_uniform_layout() {
        // One mat4x4<f32>, tightly packed for the GPU.
        assert_eq!(std::mem::size_of::<WorldUniform>(), 64);

        let mut t = Transform2D::new();
        t.set_position(Vec2::new(0.25, 0.25));
        let uniform = WorldUniform::new(&t);
        // Translation lands in the fourth column.
        assert_eq!(uniform.matrix[3][0], 0.25);
        assert_eq!(uniform.matrix[3][1], 0.25);
        assert_eq!(uniform.matrix[3][3], 1.0);
    }
}
