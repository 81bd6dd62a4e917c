//! Shader compilation with surfaced diagnostics.
//!
//! Every shader used by [`ShapeRenderer`](crate::ShapeRenderer) shares the
//! same interface: a `vec2<f32>` position attribute at location 0 and a
//! world matrix uniform at group 0, binding 0.

use std::fmt;

/// Default shader: world transform, solid white fill.
pub const WHITE_SHADER: &str = r#"
struct World {
    matrix: mat4x4<f32>,
}

@group(0) @binding(0)
var<uniform> world: World;

@vertex
fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
    return world.matrix * vec4<f32>(position, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 1.0, 1.0, 1.0);
}
"#;

/// Demo shader: flips the Y coordinate after the world transform and fills
/// the shape solid red.
pub const FLIP_Y_RED_SHADER: &str = r#"
struct World {
    matrix: mat4x4<f32>,
}

@group(0) @binding(0)
var<uniform> world: World;

@vertex
fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
    var pos = world.matrix * vec4<f32>(position, 0.0, 1.0);
    pos.y = -pos.y;
    return pos;
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.0, 0.0, 1.0);
}
"#;

/// Error produced when a shader module fails validation.
#[derive(Debug)]
pub enum ShaderError {
    Compile {
        /// The label the module was created with.
        label: String,
        /// The validation message reported by the backend.
        message: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { label, message } => {
                write!(f, "shader '{}' failed to compile: {}", label, message)
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// Compile a WGSL shader module, surfacing validation failures.
///
/// Module creation runs inside a validation error scope; on failure the
/// diagnostic is logged, the failed module is dropped, and the error is
/// returned so the caller can decide whether to continue.
pub fn compile_shader(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        tracing::error!("shader '{}' failed to compile: {}", label, error);
        return Err(ShaderError::Compile {
            label: label.to_string(),
            message: error.to_string(),
        });
    }

    Ok(module)
}
