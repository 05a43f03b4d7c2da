use super::{
    camera::{Camera, CameraUniform},
    color::Color,
    mesh::Mesh,
    render::{RenderState, DEPTH_FORMAT},
};
use std::mem;
use wgpu::util::DeviceExt;
use thiserror::Error;

/// The representation of a mesh in the gpu allowing for rendering
pub struct GPUMesh {
    /// The number of vertices to draw
    vertex_count: u32,
    /// The color to clear the screen with
    clear_color: Color,
    /// The positions of all vertices
    buffer_position: wgpu::Buffer,
    /// The colors of all vertices
    buffer_color: wgpu::Buffer,
    /// The camera matrices
    buffer_camera: wgpu::Buffer,
    /// The bind group for the camera
    bind_group: wgpu::BindGroup,
    /// The render pipeline
    pipeline: wgpu::RenderPipeline,
}

impl GPUMesh {
    /// Uploads a mesh to the gpu, the buffers are never changed afterwards
    ///
    /// # Parameters
    ///
    /// mesh: The mesh to upload
    ///
    /// clear_color: The background color
    ///
    /// shader: The shader with the entry points vs_main and fs_main
    ///
    /// render_state: The render state to use for rendering
    pub fn new(mesh: &Mesh, clear_color: &Color, shader: wgpu::ShaderModuleDescriptor, render_state: &RenderState) -> Self {
        // Create the vertex buffers
        let buffer_position = render_state.get_device().create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Position Buffer"),
            contents: bytemuck::cast_slice(&mesh.get_position_data()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let buffer_color = render_state.get_device().create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Color Buffer"),
            contents: bytemuck::cast_slice(&mesh.get_color_data()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Create camera buffer
        let buffer_camera = render_state.get_device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Create bind group for the camera
        let bind_group_layout = render_state.get_device().create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Bind Group Camera Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });
        let bind_group = render_state.get_device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Bind Group Camera"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer_camera.as_entire_binding(),
                },
            ]
        });

        // Create shader
        let shader = render_state.get_device().create_shader_module(shader);

        // Create render pipeline
        let pipeline_layout = render_state.get_device().create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Pipeline Layout Descriptor"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = render_state.get_device().create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline Mesh"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[
                    vertex_layout(0),
                    vertex_layout(1),
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.get_config().format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })]
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The tessellated sphere is wound inwards so both sides are drawn
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        Self {
            vertex_count: mesh.vertex_count() as u32,
            clear_color: *clear_color,
            buffer_position,
            buffer_color,
            buffer_camera,
            bind_group,
            pipeline,
        }
    }

    /// Draws the mesh as seen from the camera and presents it
    ///
    /// # Parameters
    ///
    /// camera: The camera to view the mesh from
    ///
    /// render_state: The render state to use for rendering
    ///
    /// # Errors
    ///
    /// See RenderError for the possible errors
    pub fn render(&self, camera: &Camera, render_state: &RenderState) -> Result<(), RenderError> {
        // Set the camera
        render_state.get_queue().write_buffer(&self.buffer_camera, 0, bytemuck::cast_slice(&[camera.get_data()]));

        // Get the current view
        let output_texture = render_state.get_surface().get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Create the encoder
        let mut encoder = render_state.get_device().create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Command Encoder"),
        });

        // Initialize the render pass
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                timestamp_writes: None,
                occlusion_query_set: None,
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.clear_color.r as f64,
                            g: self.clear_color.g as f64,
                            b: self.clear_color.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    }
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: render_state.get_depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.buffer_position.slice(..));
            render_pass.set_vertex_buffer(1, self.buffer_color.slice(..));
            render_pass.draw(0..self.vertex_count, 0..1);
        }

        // Submit
        render_state.get_queue().submit(std::iter::once(encoder.finish()));

        // Show to screen
        output_texture.present();

        Ok(())
    }

    /// Retrieves the number of vertices drawn every frame
    pub fn get_vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

/// Gets the memory description of a vertex buffer holding 3 floats per vertex
///
/// # Parameters
///
/// shader_location: The location of the attribute in the shader, 0 for positions and 1 for colors
fn vertex_layout(shader_location: u32) -> wgpu::VertexBufferLayout<'static> {
    let attributes: &'static [wgpu::VertexAttribute] = match shader_location {
        0 => &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
        _ => &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        }],
    };

    wgpu::VertexBufferLayout {
        array_stride: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unable to get surface texture: {:?}", .0)]
    SurfaceTexture(wgpu::SurfaceError),
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(err: wgpu::SurfaceError) -> RenderError {
        RenderError::SurfaceTexture(err)
    }
}
