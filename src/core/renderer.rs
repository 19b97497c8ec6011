use std::sync::Arc;

use glam::Mat4;
use wgpu::util::DeviceExt;
use wgpu::{
    BindGroup, BindGroupLayout, Buffer, RenderPipeline, Surface, SurfaceConfiguration, TextureView,
};
use winit::window::Window;

use super::error::InitError;
use super::gpu_context::GpuContext;
use crate::types::{SceneUniform, ShaderKind, TextureData, TransformUniform, Vertex};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Renders one demo's triangles to a window surface
///
/// Owns the surface, the depth buffer, the demo's pipeline, and the
/// vertex/uniform buffers. Per frame it receives the MVP matrix and the
/// scene parameters, plus optionally rewritten vertex data.
pub struct Renderer {
    gpu: GpuContext,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    depth_view: TextureView,
    pipeline: RenderPipeline,
    vertex_buffer: Buffer,
    vertex_count: u32,
    transform_buffer: Buffer,
    scene_buffer: Buffer,
    bind_group: BindGroup,
    clear_color: wgpu::Color,
}

impl Renderer {
    pub fn new(
        window: Arc<Window>,
        shader: ShaderKind,
        vertices: &[Vertex],
        texture: Option<&TextureData>,
        clear_color: [f64; 3],
    ) -> Result<Self, InitError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;
        let adapter = pollster::block_on(GpuContext::request_adapter(&instance, &surface))?;
        let gpu = pollster::block_on(GpuContext::new(&adapter))?;

        let surface_config = Self::surface_config(&surface, &adapter, size.width, size.height)?;
        surface.configure(gpu.device(), &surface_config);

        log::info!(
            "Renderer initialized: {}x{} surface, format {:?}, {} vertices",
            size.width,
            size.height,
            surface_config.format,
            vertices.len()
        );

        let depth_view = Self::create_depth_view(&gpu, size.width, size.height);

        let vertex_buffer =
            gpu.device()
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Vertex Buffer"),
                    contents: bytemuck::cast_slice(vertices),
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                });

        let transform_buffer =
            gpu.device()
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Transform Buffer"),
                    contents: bytemuck::cast_slice(&[TransformUniform::new(Mat4::IDENTITY)]),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });

        let scene_buffer = gpu
            .device()
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Buffer"),
                contents: bytemuck::cast_slice(&[SceneUniform::default()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group_layout = Self::create_bind_group_layout(&gpu, shader);
        let bind_group = Self::create_bind_group(
            &gpu,
            &bind_group_layout,
            &transform_buffer,
            &scene_buffer,
            texture,
        );

        let pipeline =
            Self::create_pipeline(&gpu, shader, &bind_group_layout, surface_config.format);

        let [r, g, b] = clear_color;
        Ok(Self {
            gpu,
            surface,
            surface_config,
            depth_view,
            pipeline,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            transform_buffer,
            scene_buffer,
            bind_group,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
        })
    }

    /// Draw one frame. `vertices` re-uploads the vertex buffer first when a
    /// demo rewrote its geometry this frame.
    pub fn render(
        &mut self,
        mvp: Mat4,
        scene: SceneUniform,
        vertices: Option<&[Vertex]>,
    ) -> Result<(), wgpu::SurfaceError> {
        if let Some(vertices) = vertices {
            self.gpu.queue().write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(vertices),
            );
            self.vertex_count = vertices.len() as u32;
        }

        self.gpu.queue().write_buffer(
            &self.transform_buffer,
            0,
            bytemuck::cast_slice(&[TransformUniform::new(mvp)]),
        );
        self.gpu
            .queue()
            .write_buffer(&self.scene_buffer, 0, bytemuck::cast_slice(&[scene]));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Demo Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Demo Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.draw(0..self.vertex_count, 0..1);
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    /// Resize the surface and depth buffer
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface
            .configure(self.gpu.device(), &self.surface_config);
        self.depth_view = Self::create_depth_view(&self.gpu, width, height);
    }

    fn surface_config(
        surface: &Surface,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<SurfaceConfiguration, InitError> {
        let caps = surface.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(InitError::IncompatibleSurface)?;

        Ok(SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    fn create_depth_view(gpu: &GpuContext, width: u32, height: u32) -> TextureView {
        let texture = gpu.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_bind_group_layout(gpu: &GpuContext, shader: ShaderKind) -> BindGroupLayout {
        let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let mut entries = vec![uniform_entry(0), uniform_entry(1)];
        if shader == ShaderKind::Textured {
            entries.push(wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            });
            entries.push(wgpu::BindGroupLayoutEntry {
                binding: 3,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            });
        }

        gpu.device()
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Demo Bind Group Layout"),
                entries: &entries,
            })
    }

    fn create_bind_group(
        gpu: &GpuContext,
        layout: &BindGroupLayout,
        transform_buffer: &Buffer,
        scene_buffer: &Buffer,
        texture: Option<&TextureData>,
    ) -> BindGroup {
        let mut entries = vec![
            wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: scene_buffer.as_entire_binding(),
            },
        ];

        let texture_view;
        let sampler;
        if let Some(texture) = texture {
            texture_view = Self::upload_texture(gpu, texture);
            sampler = gpu.device().create_sampler(&wgpu::SamplerDescriptor {
                label: Some("Demo Texture Sampler"),
                address_mode_u: wgpu::AddressMode::Repeat,
                address_mode_v: wgpu::AddressMode::Repeat,
                address_mode_w: wgpu::AddressMode::Repeat,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                mipmap_filter: wgpu::FilterMode::Nearest,
                ..Default::default()
            });
            entries.push(wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(&texture_view),
            });
            entries.push(wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::Sampler(&sampler),
            });
        }

        gpu.device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Demo Bind Group"),
            layout,
            entries: &entries,
        })
    }

    fn upload_texture(gpu: &GpuContext, data: &TextureData) -> TextureView {
        let texture = gpu.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("Demo Texture"),
            size: wgpu::Extent3d {
                width: data.width,
                height: data.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        gpu.queue().write_texture(
            texture.as_image_copy(),
            &data.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * data.width),
                rows_per_image: Some(data.height),
            },
            wgpu::Extent3d {
                width: data.width,
                height: data.height,
                depth_or_array_layers: 1,
            },
        );

        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_pipeline(
        gpu: &GpuContext,
        shader: ShaderKind,
        bind_group_layout: &BindGroupLayout,
        surface_format: wgpu::TextureFormat,
    ) -> RenderPipeline {
        let source = match shader {
            ShaderKind::Simple => include_str!("../shaders/simple.wgsl"),
            ShaderKind::Phong => include_str!("../shaders/phong.wgsl"),
            ShaderKind::Textured => include_str!("../shaders/textured.wgsl"),
        };

        let module = gpu
            .device()
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Demo Shader"),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            });

        let pipeline_layout =
            gpu.device()
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("Demo Pipeline Layout"),
                    bind_group_layouts: &[bind_group_layout],
                    push_constant_ranges: &[],
                });

        gpu.device()
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Demo Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &module,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &module,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
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
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }
}
