use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

use crate::appearance::Appearance;
use crate::shape::Shape;

use super::common::{time_ubo_min_binding_size, vertex_layout, wgpu_topology, TimeUniform};
use super::{RenderCtx, RenderTarget};

/// GPU resources for a single shape instance.
///
/// Acquisition order mirrors construction: upload the vertex buffer,
/// compile the shader module, link the pipeline, then create the
/// time-uniform binding. After that the only mutable pieces are the two
/// buffers: vertices re-upload when the shape's revision advances, and the
/// time uniform is written per frame for animated appearances.
pub struct ShapeRenderer {
    vertex_buf: wgpu::Buffer,
    /// Allocated capacity in vertices; the buffer regrows by recreation.
    vertex_capacity: usize,
    vertex_count: u32,

    pipeline: wgpu::RenderPipeline,

    time_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    animated: bool,
    synced_revision: u64,
}

impl ShapeRenderer {
    /// Builds all GPU resources for `shape` with the given appearance.
    ///
    /// Shader validation errors are captured via a wgpu error scope and
    /// logged; construction continues so a broken appearance shows up as a
    /// log line rather than a crash, matching the sample's tolerant policy.
    pub fn new(ctx: &RenderCtx<'_>, shape: &dyn Shape, appearance: &Appearance) -> Self {
        let verts = shape.vertices();

        let vertex_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("prisma shape vbo"),
                contents: bytemuck::cast_slice(verts),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });

        let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("prisma shape shader"),
                source: wgpu::ShaderSource::Wgsl(appearance.shader_source().into()),
            });
        if let Some(err) = pollster::block_on(scope.pop()) {
            log::error!("shape shader failed to compile: {err}");
        }

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("prisma shape bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(time_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("prisma shape pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("prisma shape pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &module,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &module,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu_topology(shape.topology()),
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        let time_ubo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("prisma shape time ubo"),
                contents: bytemuck::bytes_of(&TimeUniform::zeroed()),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("prisma shape bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: time_ubo.as_entire_binding(),
            }],
        });

        Self {
            vertex_buf,
            vertex_capacity: verts.len(),
            vertex_count: shape.vertex_count(),
            pipeline,
            time_ubo,
            bind_group,
            animated: appearance.is_animated(),
            synced_revision: shape.revision(),
        }
    }

    /// Re-uploads the vertex buffer if the shape mutated since the last
    /// sync.
    ///
    /// In-place `write_buffer` when the new vertex list still fits;
    /// recreation when it outgrew the allocation (circle segment growth).
    pub fn sync(&mut self, ctx: &RenderCtx<'_>, shape: &dyn Shape) {
        if shape.revision() == self.synced_revision {
            return;
        }

        let verts = shape.vertices();
        if verts.len() > self.vertex_capacity {
            self.vertex_buf = ctx
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("prisma shape vbo"),
                    contents: bytemuck::cast_slice(verts),
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                });
            self.vertex_capacity = verts.len();
        } else {
            ctx.queue
                .write_buffer(&self.vertex_buf, 0, bytemuck::cast_slice(verts));
        }

        self.vertex_count = shape.vertex_count();
        self.synced_revision = shape.revision();
    }

    /// Writes the time uniform. No-op for non-animated appearances.
    pub fn update_time(&self, ctx: &RenderCtx<'_>, secs: f32) {
        if !self.animated {
            return;
        }
        let u = TimeUniform {
            secs,
            _pad: [0.0; 3],
        };
        ctx.queue.write_buffer(&self.time_ubo, 0, bytemuck::bytes_of(&u));
    }

    /// Syncs, updates the time uniform, and issues the draw call in its own
    /// render pass (loading the existing target contents).
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        shape: &dyn Shape,
        time_secs: f32,
    ) {
        self.sync(ctx, shape);
        self.update_time(ctx, time_secs);

        if self.vertex_count == 0 {
            return;
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("prisma shape pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }
}
