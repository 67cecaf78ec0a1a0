//! Wireframe painting pipeline
//!
//! Paints the projection pipeline's screen primitives: filled squares as
//! two triangles each, segments as hardware lines. Primitives are
//! tessellated on the CPU every frame and drawn in insertion order, so
//! overlapping primitives paint exactly as the scene ordered them.

use wgpu::util::DeviceExt;

use super::types::{Vertex2D, ViewportUniforms};
use hyperview_core::ScreenPrimitive;

/// Which of the two pipelines a draw batch uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BatchKind {
    Squares,
    Segments,
}

/// A run of consecutive same-kind primitives, as a vertex range into the
/// corresponding vertex buffer
#[derive(Clone, Debug, PartialEq)]
struct DrawBatch {
    kind: BatchKind,
    range: std::ops::Range<u32>,
}

/// CPU-side tessellation of one frame's screen primitives
#[derive(Default)]
struct FrameGeometry {
    square_vertices: Vec<Vertex2D>,
    segment_vertices: Vec<Vertex2D>,
    batches: Vec<DrawBatch>,
}

impl FrameGeometry {
    fn build(primitives: &[ScreenPrimitive]) -> Self {
        let mut geometry = Self::default();

        for primitive in primitives {
            match *primitive {
                ScreenPrimitive::FilledSquare { x, y, half_size, color } => {
                    let start = geometry.square_vertices.len() as u32;
                    geometry.push_square(x, y, half_size, color.rgba);
                    geometry.extend_batch(BatchKind::Squares, start, 6);
                }
                ScreenPrimitive::Segment { x1, y1, x2, y2, color } => {
                    let start = geometry.segment_vertices.len() as u32;
                    geometry.segment_vertices.push(Vertex2D::new([x1, y1], color.rgba));
                    geometry.segment_vertices.push(Vertex2D::new([x2, y2], color.rgba));
                    geometry.extend_batch(BatchKind::Segments, start, 2);
                }
            }
        }

        geometry
    }

    fn push_square(&mut self, x: f32, y: f32, half_size: f32, rgba: [f32; 4]) {
        let (x0, y0) = (x - half_size, y - half_size);
        let (x1, y1) = (x + half_size, y + half_size);

        // Two counter-clockwise triangles
        self.square_vertices.push(Vertex2D::new([x0, y0], rgba));
        self.square_vertices.push(Vertex2D::new([x1, y0], rgba));
        self.square_vertices.push(Vertex2D::new([x1, y1], rgba));

        self.square_vertices.push(Vertex2D::new([x0, y0], rgba));
        self.square_vertices.push(Vertex2D::new([x1, y1], rgba));
        self.square_vertices.push(Vertex2D::new([x0, y1], rgba));
    }

    /// Extend the current batch when it has the same kind, otherwise start
    /// a new one; keeps draw order identical to primitive order.
    fn extend_batch(&mut self, kind: BatchKind, start: u32, count: u32) {
        match self.batches.last_mut() {
            Some(batch) if batch.kind == kind && batch.range.end == start => {
                batch.range.end = start + count;
            }
            _ => self.batches.push(DrawBatch {
                kind,
                range: start..start + count,
            }),
        }
    }
}

/// 2D pipeline pair for colored squares and line segments
pub struct WirePipeline {
    square_pipeline: wgpu::RenderPipeline,
    segment_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    square_buffer: wgpu::Buffer,
    square_capacity: usize,
    segment_buffer: wgpu::Buffer,
    segment_capacity: usize,
    batches: Vec<DrawBatch>,
}

/// Initial vertex buffer capacity, in vertices
const INITIAL_CAPACITY: usize = 1024;

impl WirePipeline {
    /// Create the pipeline pair for the given surface format
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Wire Bind Group Layout"),
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

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Wire Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/wire2d.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wire Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let square_pipeline = Self::build_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            wgpu::PrimitiveTopology::TriangleList,
            "Square Pipeline",
        );
        let segment_pipeline = Self::build_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            wgpu::PrimitiveTopology::LineList,
            "Segment Pipeline",
        );

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Viewport Uniform Buffer"),
            contents: bytemuck::bytes_of(&ViewportUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Wire Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let square_buffer = Self::create_vertex_buffer(device, "Square Vertices", INITIAL_CAPACITY);
        let segment_buffer =
            Self::create_vertex_buffer(device, "Segment Vertices", INITIAL_CAPACITY);

        Self {
            square_pipeline,
            segment_pipeline,
            uniform_buffer,
            bind_group,
            square_buffer,
            square_capacity: INITIAL_CAPACITY,
            segment_buffer,
            segment_capacity: INITIAL_CAPACITY,
            batches: Vec::new(),
        }
    }

    fn build_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        topology: wgpu::PrimitiveTopology,
        label: &str,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    /// Get the vertex buffer layout for Vertex2D
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex2D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        }
    }

    fn create_vertex_buffer(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
    ) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * std::mem::size_of::<Vertex2D>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Update the viewport uniforms after a resize
    pub fn set_viewport(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&ViewportUniforms::for_size(width, height)),
        );
    }

    /// Tessellate and upload one frame's primitives
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        primitives: &[ScreenPrimitive],
    ) {
        let geometry = FrameGeometry::build(primitives);

        if geometry.square_vertices.len() > self.square_capacity {
            self.square_capacity = geometry.square_vertices.len().next_power_of_two();
            self.square_buffer =
                Self::create_vertex_buffer(device, "Square Vertices", self.square_capacity);
            log::debug!("grew square vertex buffer to {} vertices", self.square_capacity);
        }
        if geometry.segment_vertices.len() > self.segment_capacity {
            self.segment_capacity = geometry.segment_vertices.len().next_power_of_two();
            self.segment_buffer =
                Self::create_vertex_buffer(device, "Segment Vertices", self.segment_capacity);
            log::debug!("grew segment vertex buffer to {} vertices", self.segment_capacity);
        }

        if !geometry.square_vertices.is_empty() {
            queue.write_buffer(
                &self.square_buffer,
                0,
                bytemuck::cast_slice(&geometry.square_vertices),
            );
        }
        if !geometry.segment_vertices.is_empty() {
            queue.write_buffer(
                &self.segment_buffer,
                0,
                bytemuck::cast_slice(&geometry.segment_vertices),
            );
        }

        self.batches = geometry.batches;
    }

    /// Record the paint pass for the primitives last passed to `prepare`
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Wire Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.bind_group, &[]);

        for batch in &self.batches {
            match batch.kind {
                BatchKind::Squares => {
                    render_pass.set_pipeline(&self.square_pipeline);
                    render_pass.set_vertex_buffer(0, self.square_buffer.slice(..));
                }
                BatchKind::Segments => {
                    render_pass.set_pipeline(&self.segment_pipeline);
                    render_pass.set_vertex_buffer(0, self.segment_buffer.slice(..));
                }
            }
            render_pass.draw(batch.range.clone(), 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperview_core::Color;

    fn square(x: f32, y: f32) -> ScreenPrimitive {
        ScreenPrimitive::FilledSquare {
            x,
            y,
            half_size: 2.0,
            color: Color::RED,
        }
    }

    fn segment(x1: f32, y1: f32, x2: f32, y2: f32) -> ScreenPrimitive {
        ScreenPrimitive::Segment {
            x1,
            y1,
            x2,
            y2,
            color: Color::BLUE,
        }
    }

    #[test]
    fn test_square_tessellates_to_two_triangles() {
        let geometry = FrameGeometry::build(&[square(10.0, -5.0)]);
        assert_eq!(geometry.square_vertices.len(), 6);
        assert!(geometry.segment_vertices.is_empty());

        // Corners span half_size around the center
        let xs: Vec<f32> = geometry.square_vertices.iter().map(|v| v.position[0]).collect();
        assert!(xs.iter().all(|x| *x == 8.0 || *x == 12.0));
        assert!(geometry
            .square_vertices
            .iter()
            .all(|v| v.color == Color::RED.rgba));
    }

    #[test]
    fn test_segment_tessellates_to_two_vertices() {
        let geometry = FrameGeometry::build(&[segment(0.0, 0.0, 3.0, 4.0)]);
        assert_eq!(geometry.segment_vertices.len(), 2);
        assert_eq!(geometry.segment_vertices[0].position, [0.0, 0.0]);
        assert_eq!(geometry.segment_vertices[1].position, [3.0, 4.0]);
    }

    #[test]
    fn test_consecutive_same_kind_primitives_share_a_batch() {
        let geometry = FrameGeometry::build(&[
            segment(0.0, 0.0, 1.0, 1.0),
            segment(1.0, 1.0, 2.0, 2.0),
        ]);
        assert_eq!(geometry.batches.len(), 1);
        assert_eq!(geometry.batches[0].kind, BatchKind::Segments);
        assert_eq!(geometry.batches[0].range, 0..4);
    }

    #[test]
    fn test_batches_preserve_insertion_order() {
        let geometry = FrameGeometry::build(&[
            square(0.0, 0.0),
            segment(0.0, 0.0, 1.0, 1.0),
            square(5.0, 5.0),
        ]);

        let kinds: Vec<BatchKind> = geometry.batches.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![BatchKind::Squares, BatchKind::Segments, BatchKind::Squares]
        );
        // The second square batch starts where the first left off
        assert_eq!(geometry.batches[2].range, 6..12);
    }

    #[test]
    fn test_empty_frame_produces_no_batches() {
        let geometry = FrameGeometry::build(&[]);
        assert!(geometry.batches.is_empty());
        assert!(geometry.square_vertices.is_empty());
        assert!(geometry.segment_vertices.is_empty());
    }
}
