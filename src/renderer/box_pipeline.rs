use crate::geometry::Aabb;
use crate::viewport::{CameraUniform, ViewportRect};

/// Straight-alpha sRGB colour, one byte per channel.
pub type Rgba = [u8; 4];

/// One corner of a world-space box. Colour is packed and unpacked to
/// `vec4<f32>` by the vertex fetch (`Unorm8x4`).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxVertex {
    pub position: [f32; 2],
    pub color: Rgba,
}

impl BoxVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Unorm8x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BoxVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Indexed quads for one frame, in draw order.
///
/// ```text
/// 2──3
/// │ /│
/// 0──1   (y-up)
/// triangles: (0,1,2) and (2,1,3)
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxBatch {
    pub vertices: Vec<BoxVertex>,
    pub indices: Vec<u32>,
}

impl BoxBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, b: &Aabb, color: Rgba) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[
            BoxVertex { position: [b.left, b.bottom], color },
            BoxVertex { position: [b.right, b.bottom], color },
            BoxVertex { position: [b.left, b.top], color },
            BoxVertex { position: [b.right, b.top], color },
        ]);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    pub fn extend<'a>(&mut self, boxes: impl IntoIterator<Item = &'a Aabb>, color: Rgba) {
        for b in boxes {
            self.push(b, color);
        }
    }

    pub fn box_count(&self) -> usize {
        self.vertices.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// The camera uniform and its bind group (group 0, binding 0).
pub struct ViewportBinding {
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
    buffer: wgpu::Buffer,
}

impl ViewportBinding {
    pub fn new(device: &wgpu::Device, initial: ViewportRect) -> Self {
        use wgpu::util::DeviceExt;

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("viewport_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<CameraUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("viewport_uniform"),
            contents: bytemuck::bytes_of(&initial.view_proj()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("viewport_bg"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self { layout, bind_group, buffer }
    }

    pub fn write(&self, queue: &wgpu::Queue, rect: ViewportRect) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&rect.view_proj()));
    }
}

pub fn create_box_pipeline(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    viewport: &ViewportBinding,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("box_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/box.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("box_pipeline_layout"),
        bind_group_layouts: &[&viewport.layout],
        ..Default::default()
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("box_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[BoxVertex::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_adds_one_quad() {
        let mut batch = BoxBatch::new();
        batch.push(&Aabb::new(0.0, 10.0, 0.0, 20.0), [1, 2, 3, 255]);
        batch.push(&Aabb::new(5.0, 6.0, 5.0, 6.0), [0, 0, 0, 255]);
        assert_eq!(batch.box_count(), 2);
        assert_eq!(batch.indices.len(), 12);
        assert_eq!(&batch.indices[6..], &[4, 5, 6, 6, 5, 7]);
        assert_eq!(batch.vertices[3].position, [10.0, 20.0]);
    }

    #[test]
    fn test_vertex_is_packed() {
        assert_eq!(std::mem::size_of::<BoxVertex>(), 12);
    }
}
