use super::helpers;
use crate::core::{Billboard, BillboardKind};

/// Upper bound on drawn billboards per frame (two flares plus the live
/// particles; emission rate times lifetime stays well below this).
pub(crate) const MAX_BILLBOARDS: usize = 1024;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BillboardInstance {
    pub(crate) center_size: [f32; 4],
    pub(crate) color: [f32; 4],
    pub(crate) params: [f32; 4],
}

impl From<&Billboard> for BillboardInstance {
    fn from(b: &Billboard) -> Self {
        let kind = match b.kind {
            BillboardKind::Flare => 0.0,
            BillboardKind::Particle => 1.0,
        };
        Self {
            center_size: [b.position.x, b.position.y, b.position.z, b.size],
            color: b.color,
            params: [b.angle, kind, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BillboardUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) cam_right: [f32; 4],
    pub(crate) cam_up: [f32; 4],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4, 2 => Float32x4];

pub(crate) struct BillboardResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) staging: Vec<BillboardInstance>,
}

pub(crate) fn create_billboard_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> BillboardResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("billboard_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::BILLBOARD_WGSL.into()),
    });
    let (bgl, uniform_buffer, bind_group) = helpers::uniform_bind_group(
        device,
        "billboard_uniforms",
        std::mem::size_of::<BillboardUniforms>() as u64,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("billboard_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<BillboardInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    };
    // depth-tested against the mesh but not written, so sprites never
    // occlude each other
    let pipeline = helpers::make_pipeline(
        device,
        "billboard_pipeline",
        &pl,
        &shader,
        &[layout],
        color_format,
        false,
    );
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("billboard_instances"),
        size: (MAX_BILLBOARDS * std::mem::size_of::<BillboardInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    BillboardResources {
        pipeline,
        instance_buffer,
        uniform_buffer,
        bind_group,
        staging: Vec::with_capacity(MAX_BILLBOARDS),
    }
}
