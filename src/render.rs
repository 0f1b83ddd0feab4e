use crate::core::{ModelData, TacoScene, LIGHT_DIRECTION, LIGHT_INTENSITY};
use web_sys as web;

mod billboards;
mod helpers;
mod mesh;

use billboards::{
    create_billboard_resources, BillboardInstance, BillboardResources, BillboardUniforms,
    MAX_BILLBOARDS,
};
use mesh::{create_mesh_resources, MeshResources, MeshUniforms};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    mesh: MeshResources,
    billboards: BillboardResources,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, model: &ModelData) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // transparent canvas over the page
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        let mesh = create_mesh_resources(&device, format, model);
        let billboards = create_billboard_resources(&device, format);
        log::info!(
            "[gpu] ready {}x{} {:?}, {} triangles",
            width,
            height,
            format,
            model.triangle_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            mesh,
            billboards,
            _depth_tex: depth_tex,
            depth_view,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self._depth_tex = tex;
            self.depth_view = view;
        }
    }

    fn write_uniforms(&mut self, scene: &TacoScene) -> u32 {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let view_proj = scene.camera.view_projection(aspect);
        let view = scene.camera.view_matrix();
        let mascot = scene.mascot();

        let mesh_u = MeshUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: mascot.world_matrix().to_cols_array_2d(),
            light: LIGHT_DIRECTION.extend(LIGHT_INTENSITY).to_array(),
            params: [mascot.visibility, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.mesh.uniform_buffer, 0, bytemuck::bytes_of(&mesh_u));

        let bb_u = BillboardUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            cam_right: view.row(0).truncate().extend(0.0).to_array(),
            cam_up: view.row(1).truncate().extend(0.0).to_array(),
        };
        self.queue
            .write_buffer(&self.billboards.uniform_buffer, 0, bytemuck::bytes_of(&bb_u));

        let staging = &mut self.billboards.staging;
        staging.clear();
        staging.extend(
            scene
                .billboards()
                .iter()
                .take(MAX_BILLBOARDS)
                .map(BillboardInstance::from),
        );
        if !staging.is_empty() {
            self.queue.write_buffer(
                &self.billboards.instance_buffer,
                0,
                bytemuck::cast_slice(staging.as_slice()),
            );
        }
        staging.len() as u32
    }

    pub fn render(&mut self, scene: &TacoScene) -> Result<(), wgpu::SurfaceError> {
        let instance_count = self.write_uniforms(scene);
        let draw_mesh = scene.mascot().visibility > 0.0;

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if draw_mesh {
                rpass.set_pipeline(&self.mesh.pipeline);
                rpass.set_bind_group(0, &self.mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(self.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
            }

            if instance_count > 0 {
                rpass.set_pipeline(&self.billboards.pipeline);
                rpass.set_bind_group(0, &self.billboards.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.billboards.instance_buffer.slice(..));
                rpass.draw(0..6, 0..instance_count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
