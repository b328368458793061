pub mod box_pipeline;
pub mod hud;

use std::sync::Arc;

use anyhow::Context;
use glam::Vec2;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use box_pipeline::{BoxBatch, Rgba, ViewportBinding, create_box_pipeline};

use crate::game::Hud;
use crate::geometry::Aabb;
use crate::level::LevelData;
use crate::viewport::ViewportRect;

// ── Palette ─────────────────────────────────────────────────────────────────
pub const SKY: Rgba = [135, 206, 235, 255];
pub const BACKGROUND_TILE: Rgba = [115, 158, 178, 255];
pub const PLATFORM: Rgba = [92, 64, 51, 255];
pub const COIN: Rgba = [255, 214, 0, 255];
pub const HAZARD: Rgba = [217, 26, 26, 255];
pub const PLAYER: Rgba = [51, 89, 217, 255];
pub const FOREGROUND_TILE: Rgba = [26, 115, 38, 217];
pub const HUD_TEXT: Rgba = [0, 0, 0, 255];

/// World pixels per HUD font cell; five cells give an 18 px line.
pub const HUD_CELL: f32 = 3.6;

/// Clear colour for a level: its own background colour, else sky blue.
pub fn clear_color(level: &LevelData) -> wgpu::Color {
    let [r, g, b, a] = match level.background_color {
        Some([r, g, b]) => [r, g, b, 255],
        None => SKY,
    };
    let unit = |c: u8| c as f64 / 255.0;
    wgpu::Color { r: unit(r), g: unit(g), b: unit(b), a: unit(a) }
}

/// Everything drawn in one frame, back to front: background decoration,
/// platforms, coins, hazards, the player, foreground decoration, then the
/// score line at the HUD anchor.
pub fn frame_batch(level: &LevelData, player: &Aabb, hud: &Hud) -> BoxBatch {
    let mut batch = BoxBatch::new();
    batch.extend(level.background.iter(), BACKGROUND_TILE);
    batch.extend(level.platforms.iter(), PLATFORM);
    batch.extend(level.collectibles.iter(), COIN);
    batch.extend(level.hazards.iter(), HAZARD);
    batch.push(player, PLAYER);
    batch.extend(level.foreground.iter(), FOREGROUND_TILE);
    let text = hud::text_boxes(&hud.text, Vec2::new(hud.x, hud.y), HUD_CELL);
    batch.extend(&text, HUD_TEXT);
    batch
}

pub struct Renderer {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    box_pipeline: wgpu::RenderPipeline,
    viewport: ViewportBinding,
    clear: wgpu::Color,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, initial: ViewportRect) -> anyhow::Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(Arc::clone(&window))
            .context("failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .context("no suitable GPU adapter found")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .context("failed to create device")?;

        let caps = surface.get_capabilities(&adapter);
        let format = *caps.formats.first().context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let viewport = ViewportBinding::new(&device, initial);
        let box_pipeline = create_box_pipeline(&device, format, &viewport);

        tracing::info!(?format, width = config.width, height = config.height, "renderer ready");

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            box_pipeline,
            viewport,
            clear: wgpu::Color::BLACK,
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Point the camera at a new viewport rectangle.
    pub fn set_viewport(&mut self, rect: ViewportRect) {
        self.viewport.write(&self.queue, rect);
    }

    pub fn set_clear_color(&mut self, color: wgpu::Color) {
        self.clear = color;
    }

    /// Render one frame through the current viewport.
    pub fn render(&mut self, batch: &BoxBatch) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("world_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if !batch.is_empty() {
                let vbuf = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("box_vertices"),
                    contents: bytemuck::cast_slice(&batch.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let ibuf = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("box_indices"),
                    contents: bytemuck::cast_slice(&batch.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                pass.set_pipeline(&self.box_pipeline);
                pass.set_bind_group(0, &self.viewport.bind_group, &[]);
                pass.set_vertex_buffer(0, vbuf.slice(..));
                pass.set_index_buffer(ibuf.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..batch.indices.len() as u32, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
