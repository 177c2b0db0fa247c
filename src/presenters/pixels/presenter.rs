use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{info, warn};
use pixels::wgpu;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::window::Window;

use crate::controllers::explorer::RenderParams;
use crate::controllers::ports::{CaptureRequest, FrameCapturePort};
use crate::core::sequence::CaptureError;
use crate::input::cli::WindowSettings;
use crate::input::gui::GuiError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::shader::{FrameReadback, MandelbrotPipeline, ShaderPrecision};
use crate::storage::write_png;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    fractal: MandelbrotPipeline,
    readback: FrameReadback,
    width: u32,
    height: u32,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, settings: &WindowSettings) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let (pixels, precision) = build_pixels(window, settings.vsync)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );
        let fractal =
            MandelbrotPipeline::new(pixels.device(), pixels.render_texture_format(), precision);
        let readback = FrameReadback::new(pixels.device(), precision);

        Ok(Self {
            pixels,
            egui_renderer,
            fractal,
            readback,
            width: size.width,
            height: size.height,
        })
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        params: &RenderParams,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.fractal.prepare(self.pixels.queue(), params);

        self.pixels.render_with(|encoder, render_target, context| {
            self.fractal.draw(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Overlay on top of the fractal pass.
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;
        self.pixels.resize_surface(width, height)?;
        Ok(())
    }

    fn precision(&self) -> ShaderPrecision {
        self.fractal.precision()
    }
}

impl FrameCapturePort for PixelsPresenter {
    fn capture(&mut self, request: &CaptureRequest) -> Result<(), CaptureError> {
        let viewport = request.params.viewport;
        let rgba = self
            .readback
            .read_frame(self.pixels.device(), self.pixels.queue(), &request.params)?;

        write_png(rgba, viewport.width(), viewport.height(), &request.path)
    }
}

/// Asks for a device with 64-bit float shaders and falls back to the default
/// device when the adapter cannot provide one.
fn build_pixels(
    window: &'static Window,
    vsync: bool,
) -> Result<(Pixels<'static>, ShaderPrecision), GuiError> {
    let size = window.inner_size();

    // The CPU-side pixel buffer is never shown; keep it minimal.
    let double = PixelsBuilder::new(1, 1, SurfaceTexture::new(size.width, size.height, window))
        .enable_vsync(vsync)
        .device_descriptor(wgpu::DeviceDescriptor {
            label: Some("mandelbrot device (f64)"),
            required_features: wgpu::Features::SHADER_F64,
            required_limits: wgpu::Limits::default(),
        })
        .build();

    match double {
        Ok(pixels) => Ok((pixels, ShaderPrecision::Double)),
        Err(e) => {
            warn!("64-bit shaders unavailable ({e}), deep zooms will lose precision");
            let pixels =
                PixelsBuilder::new(1, 1, SurfaceTexture::new(size.width, size.height, window))
                    .enable_vsync(vsync)
                    .build()?;
            info!("using 32-bit shaders");
            Ok((pixels, ShaderPrecision::Single))
        }
    }
}
