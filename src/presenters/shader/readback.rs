use std::sync::mpsc;

use log::debug;
use pixels::wgpu;

use crate::controllers::explorer::RenderParams;
use crate::core::data::Viewport;
use crate::core::sequence::CaptureError;
use crate::presenters::shader::pipeline::MandelbrotPipeline;
use crate::presenters::shader::rows::{padded_bytes_per_row, strip_row_padding};
use crate::presenters::shader::uniforms::ShaderPrecision;

const CAPTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

struct CaptureTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    viewport: Viewport,
}

/// Renders the fractal into an offscreen RGBA texture and copies it back to the CPU.
///
/// The offscreen pass uses the same shader as the window, so a captured frame
/// matches what was presented for the same parameters.
pub struct FrameReadback {
    pipeline: MandelbrotPipeline,
    target: Option<CaptureTarget>,
}

impl FrameReadback {
    pub fn new(device: &wgpu::Device, precision: ShaderPrecision) -> Self {
        Self {
            pipeline: MandelbrotPipeline::new(device, CAPTURE_FORMAT, precision),
            target: None,
        }
    }

    /// Returns tightly packed RGBA8 rows, top row first.
    pub fn read_frame(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        params: &RenderParams,
    ) -> Result<Vec<u8>, CaptureError> {
        let viewport = params.viewport;
        if viewport.is_empty() {
            return Err(CaptureError::EmptyViewport {
                width: viewport.width(),
                height: viewport.height(),
            });
        }

        let (width, height) = (viewport.width(), viewport.height());
        let padded_row = padded_bytes_per_row(width, wgpu::COPY_BYTES_PER_ROW_ALIGNMENT);

        let staging = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("capture staging"),
            size: u64::from(padded_row) * u64::from(height),
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        if self.target.as_ref().is_none_or(|t| t.viewport != viewport) {
            self.target = Some(CaptureTarget::new(device, viewport));
        }
        let Some(target) = self.target.as_ref() else {
            return Err(CaptureError::Readback("capture texture unavailable".to_string()));
        };

        self.pipeline.prepare(queue, params);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("capture encoder"),
        });
        self.pipeline.draw(&mut encoder, &target.view);
        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &target.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &staging,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        queue.submit(std::iter::once(encoder.finish()));

        let slice = staging.slice(..);
        let (sender, receiver) = mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = sender.send(result);
        });
        device.poll(wgpu::Maintain::Wait);

        receiver
            .recv()
            .map_err(|e| CaptureError::Readback(e.to_string()))?
            .map_err(|e| CaptureError::Readback(e.to_string()))?;

        let data = slice.get_mapped_range();
        let rgba = strip_row_padding(&data, width, height, padded_row);
        drop(data);
        staging.unmap();

        Ok(rgba)
    }
}

impl CaptureTarget {
    fn new(device: &wgpu::Device, viewport: Viewport) -> Self {
        debug!(
            "allocating {}x{} capture texture",
            viewport.width(),
            viewport.height()
        );

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("capture target"),
            size: wgpu::Extent3d {
                width: viewport.width(),
                height: viewport.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: CAPTURE_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            viewport,
        }
    }
}
