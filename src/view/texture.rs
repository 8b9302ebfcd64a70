use std::path::Path;

use image::DynamicImage;

use crate::error::TextureError;

/// How the source file's channels are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// Colour only, alpha forced to opaque
    Rgb,
    Rgba,
}

/// Tightly packed RGBA8 pixels, bottom row first
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

/// Reads and decodes an image file, flipping it so row 0 is the bottom of
/// the picture, as texture coordinates expect.
pub fn decode_image(path: &Path, layout: ChannelLayout) -> Result<DecodedImage, TextureError> {
    let bytes = std::fs::read(path).map_err(|source| TextureError::Io { path: path.to_path_buf(), source })?;
    let img = image::load_from_memory(&bytes)
        .map_err(|source| TextureError::Decode { path: path.to_path_buf(), source })?
        .flipv();

    let rgba = match layout {
        ChannelLayout::Rgb => DynamicImage::ImageRgb8(img.to_rgb8()).to_rgba8(),
        ChannelLayout::Rgba => img.to_rgba8(),
    };
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage { width, height, rgba: rgba.into_raw() })
}

/// A sampled 2D texture on the GPU
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    pub fn from_image(device: &wgpu::Device, queue: &wgpu::Queue, image: &DecodedImage, label: &str) -> Self {
        let size = wgpu::Extent3d { width: image.width, height: image.height, depth_or_array_layers: 1 };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self { texture, view, sampler }
    }

    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
        layout: ChannelLayout,
    ) -> Result<Self, TextureError> {
        let image = decode_image(path, layout)?;
        let label = path.to_string_lossy();
        let texture = Self::from_image(device, queue, &image, &label);
        tracing::info!(path = %path.display(), width = image.width, height = image.height, "loaded texture");
        Ok(texture)
    }

    /// 1x1 opaque white, used when a texture file cannot be loaded
    pub fn placeholder(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let white = DecodedImage { width: 1, height: 1, rgba: vec![255; 4] };
        Self::from_image(device, queue, &white, "placeholder_texture")
    }

    /// Loads `path`, logging the failure and falling back to the placeholder.
    pub fn load_or_placeholder(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
        layout: ChannelLayout,
    ) -> Self {
        match Self::load(device, queue, path, layout) {
            Ok(texture) => texture,
            Err(e) => {
                tracing::error!("failed to load texture: {e}");
                Self::placeholder(device, queue)
            }
        }
    }
}
