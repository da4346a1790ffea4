use std::path::Path;

use anyhow::{Context, Result};
use wgpu::util::{DeviceExt, TextureDataOrder};

use ripple_core::constants::IMAGE_ASPECT;

pub struct LoadedTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    /// Intrinsic width / height, used for the cover computation.
    pub aspect: f32,
}

/// Decode an image file into a 2D texture. On failure the pipeline keeps
/// running: log a warning and substitute a 1×1 placeholder, so an unset or
/// broken asset renders as a flat surface instead of crashing.
pub fn load_or_placeholder(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    path: &Path,
    label: &str,
    srgb: bool,
) -> LoadedTexture {
    match load_image(device, queue, path, label, srgb) {
        Ok(loaded) => loaded,
        Err(error) => {
            log::warn!(
                "failed to load {label} from {}: {error:#}; using placeholder",
                path.display()
            );
            placeholder(device, queue, label, srgb)
        }
    }
}

fn load_image(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    path: &Path,
    label: &str,
    srgb: bool,
) -> Result<LoadedTexture> {
    let decoded = image::open(path).with_context(|| format!("decoding {}", path.display()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(upload_rgba(
        device,
        queue,
        label,
        width,
        height,
        srgb,
        &rgba,
    ))
}

fn placeholder(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    srgb: bool,
) -> LoadedTexture {
    let mut loaded = upload_rgba(device, queue, label, 1, 1, srgb, &[128, 128, 128, 255]);
    loaded.aspect = IMAGE_ASPECT;
    loaded
}

fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    width: u32,
    height: u32,
    srgb: bool,
    data: &[u8],
) -> LoadedTexture {
    let format = if srgb {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    };
    let texture = device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        },
        TextureDataOrder::LayerMajor,
        data,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    LoadedTexture {
        texture,
        view,
        aspect: width as f32 / height as f32,
    }
}
