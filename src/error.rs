use std::path::PathBuf;

/// Lattice access outside the fixed chunk extent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("lattice coordinate ({x}, {y}, {z}) is outside the 16x16x16 chunk")]
    OutOfBounds { x: usize, y: usize, z: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to read texture {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode texture {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Failures while bringing up the GPU. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error(transparent)]
    Gpu(#[from] GpuError),
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_names_the_coordinate() {
        let err = WorldError::OutOfBounds { x: 16, y: 0, z: 3 };
        assert_eq!(err.to_string(), "lattice coordinate (16, 0, 3) is outside the 16x16x16 chunk");
    }

    #[test]
    fn texture_errors_keep_their_source() {
        use std::error::Error as _;
        let err = TextureError::Io {
            path: PathBuf::from("textures/dirt.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("dirt.jpg"));
        assert!(err.source().is_some());
    }
}
