use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;

use crate::controller::KeyBindings;
use crate::model::HeightMap;

pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 3.0);

#[derive(Parser, Debug)]
#[command(name = "duducraft", about = "Free-fly viewer for a single 16x16x16 voxel chunk")]
pub struct Cli {
    /// Window width in physical pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Window height in physical pixels
    #[arg(long, default_value_t = 1000)]
    pub height: u32,

    #[arg(long, default_value = "duducraft")]
    pub title: String,

    /// Fill the whole chunk instead of building the pyramid terrain
    #[arg(long)]
    pub flat: bool,

    /// Base texture, sampled as `dirt`
    #[arg(long, default_value = "textures/dirt.jpg")]
    pub dirt_texture: PathBuf,

    /// Texture blended over the base, sampled as `awesome`
    #[arg(long, default_value = "textures/awesomeface.png")]
    pub overlay_texture: PathBuf,

    /// WGSL file to use instead of the built-in cube shader
    #[arg(long)]
    pub shader: Option<PathBuf>,

    /// Hide the debug overlay
    #[arg(long)]
    pub no_overlay: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved startup settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub height_map: Option<HeightMap>,
    pub dirt_texture: PathBuf,
    pub overlay_texture: PathBuf,
    pub shader: Option<PathBuf>,
    pub show_overlay: bool,
    pub log_level: &'static str,
    pub camera_start: Vec3,
    pub key_bindings: KeyBindings,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            width: cli.width.max(1),
            height: cli.height.max(1),
            title: cli.title,
            height_map: (!cli.flat).then(HeightMap::pyramid),
            dirt_texture: cli.dirt_texture,
            overlay_texture: cli.overlay_texture,
            shader: cli.shader,
            show_overlay: !cli.no_overlay,
            log_level: if cli.verbose { "debug" } else { "info" },
            camera_start: CAMERA_START,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Cli::parse_from(["duducraft"]).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!((config.width, config.height), (1000, 1000));
        assert_eq!(config.title, "duducraft");
        assert_eq!(config.height_map, Some(HeightMap::pyramid()));
        assert_eq!(config.dirt_texture, PathBuf::from("textures/dirt.jpg"));
        assert_eq!(config.overlay_texture, PathBuf::from("textures/awesomeface.png"));
        assert_eq!(config.shader, None);
        assert!(config.show_overlay);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.camera_start, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "duducraft",
            "--flat",
            "--width",
            "640",
            "--height",
            "0",
            "--shader",
            "my.wgsl",
            "--no-overlay",
            "-v",
        ]);
        let config = AppConfig::from(cli);
        assert_eq!(config.height_map, None);
        assert_eq!((config.width, config.height), (640, 1));
        assert_eq!(config.shader, Some(PathBuf::from("my.wgsl")));
        assert!(!config.show_overlay);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
