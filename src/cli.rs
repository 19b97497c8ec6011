// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::demos::DemoKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "triangle-demos")]
#[command(about = "Interactive triangle rendering demos", long_about = None)]
pub struct Cli {
    /// Which demo to run
    #[arg(value_enum, default_value = "simple")]
    pub demo: DemoKind,

    /// Texture file for the textured demos (built-in checkerboard when omitted)
    #[arg(long)]
    pub texture: Option<PathBuf>,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    pub fov: f32,
}
