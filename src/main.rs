//! Face mouse application: hands-free mouse control from facial gestures.

use anyhow::Result;
use clap::Parser;
use face_mouse::app::{SessionOptions, TrackingSession};
use face_mouse::config::Config;
use face_mouse::input_control::X11InputController;
use face_mouse::mesh_detection::MeshDetector;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value = "0")]
    cam: i32,

    /// Path to the face-mesh ONNX model
    #[arg(short, long, default_value = "assets/face_mesh.onnx")]
    model: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Start with scroll mode enabled
    #[arg(long)]
    scroll: bool,

    /// Disable the camera preview window
    #[arg(long)]
    no_gui: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Face Mouse");

    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    config.validate()?;

    let detector = MeshDetector::new(&args.model)?;
    let sink = X11InputController::new()?;

    let options = SessionOptions {
        camera_index: args.cam,
        show_preview: !args.no_gui,
        scroll_mode: args.scroll,
    };

    let mut session = TrackingSession::new(
        &config.tracking,
        options,
        Box::new(detector),
        Box::new(sink),
    )?;
    session.run()?;

    Ok(())
}
