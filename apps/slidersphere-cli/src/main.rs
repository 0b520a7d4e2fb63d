use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use slidersphere_render::{DebugTextRenderer, Renderer};
use slidersphere_scene::{RenderLoop, SPHERE_NAME, SceneBinding, SceneConfig};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slidersphere-cli", about = "Headless slidersphere driver")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML scene description (defaults to the built-in scene)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and a summary of the scene
    Info,
    /// Set the sliders, run frames and print the result
    Render {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        x: f64,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        y: f64,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        z: f64,
        /// Number of frames to run
        #[arg(short, long, default_value = "1")]
        frames: u64,
        /// Print the sphere position as JSON instead of the text frame
        #[arg(long)]
        json: bool,
    },
    /// Validate the scene config and print it with defaults filled in
    Check,
}

/// Outcome of a headless render, printed with `--json`.
#[derive(Debug, Serialize)]
struct FrameReport {
    frames: u64,
    sliders: [f64; 3],
    sphere: Option<[f32; 3]>,
    camera_eye: [f32; 3],
}

fn info(config: &SceneConfig) -> String {
    let scene = config.build_scene();
    let state = config.build_state();
    let mut out = format!("slidersphere-cli v{}\n", env!("CARGO_PKG_VERSION"));
    out.push_str(&format!("render: {}\n", slidersphere_render::crate_info()));
    out.push_str(&format!(
        "scene: {} objects, {} lights\n",
        scene.object_count(),
        scene.lights().len()
    ));
    for slider in state.sliders() {
        out.push_str(&format!(
            "slider {} ({}): [{}, {}] = {}\n",
            slider.label(),
            slider.id(),
            slider.min,
            slider.max,
            slider.value()
        ));
    }
    out
}

fn render(config: &SceneConfig, values: [f64; 3], frames: u64, json: bool) -> anyhow::Result<String> {
    let state = Rc::new(RefCell::new(config.build_state()));
    for (slider, value) in state.borrow_mut().sliders_mut().into_iter().zip(values) {
        if value.is_nan() {
            tracing::warn!(label = slider.label(), "value is not a number, slider reset to midpoint");
        } else if !(slider.min.min(slider.max)..=slider.min.max(slider.max)).contains(&value) {
            tracing::warn!(label = slider.label(), value, "value outside slider range, clamped");
        }
        slider.set_value(value);
    }

    let mut scene = config.build_scene();
    let mut render_loop = RenderLoop::new();
    SceneBinding::default().install(state.clone(), &mut render_loop);

    let renderer = DebugTextRenderer::new();
    let mut text = String::new();
    for _ in 0..frames.max(1) {
        text = render_loop.frame(&mut scene, |scene| renderer.render(scene));
    }
    tracing::debug!(frames = render_loop.frame_count(), "render finished");

    if !json {
        return Ok(text);
    }

    let state = state.borrow();
    let report = FrameReport {
        frames: render_loop.frame_count(),
        sliders: [state.x.value(), state.y.value(), state.z.value()],
        sphere: scene
            .find(SPHERE_NAME)
            .map(|o| o.transform.position.to_array()),
        camera_eye: scene.camera.position().to_array(),
    };
    Ok(serde_json::to_string_pretty(&report)? + "\n")
}

fn check(config: &SceneConfig) -> anyhow::Result<String> {
    let yaml = config.to_yaml()?;
    Ok(format!("config OK\n{yaml}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = SceneConfig::load_or_default(cli.config.as_deref()).with_context(|| {
        match &cli.config {
            Some(path) => format!("invalid scene config {}", path.display()),
            None => "invalid default scene config".to_string(),
        }
    })?;

    let output = match cli.command {
        Commands::Info => info(&config),
        Commands::Render {
            x,
            y,
            z,
            frames,
            json,
        } => render(&config, [x, y, z], frames, json)?,
        Commands::Check => check(&config)?,
    };
    print!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn info_lists_sliders() {
        let out = info(&SceneConfig::default());
        assert!(out.contains("scene: 2 objects, 2 lights"));
        assert!(out.contains("slider x (formControlRange"));
        assert!(out.contains("[-5, 5] = 0"));
    }

    #[test]
    fn render_text_shows_sphere_position() {
        let out = render(&SceneConfig::default(), [1.0, 2.0, -3.0], 1, false).unwrap();
        assert!(out.contains("sphere1 sphere(segments=16, diameter=2) pos=(1.00, 2.00, -3.00)"));
    }

    #[test]
    fn render_json_report() {
        let out = render(&SceneConfig::default(), [2.5, 0.0, 0.0], 3, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["frames"], 3);
        assert_eq!(value["sphere"][0], 2.5);
        assert_eq!(value["sliders"][0], 2.5);
    }

    #[test]
    fn render_clamps_out_of_range_values() {
        let out = render(&SceneConfig::default(), [9.0, -9.0, 0.0], 1, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["sphere"][0], 5.0);
        assert_eq!(value["sphere"][1], -5.0);
    }

    #[test]
    fn render_nan_centres_slider() {
        let cli = Cli::try_parse_from(["slidersphere-cli", "render", "--x", "NaN"]).unwrap();
        let Commands::Render { x, .. } = cli.command else {
            panic!("expected render");
        };
        assert!(x.is_nan());

        let out = render(&SceneConfig::default(), [x, 1.0, 0.0], 1, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["sliders"][0], 0.0);
        assert_eq!(value["sphere"][0], 0.0);
        assert_eq!(value["sphere"][1], 1.0);
    }

    #[test]
    fn render_uses_ranges_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sliders:").unwrap();
        writeln!(file, "  - {{ label: x, min: 0, max: 10, initial: 0 }}").unwrap();
        writeln!(file, "  - {{ label: y }}").unwrap();
        writeln!(file, "  - {{ label: z }}").unwrap();
        let config = SceneConfig::load(file.path()).unwrap();

        let out = render(&config, [10.0, 0.0, 0.0], 1, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["sphere"][0], 10.0);
    }

    #[test]
    fn zero_frames_still_renders_once() {
        let out = render(&SceneConfig::default(), [0.0; 3], 0, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["frames"], 1);
    }

    #[test]
    fn check_prints_resolved_yaml() {
        let out = check(&SceneConfig::default()).unwrap();
        assert!(out.starts_with("config OK"));
        assert!(out.contains("segments: 16"));
    }

    #[test]
    fn cli_parses_negative_values() {
        let cli = Cli::try_parse_from(["slidersphere-cli", "render", "--x", "-2.5", "--json"]).unwrap();
        match cli.command {
            Commands::Render { x, json, .. } => {
                assert_eq!(x, -2.5);
                assert!(json);
            }
            _ => panic!("expected render"),
        }
    }
}
