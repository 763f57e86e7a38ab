use hog_descriptor::image::io::{load_grayscale_image, save_grayscale_f32, write_json_file};
use hog_descriptor::image::ImageF32;
use hog_descriptor::synth::sine_image;
use hog_descriptor::{HogExtractor, HogParams};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct HogToolConfig {
    /// Grayscale image to load. When absent, `synthetic` must be set.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Deterministic synthetic image to generate instead of loading one.
    #[serde(default)]
    pub synthetic: Option<SyntheticConfig>,
    #[serde(default)]
    pub hog: HogParams,
    pub output: HogOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SyntheticConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Deserialize)]
pub struct HogOutputConfig {
    #[serde(rename = "descriptor_json")]
    pub descriptor_json: PathBuf,
    #[serde(default)]
    pub visualization_png: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<HogToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = match (&config.input, &config.synthetic) {
        (Some(path), _) => {
            let gray = load_grayscale_image(path)?;
            ImageF32::from_u8(&gray.as_view())
        }
        (None, Some(synth)) => {
            sine_image(synth.width, synth.height).map_err(|e| e.to_string())?
        }
        (None, None) => return Err("config needs either `input` or `synthetic`".to_string()),
    };

    let extractor = HogExtractor::new(config.hog).map_err(|e| e.to_string())?;
    let features = if config.output.visualization_png.is_some() {
        extractor.extract_with_visualization(&image)
    } else {
        extractor.extract(&image)
    }
    .map_err(|e| e.to_string())?;

    write_json_file(&config.output.descriptor_json, &features)?;
    if let (Some(path), Some(vis)) = (&config.output.visualization_png, &features.visualization) {
        save_grayscale_f32(vis, path)?;
    }

    println!(
        "descriptor len={} latency_ms={:.3}",
        features.descriptor.len(),
        features.latency_ms
    );
    Ok(())
}

fn usage() -> String {
    "Usage: hog_demo <config.json>".to_string()
}
