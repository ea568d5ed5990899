//! roomcrop CLI - floor-plan room extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;

use roomcrop::{extract_rooms_with_options, ExtractOptions, Extraction, Layout};

#[derive(Parser)]
#[command(name = "roomcrop")]
#[command(version)]
#[command(about = "Extract labeled room regions from a floor-plan PDF", long_about = None)]
struct Cli {
    /// Input floor-plan PDF
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output PDF (defaults to <input stem>_rooms.pdf)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Render magnification for page 0
    #[arg(long, default_value = "6.0")]
    zoom: f32,

    /// Crop padding around each label, in raster pixels
    #[arg(long, default_value = "200")]
    padding: u32,

    /// Output image scale, in mm per raster pixel
    #[arg(long, default_value = "0.15")]
    scale: f32,

    /// Image placement on the output pages
    #[arg(long, value_enum, default_value = "centered")]
    layout: LayoutMode,

    /// Tesseract language code
    #[arg(long, default_value = "eng", env = "ROOMCROP_LANG")]
    lang: String,

    /// Print the extracted regions as JSON to stdout
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LayoutMode {
    /// Horizontally centered below the heading
    Centered,
    /// Fixed 10 mm left offset
    Fixed,
}

impl From<LayoutMode> for Layout {
    fn from(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Centered => Layout::Centered,
            LayoutMode::Fixed => Layout::FixedOffset,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(&cli.input)?;

    let options = ExtractOptions::new()
        .with_zoom(cli.zoom)
        .with_padding(cli.padding)
        .with_image_scale(cli.scale)
        .with_layout(cli.layout.into())
        .with_language(cli.lang.clone());

    match extract_rooms_with_options(&data, options)? {
        Extraction::Document(doc) => {
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| default_output(&cli.input));
            fs::write(&output, &doc.bytes)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&doc.rooms)?);
            }

            println!(
                "{} {} rooms -> {}",
                "Extracted".green().bold(),
                doc.page_count(),
                output.display()
            );
        }
        Extraction::NoRooms => {
            println!("{}", "No room labels found in the plan".yellow());
        }
    }

    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}_rooms.pdf", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_name() {
        let output = default_output(Path::new("plans/tower.pdf"));
        assert_eq!(output, PathBuf::from("plans/tower_rooms.pdf"));
    }

    #[test]
    fn test_layout_mode_conversion() {
        assert_eq!(Layout::from(LayoutMode::Centered), Layout::Centered);
        assert_eq!(Layout::from(LayoutMode::Fixed), Layout::FixedOffset);
    }
}
