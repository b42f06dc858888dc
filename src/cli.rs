use crate::config::{Config, load_config};
use crate::ir::PitchWord;
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::parser::{pair_words, parse_word};
use crate::render::{render_svg, write_output_svg};
use anyhow::Result;
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pitchdiag",
    version,
    about = "Generate an SVG of a pitch accent diagram"
)]
#[command(group(
    ArgGroup::new("words")
        .required(true)
        .args(["pitch_pattern_list", "pitch_pattern"])
))]
pub struct Args {
    /// Tone patterns, one per word ('H' is high, anything else low)
    #[arg(
        long = "pitch_pattern_list",
        num_args = 1..,
        value_name = "PATTERN",
        requires = "text_string_list",
        conflicts_with_all = ["pitch_pattern", "text_string"]
    )]
    pub pitch_pattern_list: Vec<String>,

    /// Text strings, one per word, each as long as its pattern
    #[arg(
        long = "text_string_list",
        num_args = 1..,
        value_name = "TEXT",
        requires = "pitch_pattern_list"
    )]
    pub text_string_list: Vec<String>,

    /// Tone pattern of a single word
    #[arg(long = "pitch_pattern", value_name = "PATTERN", requires = "text_string")]
    pub pitch_pattern: Option<String>,

    /// Text of a single word
    #[arg(long = "text_string", value_name = "TEXT", requires = "pitch_pattern")]
    pub text_string: Option<String>,

    /// Canvas height [default: 150]
    #[arg(long = "height")]
    pub height: Option<f32>,

    /// Horizontal distance between points [default: 100]
    #[arg(long = "step")]
    pub step: Option<f32>,

    /// Margin outside the outer point circles [default: 10]
    #[arg(long = "padding")]
    pub padding: Option<f32>,

    /// Radius of the punched-out circle around each point [default: 10]
    #[arg(long = "outer_point_radius")]
    pub outer_point_radius: Option<f32>,

    /// Radius of the label area inside each point [default: 8]
    #[arg(long = "inner_point_radius")]
    pub inner_point_radius: Option<f32>,

    /// Output file, or '-' for stdout (SVG only) [default: output.svg / output.png]
    #[arg(short = 'o', long = "output_file")]
    pub output_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "output_format", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, diagram, render)
    #[arg(short = 'c', long = "config_file")]
    pub config: Option<PathBuf>,

    /// Also write the computed layout as JSON
    #[arg(long = "dump_layout", value_name = "PATH")]
    pub dump_layout: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    fn default_output(self) -> PathBuf {
        match self {
            OutputFormat::Svg => PathBuf::from("output.svg"),
            OutputFormat::Png => PathBuf::from("output.png"),
        }
    }
}

impl Args {
    /// The single-word flags become a batch of one.
    pub fn words(&self) -> Result<Vec<PitchWord>> {
        if let (Some(pattern), Some(text)) = (&self.pitch_pattern, &self.text_string) {
            return Ok(vec![parse_word(pattern, text)?]);
        }
        Ok(pair_words(&self.pitch_pattern_list, &self.text_string_list)?)
    }

    /// Command-line values win over the config file, which wins over defaults.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = load_config(self.config.as_deref())?;
        let layout = &mut config.layout;
        if let Some(v) = self.height {
            layout.height = v;
        }
        if let Some(v) = self.step {
            layout.step = v;
        }
        if let Some(v) = self.padding {
            layout.padding = v;
        }
        if let Some(v) = self.outer_point_radius {
            layout.outer_point_radius = v;
        }
        if let Some(v) = self.inner_point_radius {
            layout.inner_point_radius = v;
        }
        Ok(config)
    }
}

pub fn run() -> Result<()> {
    run_with_args(Args::parse())
}

pub fn run_with_args(args: Args) -> Result<()> {
    let config = args.resolve_config()?;
    let words = args.words()?;
    let layout = compute_layout(&words, &config.layout)?;

    if let Some(path) = args.dump_layout.as_deref() {
        write_layout_dump(path, &layout)?;
    }

    let svg = render_svg(&layout, &config.theme);
    let output = args
        .output_file
        .clone()
        .unwrap_or_else(|| args.output_format.default_output());

    match args.output_format {
        OutputFormat::Svg => write_output_svg(&svg, Some(&output)),
        OutputFormat::Png => write_png(&svg, &output, &config),
    }
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &std::path::Path, config: &Config) -> Result<()> {
    if output == std::path::Path::new("-") {
        return Err(anyhow::anyhow!("Output path required for png output"));
    }
    crate::render::write_output_png(svg, output, &config.render)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &std::path::Path, _config: &Config) -> Result<()> {
    Err(anyhow::anyhow!(
        "PNG output requires building with the `png` feature"
    ))
}
