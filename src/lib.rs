#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, RenderConfig, load_config};
pub use error::DiagramError;
pub use ir::{PitchWord, Tone};
pub use layout::{Layout, WordLayout, compute_layout};
pub use layout_dump::write_layout_dump;
pub use parser::{pair_words, parse_word};
pub use render::{render_svg, write_output_svg};
#[cfg(feature = "png")]
pub use render::write_output_png;
pub use theme::Theme;

/// Pairs, lays out and renders in one call.
pub fn render<P, T>(patterns: &[P], texts: &[T], config: &Config) -> Result<String, DiagramError>
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    let words = pair_words(patterns, texts)?;
    let layout = compute_layout(&words, &config.layout)?;
    Ok(render_svg(&layout, &config.theme))
}
