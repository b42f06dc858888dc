use crate::layout::{Layout, WordLayout};
use crate::theme::Theme;
#[cfg(feature = "png")]
use crate::config::RenderConfig;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

/// Builds the SVG document for a layout.
///
/// Every word is drawn through its own punch-out mask (canvas minus a circle
/// around each of its points): first the connecting polyline, then a thin
/// ring per point. Character labels are appended after all drawing, in
/// left-to-right order, so they sit on top of everything.
pub fn render_svg(layout: &Layout, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\">",
    ));

    if let Some(background) = theme.background.as_deref() {
        svg.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            escape_xml(background)
        ));
    }

    svg.push_str("<defs>");
    for (idx, word) in layout.words.iter().enumerate() {
        if word.points.is_empty() {
            continue;
        }
        svg.push_str(&punch_out_mask(
            idx,
            &word.points,
            width,
            height,
            layout.config.outer_point_radius,
        ));
    }
    svg.push_str("</defs>");

    for (idx, word) in layout.words.iter().enumerate() {
        if word.points.is_empty() {
            continue;
        }
        tracing::debug!(word = idx, text = %word.text, points = word.points.len(), "drawing word");
        svg.push_str(&word_svg(idx, word, layout, theme));
    }

    svg.push_str(&labels_svg(layout, theme));
    svg.push_str("</svg>");
    svg
}

fn mask_id(idx: usize) -> String {
    format!("pitch-mask-{idx}")
}

fn word_svg(idx: usize, word: &WordLayout, layout: &Layout, theme: &Theme) -> String {
    let config = &layout.config;
    let stroke = escape_xml(&theme.line_color);
    let mut out = String::new();

    out.push_str(&format!("<g mask=\"url(#{})\">", mask_id(idx)));
    out.push_str(&format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{:.2}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
        points_to_path(&word.points),
        config.line_width
    ));
    let ring_radius = config.ring_radius();
    for (x, y) in &word.points {
        out.push_str(&format!(
            "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{ring_radius:.2}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{:.2}\"/>",
            config.ring_width
        ));
    }
    out.push_str("</g>");
    out
}

/// White canvas with a black disc per point. Luminance masking hides
/// everything under any disc, overlapping discs included.
fn punch_out_mask(idx: usize, points: &[(f32, f32)], width: f32, height: f32, radius: f32) -> String {
    let mut out = format!(
        "<mask id=\"{}\" maskUnits=\"userSpaceOnUse\" x=\"0\" y=\"0\" width=\"{width:.2}\" height=\"{height:.2}\"><rect x=\"0\" y=\"0\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"white\"/>",
        mask_id(idx)
    );
    for (x, y) in points {
        out.push_str(&format!(
            "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{radius:.2}\" fill=\"black\"/>"
        ));
    }
    out.push_str("</mask>");
    out
}

fn points_to_path(points: &[(f32, f32)]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut d = String::new();
    d.push_str(&format!("M {:.2} {:.2}", points[0].0, points[0].1));
    for point in points.iter().skip(1) {
        d.push_str(&format!(" L {:.2} {:.2}", point.0, point.1));
    }
    d
}

fn labels_svg(layout: &Layout, theme: &Theme) -> String {
    let font_size = layout.config.label_font_size();
    let mut extra = String::new();
    if let Some(fill) = theme.text_color.as_deref() {
        extra.push_str(&format!(" fill=\"{}\"", escape_xml(fill)));
    }
    if let Some(family) = theme.font_family.as_deref() {
        extra.push_str(&format!(" font-family=\"{}\"", escape_xml(family)));
    }

    let mut out = String::new();
    for word in &layout.words {
        for ((x, y), ch) in word.labels() {
            let mut buf = [0u8; 4];
            out.push_str(&format!(
                "<text x=\"{x:.2}\" y=\"{y:.2}\" style=\"font-size: {font_size:.2}px; dominant-baseline: middle; text-anchor: middle\"{extra}>{}</text>",
                escape_xml(label_char(ch).encode_utf8(&mut buf))
            ));
        }
    }
    out
}

/// Characters XML 1.0 cannot carry are drawn as U+FFFD.
fn label_char(ch: char) -> char {
    match ch {
        '\t' | '\n' | '\r' => ch,
        '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => char::REPLACEMENT_CHARACTER,
        _ => ch,
    }
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) if path != Path::new("-") => {
            std::fs::write(path, svg)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = svg.len(), "wrote svg");
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let scale = render_cfg.scale;
    let size = tree.size().to_int_size().scale_by(scale).ok_or_else(|| {
        anyhow::anyhow!("invalid raster size for scale {scale}")
    })?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap
        .save_png(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(path = %output.display(), width = size.width(), height = size.height(), "wrote png");
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
