use crate::error::DiagramError;
use crate::theme::Theme;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry and stroke settings for one diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub height: f32,
    pub step: f32,
    pub padding: f32,
    pub outer_point_radius: f32,
    pub inner_point_radius: f32,
    pub line_width: f32,
    pub ring_width: f32,
    pub ring_gap: f32,
    pub label_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            height: 150.0,
            step: 100.0,
            padding: 10.0,
            outer_point_radius: 10.0,
            inner_point_radius: 8.0,
            line_width: 10.0,
            ring_width: 1.0,
            ring_gap: 2.0,
            label_scale: 1.3,
        }
    }
}

impl LayoutConfig {
    /// Margin reserved on every side for the punched-out circles.
    pub fn edge_offset(&self) -> f32 {
        self.outer_point_radius + self.padding
    }

    pub fn ring_radius(&self) -> f32 {
        self.inner_point_radius + self.ring_gap
    }

    pub fn label_font_size(&self) -> f32 {
        self.inner_point_radius * self.label_scale
    }

    pub fn validate(&self) -> Result<(), DiagramError> {
        let fields = [
            ("height", self.height),
            ("step", self.step),
            ("padding", self.padding),
            ("outer_point_radius", self.outer_point_radius),
            ("inner_point_radius", self.inner_point_radius),
            ("line_width", self.line_width),
            ("ring_width", self.ring_width),
            ("ring_gap", self.ring_gap),
            ("label_scale", self.label_scale),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DiagramError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Raster scale factor for PNG output.
    pub scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    line_color: Option<String>,
    text_color: Option<String>,
    font_family: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct DiagramConfigFile {
    height: Option<f32>,
    step: Option<f32>,
    padding: Option<f32>,
    outer_point_radius: Option<f32>,
    inner_point_radius: Option<f32>,
    line_width: Option<f32>,
    ring_width: Option<f32>,
    ring_gap: Option<f32>,
    label_scale: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    scale: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    diagram: Option<DiagramConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config file {}", path.display()))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::from_name(theme_name)
            .ok_or_else(|| anyhow::anyhow!("unknown theme {theme_name:?}"))?;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.line_color {
            config.theme.line_color = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = Some(v);
        }
        if let Some(v) = vars.font_family {
            config.theme.font_family = Some(v);
        }
        if let Some(v) = vars.background {
            config.theme.background = Some(v);
        }
    }

    if let Some(diagram) = parsed.diagram {
        let layout = &mut config.layout;
        if let Some(v) = diagram.height {
            layout.height = v;
        }
        if let Some(v) = diagram.step {
            layout.step = v;
        }
        if let Some(v) = diagram.padding {
            layout.padding = v;
        }
        if let Some(v) = diagram.outer_point_radius {
            layout.outer_point_radius = v;
        }
        if let Some(v) = diagram.inner_point_radius {
            layout.inner_point_radius = v;
        }
        if let Some(v) = diagram.line_width {
            layout.line_width = v;
        }
        if let Some(v) = diagram.ring_width {
            layout.ring_width = v;
        }
        if let Some(v) = diagram.ring_gap {
            layout.ring_gap = v;
        }
        if let Some(v) = diagram.label_scale {
            layout.label_scale = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.scale {
            config.render.scale = v;
        }
    }

    Ok(config)
}
