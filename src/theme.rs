use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub line_color: String,
    pub text_color: Option<String>,
    pub font_family: Option<String>,
    pub background: Option<String>,
}

impl Theme {
    /// Black ink on a transparent canvas with the viewer's default font.
    pub fn classic() -> Self {
        Self {
            line_color: "#000000".to_string(),
            text_color: None,
            font_family: None,
            background: None,
        }
    }

    pub fn modern() -> Self {
        Self {
            line_color: "#1C2430".to_string(),
            text_color: Some("#1C2430".to_string()),
            font_family: Some("Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string()),
            background: Some("#FFFFFF".to_string()),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" | "default" => Some(Self::classic()),
            "modern" => Some(Self::modern()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
