use crate::ir::Tone;
use crate::layout::Layout;
use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub edge_offset: f32,
    pub step: f32,
    pub words: Vec<WordDump>,
}

#[derive(Debug, Serialize)]
pub struct WordDump {
    pub index: usize,
    pub pattern: String,
    pub text: String,
    pub tones: Vec<Tone>,
    pub points: Vec<[f32; 2]>,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let words = layout
            .words
            .iter()
            .enumerate()
            .map(|(index, word)| WordDump {
                index,
                pattern: word.pattern.clone(),
                text: word.text.clone(),
                tones: word.tones.clone(),
                points: word.points.iter().map(|(x, y)| [*x, *y]).collect(),
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            edge_offset: layout.config.edge_offset(),
            step: layout.config.step,
            words,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create layout dump {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(&mut writer, &dump)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "wrote layout dump");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::ir::PitchWord;
    use crate::layout::compute_layout;

    #[test]
    fn dump_mirrors_layout() {
        let layout =
            compute_layout(&[PitchWord::new("HL", "ab")], &LayoutConfig::default()).unwrap();
        let value = serde_json::to_value(LayoutDump::from_layout(&layout)).unwrap();
        assert_eq!(value["width"], 140.0);
        assert_eq!(value["edge_offset"], 20.0);
        assert_eq!(value["words"][0]["tones"], serde_json::json!(["High", "Low"]));
        assert_eq!(
            value["words"][0]["points"],
            serde_json::json!([[20.0, 20.0], [120.0, 130.0]])
        );
    }

    #[test]
    fn writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        let layout =
            compute_layout(&[PitchWord::new("H", "a")], &LayoutConfig::default()).unwrap();
        write_layout_dump(&path, &layout).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\n  \"width\": 40.0"));
    }
}
