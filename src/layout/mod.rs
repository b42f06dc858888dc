mod types;

pub use types::{Layout, WordLayout};

use crate::config::LayoutConfig;
use crate::error::DiagramError;
use crate::ir::{PitchWord, Tone};
use crate::parser::check_word;

/// Lays words out left to right on a shared baseline grid.
///
/// Point `n` (counted across every word) sits at `edge_offset + n * step`.
/// High tones go on the top row at `edge_offset`, everything else on the
/// bottom row at `height - edge_offset`. The canvas keeps one `edge_offset`
/// margin on each side of the first and last points.
pub fn compute_layout(words: &[PitchWord], config: &LayoutConfig) -> Result<Layout, DiagramError> {
    config.validate()?;
    for (index, word) in words.iter().enumerate() {
        check_word(index, word)?;
    }

    let edge_offset = config.edge_offset();
    let high_y = edge_offset;
    let low_y = config.height - edge_offset;

    let mut total_points = 0usize;
    let mut laid_out = Vec::with_capacity(words.len());
    for word in words {
        let tones: Vec<Tone> = word.tones().collect();
        let points = tones
            .iter()
            .enumerate()
            .map(|(i, tone)| {
                let x = edge_offset + (total_points + i) as f32 * config.step;
                let y = match tone {
                    Tone::High => high_y,
                    Tone::Low => low_y,
                };
                (x, y)
            })
            .collect::<Vec<_>>();
        total_points += points.len();
        laid_out.push(WordLayout {
            pattern: word.pattern.clone(),
            text: word.text.clone(),
            tones,
            points,
        });
    }

    let width = total_points.saturating_sub(1) as f32 * config.step
        + 2.0 * config.outer_point_radius
        + 2.0 * config.padding;

    tracing::debug!(
        words = laid_out.len(),
        points = total_points,
        width,
        height = config.height,
        "computed pitch layout"
    );

    Ok(Layout {
        words: laid_out,
        width,
        height: config.height,
        config: config.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::pair_words;

    fn single(pattern: &str, text: &str) -> Layout {
        compute_layout(&[PitchWord::new(pattern, text)], &LayoutConfig::default()).unwrap()
    }

    #[test]
    fn single_word_example() {
        let layout = single("HLH", "abc");
        assert_eq!(layout.words.len(), 1);
        assert_eq!(
            layout.words[0].points,
            vec![(20.0, 20.0), (120.0, 130.0), (220.0, 20.0)]
        );
        assert_eq!(layout.width, 240.0);
        assert_eq!(layout.height, 150.0);
    }

    #[test]
    fn only_uppercase_h_is_high() {
        let layout = single("HhLxH", "abcde");
        let ys: Vec<f32> = layout.words[0].points.iter().map(|p| p.1).collect();
        assert_eq!(ys, vec![20.0, 130.0, 130.0, 130.0, 20.0]);
        assert_eq!(
            layout.words[0].tones,
            vec![Tone::High, Tone::Low, Tone::Low, Tone::Low, Tone::High]
        );
    }

    #[test]
    fn words_continue_across_batch() {
        let words = pair_words(&["HL", "LHH"], &["ab", "cde"]).unwrap();
        let layout = compute_layout(&words, &LayoutConfig::default()).unwrap();
        let xs: Vec<f32> = layout.points().map(|p| p.0).collect();
        assert_eq!(xs, vec![20.0, 120.0, 220.0, 320.0, 420.0]);
        assert_eq!(layout.words[1].points[0], (220.0, 130.0));
        assert_eq!(layout.point_count(), 5);
        assert_eq!(layout.width, 440.0);
    }

    #[test]
    fn every_point_sits_on_one_of_two_rows() {
        let config = LayoutConfig {
            height: 200.0,
            step: 37.5,
            padding: 4.0,
            outer_point_radius: 6.0,
            ..Default::default()
        };
        let words = pair_words(&["HLLHLH", "LH"], &["uvwxyz", "qr"]).unwrap();
        let layout = compute_layout(&words, &config).unwrap();
        for word in &layout.words {
            assert_eq!(word.points.len(), word.pattern.chars().count());
            for (point, tone) in word.points.iter().zip(word.pattern.chars()) {
                if tone == 'H' {
                    assert_eq!(point.1, 10.0);
                } else {
                    assert_eq!(point.1, 190.0);
                }
            }
        }
        let xs: Vec<f32> = layout.points().map(|p| p.0).collect();
        for pair in xs.windows(2) {
            assert_eq!(pair[1] - pair[0], 37.5);
        }
    }

    #[test]
    fn empty_words_take_no_space() {
        let words = pair_words(&["H", "", "L"], &["a", "", "b"]).unwrap();
        let layout = compute_layout(&words, &LayoutConfig::default()).unwrap();
        assert!(layout.words[1].points.is_empty());
        assert_eq!(layout.words[2].points, vec![(120.0, 130.0)]);
        assert_eq!(layout.width, 140.0);
    }

    #[test]
    fn no_points_gives_margin_only_width() {
        let layout = compute_layout(&[], &LayoutConfig::default()).unwrap();
        assert_eq!(layout.width, 40.0);
        assert_eq!(layout.point_count(), 0);
    }

    #[test]
    fn rejects_hand_built_mismatched_word() {
        let err = compute_layout(&[PitchWord::new("HL", "A")], &LayoutConfig::default())
            .unwrap_err();
        assert!(matches!(err, DiagramError::LengthMismatch { .. }));
    }

    #[test]
    fn rejects_negative_radius() {
        let config = LayoutConfig {
            inner_point_radius: -3.0,
            ..Default::default()
        };
        let err = compute_layout(&[PitchWord::new("H", "a")], &config).unwrap_err();
        assert!(matches!(
            err,
            DiagramError::InvalidParameter {
                name: "inner_point_radius",
                ..
            }
        ));
    }

    #[test]
    fn layout_is_deterministic() {
        let a = single("LHHL", "ともだち");
        let b = single("LHHL", "ともだち");
        assert_eq!(a.point_count(), 4);
        assert_eq!(a, b);
    }
}
