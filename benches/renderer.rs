use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pitch_diagram::config::LayoutConfig;
use pitch_diagram::ir::PitchWord;
use pitch_diagram::layout::compute_layout;
use pitch_diagram::render::render_svg;
use pitch_diagram::theme::Theme;
use std::hint::black_box;

fn phrase(words: usize, chars_per_word: usize) -> Vec<PitchWord> {
    (0..words)
        .map(|w| {
            let pattern: String = (0..chars_per_word)
                .map(|i| if (i + w) % 3 == 0 { 'L' } else { 'H' })
                .collect();
            let text: String = (0..chars_per_word)
                .map(|i| char::from(b'a' + ((i + w) % 26) as u8))
                .collect();
            PitchWord::new(pattern, text)
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("layout");
    for words in [1usize, 8, 64] {
        let input = phrase(words, 5);
        group.bench_with_input(BenchmarkId::from_parameter(words), &input, |b, data| {
            b.iter(|| {
                let layout = compute_layout(black_box(data), &config).expect("layout failed");
                black_box(layout.width);
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let theme = Theme::classic();
    let mut group = c.benchmark_group("render");
    for words in [1usize, 8, 64] {
        let layout = compute_layout(&phrase(words, 5), &config).expect("layout failed");
        group.bench_with_input(BenchmarkId::from_parameter(words), &layout, |b, data| {
            b.iter(|| {
                let svg = render_svg(black_box(data), &theme);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_layout, bench_render
);
criterion_main!(benches);
