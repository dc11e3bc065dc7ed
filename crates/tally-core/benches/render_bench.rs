use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_core::{aggregate_all, render_chart, ChartKind, Domain, Entry, RenderOptions};

fn build_entries(n: usize) -> Vec<Entry> {
    let labels = ["food", "rent", "transport", "bills", "fun", "health"];
    (0..n)
        .map(|i| {
            let date = format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1);
            Entry::new("item", i as f64, labels[i % labels.len()], Some(date))
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for &n in &[1_000usize, 100_000usize] {
        let entries = build_entries(n);
        group.bench_function(format!("all_{n}"), |b| {
            b.iter(|| -> Result<()> {
                black_box(aggregate_all(&entries)?);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let entries = build_entries(10_000);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    for kind in ChartKind::ALL {
        group.bench_function(kind.name(), |b| {
            b.iter(|| -> Result<()> {
                let bytes = render_chart(kind, &entries, &Domain::FINANCE, &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_render);
criterion_main!(benches);
