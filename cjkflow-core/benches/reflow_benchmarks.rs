//! Performance benchmarks for the reflow driver
//!
//! Run with: cargo bench --bench reflow_benchmarks

use cjkflow_core::{assemble_pages, ReflowOptions, Reflower};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Hard-wrapped CJK prose with dialogue, headings and dividers mixed in
const SAMPLE_PAGE: &str = "\
第一章 风雪惊变
\u{3000}\u{3000}钱塘江浩浩江水，日日夜夜无穷无休的从
临安牛家村边绕过，东流入海。江畔一排数十株乌柏树，
叶子似火烧般红，正是八月天时。
\u{3000}\u{3000}他抬起头来说道：“这位官人，
请坐下喝碗酒吧。”
------
物品准备：
钢笔，纸张，橡皮。
";

/// Generate roughly `size` bytes of extracted text
fn generate_text(size: usize) -> String {
    let repeat_count = size / SAMPLE_PAGE.len() + 1;
    let mut text = SAMPLE_PAGE.repeat(repeat_count);
    let mut end = size.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let reflower = Reflower::default();

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("reflow", size), &text, |b, text| {
            b.iter(|| reflower.reflow(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark page-marked input against plain input
fn bench_page_headers(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_headers");
    let pages: Vec<String> = (0..50).map(|_| SAMPLE_PAGE.to_string()).collect();

    for add_header in [false, true] {
        let text = assemble_pages(&pages, add_header);
        let reflower = Reflower::new(ReflowOptions::new().with_page_header(add_header));

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("add_header", add_header),
            &text,
            |b, text| {
                b.iter(|| reflower.segments(black_box(text)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_page_headers);
criterion_main!(benches);
