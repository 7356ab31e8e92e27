//! Performance benchmarks for dirsankey

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirsankey::test_utils::TestTree;
use dirsankey::{AggregatorConfig, Figure, HtmlRenderer, SvgRenderer, TreeAggregator};

/// Build a tree `depth` levels deep with `fanout` subdirectories and files per level.
fn build_tree(tree: &TestTree, prefix: &str, depth: usize, fanout: usize) {
    for i in 0..fanout {
        tree.add_file(&format!("{}file_{}.bin", prefix, i), 64 * (i + 1));
    }
    if depth == 0 {
        return;
    }
    for i in 0..fanout {
        build_tree(tree, &format!("{}dir_{}/", prefix, i), depth - 1, fanout);
    }
}

fn bench_aggregate(c: &mut Criterion) {
    let tree = TestTree::new();
    build_tree(&tree, "", 3, 5);

    let with_files = TreeAggregator::new(AggregatorConfig::default());
    let dirs_only = TreeAggregator::new(AggregatorConfig {
        include_files: false,
        ..Default::default()
    });

    let mut group = c.benchmark_group("aggregate");
    group.bench_function("with_files", |b| {
        b.iter(|| with_files.aggregate(black_box(tree.path())).unwrap())
    });
    group.bench_function("dirs_only", |b| {
        b.iter(|| dirs_only.aggregate(black_box(tree.path())).unwrap())
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let tree = TestTree::new();
    build_tree(&tree, "", 3, 5);
    let graph = TreeAggregator::new(AggregatorConfig::default())
        .aggregate(tree.path())
        .unwrap();
    let figure = Figure::new(&graph, "bench", 3840, 2160);

    let mut group = c.benchmark_group("render");
    group.bench_function("html", |b| {
        b.iter(|| HtmlRenderer::document(black_box(&figure)).unwrap())
    });
    group.bench_function("svg", |b| b.iter(|| SvgRenderer::document(black_box(&figure))));
    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_render);
criterion_main!(benches);
