//! Benchmarks for the page standardization pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use facelift::dom::{parse_html, serialize_html};
use facelift::standardize;
use facelift::standardize::standardize_dom;

/// A mockup page with stale chrome and a long scrolling list.
fn sample_page() -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Listing</title>
  <link rel="stylesheet" href="https://fonts.googleapis.com/icon?family=Material+Icons">
</head>
<body>
  <header class="flex"><a><span class="material-icons">chevron_left</span></a><h1>Listing</h1></header>
  <main>
"#,
    );
    for i in 0..200 {
        html.push_str(&format!(
            "    <article class=\"card\"><h2>Item {i}</h2><p>Two bedrooms, close to the park.</p>\
             <span class=\"material-icons\">mail</span></article>\n"
        ));
    }
    html.push_str(
        r#"  </main>
  <nav class="fixed bottom-0"><a href="home.html">Home</a></nav>
</body>
</html>
"#,
    );
    html
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_standardize_detail(c: &mut Criterion) {
    let html = sample_page();
    c.bench_function("standardize_detail", |b| {
        b.iter(|| standardize(&html, "listing_detail.html").unwrap());
    });
}

fn bench_standardize_top_level(c: &mut Criterion) {
    let html = sample_page();
    c.bench_function("standardize_top_level", |b| {
        b.iter(|| standardize(&html, "home.html").unwrap());
    });
}

fn bench_rerun(c: &mut Criterion) {
    let once = standardize(&sample_page(), "listing_detail.html").unwrap().html;
    c.bench_function("standardize_rerun", |b| {
        b.iter(|| standardize(&once, "listing_detail.html").unwrap());
    });
}

// ============================================================================
// Stage Benchmarks
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let html = sample_page();
    c.bench_function("parse_html", |b| {
        b.iter(|| parse_html(&html));
    });
}

fn bench_passes(c: &mut Criterion) {
    let dom = parse_html(&sample_page());
    c.bench_function("passes", |b| {
        b.iter_batched(
            || dom.clone(),
            |mut dom| standardize_dom(&mut dom, "listing_detail.html").unwrap(),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_serialize(c: &mut Criterion) {
    let mut dom = parse_html(&sample_page());
    standardize_dom(&mut dom, "listing_detail.html").unwrap();
    c.bench_function("serialize_html", |b| {
        b.iter(|| serialize_html(&dom).unwrap());
    });
}

criterion_group!(
    benches,
    bench_standardize_detail,
    bench_standardize_top_level,
    bench_rerun,
    bench_parse,
    bench_passes,
    bench_serialize,
);

criterion_main!(benches);
