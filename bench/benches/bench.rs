use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url_canon::{
    normalize,
    pct_enc::{
        component::{Path, Query},
        decode_lossless, EStr,
    },
    Parts,
};

criterion_group!(
    benches,
    bench_parse,
    bench_normalize,
    bench_normalize_unchanged,
    bench_normalize_encoded_scheme,
    bench_decode_path,
    bench_decode_query,
    bench_decode_lossless,
);
criterion_main!(benches);

const PARSE_CASE: &str = "https://user@example.com:8443/search?q=%E6%B5%8B%E8%AF%95#fragment";
const NORMALIZE_CASE: &str =
    "http://ex%61mple.com/%7Euser/a%2Fb%20c?q=%E6%B5%8B&amp;r=%2526&s=%252541#%66rag";
const UNCHANGED_CASE: &str = "https://example.com/a/b/c?x=1&y=2#top";
const ENCODED_SCHEME_CASE: &str = "https%3A%2F%2Fexample.com%2Fa%252Fb%3Fq%3D1";
const DECODE_CASE: &str = "/%E6%B5%8B%E8%AF%95/a%2Fb%3D%2526%252541%20c";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| Parts::parse(black_box(PARSE_CASE))));
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(NORMALIZE_CASE)))
    });
}

fn bench_normalize_unchanged(c: &mut Criterion) {
    c.bench_function("normalize_unchanged", |b| {
        b.iter(|| normalize(black_box(UNCHANGED_CASE)))
    });
}

fn bench_normalize_encoded_scheme(c: &mut Criterion) {
    c.bench_function("normalize_encoded_scheme", |b| {
        b.iter(|| normalize(black_box(ENCODED_SCHEME_CASE)))
    });
}

fn bench_decode_path(c: &mut Criterion) {
    c.bench_function("decode_path", |b| {
        b.iter(|| EStr::<Path>::new(black_box(DECODE_CASE)).decode_preserving())
    });
}

fn bench_decode_query(c: &mut Criterion) {
    c.bench_function("decode_query", |b| {
        b.iter(|| EStr::<Query>::new(black_box(DECODE_CASE)).decode_preserving())
    });
}

fn bench_decode_lossless(c: &mut Criterion) {
    c.bench_function("decode_lossless", |b| {
        b.iter(|| decode_lossless(black_box(DECODE_CASE)))
    });
}
