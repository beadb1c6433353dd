//! Benchmarks for tag rendering.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use metatags::{AttributeStore, AttributeValue, TagRenderer};

/// Build an article-like attribute set with `images` Open Graph images.
fn article_attributes(images: usize) -> AttributeStore {
    let image_list: Vec<AttributeValue> = (0..images)
        .map(|i| {
            let mut image = AttributeStore::new();
            image.insert("url".to_owned(), format!("https://cdn.example.com/{i}.jpg").into());
            image.insert("width".to_owned(), 1200_i64.into());
            image.insert("height".to_owned(), 630_i64.into());
            image.into()
        })
        .collect();

    let mut og = AttributeStore::new();
    og.insert("title".to_owned(), "Quarterly results".into());
    og.insert("image".to_owned(), AttributeValue::Sequence(image_list));

    let mut attributes = AttributeStore::new();
    attributes.insert("title".to_owned(), "Quarterly results".into());
    attributes.insert("description".to_owned(), "Results & outlook".into());
    attributes.insert(
        "keywords".to_owned(),
        AttributeValue::from(["Finance", "<b>Markets</b>", "Earnings"]),
    );
    attributes.insert("og".to_owned(), og.into());
    attributes
}

fn bench_display_simple(c: &mut Criterion) {
    let mut renderer = TagRenderer::new();
    renderer.set(article_attributes(1), &[]);
    let defaults = AttributeStore::new();

    c.bench_function("display_article", |b| {
        b.iter(|| renderer.display(&defaults, true));
    });
}

fn bench_display_varying_images(c: &mut Criterion) {
    let defaults = AttributeStore::new();
    let mut group = c.benchmark_group("display_by_images");

    for images in [1, 10, 100] {
        let mut renderer = TagRenderer::new();
        renderer.set(article_attributes(images), &[]);
        group.bench_with_input(BenchmarkId::new("images", images), &renderer, |b, r| {
            b.iter(|| r.display(&defaults, true));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_display_simple, bench_display_varying_images);
criterion_main!(benches);
