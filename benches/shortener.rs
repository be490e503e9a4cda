//! 校验与短码生成基准测试

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quicklink::services::{RandomCodeGenerator, ShortenRequest, ShortenerService, ShortenerSettings};
use quicklink::storage::{LinkStore, MemoryBackend};
use quicklink::utils::{generate_random_code, is_alphanumeric, is_valid_url};

// ============== 校验函数 ==============

fn bench_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("validators");

    group.bench_function("url_valid", |b| {
        b.iter(|| assert!(is_valid_url("https://example.com/path?query=1")));
    });

    group.bench_function("url_invalid", |b| {
        b.iter(|| assert!(!is_valid_url("not a url")));
    });

    group.bench_function("alphanumeric", |b| {
        b.iter(|| assert!(is_alphanumeric("k3j9x1")));
    });

    group.finish();
}

// ============== 短码生成 ==============

fn bench_generate_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_random_code");

    for length in [6, 12, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &len| {
            b.iter(|| generate_random_code(len));
        });
    }

    group.finish();
}

// ============== 批次校验 ==============

fn bench_validate_batch(c: &mut Criterion) {
    let store = Arc::new(LinkStore::new(Arc::new(MemoryBackend::new())));
    let service = ShortenerService::new(
        store,
        Arc::new(RandomCodeGenerator::default()),
        ShortenerSettings::default(),
    );

    let batch: Vec<ShortenRequest> = (0..5)
        .map(|i| {
            ShortenRequest::new(format!("https://site{}.example/page", i))
                .with_validity("45")
                .with_shortcode(format!("code{}", i))
        })
        .collect();

    c.bench_function("validate_full_batch", |b| {
        b.iter(|| service.validate(&batch).is_ok());
    });
}

criterion_group!(
    benches,
    bench_validators,
    bench_generate_code,
    bench_validate_batch
);
criterion_main!(benches);
