use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fieldguard::*;

fn bench_checksum_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum_validation");

    let edrpou_codes = vec!["14360570", "32855961", "30000005", "00000035"];
    let invalid_edrpou_codes = vec!["14360571", "0000605", "1436057a"];

    group.bench_function("edrpou_valid", |b| {
        b.iter(|| {
            for code in &edrpou_codes {
                black_box(validate_edrpou(black_box(code)));
            }
        })
    });

    group.bench_function("edrpou_invalid", |b| {
        b.iter(|| {
            for code in &invalid_edrpou_codes {
                black_box(validate_edrpou(black_box(code)));
            }
        })
    });

    group.bench_function("tin", |b| {
        b.iter(|| {
            black_box(validate_tin(black_box("1234567899")));
            black_box(validate_tin(black_box("1234567890")));
        })
    });

    group.finish();
}

fn bench_pattern_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_validators");

    group.bench_function("phone_number", |b| {
        b.iter(|| validators::phone_number(black_box("+38 050 123 45 67")))
    });

    group.bench_function("name_cyrillic", |b| {
        b.iter(|| validators::name(black_box("Олена Ковальчук")))
    });

    group.bench_function("postal_code", |b| {
        b.iter(|| validators::postal_code(black_box("K1A 0B1")))
    });

    group.bench_function("service_name", |b| {
        b.iter(|| validators::service_name(black_box("billing-api")))
    });

    group.bench_function("company_name_long", |b| {
        let input = "x".repeat(255);
        b.iter(|| validators::company_name(black_box(&input)))
    });

    group.finish();
}

fn bench_date_and_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("date_and_url");

    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let urls: Vec<String> = (0..16).map(|i| format!("https://host{i}.example.com/path")).collect();

    group.bench_function("birthday", |b| {
        b.iter(|| validators::birthday_at(black_box("1990-01-01"), now))
    });

    group.bench_function("url", |b| {
        b.iter(|| validators::url(black_box("https://example.com/path?query=value")))
    });

    group.bench_function("array_urls_16", |b| {
        b.iter(|| validators::array_urls(black_box(&urls)))
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let registry = ValidatorRegistry::new();

    group.bench_function("lookup_and_validate", |b| {
        b.iter(|| registry.validate(black_box("ukraineTin"), black_box("1234567899").into()))
    });

    group.bench_function("build", |b| b.iter(ValidatorRegistry::new));

    group.finish();
}

criterion_group!(
    validation_benches,
    bench_checksum_validation,
    bench_pattern_validators,
    bench_date_and_url,
    bench_registry,
);

criterion_main!(validation_benches);
