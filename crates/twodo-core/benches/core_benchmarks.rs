use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twodo_core::models::{Repeat, TaskTemplate};
use twodo_core::recurrence::RecurrenceExpander;
use twodo_core::timeparse::PartialTimeParser;

fn bench_partial_parse(c: &mut Criterion) {
    let parser = PartialTimeParser::new(chrono_tz::Europe::Oslo);
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();

    c.bench_function("parse_hour_minute", |b| {
        b.iter(|| parser.parse(black_box("1504"), black_box(now)).unwrap())
    });

    c.bench_function("parse_full_timestamp", |b| {
        b.iter(|| parser.parse(black_box("202412312359"), black_box(now)).unwrap())
    });
}

fn bench_expand(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let template = TaskTemplate {
        start,
        stop: start + chrono::Duration::hours(1),
        description: "Standup %d/%D".to_string(),
        theme: "work".to_string(),
        repeat: Repeat::new(1, 365).unwrap(),
    };

    c.bench_function("expand_daily_year", |b| {
        b.iter(|| RecurrenceExpander::expand(black_box(&template)).unwrap())
    });
}

criterion_group!(benches, bench_partial_parse, bench_expand);
criterion_main!(benches);
