use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use bitfinex_ticker::bitfinex::parser::classify_body;
use rand::Rng;
use reqwest::StatusCode;

const BODIES_PER_BATCH: usize = 1000;

// generate fake ticker bodies with random prices
fn fake_ticker_bodies(n: usize) -> Vec<Vec<u8>> {
    let mut rng = rand::rng();

    (0..n)
        .map(|_| {
            let bid: f64 = rng.random_range(1_000.0..100_000.0);
            let ask = bid + rng.random_range(0.01..10.0);
            let last = rng.random_range(bid..ask);
            format!(
                r#"{{"mid":"{}","bid":"{}","ask":"{}","last_price":"{}","low":"{}","high":"{}","volume":"{}","timestamp":"{}"}}"#,
                (bid + ask) / 2.0,
                bid,
                ask,
                last,
                bid * 0.95,
                ask * 1.05,
                rng.random_range(0.0..50_000.0),
                rng.random_range(1_600_000_000.0..1_700_000_000.0),
            )
            .into_bytes()
        })
        .collect()
}

fn bench_classify_tickers(c: &mut Criterion) {
    let bodies = fake_ticker_bodies(BODIES_PER_BATCH);

    c.bench_function(&format!("classify_{}_ticker_bodies", BODIES_PER_BATCH), |b| {
        b.iter(|| {
            for body in &bodies {
                let _outcome = black_box(classify_body(StatusCode::OK, black_box(body), true));
            }
        })
    });
}

fn bench_classify_error_payload(c: &mut Criterion) {
    let body = br#"{"message":"Unknown symbol"}"#;

    // exercises the fallback decode
    c.bench_function("classify_error_payload", |b| {
        b.iter(|| black_box(classify_body(StatusCode::OK, black_box(body), true)))
    });
}

criterion_group!(benches, bench_classify_tickers, bench_classify_error_payload);
criterion_main!(benches);
