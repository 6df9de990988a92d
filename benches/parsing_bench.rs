use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rphonenumber::PHONE_NUMBER_UTIL;

use phonenumber::{self as rlp, country::Id};

// (input, region code, region id for rust-phonenumber)
type TestEntity = (&'static str, &'static str, Id);

fn setup_parsing_data() -> Vec<TestEntity> {
    use phonenumber::country::Id::*;
    vec![
        // International dialling prefix followed by an extension
        ("0011 54 9 11 8765 4321 ext. 1234", "AU", AU),
        ("(650) 253-0000", "US", US),
        ("+44 20 8765 4321", "GB", GB),
        // National prefix
        ("020 8765 4321", "GB", GB),
        // Argentinian mobile with the 15 carrier prefix
        ("011 15-1234-5678", "AR", AR),
        // Italian leading zero
        ("02 12345678", "IT", IT),
        // Vanity number
        ("1-800-FLOWERS", "US", US),
        ("12345", "DE", DE),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("rphonenumber: parse()", |b| {
        b.iter(|| {
            for (number_str, region, _) in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.parse(black_box(number_str), black_box(region));
            }
        })
    });

    group.bench_function("rphonenumber: parse_and_keep_raw_input()", |b| {
        b.iter(|| {
            for (number_str, region, _) in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL
                    .parse_and_keep_raw_input(black_box(number_str), black_box(region));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for (number_str, _, region_id) in &numbers_to_parse {
                let _ = rlp::parse(black_box(Some(*region_id)), black_box(number_str));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
