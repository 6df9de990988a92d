use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphonenumber::{PhoneNumber, PhoneNumberFormat, PHONE_NUMBER_UTIL};

use phonenumber::{
    self as rlp,
    country::Id::{self, AR, AU, DE, GB, IT, US}, Mode,
};

type TestEntity = (&'static str, &'static str, Id);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("0011 54 9 11 8765 4321 ext. 1234", "AU", AU),
        ("(650) 253-0000", "US", US),
        ("+44 20 8765 4321", "GB", GB),
        ("020 8765 4321", "GB", GB),
        ("011 15-1234-5678", "AR", AR),
        ("02 12345678", "IT", IT),
        ("1-800-FLOWERS", "US", US),
        ("12345", "DE", DE),
    ]
}

// Entries either library rejects are left out of both sets so that the
// groups format the same inputs.
fn parse_both(numbers: &[TestEntity]) -> (Vec<PhoneNumber>, Vec<rlp::PhoneNumber>) {
    numbers
        .iter()
        .filter_map(|(input, region, id)| {
            let ours = PHONE_NUMBER_UTIL.parse(input, region).ok()?;
            let theirs = rlp::parse(Some(*id), input).ok()?;
            Some((ours, theirs))
        })
        .unzip()
}

fn formatting_benchmark(c: &mut Criterion) {
    let (numbers, rlp_numbers) = parse_both(&setup_numbers());

    let mut group = c.benchmark_group("Formatting Comparison");

    let mut bench = |format: PhoneNumberFormat, mode: Mode| {
        group.bench_function(format!("rphonenumber: format({:?})", format), |b| {
            b.iter(|| {
                for number in &numbers {
                    let _ = PHONE_NUMBER_UTIL.format(black_box(number), black_box(format));
                }
            })
        });

        group.bench_function(format!("rust-phonenumber: format({:?})", mode), |b| {
            b.iter(|| {
                for number in &rlp_numbers {
                    rlp::format(black_box(number)).mode(mode).to_string();
                }
            })
        });
    };

    bench(PhoneNumberFormat::E164, Mode::E164);
    bench(PhoneNumberFormat::International, Mode::International);
    bench(PhoneNumberFormat::National, Mode::National);
    bench(PhoneNumberFormat::RFC3966, Mode::Rfc3966);
    group.finish();
}

fn out_of_country_benchmark(c: &mut Criterion) {
    let (numbers, _) = parse_both(&setup_numbers());

    c.bench_function("rphonenumber: format_out_of_country_calling_number(US)", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = PHONE_NUMBER_UTIL
                    .format_out_of_country_calling_number(black_box(number), black_box("US"));
            }
        })
    });
}

criterion_group!(benches, formatting_benchmark, out_of_country_benchmark);
criterion_main!(benches);
