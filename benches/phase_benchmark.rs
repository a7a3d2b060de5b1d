use criterion::{criterion_group, criterion_main, Criterion};
use fft::{fft::FFT, signal::Signal, PHASE_COUNT};

pub fn phase_benchmark(c: &mut Criterion) {
    let signal = match Signal::try_from("80871224585914546619083218645595".repeat(20).as_str()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to parse benchmark signal, get error({})", e);
            return;
        }
    };

    let fft = FFT::new(signal.len());
    c.bench_function("full transform 640 digits 100 phases", |b| {
        b.iter(|| fft.process_n(&signal, PHASE_COUNT))
    });

    let signal = match Signal::try_from("03036732577212944063491565474664") {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to parse benchmark signal, get error({})", e);
            return;
        }
    };
    c.bench_function("offset message 100 phases", |b| {
        b.iter(|| fft::offset_message(&signal, PHASE_COUNT))
    });
}

criterion_group!(phase_benches, phase_benchmark);
criterion_main!(phase_benches);
