use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fcs_writer::{
    encode_data, normalize, resolve_text_segment, sort_keywords, to_bytes, DataMatrix, Delimiter,
    Header, KeywordMap,
};

fn panel_text(parameters: usize, events: usize) -> KeywordMap {
    let mut text = KeywordMap::new();
    text.insert("$TOT", events);
    text.insert("$PAR", parameters);
    text.insert("$DATATYPE", "F");
    text.insert("$BYTEORD", "1,2,3,4");
    text.insert("$MODE", "L");
    text.insert("#CYTOMETER", "bench");
    text.insert("EXPERIMENT NAME", "throughput");
    for p in (1..=parameters).rev() {
        text.insert(format!("$P{}N", p), format!("FL{}-A", p));
        text.insert(format!("$P{}B", p), 32);
        text.insert(format!("$P{}E", p), "0,0");
        text.insert(format!("$P{}R", p), 262144);
        text.insert(format!("$P{}V", p), 500);
    }
    text
}

fn panel_data(parameters: usize, events: usize) -> DataMatrix {
    DataMatrix::new(
        (0..events)
            .map(|e| (0..parameters).map(|p| (e * parameters + p) as f32).collect())
            .collect(),
    )
}

fn benchmark_sort_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_keywords");

    for parameters in [8, 32, 128].iter() {
        let text = panel_text(*parameters, 1000);
        group.bench_with_input(
            BenchmarkId::from_parameter(parameters),
            &text,
            |b, text| b.iter(|| sort_keywords(black_box(text.clone()))),
        );
    }
    group.finish();
}

fn benchmark_resolve_text(c: &mut Criterion) {
    let text = panel_text(32, 1000);

    c.bench_function("resolve_text_segment", |b| {
        b.iter(|| resolve_text_segment(black_box(&text), 58, 128_000, Delimiter::Asterisk))
    });

    c.bench_function("normalize", |b| b.iter(|| normalize(black_box(&text))));
}

fn benchmark_encode_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_data");

    for events in [1_000, 10_000, 100_000].iter() {
        let data = panel_data(16, *events);
        group.bench_with_input(BenchmarkId::from_parameter(events), &data, |b, data| {
            b.iter(|| encode_data(black_box(data)))
        });
    }
    group.finish();
}

fn benchmark_full_file(c: &mut Criterion) {
    let header = Header::default();
    let text = panel_text(16, 10_000);
    let data = panel_data(16, 10_000);

    c.bench_function("to_bytes_16x10000", |b| {
        b.iter(|| to_bytes(black_box(&header), black_box(&text), black_box(&data)))
    });
}

criterion_group!(
    benches,
    benchmark_sort_keywords,
    benchmark_resolve_text,
    benchmark_encode_data,
    benchmark_full_file
);
criterion_main!(benches);
