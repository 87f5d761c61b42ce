use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pangu_core::EncodingTag;
use pangu_encoding::{get_encoding_type, is_text_file, resolve_fallback, Codec};

fn generate_utf8(size_kb: usize) -> Vec<u8> {
    let line = "在LeanCloud上，数据存储是围绕AVObject进行的。The quick brown fox.\n";
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(line);
    }
    text.into_bytes()
}

fn bench_detect(c: &mut Criterion) {
    let bytes_10k = generate_utf8(10);
    let bytes_100k = generate_utf8(100);

    c.bench_function("is_text_file_100kb", |b| {
        b.iter(|| black_box(is_text_file(black_box(&bytes_100k))))
    });
    c.bench_function("detect_utf8_10kb", |b| {
        b.iter(|| black_box(get_encoding_type(black_box(&bytes_10k)).unwrap()))
    });
    c.bench_function("detect_utf8_100kb", |b| {
        b.iter(|| black_box(get_encoding_type(black_box(&bytes_100k)).unwrap()))
    });
}

fn bench_codec(c: &mut Criterion) {
    let text = String::from_utf8(generate_utf8(10)).unwrap();
    let gbk = resolve_fallback("gbk").unwrap();
    let utf16 = Codec::new(EncodingTag::Utf16LittleEndian, gbk);
    let legacy = Codec::new(EncodingTag::PlatformDefault, gbk);
    let utf16_bytes = utf16.encode(&text).unwrap();
    let gbk_bytes = legacy.encode(&text).unwrap();

    c.bench_function("codec_utf16le_encode_10kb", |b| {
        b.iter(|| black_box(utf16.encode(black_box(&text)).unwrap()))
    });
    c.bench_function("codec_utf16le_decode_10kb", |b| {
        b.iter(|| black_box(utf16.decode(black_box(&utf16_bytes)).unwrap()))
    });
    c.bench_function("codec_gbk_roundtrip_10kb", |b| {
        b.iter(|| {
            let decoded = legacy.decode(black_box(&gbk_bytes)).unwrap();
            black_box(legacy.encode(&decoded).unwrap())
        })
    });
}

criterion_group!(benches, bench_detect, bench_codec);
criterion_main!(benches);
