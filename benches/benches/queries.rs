use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unicode_database::hangul;
use unicode_database_tests::data;

/// кодпоинты из разных частей пространства: ASCII, буквы с декомпозицией,
/// CJK, хангыль, private use, неназначенные
const PROBES: [u32; 8] = [0x41, 0xC0, 0x300, 0x4E50, 0xAC01, 0xE123, 0x2FFFF, 0x10FFFF];

fn records(c: &mut Criterion)
{
    let db = data::database();

    c.bench_function("record_lookup", |b| {
        b.iter(|| {
            for &code in PROBES.iter() {
                black_box(db.category(black_box(code)));
            }
        })
    });

    c.bench_function("flags", |b| {
        b.iter(|| {
            for &code in PROBES.iter() {
                black_box(db.isalpha(black_box(code)));
                black_box(db.isprintable(black_box(code)));
            }
        })
    });
}

fn composition(c: &mut Criterion)
{
    let db = data::database();

    c.bench_function("composition_pair", |b| {
        b.iter(|| {
            black_box(db.composition(black_box(0x41), black_box(0x300)));
            black_box(db.composition(black_box(0x41), black_box(0x301)));
        })
    });

    c.bench_function("canonical_decomposition", |b| {
        b.iter(|| {
            black_box(db.canon_decomposition(black_box(0x212B)));
        })
    });
}

fn names(c: &mut Criterion)
{
    let db = data::database();

    c.bench_function("hangul_name", |b| {
        b.iter(|| black_box(hangul::syllable_name(black_box(0xD55C))))
    });

    c.bench_function("hangul_reverse", |b| {
        b.iter(|| black_box(hangul::lookup_syllable_name(black_box("HANGUL SYLLABLE HAN"))))
    });

    c.bench_function("name_lookup", |b| {
        b.iter(|| black_box(db.lookup(black_box("LATIN CAPITAL LETTER A"), false)))
    });
}

criterion_group!(benches, records, composition, names);
criterion_main!(benches);
