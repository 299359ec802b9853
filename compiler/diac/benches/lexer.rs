//! Lexer benchmarks for Diamond.
//!
//! Measures the raw lexer and the token buffer on growing inputs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use diac::commands::{collect_tokens, LexOptions, SourceArg};
use dia_lexer::{LexConfig, SourceBuffer};

/// One nested block with every literal kind.
const BLOCK: &str = r#"If bla > 0x1F:   # check
    mod.Func mod.CONST 'a' "str\n"
  Elif bla < 0:
    x = (1 + 2) * 3
Else:
    """
    long text
    """
"#;

fn generate_n_blocks(n: usize) -> String {
    (0..n)
        .map(|i| format!("Fn{i} val{i}:\n    CONST_{i} + {i}\n  more{i}\nrest{i}\n"))
        .collect()
}

fn options(raw: bool, keep_trivia: bool) -> LexOptions {
    LexOptions {
        config: LexConfig::default().with_trivia(keep_trivia),
        raw,
        source: SourceArg::Stdin,
    }
}

fn bench_block(c: &mut Criterion) {
    let raw = options(true, false);
    let buffered = options(false, false);
    let trivia = options(false, true);

    c.bench_function("lexer/block_raw", |b| {
        b.iter(|| black_box(collect_tokens(SourceBuffer::new(BLOCK), &raw)));
    });
    c.bench_function("lexer/block_buffered", |b| {
        b.iter(|| black_box(collect_tokens(SourceBuffer::new(BLOCK), &buffered)));
    });
    c.bench_function("lexer/block_trivia", |b| {
        b.iter(|| black_box(collect_tokens(SourceBuffer::new(BLOCK), &trivia)));
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/scaling");
    let opts = options(false, false);

    for n in [10, 100, 1000] {
        let source = generate_n_blocks(n);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, src| {
            b.iter(|| black_box(collect_tokens(SourceBuffer::new(src.as_str()), &opts)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_block, bench_scaling);
criterion_main!(benches);
