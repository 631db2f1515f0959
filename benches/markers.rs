use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relaytext::{NullLogger, Text};

const LINE: &str = "§7[§cAdmin§7] §fSteve§7: §lhello §r§ateam§8, meet at §e120 64 -30 | @here";

fn bench_markers(c: &mut Criterion) {
    let text = Text::new(NullLogger);

    c.bench_function("strip", |b| b.iter(|| text.strip(black_box(LINE), true)));
    c.bench_function("color_ansi", |b| b.iter(|| text.color_ansi(black_box(LINE))));
    c.bench_function("mark_filter", |b| {
        let block = LINE.repeat(20);
        b.iter(|| text.mark_filter(black_box(&block)))
    });
}

criterion_group!(benches, bench_markers);
criterion_main!(benches);
