use criterion::*;

use scmjs::number::make_number;
use scmjs::parse::{self, scan};

const PROGRAM: &str = r#"
(define (fold f acc xs)
  (if (null? xs)
      acc
      (fold f (f acc (car xs)) (cdr xs))))

(define (describe n)
  (cond [(> n 100) 'big]
        [(> n 10) 'medium]
        [else `(small ,n ,@(list 1 2 3))]))

(display (fold + 0 '(1 2 3 4 5 6 7 8 9 10)))
"#;

fn bench_number_parsing(c: &mut Criterion) {
    c.bench_function("number parsing", |b| {
        b.iter(|| {
            for lexeme in &["123456789", "-6/4", "1.5e300", "1e1e1", "3.25-0.5i"] {
                black_box(make_number(lexeme)).ok();
            }
        })
    });
}

fn bench_scanning(c: &mut Criterion) {
    c.bench_function("scanning", |b| b.iter(|| black_box(scan(PROGRAM))));
}

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("parsing (default options)", |b| {
        b.iter(|| black_box(scmjs::parse(PROGRAM)))
    });
}

fn bench_parsing_chapter(c: &mut Criterion) {
    c.bench_function("parsing (chapter 2)", |b| {
        let options = parse::Options::new().with_chapter(2);
        b.iter(|| black_box(scmjs::parse_custom(PROGRAM, options.clone())))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_number_parsing, bench_scanning, bench_parsing, bench_parsing_chapter
}
criterion_main!(benches);
