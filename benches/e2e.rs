#[macro_use]
extern crate bencher;

use bencher::Bencher;

fn bench_regex_corpus(b: &mut Bencher) {
    b.iter(|| {
        assert!(sipmatch::exec_regex());
    });
}

fn bench_fancy_corpus(b: &mut Bencher) {
    b.iter(|| {
        assert!(sipmatch::exec_fancy());
    });
}

fn bench_regex_precompile(b: &mut Bencher) {
    let re = sipmatch::compile_regex().unwrap();
    b.iter(|| {
        assert!(re.is_match(sipmatch::TEST_STRINGS[0]));
    });
}

fn bench_fancy_precompile(b: &mut Bencher) {
    let re = sipmatch::compile_fancy().unwrap();
    b.iter(|| {
        assert!(re.is_match(sipmatch::TEST_STRINGS[0]).unwrap());
    });
}

fn bench_regex_compile(b: &mut Bencher) {
    b.iter(|| {
        assert!(sipmatch::compile_regex().is_ok());
    });
}

fn bench_fancy_compile(b: &mut Bencher) {
    b.iter(|| {
        assert!(sipmatch::compile_fancy().is_ok());
    });
}

benchmark_group!(
    benchs,
    bench_regex_corpus,
    bench_fancy_corpus,
    bench_regex_precompile,
    bench_fancy_precompile,
    bench_regex_compile,
    bench_fancy_compile
);
benchmark_main!(benchs);
