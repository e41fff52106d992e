#![allow(missing_docs)]

use std::sync::LazyLock;

use divan::{Bencher, black_box};
use wordpipe::{
    RegexTokenizer, StringVocab, TextTokenizer, Transform, VocabOptions, iterate_batch,
    transform_fn,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn english_lines() -> Vec<String> {
    let paragraph = [
        "The quick brown fox jumps over the lazy dog.",
        "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
        "Don't forget: the temperature is 72 degrees!",
        "The researchers couldn't believe the results they'd achieved.",
    ];
    paragraph
        .iter()
        .cycle()
        .take(4_000)
        .map(|s| s.to_string())
        .collect()
}

static TOKENIZER: LazyLock<RegexTokenizer> =
    LazyLock::new(|| RegexTokenizer::basic_english().unwrap());

static VOCAB: LazyLock<StringVocab<u32>> = LazyLock::new(|| {
    let lines = english_lines();
    let tokens: Vec<Vec<String>> = lines
        .iter()
        .map(|line| TOKENIZER.tokenize(line).unwrap())
        .collect();
    StringVocab::build_from_iterator(
        tokens,
        &VocabOptions::default()
            .with_specials(["<unk>"])
            .with_default_token(Some("<unk>")),
    )
    .unwrap()
});

fn line_to_ids(line: String) -> wordpipe::WPResult<Vec<u32>> {
    let tokens = TOKENIZER.tokenize(&line)?;
    wordpipe::Vocabulary::lookup_batch(&*VOCAB, &tokens)
}

#[divan::bench]
fn sequential_batch(bencher: Bencher) {
    let pipeline = iterate_batch(transform_fn(line_to_ids));
    let lines = english_lines();

    bencher
        .with_inputs(|| lines.clone())
        .bench_values(|batch| black_box(pipeline.apply(batch).unwrap()));
}

#[cfg(feature = "rayon")]
#[divan::bench]
fn parallel_batch(bencher: Bencher) {
    let pipeline = wordpipe::rayon::ParallelRayonBatch::new(transform_fn(line_to_ids));
    let lines = english_lines();

    bencher
        .with_inputs(|| lines.clone())
        .bench_values(|batch| black_box(pipeline.apply(batch).unwrap()));
}
