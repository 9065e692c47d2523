use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use readmetrics_core::{
    HtmlExtractor, Extractor, Lexicons, count_syllables, load_master_dictionary, load_stopwords, tokenize_sentences,
    tokenize_words,
};

fn lexicons() -> Lexicons {
    let stopwords = load_stopwords("../../tests/fixtures/StopWords/StopWords_*.txt").unwrap();
    let (positive, negative) = load_master_dictionary("../../tests/fixtures/MasterDictionary").unwrap();
    Lexicons::new(stopwords, positive, negative)
}

fn article_text() -> (String, String) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();
    let article = HtmlExtractor.extract(&html).unwrap();
    (article.title, article.body)
}

fn bench_tokenize(c: &mut Criterion) {
    let (_, body) = article_text();
    let large = body.repeat(200);

    let mut group = c.benchmark_group("tokenize");

    group.bench_with_input(BenchmarkId::new("sentences", "article"), &body, |b, text| {
        b.iter(|| tokenize_sentences(black_box(text)))
    });

    group.bench_with_input(BenchmarkId::new("words", "article"), &body, |b, text| {
        b.iter(|| tokenize_words(black_box(text)))
    });

    group.bench_with_input(BenchmarkId::new("words", "x200"), &large, |b, text| {
        b.iter(|| tokenize_words(black_box(text)))
    });

    group.finish();
}

fn bench_syllables(c: &mut Criterion) {
    let words = ["cake", "bottle", "rhythm", "extraordinary", "internationalization"];

    c.bench_function("count_syllables", |b| {
        b.iter(|| words.iter().map(|w| count_syllables(black_box(w))).sum::<usize>())
    });
}

fn bench_compute_metrics(c: &mut Criterion) {
    let lexicons = lexicons();
    let (title, body) = article_text();
    let large = body.repeat(200);

    let mut group = c.benchmark_group("compute_metrics");

    group.bench_with_input(BenchmarkId::new("article", "1x"), &body, |b, body| {
        b.iter(|| lexicons.analyze("1", "u", black_box(&title), black_box(body)))
    });

    group.bench_with_input(BenchmarkId::new("article", "200x"), &large, |b, body| {
        b.iter(|| lexicons.analyze("1", "u", black_box(&title), black_box(body)))
    });

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();

    c.bench_function("extract_article", |b| b.iter(|| HtmlExtractor.extract(black_box(&html))));
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_syllables,
    bench_compute_metrics,
    bench_extraction
);
criterion_main!(benches);
