// Performance benchmarks for vectorization, ranked search and resolution
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use std::sync::Arc;
use urag::{
    sample_corpus, search_similar, Corpus, Document, DocumentMetadata, FaqItem, FixedPicker,
    HashingVectorizer, SearchIndex, TieredResolver,
};

const WORDS: [&str; 16] = [
    "admission", "engineering", "fee", "hostel", "placement", "course", "campus", "library",
    "exam", "scholarship", "deadline", "branch", "faculty", "canteen", "transport", "sports",
];

fn generate_random_text(rng: &mut StdRng, words: usize) -> String {
    (0..words)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_corpus(size: usize) -> Corpus {
    let mut rng = StdRng::seed_from_u64(42);
    let faqs = (0..size)
        .map(|i| FaqItem::new(format!("faq-{i}"), generate_random_text(&mut rng, 8), "answer"))
        .collect();
    let documents = (0..size)
        .map(|i| {
            let content = generate_random_text(&mut rng, 40);
            Document {
                id: format!("doc-{i}"),
                augmented_content: format!("Section {i}. {content}"),
                content,
                summary: String::new(),
                metadata: DocumentMetadata {
                    url: format!("https://example.edu/{i}"),
                    title: format!("Document {i}"),
                    section: format!("section-{}", i % 10),
                },
            }
        })
        .collect();
    Corpus::new(faqs, documents).unwrap()
}

fn benchmark_vectorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorize");
    let vectorizer = HashingVectorizer::default();
    let mut rng = StdRng::seed_from_u64(7);

    for words in [8, 64, 512].iter() {
        let text = generate_random_text(&mut rng, *words);
        group.bench_with_input(BenchmarkId::new("hashing", words), &text, |b, text| {
            b.iter(|| black_box(vectorizer.vectorize(black_box(text))));
        });
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let vectorizer = HashingVectorizer::default();

    for size in [100, 1000, 10000].iter() {
        let corpus = generate_corpus(*size);
        let index = SearchIndex::from_items(&vectorizer, corpus.faqs());
        let query = vectorizer.vectorize("engineering admission deadline");

        group.bench_with_input(BenchmarkId::new("naive", size), &corpus, |b, corpus| {
            b.iter(|| {
                let results = search_similar(
                    &vectorizer,
                    black_box("engineering admission deadline"),
                    corpus.faqs(),
                    0.3,
                    3,
                )
                .unwrap();
                black_box(results);
            });
        });

        group.bench_with_input(BenchmarkId::new("indexed", size), &index, |b, index| {
            b.iter(|| black_box(index.search(black_box(&query), 0.3, 3).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let resolver = TieredResolver::builder(sample_corpus().unwrap())
        .picker(Arc::new(FixedPicker(0)))
        .build()
        .unwrap();

    let queries = [
        ("faq", "What are the admission requirements for engineering programs?"),
        ("document", "placement cell consistently achieved excellent results with top companies like TCS, Infosys, Wipro, Accenture, and L&T recruiting students"),
        ("fallback", "xyzzy plugh qwertyuiop zork"),
    ];
    for (tier, query) in queries {
        group.bench_function(tier, |b| {
            b.iter(|| black_box(resolver.resolve(black_box(query))));
        });
    }

    let large = TieredResolver::builder(generate_corpus(1000))
        .picker(Arc::new(FixedPicker(0)))
        .build()
        .unwrap();
    group.bench_function("large_corpus", |b| {
        b.iter(|| black_box(large.resolve(black_box("hostel fee scholarship deadline"))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_vectorize, benchmark_search, benchmark_resolve);
criterion_main!(benches);
