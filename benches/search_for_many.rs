use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use permuterm_dict::wordlist::wordlist::Wordlist;


fn random_words(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count).map(|_| {
        let len = rng.gen_range(3..12);
        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(8);
    let words = random_words(&mut rng, 50_000);
    let wl = Wordlist::from_words(words.iter().map(String::as_str));

    let queries: Vec<String> = words.iter().take(1000).cloned().collect();
    let patterns: Vec<String> = words.iter().take(1000).enumerate().map(|(i, w)| {
        match i % 4 {
            0 => format!("{}*", &w[..2]),
            1 => format!("*{}", &w[w.len() - 2..]),
            2 => format!("{}*{}", &w[..1], &w[w.len() - 1..]),
            _ => format!("*{}*", &w[1..3]),
        }
    }).collect();

    c.bench_function("build 5k", |b| b.iter(|| {
        Wordlist::from_words(words.iter().take(5000).map(String::as_str))
    }));

    c.bench_function("exact x1000", |b| b.iter(|| {
        queries.iter().filter(|q| wl.lookup(q).is_ok()).count()
    }));

    { let mut group = c.benchmark_group("10s");
        group.sample_size(10);
        group.bench_function("wildcard x1000", |b| b.iter(|| {
            patterns.iter().map(|p| wl.search(p).map(|x| x.len()).unwrap_or(0)).sum::<usize>()
        }));
        group.bench_function("wildcard x1000 (multithreaded)", |b| b.iter(|| wl.query_many(&patterns)));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
