use criterion::{black_box, criterion_group, criterion_main, Criterion};

use medquiz_core::bank::parse_bank_str;

fn bench_bank_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank_parsing");

    let small = generate_bank_json(2, 3, 10);
    let medium = generate_bank_json(5, 10, 20);
    let large = generate_bank_json(20, 20, 50);

    group.bench_function("60_questions", |b| {
        b.iter(|| parse_bank_str(black_box(&small), black_box("bench.json")))
    });

    group.bench_function("1000_questions", |b| {
        b.iter(|| parse_bank_str(black_box(&medium), black_box("bench.json")))
    });

    group.bench_function("20000_questions", |b| {
        b.iter(|| parse_bank_str(black_box(&large), black_box("bench.json")))
    });

    group.finish();
}

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank_lookups");
    let bank = parse_bank_str(&generate_bank_json(20, 20, 50), "bench.json").unwrap();

    group.bench_function("get_last_chapter", |b| {
        b.iter(|| bank.get_chapter(black_box("Subject 19"), black_box("Chapter 19")))
    });

    group.bench_function("find_question_by_id", |b| {
        b.iter(|| bank.find_question(black_box("Subject 19_Ch20_50")))
    });

    group.bench_function("search_subjects", |b| {
        b.iter(|| bank.search_subjects(black_box("ject 1")))
    });

    group.finish();
}

fn generate_bank_json(subjects: usize, chapters: usize, questions: usize) -> String {
    let mut s = String::from("{");
    for si in 0..subjects {
        if si > 0 {
            s.push(',');
        }
        s.push_str(&format!("\"Subject {si}\": ["));
        for ci in 0..chapters {
            if ci > 0 {
                s.push(',');
            }
            s.push_str(&format!("{{\"topic\": \"Chapter {ci}\", \"questions\": ["));
            for qi in 0..questions {
                if qi > 0 {
                    s.push(',');
                }
                s.push_str(&format!(
                    r#"{{
    "id": "Subject {si}_Ch{}_{}",
    "text": "Question {qi} of chapter {ci}?",
    "image": "img_{si}_{ci}_{qi}.png",
    "options": {{"a": "First", "b": "Second", "c": "Third", "d": "Fourth"}},
    "correct_option": "c",
    "explanation": "Because the third option is right."
}}"#,
                    ci + 1,
                    qi + 1
                ));
            }
            s.push_str("]}");
        }
        s.push(']');
    }
    s.push('}');
    s
}

criterion_group!(benches, bench_bank_parsing, bench_lookups);
criterion_main!(benches);
