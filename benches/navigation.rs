use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_jsonpointer::{compile, dict, get, has, parse, remove, set, to_value, value, Value};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

fn users_document(size: u32) -> Value {
    let users: Vec<User> = (0..size)
        .map(|i| User {
            id: i,
            name: format!("User {}", i),
            email: format!("user{}@example.com", i),
            active: i % 2 == 0,
        })
        .collect();
    let mut doc = value!({ "meta": { "a/b": { "m~n": 1 } } });
    if let Ok(users) = to_value(&users) {
        let _ = set(&mut doc, "/users", users);
    }
    doc
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("plain", |b| {
        b.iter(|| parse(black_box("/users/250/name")))
    });
    group.bench_function("escaped", |b| {
        b.iter(|| parse(black_box("/meta/a~1b/m~0n")))
    });

    let tokens = ["meta", "a/b", "m~n"];
    group.bench_function("compile", |b| b.iter(|| compile(black_box(&tokens[..]))));

    group.finish();
}

fn benchmark_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for size in [10, 100, 1000].iter() {
        let doc = users_document(*size);
        let pointer = format!("/users/{}/email", size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &pointer, |b, pointer| {
            b.iter(|| get(black_box(&doc), black_box(pointer.as_str())))
        });
    }

    let doc = users_document(10);
    group.bench_function("has_missing", |b| {
        b.iter(|| has(black_box(&doc), black_box("/users/99/email")))
    });
    group.bench_function("token_list", |b| {
        let tokens = ["meta", "a/b", "m~n"];
        b.iter(|| get(black_box(&doc), black_box(&tokens)))
    });

    group.finish();
}

fn benchmark_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    group.bench_function("existing_leaf", |b| {
        let mut doc = users_document(100);
        b.iter(|| set(&mut doc, black_box("/users/50/active"), Value::Bool(true)).is_ok())
    });

    group.bench_function("create_intermediates", |b| {
        b.iter(|| {
            let mut doc = value!({});
            set(&mut doc, black_box("/a/b/0/c/-"), Value::from(1)).is_ok()
        })
    });

    group.bench_function("append", |b| {
        let mut doc = value!({ "list": [] });
        b.iter(|| set(&mut doc, black_box("/list/-"), Value::Null).is_ok())
    });

    group.finish();
}

fn benchmark_remove(c: &mut Criterion) {
    c.bench_function("remove_and_restore", |b| {
        let mut doc = users_document(100);
        b.iter(|| {
            if let Ok(Some(removed)) = remove(&mut doc, black_box("/users/0/email")) {
                let _ = set(&mut doc, "/users/0/email", removed);
            }
        })
    });
}

fn benchmark_dict(c: &mut Criterion) {
    let mut group = c.benchmark_group("dict");

    for size in [10, 100, 1000].iter() {
        let doc = users_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| dict(black_box(doc)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_get,
    benchmark_set,
    benchmark_remove,
    benchmark_dict
);
criterion_main!(benches);
