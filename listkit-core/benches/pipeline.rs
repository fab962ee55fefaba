use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use listkit_core::samples::{document_pipeline, documents, Document};

fn many_documents(copies: usize) -> Vec<Document> {
    let base = documents();
    (0..copies)
        .flat_map(|n| {
            base.iter().cloned().map(move |mut doc| {
                doc.id = format!("{}-{}", n, doc.id);
                doc
            })
        })
        .collect()
}

fn bench_search_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("ListPipeline::compute_display_list");

    for copies in [1usize, 20, 200] {
        let mut pipeline = document_pipeline(many_documents(copies));
        pipeline.set_search_term("report");
        pipeline.set_active_sort("date");

        group.bench_with_input(
            BenchmarkId::from_parameter(copies * 5),
            &pipeline,
            |b, pipeline| {
                b.iter(|| black_box(pipeline.compute_display_list().len()));
            },
        );
    }

    group.finish();
}

fn bench_unsorted_search(c: &mut Criterion) {
    let mut pipeline = document_pipeline(many_documents(200));
    pipeline.set_search_term("security");

    c.bench_function("ListPipeline::search_only_1000", |b| {
        b.iter(|| black_box(pipeline.compute_display_list().len()));
    });
}

criterion_group!(benches, bench_search_and_sort, bench_unsorted_search);
criterion_main!(benches);
