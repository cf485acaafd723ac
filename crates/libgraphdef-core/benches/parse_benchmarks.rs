mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphdef_core::SourceFile;
use libgraphdef_core::parser::SchemaParser;

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");

    let shop = SourceFile::new("shop.gdef", fixtures::SHOP_SCHEMA);
    group.bench_function("shop", |b| {
        b.iter(|| black_box(libgraphdef_core::parse(&shop)))
    });

    for count in [10, 100, 1000] {
        let source = SourceFile::new("bench.gdef", fixtures::synthetic_schema(count));
        group.throughput(Throughput::Bytes(source.text().len() as u64));
        group.bench_with_input(
            BenchmarkId::new("synthetic", count),
            &source,
            |b, source| b.iter(|| black_box(libgraphdef_core::parse(source))),
        );
    }

    group.finish();
}

fn export_json(c: &mut Criterion) {
    let source = SourceFile::new("bench.gdef", fixtures::synthetic_schema(100));
    let model = match libgraphdef_core::parse(&source) {
        Ok(model) => model,
        Err(diagnostics) => panic!("benchmark schema is invalid:\n{diagnostics}"),
    };

    c.bench_function("export_json_100", |b| {
        b.iter(|| black_box(model.to_json()))
    });
}

fn fragment_tree(c: &mut Criterion) {
    let source = SourceFile::new("bench.gdef", fixtures::synthetic_schema(100));

    c.bench_function("fragment_tree_100", |b| {
        b.iter(|| {
            let result = SchemaParser::new(&source).parse();
            black_box(result.fragment().tokens().len())
        })
    });
}

criterion_group!(benches, schema_parse, export_json, fragment_tree);
criterion_main!(benches);
