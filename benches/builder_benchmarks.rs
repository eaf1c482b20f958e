//! Criterion benchmarks for tree construction and serialization.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use grappelli::{Document, ElementConfig, PageBuilder, Tag};

fn deep_nesting(c: &mut Criterion) {
	c.bench_function("open_close_512_levels", |b| {
		b.iter(|| {
			let mut page = PageBuilder::new(Document::new());
			for _ in 0..512 {
				page.open(Tag::Div, ElementConfig::new()).unwrap();
			}
			for _ in 0..512 {
				page.close();
			}
			black_box(page.into_document())
		})
	});
}

fn wide_table(c: &mut Criterion) {
	let matrix: Vec<Vec<String>> = (0..100)
		.map(|r| (0..10).map(|col| format!("r{r}c{col}")).collect())
		.collect();
	c.bench_function("table_body_100x10", |b| {
		b.iter(|| {
			let mut page = PageBuilder::new(Document::new());
			page.open(Tag::Table, ElementConfig::new()).unwrap();
			page.table_body(matrix.clone(), ElementConfig::new()).unwrap();
			page.close();
			black_box(page.into_document())
		})
	});
}

fn serialize(c: &mut Criterion) {
	let mut page = PageBuilder::new(Document::new());
	page.open(Tag::Table, ElementConfig::new()).unwrap();
	let matrix: Vec<Vec<String>> = (0..100)
		.map(|r| (0..10).map(|col| format!("r{r}c{col}")).collect())
		.collect();
	page.table_body(matrix, ElementConfig::new()).unwrap();
	page.close();
	let doc = page.into_document();
	c.bench_function("to_html_100x10_table", |b| {
		b.iter(|| black_box(doc.to_html()))
	});
}

criterion_group!(benches, deep_nesting, wide_table, serialize);
criterion_main!(benches);
