//! Integration tests for the table-section helpers.

use grappelli::{AttributeSet, Document, ElementConfig, PageBuilder, Tag};
use rstest::rstest;

fn tags_of(page: &PageBuilder, ids: &[grappelli::NodeId]) -> Vec<Tag> {
	ids.iter()
		.map(|&id| page.document().node(id).unwrap().tag())
		.collect()
}

#[rstest]
fn test_body_section_expands_ragged_matrix() {
	let mut page = PageBuilder::new(Document::new());
	let before = page.depth();

	let body = page
		.table_body([vec!["a", "b"], vec!["c"]], ElementConfig::new())
		.unwrap();

	assert_eq!(page.depth(), before);

	let rows = page.document().children(body).to_vec();
	assert_eq!(tags_of(&page, &rows), vec![Tag::Tr, Tag::Tr]);

	let first_cells = page.document().children(rows[0]).to_vec();
	assert_eq!(tags_of(&page, &first_cells), vec![Tag::Td, Tag::Td]);
	let texts: Vec<_> = first_cells
		.iter()
		.map(|&id| page.document().node(id).unwrap().text().unwrap().to_owned())
		.collect();
	assert_eq!(texts, vec!["a", "b"]);

	let second_cells = page.document().children(rows[1]).to_vec();
	assert_eq!(tags_of(&page, &second_cells), vec![Tag::Td]);
	assert_eq!(
		page.document().node(second_cells[0]).unwrap().text(),
		Some("c")
	);
}

#[rstest]
#[case(1, vec![4])]
#[case(3, vec![2, 5, 1])]
#[case(5, vec![0, 0, 3, 1, 2])]
fn test_row_and_cell_counts_follow_input(#[case] row_count: usize, #[case] widths: Vec<usize>) {
	assert_eq!(widths.len(), row_count);
	let matrix: Vec<Vec<String>> = widths
		.iter()
		.map(|&w| (0..w).map(|c| format!("cell{c}")).collect())
		.collect();

	let mut page = PageBuilder::new(Document::new());
	let section = page.table_body(matrix, ElementConfig::new()).unwrap();

	let rows = page.document().children(section).to_vec();
	assert_eq!(rows.len(), row_count);
	for (row, &width) in rows.iter().zip(&widths) {
		assert_eq!(page.document().children(*row).len(), width);
	}
}

#[rstest]
fn test_head_section_uses_header_cells() {
	let mut page = PageBuilder::new(Document::new());
	let head = page
		.table_head([["Name", "Qty"]], ElementConfig::new())
		.unwrap();
	assert_eq!(page.document().node(head).unwrap().tag(), Tag::Thead);
	let row = page.document().children(head)[0];
	let cells = page.document().children(row).to_vec();
	assert_eq!(tags_of(&page, &cells), vec![Tag::Th, Tag::Th]);
}

#[rstest]
fn test_foot_section_uses_data_cells() {
	let mut page = PageBuilder::new(Document::new());
	let foot = page
		.table_foot([["Total", "52"]], ElementConfig::new())
		.unwrap();
	assert_eq!(page.document().node(foot).unwrap().tag(), Tag::Tfoot);
	let row = page.document().children(foot)[0];
	let cells = page.document().children(row).to_vec();
	assert_eq!(tags_of(&page, &cells), vec![Tag::Td, Tag::Td]);
}

#[rstest]
fn test_empty_matrix_creates_bare_section() {
	let mut page = PageBuilder::new(Document::new());
	let before = page.depth();
	let empty: Vec<Vec<&str>> = Vec::new();
	let head = page.table_head(empty.clone(), ElementConfig::new()).unwrap();
	let body = page.table_body(empty.clone(), ElementConfig::new()).unwrap();
	let foot = page.table_foot(empty, ElementConfig::new()).unwrap();
	for section in [head, body, foot] {
		assert!(page.document().children(section).is_empty());
	}
	assert_eq!(page.depth(), before);
}

#[rstest]
fn test_rows_target_their_section_not_the_open_container() {
	let mut page = PageBuilder::new(Document::new());
	let table = page.open(Tag::Table, ElementConfig::new()).unwrap();
	let body = page
		.table_body([["x"]], ElementConfig::new())
		.unwrap();

	// The section lands in the open table; its row lands in the section,
	// not in the table the context stack currently points at.
	assert_eq!(page.document().parent(body), Some(table));
	let row = page.document().children(body)[0];
	assert_eq!(page.document().parent(row), Some(body));
	assert_eq!(page.document().children(table).len(), 1);
	assert_eq!(page.current(), table);
	page.close();
}

#[rstest]
fn test_section_override_bag_applies_to_section_element() {
	let mut page = PageBuilder::new(Document::new());
	let body = page
		.table_body(
			[["x"]],
			ElementConfig::new().attrs(AttributeSet::new().class("striped").style("margin: 0")),
		)
		.unwrap();
	let node = page.document().node(body).unwrap();
	assert_eq!(node.attribute("class"), Some("striped"));
	assert_eq!(node.attribute("style"), Some("margin: 0"));
}

#[rstest]
fn test_full_table_renders_in_input_order() {
	let mut page = PageBuilder::new(Document::new());
	page.open(Tag::Table, ElementConfig::new()).unwrap();
	page.table_head([["Item", "Qty"]], ElementConfig::new()).unwrap();
	page.table_body([["bolt", "12"], ["nut", "9"]], ElementConfig::new())
		.unwrap();
	page.table_foot([["Total", "21"]], ElementConfig::new()).unwrap();
	page.close();

	assert_eq!(
		page.into_document().to_html(),
		concat!(
			"<body><table>",
			"<thead><tr><th>Item</th><th>Qty</th></tr></thead>",
			"<tbody><tr><td>bolt</td><td>12</td></tr><tr><td>nut</td><td>9</td></tr></tbody>",
			"<tfoot><tr><td>Total</td><td>21</td></tr></tfoot>",
			"</table></body>"
		)
	);
}
