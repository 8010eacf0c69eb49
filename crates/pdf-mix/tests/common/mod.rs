#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

/// Pages held by each intermediate node of the test page tree
const PAGES_PER_NODE: usize = 4;

/// Alternating letter and A4 page sizes in points
const PAGE_SIZES: [(i64, i64); 2] = [(612, 792), (595, 842)];

/// Build an in-memory PDF with `num_pages` empty pages.
///
/// Pages hang off intermediate `Pages` nodes of up to four pages each and
/// alternate between letter and A4, so counting has to walk a nested tree.
pub fn create_test_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");
    let root_id = doc.new_object_id();

    let mut nodes = Vec::new();
    for first in (0..num_pages).step_by(PAGES_PER_NODE) {
        let last = (first + PAGES_PER_NODE).min(num_pages);
        let node_id = add_page_node(&mut doc, root_id, first..last);
        nodes.push(Object::Reference(node_id));
    }

    doc.objects.insert(
        root_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(nodes)),
            ("Count", Object::Integer(num_pages as i64)),
        ])),
    );

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(root_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

fn add_page_node(doc: &mut Document, parent_id: ObjectId, pages: std::ops::Range<usize>) -> ObjectId {
    let node_id = doc.new_object_id();
    let count = pages.len() as i64;

    let kids = pages
        .map(|index| {
            let (width, height) = PAGE_SIZES[index % PAGE_SIZES.len()];
            let content_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));
            let page_id = doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(node_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(width),
                        Object::Integer(height),
                    ]),
                ),
                ("Resources", Object::Dictionary(Dictionary::new())),
                ("Contents", Object::Reference(content_id)),
            ]));
            Object::Reference(page_id)
        })
        .collect::<Vec<_>>();

    doc.objects.insert(
        node_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Parent", Object::Reference(parent_id)),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(count)),
        ])),
    );
    node_id
}

/// Write a test PDF with `num_pages` pages to `path`
pub fn write_test_pdf(num_pages: usize, path: &Path) {
    let mut doc = create_test_pdf(num_pages);
    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    std::fs::write(path, writer).unwrap();
}
