//! Minimal PDF builders for tests.
//!
//! Text pages carry one line in the standard Courier font, which both
//! strategies can decode without embedded font programs.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

/// An object number no fixture ever allocates.
const MISSING_OBJECT: ObjectId = (9_999, 0);

enum Page<'a> {
    Text(&'a str),
    /// A content stream with no text operators, like a scanned page.
    Empty,
    /// No media box, and contents and font pointing at missing objects.
    Broken,
}

/// Builds a PDF with one page per entry of `pages`.
///
/// # Panics
///
/// Panics if `lopdf` fails to encode or serialize the document.
#[must_use]
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let pages: Vec<Page<'_>> = pages.iter().copied().map(Page::Text).collect();
    save(build(&pages))
}

/// Builds a PDF whose pages have no text layer at all.
///
/// # Panics
///
/// Panics if `lopdf` fails to encode or serialize the document.
#[must_use]
pub fn image_only_pdf(page_count: usize) -> Vec<u8> {
    let pages: Vec<Page<'_>> = (0..page_count).map(|_| Page::Empty).collect();
    save(build(&pages))
}

/// Builds a PDF with one text page per entry of `pages` and a broken page
/// inserted at zero-based position `broken_at`.
///
/// # Panics
///
/// Panics if `broken_at > pages.len()` or if `lopdf` fails to serialize.
#[must_use]
pub fn pdf_with_broken_page(pages: &[&str], broken_at: usize) -> Vec<u8> {
    let mut pages: Vec<Page<'_>> = pages.iter().copied().map(Page::Text).collect();
    pages.insert(broken_at, Page::Broken);
    save(build(&pages))
}

/// Builds a text PDF protected by a standard security handler whose user
/// password is not empty.
///
/// # Panics
///
/// Panics if `lopdf` fails to encode or serialize the document.
#[must_use]
pub fn encrypted_pdf(pages: &[&str]) -> Vec<u8> {
    let pages: Vec<Page<'_>> = pages.iter().copied().map(Page::Text).collect();
    let mut doc = build(&pages);

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "Length" => 40,
        "O" => Object::String(vec![0x4f; 32], StringFormat::Hexadecimal),
        "U" => Object::String(vec![0x55; 32], StringFormat::Hexadecimal),
        "P" => -4,
    });
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::String(vec![0x1d; 16], StringFormat::Hexadecimal),
            Object::String(vec![0x1d; 16], StringFormat::Hexadecimal),
        ],
    );

    save(doc)
}

fn build(pages: &[Page<'_>]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for page in pages {
        let page_dict = match page {
            Page::Text(text) => {
                let content_id = add_content(&mut doc, text_operations(text));
                text_page(pages_id, content_id, resources_id)
            }
            Page::Empty => {
                let content_id = add_content(&mut doc, Vec::new());
                text_page(pages_id, content_id, resources_id)
            }
            Page::Broken => dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => MISSING_OBJECT,
                "Resources" => dictionary! {
                    "Font" => dictionary! {
                        "F1" => MISSING_OBJECT,
                    },
                },
            },
        };
        kids.push(doc.add_object(page_dict).into());
    }

    let count = i64::try_from(kids.len()).expect("page count fits in i64");
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

fn text_operations(text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![72.into(), 720.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

fn add_content(doc: &mut Document, operations: Vec<Operation>) -> ObjectId {
    let content = Content { operations };
    doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode page content"),
    ))
}

fn text_page(parent: ObjectId, contents: ObjectId, resources: ObjectId) -> Dictionary {
    dictionary! {
        "Type" => "Page",
        "Parent" => parent,
        "Contents" => contents,
        "Resources" => resources,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    }
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize PDF");
    bytes
}
