//! Integration tests for a full extraction pass over one page.
//!
//! Builds a page tree bottom-up, then navigates it, queries templates, mints
//! URIs and attaches records the way an extractor would.

use pretty_assertions::assert_eq;
use wikitree_ast::{
    AnnotationKey, NodeArena, NodeId, NodeKind, PageData, RecordEntry, RecordSubject, Severity,
    WikiTitle,
};
use wikitree_uri::{GeneratorScope, UriConfig, UriMinter};

const RESOURCE_URI: AnnotationKey<String> = AnnotationKey::new("resource-uri");

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Page {
    arena: NodeArena,
    page: NodeId,
    infobox: NodeId,
    birth_place: NodeId,
    career: NodeId,
    career_text: NodeId,
    awards: NodeId,
}

/// ```text
/// {{Infobox person|name=John Smith|birth_place={{Flag|UK}}}}     (line 1)
/// John Smith was an engineer.                                    (line 2)
/// == Career ==                                                   (line 4)
/// Smith worked in [[London]].                                    (line 5)
/// == Awards ==                                                   (line 8)
/// ```
fn build_page() -> Page {
    let mut arena = NodeArena::new();

    let name = arena.alloc_text(1, "John Smith");
    let name = arena.alloc_parent(NodeKind::property("name"), 1, &[name]).unwrap();
    let country = arena.alloc_text(1, "UK");
    let country = arena.alloc_parent(NodeKind::property("1"), 1, &[country]).unwrap();
    let flag = arena
        .alloc_parent(NodeKind::template(WikiTitle::template("Flag")), 1, &[country])
        .unwrap();
    let birth_place = arena
        .alloc_parent(NodeKind::property("birth_place"), 1, &[flag])
        .unwrap();
    let infobox = arena
        .alloc_parent(
            NodeKind::template(WikiTitle::template("Infobox person")),
            1,
            &[name, birth_place],
        )
        .unwrap();

    let intro = arena.alloc_text(2, "John Smith was an engineer.\n");

    let heading = arena.alloc_text(4, " Career ");
    let career = arena
        .alloc_parent(NodeKind::section("Career", 2), 4, &[heading])
        .unwrap();
    let career_text = arena.alloc_text(5, "Smith worked in ");
    let label = arena.alloc_text(5, "London");
    let link = arena
        .alloc_parent(NodeKind::internal_link(WikiTitle::main("London")), 5, &[label])
        .unwrap();

    let heading = arena.alloc_text(8, " Awards ");
    let awards = arena
        .alloc_parent(NodeKind::section("Awards", 2), 8, &[heading])
        .unwrap();

    let page = arena
        .alloc_page(
            PageData::new(WikiTitle::main("John Smith"), 4711, 99),
            &[infobox, intro, career, career_text, link, awards],
        )
        .unwrap();

    Page {
        arena,
        page,
        infobox,
        birth_place,
        career,
        career_text,
        awards,
    }
}

#[test]
fn every_node_resolves_to_the_page() {
    init_tracing();
    let p = build_page();
    let page = p.arena.node(p.page);

    for node in p.arena.iter() {
        assert_eq!(node.root(), page);
        for child in node.children() {
            assert_eq!(child.parent(), Some(node));
        }
    }
}

#[test]
fn sections_follow_line_order() {
    let p = build_page();
    let career = p.arena.node(p.career);

    assert_eq!(p.arena.node(p.infobox).section(), None);
    assert_eq!(p.arena.node(p.career_text).section(), Some(career));
    assert_eq!(
        p.arena.node(p.awards).section().map(|s| s.node_id()),
        Some(p.awards)
    );
}

#[test]
fn infobox_query_finds_nested_templates() {
    let p = build_page();
    let page = p.arena.node(p.page);

    assert_eq!(
        page.contained_template_names(&[]),
        vec!["Infobox person", "Flag"]
    );
    assert!(page.has_template(&["Flag"]));

    let infobox = p.arena.node(p.infobox);
    assert_eq!(
        infobox.property("name").and_then(|n| n.retrieve_text()),
        Some("John Smith")
    );
    // birth_place wraps a template, not text
    assert_eq!(p.arena.node(p.birth_place).retrieve_text(), None);
}

#[test]
fn minted_uris_are_stored_as_annotations() {
    init_tracing();
    let p = build_page();
    let base = "http://example.org/resource/John_Smith";
    let mut minter = UriMinter::new(UriConfig {
        scope: GeneratorScope::Shared,
        ..UriConfig::default()
    });

    for id in [p.career, p.awards, p.career] {
        let node = p.arena.node(id);
        let uri = minter.mint(base, Some(node));
        if node.annotation(RESOURCE_URI).is_none() {
            node.set_annotation(RESOURCE_URI, uri);
        }
    }

    assert_eq!(
        p.arena.node(p.career).annotation(RESOURCE_URI).as_deref(),
        Some("http://example.org/resource/John_Smith__Career__1")
    );
    assert_eq!(
        p.arena.node(p.awards).annotation(RESOURCE_URI).as_deref(),
        Some("http://example.org/resource/John_Smith__Awards__1")
    );

    let again = minter.mint(base, Some(p.arena.node(p.career)));
    assert_eq!(again, "http://example.org/resource/John_Smith__Career__3");
}

#[test]
fn overlap_with_page_name_is_trimmed() {
    let p = build_page();
    let mut minter = UriMinter::default();
    let uri = minter.mint(
        "http://example.org/resource/John_Smith",
        Some(p.arena.node(p.career_text)),
    );
    assert_eq!(uri, "http://example.org/resource/John_Smith__worked_in__1");
}

#[test]
fn records_and_locators() {
    init_tracing();
    let p = build_page();
    let node = p.arena.node(p.career_text);

    node.add_extraction_record(RecordEntry::unbound("Unparsed date").with_error(Severity::Warning));
    node.add_extraction_record(RecordEntry::new(
        RecordSubject::Foreign {
            name: "John_Smith".into(),
        },
        "belongs elsewhere",
    ));

    let records = node.record_entries();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].subject,
        RecordSubject::Node { id: p.career_text }
    );

    assert_eq!(
        node.source_iri(),
        "http://en.wikipedia.org/wiki/John_Smith?oldid=99&ns=0"
    );
    assert_eq!(
        node.source_location_iri(),
        "http://en.wikipedia.org/wiki/John_Smith?oldid=99&ns=0#section=Career&relative-line=1&absolute-line=5"
    );
    assert_eq!(p.arena.node(p.page).id(), 4711);
}
