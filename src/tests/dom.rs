use super::Document;

#[test]
fn test_new_document_has_body() {
    let doc = Document::new();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.element(doc.body()).tag, "body");
    assert_eq!(doc.parent(doc.body()), None);
}

#[test]
fn test_append_child_links_both_ways() {
    let mut doc = Document::new();
    let body = doc.body();
    let list = doc.append_element(body, "UL");

    assert_eq!(doc.element(list).tag, "ul");
    assert_eq!(doc.parent(list), Some(body));
    assert_eq!(doc.element(body).children, vec![list]);
}

#[test]
fn test_append_child_moves_element() {
    let mut doc = Document::new();
    let body = doc.body();
    let first = doc.append_element(body, "ul");
    let second = doc.append_element(body, "ul");
    let item = doc.append_element(first, "li");

    doc.append_child(second, item);

    assert!(doc.element(first).children.is_empty());
    assert_eq!(doc.element(second).children, vec![item]);
    assert_eq!(doc.parent(item), Some(second));
}

#[test]
fn test_siblings_exclude_self_and_keep_order() {
    let mut doc = Document::new();
    let list = doc.append_element(doc.body(), "ul");
    let a = doc.append_element(list, "li");
    let b = doc.append_element(list, "li");
    let c = doc.append_element(list, "li");

    assert_eq!(doc.siblings(b), vec![a, c]);
    assert!(doc.siblings(doc.body()).is_empty());
}

#[test]
fn test_class_list_has_no_duplicates() {
    let mut doc = Document::new();
    let item = doc.append_element(doc.body(), "li");

    doc.add_class(item, "active");
    doc.add_class(item, "active");
    assert_eq!(doc.element(item).classes, vec!["active".to_string()]);

    doc.remove_class(item, "active");
    doc.remove_class(item, "active");
    assert!(!doc.has_class(item, "active"));
}

#[test]
fn test_elements_by_class_in_document_order() {
    let mut doc = Document::new();
    let body = doc.body();
    let list = doc.append_element(body, "ul");
    let first = doc.append_element(list, "li");
    let nested = doc.append_element(first, "ul");
    let inner = doc.append_element(nested, "li");
    let last = doc.append_element(list, "li");
    // Created after `last` but placed before it.
    let early = doc.create_element("li");
    doc.append_child(nested, early);
    for node in [first, inner, last, early] {
        doc.add_class(node, "page-scroll");
    }
    let detached = doc.create_element("a");
    doc.add_class(detached, "page-scroll");

    assert_eq!(
        doc.elements_by_class("page-scroll"),
        vec![first, inner, early, last]
    );
}

#[test]
fn test_get_element_by_id_ignores_detached() {
    let mut doc = Document::new();
    let detached = doc.create_element("section");
    doc.set_id(detached, "about");
    assert_eq!(doc.get_element_by_id("about"), None);

    let attached = doc.append_element(doc.body(), "section");
    doc.set_id(attached, "about");
    doc.set_offset_top(attached, 500);

    assert_eq!(doc.get_element_by_id("about"), Some(attached));
    assert_eq!(doc.element(attached).offset_top, 500);
}

#[test]
fn test_append_child_rejects_cycles() {
    let mut doc = Document::new();
    let body = doc.body();
    let outer = doc.append_element(body, "ul");
    let item = doc.append_element(outer, "li");
    let inner = doc.append_element(item, "ul");

    doc.append_child(inner, outer);
    doc.append_child(item, item);

    assert_eq!(doc.parent(outer), Some(body));
    assert_eq!(doc.element(item).children, vec![inner]);
    doc.add_class(inner, "page-scroll");
    assert_eq!(doc.elements_by_class("page-scroll"), vec![inner]);
}
