use scraper::{ElementRef, Html, Node};

use super::{Document, NodeId};

/// Parse `markup` as a `<body>` fragment and copy the resulting nodes under
/// `parent`.
pub(super) fn append_markup(doc: &mut Document, parent: NodeId, markup: &str) {
    let fragment = Html::parse_fragment(markup);
    import_children(doc, parent, fragment.root_element());
}

fn import_children(doc: &mut Document, parent: NodeId, source: ElementRef<'_>) {
    for child in source.children() {
        let id = match child.value() {
            Node::Text(text) => doc.create_text(text),
            Node::Comment(comment) => doc.create_comment(comment),
            Node::Element(el) => {
                let attrs: Vec<(&str, &str)> = el.attrs().collect();
                doc.create_element(el.name(), &attrs)
            }
            _ => continue,
        };
        doc.append_child(parent, id);
        if let Some(element) = ElementRef::wrap(child) {
            import_children(doc, id, element);
        }
    }
}
