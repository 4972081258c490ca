//! Positional patching of a displayed region.
//!
//! New markup is parsed into a detached fragment and both sides are
//! flattened into their descendant elements in document order. Pairs at the
//! same index are compared and only differing text and attributes are
//! written back. Alignment is purely positional, so the element count of a
//! region must not change between patches; a shape change has to go
//! through a full render.
//!
//! Text is only copied from a new element whose first child is non-blank
//! text. An element that becomes empty (`<div>200</div>` to `<div></div>`)
//! keeps its old text.

use log::{debug, warn};

use crate::dom::{Document, NodeId, NodeKind};

/// What a patch changed in the displayed tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchSummary {
    pub compared: usize,
    pub text_updates: usize,
    pub attribute_updates: usize,
}

impl PatchSummary {
    pub fn is_noop(&self) -> bool {
        self.text_updates == 0 && self.attribute_updates == 0
    }
}

/// Patch the children of `container` towards `markup`.
pub fn patch(doc: &mut Document, container: NodeId, markup: &str) -> PatchSummary {
    let fresh = Document::parse_fragment(markup);
    let new_elements = fresh.descendant_elements(fresh.root());
    let cur_elements = doc.descendant_elements(container);

    if new_elements.len() != cur_elements.len() {
        warn!(
            "Region shape changed ({} displayed, {} new elements); patch will misalign",
            cur_elements.len(),
            new_elements.len()
        );
    }

    let mut summary = PatchSummary::default();
    for (i, &new_el) in new_elements.iter().enumerate() {
        let Some(&cur_el) = cur_elements.get(i) else {
            break;
        };
        // Replaced by an earlier text update of one of its ancestors
        if !doc.contains(cur_el) {
            continue;
        }
        summary.compared += 1;

        if fresh.is_equal_node(new_el, doc, cur_el) {
            continue;
        }

        if has_leading_text(&fresh, new_el) {
            doc.set_text_content(cur_el, &fresh.text_content(new_el));
            summary.text_updates += 1;
        }

        if let Some(el) = fresh.element(new_el) {
            for (name, value) in &el.attrs {
                doc.set_attribute(cur_el, name, value);
                summary.attribute_updates += 1;
            }
        }
    }

    debug!("{:?}", summary);
    summary
}

/// The first child is a text node with something other than whitespace.
fn has_leading_text(doc: &Document, id: NodeId) -> bool {
    doc.first_child(id)
        .and_then(|child| match doc.kind(child) {
            Some(NodeKind::Text(text)) => Some(!text.trim().is_empty()),
            _ => None,
        })
        .unwrap_or(false)
}
