//! html5ever tree helpers shared by the page view, subsite pruning and the
//! copy button.

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, parse_fragment, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::RefCell;
use std::rc::Rc;

/// Elements that never have content.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub(crate) fn parse(html: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(html)
}

/// Parses `html` the way it would be parsed as content of an element named
/// `context`, and returns the top-level nodes detached from any parent.
pub(crate) fn parse_children(html: &str, context: QualName) -> Vec<Handle> {
    let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new()).one(html);
    // Fragment parsing hangs the nodes off a synthetic <html> root.
    let root = dom.document.children.borrow().first().cloned();
    let Some(root) = root else {
        return Vec::new();
    };
    let nodes = root.children.take();
    for node in &nodes {
        node.parent.set(None);
    }
    nodes
}

pub(crate) fn text_node(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(text.into()),
    })
}

pub(crate) fn append_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Detaches every child of `parent`.
pub(crate) fn clear_children(parent: &Handle) {
    for child in parent.children.take() {
        child.parent.set(None);
    }
}

pub(crate) fn qual_name(node: &Handle) -> Option<QualName> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.clone()),
        _ => None,
    }
}

pub(crate) fn local_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub(crate) fn attr(node: &Handle, key: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == key)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// First node in document order matching `pred`.
pub(crate) fn find(node: &Handle, pred: &dyn Fn(&Handle) -> bool) -> Option<Handle> {
    if pred(node) {
        return Some(node.clone());
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find(child, pred) {
            return Some(found);
        }
    }
    None
}

pub(crate) fn find_by_id(root: &Handle, id: &str) -> Option<Handle> {
    find(root, &|n| attr(n, "id").as_deref() == Some(id))
}

/// The next element after `node` under the same parent. Text and comments
/// in between are skipped.
pub(crate) fn next_element_sibling(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take()?;
    node.parent.set(Some(weak.clone()));
    let parent = weak.upgrade()?;

    let children = parent.children.borrow();
    let pos = children.iter().position(|c| Rc::ptr_eq(c, node))?;
    let next = children[pos + 1..]
        .iter()
        .find(|c| matches!(c.data, NodeData::Element { .. }))
        .cloned();
    next
}

/// Concatenated text of `node` and its descendants.
pub(crate) fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// Serialized children of `node`. Also works on the document node.
pub(crate) fn inner_html(node: &Handle) -> String {
    let mut out = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(qual_name(node)),
        ..Default::default()
    };
    let handle = SerializableHandle::from(node.clone());
    // Only the writer can fail, and a Vec never does.
    if let Err(e) = serialize(&mut out, &handle, opts) {
        tracing::warn!("html serialization stopped early: {}", e);
    }
    String::from_utf8_lossy(&out).into_owned()
}
