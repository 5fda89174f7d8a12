//! Page template view-model.
//!
//! A [`PageView`] parses a page template once, locates the named container
//! element and keeps a handle to it. The loader only mutates the page
//! through the [`Container`] trait; fragments are parsed in the container's
//! context, the way a browser parses assigned markup.

mod dom;
mod error;
mod subsite;

pub use error::PageError;
pub use subsite::prune_subsites;

use html5ever::QualName;
use markup5ever_rcdom::Handle;
use std::borrow::Cow;

/// Mutation surface for fragment content.
pub trait Container {
    /// Appends markup after the existing content.
    fn append_html(&mut self, html: &str);
    /// Replaces all existing content with `text`, as text.
    fn replace_text(&mut self, text: &str);
}

/// A page template bound to its container element.
#[derive(Debug)]
pub struct PageView {
    container_id: String,
    document: Handle,
    container: Handle,
    context: QualName,
}

impl PageView {
    /// Parses `html` and locates the element with `container_id`; fails if
    /// it is missing or cannot have content.
    pub fn bind(html: &str, container_id: &str) -> Result<Self, PageError> {
        let tree = dom::parse(html);
        let missing = || PageError::ContainerMissing {
            id: container_id.to_string(),
        };
        let container = dom::find_by_id(&tree.document, container_id).ok_or_else(missing)?;
        let context = dom::qual_name(&container).ok_or_else(missing)?;
        if dom::is_void(&context.local) {
            return Err(PageError::VoidContainer {
                id: container_id.to_string(),
                tag: context.local.to_string(),
            });
        }
        tracing::debug!("bound container #{} <{}>", container_id, &*context.local);

        Ok(Self {
            container_id: container_id.to_string(),
            document: tree.document,
            container,
            context,
        })
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Current inner markup of the container.
    pub fn content(&self) -> String {
        dom::inner_html(&self.container)
    }

    /// The whole document with the container's current content.
    pub fn render(&self) -> String {
        dom::inner_html(&self.document)
    }
}

impl Container for PageView {
    fn append_html(&mut self, html: &str) {
        for node in dom::parse_children(html, self.context.clone()) {
            dom::append_child(&self.container, node);
        }
    }

    fn replace_text(&mut self, text: &str) {
        dom::clear_children(&self.container);
        dom::append_child(&self.container, dom::text_node(text));
    }
}

/// Inner markup of a fragment's `<body>`, or the whole fragment if it has
/// none.
pub fn fragment_body(html: &str) -> Cow<'_, str> {
    if !declares_body(html) {
        return Cow::Borrowed(html);
    }
    let tree = dom::parse(html);
    match dom::find(&tree.document, &|n| dom::local_name(n) == Some("body")) {
        Some(body) => Cow::Owned(dom::inner_html(&body)),
        None => Cow::Borrowed(html),
    }
}

/// The parser always synthesizes a `<body>`, so an explicit one is looked
/// for in the source.
fn declares_body(html: &str) -> bool {
    let bytes = html.as_bytes();
    bytes.windows(5).enumerate().any(|(i, w)| {
        w.eq_ignore_ascii_case(b"<body")
            && match bytes.get(i + 5) {
                Some(b) => *b == b'>' || *b == b'/' || b.is_ascii_whitespace(),
                None => false,
            }
    })
}

/// Text of the element right after the one with `id`, as a copy button
/// pairs with the snippet next to it.
pub fn sibling_text(html: &str, id: &str) -> Result<String, PageError> {
    let tree = dom::parse(html);
    let element = dom::find_by_id(&tree.document, id).ok_or_else(|| PageError::ElementMissing {
        id: id.to_string(),
    })?;
    let sibling = dom::next_element_sibling(&element).ok_or_else(|| PageError::SiblingMissing {
        id: id.to_string(),
    })?;
    Ok(dom::text_content(&sibling))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = concat!(
        "<!DOCTYPE html><html><head><title>me</title></head><body>",
        "<nav>menu</nav>",
        "<div id=\"content\"><h1>Welcome</h1></div>",
        "<footer>bye</footer>",
        "</body></html>"
    );

    #[test]
    fn bind_locates_container() {
        let page = PageView::bind(TEMPLATE, "content").unwrap();
        assert_eq!(page.container_id(), "content");
        assert_eq!(page.content(), "<h1>Welcome</h1>");
        assert_eq!(page.render(), TEMPLATE);
    }

    #[test]
    fn missing_container_fails_fast() {
        let err = PageView::bind("<div id=\"main\"></div>", "content").unwrap_err();
        assert_eq!(
            err,
            PageError::ContainerMissing {
                id: "content".to_string()
            }
        );
    }

    #[test]
    fn void_container_rejected() {
        let err = PageView::bind("<hr id=\"content\">", "content").unwrap_err();
        assert_eq!(
            err,
            PageError::VoidContainer {
                id: "content".to_string(),
                tag: "hr".to_string()
            }
        );
    }

    #[test]
    fn self_closing_div_is_an_ordinary_container() {
        let mut page = PageView::bind("<div id=\"content\"/><p>after</p>", "content").unwrap();
        assert_eq!(page.content(), "<p>after</p>");
        page.append_html("<p>frag</p>");
        assert_eq!(page.content(), "<p>after</p><p>frag</p>");
    }

    #[test]
    fn append_lands_after_all_existing_content() {
        let mut page =
            PageView::bind("<div id=\"content\"><div/>inner</div>after</div>", "content").unwrap();
        page.append_html("<p>frag</p>");
        assert_eq!(page.content(), "<div>inner</div>after<p>frag</p>");
        assert!(page
            .render()
            .contains("<div id=\"content\"><div>inner</div>after<p>frag</p></div>"));
    }

    #[test]
    fn append_is_additive() {
        let mut page = PageView::bind(TEMPLATE, "content").unwrap();
        page.append_html("<p>one</p>");
        page.append_html("<p>two</p>");
        assert_eq!(page.content(), "<h1>Welcome</h1><p>one</p><p>two</p>");
        assert!(page
            .render()
            .contains("<div id=\"content\"><h1>Welcome</h1><p>one</p><p>two</p></div><footer>"));
    }

    #[test]
    fn append_parses_in_container_context() {
        let mut page =
            PageView::bind("<table><tbody id=\"content\"></tbody></table>", "content").unwrap();
        page.append_html("<tr><td>1</td></tr>");
        assert_eq!(page.content(), "<tr><td>1</td></tr>");
    }

    #[test]
    fn replace_text_overwrites_and_escapes() {
        let mut page = PageView::bind(TEMPLATE, "content").unwrap();
        page.replace_text("Page not found.");
        assert_eq!(page.content(), "Page not found.");
        page.replace_text("<b>&</b>");
        assert_eq!(page.content(), "&lt;b&gt;&amp;&lt;/b&gt;");
        page.append_html("<p>more</p>");
        assert_eq!(page.content(), "&lt;b&gt;&amp;&lt;/b&gt;<p>more</p>");
    }

    #[test]
    fn fragment_body_extracts_document_body() {
        let doc = "<!DOCTYPE html><html><head><title>x</title></head><body class=\"m\"><p>m</p></body></html>";
        assert_eq!(fragment_body(doc), "<p>m</p>");
        assert_eq!(fragment_body("<p>bare</p>"), "<p>bare</p>");
        assert_eq!(
            fragment_body("<style>p{}</style><p>bodyguard</p>"),
            "<style>p{}</style><p>bodyguard</p>"
        );
    }

    #[test]
    fn sibling_text_reads_adjacent_element() {
        let html = "<div><button id=\"copy\">Copy</button>\n<pre>X</pre></div>";
        assert_eq!(sibling_text(html, "copy").unwrap(), "X");
    }

    #[test]
    fn sibling_text_errors() {
        assert_eq!(
            sibling_text("<pre>X</pre>", "copy").unwrap_err(),
            PageError::ElementMissing {
                id: "copy".to_string()
            }
        );
        assert_eq!(
            sibling_text("<div><pre>X</pre><button id=\"copy\">Copy</button></div>", "copy")
                .unwrap_err(),
            PageError::SiblingMissing {
                id: "copy".to_string()
            }
        );
    }
}
