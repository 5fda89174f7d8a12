//! Inline subsite pages: every section ships in one document as a
//! `<subsite id="...">` element and only the selected ones are kept.

use super::dom;
use markup5ever_rcdom::Handle;

const SUBSITE_TAG: &str = "subsite";

/// Removes every `<subsite>` element whose id is not in `keep`.
///
/// Subsites nested inside a kept one are checked too; ones nested inside
/// a removed subsite go with it. Returns the pruned document and the number
/// of elements removed.
pub fn prune_subsites(html: &str, keep: &[&str]) -> (String, usize) {
    let tree = dom::parse(html);
    let removed = prune_children(&tree.document, keep);
    (dom::inner_html(&tree.document), removed)
}

fn prune_children(node: &Handle, keep: &[&str]) -> usize {
    let mut removed = 0;
    let children = node.children.take();
    let mut kept = Vec::with_capacity(children.len());

    for child in children {
        if dom::local_name(&child) == Some(SUBSITE_TAG) {
            let id = dom::attr(&child, "id");
            if !id.as_deref().is_some_and(|id| keep.contains(&id)) {
                tracing::debug!("removing subsite {:?}", id.as_deref().unwrap_or(""));
                child.parent.set(None);
                removed += 1;
                continue;
            }
        }
        removed += prune_children(&child, keep);
        kept.push(child);
    }

    *node.children.borrow_mut() = kept;
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = concat!(
        "<body>",
        "<subsite id=\"home\"><p>Home</p></subsite>",
        "<subsite id=\"music\"><p>Music</p></subsite>",
        "<subsite id=\"about\"><p>About</p></subsite>",
        "<footer>f</footer>",
        "</body>"
    );

    fn wrap(body: &str) -> String {
        format!("<html><head></head><body>{}</body></html>", body)
    }

    #[test]
    fn keeps_only_selected_subsite() {
        let (out, removed) = prune_subsites(PAGE, &["music"]);
        assert_eq!(removed, 2);
        assert_eq!(
            out,
            wrap("<subsite id=\"music\"><p>Music</p></subsite><footer>f</footer>")
        );
    }

    #[test]
    fn keeps_every_listed_subsite() {
        let (out, removed) = prune_subsites(PAGE, &["home", "music"]);
        assert_eq!(removed, 1);
        assert_eq!(
            out,
            wrap(concat!(
                "<subsite id=\"home\"><p>Home</p></subsite>",
                "<subsite id=\"music\"><p>Music</p></subsite>",
                "<footer>f</footer>"
            ))
        );
    }

    #[test]
    fn empty_keep_list_removes_all() {
        let (out, removed) = prune_subsites(PAGE, &[]);
        assert_eq!(removed, 3);
        assert_eq!(out, wrap("<footer>f</footer>"));
    }

    #[test]
    fn nested_subsites() {
        let html = concat!(
            "<subsite id=\"about\">a",
            "<subsite id=\"music\">m<subsite id=\"about\">lost</subsite></subsite>",
            "<subsite id=\"about\">again</subsite>",
            "</subsite>"
        );
        let (out, removed) = prune_subsites(html, &["about"]);
        assert_eq!(removed, 1);
        assert_eq!(
            out,
            wrap("<subsite id=\"about\">a<subsite id=\"about\">again</subsite></subsite>")
        );
    }

    #[test]
    fn subsite_without_id_is_removed() {
        let (out, removed) = prune_subsites("<subsite>x</subsite><p>y</p>", &["home"]);
        assert_eq!(removed, 1);
        assert_eq!(out, wrap("<p>y</p>"));
    }

    #[test]
    fn page_without_subsites_is_untouched() {
        let (out, removed) = prune_subsites("<p>plain</p>", &["home"]);
        assert_eq!(removed, 0);
        assert_eq!(out, wrap("<p>plain</p>"));
    }
}
