//! Tree walker.
//!
//! Yields accepted elements in depth-first pre-order. Skipped elements are
//! not yielded but their subtrees are still visited; only `SkipSubtree`
//! prunes. Accepted containers may nest, so a container and a container
//! inside it are both yielded. The resulting textual overlap is left to the
//! deduplicator.

use crate::dom::{Element, Node};

use super::classify::{classify, Classification, NodeKind};

/// An accepted element together with its classification.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub element: &'a Element,
    pub kind: NodeKind,
}

/// Lazy pre-order sequence of candidates below (and including) a root.
///
/// Walking the same tree twice yields the same sequence; each element is
/// visited at most once.
pub struct Walker<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Walker<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(el) = self.stack.pop() {
            let verdict = classify(el);
            if verdict == Classification::SkipSubtree {
                continue;
            }
            self.stack.extend(el.children.iter().rev().filter_map(Node::as_element));
            if let Classification::Accept(kind) = verdict {
                return Some(Candidate { element: el, kind });
            }
        }
        None
    }
}

/// Start a walk at `root`.
#[must_use]
pub fn walk(root: &Element) -> Walker<'_> {
    Walker { stack: vec![root] }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Element {
        Element::new("article")
            .with_child(Element::new("h2").with_text("Heading one"))
            .with_child(
                Element::new("div")
                    .with_child(Element::new("img").with_url("https://a.com/1.jpg"))
                    .with_child(
                        Element::new("div").with_child(
                            Element::new("span")
                                .with_text("Body ")
                                .with_child(Element::new("a").with_url("https://b.com").with_text("link")),
                        ),
                    ),
            )
            .with_child(Element::new("script").with_child(Element::new("span").with_text("hidden")))
    }

    #[test]
    fn test_walk_pre_order() {
        let tree = sample_tree();
        let kinds: Vec<_> = walk(&tree).map(|c| (c.element.tag.clone(), c.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("h2".to_string(), NodeKind::Heading(2)),
                ("img".to_string(), NodeKind::Image),
                // Inner div holds only a span, so it is a text container too
                ("div".to_string(), NodeKind::TextContainer),
                ("span".to_string(), NodeKind::TextContainer),
                ("a".to_string(), NodeKind::Anchor),
            ]
        );
    }

    #[test]
    fn test_walk_is_restartable() {
        let tree = sample_tree();
        let first: Vec<_> = walk(&tree).map(|c| std::ptr::from_ref(c.element)).collect();
        let second: Vec<_> = walk(&tree).map(|c| std::ptr::from_ref(c.element)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_visits_each_node_once() {
        let tree = sample_tree();
        let mut seen = std::collections::HashSet::new();
        for candidate in walk(&tree) {
            assert!(seen.insert(std::ptr::from_ref(candidate.element)));
        }
    }

    #[test]
    fn test_walk_handles_deep_trees() {
        let mut el = Element::new("span").with_text("deepest text here");
        for _ in 0..5_000 {
            el = Element::new("section").with_child(el);
        }
        assert_eq!(walk(&el).count(), 1);
        // Drop glue recurses once per level
        std::mem::forget(el);
    }
}
