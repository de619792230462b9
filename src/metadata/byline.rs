//! Author byline resolution.

use crate::dom::Element;
use crate::Options;

/// Author details found on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Byline {
    pub name: Option<String>,
    pub handle: Option<String>,
    pub avatar: Option<String>,
}

/// Find the author name, handle and avatar.
///
/// Name and handle come from the spans of the first element under `root`
/// whose role is `opts.author_role`: the last span starting with `@` is the
/// handle, the first other span longer than one character is the name. The
/// avatar is the first image whose URL contains `opts.avatar_marker`, looked
/// up inside `container` when one is given and under `root` otherwise.
#[must_use]
pub fn extract_byline(root: &Element, container: Option<&Element>, opts: &Options) -> Byline {
    let mut byline = Byline::default();

    if let Some(author) = root.find(|el| el.has_role(&opts.author_role)) {
        for span in author.self_and_descendants().filter(|el| el.is("span")) {
            let text = span.normalized_text();
            if text.starts_with('@') {
                if text.len() > 1 {
                    byline.handle = Some(text);
                }
            } else if byline.name.is_none() && text.chars().count() > 1 {
                byline.name = Some(text);
            }
        }
    }

    if !opts.avatar_marker.is_empty() {
        byline.avatar = container
            .unwrap_or(root)
            .find(|el| {
                el.is("img")
                    && el
                        .url
                        .as_deref()
                        .is_some_and(|u| u.contains(opts.avatar_marker.as_str()))
            })
            .and_then(|el| el.url.clone());
    }

    byline
}
