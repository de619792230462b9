use article_press::dom::Element;
use article_press::extractor::{build_blocks, extract_content};
use article_press::layout::{FragmentKind, ImageSize, PageGeometry, Paginator};
use article_press::{Block, Link, Options};
use std::collections::HashMap;

fn text_div(text: &str) -> Element {
    Element::new("div").with_text(text)
}

#[test]
fn scenario_a_duplicate_and_timestamp_dropped() {
    let article = Element::new("article")
        .with_child(text_div("Hello world, a long sentence."))
        .with_child(text_div("Hello world, a long sentence."))
        .with_child(text_div("3:45 PM"));

    let blocks = build_blocks(&article, "", &Options::default());
    assert_eq!(blocks, vec![Block::text("Hello world, a long sentence.")]);
}

#[test]
fn scenario_b_link_attached_to_text() {
    let article = Element::new("article").with_child(
        Element::new("p")
            .with_text("Please ")
            .with_child(Element::new("a").with_url("https://example.com/target").with_text("click here"))
            .with_text(" now"),
    );

    let blocks = build_blocks(&article, "", &Options::default());
    assert_eq!(
        blocks,
        vec![Block::Text {
            content: "Please click here now".to_string(),
            links: vec![Link {
                text: "click here".to_string(),
                url: "https://example.com/target".to_string(),
            }],
        }]
    );
}

#[test]
fn scenario_c_query_variants_collapse_to_first() {
    let article = Element::new("article")
        .with_child(Element::new("img").with_url("https://cdn.example.com/img.jpg?x=1"))
        .with_child(Element::new("img").with_url("https://cdn.example.com/img.jpg?x=2"));

    let blocks = build_blocks(&article, "", &Options::default());
    assert_eq!(blocks, vec![Block::image("https://cdn.example.com/img.jpg?x=1")]);
}

#[test]
fn scenario_d_fallback_tags() {
    let root = Element::new("html").with_child(
        Element::new("article").with_child(text_div("Nothing tagged in this body at all.")),
    );

    let result = extract_content(&root.into(), "", &Options::default());
    assert_eq!(result.document.tags, vec!["Twitter", "Article"]);
}

#[test]
fn scenario_e_tall_image_capped_and_moved_to_fresh_page() {
    let geometry = PageGeometry::default();
    let mut images: HashMap<String, ImageSize> =
        HashMap::from([("https://a.com/tall.jpg".to_string(), ImageSize::new(600, 4000))]);
    let blocks = vec![
        Block::text("A paragraph that occupies the top of the first page."),
        Block::image("https://a.com/tall.jpg"),
    ];

    let mut paginator = Paginator::new(&geometry);
    paginator.push_blocks(&blocks, &mut images);
    let layout = paginator.finish();

    assert_eq!(layout.pages.len(), 2);
    let image = &layout.pages[1].fragments[0];
    assert_eq!(image.kind, FragmentKind::Image);
    assert_eq!(image.height, geometry.usable_height());
    assert_eq!(image.width, geometry.usable_width());
    assert_eq!(image.y, geometry.margin);
}

#[test]
fn scenario_e_tall_image_on_empty_page_stays() {
    let geometry = PageGeometry::default();
    let mut images: HashMap<String, ImageSize> =
        HashMap::from([("https://a.com/tall.jpg".to_string(), ImageSize::new(600, 4000))]);

    let mut paginator = Paginator::new(&geometry);
    paginator.push_blocks(&[Block::image("https://a.com/tall.jpg")], &mut images);
    let layout = paginator.finish();

    assert_eq!(layout.pages.len(), 1);
    assert_eq!(layout.pages[0].fragments[0].height, geometry.usable_height());
}
