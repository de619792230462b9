//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs consulted by the classifier
//! - `classify`: Node classifier (content carrier or not)
//! - `walker`: Pre-order walk yielding accepted candidates
//! - `filters`: Ordered table of named noise rules
//! - `state`: Deduplicator owning the seen-text and seen-image sets
//! - `builder`: Block builder (links, heading vs. text)
//! - `assembler`: Summary, tags and cover image
//! - `pipeline`: Orchestration of the stages above
//!
//! # Usage
//!
//! ```rust
//! use article_press::dom::Element;
//! use article_press::extractor::{build_blocks, walk, NodeKind};
//! use article_press::Options;
//!
//! let article = Element::new("article")
//!     .with_child(Element::new("p").with_text("A paragraph long enough to keep."));
//!
//! assert_eq!(walk(&article).filter(|c| c.kind == NodeKind::TextContainer).count(), 1);
//! assert_eq!(build_blocks(&article, "", &Options::default()).len(), 1);
//! ```

pub mod assembler;
pub mod builder;
pub mod classify;
pub mod filters;
pub mod pipeline;
pub mod state;
pub mod tags;
pub mod walker;

pub use assembler::{assemble, FALLBACK_TAGS};
pub use classify::{classify, Classification, NodeKind};
pub use filters::{NoiseRule, Verdict};
pub use pipeline::{build_blocks, extract_content, find_article_container};
pub use state::{dedupe_blocks, Deduplicator};
pub use walker::{walk, Candidate};
