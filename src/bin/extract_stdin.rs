//! Simple CLI that reads rendered HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin [SOURCE_URL] [--x-article] [--pages] [--geometry JSON]`
//!
//! Without `--pages` the extracted document is printed. With `--pages` the
//! document is paginated (images are not fetched, so they are reported as
//! skipped) and the layout is printed instead.

use article_press::layout::ImageSize;
use article_press::{extract_html, paginate_document, Options, PageGeometry, PrintOptions};
use clap::Parser;
use std::collections::HashMap;
use std::io::{self, Read};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "extract_stdin")]
#[command(version)]
#[command(about = "Extract an article from HTML on stdin as JSON", long_about = None)]
struct Cli {
    /// URL the page was captured from, used to resolve relative links
    #[arg(value_name = "SOURCE_URL", default_value = "")]
    source_url: String,

    /// Use the X article preset (media-only images, large format query)
    #[arg(long)]
    x_article: bool,

    /// Print the paginated layout instead of the document
    #[arg(long)]
    pages: bool,

    /// Page geometry as JSON, e.g. '{"pageWidth":148,"pageHeight":210}'
    #[arg(long, value_name = "JSON", requires = "pages", value_parser = parse_geometry)]
    geometry: Option<PageGeometry>,
}

fn parse_geometry(raw: &str) -> Result<PageGeometry, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid geometry: {e}"))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        process::exit(1);
    }

    let options = if cli.x_article {
        Options::x_article()
    } else {
        Options::default()
    };
    let result = extract_html(&html, &cli.source_url, &options);
    for warning in &result.warnings {
        log::warn!("{warning}");
    }

    let json = if cli.pages {
        let geometry = cli.geometry.unwrap_or_default();
        let mut images: HashMap<String, ImageSize> = HashMap::new();
        let layout = paginate_document(&result.document, &geometry, &mut images, &PrintOptions::default());
        serde_json::to_string(&layout)
    } else {
        serde_json::to_string(&result.document)
    };

    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_flags_and_url() {
        let cli = Cli::try_parse_from(["extract_stdin", "https://x.com/a/status/1", "--x-article"]).unwrap();
        assert_eq!(cli.source_url, "https://x.com/a/status/1");
        assert!(cli.x_article);
        assert!(!cli.pages);
        assert!(cli.geometry.is_none());
    }

    #[test]
    fn cli_source_url_defaults_to_empty() {
        let cli = Cli::try_parse_from(["extract_stdin", "--pages"]).unwrap();
        assert_eq!(cli.source_url, "");
        assert!(cli.pages);
    }

    #[test]
    fn cli_parses_partial_geometry() {
        let cli = Cli::try_parse_from(["extract_stdin", "--pages", "--geometry", r#"{"margin": 10}"#]).unwrap();
        let geometry = cli.geometry.unwrap();
        assert_eq!(geometry.margin, 10.0);
        assert_eq!(geometry.page_width, PageGeometry::default().page_width);
    }

    #[test]
    fn cli_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["extract_stdin", "--pages", "--geometry"]).is_err());
        assert!(Cli::try_parse_from(["extract_stdin", "--pages", "--geometry", "{not json"]).is_err());
        assert!(Cli::try_parse_from(["extract_stdin", "--geometry", "{}"]).is_err());
        assert!(Cli::try_parse_from(["extract_stdin", "--unknown"]).is_err());
    }
}
