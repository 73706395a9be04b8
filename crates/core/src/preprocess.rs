//! HTML cleanup applied before a published page is imported.
//!
//! Page chrome (navigation, headers, footers, sidebars) and non-content tags
//! are dropped so that only the article body reaches the importer.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;

/// Tags whose whole subtree never carries article text.
const NON_CONTENT_TAGS: [&str; 6] = ["script", "style", "noscript", "iframe", "svg", "canvas"];

/// Layout elements that wrap navigation rather than content.
const CHROME_TAGS: [&str; 4] = ["nav", "footer", "header", "aside"];

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"));

static HIDDEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(display\s*:\s*none|visibility\s*:\s*hidden)").expect("valid hidden style pattern")
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Configuration for HTML preprocessing
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Whether to remove script, style, noscript, iframe, svg and canvas tags
    pub remove_non_content: bool,
    /// Whether to remove nav, header, footer and aside elements
    pub remove_chrome: bool,
    /// Whether to remove elements hidden with inline styles
    pub remove_hidden: bool,
    /// Base URL for converting relative links to absolute ones
    pub base_url: Option<Url>,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { remove_non_content: true, remove_chrome: true, remove_hidden: true, base_url: None }
    }
}

/// Preprocess HTML by removing unwanted elements and normalizing whitespace
pub fn preprocess_html(html: &str, config: &PreprocessConfig) -> String {
    let mut tags: Vec<&str> = Vec::new();
    if config.remove_non_content {
        tags.extend(NON_CONTENT_TAGS);
    }
    if config.remove_chrome {
        tags.extend(CHROME_TAGS);
    }

    let mut processed = if tags.is_empty() { html.to_string() } else { remove_tags(html, &tags) };

    processed = COMMENT_RE.replace_all(&processed, "").into_owned();

    if config.remove_hidden {
        processed = remove_hidden_elements(&processed);
    }

    if let Some(base_url) = &config.base_url {
        processed = convert_relative_urls(&processed, base_url);
    }

    WHITESPACE_RE.replace_all(&processed, " ").into_owned()
}

/// Runs a lol_html rewrite, falling back to the input when the rewriter fails.
fn rewrite<'h>(
    html: &str, handlers: Vec<(Cow<'h, lol_html::Selector>, lol_html::ElementContentHandlers<'h>)>,
) -> String {
    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings { element_content_handlers: handlers, ..Default::default() },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if rewriter.write(html.as_bytes()).is_err() {
        return html.to_string();
    }

    if rewriter.end().is_err() {
        return html.to_string();
    }

    if output.is_empty() { html.to_string() } else { output }
}

/// Remove the listed tags together with their content
fn remove_tags(html: &str, tags: &[&str]) -> String {
    let handlers = tags
        .iter()
        .map(|tag| {
            lol_html::element!(*tag, |el| {
                el.remove();
                Ok(())
            })
        })
        .collect();

    rewrite(html, handlers)
}

/// Remove elements with display:none or visibility:hidden styles
fn remove_hidden_elements(html: &str) -> String {
    rewrite(
        html,
        vec![lol_html::element!("*", |el| {
            if let Some(style) = el.get_attribute("style")
                && HIDDEN_RE.is_match(&style)
            {
                el.remove();
            }
            Ok(())
        })],
    )
}

/// Convert relative link and image URLs to absolute URLs
pub fn convert_relative_urls(html: &str, base_url: &Url) -> String {
    rewrite(
        html,
        vec![
            lol_html::element!("a[href]", |el| {
                if let Some(href) = el.get_attribute("href")
                    && !href.starts_with('#')
                    && let Ok(absolute) = base_url.join(&href)
                {
                    el.set_attribute("href", absolute.as_str()).ok();
                }
                Ok(())
            }),
            lol_html::element!("img[src]", |el| {
                if let Some(src) = el.get_attribute("src")
                    && let Ok(absolute) = base_url.join(&src)
                {
                    el.set_attribute("src", absolute.as_str()).ok();
                }
                Ok(())
            }),
        ],
    )
}
