//! Import of published HTML pages into [`ArticleDocument`]s.
//!
//! Existing blog posts were not generated through the article pipeline, so
//! they carry no structured sections. The importer rebuilds that structure
//! from the markup: `h2` headings open sections, `h3` headings open
//! subsections and every other top-level block is appended to whatever is
//! open. Text before the first `h2` belongs to no section and is dropped.
//!
//! # Example
//!
//! ```rust
//! use seoscore_core::import::{ImportConfig, import_html};
//!
//! let html = r#"<h1>Jak rozliczać VAT</h1><h2 id="stawki">Stawki</h2><p>23%, 8% i 5%.</p>"#;
//! let article = import_html(html, &ImportConfig::default()).unwrap();
//!
//! assert_eq!(article.title, "Jak rozliczać VAT");
//! assert_eq!(article.sections[0].anchor, "stawki");
//! ```

use std::collections::HashSet;
use url::Url;

use crate::document::{ArticleDocument, FaqItem, InternalLinkSuggestion, Section, Source, SourceType, Subsection, TocEntry};
use crate::parse::{Document, Element};
use crate::preprocess::{PreprocessConfig, preprocess_html};
use crate::scorer::is_credible_url;
use crate::{Result, SeoError};

/// Elements walked in document order when rebuilding sections.
const BLOCK_TAGS: [&str; 9] = ["h2", "h3", "p", "ul", "ol", "table", "blockquote", "pre", "figure"];

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Lowercased `h2` texts that start the FAQ part of an article.
const FAQ_HEADINGS: [&str; 3] = ["faq", "najczęściej zadawane pytania", "pytania i odpowiedzi"];

/// Reason attached to internal links found on the page.
pub const EXISTING_LINK_REASON: &str = "istniejący link";

/// Configuration for HTML import
#[derive(Debug, Clone, Default)]
pub struct ImportConfig {
    /// Address the page was published at. Used to resolve relative links
    /// and to tell internal links from external sources.
    pub base_url: Option<Url>,
}

impl ImportConfig {
    pub fn with_base_url(base_url: Url) -> Self {
        Self { base_url: Some(base_url) }
    }
}

/// Where the block walk currently appends content.
enum Mode {
    Preamble,
    Section,
    Faq { pending: Option<FaqItem> },
}

/// Rebuilds an article document from a published HTML page.
///
/// # Errors
///
/// Returns [`SeoError::NoContent`] when the page has neither a title nor any
/// section or FAQ entry.
pub fn import_html(html: &str, config: &ImportConfig) -> Result<ArticleDocument> {
    let raw = Document::parse(html)?;

    let title = raw
        .select("h1")?
        .iter()
        .map(Element::clean_text)
        .find(|t| !t.is_empty())
        .or_else(|| raw.title())
        .unwrap_or_default();
    let meta_description = raw.meta_content("description").unwrap_or_default();
    let toc = table_of_contents(&raw)?;

    let cleaned = preprocess_html(html, &PreprocessConfig { base_url: config.base_url.clone(), ..Default::default() });
    let doc = Document::parse(&cleaned)?;
    let root = doc.first_of(&["article", "main", "body"]).ok_or(SeoError::NoContent)?;

    let (sections, faq) = walk_blocks(&root)?;
    let (sources, internal_link_suggestions) = classify_links(&root, config.base_url.as_ref())?;

    if title.is_empty() && sections.is_empty() && faq.is_empty() {
        return Err(SeoError::NoContent);
    }

    tracing::debug!(
        sections = sections.len(),
        faq = faq.len(),
        toc = toc.len(),
        sources = sources.len(),
        internal_links = internal_link_suggestions.len(),
        "imported article"
    );

    Ok(ArticleDocument { title, meta_description, sections, faq, toc, sources, internal_link_suggestions })
}

fn walk_blocks(root: &Element<'_>) -> Result<(Vec<Section>, Vec<FaqItem>)> {
    let mut sections: Vec<Section> = Vec::new();
    let mut faq: Vec<FaqItem> = Vec::new();
    let mut mode = Mode::Preamble;

    let blocks = root.select(&BLOCK_TAGS.join(", "))?;
    for block in blocks.iter().filter(|b| !b.has_ancestor_in(&BLOCK_TAGS)) {
        match block.tag_name().as_str() {
            "h2" => {
                if let Mode::Faq { pending: Some(item) } = std::mem::replace(&mut mode, Mode::Preamble) {
                    push_faq_item(&mut faq, item);
                }
                let heading = block.clean_text();
                if is_faq_heading(&heading) {
                    mode = Mode::Faq { pending: None };
                } else {
                    let anchor = anchor_for(block, &heading);
                    sections.push(Section { heading, anchor, ..Default::default() });
                    mode = Mode::Section;
                }
            }
            "h3" => match &mut mode {
                Mode::Faq { pending } => {
                    if let Some(item) = pending.take() {
                        push_faq_item(&mut faq, item);
                    }
                    *pending = Some(FaqItem { question: block.clean_text(), answer: String::new() });
                }
                Mode::Section => {
                    if let Some(section) = sections.last_mut() {
                        let heading = block.clean_text();
                        let anchor = anchor_for(block, &heading);
                        section.subsections.push(Subsection { heading, anchor, content: String::new() });
                    }
                }
                Mode::Preamble => tracing::debug!("skipping h3 before the first section"),
            },
            _ => match &mut mode {
                Mode::Faq { pending: Some(item) } => append(&mut item.answer, &block.clean_text(), " "),
                Mode::Faq { pending: None } | Mode::Preamble => {}
                Mode::Section => {
                    if let Some(section) = sections.last_mut() {
                        let target = match section.subsections.last_mut() {
                            Some(sub) => &mut sub.content,
                            None => &mut section.content,
                        };
                        append(target, &block.outer_html(), "\n");
                    }
                }
            },
        }
    }

    if let Mode::Faq { pending: Some(item) } = mode {
        push_faq_item(&mut faq, item);
    }

    Ok((sections, faq))
}

fn push_faq_item(faq: &mut Vec<FaqItem>, item: FaqItem) {
    if !item.question.is_empty() {
        faq.push(item);
    }
}

fn append(target: &mut String, piece: &str, separator: &str) {
    if piece.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push_str(separator);
    }
    target.push_str(piece);
}

fn is_faq_heading(heading: &str) -> bool {
    let lower = heading.trim().trim_end_matches(':').to_lowercase();
    FAQ_HEADINGS.contains(&lower.as_str())
}

fn anchor_for(heading: &Element<'_>, text: &str) -> String {
    match heading.attr("id").map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => slugify(text),
    }
}

/// In-page links outside headings, deduplicated by anchor.
fn table_of_contents(doc: &Document) -> Result<Vec<TocEntry>> {
    let mut seen = HashSet::new();
    let mut toc = Vec::new();

    for link in doc.select(r##"a[href^="#"]"##)? {
        if link.has_ancestor_in(&HEADING_TAGS) {
            continue;
        }
        let anchor = link.attr("href").unwrap_or_default().trim_start_matches('#').trim();
        let label = link.clean_text();
        if anchor.is_empty() || label.is_empty() || !seen.insert(anchor.to_string()) {
            continue;
        }
        toc.push(TocEntry { label, anchor: anchor.to_string() });
    }

    Ok(toc)
}

/// Splits the links of the content into cited sources and internal links.
fn classify_links(root: &Element<'_>, base_url: Option<&Url>) -> Result<(Vec<Source>, Vec<InternalLinkSuggestion>)> {
    let page_host = base_url.and_then(Url::host_str).map(normalize_host);
    let mut sources: Vec<Source> = Vec::new();
    let mut internal: Vec<InternalLinkSuggestion> = Vec::new();

    for link in root.select("a[href]")? {
        let href = link.attr("href").unwrap_or_default().trim();
        if href.is_empty() || href.starts_with('#') || is_non_page_scheme(href) {
            continue;
        }
        let text = link.clean_text();

        let target = match Url::parse(href) {
            Ok(url) => url,
            Err(_) => {
                match base_url.and_then(|base| base.join(href).ok()) {
                    Some(url) => url,
                    None => {
                        push_internal(&mut internal, text, href.to_string());
                        continue;
                    }
                }
            }
        };

        if !matches!(target.scheme(), "http" | "https") {
            continue;
        }

        let same_host = match (&page_host, target.host_str()) {
            (Some(page), Some(host)) => *page == normalize_host(host),
            _ => false,
        };

        if same_host {
            push_internal(&mut internal, text, target.path().to_string());
        } else if !sources.iter().any(|s| s.url == target.as_str()) {
            let kind = if is_credible_url(target.as_str()) { SourceType::Official } else { SourceType::Expert };
            let name = if text.is_empty() { target.host_str().unwrap_or_default().to_string() } else { text };
            sources.push(Source { name, url: target.to_string(), kind });
        }
    }

    Ok((sources, internal))
}

fn push_internal(internal: &mut Vec<InternalLinkSuggestion>, anchor_text: String, target_topic: String) {
    if internal.iter().any(|l| l.target_topic == target_topic) {
        return;
    }
    internal.push(InternalLinkSuggestion { anchor_text, target_topic, reason: EXISTING_LINK_REASON.to_string() });
}

fn is_non_page_scheme(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    ["mailto:", "tel:", "javascript:", "data:"].iter().any(|scheme| lower.starts_with(scheme))
}

fn normalize_host(host: &str) -> String {
    let host = host.to_ascii_lowercase();
    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}

/// Turns a heading into a URL fragment.
///
/// Polish letters are folded to ASCII and every other run of
/// non-alphanumeric characters becomes a single `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        let folded = match c {
            'ą' => 'a',
            'ć' => 'c',
            'ę' => 'e',
            'ł' => 'l',
            'ń' => 'n',
            'ó' => 'o',
            'ś' => 's',
            'ź' | 'ż' => 'z',
            other => other,
        };
        if folded.is_ascii_alphanumeric() {
            slug.push(folded);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
