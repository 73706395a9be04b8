//! On-page SEO audit of a published URL.
//!
//! The audit collects technical page signals (meta tags, heading outline,
//! images, links, structured data) and scores the article rebuilt from the
//! page by [`import_html`](crate::import::import_html).

use serde::{Deserialize, Serialize};
use url::Url;

use crate::document::ArticleDocument;
use crate::import::{ImportConfig, import_html};
use crate::parse::{Document, Element};
use crate::preprocess::{PreprocessConfig, preprocess_html};
use crate::report::ScoreReport;
use crate::scorer::compute_seo_score;
use crate::{Result, SeoError};

#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_url};

const MAX_H1: usize = 5;
const MAX_H2: usize = 10;

/// Technical SEO signals read from a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSignals {
    /// Content of the `<title>` element.
    pub title: Option<String>,
    pub meta_description: Option<String>,
    /// First five `h1` texts.
    pub h1: Vec<String>,
    /// First ten `h2` texts.
    pub h2: Vec<String>,
    /// Words of visible body text, without navigation and page chrome.
    pub word_count: usize,
    pub images_with_alt: usize,
    pub images_without_alt: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub has_ssl: bool,
    pub canonical: Option<String>,
    pub robots: Option<String>,
    /// A JSON-LD structured data block is present.
    pub has_schema: bool,
    pub has_open_graph: bool,
}

impl PageSignals {
    /// Reads the signals of a page published at `url`.
    pub fn from_html(html: &str, url: &Url) -> Result<Self> {
        let raw = Document::parse(html)?;

        let h1 = heading_texts(&raw, "h1", MAX_H1)?;
        let h2 = heading_texts(&raw, "h2", MAX_H2)?;
        let canonical = raw.select(r#"link[rel="canonical"]"#)?.iter().find_map(|l| l.attr("href").map(str::to_string));
        let has_schema = !raw.select(r#"script[type="application/ld+json"]"#)?.is_empty();
        let has_open_graph = !raw.select(r#"meta[property^="og:"]"#)?.is_empty();

        let visible = Document::parse(&preprocess_html(html, &PreprocessConfig::default()))?;
        let body = visible.first_of(&["body"]);
        let word_count = body.as_ref().map(|b| crate::text::word_count(&b.clean_text())).unwrap_or(0);

        let images = visible.select("img")?;
        let images_with_alt = images.iter().filter(|img| img.attr("alt").is_some_and(|alt| !alt.trim().is_empty())).count();

        let links = visible.select("a[href]")?;
        let internal_links = links.iter().filter(|link| is_internal(link, url)).count();

        Ok(Self {
            title: raw.title().filter(|t| !t.is_empty()),
            meta_description: raw.meta_content("description"),
            h1,
            h2,
            word_count,
            images_with_alt,
            images_without_alt: images.len() - images_with_alt,
            internal_links,
            external_links: links.len() - internal_links,
            has_ssl: url.scheme() == "https",
            canonical,
            robots: raw.meta_content("robots"),
            has_schema,
            has_open_graph,
        })
    }

    pub fn images_total(&self) -> usize {
        self.images_with_alt + self.images_without_alt
    }
}

fn heading_texts(doc: &Document, tag: &str, limit: usize) -> Result<Vec<String>> {
    Ok(doc.select(tag)?.iter().map(Element::clean_text).take(limit).collect())
}

/// Links without a host or to the page's own host are internal.
fn is_internal(link: &Element<'_>, page: &Url) -> bool {
    let href = link.attr("href").unwrap_or_default();
    match Url::parse(href) {
        Ok(target) => match (target.host_str(), page.host_str()) {
            (Some(host), Some(own)) => strip_www(host).eq_ignore_ascii_case(strip_www(own)),
            _ => true,
        },
        Err(_) => true,
    }
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Page signals together with the score of the article found on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub url: String,
    pub signals: PageSignals,
    pub score: ScoreReport,
}

/// Audits already downloaded HTML.
///
/// A page without any importable article still gets its signals; it is
/// scored as an empty article.
pub fn audit_html<S: AsRef<str>>(
    html: &str, url: &Url, primary_keyword: &str, secondary_keywords: &[S],
) -> Result<AuditReport> {
    let signals = PageSignals::from_html(html, url)?;

    let article = match import_html(html, &ImportConfig::with_base_url(url.clone())) {
        Ok(article) => article,
        Err(SeoError::NoContent) => {
            tracing::debug!(%url, "no article content found, scoring an empty document");
            ArticleDocument::default()
        }
        Err(e) => return Err(e),
    };

    let score = compute_seo_score(&article, primary_keyword, secondary_keywords);
    tracing::debug!(%url, percentage = score.percentage, word_count = signals.word_count, "audited page");

    Ok(AuditReport { url: url.to_string(), signals, score })
}

/// Fetches a page and audits it.
#[cfg(feature = "fetch")]
pub async fn fetch_and_audit<S: AsRef<str>>(
    url: &str, primary_keyword: &str, secondary_keywords: &[S], config: &FetchConfig,
) -> Result<AuditReport> {
    let page_url = crate::fetch::parse_page_url(url)?;
    let html = fetch_url(url, config).await?;
    audit_html(&html, &page_url, primary_keyword, secondary_keywords)
}
