//! HTML parsing and DOM queries for imported pages.
//!
//! This module provides the [`Document`] and [`Element`] types used by the
//! importer and the page audit to query published HTML with CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use seoscore_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><meta name="description" content="Poradnik VAT"></head>
//!         <body><h1>VAT w 2026</h1><p class="lead">Wstęp</p></body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! assert_eq!(doc.meta_content("description"), Some("Poradnik VAT".to_string()));
//! assert_eq!(doc.select("p.lead").unwrap().len(), 1);
//! ```

use scraper::{Html, Selector};

use crate::{Result, SeoError};

/// Represents a parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is lenient: malformed markup is repaired the way browsers do,
    /// so this only fails for API symmetry with the other constructors.
    pub fn parse(html: &str) -> Result<Self> {
        Ok(Self { html: Html::parse_document(html) })
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SeoError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// First element matching any of the selectors, tried in order.
    pub fn first_of(&'_ self, selectors: &[&str]) -> Option<Element<'_>> {
        selectors.iter().find_map(|s| self.select(s).ok()?.into_iter().next())
    }

    /// Gets the trimmed content of the `<title>` element.
    pub fn title(&self) -> Option<String> {
        self.select("title").ok()?.first().map(|el| el.text().trim().to_string())
    }

    /// Gets the `content` of a `<meta name=…>` or `<meta property=…>` tag.
    pub fn meta_content(&self, name: &str) -> Option<String> {
        let selector = format!(r#"meta[name="{0}"], meta[property="{0}"]"#, name);
        self.select(&selector)
            .ok()?
            .iter()
            .find_map(|el| el.attr("content").map(|c| c.trim().to_string()))
    }
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the outer HTML of this element, including its own tags.
    pub fn outer_html(&self) -> String {
        self.element.html()
    }

    /// Concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Text nodes joined by single spaces, with whitespace collapsed.
    pub fn clean_text(&self) -> String {
        self.element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// True when any ancestor element has one of the given tag names.
    pub fn has_ancestor_in(&self, tags: &[&str]) -> bool {
        self.element
            .ancestors()
            .filter_map(|node| node.value().as_element())
            .any(|el| tags.contains(&el.name()))
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SeoError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = parse_selector(selector)?;
        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| SeoError::HtmlParseError(format!("Invalid selector: {}", e)))
}
