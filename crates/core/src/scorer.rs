//! Rule-based SEO scoring of article documents.
//!
//! [`compute_seo_score`] rates an article on ten independent dimensions whose
//! weights add up to 100 points and collects a Polish recommendation for every
//! check that fails. The thresholds below are the whole rubric: existing
//! dashboards and stored snapshots depend on them, so they are fixed.
//!
//! # Example
//!
//! ```rust
//! use seoscore_core::{ArticleDocument, compute_seo_score};
//!
//! let article = ArticleDocument { title: "Jak rozliczać VAT — kompletny przewodnik 2026".into(), ..Default::default() };
//! let report = compute_seo_score(&article, "VAT", &["JPK"]);
//!
//! assert_eq!(report.breakdown.title.score, 15);
//! assert!(report.needs_improvement());
//! ```

use std::collections::HashSet;

use crate::document::{ArticleDocument, FaqItem, Source};
use crate::report::{Breakdown, Dimension, DimensionScore, ScoreReport};
use crate::text::{average_sentence_length, char_len, count_occurrences, leading_words, strip_tags, word_count};

/// Domains of Polish government and public institutions treated as credible sources.
pub const CREDIBLE_DOMAINS: [&str; 9] = [
    ".gov.pl",
    "sejm.gov.pl",
    "podatki.gov.pl",
    "isap.sejm.gov.pl",
    "pip.gov.pl",
    "zus.pl",
    "gus.gov.pl",
    "nbp.pl",
    "mf.gov.pl",
];

/// Number of leading words in which the primary keyword should appear.
const LEADING_WORDS: usize = 150;

/// Lowercased text and keywords shared by the content based checks.
struct ScoringInput<'a> {
    article: &'a ArticleDocument,
    keyword: String,
    secondary: Vec<String>,
    all_text: String,
    text_lower: String,
    word_count: usize,
}

impl<'a> ScoringInput<'a> {
    fn new<S: AsRef<str>>(article: &'a ArticleDocument, primary_keyword: &str, secondary_keywords: &[S]) -> Self {
        let all_text = article.content_blocks().fold(String::new(), |mut acc, html| {
            acc.push(' ');
            acc.push_str(&strip_tags(html));
            acc
        });
        let text_lower = all_text.to_lowercase();
        let word_count = word_count(&all_text);

        let secondary = secondary_keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self { article, keyword: primary_keyword.trim().to_lowercase(), secondary, all_text, text_lower, word_count }
    }

    /// Case-insensitive test for the primary keyword. A blank keyword never matches.
    fn has_keyword(&self, haystack: &str) -> bool {
        !self.keyword.is_empty() && haystack.to_lowercase().contains(&self.keyword)
    }
}

/// Computes the composite SEO score of an article.
///
/// The function is pure and never fails: missing or empty fields score zero
/// for their dimension and add a recommendation.
pub fn compute_seo_score<S: AsRef<str>>(
    article: &ArticleDocument, primary_keyword: &str, secondary_keywords: &[S],
) -> ScoreReport {
    let input = ScoringInput::new(article, primary_keyword, secondary_keywords);
    let mut recs = Vec::new();

    let breakdown = Breakdown {
        title: score_title(&input, &mut recs),
        meta_description: score_meta_description(&input, &mut recs),
        content_length: score_content_length(&input, &mut recs),
        headings: score_headings(&input, &mut recs),
        keywords: score_keywords(&input, &mut recs),
        toc: score_toc(&input, &mut recs),
        faq: score_faq(&article.faq, &mut recs),
        internal_links: score_internal_links(article.internal_link_suggestions.len(), &mut recs),
        sources: score_sources(&article.sources, &mut recs),
        readability: score_readability(&input.all_text, &mut recs),
    };

    let faq_words: usize = article.faq.iter().map(|f| word_count(&f.question) + word_count(&f.answer)).sum();

    ScoreReport::new(breakdown, recs, input.word_count, input.word_count + faq_words)
}

fn score_title(input: &ScoringInput<'_>, recs: &mut Vec<String>) -> DimensionScore {
    let title = &input.article.title;
    let len = char_len(title);
    let mut score = 0;

    if (30..=70).contains(&len) {
        score += 5;
    } else if len > 0 {
        score += 2;
        recs.push(format!("Tytuł powinien mieć 30-70 znaków (obecnie: {})", len));
    } else {
        recs.push("Brak tytułu artykułu".to_string());
    }

    if input.has_keyword(title) {
        score += 5;
    } else {
        recs.push("Tytuł nie zawiera słowa kluczowego głównego".to_string());
    }

    if len > 0 {
        score += 5;
    }

    DimensionScore::new(Dimension::Title, score, "Tytuł artykułu")
}

fn score_meta_description(input: &ScoringInput<'_>, recs: &mut Vec<String>) -> DimensionScore {
    let meta = &input.article.meta_description;
    let len = char_len(meta);
    let mut score = 0;

    if (120..=160).contains(&len) {
        score += 5;
    } else if (80..120).contains(&len) {
        score += 3;
        recs.push(format!("Meta opis powinien mieć 120-160 znaków (obecnie: {})", len));
    } else if len > 0 {
        score += 1;
        recs.push(format!("Meta opis za krótki lub za długi ({} znaków)", len));
    } else {
        recs.push("Brak meta opisu".to_string());
    }

    if input.has_keyword(meta) {
        score += 5;
    } else {
        recs.push("Meta opis nie zawiera słowa kluczowego głównego".to_string());
    }

    DimensionScore::new(Dimension::MetaDescription, score, "Meta opis")
}

fn score_content_length(input: &ScoringInput<'_>, recs: &mut Vec<String>) -> DimensionScore {
    let words = input.word_count;
    let score = match words {
        1500.. => 10,
        1000.. => 7,
        500.. => 4,
        200.. => 2,
        _ => {
            recs.push(format!("Artykuł zbyt krótki ({} słów, zalecane min 1000)", words));
            0
        }
    };

    DimensionScore::new(Dimension::ContentLength, score, format!("Długość treści ({} słów)", words))
}

fn score_headings(input: &ScoringInput<'_>, recs: &mut Vec<String>) -> DimensionScore {
    let article = input.article;
    let h2 = article.h2_count();
    let h3 = article.h3_count();
    let mut score = 0;

    match h2 {
        5.. => score += 5,
        3.. => {
            score += 3;
            recs.push(format!("Dodaj więcej sekcji H2 (obecnie: {}, zalecane min 5)", h2));
        }
        1.. => {
            score += 1;
            recs.push(format!("Za mało sekcji H2 ({}, zalecane min 5)", h2));
        }
        0 => recs.push("Brak nagłówków H2".to_string()),
    }

    match h3 {
        6.. => score += 5,
        3.. => score += 3,
        _ => recs.push(format!("Za mało podsekcji H3 ({}, zalecane min 6)", h3)),
    }

    if article.sections.iter().any(|s| input.has_keyword(&s.heading)) {
        score += 5;
    } else {
        recs.push("Słowo kluczowe nie występuje w żadnym nagłówku H2".to_string());
    }

    DimensionScore::new(Dimension::Headings, score, "Struktura nagłówków")
}

fn score_keywords(input: &ScoringInput<'_>, recs: &mut Vec<String>) -> DimensionScore {
    let occurrences = count_occurrences(&input.text_lower, &input.keyword);
    let density = occurrences as f64 / input.word_count.max(1) as f64 * 100.0;
    let mut score = 0;

    if (0.5..=3.0).contains(&density) {
        score += 5;
    } else if density > 0.0 {
        score += 2;
        if density < 0.5 {
            recs.push(format!("Gęstość słowa kluczowego zbyt niska: {:.1}% (zalecane 0.5-3%)", density));
        } else {
            recs.push(format!("Gęstość słowa kluczowego zbyt wysoka: {:.1}% (zalecane 0.5-3%)", density));
        }
    } else {
        recs.push("Słowo kluczowe nie występuje w treści!".to_string());
    }

    if input.has_keyword(&leading_words(&input.all_text, LEADING_WORDS)) {
        score += 5;
    } else {
        recs.push("Słowo kluczowe powinno pojawić się w pierwszych 150 słowach".to_string());
    }

    let found = input.secondary.iter().filter(|k| input.text_lower.contains(k.as_str())).count();
    if found > 0 && found * 2 >= input.secondary.len() {
        score += 5;
    } else if found > 0 {
        score += 3;
    } else {
        recs.push("Brak słów kluczowych dodatkowych w treści".to_string());
    }

    DimensionScore::new(Dimension::Keywords, score, format!("Słowa kluczowe (gęstość: {:.1}%)", density))
}

fn score_toc(input: &ScoringInput<'_>, recs: &mut Vec<String>) -> DimensionScore {
    let article = input.article;
    let mut score = 0;

    match article.toc.len() {
        5.. => score += 5,
        3.. => score += 3,
        1.. => score += 1,
        0 => recs.push("Brak spisu treści".to_string()),
    }

    let section_anchors = anchor_set(article.sections.iter().map(|s| s.anchor.as_str()));
    let toc_anchors = anchor_set(article.toc.iter().map(|t| t.anchor.as_str()));
    let shared = section_anchors.intersection(&toc_anchors).count();

    if !section_anchors.is_empty() && !toc_anchors.is_empty() && shared * 5 >= section_anchors.len() * 4 {
        score += 5;
    } else if shared > 0 {
        score += 3;
    } else {
        recs.push("Anchory w spisie treści nie pasują do sekcji artykułu".to_string());
    }

    DimensionScore::new(Dimension::Toc, score, "Spis treści i anchory")
}

/// Distinct anchors, compared verbatim.
fn anchor_set<'a>(anchors: impl Iterator<Item = &'a str>) -> HashSet<&'a str> {
    anchors.collect()
}

fn score_faq(faq: &[FaqItem], recs: &mut Vec<String>) -> DimensionScore {
    let mut score = 0;

    match faq.len() {
        6.. => score += 5,
        4.. => score += 3,
        1.. => score += 1,
        0 => recs.push("Brak sekcji FAQ".to_string()),
    }

    if !faq.is_empty() {
        let answer_words: usize = faq.iter().map(|f| word_count(&f.answer)).sum();
        let average = answer_words as f64 / faq.len() as f64;
        if average >= 25.0 {
            score += 5;
        } else if average >= 15.0 {
            score += 3;
        } else {
            recs.push("Odpowiedzi w FAQ powinny być bardziej rozbudowane (min 25 słów)".to_string());
        }
    }

    DimensionScore::new(Dimension::Faq, score, "Sekcja FAQ")
}

fn score_internal_links(count: usize, recs: &mut Vec<String>) -> DimensionScore {
    let score = match count {
        3.. => 5,
        1.. => 3,
        0 => {
            recs.push("Brak sugestii linkowania wewnętrznego".to_string());
            0
        }
    };

    DimensionScore::new(Dimension::InternalLinks, score, "Linkowanie wewnętrzne")
}

/// True when the URL contains one of the [`CREDIBLE_DOMAINS`]. Matching is case-sensitive.
pub fn is_credible_url(url: &str) -> bool {
    CREDIBLE_DOMAINS.iter().any(|domain| url.contains(domain))
}

fn score_sources(sources: &[Source], recs: &mut Vec<String>) -> DimensionScore {
    let mut score = 0;

    match sources.len() {
        3.. => score += 3,
        1.. => score += 1,
        0 => recs.push("Brak źródeł - dodaj wiarygodne odniesienia".to_string()),
    }

    match sources.iter().filter(|s| is_credible_url(&s.url)).count() {
        2.. => score += 2,
        1 => score += 1,
        0 => recs.push("Dodaj źródła z oficjalnych stron rządowych (.gov.pl)".to_string()),
    }

    DimensionScore::new(Dimension::Sources, score, "Źródła")
}

fn score_readability(all_text: &str, recs: &mut Vec<String>) -> DimensionScore {
    let average = average_sentence_length(all_text);

    let score = if (10.0..=20.0).contains(&average) {
        5
    } else if (8.0..=25.0).contains(&average) {
        3
    } else if average > 0.0 {
        recs.push(format!("Średnia długość zdania: {:.0} słów (zalecane 10-20)", average));
        1
    } else {
        0
    };

    DimensionScore::new(Dimension::Readability, score, format!("Czytelność (śr. {:.0} słów/zdanie)", average))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{InternalLinkSuggestion, Section, SourceType, Subsection, TocEntry};
    use rstest::rstest;

    const NO_KEYWORDS: &[&str] = &[];

    /// 15 words, contains "VAT", "JPK" and "urząd skarbowy".
    const VAT_SENTENCE: &str = "Podatnik rozlicza VAT w deklaracji JPK oraz pilnuje terminów wskazanych przez urząd skarbowy co miesiąc.";

    /// 15 words without any keyword.
    const PLAIN_SENTENCE: &str = "Przedsiębiorca prowadzi księgowość starannie i regularnie sprawdza wszystkie dokumenty kosztowe oraz przychodowe w swojej firmie.";

    fn paragraph(sentences: usize) -> String {
        let body: Vec<&str> =
            (0..sentences).map(|i| if i % 3 == 0 { VAT_SENTENCE } else { PLAIN_SENTENCE }).collect();
        format!("<p>{}</p>", body.join(" "))
    }

    fn padded(prefix: &str, len: usize) -> String {
        let mut text = prefix.to_string();
        while char_len(&text) < len {
            text.push('a');
        }
        text
    }

    fn with_words(words: usize) -> ArticleDocument {
        ArticleDocument {
            sections: vec![Section { content: format!("<p>{}</p>", "słowo ".repeat(words)), ..Default::default() }],
            ..Default::default()
        }
    }

    /// Five sections, eight subsections, six FAQ entries, four link suggestions,
    /// three sources (two official) and 13 blocks of nine 15-word sentences.
    fn vat_guide() -> ArticleDocument {
        let headings = ["Czym jest VAT", "Stawki podatku", "Terminy rozliczeń", "Ulgi i zwolnienia", "Najczęstsze błędy"];
        let anchors = ["czym-jest-vat", "stawki-podatku", "terminy-rozliczen", "ulgi-i-zwolnienia", "najczestsze-bledy"];
        let subsection_counts = [2, 2, 2, 1, 1];

        let sections = headings
            .iter()
            .zip(anchors)
            .zip(subsection_counts)
            .map(|((heading, anchor), subs)| Section {
                heading: heading.to_string(),
                anchor: anchor.to_string(),
                content: paragraph(9),
                subsections: (0..subs)
                    .map(|i| Subsection {
                        heading: format!("{} – część {}", heading, i + 1),
                        anchor: format!("{}-{}", anchor, i + 1),
                        content: paragraph(9),
                    })
                    .collect(),
            })
            .collect();

        let toc = headings
            .iter()
            .zip(anchors)
            .map(|(label, anchor)| TocEntry { label: label.to_string(), anchor: anchor.to_string() })
            .collect();

        let faq = (0..6)
            .map(|i| FaqItem {
                question: format!("Pytanie numer {}?", i + 1),
                answer: format!("{} {}", VAT_SENTENCE, PLAIN_SENTENCE),
            })
            .collect();

        let internal_link_suggestions = (0..4)
            .map(|i| InternalLinkSuggestion {
                anchor_text: format!("link {}", i),
                target_topic: format!("temat {}", i),
                reason: "powiązany temat".to_string(),
            })
            .collect();

        let sources = vec![
            Source {
                name: "Podatki.gov.pl".into(),
                url: "https://www.podatki.gov.pl/vat/".into(),
                kind: SourceType::Official,
            },
            Source {
                name: "Ustawa o VAT".into(),
                url: "https://isap.sejm.gov.pl/isap.nsf/DocDetails.xsp?id=WDU20040540535".into(),
                kind: SourceType::Legal,
            },
            Source { name: "Blog eksperta".into(), url: "https://example.com/vat".into(), kind: SourceType::Expert },
        ];

        ArticleDocument {
            title: "Jak rozliczać VAT — kompletny przewodnik 2026".into(),
            meta_description: padded("Praktyczny poradnik: jak rozliczać VAT w małej firmie, terminy, stawki ", 140),
            sections,
            faq,
            toc,
            sources,
            internal_link_suggestions,
        }
    }

    #[test]
    fn test_vat_guide_scores_full_marks() {
        let article = vat_guide();
        let report = compute_seo_score(&article, "VAT", &["JPK", "urząd skarbowy"]);

        assert_eq!(report.word_count, 13 * 9 * 15);
        assert_eq!(report.total_max, 100);
        assert_eq!(report.percentage, 100, "{:#?}", report);
        assert!(report.recommendations.is_empty());
        assert!(!report.needs_improvement());
        assert_eq!(report.breakdown.readability.label, "Czytelność (śr. 15 słów/zdanie)");
    }

    #[test]
    fn test_total_word_count_includes_faq() {
        let article = vat_guide();
        let report = compute_seo_score(&article, "VAT", &["JPK"]);
        let faq_words = 6 * (3 + 30);
        assert_eq!(report.total_word_count, report.word_count + faq_words);
    }

    #[test]
    fn test_deterministic() {
        let article = vat_guide();
        let first = compute_seo_score(&article, "VAT", &["JPK"]);
        let second = compute_seo_score(&article, "VAT", &["JPK"]);
        assert_eq!(first, second);
        assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
    }

    #[test]
    fn test_empty_article_floor() {
        let report = compute_seo_score(&ArticleDocument::default(), "kw", NO_KEYWORDS);

        assert_eq!(report.total_score, 0);
        assert_eq!(report.percentage, 0);
        assert_eq!(report.word_count, 0);
        assert_eq!(report.recommendations.len(), 17);
        assert_eq!(report.recommendations[0], "Brak tytułu artykułu");
        assert!(report.recommendations.contains(&"Brak meta opisu".to_string()));
        assert!(report.recommendations.contains(&"Brak sekcji FAQ".to_string()));
        assert!(report.recommendations.contains(&"Brak spisu treści".to_string()));
        assert!(report.iter().all(|(_, s)| s.score == 0));
    }

    #[test]
    fn test_empty_title_only_scores_zero() {
        let article = ArticleDocument { title: String::new(), ..Default::default() };
        let report = compute_seo_score(&article, "VAT", NO_KEYWORDS);
        assert_eq!(report.percentage, 0);
    }

    #[test]
    fn test_title_change_only_affects_title() {
        let base = vat_guide();
        let mut changed = base.clone();
        changed.title = String::new();

        let before = compute_seo_score(&base, "VAT", &["JPK"]);
        let after = compute_seo_score(&changed, "VAT", &["JPK"]);

        for dimension in Dimension::ALL.into_iter().filter(|d| *d != Dimension::Title) {
            assert_eq!(before.breakdown.get(dimension), after.breakdown.get(dimension));
        }
        assert_eq!(after.breakdown.title.score, 0);
        assert_eq!(after.recommendations, vec!["Brak tytułu artykułu", "Tytuł nie zawiera słowa kluczowego głównego"]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(199, 0)]
    #[case(200, 2)]
    #[case(499, 2)]
    #[case(500, 4)]
    #[case(999, 4)]
    #[case(1000, 7)]
    #[case(1499, 7)]
    #[case(1500, 10)]
    fn test_content_length_bands(#[case] words: usize, #[case] expected: u32) {
        let report = compute_seo_score(&with_words(words), "kw", NO_KEYWORDS);
        assert_eq!(report.word_count, words);
        assert_eq!(report.breakdown.content_length.score, expected);
        assert_eq!(report.breakdown.content_length.label, format!("Długość treści ({} słów)", words));
    }

    #[test]
    fn test_short_article_recommendation() {
        let report = compute_seo_score(&with_words(150), "kw", NO_KEYWORDS);
        assert!(report.recommendations.contains(&"Artykuł zbyt krótki (150 słów, zalecane min 1000)".to_string()));
    }

    #[rstest]
    #[case("", 0)]
    #[case("Krótki tytuł o VAT", 12)]
    #[case("Krótki tytuł", 7)]
    #[case("Jak rozliczać VAT — kompletny przewodnik 2026", 15)]
    #[case("Kompletny przewodnik po rozliczeniach w małej firmie 2026", 10)]
    fn test_title_scoring(#[case] title: &str, #[case] expected: u32) {
        let article = ArticleDocument { title: title.to_string(), ..Default::default() };
        let report = compute_seo_score(&article, "vat", NO_KEYWORDS);
        assert_eq!(report.breakdown.title.score, expected);
    }

    #[test]
    fn test_title_length_recommendation_counts_characters() {
        let article = ArticleDocument { title: "Ulga na złe długi".into(), ..Default::default() };
        let report = compute_seo_score(&article, "ulga", NO_KEYWORDS);
        assert_eq!(report.recommendations[0], "Tytuł powinien mieć 30-70 znaków (obecnie: 17)");
    }

    #[rstest]
    #[case(0, 0)]
    #[case(50, 1)]
    #[case(80, 3)]
    #[case(119, 3)]
    #[case(120, 5)]
    #[case(160, 5)]
    #[case(161, 1)]
    fn test_meta_length_bands(#[case] len: usize, #[case] expected: u32) {
        let meta = if len == 0 { String::new() } else { padded("", len) };
        let article = ArticleDocument { meta_description: meta, ..Default::default() };
        let report = compute_seo_score(&article, "vat", NO_KEYWORDS);
        assert_eq!(report.breakdown.meta_description.score, expected);
    }

    #[test]
    fn test_meta_keyword_bonus() {
        let article = ArticleDocument { meta_description: padded("ZUS ", 130), ..Default::default() };
        let report = compute_seo_score(&article, "zus", NO_KEYWORDS);
        assert_eq!(report.breakdown.meta_description.score, 10);
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 0, 1)]
    #[case(3, 3, 6)]
    #[case(5, 6, 10)]
    fn test_heading_counts(#[case] h2: usize, #[case] h3: usize, #[case] expected: u32) {
        let mut sections: Vec<Section> = (0..h2).map(|_| Section::default()).collect();
        if let Some(first) = sections.first_mut() {
            first.subsections = (0..h3).map(|_| Subsection::default()).collect();
        }
        let article = ArticleDocument { sections, ..Default::default() };
        let report = compute_seo_score(&article, "vat", NO_KEYWORDS);
        assert_eq!(report.breakdown.headings.score, expected);
    }

    #[test]
    fn test_keyword_in_h2_bonus() {
        let article = ArticleDocument {
            sections: vec![Section { heading: "Stawki VAT w 2026".into(), ..Default::default() }],
            ..Default::default()
        };
        let report = compute_seo_score(&article, "vat", NO_KEYWORDS);
        assert_eq!(report.breakdown.headings.score, 6);
        assert!(!report.recommendations.contains(&"Słowo kluczowe nie występuje w żadnym nagłówku H2".to_string()));
    }

    #[test]
    fn test_keyword_density_one_percent() {
        let article = ArticleDocument {
            sections: vec![Section { content: format!("<p>VAT {}</p>", "słowo ".repeat(99)), ..Default::default() }],
            ..Default::default()
        };
        let report = compute_seo_score(&article, "VAT", NO_KEYWORDS);

        assert_eq!(report.word_count, 100);
        assert_eq!(report.breakdown.keywords.score, 10);
        assert_eq!(report.breakdown.keywords.label, "Słowa kluczowe (gęstość: 1.0%)");
    }

    #[test]
    fn test_keyword_density_too_low() {
        let article = ArticleDocument {
            sections: vec![Section { content: format!("<p>VAT {}</p>", "słowo ".repeat(499)), ..Default::default() }],
            ..Default::default()
        };
        let report = compute_seo_score(&article, "VAT", NO_KEYWORDS);
        assert_eq!(report.breakdown.keywords.score, 7);
        assert!(report.recommendations.contains(&"Gęstość słowa kluczowego zbyt niska: 0.2% (zalecane 0.5-3%)".to_string()));
    }

    #[test]
    fn test_keyword_density_too_high() {
        let article = ArticleDocument {
            sections: vec![Section { content: "<p>VAT VAT VAT słowo słowo</p>".into(), ..Default::default() }],
            ..Default::default()
        };
        let report = compute_seo_score(&article, "VAT", NO_KEYWORDS);
        assert_eq!(report.breakdown.keywords.score, 7);
        assert!(report.recommendations.iter().any(|r| r.starts_with("Gęstość słowa kluczowego zbyt wysoka: 60.0%")));
    }

    #[test]
    fn test_keyword_after_first_150_words() {
        let article = ArticleDocument {
            sections: vec![Section { content: format!("<p>{} VAT</p>", "słowo ".repeat(150)), ..Default::default() }],
            ..Default::default()
        };
        let report = compute_seo_score(&article, "VAT", NO_KEYWORDS);
        assert!(
            report.recommendations.contains(&"Słowo kluczowe powinno pojawić się w pierwszych 150 słowach".to_string())
        );
    }

    #[rstest]
    #[case(&["jpk", "vat-7"], 5)]
    #[case(&["jpk", "ryczałt", "kasa fiskalna"], 3)]
    #[case(&["ryczałt"], 0)]
    #[case(&[], 0)]
    #[case(&["", "  "], 0)]
    fn test_secondary_keywords(#[case] secondary: &[&str], #[case] expected: u32) {
        let article = ArticleDocument {
            sections: vec![Section { content: "<p>Plik JPK oraz deklaracja VAT-7.</p>".into(), ..Default::default() }],
            ..Default::default()
        };
        let base = compute_seo_score(&article, "", NO_KEYWORDS).breakdown.keywords.score;
        let report = compute_seo_score(&article, "", secondary);
        assert_eq!(report.breakdown.keywords.score - base, expected);
    }

    #[test]
    fn test_blank_keyword_never_matches() {
        let article = ArticleDocument { title: "Jak rozliczać VAT — kompletny przewodnik 2026".into(), ..Default::default() };
        let report = compute_seo_score(&article, "  ", NO_KEYWORDS);
        assert_eq!(report.breakdown.title.score, 10);
    }

    #[test]
    fn test_toc_anchor_consistency() {
        let sections: Vec<Section> =
            (0..5).map(|i| Section { anchor: format!("s{}", i), ..Default::default() }).collect();
        let toc_for = |anchors: &[&str]| -> Vec<TocEntry> {
            anchors.iter().map(|a| TocEntry { label: a.to_string(), anchor: a.to_string() }).collect()
        };

        let full = ArticleDocument {
            sections: sections.clone(),
            toc: toc_for(&["s0", "s1", "s2", "s3", "x"]),
            ..Default::default()
        };
        assert_eq!(compute_seo_score(&full, "kw", NO_KEYWORDS).breakdown.toc.score, 10);

        let partial =
            ArticleDocument { sections: sections.clone(), toc: toc_for(&["s0", "y", "z"]), ..Default::default() };
        assert_eq!(compute_seo_score(&partial, "kw", NO_KEYWORDS).breakdown.toc.score, 6);

        let hashed = ArticleDocument { sections: sections.clone(), toc: toc_for(&["#s0"]), ..Default::default() };
        assert_eq!(compute_seo_score(&hashed, "kw", NO_KEYWORDS).breakdown.toc.score, 1);

        let mismatch = ArticleDocument { sections, toc: toc_for(&["a"]), ..Default::default() };
        let report = compute_seo_score(&mismatch, "kw", NO_KEYWORDS);
        assert_eq!(report.breakdown.toc.score, 1);
        assert!(report.recommendations.contains(&"Anchory w spisie treści nie pasują do sekcji artykułu".to_string()));
    }

    #[test]
    fn test_blank_anchors_match_each_other() {
        let article = ArticleDocument {
            sections: vec![Section::default(), Section::default()],
            toc: vec![TocEntry::default()],
            ..Default::default()
        };
        let report = compute_seo_score(&article, "kw", NO_KEYWORDS);
        assert_eq!(report.breakdown.toc.score, 6);
        assert!(!report.recommendations.contains(&"Anchory w spisie treści nie pasują do sekcji artykułu".to_string()));
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 30, 6)]
    #[case(4, 20, 6)]
    #[case(6, 10, 5)]
    #[case(6, 25, 10)]
    fn test_faq_scoring(#[case] entries: usize, #[case] answer_words: usize, #[case] expected: u32) {
        let faq = (0..entries)
            .map(|_| FaqItem { question: "Pytanie?".into(), answer: "słowo ".repeat(answer_words) })
            .collect();
        let article = ArticleDocument { faq, ..Default::default() };
        assert_eq!(compute_seo_score(&article, "kw", NO_KEYWORDS).breakdown.faq.score, expected);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 3)]
    #[case(2, 3)]
    #[case(3, 5)]
    fn test_internal_links(#[case] count: usize, #[case] expected: u32) {
        let article = ArticleDocument {
            internal_link_suggestions: vec![InternalLinkSuggestion::default(); count],
            ..Default::default()
        };
        assert_eq!(compute_seo_score(&article, "kw", NO_KEYWORDS).breakdown.internal_links.score, expected);
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&["https://example.com"], 1)]
    #[case(&["https://www.zus.pl/baza-wiedzy"], 2)]
    #[case(&["https://a.com", "https://b.com", "https://www.gov.pl/web/finanse"], 4)]
    #[case(&["https://www.nbp.pl", "https://stat.gov.pl", "https://b.com"], 5)]
    #[case(&["https://WWW.PODATKI.GOV.PL/vat", "https://www.ZUS.PL"], 1)]
    fn test_sources(#[case] urls: &[&str], #[case] expected: u32) {
        let sources = urls.iter().map(|u| Source { url: u.to_string(), ..Default::default() }).collect();
        let article = ArticleDocument { sources, ..Default::default() };
        assert_eq!(compute_seo_score(&article, "kw", NO_KEYWORDS).breakdown.sources.score, expected);
    }

    #[test]
    fn test_is_credible_url() {
        assert!(is_credible_url("https://www.podatki.gov.pl/pit/"));
        assert!(!is_credible_url("HTTPS://WWW.ZUS.PL"));
        assert!(!is_credible_url("https://gov.example.com"));
    }

    #[rstest]
    #[case(15, 5)]
    #[case(10, 5)]
    #[case(20, 5)]
    #[case(8, 3)]
    #[case(25, 3)]
    #[case(30, 1)]
    #[case(4, 1)]
    fn test_readability(#[case] sentence_len: usize, #[case] expected: u32) {
        let sentence = format!("{}.", vec!["słowo"; sentence_len].join(" "));
        let article = ArticleDocument {
            sections: vec![Section { content: format!("<p>{} {}</p>", sentence, sentence), ..Default::default() }],
            ..Default::default()
        };
        let report = compute_seo_score(&article, "kw", NO_KEYWORDS);
        assert_eq!(report.breakdown.readability.score, expected);
        assert_eq!(report.breakdown.readability.label, format!("Czytelność (śr. {} słów/zdanie)", sentence_len));
    }

    #[test]
    fn test_readability_recommendation() {
        let article = ArticleDocument {
            sections: vec![Section { content: format!("<p>{}.</p>", "słowo ".repeat(40)), ..Default::default() }],
            ..Default::default()
        };
        let report = compute_seo_score(&article, "kw", NO_KEYWORDS);
        assert_eq!(report.recommendations.last().unwrap(), "Średnia długość zdania: 40 słów (zalecane 10-20)");
    }

    #[test]
    fn test_bounds_hold_for_mixed_inputs() {
        let mut article = vat_guide();
        for keyword in ["VAT", "vat", "", "nieobecne"] {
            article.faq.truncate(article.faq.len().saturating_sub(2));
            article.sources.pop();
            let report = compute_seo_score(&article, keyword, &["JPK"]);
            assert!(report.total_score <= report.total_max);
            assert_eq!(report.total_max, 100);
            assert!(report.percentage <= 100);
            for (dimension, score) in report.iter() {
                assert!(score.score <= score.max);
                assert_eq!(score.max, dimension.max());
            }
        }
    }
}
