//! Plain-text rendering of puzzle description pages
//!
//! The description lives in the first `<article>` element of the page. Pages
//! without one (bad day number, expired session splash, site error page) fall
//! back to a fixed apology instead of failing; the conversion itself is
//! delegated to `html2md`.

use scraper::{Html, Selector};

use crate::constants::subject;

/// Render the puzzle description from a fetched page as readable text
///
/// Selects the first element matching the article selector and converts it;
/// when the page has no such element the fixed fallback message is converted
/// in its place.
pub fn render_subject(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse(subject::ARTICLE_SELECTOR).expect("article selector constant is valid");

    let article_html = match document.select(&selector).next() {
        Some(article) => article.html(),
        None => {
            tracing::warn!("No article element in page, using fallback text");
            subject::FALLBACK.to_string()
        }
    };

    html2md::parse_html(&article_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_article_content() {
        let html = r#"<html><body>
            <header>nav stuff</header>
            <article><h2>--- Day 5: Example ---</h2><p>Puzzle <em>text</em> here.</p></article>
            <footer>ads</footer>
        </body></html>"#;

        let text = render_subject(html);
        assert!(text.contains("Day 5: Example"));
        assert!(text.contains("Puzzle"));
        assert!(!text.contains("nav stuff"));
        assert!(!text.contains("ads"));
    }

    #[test]
    fn test_first_article_wins() {
        let html = "<article><p>first</p></article><article><p>second</p></article>";
        let text = render_subject(html);
        assert!(text.contains("first"));
        assert!(!text.contains("second"));
    }

    #[test]
    fn test_missing_article_falls_back() {
        let html = "<html><body><p>not the droids you are looking for</p></body></html>";
        let text = render_subject(html);
        assert!(text.contains(subject::FALLBACK));
    }

    #[test]
    fn test_empty_document_falls_back() {
        assert!(render_subject("").contains(subject::FALLBACK));
    }
}
