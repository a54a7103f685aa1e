// src/core/html.rs
// Thin helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use crate::error::ParseError;

pub fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector(format!("{css}: {e}")))
}

/// All elements matching `css` anywhere in the document.
pub fn select_all<'a>(doc: &'a Html, css: &str) -> Result<Vec<ElementRef<'a>>, ParseError> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).collect())
}

/// First element matching `css`, or `MissingElement`.
pub fn select_first<'a>(doc: &'a Html, css: &str) -> Result<ElementRef<'a>, ParseError> {
    let sel = selector(css)?;
    doc.select(&sel)
        .next()
        .ok_or_else(|| ParseError::MissingElement(s!(css)))
}

/// Text of the `<td>` cells of one row, whitespace-normalized.
pub fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    // `td` is a valid selector; building it cannot fail
    let td = match Selector::parse("td") {
        Ok(sel) => sel,
        Err(_) => return Vec::new(),
    };
    row.select(&td).map(text_of).collect()
}

/// All descendant text, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Only the element's direct text children, e.g. `" 00:13:46"` out of
/// `<span><b>King of the Mountain </b> 00:13:46</span>`.
pub fn own_text(el: ElementRef<'_>) -> String {
    let raw: String = el
        .children()
        .filter_map(|n| n.value().as_text().map(|t| t.to_string()))
        .collect();
    normalize_ws(&raw)
}
