//! The describe module turns a daily email into the one-line summary shown on
//! its index card.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use scraper::Html;

use crate::constants::{DESCRIPTION_SEPARATOR, FALLBACK_DESCRIPTION};

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

static TICKERS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Total Tickers\s*:\s*(\d+)").expect("Failed to compile tickers regex")
});

// Labels are runs of upper-case words. Only the extra words need a trailing
// word boundary, which keeps the capital of a following word (e.g. `FEAR
// Crypto`) out of the label.
static STOCK_SENTIMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Stock Market\s*:\s*(\d+)/100\s*[-\x{2013}]\s*([A-Z]+(?: +[A-Z]+\b)*)")
        .expect("Failed to compile stock sentiment regex")
});

static CRYPTO_SENTIMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Crypto(?:\s+Market)?\s*:\s*(\d+)/100\s*[-\x{2013}]\s*([A-Z]+(?: +[A-Z]+\b)*)")
        .expect("Failed to compile crypto sentiment regex")
});

static TRADES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s+trades?\s+in\s+last\s+\d+\s+days?")
        .expect("Failed to compile trades regex")
});

/// Extracts the key statistics of a daily email into a short description.
///
/// The markup is reduced to its text nodes and whitespace is collapsed before
/// matching. Each statistic is optional; the fragments found are joined with
/// [`DESCRIPTION_SEPARATOR`] in a fixed order (ticker count, stock market
/// sentiment, crypto sentiment, congress trades). When nothing matches,
/// [`FALLBACK_DESCRIPTION`] is returned.
///
/// # Arguments
///
/// * `email_html` - The raw email HTML. It is untrusted and may be malformed.
///
/// # Returns
///
/// The description, ready to be embedded into HTML.
pub fn extract_description(email_html: &str) -> String {
    let text = visible_text(email_html);

    let fragments: Vec<String> = [
        TICKERS_REGEX
            .captures(&text)
            .map(|caps| format!("{} tickers analyzed", &caps[1])),
        STOCK_SENTIMENT_REGEX
            .captures(&text)
            .map(|caps| sentiment_fragment("Market sentiment", &caps)),
        CRYPTO_SENTIMENT_REGEX
            .captures(&text)
            .map(|caps| sentiment_fragment("Crypto", &caps)),
        TRADES_REGEX
            .captures(&text)
            .map(|caps| format!("{} congress trades tracked", &caps[1])),
    ]
    .into_iter()
    .flatten()
    .collect();

    debug!("Matched {} statistics in email", fragments.len());

    if fragments.is_empty() {
        FALLBACK_DESCRIPTION.to_owned()
    } else {
        fragments.join(DESCRIPTION_SEPARATOR)
    }
}

/// Strips the markup from `html` and collapses all whitespace runs to a single
/// space.
fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let text = document.root_element().text().collect::<Vec<_>>().join(" ");
    WHITESPACE_REGEX.replace_all(&text, " ").trim().to_owned()
}

fn sentiment_fragment(name: &str, caps: &Captures<'_>) -> String {
    format!("{name}: {} ({}/100)", title_case(caps[2].trim()), &caps[1])
}

/// `EXTREME FEAR` -> `Extreme Fear`
fn title_case(label: &str) -> String {
    let mut result = String::with_capacity(label.len());
    let mut word_start = true;
    for c in label.chars() {
        if word_start {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
        word_start = !c.is_alphabetic();
    }
    result
}
