//! Generates the per-date wrapper page that embeds an archived email.

use chrono::{Datelike, NaiveDate};

use crate::constants::WRAPPER_TEMPLATE;
use crate::date::date_key;

/// Renders the wrapper page for `date`.
///
/// The page lives next to the index and references the archived email as
/// `emails/{YYYY-MM-DD}.html`.
pub fn render_wrapper_page(date: NaiveDate) -> String {
    WRAPPER_TEMPLATE
        .replace("{short_month}", &date.format("%b").to_string())
        .replace("{month_name}", &date.format("%B").to_string())
        .replace("{day}", &date.day().to_string())
        .replace("{year}", &date.year().to_string())
        .replace("{date}", &date_key(date))
}
