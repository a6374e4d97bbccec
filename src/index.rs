//! The index module maintains the list of daily entries on the index page.
//!
//! Only the region between [`ENTRY_START`] and [`ENTRY_END`] is machine
//! managed. An update parses that region back into [`Entries`], merges the new
//! entry in, regenerates the region grouped by month and splices it between the
//! untouched text surrounding the markers.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::constants::{
    CARD_PATTERN, CARD_TEMPLATE, DATE_FORMAT, ENTRY_END, ENTRY_START, MONTH_HEADER_TEMPLATE,
};
use crate::date::{date_display, date_key, month_header, month_key};

static CARD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(CARD_PATTERN).expect("Failed to compile CARD_PATTERN regex"));

/// The published entries, keyed by date.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Entries(BTreeMap<NaiveDate, String>);

impl Entries {
    /// Recovers the entries serialized in an entries region.
    ///
    /// Recovery is best-effort: cards that do not have the expected shape, or
    /// whose href is not a calendar date, are skipped.
    pub fn parse(region: &str) -> Self {
        let mut entries = BTreeMap::new();
        for caps in CARD_REGEX.captures_iter(region) {
            match NaiveDate::parse_from_str(&caps[1], DATE_FORMAT) {
                Ok(date) => {
                    entries.insert(date, caps[2].trim().to_owned());
                }
                Err(err) => warn!("Skipping card with invalid date {}: {err}", &caps[1]),
            }
        }
        debug!("Recovered {} entries from index", entries.len());
        Self(entries)
    }

    /// Inserts the entry for `date`, replacing any previous description.
    pub fn upsert(&mut self, date: NaiveDate, description: impl Into<String>) {
        self.0.insert(date, description.into());
    }

    pub fn get(&self, date: NaiveDate) -> Option<&str> {
        self.0.get(&date).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.0.iter().rev().map(|(date, desc)| (*date, desc.as_str()))
    }

    /// Serializes the entries, newest first, with a month header in front of
    /// every run of entries sharing a year and month.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut current_month = None;

        for (date, description) in self.iter() {
            let month = month_key(date);
            if current_month != Some(month) {
                lines.push(MONTH_HEADER_TEMPLATE.replace("{month_header}", &month_header(date)));
                current_month = Some(month);
            }
            lines.push(String::new());
            lines.push(render_card(date, description));
        }

        lines.join("\n")
    }
}

fn render_card(date: NaiveDate, description: &str) -> String {
    CARD_TEMPLATE
        .replace("{date}", &date_key(date))
        .replace("{date_display}", &date_display(date))
        .replace("{description}", description)
}

/// An index document split around its entries region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDocument<'a> {
    /// Everything before the start marker.
    pub prefix: &'a str,
    /// Everything between the markers.
    pub region: &'a str,
    /// Everything after the end marker.
    pub suffix: &'a str,
}

impl<'a> IndexDocument<'a> {
    /// Splits `html` at the entries markers. The end marker is looked up after
    /// the start marker.
    ///
    /// # Errors
    ///
    /// Returns an error if either marker is missing.
    pub fn parse(html: &'a str) -> Result<Self> {
        let missing = || {
            anyhow!("Markers not found in index document. Expected: {ENTRY_START} and {ENTRY_END}")
        };
        let (prefix, rest) = html.split_once(ENTRY_START).ok_or_else(missing)?;
        let (region, suffix) = rest.split_once(ENTRY_END).ok_or_else(missing)?;

        Ok(Self {
            prefix,
            region,
            suffix,
        })
    }

    pub fn entries(&self) -> Entries {
        Entries::parse(self.region)
    }

    /// Reassembles the document with `entries` as the new region. Text outside
    /// the markers is copied unchanged.
    pub fn splice(&self, entries: &Entries) -> String {
        let region = entries.render();
        let mut out = String::with_capacity(
            self.prefix.len() + region.len() + self.suffix.len() + ENTRY_START.len() + 64,
        );
        out.push_str(self.prefix);
        out.push_str(ENTRY_START);
        out.push_str(&region);
        out.push_str("\n  ");
        out.push_str(ENTRY_END);
        out.push_str(self.suffix);
        out
    }
}

/// Merges the entry for `date` into the index document `html`.
///
/// # Returns
///
/// The new document and the number of entries it lists.
///
/// # Errors
///
/// Returns an error if the entries markers are missing.
pub fn merge_entry(html: &str, date: NaiveDate, description: &str) -> Result<(String, usize)> {
    let document = IndexDocument::parse(html)?;
    let mut entries = document.entries();
    entries.upsert(date, description);

    Ok((document.splice(&entries), entries.len()))
}

/// Updates the index file at `index_path` with the entry for `date`.
///
/// The file is only rewritten once the new document has been produced, so a
/// malformed index is left as it was.
///
/// # Arguments
///
/// * `index_path` - Path to the index document
/// * `date` - Date of the entry to insert or replace
/// * `description` - Description shown on the entry's card
///
/// # Returns
///
/// Returns the number of entries listed in the updated index
///
/// # Errors
///
/// Returns an error if:
/// * The index file can't be read or written
/// * The entries markers are missing
pub fn update_index(index_path: &Path, date: NaiveDate, description: &str) -> Result<usize> {
    let html = fs::read_to_string(index_path)
        .with_context(|| format!("Failed to read index {}", index_path.display()))?;

    let (updated, count) = merge_entry(&html, date, description)
        .with_context(|| format!("Unable to update {}", index_path.display()))?;

    fs::write(index_path, updated)
        .with_context(|| format!("Failed to write index {}", index_path.display()))?;

    info!("Updated {} ({count} entries)", index_path.display());
    Ok(count)
}
