use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use url::Url;

use crate::constants::{DAILY_RELATIVE_DIR, EMAILS_DIR_NAME, INDEX_FILE_NAME};
use crate::date::date_key;

/// Every location the publisher touches, derived from the site root.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    /// Root of the website checkout. Git commands run here.
    pub root: PathBuf,
    /// Directory holding the index and the wrapper pages.
    pub daily_dir: PathBuf,
    /// Directory holding the archived emails.
    pub emails_dir: PathBuf,
    pub index_path: PathBuf,
    /// Public URL of the site root.
    pub site_url: Url,
}

impl SiteLayout {
    /// Builds the layout for a site checked out at `root` and served at
    /// `site_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `site_url` is not an absolute URL.
    pub fn new(root: impl Into<PathBuf>, site_url: &str) -> Result<Self> {
        let root = root.into();
        let daily_dir = root.join(DAILY_RELATIVE_DIR);
        let mut site_url =
            Url::parse(site_url).with_context(|| format!("Invalid site URL: {site_url}"))?;
        if !site_url.path().ends_with('/') {
            let path = format!("{}/", site_url.path());
            site_url.set_path(&path);
        }

        Ok(Self {
            emails_dir: daily_dir.join(EMAILS_DIR_NAME),
            index_path: daily_dir.join(INDEX_FILE_NAME),
            daily_dir,
            root,
            site_url,
        })
    }

    pub fn email_path(&self, date: NaiveDate) -> PathBuf {
        self.emails_dir.join(format!("{}.html", date_key(date)))
    }

    pub fn wrapper_path(&self, date: NaiveDate) -> PathBuf {
        self.daily_dir.join(format!("{}.html", date_key(date)))
    }

    /// The daily directory relative to the root, as a git pathspec.
    pub fn daily_pathspec(&self) -> &Path {
        Path::new(DAILY_RELATIVE_DIR)
    }

    /// Public URL of the wrapper page for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL can't be joined.
    pub fn public_url(&self, date: NaiveDate) -> Result<Url> {
        self.site_url
            .join(&format!("{DAILY_RELATIVE_DIR}/{}.html", date_key(date)))
            .context("Unable to build public URL")
    }
}
