//! The publish module sequences one daily publication: archive the email,
//! describe it, write its wrapper page, list it in the index and push.

use anyhow::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::config::SiteLayout;
use crate::constants::COMMIT_MESSAGE_TEMPLATE;
use crate::date::{date_key, parse_date};
use crate::describe::extract_description;
use crate::git::commit_and_push;
use crate::index::update_index;
use crate::wrapper::render_wrapper_page;

/// What to publish and whether to push it.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Publish date as `YYYY-MM-DD`.
    pub date: String,
    /// Path to the source email HTML.
    pub source: PathBuf,
    /// Commit and push the daily directory when done.
    pub push: bool,
}

/// Publishes the email at `options.source` for `options.date` into the site
/// described by `layout`.
///
/// Steps run in order and the first failure aborts the run. Steps already
/// completed are not rolled back.
///
/// # Arguments
///
/// * `layout` - Paths of the site being published to
/// * `options` - Date, source file and push flag
///
/// # Returns
///
/// Returns the description written to the index
///
/// # Errors
///
/// Returns an error if:
/// * The date is not a valid `YYYY-MM-DD` date
/// * The source file does not exist
/// * Copying, reading or writing any file fails
/// * The index document lacks its entries markers
/// * A git command fails
pub fn publish(layout: &SiteLayout, options: &PublishOptions) -> Result<String> {
    let date = parse_date(&options.date)?;
    let date_str = date_key(date);

    if !options.source.exists() {
        bail!("Source file not found: {}", options.source.display());
    }

    info!("Publishing daily email for {date_str}");
    info!("Source: {}", options.source.display());

    fs::create_dir_all(&layout.emails_dir).with_context(|| {
        format!("Failed to create directory {}", layout.emails_dir.display())
    })?;

    let email_path = layout.email_path(date);
    fs::copy(&options.source, &email_path).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            options.source.display(),
            email_path.display()
        )
    })?;
    info!("Copied email to {}", email_path.display());

    let email_bytes = fs::read(&email_path)
        .with_context(|| format!("Failed to read {}", email_path.display()))?;
    let description = extract_description(&String::from_utf8_lossy(&email_bytes));
    info!("Description: {description}");

    let wrapper_path = layout.wrapper_path(date);
    fs::write(&wrapper_path, render_wrapper_page(date))
        .with_context(|| format!("Failed to write {}", wrapper_path.display()))?;
    info!("Generated wrapper: {}", wrapper_path.display());

    update_index(&layout.index_path, date, &description)?;

    if options.push {
        info!("Committing and pushing...");
        let message = COMMIT_MESSAGE_TEMPLATE.replace("{date}", &date_str);
        commit_and_push(&layout.root, layout.daily_pathspec(), &message)?;
    } else {
        info!("Skipping git (--no-push)");
    }

    info!("Done! View at: {}", layout.public_url(date)?);
    Ok(description)
}
