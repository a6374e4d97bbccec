pub const SITE_ROOT_ENV_NAME: &str = "PUBLISH_DAILY_SITE_ROOT";

pub const DEFAULT_SOURCE_PATH: &str = "/tmp/email_preview_secret.html";
pub const DEFAULT_SITE_URL: &str = "https://daliu.github.io/";

/// Location of the daily section, relative to the site root.
pub const DAILY_RELATIVE_DIR: &str = "autotrader/daily";
pub const EMAILS_DIR_NAME: &str = "emails";
pub const INDEX_FILE_NAME: &str = "index.html";

pub const ENTRY_START: &str = "<!-- DAILY-ENTRIES -->";
pub const ENTRY_END: &str = "<!-- /DAILY-ENTRIES -->";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const FALLBACK_DESCRIPTION: &str = "Daily market predictions and analysis";
pub const DESCRIPTION_SEPARATOR: &str = " &middot; ";

pub(crate) const COMMIT_MESSAGE_TEMPLATE: &str = "daily: {date} market update";

pub(crate) const MONTH_HEADER_TEMPLATE: &str =
    "\n  <h4 style=\"margin-top: 30px;\">{month_header}</h4>";

pub(crate) const CARD_TEMPLATE: &str = r#"  <div class="update-card">
    <a href="{date}.html">
      <div class="update-date">{date_display}</div>
      <div class="update-title">Daily Market Update</div>
      <p class="update-desc">{description}</p>
    </a>
  </div>"#;

pub(crate) const CARD_PATTERN: &str = concat!(
    r#"(?s)<div class="update-card">\s*"#,
    r#"<a href="(\d{4}-\d{2}-\d{2})\.html">\s*"#,
    r#"<div class="update-date">.*?</div>\s*"#,
    r#"<div class="update-title">.*?</div>\s*"#,
    r#"<p class="update-desc">(.*?)</p>\s*"#,
    r#"</a>\s*"#,
    r#"</div>"#,
);

pub(crate) const WRAPPER_TEMPLATE: &str = include_str!("templates/wrapper.html");
