//! The publish-daily library publishes a daily HTML email snapshot to a static
//! website: it archives the email, summarizes it, generates a wrapper page,
//! regenerates the index page's list of entries and optionally pushes the
//! result with git.

pub mod config;
pub mod constants;
pub mod date;
pub mod describe;
pub mod git;
pub mod index;
pub mod publish;
pub mod wrapper;

pub use config::SiteLayout;
pub use describe::extract_description;
pub use index::{Entries, IndexDocument, merge_entry, update_index};
pub use publish::{PublishOptions, publish};
pub use wrapper::render_wrapper_page;
