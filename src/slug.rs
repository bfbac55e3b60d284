//! Slug generation.
//!
//! A slug is derived from a title by replacing every literal space (`' '`)
//! with a hyphen and lowercasing the result. Other whitespace (tabs,
//! non-breaking spaces) and punctuation pass through untouched, and edge
//! spaces are not trimmed, so `"  Draft "` becomes `"--draft-"`.

use log::debug;

use crate::error::SlugError;

/// Turn `title` into a slug.
///
/// Every space is replaced independently, so runs of spaces become runs of
/// hyphens of the same length. This never fails.
pub fn slugify(title: &str) -> String {
    title.replace(' ', "-").to_lowercase()
}

/// Build a slug from the invocation arguments (program name excluded).
///
/// Only the first argument is used; anything after it is ignored.
///
/// # Errors
/// Returns [`SlugError::MissingArgument`] when `args` is empty.
pub fn generate_slug<S: AsRef<str>>(args: &[S]) -> Result<String, SlugError> {
    let Some(title) = args.first() else {
        return Err(SlugError::MissingArgument);
    };
    if args.len() > 1 {
        debug!("ignoring {} extra argument(s)", args.len() - 1);
    }

    let slug = slugify(title.as_ref());
    debug!("slugified {:?} -> {:?}", title.as_ref(), slug);
    Ok(slug)
}
