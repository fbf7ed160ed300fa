//! Filename-like caption detection.
//!
//! Callers sometimes send screenshot filenames instead of captions
//! (`screenshot_1.png`, `IMG_0042`). Their digits are not proof points, so
//! such captions are kept out of the numeric corpus. The classifier is a
//! short chain of independent checks; any one of them is enough.

use once_cell::sync::Lazy;
use regex::Regex;

/// Image extensions recognized at the end of a caption (lowercase, no dot).
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "heic", "heif", "bmp", "tif", "tiff", "svg",
];

// prefix? sep? letters sep? digits: e.g. "screenshot_1", "img-0042", "shot12", "7"
static NUMBERED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:img|image|screenshot|screen|photo|pic)?[-_]?[a-z]*[-_]?\d+$")
        .expect("numbered filename regex")
});

/// True if the caption looks like a file name rather than marketing text.
pub fn is_filename_like(caption: &str) -> bool {
    let c = caption.trim();
    if c.is_empty() {
        return false;
    }
    has_path_separator(c) || has_image_extension(c) || looks_like_numbered_name(c)
}

pub(crate) fn has_path_separator(caption: &str) -> bool {
    caption.contains('/') || caption.contains('\\')
}

pub(crate) fn has_image_extension(caption: &str) -> bool {
    let Some((stem, ext)) = caption.rsplit_once('.') else {
        return false;
    };
    !stem.is_empty()
        && IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
}

pub(crate) fn looks_like_numbered_name(caption: &str) -> bool {
    NUMBERED_NAME.is_match(caption)
}
