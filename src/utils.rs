//! Filename helpers

/// Derive the output filename for an episode title.
///
/// Replaces every `/` with `_` so the title cannot escape into path
/// components, then appends the `.mp3` extension. No other characters are
/// escaped; titles containing other filesystem-reserved characters are a
/// known limitation.
pub fn sanitized_filename(title: &str) -> String {
    format!("{}.mp3", title.replace('/', "_"))
}
