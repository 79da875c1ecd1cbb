/// Marker the wallet service embeds in its terms-of-use HTML.
const TITLE_MARKER: &str = "<title>user_agreement</title>";

/// Strips the embedded title marker from terms-of-use text before display.
pub fn clean(html: &str) -> String {
    html.replace(TITLE_MARKER, "")
}
