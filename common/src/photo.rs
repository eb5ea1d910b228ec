use std::sync::LazyLock;

use regex::Regex;

// https://drive.google.com/file/d/{id}/view?usp=sharing
static DRIVE_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://drive\.google\.com/file/d/([A-Za-z0-9_-]+)")
        .expect("drive file pattern is valid")
});

// https://drive.google.com/open?id={id} and https://drive.google.com/uc?id={id}
static DRIVE_QUERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://drive\.google\.com/(?:open|uc)\?(?:[^#]*&)?id=([A-Za-z0-9_-]+)")
        .expect("drive query pattern is valid")
});

/// Rewrites a shared Drive link into a URL an `<img>` can load directly.
///
/// Unrecognized URLs pass through unchanged; an empty input gives `None`.
pub fn photo_view_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let id = DRIVE_FILE
        .captures(url)
        .or_else(|| DRIVE_QUERY.captures(url))
        .and_then(|caps| caps.get(1));

    match id {
        Some(id) => Some(format!(
            "https://drive.google.com/thumbnail?id={}&sz=w400",
            id.as_str()
        )),
        None => Some(url.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::photo_view_url;

    #[test]
    fn test_file_link() {
        assert_eq!(
            photo_view_url("https://drive.google.com/file/d/1AbC_d-9/view?usp=sharing").as_deref(),
            Some("https://drive.google.com/thumbnail?id=1AbC_d-9&sz=w400")
        );
    }

    #[test]
    fn test_open_link() {
        assert_eq!(
            photo_view_url("https://drive.google.com/open?id=XYZ123").as_deref(),
            Some("https://drive.google.com/thumbnail?id=XYZ123&sz=w400")
        );
        assert_eq!(
            photo_view_url("https://drive.google.com/uc?export=view&id=XYZ123").as_deref(),
            Some("https://drive.google.com/thumbnail?id=XYZ123&sz=w400")
        );
    }

    #[test]
    fn test_other_urls_pass_through() {
        assert_eq!(
            photo_view_url("https://example.com/photo.jpg").as_deref(),
            Some("https://example.com/photo.jpg")
        );
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(photo_view_url(""), None);
        assert_eq!(photo_view_url("   "), None);
    }
}
