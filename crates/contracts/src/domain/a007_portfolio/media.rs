//! Video link helpers for portfolio items

/// Turn a YouTube share or watch link into an embeddable player URL.
/// Other links are returned unchanged.
pub fn embed_url(url: &str) -> String {
    let url = url.trim();
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        let video_id = rest.split(['?', '&', '#']).next().unwrap_or_default();
        return format!("https://www.youtube.com/embed/{}", video_id);
    }
    if url.contains("watch?v=") {
        return url.replacen("watch?v=", "embed/", 1);
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_short_link() {
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXcQ?si=abc"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_embed_watch_link() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_embed_other_link() {
        assert_eq!(embed_url("https://vimeo.com/1"), "https://vimeo.com/1");
    }
}
