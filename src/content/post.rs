//! Post model

use serde::{Deserialize, Serialize};

/// One parsed note file
///
/// The first line of a note file is its title; everything after the first
/// line break is the body, kept verbatim as trusted HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Identifier - the filename within its category
    pub id: String,

    /// Title line, trimmed
    pub title: String,

    /// Body HTML
    pub content: String,
}

impl Post {
    /// Parse a post from raw file text.
    ///
    /// A file without any line break (empty or single-line) has no title
    /// line; the filename stands in and the whole text becomes the body.
    pub fn parse(filename: &str, text: &str) -> Self {
        match text.find('\n') {
            Some(split) => Self {
                id: filename.to_string(),
                title: text[..split].trim().to_string(),
                content: text[split + 1..].to_string(),
            },
            None => Self {
                id: filename.to_string(),
                title: filename.to_string(),
                content: text.to_string(),
            },
        }
    }

    /// Placeholder for a file that could not be fetched
    pub fn unavailable(filename: &str) -> Self {
        Self {
            id: filename.to_string(),
            title: "Error".to_string(),
            content: "File not found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_body() {
        let post = Post::parse("meetup_001.txt", "Title line\nBody text");
        assert_eq!(post.id, "meetup_001.txt");
        assert_eq!(post.title, "Title line");
        assert_eq!(post.content, "Body text");
    }

    #[test]
    fn test_parse_trims_title() {
        let post = Post::parse("a.txt", "  2024-05-01 Meetup  \r\n<p>hi</p>");
        assert_eq!(post.title, "2024-05-01 Meetup");
        assert_eq!(post.content, "<p>hi</p>");
    }

    #[test]
    fn test_parse_no_line_break_uses_filename() {
        let post = Post::parse("book_001.txt", "just one line");
        assert_eq!(post.title, "book_001.txt");
        assert_eq!(post.content, "just one line");
    }

    #[test]
    fn test_parse_empty_file() {
        let post = Post::parse("empty.txt", "");
        assert_eq!(post.title, "empty.txt");
        assert_eq!(post.content, "");
    }

    #[test]
    fn test_parse_body_keeps_remaining_line_breaks() {
        let post = Post::parse("a.txt", "Title\n<p>one</p>\n<p>two</p>\n");
        assert_eq!(post.title, "Title");
        assert_eq!(post.content, "<p>one</p>\n<p>two</p>\n");
    }

    #[test]
    fn test_unavailable_placeholder() {
        let post = Post::unavailable("gone.txt");
        assert_eq!(post.id, "gone.txt");
        assert_eq!(post.title, "Error");
        assert_eq!(post.content, "File not found");
    }
}
