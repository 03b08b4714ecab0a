//! The Book read model as served by the catalog API

use serde::{Deserialize, Serialize};

/// A catalog record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// ISBN, the immutable key of the record
    pub isbn: String,

    /// Book title
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Primary author
    pub author: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Page count
    #[serde(default)]
    pub num_pages: u32,

    /// Price, kept as the text the API sends
    #[serde(default)]
    pub price: String,

    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    /// Multi-line description
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Owner of the record on the API side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl Book {
    /// Create a book with the required fields
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            subtitle: None,
            author: author.into(),
            publisher: None,
            num_pages: 0,
            price: String::new(),
            cover: None,
            description: None,
            user_id: None,
        }
    }

    /// Set subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Set page count
    pub fn with_num_pages(mut self, num_pages: u32) -> Self {
        self.num_pages = num_pages;
        self
    }

    /// Set price
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Set cover URL
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Cover URL, treating an empty string as no cover
    pub fn cover_url(&self) -> Option<&str> {
        self.cover.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_wire_names() {
        let book = Book::new("978-0441013593", "Dune", "Frank Herbert")
            .with_num_pages(412)
            .with_description("Arrakis.");
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["numPages"], 412);
        assert_eq!(json["abstract"], "Arrakis.");
        assert!(json.get("subtitle").is_none());
    }

    #[test]
    fn test_book_missing_optionals() {
        let json = r#"{"isbn":"1","title":"T","author":"A","price":"9.99"}"#;
        let book: Book = serde_json::from_str(json).unwrap();

        assert_eq!(book.num_pages, 0);
        assert_eq!(book.price, "9.99");
        assert!(book.subtitle.is_none());
        assert!(book.cover_url().is_none());
    }

    #[test]
    fn test_empty_cover_is_no_cover() {
        let book = Book::new("1", "T", "A").with_cover("");
        assert!(book.cover_url().is_none());
    }
}
