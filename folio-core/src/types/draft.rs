//! Editable copy of a book's fields

use super::Book;
use crate::error::FieldParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An editable field of a book. The ISBN is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Subtitle,
    Author,
    Publisher,
    NumPages,
    Price,
    Cover,
    Description,
}

impl Field {
    /// All editable fields in form order
    pub const ALL: [Field; 8] = [
        Field::Title,
        Field::Subtitle,
        Field::Author,
        Field::Publisher,
        Field::NumPages,
        Field::Price,
        Field::Cover,
        Field::Description,
    ];

    /// Form control name, matching the wire name of the field
    pub fn control_name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Subtitle => "subtitle",
            Field::Author => "author",
            Field::Publisher => "publisher",
            Field::NumPages => "numPages",
            Field::Price => "price",
            Field::Cover => "cover",
            Field::Description => "abstract",
        }
    }

    /// Human label used by form renderers
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Subtitle => "Subtitle",
            Field::Author => "Author",
            Field::Publisher => "Publisher",
            Field::NumPages => "Number of Pages",
            Field::Price => "Price",
            Field::Cover => "Cover Image URL",
            Field::Description => "Description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_name())
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Field::Title),
            "subtitle" => Ok(Field::Subtitle),
            "author" => Ok(Field::Author),
            "publisher" => Ok(Field::Publisher),
            "numPages" | "num_pages" | "pages" => Ok(Field::NumPages),
            "price" => Ok(Field::Price),
            "cover" => Ok(Field::Cover),
            "abstract" | "description" => Ok(Field::Description),
            other => Err(FieldParseError::UnknownField(other.to_string())),
        }
    }
}

/// The mutable field set of an edit session, also the update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditDraft {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub publisher: String,
    pub num_pages: u32,
    pub price: String,
    pub cover: String,
    #[serde(rename = "abstract")]
    pub description: String,
}

impl EditDraft {
    /// Seed a draft from every editable field of a book.
    /// Missing optional fields become empty strings.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            subtitle: book.subtitle.clone().unwrap_or_default(),
            author: book.author.clone(),
            publisher: book.publisher.clone().unwrap_or_default(),
            num_pages: book.num_pages,
            price: book.price.clone(),
            cover: book.cover.clone().unwrap_or_default(),
            description: book.description.clone().unwrap_or_default(),
        }
    }

    /// Text value of a field as a form would display it
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::NumPages => self.num_pages.to_string(),
            _ => self.text(field).unwrap_or_default().to_string(),
        }
    }

    /// Borrow a text field. `None` for non-text fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => Some(&self.title),
            Field::Subtitle => Some(&self.subtitle),
            Field::Author => Some(&self.author),
            Field::Publisher => Some(&self.publisher),
            Field::Price => Some(&self.price),
            Field::Cover => Some(&self.cover),
            Field::Description => Some(&self.description),
            Field::NumPages => None,
        }
    }

    /// Assign raw input to a field, parsing numeric fields
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), FieldParseError> {
        let slot = match field {
            Field::NumPages => {
                self.num_pages = raw
                    .trim()
                    .parse()
                    .map_err(|_| FieldParseError::InvalidNumber {
                        field: field.control_name().to_string(),
                        value: raw.to_string(),
                    })?;
                return Ok(());
            }
            Field::Title => &mut self.title,
            Field::Subtitle => &mut self.subtitle,
            Field::Author => &mut self.author,
            Field::Publisher => &mut self.publisher,
            Field::Price => &mut self.price,
            Field::Cover => &mut self.cover,
            Field::Description => &mut self.description,
        };
        *slot = raw.to_string();
        Ok(())
    }
}

/// Parse a `field=value` assignment
pub fn parse_assignment(s: &str) -> Result<(Field, String), FieldParseError> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| FieldParseError::MalformedAssignment(s.to_string()))?;
    Ok((name.trim().parse()?, value.to_string()))
}
