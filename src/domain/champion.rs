//! Champion domain model.
//!
//! A champion is the selectable entity shown as a tile in the draft grid. The
//! wire names used by the backend (`champion_id`, `name`, `icon_url`) are mapped
//! onto Rust field names with serde renames.

use serde::{Deserialize, Serialize};

/// A selectable champion as returned by the backend.
///
/// `id` is unique within one loaded list and is used as the tile key. A missing
/// `icon_url` reads as empty; the tile then shows its badge without a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    #[serde(rename = "champion_id")]
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub icon_url: String,
}

impl Champion {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            icon_url: icon_url.into(),
        }
    }

    /// Returns the two-letter badge shown in place of the icon.
    ///
    /// Takes the first two alphanumeric characters of the display name, the
    /// first upper-cased and the second lower-cased. Falls back to the id, and
    /// to `"??"` when neither has alphanumeric characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use draftboard::domain::Champion;
    ///
    /// let kaisa = Champion::new("Kaisa", "Kai'Sa", "u");
    /// assert_eq!(kaisa.monogram(), "Ka");
    /// ```
    #[must_use]
    pub fn monogram(&self) -> String {
        let source = if self.display_name.chars().any(char::is_alphanumeric) {
            &self.display_name
        } else {
            &self.id
        };

        let mut letters = source.chars().filter(|c| c.is_alphanumeric());
        match (letters.next(), letters.next()) {
            (Some(first), Some(second)) => first
                .to_uppercase()
                .chain(second.to_lowercase())
                .collect(),
            (Some(first), None) => first.to_uppercase().collect(),
            _ => "??".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_names() {
        let champion: Champion = serde_json::from_str(
            r#"{"champion_id":"MonkeyKing","name":"Wukong","icon_url":"https://cdn/MonkeyKing.png"}"#,
        )
        .unwrap();
        assert_eq!(champion.id, "MonkeyKing");
        assert_eq!(champion.display_name, "Wukong");
        assert_eq!(champion.icon_url, "https://cdn/MonkeyKing.png");
    }

    #[test]
    fn missing_icon_url_is_empty() {
        let champion: Champion =
            serde_json::from_str(r#"{"champion_id":"Zed","name":"Zed"}"#).unwrap();
        assert_eq!(champion, Champion::new("Zed", "Zed", ""));
    }

    #[test]
    fn monogram_skips_punctuation() {
        assert_eq!(Champion::new("Chogath", "Cho'Gath", "u").monogram(), "Ch");
        assert_eq!(Champion::new("DrMundo", "dr. mundo", "u").monogram(), "Dr");
        assert_eq!(Champion::new("Vi", "V", "u").monogram(), "V");
        assert_eq!(Champion::new("X1", "...", "u").monogram(), "X1");
        assert_eq!(Champion::new("-", "-", "u").monogram(), "??");
    }
}
