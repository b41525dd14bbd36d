//! Search result domain model.
//!
//! A [`ResultItem`] is one matched asset returned by the image search service.
//! Every field the service may omit is optional here, so a sparse item still
//! makes it into the result list and degrades at render time instead of
//! failing the whole search.

use serde::{Deserialize, Serialize};

/// Placeholder shown when an item carries no keywords.
pub const KEYWORDS_PLACEHOLDER: &str = "N/A";

/// Identity of an item within a single result list.
///
/// The service does not promise unique asset identifiers, so identity is the
/// item's position in the list it arrived in. It is meaningless across lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub usize);

/// A resolvable link attached to an item (preview image, thumbnail, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLink {
    pub href: String,
    pub rel: Option<String>,
    pub render: Option<String>,
}

/// Descriptive metadata for an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_created: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub center: Option<String>,
}

/// One matched asset in a result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: ItemId,
    /// Service-side asset identifier, when the service sent one.
    pub asset_id: Option<String>,
    pub links: Vec<ItemLink>,
    pub metadata: ItemMetadata,
}

impl ResultItem {
    /// Creates an item with the given position and title and no links.
    ///
    /// # Examples
    ///
    /// ```
    /// use stargazer::domain::ResultItem;
    ///
    /// let item = ResultItem::new(0, "Apollo 11");
    /// assert_eq!(item.title(), "Apollo 11");
    /// assert!(item.primary_link().is_none());
    /// ```
    #[must_use]
    pub fn new(position: usize, title: impl Into<String>) -> Self {
        Self {
            id: ItemId(position),
            asset_id: None,
            links: Vec::new(),
            metadata: ItemMetadata {
                title: Some(title.into()),
                ..ItemMetadata::default()
            },
        }
    }

    /// Title for display, empty when the service sent none.
    #[must_use]
    pub fn title(&self) -> &str {
        self.metadata.title.as_deref().unwrap_or_default()
    }

    /// URL of the first link descriptor, if any.
    #[must_use]
    pub fn primary_link(&self) -> Option<&str> {
        self.links.first().map(|link| link.href.as_str())
    }

    /// Description for display, empty when absent.
    #[must_use]
    pub fn description(&self) -> &str {
        self.metadata.description.as_deref().unwrap_or_default()
    }

    /// Creation date exactly as the service reported it, empty when absent.
    #[must_use]
    pub fn date_created(&self) -> &str {
        self.metadata.date_created.as_deref().unwrap_or_default()
    }

    /// Creation date shortened to `YYYY-MM-DD`.
    ///
    /// Falls back to the raw string when it is not an RFC 3339 timestamp or a
    /// plain date, and to `None` when the item has no date at all.
    ///
    /// ```
    /// use stargazer::domain::ResultItem;
    ///
    /// let mut item = ResultItem::new(0, "Earthrise");
    /// item.metadata.date_created = Some("1968-12-24T00:00:00Z".to_string());
    /// assert_eq!(item.short_date().as_deref(), Some("1968-12-24"));
    /// ```
    #[must_use]
    pub fn short_date(&self) -> Option<String> {
        let raw = self.metadata.date_created.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.format("%Y-%m-%d").to_string());
        }

        let date_part = raw.split('T').next().unwrap_or(raw);
        chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_or_else(
            |_| Some(raw.to_string()),
            |date| Some(date.format("%Y-%m-%d").to_string()),
        )
    }

    /// Keywords joined with `", "`, or [`KEYWORDS_PLACEHOLDER`] when there are none.
    #[must_use]
    pub fn keywords_display(&self) -> String {
        match self.metadata.keywords.as_deref() {
            Some(keywords) if !keywords.is_empty() => keywords.join(", "),
            _ => KEYWORDS_PLACEHOLDER.to_string(),
        }
    }
}
