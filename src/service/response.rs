//! Decoding of search service responses.
//!
//! The service answers with a collection document:
//!
//! ```json
//! {
//!   "collection": {
//!     "items": [
//!       {
//!         "href": "https://images-assets.nasa.gov/image/as11-40-5874/collection.json",
//!         "links": [{ "href": "https://.../as11-40-5874~thumb.jpg", "rel": "preview", "render": "image" }],
//!         "data": [{
//!           "title": "Apollo 11 Mission image",
//!           "description": "...",
//!           "date_created": "1969-07-20T00:00:00Z",
//!           "keywords": ["APOLLO 11", "Moon"],
//!           "nasa_id": "as11-40-5874",
//!           "center": "JSC"
//!         }]
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! Only the envelope is checked strictly. An individual item that does not
//! match the expected shape is kept as an empty item so it degrades when
//! rendered instead of failing the whole search.

use crate::domain::error::{Result, StargazerError};
use crate::domain::{ItemId, ItemLink, ItemMetadata, ResultItem};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    collection: WireCollection,
}

#[derive(Debug, Deserialize)]
struct WireCollection {
    items: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct WireItem {
    #[serde(default)]
    links: Vec<WireLink>,
    #[serde(default)]
    data: Vec<WireData>,
}

#[derive(Debug, Deserialize)]
struct WireLink {
    href: Option<String>,
    rel: Option<String>,
    render: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireData {
    title: Option<String>,
    description: Option<String>,
    date_created: Option<String>,
    keywords: Option<WireKeywords>,
    nasa_id: Option<String>,
    center: Option<String>,
}

/// Keywords usually arrive as a list, but some records carry a single string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireKeywords {
    Many(Vec<String>),
    One(String),
}

impl WireKeywords {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::Many(keywords) => keywords,
            Self::One(keyword) => vec![keyword],
        }
    }
}

impl WireItem {
    fn into_result_item(self, position: usize) -> ResultItem {
        let links = self
            .links
            .into_iter()
            .filter_map(|link| {
                let href = link.href.filter(|href| !href.is_empty())?;
                Some(ItemLink {
                    href,
                    rel: link.rel,
                    render: link.render,
                })
            })
            .collect();

        let data = self.data.into_iter().next().unwrap_or_default();

        ResultItem {
            id: ItemId(position),
            asset_id: data.nasa_id,
            links,
            metadata: ItemMetadata {
                title: data.title,
                description: data.description,
                date_created: data.date_created,
                keywords: data.keywords.map(WireKeywords::into_vec),
                center: data.center,
            },
        }
    }
}

/// Turns a raw web request result into an ordered list of result items.
///
/// # Errors
///
/// Returns [`StargazerError::Http`] for any status outside `200..300` and
/// [`StargazerError::Payload`] when the body is not a collection document.
///
/// # Examples
///
/// ```
/// use stargazer::service::decode_response;
///
/// let body = br#"{"collection":{"items":[{"links":[],"data":[{"title":"Orion"}]}]}}"#;
/// let items = decode_response(200, body)?;
/// assert_eq!(items[0].title(), "Orion");
///
/// assert!(decode_response(500, body).is_err());
/// # Ok::<(), stargazer::StargazerError>(())
/// ```
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<ResultItem>> {
    let _span = tracing::debug_span!("decode_response", status, body_len = body.len()).entered();

    if !(200..300).contains(&status) {
        tracing::debug!(status, "non-success status from search service");
        return Err(StargazerError::Http { status });
    }

    let envelope: SearchEnvelope = serde_json::from_slice(body)?;

    let items: Vec<ResultItem> = envelope
        .collection
        .items
        .into_iter()
        .enumerate()
        .map(|(position, raw)| {
            let wire = serde_json::from_value::<WireItem>(raw).unwrap_or_else(|e| {
                tracing::debug!(position, error = %e, "malformed item, keeping it empty");
                WireItem::default()
            });
            wire.into_result_item(position)
        })
        .collect();

    tracing::debug!(item_count = items.len(), "search payload decoded");
    Ok(items)
}
