//! Record shapes shared with the platform server.
//!
//! DESIGN
//! ======
//! The feed mixes three record kinds behind one internally tagged enum so
//! list state and delegation handlers can stay schema-driven. Records are
//! opaque to the views: unknown attributes ride along in `details` and
//! optional fields deserialize leniently instead of failing the whole feed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email, if shared.
    pub email: Option<String>,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

/// A geographic coordinate pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// A reported crime record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrimeRecord {
    /// Unique record identifier (UUID string).
    pub id: String,
    /// Short headline shown in feed cards.
    pub title: String,
    /// Reporter-supplied description of what happened.
    pub description: String,
    /// Where the crime occurred, if the reporter attached a location.
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// When the crime occurred (ISO 8601), if known.
    #[serde(default)]
    pub occurred_at: Option<String>,
    /// Reporting user (UUID string), absent for anonymous reports.
    #[serde(default)]
    pub reporter_id: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Open-ended per-report attributes (category, severity, media, etc.).
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Organization category for an agency. Unrecognized wire values map to
/// `Other` instead of failing the whole feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgencyKind {
    Government,
    Profit,
    Nonprofit,
    Other,
}

impl AgencyKind {
    /// Lowercase category as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            AgencyKind::Government => "government",
            AgencyKind::Profit => "profit",
            AgencyKind::Nonprofit => "nonprofit",
            AgencyKind::Other => "other",
        }
    }
}

impl From<String> for AgencyKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "government" => AgencyKind::Government,
            "profit" => AgencyKind::Profit,
            "nonprofit" => AgencyKind::Nonprofit,
            _ => AgencyKind::Other,
        }
    }
}

impl From<AgencyKind> for String {
    fn from(value: AgencyKind) -> Self {
        value.as_str().to_owned()
    }
}

/// An agency registered on the platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgencyRecord {
    /// Unique agency identifier (UUID string).
    pub id: String,
    /// Agency display name.
    pub name: String,
    /// Organization category.
    pub category: AgencyKind,
    /// Public description of the agency.
    pub description: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// A generic feed post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Unique post identifier (UUID string).
    pub id: String,
    /// Post headline.
    pub title: String,
    /// Post body text.
    pub body: String,
    /// Authoring user (UUID string).
    pub author_id: String,
    /// Author display name, if the server joined it in.
    #[serde(default)]
    pub author_name: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// Discriminant for the feed union, matching the wire `kind` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostKind {
    Crime,
    Agency,
    Post,
}

impl PostKind {
    /// Lowercase tag as used on the wire and in badge labels.
    pub fn as_str(self) -> &'static str {
        match self {
            PostKind::Crime => "crime",
            PostKind::Agency => "agency",
            PostKind::Post => "post",
        }
    }
}

/// One feed entry: a crime, an agency, or a plain post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeedItem {
    Crime(CrimeRecord),
    Agency(AgencyRecord),
    Post(PostRecord),
}

impl FeedItem {
    /// The tag this entry carries.
    pub fn kind(&self) -> PostKind {
        match self {
            FeedItem::Crime(_) => PostKind::Crime,
            FeedItem::Agency(_) => PostKind::Agency,
            FeedItem::Post(_) => PostKind::Post,
        }
    }

    /// Identifier of the wrapped record.
    pub fn id(&self) -> &str {
        match self {
            FeedItem::Crime(crime) => &crime.id,
            FeedItem::Agency(agency) => &agency.id,
            FeedItem::Post(post) => &post.id,
        }
    }

    /// Headline shown in feed cards. Agencies use their display name.
    pub fn title(&self) -> &str {
        match self {
            FeedItem::Crime(crime) => &crime.title,
            FeedItem::Agency(agency) => &agency.name,
            FeedItem::Post(post) => &post.title,
        }
    }

    /// Body text shown under the headline.
    pub fn summary(&self) -> &str {
        match self {
            FeedItem::Crime(crime) => &crime.description,
            FeedItem::Agency(agency) => &agency.description,
            FeedItem::Post(post) => &post.body,
        }
    }

    /// The wrapped crime record, if this entry is a crime.
    pub fn as_crime(&self) -> Option<&CrimeRecord> {
        match self {
            FeedItem::Crime(crime) => Some(crime),
            _ => None,
        }
    }
}
