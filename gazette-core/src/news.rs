use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gazette_types::NewsId;

/// A published news item.
///
/// News items are created administratively (backend seeding, admin tooling)
/// and are immutable from the perspective of the listing and detail services.
/// `published_on` is a calendar date: listing order does not depend on a
/// time-of-day component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Unique, stable identifier.
    pub id: NewsId,
    /// Headline shown in listings.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Publication date driving listing order.
    pub published_on: NaiveDate,
}
