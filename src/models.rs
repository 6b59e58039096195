use serde::{Deserialize, Serialize};

/// A note as returned by the backend's `/api/notes` endpoint.
///
/// `created_at` and `updated_at` are ISO-8601 strings when present. The
/// backend always sends `created_at`, but the field is optional here so a
/// malformed record degrades to "undated" instead of failing the whole fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub user_id: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub count: u64,
}

/// Everything derived from the current note collection. Recomputed from
/// scratch on every request; holds no reference back to the notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AnalyticsSnapshot {
    pub total: u64,
    pub pinned: u64,
    pub favorites: u64,
    pub tags: Vec<TagCount>,
    pub weekly: Vec<SeriesPoint>,
    pub monthly: Vec<SeriesPoint>,
}

/// Bounded slices of the snapshot, one per chart panel. An empty panel means
/// the page shows its "no data" text instead of an empty chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub tags: Vec<TagCount>,
    pub weekly: Vec<SeriesPoint>,
    pub monthly: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Weekly,
    Monthly,
    Yearly,
}

/// One point of a pre-aggregated admin timeline. The label's shape depends on
/// the granularity: an ISO date for weekly, `YYYY-MM` for monthly, and an
/// opaque string for yearly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminTimeline {
    #[serde(default)]
    pub weekly: Vec<TimelinePoint>,
    #[serde(default)]
    pub monthly: Vec<TimelinePoint>,
    #[serde(default)]
    pub yearly: Vec<TimelinePoint>,
}

impl AdminTimeline {
    pub fn series(&self, range: Granularity) -> &[TimelinePoint] {
        match range {
            Granularity::Weekly => &self.weekly,
            Granularity::Monthly => &self.monthly,
            Granularity::Yearly => &self.yearly,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminAnalytics {
    #[serde(default)]
    pub notes_timeline: AdminTimeline,
    #[serde(default)]
    pub users_timeline: AdminTimeline,
}

impl std::str::FromStr for Granularity {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "weekly" => Ok(Granularity::Weekly),
            "monthly" => Ok(Granularity::Monthly),
            "yearly" => Ok(Granularity::Yearly),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    #[serde(default)]
    pub range: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub snapshot: AnalyticsSnapshot,
    pub charts: ChartData,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub note_count: usize,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub range: Granularity,
    pub notes: Vec<TimelinePoint>,
    pub users: Vec<TimelinePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_deserializes_with_missing_optional_fields() {
        let note: Note =
            serde_json::from_str(r#"{"id": 7, "title": "sparse", "user_id": 1}"#)
                .expect("sparse note should deserialize");
        assert!(note.tags.is_empty());
        assert!(note.attachments.is_empty());
        assert!(!note.pinned);
        assert!(!note.favorite);
        assert!(note.created_at.is_none());
    }

    #[test]
    fn granularity_uses_lowercase_wire_names() {
        let g: Granularity = serde_json::from_str(r#""monthly""#).unwrap();
        assert_eq!(g, Granularity::Monthly);
        assert_eq!(
            serde_json::to_string(&Granularity::Weekly).unwrap(),
            r#""weekly""#
        );
    }
}
