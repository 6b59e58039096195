use crate::models::{AnalyticsSnapshot, Note, SeriesPoint, TagCount};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Derive an analytics snapshot from the current note collection.
///
/// Pure and idempotent: no I/O, no clock reads, safe to call on every
/// request. Notes without a parseable `created_at` still count toward the
/// totals but contribute to neither time series.
pub fn build_snapshot(notes: &[Note]) -> AnalyticsSnapshot {
    let total = notes.len() as u64;
    let pinned = notes.iter().filter(|note| note.pinned).count() as u64;
    let favorites = notes.iter().filter(|note| note.favorite).count() as u64;

    let mut tag_counts: BTreeMap<&str, u64> = BTreeMap::new();
    let mut weekly_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut monthly_counts: BTreeMap<String, u64> = BTreeMap::new();

    for note in notes {
        for tag in &note.tags {
            *tag_counts.entry(tag.as_str()).or_default() += 1;
        }
        if let Some(date) = note.created_at.as_deref().and_then(parse_created_date) {
            *weekly_counts.entry(week_key(date)).or_default() += 1;
            *monthly_counts.entry(month_label(date)).or_default() += 1;
        }
    }

    let mut tags: Vec<TagCount> = tag_counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    // Stable sort over alphabetically ordered input: ties stay alphabetical.
    tags.sort_by(|a, b| b.count.cmp(&a.count));

    AnalyticsSnapshot {
        total,
        pinned,
        favorites,
        tags,
        weekly: to_series(weekly_counts),
        monthly: to_series(monthly_counts),
    }
}

/// Calendar date portion of an ISO-8601 timestamp, taken as written (the
/// offset, if any, is not converted away). Accepts offset-aware, naive, and
/// bare-date forms.
pub(crate) fn parse_created_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamped) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamped.date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

// Weeks start on Sunday, matching what the dashboard has always displayed.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

fn week_key(date: NaiveDate) -> String {
    week_start(date).format("%Y-%m-%d").to_string()
}

// English month abbreviations, e.g. "Mar 2024". Keys sort by label text, so
// "Apr 2024" lands before "Jan 2024"; the page renders them in that order.
fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

fn to_series(counts: BTreeMap<String, u64>) -> Vec<SeriesPoint> {
    counts
        .into_iter()
        .map(|(label, count)| SeriesPoint { label, count })
        .collect()
}
