use crate::analytics::parse_created_date;
use crate::models::{Granularity, TimelinePoint};
use chrono::{Datelike, NaiveDate};

/// Turn a raw admin-timeline label into an axis label.
///
/// Weekly labels are ISO dates, monthly labels are `YYYY-MM`, yearly labels
/// pass through untouched. Anything that fails to parse is returned as-is;
/// this function never fails.
pub fn format_timeline_label(label: &str, granularity: Granularity) -> String {
    match granularity {
        Granularity::Weekly => match parse_created_date(label) {
            Some(date) => format!("{} {}", date.format("%b"), date.day()),
            None => label.to_string(),
        },
        Granularity::Monthly => format_month_label(label),
        Granularity::Yearly => label.to_string(),
    }
}

/// Apply [`format_timeline_label`] across a fetched series, keeping counts.
pub fn format_timeline(points: &[TimelinePoint], granularity: Granularity) -> Vec<TimelinePoint> {
    points
        .iter()
        .map(|point| TimelinePoint {
            label: format_timeline_label(&point.label, granularity),
            count: point.count,
        })
        .collect()
}

fn format_month_label(label: &str) -> String {
    let Some((year, month)) = label.split_once('-') else {
        return label.to_string();
    };
    let first_of_month = year
        .parse::<i32>()
        .ok()
        .zip(month.parse::<u32>().ok())
        .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1));
    match first_of_month {
        Some(date) => format!("{} {}", date.format("%b"), date.year()),
        None => label.to_string(),
    }
}
