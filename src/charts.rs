use crate::models::{AnalyticsSnapshot, ChartData};

pub const TAG_PANEL_LIMIT: usize = 8;
pub const WEEKLY_PANEL_LIMIT: usize = 8;
pub const MONTHLY_PANEL_LIMIT: usize = 6;

/// Cut the snapshot down to what the chart panels actually draw: the top
/// tags, and the most recent week/month buckets present in the data. Absent
/// buckets are not zero-filled; an empty series stays empty and the page
/// shows its "no data" text instead.
pub fn select_chart_data(snapshot: &AnalyticsSnapshot) -> ChartData {
    ChartData {
        tags: snapshot.tags.iter().take(TAG_PANEL_LIMIT).cloned().collect(),
        weekly: last_n(&snapshot.weekly, WEEKLY_PANEL_LIMIT),
        monthly: last_n(&snapshot.monthly, MONTHLY_PANEL_LIMIT),
    }
}

fn last_n<T: Clone>(series: &[T], n: usize) -> Vec<T> {
    let start = series.len().saturating_sub(n);
    series[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeriesPoint, TagCount};

    fn tag(name: &str, count: u64) -> TagCount {
        TagCount {
            tag: name.to_string(),
            count,
        }
    }

    fn point(label: &str, count: u64) -> SeriesPoint {
        SeriesPoint {
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn empty_snapshot_yields_empty_panels() {
        let charts = select_chart_data(&AnalyticsSnapshot::default());
        assert!(charts.tags.is_empty());
        assert!(charts.weekly.is_empty());
        assert!(charts.monthly.is_empty());
    }

    #[test]
    fn tag_panel_keeps_first_eight_entries() {
        // Ten tags, all tied at one use: the aggregator orders ties
        // alphabetically, so the last two alphabetically are dropped.
        let names = ["ada", "bis", "cur", "dot", "elm", "fir", "gum", "hub", "ion", "jot"];
        let snapshot = AnalyticsSnapshot {
            tags: names.iter().map(|name| tag(name, 1)).collect(),
            ..AnalyticsSnapshot::default()
        };

        let charts = select_chart_data(&snapshot);
        assert_eq!(charts.tags.len(), 8);
        let kept: Vec<&str> = charts.tags.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(kept, &names[..8]);
    }

    #[test]
    fn tag_panel_returns_all_when_fewer_than_eight() {
        let snapshot = AnalyticsSnapshot {
            tags: vec![tag("work", 3), tag("home", 1)],
            ..AnalyticsSnapshot::default()
        };
        assert_eq!(select_chart_data(&snapshot).tags.len(), 2);
    }

    #[test]
    fn weekly_panel_keeps_last_eight_buckets() {
        let weekly: Vec<SeriesPoint> = (1..=10)
            .map(|day| point(&format!("2024-03-{day:02}"), day as u64))
            .collect();
        let snapshot = AnalyticsSnapshot {
            weekly,
            ..AnalyticsSnapshot::default()
        };

        let charts = select_chart_data(&snapshot);
        assert_eq!(charts.weekly.len(), 8);
        assert_eq!(charts.weekly[0].label, "2024-03-03");
        assert_eq!(charts.weekly[7].label, "2024-03-10");
    }

    #[test]
    fn monthly_panel_keeps_last_six_buckets() {
        let monthly = vec![
            point("Apr 2024", 1),
            point("Aug 2024", 2),
            point("Dec 2024", 3),
            point("Feb 2024", 4),
            point("Jan 2024", 5),
            point("Jul 2024", 6),
            point("Jun 2024", 7),
        ];
        let snapshot = AnalyticsSnapshot {
            monthly,
            ..AnalyticsSnapshot::default()
        };

        let charts = select_chart_data(&snapshot);
        assert_eq!(charts.monthly.len(), 6);
        assert_eq!(charts.monthly[0].label, "Aug 2024");
        assert_eq!(charts.monthly[5].label, "Jun 2024");
    }
}
