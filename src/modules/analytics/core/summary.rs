// Aggregation over completed time logs.
//
// Pure grouping: the handler fetches matching records and project display
// attributes; this module only folds them into the summary shape.

use crate::modules::projects::core::project::ProjectDisplay;
use crate::modules::time_logs::core::time_log::TimeLogRecord;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Result size guard on the day buckets.
pub const MAX_DAY_BUCKETS: usize = 365;

/// Name shown for projects that no longer exist.
pub const UNKNOWN_PROJECT: &str = "Unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallSummary {
    pub total_duration: i64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: Uuid,
    pub total_duration: i64,
    pub count: u64,
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    /// Calendar day of the log's start time, `YYYY-MM-DD` in UTC.
    pub date: String,
    pub total_duration: i64,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub overall: OverallSummary,
    pub by_project: Vec<ProjectSummary>,
    pub by_day: Vec<DaySummary>,
}

pub fn summarize(logs: &[TimeLogRecord], projects: &HashMap<Uuid, ProjectDisplay>) -> Summary {
    let mut overall = OverallSummary::default();
    let mut per_project: HashMap<Uuid, (i64, u64)> = HashMap::new();
    let mut per_day: BTreeMap<String, (i64, u64)> = BTreeMap::new();

    for log in logs {
        overall.total_duration += log.duration;
        overall.count += 1;

        let project = per_project.entry(log.project_id).or_default();
        project.0 += log.duration;
        project.1 += 1;

        let day = per_day
            .entry(log.start_time.format("%Y-%m-%d").to_string())
            .or_default();
        day.0 += log.duration;
        day.1 += 1;
    }

    let mut by_project: Vec<ProjectSummary> = per_project
        .into_iter()
        .map(|(project_id, (total_duration, count))| {
            let display = projects.get(&project_id);
            ProjectSummary {
                project_id,
                total_duration,
                count,
                project_name: display
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| UNKNOWN_PROJECT.to_string()),
                project_color: display.and_then(|d| d.color.clone()),
            }
        })
        .collect();
    // Project id breaks duration ties so the order never depends on map
    // iteration.
    by_project.sort_by(|a, b| {
        b.total_duration
            .cmp(&a.total_duration)
            .then(a.project_id.cmp(&b.project_id))
    });

    let by_day: Vec<DaySummary> = per_day
        .into_iter()
        .take(MAX_DAY_BUCKETS)
        .map(|(date, (total_duration, count))| DaySummary {
            date,
            total_duration,
            count,
        })
        .collect();

    Summary {
        overall,
        by_project,
        by_day,
    }
}

#[cfg(test)]
mod analytics_summary_tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rstest::{fixture, rstest};

    #[fixture]
    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap()
    }

    fn make_log(project_id: Uuid, start: DateTime<Utc>, duration: i64) -> TimeLogRecord {
        TimeLogRecord {
            id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
            project_id,
            description: "logged".into(),
            start_time: start,
            end_time: start + Duration::seconds(duration),
            duration,
            timer_id: None,
        }
    }

    #[rstest]
    fn it_should_produce_empty_groups_for_no_logs(t0: DateTime<Utc>) {
        let _ = t0;
        let summary = summarize(&[], &HashMap::new());
        assert_eq!(summary.overall, OverallSummary::default());
        assert!(summary.by_project.is_empty());
        assert!(summary.by_day.is_empty());
    }

    #[rstest]
    fn it_should_keep_overall_equal_to_both_group_sums(t0: DateTime<Utc>) {
        let project_a = Uuid::now_v7();
        let project_b = Uuid::now_v7();
        let logs = vec![
            make_log(project_a, t0, 100),
            make_log(project_a, t0 + Duration::days(1), 200),
            make_log(project_b, t0 + Duration::days(1), 50),
            make_log(project_b, t0 + Duration::days(2), 300),
        ];

        let summary = summarize(&logs, &HashMap::new());

        assert_eq!(summary.overall.total_duration, 650);
        assert_eq!(summary.overall.count, 4);
        let project_sum: i64 = summary.by_project.iter().map(|p| p.total_duration).sum();
        let day_sum: i64 = summary.by_day.iter().map(|d| d.total_duration).sum();
        assert_eq!(project_sum, summary.overall.total_duration);
        assert_eq!(day_sum, summary.overall.total_duration);
    }

    #[rstest]
    fn it_should_sort_projects_by_descending_total_duration(t0: DateTime<Utc>) {
        let project_a = Uuid::now_v7();
        let project_b = Uuid::now_v7();
        let project_c = Uuid::now_v7();
        let logs = vec![
            make_log(project_a, t0, 10),
            make_log(project_b, t0, 500),
            make_log(project_c, t0, 100),
        ];

        let summary = summarize(&logs, &HashMap::new());

        let totals: Vec<i64> = summary.by_project.iter().map(|p| p.total_duration).collect();
        assert_eq!(totals, vec![500, 100, 10]);
    }

    #[rstest]
    fn it_should_sort_days_ascending_and_bucket_in_utc(t0: DateTime<Utc>) {
        let project = Uuid::now_v7();
        let logs = vec![
            make_log(project, t0 + Duration::days(2), 30),
            make_log(project, t0, 10),
            make_log(project, t0 + Duration::days(1), 20),
            make_log(project, t0 + Duration::hours(3), 15),
        ];

        let summary = summarize(&logs, &HashMap::new());

        let days: Vec<&str> = summary.by_day.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(days, vec!["2024-05-10", "2024-05-11", "2024-05-12"]);
        assert_eq!(summary.by_day[0].total_duration, 25);
        assert_eq!(summary.by_day[0].count, 2);
    }

    #[rstest]
    fn it_should_cap_the_day_buckets_at_365(t0: DateTime<Utc>) {
        let project = Uuid::now_v7();
        let logs: Vec<TimeLogRecord> = (0..400)
            .map(|i| make_log(project, t0 + Duration::days(i), 10))
            .collect();

        let summary = summarize(&logs, &HashMap::new());

        assert_eq!(summary.by_day.len(), MAX_DAY_BUCKETS);
        // The cap keeps the earliest days: ascending order, then truncate.
        assert_eq!(summary.by_day[0].date, "2024-05-10");
    }

    #[rstest]
    fn it_should_order_equal_totals_by_project_id(t0: DateTime<Utc>) {
        let mut ids = [Uuid::now_v7(), Uuid::now_v7(), Uuid::now_v7()];
        ids.sort();
        let logs = vec![
            make_log(ids[2], t0, 120),
            make_log(ids[0], t0, 120),
            make_log(ids[1], t0, 120),
        ];

        let summary = summarize(&logs, &HashMap::new());

        let order: Vec<Uuid> = summary.by_project.iter().map(|p| p.project_id).collect();
        assert_eq!(order, ids.to_vec());
    }

    #[rstest]
    fn it_should_fall_back_to_the_unknown_sentinel_for_deleted_projects(t0: DateTime<Utc>) {
        let known = Uuid::now_v7();
        let deleted = Uuid::now_v7();
        let mut projects = HashMap::new();
        projects.insert(
            known,
            ProjectDisplay {
                name: "api rewrite".into(),
                color: Some("#abcdef".into()),
            },
        );
        let logs = vec![make_log(known, t0, 60), make_log(deleted, t0, 30)];

        let summary = summarize(&logs, &projects);

        let known_entry = summary
            .by_project
            .iter()
            .find(|p| p.project_id == known)
            .unwrap();
        assert_eq!(known_entry.project_name, "api rewrite");
        let deleted_entry = summary
            .by_project
            .iter()
            .find(|p| p.project_id == deleted)
            .unwrap();
        assert_eq!(deleted_entry.project_name, UNKNOWN_PROJECT);
        assert_eq!(deleted_entry.project_color, None);
    }
}
