//! Tracker Statistics Engine
//!
//! Pure, single-pass derivation of a read-only statistics report from one
//! tracker snapshot: status tallies, completion percentage, logged-hours
//! totals, completion streaks, checklist and mood aggregates, and fixed-width
//! weekly/monthly rollups. No I/O and no mutation of the input; everything a
//! chart or dashboard needs is computed here and nowhere else.

use crate::models::{DayStatus, Mood, Tracker, TrackerDay};
use serde::{Deserialize, Serialize};

/// Mood tally with fixed keys
///
/// All four keys are always present in the output, even when zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCounts {
    pub great: u32,
    pub good: u32,
    pub neutral: u32,
    pub tough: u32,
}

/// One weekly rollup bucket (1-indexed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStat {
    pub week: u32,
    pub completed: u32,
    pub total: u32,
    pub hours: f64,
}

/// One monthly rollup bucket (1-indexed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub month: u32,
    pub completed: u32,
    pub total: u32,
    pub hours: f64,
}

/// Derived statistics report for one tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStats {
    pub total_days: u32,
    pub days_completed: u32,
    pub days_skipped: u32,
    pub days_in_progress: u32,
    pub days_pending: u32,
    /// `total_days - days_completed - days_skipped`; goes negative on a
    /// data-entry overrun and is deliberately not clamped.
    pub days_remaining: i64,
    pub completion_percent: u32,
    pub total_hours_logged: f64,
    pub target_hours: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_checklist_items: u32,
    pub completed_checklist_items: u32,
    pub mood_counts: MoodCounts,
    pub weekly_stats: Vec<WeeklyStat>,
    pub monthly_stats: Vec<MonthlyStat>,
}

const WEEK_WINDOW: u32 = 7;
const MONTH_WINDOW: u32 = 30;

/// Compute the statistics report for one tracker snapshot.
///
/// Deterministic and infallible for any structurally valid tracker: an empty
/// day list, `total_days == 0`, day-number gaps and day-number collisions all
/// produce a well-defined report. The input is never mutated; sorting by day
/// number happens on a private list of references.
pub fn compute_stats(tracker: &Tracker) -> TrackerStats {
    let mut days: Vec<&TrackerDay> = tracker.days.iter().collect();
    days.sort_by_key(|d| d.day_number);

    let mut days_completed = 0u32;
    let mut days_skipped = 0u32;
    let mut days_in_progress = 0u32;
    let mut days_pending = 0u32;
    let mut total_hours_logged = 0.0f64;
    let mut total_checklist_items = 0u32;
    let mut completed_checklist_items = 0u32;
    let mut mood_counts = MoodCounts::default();

    let mut longest_streak = 0u32;
    let mut run = 0u32;

    for day in &days {
        match day.status {
            DayStatus::Completed => days_completed += 1,
            DayStatus::Skipped => days_skipped += 1,
            DayStatus::InProgress => days_in_progress += 1,
            DayStatus::Pending => days_pending += 1,
        }

        total_hours_logged += day.hours_logged;
        total_checklist_items += day.checklist.len() as u32;
        completed_checklist_items += day.checklist.iter().filter(|i| i.completed).count() as u32;

        match day.mood {
            Mood::Great => mood_counts.great += 1,
            Mood::Good => mood_counts.good += 1,
            Mood::Neutral => mood_counts.neutral += 1,
            Mood::Tough => mood_counts.tough += 1,
            Mood::None => {}
        }

        // Longest streak counts runs of completed records adjacent in the
        // sorted list; a gap in day numbers does not break a run.
        if day.status == DayStatus::Completed {
            run += 1;
            longest_streak = longest_streak.max(run);
        } else {
            run = 0;
        }
    }

    let current_streak = days
        .iter()
        .rev()
        .take_while(|d| d.status == DayStatus::Completed)
        .count() as u32;

    let total_days = tracker.total_days;
    let completion_percent = if total_days > 0 {
        (days_completed as f64 / total_days as f64 * 100.0).round() as u32
    } else {
        0
    };

    let weekly_stats = bucketize(&days, total_days, WEEK_WINDOW)
        .into_iter()
        .map(|b| WeeklyStat {
            week: b.index,
            completed: b.completed,
            total: b.total,
            hours: b.hours,
        })
        .collect();

    let monthly_stats = bucketize(&days, total_days, MONTH_WINDOW)
        .into_iter()
        .map(|b| MonthlyStat {
            month: b.index,
            completed: b.completed,
            total: b.total,
            hours: b.hours,
        })
        .collect();

    TrackerStats {
        total_days,
        days_completed,
        days_skipped,
        days_in_progress,
        days_pending,
        days_remaining: total_days as i64 - days_completed as i64 - days_skipped as i64,
        completion_percent,
        total_hours_logged,
        target_hours: total_days as f64 * tracker.daily_hours,
        current_streak,
        longest_streak,
        total_checklist_items,
        completed_checklist_items,
        mood_counts,
        weekly_stats,
        monthly_stats,
    }
}

struct Bucket {
    index: u32,
    completed: u32,
    total: u32,
    hours: f64,
}

/// Partition the planned day range `1..=total_days` into 1-indexed windows of
/// `window` days and aggregate the day records falling in each.
///
/// The bucket count follows the planned duration, not the record count, so
/// empty buckets are still emitted and out-of-range records (day numbers past
/// the plan) are simply not bucketed.
fn bucketize(days: &[&TrackerDay], total_days: u32, window: u32) -> Vec<Bucket> {
    let count = total_days.div_ceil(window);

    (1..=count)
        .map(|index| {
            let lo = (index - 1) * window;
            let hi = index * window;

            let mut bucket = Bucket {
                index,
                completed: 0,
                total: 0,
                hours: 0.0,
            };

            for day in days {
                if day.day_number > lo && day.day_number <= hi {
                    bucket.total += 1;
                    bucket.hours += day.hours_logged;
                    if day.status == DayStatus::Completed {
                        bucket.completed += 1;
                    }
                }
            }

            bucket
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChecklistItem;
    use chrono::Utc;
    use uuid::Uuid;

    fn tracker(total_days: u32, daily_hours: f64, days: Vec<TrackerDay>) -> Tracker {
        let now = Utc::now();
        Tracker {
            id: Uuid::new_v4(),
            name: "100 Days of Code".to_string(),
            slug: "100-days-of-code".to_string(),
            description: None,
            total_days,
            daily_hours,
            days,
            milestones: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn day(day_number: u32, status: DayStatus) -> TrackerDay {
        TrackerDay {
            day_number,
            status,
            hours_logged: 0.0,
            mood: Mood::None,
            checklist: Vec::new(),
            notes: None,
        }
    }

    fn day_with_hours(day_number: u32, status: DayStatus, hours: f64) -> TrackerDay {
        TrackerDay {
            hours_logged: hours,
            ..day(day_number, status)
        }
    }

    #[test]
    fn test_completed_skipped_and_remaining() {
        // Two completed days, one skipped, against a ten-day plan.
        let t = tracker(
            10,
            2.0,
            vec![
                day_with_hours(1, DayStatus::Completed, 2.0),
                day_with_hours(2, DayStatus::Completed, 1.0),
                day(3, DayStatus::Skipped),
            ],
        );

        let stats = compute_stats(&t);
        assert_eq!(stats.days_completed, 2);
        assert_eq!(stats.days_skipped, 1);
        assert_eq!(stats.days_remaining, 7);
        assert_eq!(stats.completion_percent, 20);
        assert_eq!(stats.total_hours_logged, 3.0);
        assert_eq!(stats.target_hours, 20.0);
        assert_eq!(stats.current_streak, 0); // last record is skipped
        assert_eq!(stats.longest_streak, 2);
    }

    #[test]
    fn test_current_streak_when_log_ends_completed() {
        let t = tracker(
            10,
            2.0,
            vec![
                day_with_hours(1, DayStatus::Completed, 2.0),
                day_with_hours(2, DayStatus::Completed, 1.0),
            ],
        );

        let stats = compute_stats(&t);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, 2);
    }

    #[test]
    fn test_pending_day_resets_streak_run() {
        let t = tracker(
            10,
            0.0,
            vec![
                day(1, DayStatus::Completed),
                day(2, DayStatus::Pending),
                day(3, DayStatus::Completed),
            ],
        );

        let stats = compute_stats(&t);
        assert_eq!(stats.longest_streak, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_streak_survives_day_number_gaps() {
        // Days 3 and 9 are adjacent in the sorted list, so they form a run
        // even though six day numbers are missing in between.
        let t = tracker(30, 0.0, vec![day(9, DayStatus::Completed), day(3, DayStatus::Completed)]);

        let stats = compute_stats(&t);
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn test_checklist_aggregation() {
        let mut d1 = day(1, DayStatus::Completed);
        d1.checklist = vec![
            ChecklistItem {
                text: "read chapter".to_string(),
                completed: true,
            },
            ChecklistItem {
                text: "exercises".to_string(),
                completed: false,
            },
        ];
        let mut d2 = day(2, DayStatus::Pending);
        d2.checklist = vec![ChecklistItem {
            text: "review".to_string(),
            completed: true,
        }];

        let stats = compute_stats(&tracker(10, 0.0, vec![d1, d2]));
        assert_eq!(stats.total_checklist_items, 3);
        assert_eq!(stats.completed_checklist_items, 2);
    }

    #[test]
    fn test_mood_counts_ignore_unrecognized() {
        let mut d1 = day(1, DayStatus::Completed);
        d1.mood = Mood::Great;
        let mut d2 = day(2, DayStatus::Completed);
        d2.mood = Mood::Great;
        let mut d3 = day(3, DayStatus::Completed);
        d3.mood = Mood::None; // unknown wire values land here
        let d4 = day(4, DayStatus::Completed);

        let stats = compute_stats(&tracker(10, 0.0, vec![d1, d2, d3, d4]));
        assert_eq!(
            stats.mood_counts,
            MoodCounts {
                great: 2,
                good: 0,
                neutral: 0,
                tough: 0,
            }
        );
    }

    #[test]
    fn test_zero_total_days_degenerates_safely() {
        let stats = compute_stats(&tracker(0, 2.0, vec![day(1, DayStatus::Completed)]));
        assert_eq!(stats.completion_percent, 0);
        assert!(stats.weekly_stats.is_empty());
        assert!(stats.monthly_stats.is_empty());
        assert_eq!(stats.target_hours, 0.0);
        assert_eq!(stats.days_remaining, -1);
    }

    #[test]
    fn test_empty_day_list() {
        let stats = compute_stats(&tracker(14, 1.5, Vec::new()));
        assert_eq!(stats.days_completed, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.completion_percent, 0);
        assert_eq!(stats.total_hours_logged, 0.0);
        assert_eq!(stats.target_hours, 21.0);
        assert_eq!(stats.weekly_stats.len(), 2);
        assert!(stats.weekly_stats.iter().all(|w| w.total == 0 && w.completed == 0));
        assert_eq!(stats.monthly_stats.len(), 1);
    }

    #[test]
    fn test_order_independence() {
        let days = vec![
            day_with_hours(5, DayStatus::Completed, 1.0),
            day_with_hours(1, DayStatus::Completed, 2.0),
            day_with_hours(3, DayStatus::Skipped, 0.5),
            day_with_hours(2, DayStatus::Completed, 1.0),
            day_with_hours(4, DayStatus::Pending, 0.0),
        ];
        let mut shuffled = days.clone();
        shuffled.reverse();
        shuffled.swap(0, 2);

        let a = compute_stats(&tracker(20, 1.0, days));
        let b = compute_stats(&tracker(20, 1.0, shuffled));
        assert_eq!(a, b);
    }

    #[test]
    fn test_determinism() {
        let t = tracker(
            10,
            2.0,
            vec![day(2, DayStatus::Completed), day(1, DayStatus::Skipped)],
        );
        assert_eq!(compute_stats(&t), compute_stats(&t));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let t = tracker(10, 1.0, vec![day(3, DayStatus::Completed), day(1, DayStatus::Pending)]);
        let _ = compute_stats(&t);
        assert_eq!(t.days[0].day_number, 3);
        assert_eq!(t.days[1].day_number, 1);
    }

    #[test]
    fn test_status_tallies_partition_the_day_list() {
        let t = tracker(
            50,
            0.0,
            vec![
                day(1, DayStatus::Completed),
                day(2, DayStatus::Skipped),
                day(3, DayStatus::InProgress),
                day(4, DayStatus::Pending),
                day(5, DayStatus::Completed),
            ],
        );

        let stats = compute_stats(&t);
        let sum = stats.days_completed + stats.days_skipped + stats.days_in_progress + stats.days_pending;
        assert_eq!(sum as usize, t.days.len());
        assert_eq!(stats.days_in_progress, 1);
        assert_eq!(stats.days_pending, 1);
    }

    #[test]
    fn test_completion_percent_rounds_half_up() {
        // 1/8 = 12.5% rounds to 13, 1/3 = 33.33% rounds to 33.
        let one_done = vec![day(1, DayStatus::Completed)];
        assert_eq!(compute_stats(&tracker(8, 0.0, one_done.clone())).completion_percent, 13);
        assert_eq!(compute_stats(&tracker(3, 0.0, one_done)).completion_percent, 33);
    }

    #[test]
    fn test_overrun_is_not_clamped() {
        // More completed records than planned days.
        let days: Vec<TrackerDay> = (1..=6).map(|n| day(n, DayStatus::Completed)).collect();
        let stats = compute_stats(&tracker(4, 0.0, days));
        assert_eq!(stats.days_remaining, -2);
        assert_eq!(stats.completion_percent, 150);
    }

    #[test]
    fn test_weekly_bucket_boundaries() {
        // Day 7 belongs to week 1, day 8 to week 2.
        let t = tracker(
            15,
            0.0,
            vec![
                day_with_hours(7, DayStatus::Completed, 2.0),
                day_with_hours(8, DayStatus::Skipped, 1.0),
                day_with_hours(14, DayStatus::Completed, 3.0),
            ],
        );

        let stats = compute_stats(&t);
        assert_eq!(stats.weekly_stats.len(), 3);

        let w1 = &stats.weekly_stats[0];
        assert_eq!((w1.week, w1.completed, w1.total, w1.hours), (1, 1, 1, 2.0));

        let w2 = &stats.weekly_stats[1];
        assert_eq!((w2.week, w2.completed, w2.total, w2.hours), (2, 1, 2, 4.0));

        let w3 = &stats.weekly_stats[2];
        assert_eq!((w3.week, w3.completed, w3.total, w3.hours), (3, 0, 0, 0.0));
    }

    #[test]
    fn test_monthly_buckets_follow_planned_range() {
        let t = tracker(
            100,
            0.0,
            vec![
                day(30, DayStatus::Completed),
                day(31, DayStatus::Completed),
                day(99, DayStatus::Skipped),
            ],
        );

        let stats = compute_stats(&t);
        assert_eq!(stats.monthly_stats.len(), 4);
        assert_eq!(stats.monthly_stats[0].month, 1);
        assert_eq!(stats.monthly_stats[0].total, 1); // day 30
        assert_eq!(stats.monthly_stats[1].total, 1); // day 31
        assert_eq!(stats.monthly_stats[2].total, 0);
        assert_eq!(stats.monthly_stats[3].total, 1); // day 99
    }

    #[test]
    fn test_records_past_the_plan_are_not_bucketed() {
        let t = tracker(7, 0.0, vec![day(3, DayStatus::Completed), day(12, DayStatus::Completed)]);

        let stats = compute_stats(&t);
        assert_eq!(stats.weekly_stats.len(), 1);
        assert_eq!(stats.weekly_stats[0].total, 1);
        // The stray record still counts toward the flat tallies.
        assert_eq!(stats.days_completed, 2);
    }

    #[test]
    fn test_stats_wire_field_names() {
        let stats = compute_stats(&tracker(10, 1.0, vec![day(1, DayStatus::Completed)]));
        let json = serde_json::to_value(&stats).unwrap();

        for key in [
            "totalDays",
            "daysCompleted",
            "daysSkipped",
            "daysInProgress",
            "daysPending",
            "daysRemaining",
            "completionPercent",
            "totalHoursLogged",
            "targetHours",
            "currentStreak",
            "longestStreak",
            "totalChecklistItems",
            "completedChecklistItems",
            "moodCounts",
            "weeklyStats",
            "monthlyStats",
        ] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }

        let moods = json.get("moodCounts").unwrap();
        for key in ["great", "good", "neutral", "tough"] {
            assert!(moods.get(key).is_some(), "missing mood key {key}");
        }
    }
}
