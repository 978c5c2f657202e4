//! Pure weekly report aggregation.

use reptrack_core::{DayReport, ProgressDocument, Report, SuggestionTier, WeekKey, WeekPlan};
use std::collections::BTreeMap;

/// Build the weekly report for one progress document.
///
/// `canonical` supplies the exercise names completion flags are looked up
/// under; `display` supplies the day names rendered in the report. The two
/// plans have the same shape, only the language differs; pass the same
/// plan twice for a single-locale caller.
///
/// Days are visited in ascending index order and exercises in their fixed
/// catalog order; a name absent from `progress` counts as not completed.
/// The function is total and referentially transparent: identical inputs
/// always produce an identical report, and a day with no exercises
/// contributes 0/0 rather than a division error.
pub fn build_report(
    canonical: &WeekPlan,
    display: &WeekPlan,
    progress: &ProgressDocument,
    week_key: WeekKey,
) -> Report {
    let mut total_exercises = 0;
    let mut completed_exercises = 0;
    let mut per_day = BTreeMap::new();

    for day in canonical.days {
        let completed_today = day
            .exercises
            .iter()
            .filter(|exercise| progress.is_done(exercise.name))
            .count();

        total_exercises += day.exercises.len();
        completed_exercises += completed_today;

        let day_name = display
            .day(day.day_index)
            .map(|d| d.day_name)
            .unwrap_or(day.day_name);
        per_day.insert(
            day.day_index,
            DayReport {
                total: day.exercises.len(),
                completed: completed_today,
                day_name: day_name.to_string(),
            },
        );
    }

    let completion_percentage = percentage(completed_exercises, total_exercises);

    Report {
        week_key,
        total_exercises,
        completed_exercises,
        completion_percentage,
        per_day,
        suggestion_tier: SuggestionTier::for_percentage(completion_percentage),
    }
}

/// Integer completion percentage, rounded half away from zero. Zero when
/// the plan is empty.
fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use reptrack_core::{catalog, DayPlan, Locale};

    fn canonical() -> WeekPlan {
        catalog::canonical_plan()
    }

    fn week() -> WeekKey {
        "2024-W1".parse().unwrap()
    }

    /// Completion flags for the first `n` exercises of the canonical plan,
    /// in day-then-exercise order.
    fn first_n_completed(n: usize) -> ProgressDocument {
        canonical()
            .days
            .iter()
            .flat_map(|d| d.exercises.iter())
            .take(n)
            .map(|e| (e.name, true))
            .collect()
    }

    #[test]
    fn empty_progress_yields_a_zero_report() {
        let plan = canonical();
        let report = build_report(&plan, &plan, &ProgressDocument::new(), week());

        assert_eq!(report.total_exercises, 27);
        assert_eq!(report.completed_exercises, 0);
        assert_eq!(report.completion_percentage, 0);
        assert_eq!(report.suggestion_tier, SuggestionTier::Start);
    }

    #[test]
    fn one_full_day_is_a_good_start() {
        let plan = canonical();
        let report = build_report(&plan, &plan, &first_n_completed(6), week());

        assert_eq!(report.completed_exercises, 6);
        assert_eq!(report.completion_percentage, 22);
        assert_eq!(report.suggestion_tier, SuggestionTier::GoodStart);
        assert_eq!(report.per_day[&1].completed, 6);
        assert_eq!(report.per_day[&2].completed, 0);
    }

    #[test]
    fn fourteen_of_twenty_seven_crosses_the_half_boundary() {
        let plan = canonical();
        let report = build_report(&plan, &plan, &first_n_completed(14), week());

        assert_eq!(report.completion_percentage, 52);
        assert_eq!(report.suggestion_tier, SuggestionTier::GreatWork);
    }

    #[test]
    fn twenty_two_of_twenty_seven_crosses_the_eighty_boundary() {
        let plan = canonical();
        let report = build_report(&plan, &plan, &first_n_completed(22), week());

        assert_eq!(report.completion_percentage, 81);
        assert_eq!(report.suggestion_tier, SuggestionTier::Excellent);
    }

    #[test]
    fn a_full_week_is_perfect() {
        let plan = canonical();
        let report = build_report(&plan, &plan, &first_n_completed(27), week());

        assert_eq!(report.completed_exercises, 27);
        assert_eq!(report.completion_percentage, 100);
        assert_eq!(report.suggestion_tier, SuggestionTier::Perfect);
    }

    #[test]
    fn totals_match_the_per_day_sums() {
        let plan = canonical();
        let report = build_report(&plan, &plan, &first_n_completed(14), week());

        let per_day_total: usize = report.per_day.values().map(|d| d.total).sum();
        let per_day_completed: usize = report.per_day.values().map(|d| d.completed).sum();
        assert_eq!(report.total_exercises, per_day_total);
        assert_eq!(report.completed_exercises, per_day_completed);
    }

    #[test]
    fn flags_outside_the_plan_are_ignored() {
        let plan = canonical();
        let progress: ProgressDocument = [("Swimming", true)].into_iter().collect();
        let report = build_report(&plan, &plan, &progress, week());

        assert_eq!(report.completed_exercises, 0);
        assert_eq!(report.suggestion_tier, SuggestionTier::Start);
    }

    #[test]
    fn identical_inputs_produce_identical_reports() {
        let plan = canonical();
        let progress = first_n_completed(14);
        let a = build_report(&plan, &plan, &progress, week());
        let b = build_report(&plan, &plan, &progress, week());
        assert_eq!(a, b);
    }

    #[test]
    fn display_locale_changes_day_names_only() {
        let plan = canonical();
        let display = catalog::weekly_plan(Locale::Fr);
        let progress = first_n_completed(14);

        let en = build_report(&plan, &plan, &progress, week());
        let fr = build_report(&plan, &display, &progress, week());

        assert_eq!(en.completed_exercises, fr.completed_exercises);
        assert_eq!(en.completion_percentage, fr.completion_percentage);
        assert_eq!(fr.per_day[&3].day_name, "Jour des jambes");
        assert_eq!(en.per_day[&3].day_name, "Leg Day");
    }

    #[test]
    fn a_day_without_exercises_contributes_zero_of_zero() {
        static SPARSE: [DayPlan; 2] = [
            DayPlan {
                day_index: 1,
                day_name: "Rest",
                focus: "Nothing planned",
                exercises: &[],
            },
            DayPlan {
                day_index: 2,
                day_name: "Core",
                focus: "Stability",
                exercises: &[reptrack_core::Exercise {
                    name: "Plank",
                    sets: "3 sets",
                    reps: "Hold to failure",
                    advice: "Keep a straight line from your head to your heels.",
                }],
            },
        ];
        let plan = WeekPlan { days: &SPARSE };
        let report = build_report(&plan, &plan, &ProgressDocument::new(), week());

        assert_eq!(report.per_day[&1].total, 0);
        assert_eq!(report.per_day[&1].completed, 0);
        assert_eq!(report.completion_percentage, 0);
    }

    #[test]
    fn an_entirely_empty_plan_reports_zero_percent() {
        let plan = WeekPlan { days: &[] };
        let report = build_report(&plan, &plan, &first_n_completed(5), week());

        assert_eq!(report.total_exercises, 0);
        assert_eq!(report.completion_percentage, 0);
        assert_eq!(report.suggestion_tier, SuggestionTier::Start);
    }

    #[test]
    fn percentage_rounds_half_away_from_zero() {
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(6, 27), 22);
        assert_eq!(percentage(14, 27), 52);
        assert_eq!(percentage(22, 27), 81);
        assert_eq!(percentage(27, 27), 100);
        assert_eq!(percentage(0, 0), 0);
    }
}
