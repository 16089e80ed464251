use super::catalog::{work_routine, EVENING_ROUTINE, MORNING_ROUTINE};
use super::enums::WorkMode;
use super::state::CustomTask;

/// Total applicable task count for one day:
/// morning + the work list selected by the mode + evening + custom tasks
pub fn total_applicable_tasks(mode: WorkMode, custom_tasks: &[CustomTask]) -> usize {
    MORNING_ROUTINE.len() + work_routine(mode).len() + EVENING_ROUTINE.len() + custom_tasks.len()
}

/// Completion score as a 0-100 percentage.
/// Counts all recorded completed ids against the current total; ids are not
/// re-checked against the catalog, so historical scores stay as computed even
/// after a work-mode switch shrinks the list.
pub fn completion_score(completed_count: usize, total_applicable: usize) -> f64 {
    if total_applicable == 0 {
        return 0.0;
    }
    100.0 * completed_count as f64 / total_applicable as f64
}

/// Add an id to the completed set; no-op when already present
pub fn mark_completed(completed: &mut Vec<String>, task_id: &str) {
    if !completed.iter().any(|id| id == task_id) {
        completed.push(task_id.to_string());
    }
}

/// Remove an id from the completed set
pub fn mark_incomplete(completed: &mut Vec<String>, task_id: &str) {
    completed.retain(|id| id != task_id);
}

/// Flip membership of an id in the completed set
pub fn toggle_completed(completed: &mut Vec<String>, task_id: &str) {
    if completed.iter().any(|id| id == task_id) {
        mark_incomplete(completed, task_id);
    } else {
        mark_completed(completed, task_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::TaskCategory;

    fn custom(n: usize) -> Vec<CustomTask> {
        (0..n)
            .map(|i| CustomTask {
                id: format!("custom-{}", i),
                title: format!("Task {}", i),
                time_range: "Anytime".to_string(),
                category: TaskCategory::Morning,
            })
            .collect()
    }

    #[test]
    fn test_total_applicable_sums_all_sections() {
        // 6 morning + 6 wfh + 5 evening
        assert_eq!(total_applicable_tasks(WorkMode::Wfh, &[]), 17);
        // 6 morning + 4 office + 5 evening
        assert_eq!(total_applicable_tasks(WorkMode::Office, &[]), 15);
        assert_eq!(total_applicable_tasks(WorkMode::Wfh, &custom(3)), 20);
        assert_eq!(total_applicable_tasks(WorkMode::Office, &custom(2)), 17);
    }

    #[test]
    fn test_score_is_percentage_of_total() {
        assert_eq!(completion_score(17, 17), 100.0);
        assert_eq!(completion_score(5, 10), 50.0);
        assert_eq!(completion_score(0, 17), 0.0);
    }

    #[test]
    fn test_score_zero_when_no_tasks() {
        assert_eq!(completion_score(0, 0), 0.0);
        // Recorded ids from a shrunk catalog still count against the new total
        assert_eq!(completion_score(3, 0), 0.0);
        assert!(completion_score(20, 15) > 100.0);
    }

    #[test]
    fn test_mark_completed_no_duplicates() {
        let mut completed = vec!["m1".to_string()];
        mark_completed(&mut completed, "m1");
        mark_completed(&mut completed, "m2");
        assert_eq!(completed, vec!["m1".to_string(), "m2".to_string()]);
    }

    #[test]
    fn test_toggle_round_trip_restores_set() {
        let original = vec!["m1".to_string(), "e2".to_string()];
        let mut completed = original.clone();

        toggle_completed(&mut completed, "wfh3");
        assert!(completed.iter().any(|id| id == "wfh3"));

        toggle_completed(&mut completed, "wfh3");
        assert_eq!(completed, original);
    }

    #[test]
    fn test_mark_incomplete_filters_only_that_id() {
        let mut completed = vec!["m1".to_string(), "m2".to_string(), "e1".to_string()];
        mark_incomplete(&mut completed, "m2");
        assert_eq!(completed, vec!["m1".to_string(), "e1".to_string()]);

        // Removing an absent id is a no-op
        mark_incomplete(&mut completed, "m2");
        assert_eq!(completed.len(), 2);
    }
}
