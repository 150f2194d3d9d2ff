//! Filter, search, sort and group pipeline over the task collection.

use std::cmp::{Ordering, Reverse};
use std::collections::BTreeSet;

use chrono::NaiveDate;
use feruca::Collator;

use super::query::{SortKey, StatusFilter, ViewQuery};
use crate::task::domain::{Task, TaskStatus};

/// Tasks selected by a [`ViewQuery`], in display order and split by status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedView<'a> {
    ordered: Vec<&'a Task>,
    untouched: Vec<&'a Task>,
    in_progress: Vec<&'a Task>,
    completed: Vec<&'a Task>,
    archived: Vec<&'a Task>,
}

impl<'a> GroupedView<'a> {
    fn from_ordered(ordered: Vec<&'a Task>) -> Self {
        let mut view = Self::default();
        for task in &ordered {
            view.bucket_mut(task.status()).push(*task);
        }
        view.ordered = ordered;
        view
    }

    const fn bucket_mut(&mut self, status: TaskStatus) -> &mut Vec<&'a Task> {
        match status {
            TaskStatus::Untouched => &mut self.untouched,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Completed => &mut self.completed,
            TaskStatus::Archived => &mut self.archived,
        }
    }

    /// Returns the tasks in `status`, in display order.
    #[must_use]
    pub fn bucket(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Untouched => &self.untouched,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
            TaskStatus::Archived => &self.archived,
        }
    }

    /// Returns every selected task in display order, before grouping.
    #[must_use]
    pub fn ordered(&self) -> &[&'a Task] {
        &self.ordered
    }

    /// Iterates over the four buckets in workflow order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[&'a Task])> {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.bucket(status)))
    }

    /// Returns the number of selected tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns whether no task was selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Runs the view pipeline over `tasks`.
///
/// Stages run in a fixed order: status filter, text search, tag filter,
/// stable sort, grouping. The input is never modified.
#[must_use]
pub fn project<'a>(tasks: &'a [Task], query: &ViewQuery) -> GroupedView<'a> {
    let needle = query.search().trim().to_lowercase();
    let mut selected: Vec<&'a Task> = tasks
        .iter()
        .filter(|task| query.status().admits(task.status()))
        .filter(|task| matches_search(task, &needle))
        .filter(|task| task.tags().contains_all(query.tags()))
        .collect();
    sort_tasks(&mut selected, query.sort());
    GroupedView::from_ordered(selected)
}

/// Case-insensitive substring match on title, description and tags.
///
/// `needle` must already be trimmed and lowercased; an empty needle matches
/// everything.
fn matches_search(task: &Task, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |text: &str| text.to_lowercase().contains(needle);
    hit(task.title()) || task.description().is_some_and(hit) || task.tags().iter().any(hit)
}

fn sort_tasks(tasks: &mut [&Task], key: SortKey) {
    match key {
        SortKey::Unsorted => {}
        SortKey::Deadline => {
            tasks.sort_by_key(|task| task.deadline().unwrap_or(NaiveDate::MAX));
        }
        SortKey::Title => {
            let mut collator = Collator::default();
            tasks.sort_by(|left, right| {
                collate_titles(&mut collator, left.title(), right.title())
            });
        }
        SortKey::Priority => tasks.sort_by_key(|task| Reverse(task.priority().rank())),
        SortKey::Created => tasks.sort_by_key(|task| Reverse(task.created_at())),
    }
}

/// Orders titles by Unicode collation (CLDR root order), then by exact text.
///
/// Accented letters sort beside their base letter and case differences
/// only break ties, so `"éclair"` falls between `"apple"` and `"fig"`.
#[must_use]
pub fn compare_titles(left: &str, right: &str) -> Ordering {
    collate_titles(&mut Collator::default(), left, right)
}

fn collate_titles(collator: &mut Collator, left: &str, right: &str) -> Ordering {
    collator.collate(left, right).then_with(|| left.cmp(right))
}

/// Returns the columns a board shows under `filter`.
///
/// The archived column appears only while filtering on archived tasks.
#[must_use]
pub fn board_columns(filter: StatusFilter) -> Vec<TaskStatus> {
    TaskStatus::ALL
        .into_iter()
        .filter(|status| {
            *status != TaskStatus::Archived || filter == StatusFilter::Only(TaskStatus::Archived)
        })
        .collect()
}

/// Collects every tag used in `tasks`, sorted.
#[must_use]
pub fn collect_tags(tasks: &[Task]) -> BTreeSet<String> {
    tasks
        .iter()
        .flat_map(|task| task.tags().iter())
        .map(str::to_owned)
        .collect()
}
