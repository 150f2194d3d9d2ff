//! Authoritative task collection and its mutation operations.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, error, warn};

use super::config::DEFAULT_DESCRIPTION_PREVIEW_LIMIT;
use crate::task::{
    domain::{
        Priority, TagSet, Task, TaskChanges, TaskDomainError, TaskId, TaskStatus, TextPreview,
        parse_deadline,
    },
    ports::TaskCollectionRepository,
    view::{GroupedView, ViewQuery, collect_tags, project},
};

/// What a mutation did to the collection.
///
/// None of these is a failure of the store itself; collaborators decide
/// whether to surface rejections to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The collection changed; carries the affected task.
    Applied(TaskId),
    /// Input failed validation; nothing changed.
    Rejected(TaskDomainError),
    /// No task has the requested identifier; nothing changed.
    NotFound,
    /// The request was valid but had no effect.
    Unchanged,
}

impl MutationOutcome {
    /// Returns whether the collection changed.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Returns the affected task identifier when the mutation applied.
    #[must_use]
    pub const fn task_id(&self) -> Option<&TaskId> {
        match self {
            Self::Applied(id) => Some(id),
            Self::Rejected(_) | Self::NotFound | Self::Unchanged => None,
        }
    }
}

/// Full replacement values for one task, keyed by its identifier.
///
/// Start from [`EditTaskRequest::from`] a task to keep every field not
/// explicitly changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    id: TaskId,
    title: String,
    status: TaskStatus,
    description: Option<String>,
    deadline: Option<NaiveDate>,
    priority: Priority,
    tags: Vec<String>,
}

impl EditTaskRequest {
    /// Creates a request that resets every optional field.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: TaskStatus::default(),
            description: None,
            deadline: None,
            priority: Priority::default(),
            tags: Vec::new(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the description. An empty description clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text: String = description.into();
        self.description = (!text.is_empty()).then_some(text);
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the deadline from `YYYY-MM-DD` text. Blank text clears it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDeadline`] if the text is not a
    /// calendar date.
    pub fn with_deadline_text(mut self, text: &str) -> Result<Self, TaskDomainError> {
        self.deadline = parse_deadline(text)?;
        Ok(self)
    }

    /// Clears the deadline.
    #[must_use]
    pub const fn without_deadline(mut self) -> Self {
        self.deadline = None;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Replaces the tags. Blank labels are dropped and duplicates collapse.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the identifier of the task to edit.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    fn into_changes(self) -> TaskChanges {
        TaskChanges {
            title: self.title,
            status: self.status,
            description: self.description,
            deadline: self.deadline,
            priority: self.priority,
            tags: TagSet::from_labels_lossy(self.tags),
        }
    }
}

impl From<&Task> for EditTaskRequest {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().clone(),
            title: task.title().to_owned(),
            status: task.status(),
            description: task.description().map(str::to_owned),
            deadline: task.deadline(),
            priority: task.priority(),
            tags: task.tags().as_slice().to_vec(),
        }
    }
}

/// Owner of the ordered task collection.
///
/// Every applied mutation is followed by a best-effort write of the whole
/// collection. Write failures are logged and never undo the in-memory
/// change.
#[derive(Debug)]
pub struct TaskStore<R, C>
where
    R: TaskCollectionRepository,
    C: Clock + Send + Sync,
{
    tasks: Vec<Task>,
    repository: Arc<R>,
    clock: Arc<C>,
    preview_limit: usize,
}

impl<R, C> TaskStore<R, C>
where
    R: TaskCollectionRepository,
    C: Clock + Send + Sync,
{
    /// Creates a store seeded from the repository.
    ///
    /// An unreadable collection is logged and replaced by an empty one.
    #[must_use]
    pub fn open(repository: Arc<R>, clock: Arc<C>) -> Self {
        let tasks = repository.load().unwrap_or_else(|err| {
            warn!(error = %err, "failed to load task collection, starting empty");
            Vec::new()
        });
        Self {
            tasks,
            repository,
            clock,
            preview_limit: DEFAULT_DESCRIPTION_PREVIEW_LIMIT,
        }
    }

    /// Creates an empty store without reading the repository.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            tasks: Vec::new(),
            repository,
            clock,
            preview_limit: DEFAULT_DESCRIPTION_PREVIEW_LIMIT,
        }
    }

    /// Sets how many characters of a description previews show.
    ///
    /// The storage key is a repository concern; see
    /// `KeyValueTaskRepository::open_store` for building both from one
    /// `TaskStoreConfig`.
    #[must_use]
    pub const fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    /// Returns the description preview length.
    #[must_use]
    pub const fn preview_limit(&self) -> usize {
        self.preview_limit
    }

    /// Appends a new untouched task.
    ///
    /// A blank title is rejected with [`TaskDomainError::EmptyTitle`].
    pub fn add(&mut self, title: &str) -> MutationOutcome {
        let mut task = match Task::new(title, &*self.clock) {
            Ok(task) => task,
            Err(err) => return reject(err),
        };
        while self.contains(task.id()) {
            warn!(task_id = %task.id(), "generated task id already in use, regenerating");
            task = match Task::new(title, &*self.clock) {
                Ok(fresh) => fresh,
                Err(err) => return reject(err),
            };
        }

        let id = task.id().clone();
        self.tasks.push(task);
        debug!(task_id = %id, "added task");
        self.persist();
        MutationOutcome::Applied(id)
    }

    /// Sets the status of a task, stamping its update time.
    ///
    /// Any status may be set; the forward-advance policy is applied only by
    /// [`TaskStore::advance_status`].
    pub fn update_status(&mut self, id: &TaskId, status: TaskStatus) -> MutationOutcome {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return not_found(id);
        };
        task.set_status(status, &*self.clock);
        debug!(task_id = %id, status = %status, "updated task status");
        self.persist();
        MutationOutcome::Applied(id.clone())
    }

    /// Moves a task one step forward in the workflow.
    ///
    /// Archived tasks stay archived and nothing is written.
    pub fn advance_status(&mut self, id: &TaskId) -> MutationOutcome {
        let Some(current) = self.get(id).map(Task::status) else {
            return not_found(id);
        };
        let next = current.next();
        if next == current {
            debug!(task_id = %id, status = %current, "task cannot advance further");
            return MutationOutcome::Unchanged;
        }
        self.update_status(id, next)
    }

    /// Replaces every editable field of a task.
    ///
    /// The identifier and creation time are kept. A blank title rejects the
    /// whole edit.
    pub fn edit(&mut self, request: EditTaskRequest) -> MutationOutcome {
        let id = request.id().clone();
        let Some(task) = self.tasks.iter_mut().find(|task| *task.id() == id) else {
            return not_found(&id);
        };
        if let Err(err) = task.apply_changes(request.into_changes(), &*self.clock) {
            return reject(err);
        }
        debug!(task_id = %id, "edited task");
        self.persist();
        MutationOutcome::Applied(id)
    }

    /// Removes a task. Deleting a missing task is a no-op.
    pub fn delete(&mut self, id: &TaskId) -> MutationOutcome {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        if self.tasks.len() == before {
            return not_found(id);
        }
        debug!(task_id = %id, "deleted task");
        self.persist();
        MutationOutcome::Applied(id.clone())
    }

    /// Returns the collection in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Projects the collection through `query`.
    #[must_use]
    pub fn view(&self, query: &ViewQuery) -> GroupedView<'_> {
        project(&self.tasks, query)
    }

    /// Returns every tag in use, sorted.
    #[must_use]
    pub fn all_tags(&self) -> BTreeSet<String> {
        collect_tags(&self.tasks)
    }

    /// Returns the list preview of a task's description.
    ///
    /// Uses the configured preview length.
    #[must_use]
    pub fn description_preview(&self, id: &TaskId) -> Option<TextPreview> {
        self.get(id)?
            .description_preview(self.preview_limit)
    }

    fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    fn persist(&self) {
        if let Err(err) = self.repository.save(&self.tasks) {
            error!(error = %err, count = self.tasks.len(), "failed to persist task collection");
        }
    }
}

fn reject(err: TaskDomainError) -> MutationOutcome {
    debug!(error = %err, "rejected task mutation");
    MutationOutcome::Rejected(err)
}

fn not_found(id: &TaskId) -> MutationOutcome {
    debug!(task_id = %id, "task not found");
    MutationOutcome::NotFound
}
