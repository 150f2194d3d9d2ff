//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todo_board::task::{
    adapters::{local_storage::KeyValueTaskRepository, memory::InMemoryKeyValueStore},
    domain::TaskId,
    services::{MutationOutcome, TaskStore},
    view::ViewQuery,
};

/// Store type used by the BDD world.
pub type BoardStore =
    TaskStore<KeyValueTaskRepository<InMemoryKeyValueStore, DefaultClock>, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub storage: Arc<InMemoryKeyValueStore>,
    pub board: BoardStore,
    pub query: ViewQuery,
    pub last_outcome: Option<MutationOutcome>,
}

impl TaskBoardWorld {
    /// Creates a world with an empty board over fresh storage.
    #[must_use]
    pub fn new() -> Self {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let board = open_board(&storage);
        Self {
            storage,
            board,
            query: ViewQuery::new(),
            last_outcome: None,
        }
    }

    /// Reopens the board from the shared storage.
    pub fn reload(&mut self) {
        self.board = open_board(&self.storage);
    }

    /// Adds a task, records the outcome and returns the new identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store does not apply the addition.
    pub fn add(&mut self, title: &str) -> Result<TaskId, eyre::Report> {
        let outcome = self.board.add(title);
        self.last_outcome = Some(outcome.clone());
        match outcome {
            MutationOutcome::Applied(id) => Ok(id),
            other => Err(eyre::eyre!("adding '{title}' was not applied: {other:?}")),
        }
    }

    /// Finds the identifier of the first task with `title`.
    ///
    /// # Errors
    ///
    /// Returns an error if no task carries the title.
    pub fn id_of(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.board
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .map(|task| task.id().clone())
            .ok_or_else(|| eyre::eyre!("no task titled '{title}' on the board"))
    }

    /// Returns the titles the current query shows, in display order.
    #[must_use]
    pub fn visible_titles(&self) -> Vec<String> {
        self.board
            .view(&self.query)
            .ordered()
            .iter()
            .map(|task| task.title().to_owned())
            .collect()
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn open_board(storage: &Arc<InMemoryKeyValueStore>) -> BoardStore {
    let clock = Arc::new(DefaultClock);
    let repository = Arc::new(KeyValueTaskRepository::new(
        Arc::clone(storage),
        Arc::clone(&clock),
    ));
    TaskStore::open(repository, clock)
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Splits a comma-separated step argument into trimmed items.
#[must_use]
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
