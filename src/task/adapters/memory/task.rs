//! Thread-safe in-memory task repository.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Ids are drawn from a monotonic counter that is independent of the
/// current collection size, so deleting tasks can never cause a later
/// insert to reuse an id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    title_index: HashMap<String, TaskId>,
    next_id: i64,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            title_index: HashMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn write_state(
        &self,
    ) -> TaskRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn read_state(
        &self,
    ) -> TaskRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.write_state()?;
        if state.title_index.contains_key(draft.title().as_str()) {
            return Err(TaskRepositoryError::DuplicateTitle(draft.title().clone()));
        }

        let id = TaskId::new(state.next_id).map_err(TaskRepositoryError::persistence)?;
        state.next_id += 1;

        let task = draft.clone().into_task(id);
        state.title_index.insert(task.title().as_str().to_owned(), id);
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self, status: Option<TaskStatus>) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| status.is_none_or(|wanted| task.status() == wanted))
            .cloned()
            .collect())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;

        let old_title = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .title()
            .as_str()
            .to_owned();

        let title_taken_elsewhere = state
            .title_index
            .get(task.title().as_str())
            .is_some_and(|holder| *holder != task.id());
        if title_taken_elsewhere {
            return Err(TaskRepositoryError::DuplicateTitle(task.title().clone()));
        }

        state.title_index.remove(&old_title);
        state.title_index.insert(task.title().as_str().to_owned(), task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        let removed = state.tasks.remove(&id).ok_or(TaskRepositoryError::NotFound(id))?;
        state.title_index.remove(removed.title().as_str());
        Ok(())
    }
}
