//! `PostgreSQL` repository implementation for task store persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        PersistedTaskData, Task, TaskDescription, TaskDraft, TaskId, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let title = draft.title().clone();
        let new_row = NewTaskRow {
            title: title.as_str().to_owned(),
            description: draft.description().map(|text| text.as_str().to_owned()),
            status: draft.status().as_str().to_owned(),
            created_at: draft.created_at(),
            updated_at: draft.created_at(),
        };

        self.run_blocking(move |connection| {
            // This pre-check improves semantic error reporting but is not
            // relied on for correctness: the unique index still enforces
            // integrity in the TOCTOU window between check and insert.
            if title_in_use(connection, title.as_str(), None)? {
                return Err(TaskRepositoryError::DuplicateTitle(title.clone()));
            }

            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| map_unique_violation(err, &title))?;

            row_to_task(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, status: Option<TaskStatus>) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let mut query = tasks::table
                .select(TaskRow::as_select())
                .order(tasks::id.asc())
                .into_boxed();
            if let Some(wanted) = status {
                query = query.filter(tasks::status.eq(wanted.as_str()));
            }
            let rows = query
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let id = task.id();
        let title = task.title().clone();
        let description = task.description().map(|text| text.as_str().to_owned());
        let status = task.status().as_str().to_owned();
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            if title_in_use(connection, title.as_str(), Some(id))? {
                return Err(TaskRepositoryError::DuplicateTitle(title.clone()));
            }

            let affected = diesel::update(tasks::table.filter(tasks::id.eq(id.value())))
                .set((
                    tasks::title.eq(title.as_str()),
                    tasks::description.eq(description),
                    tasks::status.eq(status),
                    tasks::updated_at.eq(updated_at),
                ))
                .execute(connection)
                .map_err(|err| map_unique_violation(err, &title))?;

            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(id.value())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// Maps a unique-constraint violation on the title index to the domain
/// conflict; everything else stays a persistence error.
fn map_unique_violation(err: DieselError, title: &TaskTitle) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            TaskRepositoryError::DuplicateTitle(title.clone())
        }
        _ => TaskRepositoryError::persistence(err),
    }
}

fn title_in_use(
    connection: &mut PgConnection,
    title: &str,
    exclude: Option<TaskId>,
) -> TaskRepositoryResult<bool> {
    let mut query = tasks::table
        .filter(tasks::title.eq(title))
        .select(tasks::id)
        .into_boxed();
    if let Some(id) = exclude {
        query = query.filter(tasks::id.ne(id.value()));
    }
    let holder = query
        .first::<i64>(connection)
        .optional()
        .map_err(TaskRepositoryError::persistence)?;
    Ok(holder.is_some())
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status,
        created_at,
        updated_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(TaskRepositoryError::persistence)?,
        title: TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?,
        description: description
            .map(TaskDescription::new)
            .transpose()
            .map_err(TaskRepositoryError::persistence)?,
        status: TaskStatus::try_from(status.as_str()).map_err(TaskRepositoryError::persistence)?,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
