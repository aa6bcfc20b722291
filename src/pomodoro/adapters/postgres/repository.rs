//! `PostgreSQL` repository implementation for session persistence.

use super::{
    models::{NewSessionRow, SessionRow},
    schema::pomodoro_sessions,
};
use crate::pomodoro::{
    domain::{PersistedSessionData, PomodoroSession, SessionDraft, SessionId},
    ports::{SessionRepository, SessionRepositoryError, SessionRepositoryResult},
};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by session adapters.
pub type SessionPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed session repository.
#[derive(Debug, Clone)]
pub struct PostgresSessionRepository {
    pool: SessionPgPool,
}

impl PostgresSessionRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: SessionPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> SessionRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> SessionRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(SessionRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(SessionRepositoryError::persistence)?
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn insert(&self, draft: &SessionDraft) -> SessionRepositoryResult<PomodoroSession> {
        let task_id = draft.task_id();
        let new_row = NewSessionRow {
            task_id: task_id.value(),
            started_at: draft.started_at(),
            ended_at: None,
            completed: false,
        };

        self.run_blocking(move |connection| {
            // This pre-check improves semantic error reporting but is not
            // relied on for correctness: the partial unique index still
            // enforces integrity in the TOCTOU window between check and
            // insert.
            if find_active_row(connection, task_id)?.is_some() {
                return Err(SessionRepositoryError::ActiveSessionExists(task_id));
            }

            let row = diesel::insert_into(pomodoro_sessions::table)
                .values(&new_row)
                .returning(SessionRow::as_returning())
                .get_result::<SessionRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        SessionRepositoryError::ActiveSessionExists(task_id)
                    }
                    _ => SessionRepositoryError::persistence(err),
                })?;

            row_to_session(row)
        })
        .await
    }

    async fn find_active(
        &self,
        task_id: TaskId,
    ) -> SessionRepositoryResult<Option<PomodoroSession>> {
        self.run_blocking(move |connection| {
            let row = find_active_row(connection, task_id)?;
            row.map(row_to_session).transpose()
        })
        .await
    }

    async fn update(&self, session: &PomodoroSession) -> SessionRepositoryResult<()> {
        let id = session.id();
        let ended_at = session.ended_at();
        let completed = session.is_completed();

        self.run_blocking(move |connection| {
            let affected =
                diesel::update(pomodoro_sessions::table.filter(pomodoro_sessions::id.eq(id.value())))
                    .set((
                        pomodoro_sessions::ended_at.eq(ended_at),
                        pomodoro_sessions::completed.eq(completed),
                    ))
                    .execute(connection)
                    .map_err(SessionRepositoryError::persistence)?;

            if affected == 0 {
                return Err(SessionRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn list_completed(&self) -> SessionRepositoryResult<Vec<PomodoroSession>> {
        self.run_blocking(move |connection| {
            let rows = pomodoro_sessions::table
                .filter(pomodoro_sessions::completed.eq(true))
                .select(SessionRow::as_select())
                .order(pomodoro_sessions::id.asc())
                .load::<SessionRow>(connection)
                .map_err(SessionRepositoryError::persistence)?;
            rows.into_iter().map(row_to_session).collect()
        })
        .await
    }
}

fn find_active_row(
    connection: &mut PgConnection,
    task_id: TaskId,
) -> SessionRepositoryResult<Option<SessionRow>> {
    pomodoro_sessions::table
        .filter(pomodoro_sessions::task_id.eq(task_id.value()))
        .filter(pomodoro_sessions::completed.eq(false))
        .select(SessionRow::as_select())
        .first::<SessionRow>(connection)
        .optional()
        .map_err(SessionRepositoryError::persistence)
}

fn row_to_session(row: SessionRow) -> SessionRepositoryResult<PomodoroSession> {
    let SessionRow {
        id,
        task_id,
        started_at,
        ended_at,
        completed,
    } = row;

    let data = PersistedSessionData {
        id: SessionId::new(id).map_err(SessionRepositoryError::persistence)?,
        task_id: TaskId::new(task_id).map_err(SessionRepositoryError::persistence)?,
        started_at,
        ended_at,
        completed,
    };
    Ok(PomodoroSession::from_persisted(data))
}
