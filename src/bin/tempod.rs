//! Tempo HTTP server.
//!
//! Serves the task-tracking and Pomodoro API over the backend selected at
//! startup: `PostgreSQL` when `--database-url` (or `DATABASE_URL`) is
//! given, an in-memory store otherwise. The in-memory backend keeps no
//! state across restarts and suits development and demos.
//!
//! Usage:
//!
//! ```text
//! tempod [--bind 127.0.0.1:8080] [--database-url postgres://...]
//! ```

use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use tempo::api::{ApiContext, build_router};
use tempo::pomodoro::{
    adapters::{memory::InMemorySessionRepository, postgres::PostgresSessionRepository},
    ports::SessionRepository,
    services::PomodoroTrackerService,
};
use tempo::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "tempod", about = "Task tracking with Pomodoro focus sessions")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "TEMPO_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// `PostgreSQL` connection string; omit for the in-memory backend.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    match args.database_url {
        Some(url) => {
            let pool = Pool::builder().build(ConnectionManager::<PgConnection>::new(url))?;
            info!("using postgres backend");
            serve(
                args.bind,
                Arc::new(PostgresTaskRepository::new(pool.clone())),
                Arc::new(PostgresSessionRepository::new(pool)),
            )
            .await
        }
        None => {
            info!("using in-memory backend; state is not persisted");
            serve(
                args.bind,
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(InMemorySessionRepository::new()),
            )
            .await
        }
    }
}

async fn serve<R, S>(bind: SocketAddr, tasks: Arc<R>, sessions: Arc<S>) -> Result<(), BoxError>
where
    R: TaskRepository + 'static,
    S: SessionRepository + 'static,
{
    let clock = Arc::new(DefaultClock);
    let context = ApiContext::new(
        TaskLifecycleService::new(Arc::clone(&tasks), Arc::clone(&clock)),
        PomodoroTrackerService::new(tasks, sessions, clock),
    );

    let router = build_router(context);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on http://{bind}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    // Serve until interrupted; shutdown needs no cleanup beyond dropping
    // the listener.
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install ctrl-c handler");
    }
}
