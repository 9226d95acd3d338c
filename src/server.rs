//! Bookings server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: metrics recorder, database and
//! migrations, session store and sweeper, HTTP server, graceful shutdown.

use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::{start_session_sweeper, InMemorySessionStore, SharedSessionStore};
use crate::config::{AppConfig, LogFormat};
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
use crate::interfaces::http::{create_router, RouterDeps};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

/// Seconds between expired-session sweeps
const SESSION_SWEEP_SECS: u64 = 60;

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running bookings server.
///
/// ```rust,no_run
/// use bookings::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    pub sessions: Arc<InMemorySessionStore>,
    pub config: AppConfig,
    /// Port actually bound (differs from config when it asked for 0)
    pub port: u16,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    http_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting bookings service...");

        let prometheus = prometheus_handle();

        // ── Database ───────────────────────────────────────────
        let db_config = DatabaseConfig::from(&app_cfg.database);
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        } else {
            warn!("Skipping migrations; the schema must already exist");
        }

        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(
            db.clone(),
            db_config.query_timeout,
        ));

        // ── Sessions ───────────────────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let sessions = InMemorySessionStore::shared(app_cfg.session.lifetime());
        start_session_sweeper(sessions.clone(), shutdown_signal.clone(), SESSION_SWEEP_SECS);
        let shared_sessions: SharedSessionStore = sessions.clone();

        // ── HTTP server ────────────────────────────────────────
        let router = create_router(RouterDeps {
            repos: repos.clone(),
            sessions: shared_sessions,
            session_cookie: (&app_cfg.session).into(),
            db: Some(db.clone()),
            prometheus: Some(prometheus),
        });

        let listener = tokio::net::TcpListener::bind(app_cfg.server.address()).await?;
        let addr = listener.local_addr()?;
        info!("🚀 Bookings service listening on http://{}", addr);

        let http_shutdown = shutdown_signal.clone();
        let http_server = axum::serve(listener, router).with_graceful_shutdown(async move {
            http_shutdown.wait().await;
            info!("🛑 HTTP server received shutdown signal");
        });

        let http_task = tokio::spawn(async move {
            if let Err(e) = http_server.await {
                error!("HTTP server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            sessions,
            config: app_cfg,
            port: addr.port(),
            db,
            shutdown,
            http_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Trigger shutdown on SIGTERM / SIGINT
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the HTTP server to stop, bounded by the shutdown timeout
    /// once the signal has fired, then close the database.
    pub async fn wait(self) {
        let signal = self.shutdown.signal();
        let mut http_task = self.http_task;

        let stopped_on_its_own = tokio::select! {
            result = &mut http_task => {
                log_task_end(result);
                true
            }
            _ = signal.wait() => false,
        };

        if !stopped_on_its_own {
            let drained = self
                .shutdown
                .drain(async {
                    log_task_end((&mut http_task).await);
                })
                .await;
            if !drained {
                http_task.abort();
            }
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("✅ Database connection closed");
        }

        info!("👋 Bookings service shutdown complete");
    }

    pub async fn shutdown(self) {
        info!("🛑 Shutting down bookings service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.http_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

fn log_task_end(result: Result<(), tokio::task::JoinError>) {
    match result {
        Ok(()) => info!("HTTP server stopped"),
        Err(e) => error!("HTTP server task panicked: {}", e),
    }
}

/// The global recorder can only be installed once per process; a restart
/// within the same process reuses it.
fn prometheus_handle() -> PrometheusHandle {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    PROM_HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("Failed to install Prometheus metrics recorder");
            info!("📊 Prometheus metrics recorder installed");
            handle
        })
        .clone()
}

/// Initialize tracing from the application config.
///
/// Call once at process startup, before [`ServerHandle::start`].
/// `RUST_LOG` overrides `logging.level`.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
