//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use employees_backend::Trace;
#[cfg(debug_assertions)]
use employees_backend::doc::ApiDoc;
use employees_backend::inbound::http::employees;
use employees_backend::inbound::http::health::{HealthState, live, ready};
use employees_backend::inbound::http::state::HttpState;
use employees_backend::outbound::memory::InMemoryEmployeeRepository;
use employees_backend::outbound::persistence::DieselEmployeeRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Select the repository adapter: PostgreSQL when a pool is configured,
/// otherwise the in-memory store.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL employee repository");
            HttpState::from_repository(Arc::new(DieselEmployeeRepository::new(pool.clone())))
        }
        None => {
            info!("no database configured; using in-memory employee repository");
            HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::new()))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(employees::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// Marks `health_state` ready once the listener is bound. Actix signal
/// handling is disabled; pair the server with [`shutdown_on_signal`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .disable_signals()
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}

async fn wait_for_ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Ctrl-C handler unavailable");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                () = wait_for_ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(err) => {
            warn!(error = %err, "SIGTERM handler unavailable");
            wait_for_ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    wait_for_ctrl_c().await;
}

/// Fail liveness first so probes see the drain, then stop gracefully.
async fn drain(health_state: &HealthState, handle: ServerHandle) {
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

/// Wait for SIGINT or SIGTERM, then drain the server.
pub async fn shutdown_on_signal(health_state: web::Data<HealthState>, handle: ServerHandle) {
    wait_for_signal().await;
    info!("shutdown signal received");
    drain(&health_state, handle).await;
}
