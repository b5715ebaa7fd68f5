//! Serve command - Starts the development config server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::ServerSettings;
use crate::errors::AppResult;

/// Execute the serve command
pub async fn execute(args: ServeArgs) -> AppResult<()> {
    let settings = ServerSettings::from_env()?
        .with_addr(args.host, args.port)
        .validated()?;
    tracing::debug!(?settings, "Server settings loaded");

    run(settings).await
}

/// Bind and serve until the process stops.
pub async fn run(settings: ServerSettings) -> AppResult<()> {
    let addr = settings.addr();
    let app = create_router(AppState::new(settings))?;

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("Failed to bind to {}: {}", addr, e);
        e
    })?;

    tracing::info!("Config server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[tokio::test]
    async fn occupied_port_is_an_io_error() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let settings = ServerSettings::default().with_addr("127.0.0.1", port);
        let err = run(settings).await.unwrap_err();

        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.code(), "IO_ERROR");
    }
}
