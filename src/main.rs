//src/main.rs

use navalhub::{config::AppState, handlers, middleware::route_guard::GuardDecision};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Inicializa o logger (RUST_LOG, padrão "info")
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração ou o armazenamento falharem, a aplicação não deve iniciar.
    let state = AppState::new()?;

    let session = state.session.current()?;
    match session.user() {
        Some(user) => tracing::info!("👤 {} <{}> ({})", user.name(), user.email(), user.role()),
        None => tracing::info!("👤 Nenhuma sessão ativa"),
    }

    let start = state.config.start_path.clone();
    match handlers::navigation::navigate(&state, &start)? {
        GuardDecision::Render(route) => tracing::info!("🚀 Abrindo {} ({})", start, route.pattern),
        GuardDecision::Redirect(to) => tracing::info!("🚀 {} redirecionado para {}", start, to),
        GuardDecision::NotFound => tracing::warn!("Rota inicial {} não existe", start),
    }

    Ok(())
}
