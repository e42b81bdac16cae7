// src/handlers/navigation.rs

use crate::{common::error::AppError, config::AppState, middleware::route_guard::GuardDecision};

// Navegação pedida pela camada de apresentação
pub fn navigate(state: &AppState, path: &str) -> Result<GuardDecision, AppError> {
    let session = state.session.current()?.session();
    let decision = state.guard.resolve(session, path);

    match &decision {
        GuardDecision::Redirect(to) => tracing::debug!("{} -> redirecionado para {}", path, to),
        GuardDecision::NotFound => tracing::debug!("{} -> rota inexistente", path),
        GuardDecision::Render(m) => tracing::debug!("{} -> {}", path, m.pattern),
    }

    Ok(decision)
}
