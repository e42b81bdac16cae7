// src/handlers/auth.rs

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::route_guard::{LOGIN_PATH, home_path_for},
    models::auth::LoginPayload,
};

// O que a tela de login deve fazer depois do envio
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Navigate(&'static str),
    Failed(&'static str),
}

// Envio do formulário de login
pub async fn submit_login(state: &mut AppState, payload: LoginPayload) -> Result<LoginOutcome, AppError> {
    let session = state.session.current_mut()?;

    match session.login(payload.email.trim(), &payload.password).await {
        Ok(user) => Ok(LoginOutcome::Navigate(home_path_for(Some(user.role())))),
        Err(e) => {
            tracing::error!("Falha no login: {}", e);
            Ok(LoginOutcome::Failed(e.user_message()))
        }
    }
}

pub fn logout(state: &mut AppState) -> Result<&'static str, AppError> {
    state.session.current_mut()?.logout()?;
    Ok(LOGIN_PATH)
}
