// src/common/error.rs

use thiserror::Error;

// Mensagem genérica exibida quando o login falha (a tela de login mostra isso).
pub const LOGIN_FAILED_MESSAGE: &str = "ورود ناموفق بود. لطفاً دوباره تلاش کنید.";

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    // Erro de configuração: alguém pediu a sessão fora do ciclo de vida do SessionContext.
    #[error("SessionStore acessado fora do SessionContext (chame provide() antes de usar)")]
    SessionNotInitialized,

    #[error("Falha no login: {0}")]
    LoginFailed(String),

    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Erro de armazenamento: {0}")]
    StorageError(#[from] std::io::Error),

    #[error("Erro de serialização: {0}")]
    SerializationError(#[from] serde_json::Error),

    // O lock do armazenamento foi envenenado por um panic em outra thread.
    #[error("Armazenamento indisponível")]
    StorageUnavailable,

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Mensagem localizada que a camada de apresentação pode exibir ao usuário.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::LoginFailed(_) => LOGIN_FAILED_MESSAGE,
            AppError::ValidationError(_) => "لطفاً فیلدهای الزامی را تکمیل کنید.",
            AppError::SessionNotInitialized => {
                tracing::error!("🔥 Erro de configuração: {}", self);
                "پیکربندی برنامه نامعتبر است."
            }
            // Todos os outros erros viram a mensagem genérica.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            e => {
                tracing::error!("Erro interno: {}", e);
                "خطای غیرمنتظره‌ای رخ داد."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_failure_maps_to_generic_localized_message() {
        let err = AppError::LoginFailed("timer".into());
        assert_eq!(err.user_message(), LOGIN_FAILED_MESSAGE);
    }

    #[test]
    fn storage_errors_are_not_leaked_to_the_user() {
        let err = AppError::StorageError(std::io::Error::other("disk full"));
        assert!(!err.user_message().contains("disk"));
    }
}
