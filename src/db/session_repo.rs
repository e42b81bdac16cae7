// src/db/session_repo.rs

use std::sync::Arc;

use crate::{common::error::AppError, db::kv_store::KeyValueStore, models::auth::UserRole};

pub const AUTH_KEY: &str = "auth";
pub const AUTH_ROLE_KEY: &str = "authRole";
pub const AUTH_EMAIL_KEY: &str = "authEmail";

// O que ficou gravado da última sessão
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSession {
    pub authenticated: bool,
    pub role: Option<UserRole>,
    // Valor bruto de authRole quando não é um papel conhecido
    pub unknown_role: Option<String>,
    pub email: Option<String>,
}

// O repositório da sessão, único dono das três chaves persistidas
#[derive(Clone)]
pub struct SessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<PersistedSession, AppError> {
        let authenticated = self.store.get(AUTH_KEY)?.as_deref() == Some("true");
        let raw_role = self.store.get(AUTH_ROLE_KEY)?;
        let role = raw_role.as_deref().and_then(UserRole::parse);
        let unknown_role = raw_role.filter(|_| role.is_none());
        let email = self.store.get(AUTH_EMAIL_KEY)?.filter(|e| !e.is_empty());

        Ok(PersistedSession {
            authenticated,
            role,
            unknown_role,
            email,
        })
    }

    // A flag `auth` é gravada por último: sem ela, o resto é ignorado no
    // próximo rehydrate. Se qualquer escrita falhar, as chaves são apagadas.
    pub fn save(&self, role: UserRole, email: &str) -> Result<(), AppError> {
        let written = self
            .store
            .set(AUTH_ROLE_KEY, role.as_str())
            .and_then(|_| self.store.set(AUTH_EMAIL_KEY, email))
            .and_then(|_| self.store.set(AUTH_KEY, "true"));

        if let Err(e) = written {
            if let Err(cleanup) = self.clear() {
                tracing::error!("🔥 Falha ao desfazer sessão parcial: {}", cleanup);
            }
            return Err(e);
        }
        Ok(())
    }

    pub fn save_role(&self, role: UserRole) -> Result<(), AppError> {
        self.store.set(AUTH_ROLE_KEY, role.as_str())
    }

    pub fn clear(&self) -> Result<(), AppError> {
        self.store.remove(AUTH_KEY)?;
        self.store.remove(AUTH_ROLE_KEY)?;
        self.store.remove(AUTH_EMAIL_KEY)?;
        Ok(())
    }
}
