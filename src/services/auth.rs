// src/services/auth.rs

use std::{sync::Arc, time::Duration};

use crate::{
    common::error::AppError,
    db::SessionRepository,
    models::auth::{Session, UserProfile, UserRole},
    services::scheduler::Delay,
};

/// Papel deduzido do prefixo do e-mail (login de demonstração).
///
/// Isolado aqui para que uma autenticação real substitua só esta função.
pub fn infer_role_from_email(email: &str) -> UserRole {
    let email = email.trim().to_lowercase();
    if email.starts_with("admin@") {
        UserRole::Admin
    } else if email.starts_with("tech@") || email.starts_with("technician@") {
        UserRole::Technician
    } else {
        UserRole::Client
    }
}

// Dono exclusivo da sessão: identidade atual + chaves persistidas
pub struct SessionStore {
    repo: SessionRepository,
    delay: Arc<dyn Delay>,
    login_delay: Duration,
    session: Session,
}

impl SessionStore {
    pub fn new(repo: SessionRepository, delay: Arc<dyn Delay>, login_delay: Duration) -> Self {
        Self {
            repo,
            delay,
            login_delay,
            session: Session::Anonymous,
        }
    }

    // Reconstrói a sessão a partir do armazenamento local (inicialização do app)
    pub fn rehydrate(
        repo: SessionRepository,
        delay: Arc<dyn Delay>,
        login_delay: Duration,
    ) -> Result<Self, AppError> {
        let mut store = Self::new(repo, delay, login_delay);
        let persisted = store.repo.load()?;

        if !persisted.authenticated {
            return Ok(store);
        }

        let role = match persisted.role {
            Some(role) => role,
            None => {
                if let Some(raw) = &persisted.unknown_role {
                    tracing::warn!("Papel gravado desconhecido '{}', deduzindo pelo e-mail", raw);
                }
                let email = persisted
                    .email
                    .as_deref()
                    .unwrap_or(UserRole::Client.template().default_email);
                let role = infer_role_from_email(email);
                store.repo.save_role(role)?;
                role
            }
        };

        let profile = UserProfile::from_template(role, persisted.email.as_deref().unwrap_or(""));
        tracing::info!("✅ Sessão restaurada: {} ({})", profile.email(), role);
        store.session = Session::Authenticated(profile);

        Ok(store)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user()
    }

    // Login simulado: qualquer senha serve. Só falha se a espera ou o
    // armazenamento falharem, e nesse caso a sessão atual não muda.
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<UserProfile, AppError> {
        self.delay
            .wait(self.login_delay)
            .await
            .map_err(|e| AppError::LoginFailed(e.to_string()))?;

        let role = infer_role_from_email(email);
        self.repo.save(role, email)?;

        let profile = UserProfile::from_template(role, email);
        tracing::info!("🔑 Login: {} como {}", profile.email(), role);
        self.session = Session::Authenticated(profile.clone());

        Ok(profile)
    }

    // A sessão em memória é limpa mesmo se o armazenamento falhar
    pub fn logout(&mut self) -> Result<(), AppError> {
        if let Some(user) = self.session.user() {
            tracing::info!("👋 Logout: {}", user.email());
        }
        self.session = Session::Anonymous;
        self.repo.clear()
    }
}

/// Ciclo de vida explícito do `SessionStore`. Fora de `provide`/`teardown`,
/// o acesso à sessão é um erro de configuração.
#[derive(Default)]
pub struct SessionContext {
    store: Option<SessionStore>,
}

impl SessionContext {
    pub fn provide(store: SessionStore) -> Self {
        Self { store: Some(store) }
    }

    pub fn teardown(&mut self) -> Option<SessionStore> {
        self.store.take()
    }

    pub fn current(&self) -> Result<&SessionStore, AppError> {
        self.store.as_ref().ok_or(AppError::SessionNotInitialized)
    }

    pub fn current_mut(&mut self) -> Result<&mut SessionStore, AppError> {
        self.store.as_mut().ok_or(AppError::SessionNotInitialized)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::{
        KeyValueStore, MemoryStore,
        session_repo::{AUTH_EMAIL_KEY, AUTH_KEY, AUTH_ROLE_KEY, tests::FailingStore},
    };
    use async_trait::async_trait;

    pub(crate) struct NoDelay;

    #[async_trait]
    impl Delay for NoDelay {
        async fn wait(&self, _duration: Duration) -> Result<(), AppError> {
            Ok(())
        }
    }

    struct BrokenDelay;

    #[async_trait]
    impl Delay for BrokenDelay {
        async fn wait(&self, _duration: Duration) -> Result<(), AppError> {
            Err(AppError::InternalError(anyhow::anyhow!("timer quebrado")))
        }
    }

    pub(crate) fn store_with(kv: Arc<MemoryStore>) -> SessionStore {
        SessionStore::new(SessionRepository::new(kv), Arc::new(NoDelay), Duration::ZERO)
    }

    fn rehydrated(kv: Arc<MemoryStore>) -> SessionStore {
        SessionStore::rehydrate(SessionRepository::new(kv), Arc::new(NoDelay), Duration::ZERO).unwrap()
    }

    #[test]
    fn role_inference_by_prefix() {
        assert_eq!(infer_role_from_email("admin@x.com"), UserRole::Admin);
        assert_eq!(infer_role_from_email("  ADMIN@x.com "), UserRole::Admin);
        assert_eq!(infer_role_from_email("tech@x.com"), UserRole::Technician);
        assert_eq!(infer_role_from_email("technician@x.com"), UserRole::Technician);
        assert_eq!(infer_role_from_email("someone@x.com"), UserRole::Client);
        assert_eq!(infer_role_from_email("administrator@x.com"), UserRole::Client);
        assert_eq!(infer_role_from_email(""), UserRole::Client);
    }

    #[tokio::test]
    async fn login_sets_session_and_persists_keys() {
        let kv = Arc::new(MemoryStore::new());
        let mut store = store_with(kv.clone());

        let profile = store.login("tech@x.com", "whatever").await.unwrap();

        assert_eq!(profile.role(), UserRole::Technician);
        assert_eq!(profile.email(), "tech@x.com");
        assert!(store.is_authenticated());
        assert_eq!(store.user(), Some(&profile));
        assert_eq!(kv.get(AUTH_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(kv.get(AUTH_ROLE_KEY).unwrap().as_deref(), Some("technician"));
        assert_eq!(kv.get(AUTH_EMAIL_KEY).unwrap().as_deref(), Some("tech@x.com"));
    }

    #[tokio::test]
    async fn login_with_empty_email_is_client_with_default_email() {
        let mut store = store_with(Arc::new(MemoryStore::new()));

        let profile = store.login("", "").await.unwrap();

        assert_eq!(profile.role(), UserRole::Client);
        assert_eq!(profile.email(), "client@navalhub.ir");
    }

    #[tokio::test]
    async fn relogin_replaces_profile_wholesale() {
        let mut store = store_with(Arc::new(MemoryStore::new()));
        store.login("admin@x.com", "").await.unwrap();
        store.login("someone@x.com", "").await.unwrap();

        let user = store.user().unwrap();
        assert_eq!(user.role(), UserRole::Client);
        assert_eq!(user.name(), "لیلا جعفری");
    }

    #[tokio::test]
    async fn failed_delay_leaves_session_untouched() {
        let kv = Arc::new(MemoryStore::new());
        let mut store = SessionStore::new(
            SessionRepository::new(kv.clone()),
            Arc::new(BrokenDelay),
            Duration::ZERO,
        );

        let result = store.login("admin@x.com", "").await;

        assert!(matches!(result, Err(AppError::LoginFailed(_))));
        assert!(!store.is_authenticated());
        assert_eq!(kv.get(AUTH_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn failed_storage_write_does_not_survive_restart() {
        let kv = Arc::new(FailingStore { inner: MemoryStore::new(), fail_on: AUTH_ROLE_KEY });
        let mut store =
            SessionStore::new(SessionRepository::new(kv.clone()), Arc::new(NoDelay), Duration::ZERO);

        let result = store.login("admin@x.com", "").await;

        assert!(matches!(result, Err(AppError::StorageUnavailable)));
        assert!(!store.is_authenticated());
        assert_eq!(kv.get(AUTH_KEY).unwrap(), None);

        let restarted =
            SessionStore::rehydrate(SessionRepository::new(kv), Arc::new(NoDelay), Duration::ZERO)
                .unwrap();
        assert_eq!(restarted.session(), &Session::Anonymous);
    }

    #[tokio::test]
    async fn logout_clears_session_and_all_keys() {
        let kv = Arc::new(MemoryStore::new());
        let mut store = store_with(kv.clone());
        store.login("admin@x.com", "").await.unwrap();

        store.logout().unwrap();

        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        for key in [AUTH_KEY, AUTH_ROLE_KEY, AUTH_EMAIL_KEY] {
            assert_eq!(kv.get(key).unwrap(), None, "{key} ainda gravada");
        }
    }

    #[test]
    fn rehydrate_without_flag_is_anonymous() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(AUTH_ROLE_KEY, "admin").unwrap();

        assert!(!rehydrated(kv).is_authenticated());
    }

    #[test]
    fn rehydrate_uses_stored_role_and_email() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(AUTH_KEY, "true").unwrap();
        kv.set(AUTH_ROLE_KEY, "admin").unwrap();
        kv.set(AUTH_EMAIL_KEY, "boss@x.com").unwrap();

        let store = rehydrated(kv);
        let user = store.user().unwrap();
        assert_eq!(user.role(), UserRole::Admin);
        assert_eq!(user.email(), "boss@x.com");
    }

    #[test]
    fn rehydrate_infers_and_persists_missing_role() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(AUTH_KEY, "true").unwrap();
        kv.set(AUTH_EMAIL_KEY, "technician@x.com").unwrap();

        let store = rehydrated(kv.clone());

        assert_eq!(store.user().unwrap().role(), UserRole::Technician);
        assert_eq!(kv.get(AUTH_ROLE_KEY).unwrap().as_deref(), Some("technician"));
    }

    #[test]
    fn rehydrate_without_email_defaults_to_client_template() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(AUTH_KEY, "true").unwrap();

        let store = rehydrated(kv.clone());
        let user = store.user().unwrap();

        assert_eq!(user.role(), UserRole::Client);
        assert_eq!(user.email(), "client@navalhub.ir");
        assert_eq!(kv.get(AUTH_ROLE_KEY).unwrap().as_deref(), Some("client"));
    }

    #[test]
    fn rehydrate_replaces_unknown_stored_role() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(AUTH_KEY, "true").unwrap();
        kv.set(AUTH_ROLE_KEY, "root").unwrap();
        kv.set(AUTH_EMAIL_KEY, "admin@x.com").unwrap();

        let store = rehydrated(kv.clone());

        assert_eq!(store.user().unwrap().role(), UserRole::Admin);
        assert_eq!(kv.get(AUTH_ROLE_KEY).unwrap().as_deref(), Some("admin"));
    }

    #[test]
    fn context_fails_fast_outside_its_lifetime() {
        let mut empty = SessionContext::default();
        assert!(matches!(empty.current(), Err(AppError::SessionNotInitialized)));
        assert!(matches!(empty.current_mut(), Err(AppError::SessionNotInitialized)));

        let mut ctx = SessionContext::provide(store_with(Arc::new(MemoryStore::new())));
        assert!(ctx.current().is_ok());
        assert!(ctx.teardown().is_some());
        assert!(matches!(ctx.current(), Err(AppError::SessionNotInitialized)));
    }
}
