// src/config.rs

use std::{env, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;

use crate::{
    common::error::AppError,
    db::{FileStore, KeyValueStore, SessionRepository, seed},
    middleware::route_guard::RouteGuard,
    services::{
        auth::{SessionContext, SessionStore},
        client_service::ClientPortal,
        desk_service::DeskService,
        scheduler::{Delay, TokioDelay},
        support_service::SupportService,
        workflow_service::WorkflowBoard,
        workspace_service::JourneyBoard,
    },
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_path: PathBuf,
    pub login_delay: Duration,
    pub upload_delay: Duration,
    pub current_technician: String,
    pub start_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(".navalhub/session.json"),
            login_delay: Duration::from_millis(400),
            upload_delay: Duration::from_millis(650),
            current_technician: seed::DEFAULT_CURRENT_TECHNICIAN.to_string(),
            start_path: "/".to_string(),
        }
    }
}

fn millis_var(name: &str, default: Duration) -> anyhow::Result<Duration> {
    match env::var(name) {
        Ok(raw) => {
            let ms: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{name} deve ser um número de milissegundos, veio '{raw}'"))?;
            Ok(Duration::from_millis(ms))
        }
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    // Carrega o .env (se existir) e lê as variáveis, com padrões para tudo
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Ok(Self {
            storage_path: env::var("NAVALHUB_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_path),
            login_delay: millis_var("NAVALHUB_LOGIN_DELAY_MS", defaults.login_delay)?,
            upload_delay: millis_var("NAVALHUB_UPLOAD_DELAY_MS", defaults.upload_delay)?,
            current_technician: env::var("NAVALHUB_CURRENT_TECHNICIAN")
                .unwrap_or(defaults.current_technician),
            start_path: env::var("NAVALHUB_START_PATH").unwrap_or(defaults.start_path),
        })
    }
}

// O estado do painel inteiro: cada store é dono exclusivo dos seus dados
pub struct AppState {
    pub config: AppConfig,
    pub session: SessionContext,
    pub guard: RouteGuard,
    pub journeys: JourneyBoard,
    pub workflow: WorkflowBoard,
    pub desk: DeskService,
    pub client: ClientPortal,
    pub support: SupportService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        // Se o arquivo estiver corrompido, a aplicação não deve iniciar
        let store = FileStore::open(&config.storage_path).with_context(|| {
            format!("Falha ao abrir o armazenamento local em {}", config.storage_path.display())
        })?;
        tracing::info!("✅ Armazenamento local pronto em {}", store.path().display());

        Ok(Self::with_store(config, Arc::new(store), Arc::new(TokioDelay))?)
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_store(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        delay: Arc<dyn Delay>,
    ) -> Result<Self, AppError> {
        let repo = SessionRepository::new(store);
        let session = SessionStore::rehydrate(repo, delay, config.login_delay)?;

        let workflow = WorkflowBoard::new(config.current_technician.clone());
        for orphan in workflow.unclassified() {
            tracing::warn!("Atribuição {} ('{}') fora de todas as colunas", orphan.id, orphan.stage);
        }

        Ok(Self {
            session: SessionContext::provide(session),
            guard: RouteGuard::default(),
            journeys: JourneyBoard::new(),
            workflow,
            desk: DeskService::new(),
            client: ClientPortal::new(config.upload_delay),
            support: SupportService::new(),
            config,
        })
    }
}
