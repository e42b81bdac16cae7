// src/services/scheduler.rs

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::common::error::AppError;

/// Primitiva de espera usada pelo login simulado. Pode falhar; quem chama
/// decide como apresentar o erro.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) -> Result<(), AppError> {
        tokio::time::sleep(duration).await;
        Ok(())
    }
}

// Mutação agendada para daqui a `delay`. Cancelar é sempre seguro,
// inclusive depois que ela já rodou.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    // Espera o fim da tarefa. `true` se o job rodou até o fim.
    pub async fn join(self) -> bool {
        match self.handle.await {
            Ok(()) => true,
            Err(e) if e.is_cancelled() => false,
            Err(e) => {
                tracing::error!("🔥 Tarefa agendada terminou com panic: {}", e);
                false
            }
        }
    }
}

pub fn schedule<F, Fut>(delay: Duration, job: F) -> ScheduledTask
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        job().await;
    });
    ScheduledTask { handle }
}
