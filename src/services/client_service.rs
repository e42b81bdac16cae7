// src/services/client_service.rs

use std::{
    collections::BTreeSet,
    sync::{Arc, Weak},
    time::Duration,
};

use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    common::format::format_bytes,
    db::seed,
    models::client::{
        DownloadPackage, IncomingFile, ReviewStep, StepStatus, UploadRecord, UploadStatus,
    },
    services::scheduler::{ScheduledTask, schedule},
};

#[derive(Debug, Default)]
struct UploadLedger {
    records: Vec<UploadRecord>,
    // Lotes agendados que ainda não chegaram nem foram cancelados
    pending: BTreeSet<u64>,
    next_batch: u64,
}

/// Um lote de upload em andamento.
#[derive(Debug)]
pub struct UploadTicket {
    batch: u64,
    task: ScheduledTask,
}

impl UploadTicket {
    pub fn batch(&self) -> u64 {
        self.batch
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    // `true` se o lote rodou até o fim (pode ter sido descartado)
    pub async fn join(self) -> bool {
        self.task.join().await
    }
}

// Portal do cliente: uploads simulados, progresso da revisão e pagamento
pub struct ClientPortal {
    ledger: Arc<Mutex<UploadLedger>>,
    upload_delay: Duration,
    steps: Vec<ReviewStep>,
    packages: Vec<DownloadPackage>,
    payment_complete: bool,
}

impl ClientPortal {
    pub fn new(upload_delay: Duration) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(UploadLedger {
                records: seed::initial_uploads(),
                ..Default::default()
            })),
            upload_delay,
            steps: seed::review_steps(),
            packages: seed::download_packages(),
            payment_complete: false,
        }
    }

    pub async fn uploads(&self) -> Vec<UploadRecord> {
        self.ledger.lock().await.records.clone()
    }

    // Verdadeiro enquanto houver qualquer lote pendente
    pub async fn is_uploading(&self) -> bool {
        !self.ledger.lock().await.pending.is_empty()
    }

    /// Agenda o upload simulado. Lote vazio não faz nada.
    ///
    /// O job guarda só um `Weak` do ledger: se o portal for descartado antes
    /// do disparo, o resultado é jogado fora. Um lote que já não está em
    /// `pending` (cancelado) também é descartado.
    pub async fn upload(&self, files: Vec<IncomingFile>) -> Option<UploadTicket> {
        if files.is_empty() {
            return None;
        }

        let batch = {
            let mut ledger = self.ledger.lock().await;
            let batch = ledger.next_batch;
            ledger.next_batch += 1;
            ledger.pending.insert(batch);
            batch
        };
        let ledger: Weak<Mutex<UploadLedger>> = Arc::downgrade(&self.ledger);

        let task = schedule(self.upload_delay, move || async move {
            let Some(ledger) = ledger.upgrade() else {
                tracing::debug!("Upload concluído após o portal ser fechado; descartado");
                return;
            };

            let mut ledger = ledger.lock().await;
            if !ledger.pending.remove(&batch) {
                tracing::debug!("Lote {} cancelado antes de chegar; descartado", batch);
                return;
            }

            let stamp = Utc::now();
            let incoming: Vec<UploadRecord> = files
                .into_iter()
                .enumerate()
                .map(|(index, file)| UploadRecord {
                    id: format!("upl-{}-{}", stamp.timestamp_millis(), index),
                    name: file.name,
                    size: format_bytes(file.size_bytes),
                    status: UploadStatus::PendingReview,
                    uploaded_at: stamp,
                })
                .collect();

            tracing::info!(
                "📎 {} arquivo(s) enviados: {}",
                incoming.len(),
                UploadStatus::PendingReview.label()
            );
            let older = std::mem::replace(&mut ledger.records, incoming);
            ledger.records.extend(older);
        });

        Some(UploadTicket { batch, task })
    }

    // Cancela só este lote; os outros continuam pendentes
    pub async fn cancel_upload(&self, ticket: UploadTicket) {
        ticket.task.cancel();
        if self.ledger.lock().await.pending.remove(&ticket.batch) {
            tracing::debug!("Lote {} cancelado", ticket.batch);
        }
    }

    pub fn steps(&self) -> &[ReviewStep] {
        &self.steps
    }

    // Percentual de etapas concluídas, arredondado
    pub fn progress(&self) -> u8 {
        if self.steps.is_empty() {
            return 0;
        }
        let done = self.steps.iter().filter(|s| s.status == StepStatus::Done).count();
        ((done as f64 * 100.0) / self.steps.len() as f64).round() as u8
    }

    pub fn mark_paid(&mut self) {
        self.payment_complete = true;
    }

    pub fn is_paid(&self) -> bool {
        self.payment_complete
    }

    // Pacotes liberados; os pagos só aparecem depois do pagamento
    pub fn available_packages(&self) -> Vec<&DownloadPackage> {
        self.packages
            .iter()
            .filter(|p| !p.requires_payment || self.payment_complete)
            .collect()
    }
}
