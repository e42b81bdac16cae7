// src/services/support_service.rs

use std::collections::HashMap;

use chrono::Local;

use crate::{
    db::seed,
    models::support::{SupportAction, SupportActionId, SupportRequestLog},
};

// Quantas solicitações o cartão de suporte mostra
const LOG_CAPACITY: usize = 4;
// Campos que entram no resumo da solicitação
const SUMMARY_FIELDS: usize = 2;

#[derive(Debug, Clone)]
pub struct SupportService {
    actions: Vec<SupportAction>,
    logs: Vec<SupportRequestLog>,
}

impl Default for SupportService {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportService {
    pub fn new() -> Self {
        Self {
            actions: seed::support_actions(),
            logs: seed::initial_support_logs(),
        }
    }

    pub fn actions(&self) -> &[SupportAction] {
        &self.actions
    }

    pub fn action(&self, id: SupportActionId) -> Option<&SupportAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn logs(&self) -> &[SupportRequestLog] {
        &self.logs
    }

    // Registra uma solicitação. Ação desconhecida não faz nada.
    pub fn submit(
        &mut self,
        action_id: SupportActionId,
        values: &HashMap<String, String>,
    ) -> Option<SupportRequestLog> {
        let action = self.action(action_id)?;

        let summary = action
            .fields
            .iter()
            .filter_map(|field| {
                let raw = values.get(&field.id).map(|v| v.trim()).filter(|v| !v.is_empty())?;
                Some(format!("{}: {}", field.label, field.display_value(raw)))
            })
            .take(SUMMARY_FIELDS)
            .collect::<Vec<_>>()
            .join(" · ");

        let now = Local::now();
        let millis = now.timestamp_millis().to_string();
        let suffix = &millis[millis.len().saturating_sub(4)..];

        let entry = SupportRequestLog {
            request_id: format!("SR-{suffix}"),
            action_id,
            title: action.title.clone(),
            summary: if summary.is_empty() { action.detail.clone() } else { summary },
            submitted_at: format!("امروز · {}", now.format("%H:%M")),
        };

        tracing::info!("🛟 Solicitação {} registrada ({})", entry.request_id, entry.title);
        self.logs.insert(0, entry.clone());
        self.logs.truncate(LOG_CAPACITY);

        Some(entry)
    }
}
