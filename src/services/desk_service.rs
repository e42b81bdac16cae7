// src/services/desk_service.rs

use std::collections::BTreeSet;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        format::{UNKNOWN_OWNER, action_due_label, non_blank},
        validation::not_blank,
    },
    db::seed,
    models::desk::{KnowledgeResource, NewActionPayload, PriorityAlert, QuickNote},
};

// Mesa do técnico: notas rápidas, ações personalizadas e recursos fixados
#[derive(Debug, Clone)]
pub struct DeskService {
    notes: Vec<QuickNote>,
    priority_alerts: Vec<PriorityAlert>,
    custom_alerts: Vec<PriorityAlert>,
    resources: Vec<KnowledgeResource>,
    pinned: BTreeSet<String>,
}

impl Default for DeskService {
    fn default() -> Self {
        Self::new()
    }
}

impl DeskService {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            priority_alerts: seed::priority_alerts(),
            custom_alerts: Vec::new(),
            resources: seed::knowledge_base(),
            pinned: BTreeSet::new(),
        }
    }

    // Mais recentes primeiro
    pub fn notes(&self) -> &[QuickNote] {
        &self.notes
    }

    pub fn add_note(&mut self, text: &str) -> bool {
        if not_blank(text).is_err() {
            return false;
        }

        self.notes.insert(
            0,
            QuickNote {
                id: format!("note-{}", Uuid::new_v4()),
                text: text.trim().to_string(),
                created_at: Utc::now(),
            },
        );
        true
    }

    pub fn add_action(&mut self, payload: NewActionPayload) -> bool {
        if let Err(errors) = payload.validate() {
            tracing::debug!("Ação rejeitada: {}", errors);
            return false;
        }

        let owner = non_blank(Some(payload.owner.as_str())).unwrap_or(UNKNOWN_OWNER);
        let due = action_due_label(
            payload.date.as_deref(),
            payload.hour.as_deref(),
            payload.minute.as_deref(),
        );

        self.custom_alerts.insert(
            0,
            PriorityAlert {
                id: format!("alert-{}", Uuid::new_v4()),
                title: payload.title.trim().to_string(),
                owner: owner.to_string(),
                due,
            },
        );
        true
    }

    // Alertas fixos seguidos dos criados pelo técnico
    pub fn alerts(&self) -> Vec<&PriorityAlert> {
        self.priority_alerts.iter().chain(&self.custom_alerts).collect()
    }

    pub fn resources(&self) -> &[KnowledgeResource] {
        &self.resources
    }

    pub fn toggle_pin(&mut self, resource_id: &str) {
        if !self.pinned.remove(resource_id) {
            self.pinned.insert(resource_id.to_string());
        }
    }

    pub fn is_pinned(&self, resource_id: &str) -> bool {
        self.pinned.contains(resource_id)
    }
}
