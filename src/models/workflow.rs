// src/models/workflow.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::not_blank;

// Trechos do rótulo livre de etapa que decidem a coluna do quadro
pub const RECEIVE_MARKER: &str = "در انتظار";
pub const FIELD_MARKERS: [&str; 2] = ["بازرسی", "تحلیل"];
pub const HANDOVER_MARKER: &str = "مستندسازی";
// Gatilhos do filtro "pendente", mantidos literalmente
pub const PENDING_MARKERS: [&str; 3] = ["در انتظار", "آماده", "معوق"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowAssignment {
    pub id: String,
    pub utn: String,
    pub title: String,
    pub tech: String,
    pub stage: String,
    pub sla: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowColumn {
    Receive,
    Field,
    Handover,
}

impl WorkflowAssignment {
    pub fn stage_contains(&self, marker: &str) -> bool {
        self.stage.contains(marker)
    }

    pub fn in_column(&self, column: WorkflowColumn) -> bool {
        match column {
            WorkflowColumn::Receive => self.stage_contains(RECEIVE_MARKER),
            WorkflowColumn::Field => FIELD_MARKERS.iter().any(|m| self.stage_contains(m)),
            WorkflowColumn::Handover => self.stage_contains(HANDOVER_MARKER),
        }
    }

    // Todas as colunas em que o item aparece (zero, uma ou várias)
    pub fn columns(&self) -> Vec<WorkflowColumn> {
        [WorkflowColumn::Receive, WorkflowColumn::Field, WorkflowColumn::Handover]
            .into_iter()
            .filter(|c| self.in_column(*c))
            .collect()
    }

    pub fn is_pending(&self) -> bool {
        PENDING_MARKERS.iter().any(|m| self.stage_contains(m))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowFilter {
    #[default]
    All,
    Pending,
    Mine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStageKey {
    Receive,
    Field,
    Handover,
}

impl WorkflowStageKey {
    // Rótulo canônico: sempre contém o marcador da coluna correspondente
    pub fn stage_label(self) -> &'static str {
        match self {
            WorkflowStageKey::Receive => "در انتظار بررسی",
            WorkflowStageKey::Field => "بازرسی میدانی",
            WorkflowStageKey::Handover => "مستندسازی",
        }
    }
}

// As três colunas derivadas, recalculadas a cada leitura
#[derive(Debug, Default)]
pub struct WorkflowColumns<'a> {
    pub receive: Vec<&'a WorkflowAssignment>,
    pub field: Vec<&'a WorkflowAssignment>,
    pub handover: Vec<&'a WorkflowAssignment>,
}

// Formulário "nova atribuição"
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignmentPayload {
    pub stage: WorkflowStageKey,
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    pub technician: String,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
}
