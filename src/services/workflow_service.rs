// src/services/workflow_service.rs

use std::collections::HashSet;

use rand::Rng;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::format::{UNKNOWN_OWNER, non_blank, sla_label},
    db::seed,
    models::workflow::{
        NewAssignmentPayload, WorkflowAssignment, WorkflowColumn, WorkflowColumns, WorkflowFilter,
        WorkflowStageKey,
    },
};

// Faixa do código UTN sintético: 1500..=2299
const UTN_RANGE: std::ops::Range<u32> = 1500..2300;

#[derive(Debug, Clone)]
pub struct WorkflowBoard {
    assignments: Vec<WorkflowAssignment>,
    filter: WorkflowFilter,
    selected: HashSet<String>,
    current_technician: String,
}

impl WorkflowBoard {
    pub fn new(current_technician: impl Into<String>) -> Self {
        Self::with_assignments(seed::initial_assignments(), current_technician)
    }

    pub fn with_assignments(
        assignments: Vec<WorkflowAssignment>,
        current_technician: impl Into<String>,
    ) -> Self {
        Self {
            assignments,
            filter: WorkflowFilter::All,
            selected: HashSet::new(),
            current_technician: current_technician.into(),
        }
    }

    pub fn assignments(&self) -> &[WorkflowAssignment] {
        &self.assignments
    }

    pub fn filter(&self) -> WorkflowFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: WorkflowFilter) {
        self.filter = filter;
    }

    pub fn filtered(&self) -> Vec<&WorkflowAssignment> {
        self.assignments
            .iter()
            .filter(|item| match self.filter {
                WorkflowFilter::All => true,
                WorkflowFilter::Mine => item.tech == self.current_technician,
                WorkflowFilter::Pending => item.is_pending(),
            })
            .collect()
    }

    // Colunas derivadas a cada leitura, depois do filtro. Cada coluna é
    // calculada de forma independente.
    pub fn columns(&self) -> WorkflowColumns<'_> {
        let filtered = self.filtered();
        let pick = |column: WorkflowColumn| {
            filtered
                .iter()
                .copied()
                .filter(|a| a.in_column(column))
                .collect::<Vec<_>>()
        };

        WorkflowColumns {
            receive: pick(WorkflowColumn::Receive),
            field: pick(WorkflowColumn::Field),
            handover: pick(WorkflowColumn::Handover),
        }
    }

    // Atribuições que não aparecem em nenhuma coluna do quadro
    pub fn unclassified(&self) -> Vec<&WorkflowAssignment> {
        self.assignments.iter().filter(|a| a.columns().is_empty()).collect()
    }

    // Técnicos oferecidos no formulário de nova atribuição
    pub fn technician_options(&self) -> Vec<&'static str> {
        seed::technician_options()
    }

    // Formulário em branco para a etapa, já com o primeiro técnico da lista
    pub fn draft(&self, stage: WorkflowStageKey) -> NewAssignmentPayload {
        NewAssignmentPayload {
            stage,
            title: String::new(),
            technician: self.technician_options().first().copied().unwrap_or_default().to_string(),
            due_date: None,
            due_time: None,
        }
    }

    /// Cria uma atribuição na etapa pedida. Título em branco é ignorado
    /// em silêncio (devolve `None`).
    pub fn add_assignment(&mut self, payload: NewAssignmentPayload) -> Option<&WorkflowAssignment> {
        if let Err(errors) = payload.validate() {
            tracing::debug!("Nova atribuição rejeitada: {}", errors);
            return None;
        }

        let utn = rand::thread_rng().gen_range(UTN_RANGE);
        let technician = non_blank(Some(payload.technician.as_str())).unwrap_or(UNKNOWN_OWNER);

        let item = WorkflowAssignment {
            id: format!("wf-{}", Uuid::new_v4()),
            utn: format!("UTN-{utn}"),
            title: payload.title.trim().to_string(),
            tech: technician.to_string(),
            stage: payload.stage.stage_label().to_string(),
            sla: sla_label(payload.due_date.as_deref(), payload.due_time.as_deref()),
        };

        tracing::info!("📋 Atribuição {} criada em '{}'", item.utn, item.stage);
        self.assignments.push(item);
        self.assignments.last()
    }

    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }
}
