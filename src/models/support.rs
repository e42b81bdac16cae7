// src/models/support.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportActionId {
    Ticket,
    Chat,
    Meeting,
    SecureRoom,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Select { options: Vec<SelectOption> },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportField {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
}

impl SupportField {
    // Campos de seleção mostram o rótulo da opção, não o valor bruto
    pub fn display_value<'a>(&'a self, raw: &'a str) -> &'a str {
        match &self.kind {
            FieldKind::Select { options } => options
                .iter()
                .find(|o| o.value == raw)
                .map_or(raw, |o| o.label.as_str()),
            _ => raw,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportAction {
    pub id: SupportActionId,
    pub title: String,
    pub detail: String,
    pub sla: Option<String>,
    pub fields: Vec<SupportField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequestLog {
    pub request_id: String,
    pub action_id: SupportActionId,
    pub title: String,
    pub summary: String,
    pub submitted_at: String,
}
