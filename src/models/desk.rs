// src/models/desk.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickNote {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

// Alerta de prioridade: tanto os fixos quanto os criados pelo técnico
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityAlert {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub due: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeResource {
    pub id: String,
    pub title: String,
    pub detail: String,
}

// Formulário "nova ação"
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewActionPayload {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    pub owner: String,
    pub date: Option<String>,
    pub hour: Option<String>,
    pub minute: Option<String>,
}
