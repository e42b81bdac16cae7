// src/models/workspace.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceTabId {
    Cases,
    Calendar,
    Reports,
}

impl WorkspaceTabId {
    pub const ALL: [WorkspaceTabId; 3] = [
        WorkspaceTabId::Cases,
        WorkspaceTabId::Calendar,
        WorkspaceTabId::Reports,
    ];
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceTab {
    pub id: WorkspaceTabId,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IslandVariant {
    Light,
    Dark,
}

// Cartão de tarefa dentro de uma etapa
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub avatar: String,
    #[serde(default)]
    pub has_check: bool,
    #[serde(default)]
    pub has_menu: bool,
    #[serde(default)]
    pub has_calendar: bool,
}

// Etapa do pipeline ("ilha"), com a lista ordenada de tarefas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Island {
    pub id: String,
    pub title: String,
    pub variant: IslandVariant,
    pub tasks: Vec<Task>,
}

// Um quadro independente por aba
pub type JourneyState = BTreeMap<WorkspaceTabId, Vec<Island>>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_flags_default_to_false_and_use_camel_case() {
        let task: Task = serde_json::from_value(json!({
            "id": "t-1",
            "title": "بازرسی بدنه",
            "subtitle": "اسکله ۳",
            "avatar": "SR",
            "hasCheck": true
        }))
        .unwrap();

        assert!(task.has_check);
        assert!(!task.has_menu && !task.has_calendar);
        assert_eq!(serde_json::to_value(&task).unwrap()["hasCalendar"], false);
    }

    #[test]
    fn journey_state_is_keyed_by_lowercase_tab() {
        let mut state = JourneyState::new();
        state.insert(
            WorkspaceTabId::Calendar,
            vec![Island {
                id: "intake".into(),
                title: "پذیرش".into(),
                variant: IslandVariant::Dark,
                tasks: Vec::new(),
            }],
        );

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["calendar"][0]["variant"], "dark");
    }
}
