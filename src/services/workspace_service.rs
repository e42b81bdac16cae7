// src/services/workspace_service.rs

use std::collections::BTreeMap;

use crate::{
    db::seed,
    models::workspace::{Island, JourneyState, WorkspaceTab, WorkspaceTabId},
};

// Quadro de jornada do técnico: um conjunto de ilhas independente por aba
#[derive(Debug, Clone)]
pub struct JourneyBoard {
    journeys: JourneyState,
    active_tab: WorkspaceTabId,
    tabs: Vec<WorkspaceTab>,
}

impl Default for JourneyBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl JourneyBoard {
    pub fn new() -> Self {
        // Cópia profunda por aba: mexer em "cases" nunca altera "calendar"
        let journeys = WorkspaceTabId::ALL
            .into_iter()
            .map(|tab| (tab, seed::journey_base()))
            .collect();

        Self {
            journeys,
            active_tab: WorkspaceTabId::Cases,
            tabs: seed::workspace_tabs(),
        }
    }

    pub fn tabs(&self) -> &[WorkspaceTab] {
        &self.tabs
    }

    pub fn active_tab(&self) -> WorkspaceTabId {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: WorkspaceTabId) {
        self.active_tab = tab;
    }

    pub fn islands(&self, tab: WorkspaceTabId) -> &[Island] {
        self.journeys.get(&tab).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn active_islands(&self) -> &[Island] {
        self.islands(self.active_tab)
    }

    // Quantidade de tarefas por título de ilha (contadores do cabeçalho)
    pub fn stage_counts(&self, tab: WorkspaceTabId) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for island in self.islands(tab) {
            *counts.entry(island.title.clone()).or_insert(0) += island.tasks.len();
        }
        counts
    }

    /// Move `task_id` para `target_index` dentro da mesma ilha.
    ///
    /// O índice é limitado a `[0, len]` depois da remoção. Ilha ou tarefa
    /// inexistente é no-op e devolve `false`.
    pub fn reorder_task(
        &mut self,
        tab: WorkspaceTabId,
        island_id: &str,
        task_id: &str,
        target_index: isize,
    ) -> bool {
        let Some(island) = self
            .journeys
            .get_mut(&tab)
            .and_then(|islands| islands.iter_mut().find(|i| i.id == island_id))
        else {
            tracing::debug!("Reordenação ignorada: ilha {} não existe em {:?}", island_id, tab);
            return false;
        };

        let Some(current) = island.tasks.iter().position(|t| t.id == task_id) else {
            tracing::debug!("Reordenação ignorada: tarefa {} não está em {}", task_id, island_id);
            return false;
        };

        let moved = island.tasks.remove(current);
        let target = target_index.clamp(0, island.tasks.len() as isize) as usize;
        island.tasks.insert(target, moved);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(board: &JourneyBoard, tab: WorkspaceTabId, island: &str) -> Vec<String> {
        board
            .islands(tab)
            .iter()
            .find(|i| i.id == island)
            .map(|i| i.tasks.iter().map(|t| t.id.clone()).collect())
            .unwrap_or_default()
    }

    // intake = [task-assign, task-brief, task-sync]
    const A: &str = "task-assign";
    const B: &str = "task-brief";
    const C: &str = "task-sync";

    #[test]
    fn moving_middle_task_to_front() {
        let mut board = JourneyBoard::new();
        assert!(board.reorder_task(WorkspaceTabId::Cases, "intake", B, 0));
        assert_eq!(ids(&board, WorkspaceTabId::Cases, "intake"), [B, A, C]);
    }

    #[test]
    fn out_of_range_index_is_clamped_to_end() {
        let mut board = JourneyBoard::new();
        assert!(board.reorder_task(WorkspaceTabId::Cases, "intake", A, 99));
        assert_eq!(ids(&board, WorkspaceTabId::Cases, "intake"), [B, C, A]);
    }

    #[test]
    fn negative_index_is_clamped_to_start() {
        let mut board = JourneyBoard::new();
        board.reorder_task(WorkspaceTabId::Cases, "intake", C, -5);
        assert_eq!(ids(&board, WorkspaceTabId::Cases, "intake"), [C, A, B]);
    }

    #[test]
    fn same_position_is_idempotent() {
        let mut board = JourneyBoard::new();
        board.reorder_task(WorkspaceTabId::Cases, "intake", B, 1);
        board.reorder_task(WorkspaceTabId::Cases, "intake", B, 1);
        assert_eq!(ids(&board, WorkspaceTabId::Cases, "intake"), [A, B, C]);
    }

    #[test]
    fn unknown_task_or_island_is_a_noop() {
        let mut board = JourneyBoard::new();
        let before = board.islands(WorkspaceTabId::Cases).to_vec();

        assert!(!board.reorder_task(WorkspaceTabId::Cases, "intake", "task-ghost", 0));
        assert!(!board.reorder_task(WorkspaceTabId::Cases, "nowhere", A, 0));
        // Tarefa de outra ilha não atravessa ilhas
        assert!(!board.reorder_task(WorkspaceTabId::Cases, "intake", "task-lab", 0));

        assert_eq!(board.islands(WorkspaceTabId::Cases), before.as_slice());
    }

    #[test]
    fn tabs_are_isolated() {
        let mut board = JourneyBoard::new();
        board.reorder_task(WorkspaceTabId::Cases, "intake", C, 0);
        board.reorder_task(WorkspaceTabId::Cases, "execution", "task-lab", 5);

        let pristine = JourneyBoard::new();
        for tab in [WorkspaceTabId::Calendar, WorkspaceTabId::Reports] {
            assert_eq!(board.islands(tab), pristine.islands(tab));
        }
    }

    #[test]
    fn reorder_preserves_task_multiset() {
        let mut board = JourneyBoard::new();
        for (task, idx) in [(A, 2), (C, 0), (B, 7), (A, -1)] {
            board.reorder_task(WorkspaceTabId::Reports, "intake", task, idx);
        }
        let mut after = ids(&board, WorkspaceTabId::Reports, "intake");
        after.sort();
        let mut expected = vec![A.to_string(), B.to_string(), C.to_string()];
        expected.sort();
        assert_eq!(after, expected);
    }

    #[test]
    fn stage_counts_follow_active_tab() {
        let mut board = JourneyBoard::new();
        board.set_active_tab(WorkspaceTabId::Calendar);
        assert_eq!(board.active_islands().len(), 3);
        let counts = board.stage_counts(board.active_tab());
        assert_eq!(counts.get("دریافت و ارجاع"), Some(&3));
        assert_eq!(counts.values().sum::<usize>(), 7);
    }
}
