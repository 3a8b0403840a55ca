use crate::model::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub events: usize,
}

pub fn compute(document: &Document) -> Stats {
    let total = document.tasks.len();
    let completed = document
        .tasks
        .iter()
        .filter(|task| task.is_completed())
        .count();

    Stats {
        total,
        completed,
        pending: total - completed,
        events: document.events.len(),
    }
}
