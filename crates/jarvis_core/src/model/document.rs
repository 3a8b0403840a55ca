use super::{Event, Task};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Root of the persisted store: every task and event the assistant knows about.
///
/// Ids come from the `next_*_id` counters rather than the collection lengths, so
/// deleting an item never lets a later one reuse its id. Stores written before the
/// counters existed load with the counters at zero; allocation still skips past the
/// highest id already present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub tasks: Vec<Task>,
    pub events: Vec<Event>,
    #[serde(default)]
    pub next_task_id: u64,
    #[serde(default)]
    pub next_event_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            events: Vec::new(),
            next_task_id: 1,
            next_event_id: 1,
        }
    }
}

impl Document {
    pub fn allocate_task_id(&mut self) -> Result<u64, AppError> {
        let highest = self.tasks.iter().map(|task| task.id).max().unwrap_or(0);
        let (id, next) = next_id(self.next_task_id, highest, "task")?;
        self.next_task_id = next;
        Ok(id)
    }

    pub fn allocate_event_id(&mut self) -> Result<u64, AppError> {
        let highest = self.events.iter().map(|event| event.id).max().unwrap_or(0);
        let (id, next) = next_id(self.next_event_id, highest, "event")?;
        self.next_event_id = next;
        Ok(id)
    }
}

fn next_id(counter: u64, highest: u64, kind: &str) -> Result<(u64, u64), AppError> {
    let exhausted = || AppError::invalid_data(format!("{kind} ids exhausted"));
    let id = counter.max(highest.checked_add(1).ok_or_else(exhausted)?);
    let next = id.checked_add(1).ok_or_else(exhausted)?;
    Ok((id, next))
}
