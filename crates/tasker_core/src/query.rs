use crate::model::{Status, Task};

/// Case-insensitive substring search over task titles, order preserved.
pub fn filter_by_title(tasks: &[Task], term: &str) -> Vec<Task> {
    let needle = term.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn filter_by_status(tasks: &[Task], status: Status) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status == status)
        .cloned()
        .collect()
}

/// Maps a view-menu option to its filter: 1 keeps everything, 2/3/4 select
/// pending, in-progress and completed tasks, anything else selects nothing.
pub fn filter_by_option(tasks: &[Task], option: i64) -> Vec<Task> {
    match option {
        1 => tasks.to_vec(),
        2 => filter_by_status(tasks, Status::Pending),
        3 => filter_by_status(tasks, Status::InProgress),
        4 => filter_by_status(tasks, Status::Completed),
        _ => Vec::new(),
    }
}

/// Returns a new list with `task` appended; the input list is untouched.
pub fn add_task(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut updated = tasks.to_vec();
    updated.push(task);
    updated
}

/// Looks up a task by its 1-based display position.
pub fn task_at_index(tasks: &[Task], index: i64) -> Option<&Task> {
    if index < 1 || index > tasks.len() as i64 {
        return None;
    }
    tasks.get(index as usize - 1)
}
