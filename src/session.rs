use crate::models::{DaySession, Task};

/// Appends a task under the next per-day id. Text that trims to nothing is
/// rejected and consumes no id.
pub fn add_task(session: &mut DaySession, text: &str) -> Option<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let id = session.next_task_id;
    session.next_task_id += 1;
    session.tasks.push(Task {
        id,
        text: trimmed.to_string(),
        completed: false,
    });
    Some(id)
}

/// Marks a task done. Unknown ids and already-completed tasks change
/// nothing.
pub fn complete_task(session: &mut DaySession, task_id: u64) -> bool {
    match session.tasks.iter_mut().find(|task| task.id == task_id) {
        Some(task) if !task.completed => {
            task.completed = true;
            true
        }
        _ => false,
    }
}

pub fn completed_count(session: &DaySession) -> usize {
    session.tasks.iter().filter(|task| task.completed).count()
}

pub fn active_count(session: &DaySession) -> usize {
    session.tasks.len() - completed_count(session)
}

pub fn completion_ratio(session: &DaySession) -> f64 {
    if session.tasks.is_empty() {
        return 0.0;
    }
    completed_count(session) as f64 / session.tasks.len() as f64
}

pub fn daily_motivation(session: &DaySession) -> &'static str {
    if session.tasks.is_empty() {
        return "Add your first task to get started!";
    }

    let rate = completion_ratio(session);
    if rate == 1.0 {
        "Perfect day! You completed all tasks. Amazing work!"
    } else if rate >= 0.7 {
        "Great progress! You're almost done with today's tasks."
    } else if rate >= 0.4 {
        "Good job so far! Keep pushing to complete more tasks."
    } else {
        "Get started on your tasks. Every small step counts!"
    }
}
