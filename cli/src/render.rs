use std::fmt::Write;

use todo_core::ViewState;

pub const EMPTY_MESSAGE: &str = "No to-dos are available, add one to get started!";

/// Plain-text rendering of the view, one record per line.
pub fn render(view: &ViewState) -> String {
    if view.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }
    let width = view
        .todos()
        .iter()
        .map(|todo| todo.id.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for todo in view.todos() {
        let mark = if todo.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {:>width$}  {}", todo.id, todo.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use todo_core::Todo;

    use super::*;

    fn todo(id: u64, text: &str, completed: bool) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn empty_view_shows_placeholder() {
        assert_eq!(render(&ViewState::new()), format!("{EMPTY_MESSAGE}\n"));
    }

    #[test]
    fn records_render_in_order_with_aligned_ids() {
        let mut view = ViewState::new();
        view.replace_all(vec![todo(9, "Buy milk", true), todo(10, "Walk dog", false)]);
        assert_eq!(render(&view), "[x]  9  Buy milk\n[ ] 10  Walk dog\n");
    }
}
