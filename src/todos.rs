//! Todo Collection Operations
//!
//! Pure copy-on-write transforms over the todo list.
//! Every operation returns `None` when it would leave the collection unchanged.

use std::collections::HashSet;

use crate::models::Todo;

/// The two views rendered by the list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub incomplete: Vec<Todo>,
    pub complete: Vec<Todo>,
}

/// Split todos into incomplete and complete, preserving order
pub fn partition(todos: &[Todo]) -> Partition {
    let (complete, incomplete): (Vec<Todo>, Vec<Todo>) =
        todos.iter().cloned().partition(|todo| todo.completed);
    Partition { incomplete, complete }
}

/// Keep the first todo for each id; returns the kept todos and the dropped ids
pub fn dedup_by_id(todos: Vec<Todo>) -> (Vec<Todo>, Vec<u64>) {
    let mut seen = HashSet::new();
    let mut dropped = Vec::new();
    let kept = todos
        .into_iter()
        .filter(|todo| {
            let first = seen.insert(todo.id);
            if !first {
                dropped.push(todo.id);
            }
            first
        })
        .collect();
    (kept, dropped)
}

/// Pick an id for a new todo: the timestamp, unless it is already taken
pub fn next_id(todos: &[Todo], now_ms: u64) -> u64 {
    if todos.iter().all(|todo| todo.id != now_ms) {
        return now_ms;
    }
    // Collision: step past the largest id in use
    todos.iter().map(|todo| todo.id).max().unwrap_or(now_ms).saturating_add(1)
}

/// Append a new todo named by the trimmed input. Blank input is rejected.
pub fn with_added(todos: &[Todo], raw_name: &str, now_ms: u64) -> Option<Vec<Todo>> {
    let name = raw_name.trim();
    if name.is_empty() {
        return None;
    }
    let mut next = todos.to_vec();
    next.push(Todo::new(next_id(todos, now_ms), name));
    Some(next)
}

pub fn without(todos: &[Todo], id: u64) -> Option<Vec<Todo>> {
    if !todos.iter().any(|todo| todo.id == id) {
        return None;
    }
    Some(todos.iter().filter(|todo| todo.id != id).cloned().collect())
}

pub fn with_toggled(todos: &[Todo], id: u64) -> Option<Vec<Todo>> {
    map_matching(todos, id, |todo| Todo { completed: !todo.completed, ..todo.clone() })
}

pub fn with_renamed(todos: &[Todo], id: u64, name: &str) -> Option<Vec<Todo>> {
    map_matching(todos, id, |todo| Todo { name: name.to_string(), ..todo.clone() })
}

fn map_matching(todos: &[Todo], id: u64, f: impl Fn(&Todo) -> Todo) -> Option<Vec<Todo>> {
    if !todos.iter().any(|todo| todo.id == id) {
        return None;
    }
    Some(
        todos
            .iter()
            .map(|todo| if todo.id == id { f(todo) } else { todo.clone() })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u64, name: &str, completed: bool) -> Todo {
        Todo { id, name: name.to_string(), completed }
    }

    fn sample() -> Vec<Todo> {
        vec![
            make_todo(1, "Learn Lit", false),
            make_todo(2, "Learn React", true),
        ]
    }

    #[test]
    fn test_add_appends_trimmed_incomplete_todo() {
        let todos = sample();
        let next = with_added(&todos, "  Buy milk  ", 1_700_000_000_000).expect("added");

        assert_eq!(next.len(), todos.len() + 1);
        assert_eq!(next[..2], todos[..]);
        assert_eq!(next[2], make_todo(1_700_000_000_000, "Buy milk", false));

        // Blank input right after is a no-op
        assert_eq!(with_added(&next, "   ", 1_700_000_000_001), None);
    }

    #[test]
    fn test_add_rejects_blank_input() {
        let todos = sample();
        for raw in ["", " ", "\t\n", "     "] {
            assert_eq!(with_added(&todos, raw, 42), None, "input {:?}", raw);
        }
    }

    #[test]
    fn test_add_keeps_ids_unique_on_collision() {
        let todos = vec![make_todo(5, "a", false), make_todo(9, "b", false)];
        assert_eq!(next_id(&todos, 100), 100);
        assert_eq!(next_id(&todos, 5), 10);

        let next = with_added(&todos, "c", 9).expect("added");
        assert_eq!(next[2].id, 10);
    }

    #[test]
    fn test_dedup_keeps_first_of_each_id() {
        let todos = vec![
            make_todo(1, "a", false),
            make_todo(2, "b", true),
            make_todo(1, "a again", true),
        ];
        let (kept, dropped) = dedup_by_id(todos);
        assert_eq!(kept, vec![make_todo(1, "a", false), make_todo(2, "b", true)]);
        assert_eq!(dropped, vec![1]);

        // Removing a present id now shrinks the list by exactly one
        assert_eq!(without(&kept, 1).map(|t| t.len()), Some(1));

        let (kept, dropped) = dedup_by_id(sample());
        assert_eq!(kept, sample());
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_remove() {
        let todos = sample();
        let next = without(&todos, 1).expect("removed");
        assert_eq!(next.len(), 1);
        assert!(next.iter().all(|t| t.id != 1));

        assert_eq!(without(&todos, 99), None);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let todos = sample();
        let next = with_toggled(&todos, 1).expect("toggled");
        assert_eq!(
            next,
            vec![make_todo(1, "Learn Lit", true), make_todo(2, "Learn React", true)]
        );

        let p = partition(&next);
        assert!(p.incomplete.is_empty());
        assert_eq!(p.complete, next);

        // Toggling twice restores the original
        let back = with_toggled(&next, 1).expect("toggled");
        assert_eq!(back, todos);

        assert_eq!(with_toggled(&todos, 3), None);
    }

    #[test]
    fn test_rename() {
        let todos = sample();
        let next = with_renamed(&todos, 2, "Learn Leptos").expect("renamed");
        assert_eq!(next[1].name, "Learn Leptos");
        assert!(next[1].completed);
        assert_eq!(next[0], todos[0]);
        // Source collection untouched
        assert_eq!(todos[1].name, "Learn React");

        assert_eq!(with_renamed(&todos, 7, "x"), None);
    }

    #[test]
    fn test_partition_law() {
        let todos = vec![
            make_todo(1, "a", false),
            make_todo(2, "b", true),
            make_todo(3, "c", false),
            make_todo(4, "d", true),
        ];
        let p = partition(&todos);

        assert_eq!(p.incomplete.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(p.complete.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(p.incomplete.len() + p.complete.len(), todos.len());
        for todo in &todos {
            let in_incomplete = p.incomplete.contains(todo);
            let in_complete = p.complete.contains(todo);
            assert!(in_incomplete != in_complete, "todo {} in exactly one view", todo.id);
        }
    }
}
