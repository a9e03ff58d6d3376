//! Parent/child hierarchy built from the flat task list.

use crate::types::Task;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A task with its subtasks, borrowing the input records.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskNode<'a> {
    pub task: &'a Task,
    pub children: Vec<TaskNode<'a>>,
}

impl TaskNode<'_> {
    /// Number of tasks in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(TaskNode::subtree_len).sum::<usize>()
    }
}

/// Compare two `order` values numerically; `0` and `-0` are equal.
pub fn cmp_order(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Sort tasks by ascending `order`; equal orders keep their input sequence.
pub fn sort_by_order(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by(|a, b| cmp_order(a.order, b.order));
    sorted
}

/// Build the task forest.
///
/// Tasks are sorted by order first, so every sibling group comes out in
/// ascending order. A task whose `parent_id` names no known task is a root.
/// When ids repeat, the last task with that id is the one children attach to.
/// Tasks caught in a parent cycle never hang below a root and are left out.
pub fn build_forest(tasks: &[Task]) -> Vec<TaskNode<'_>> {
    let sorted = sort_by_order(tasks);

    let mut by_id: HashMap<&str, usize> = HashMap::with_capacity(sorted.len());
    for (index, task) in sorted.iter().enumerate() {
        if let Some(id) = task.id.as_deref() {
            by_id.insert(id, index);
        }
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); sorted.len()];
    let mut roots = Vec::new();
    for (index, task) in sorted.iter().enumerate() {
        match task.parent_id.as_deref().and_then(|p| by_id.get(p)) {
            Some(&parent) => children[parent].push(index),
            None => roots.push(index),
        }
    }

    roots
        .into_iter()
        .map(|index| materialize(index, &sorted, &children))
        .collect()
}

fn materialize<'a>(index: usize, sorted: &[&'a Task], children: &[Vec<usize>]) -> TaskNode<'a> {
    TaskNode {
        task: sorted[index],
        children: children[index]
            .iter()
            .map(|&child| materialize(child, sorted, children))
            .collect(),
    }
}
