//! HTML assembly for the project card.
//!
//! Markup is rebuilt from scratch on every call; nothing is cached between
//! renders, so identical input always yields identical output.

use super::templates::{NO_TASKS, card_document};
use crate::format::escape_html;
use crate::sections::{SectionGroup, ordered_groups, section_title};
use crate::tree::TaskNode;
use crate::types::{Due, ProjectSnapshot};

/// Placeholder for an entity the host does not know.
pub fn render_not_found(entity: &str) -> String {
    format!(
        r#"<ha-card><div class="empty">Entity {} not found</div></ha-card>"#,
        escape_html(entity)
    )
}

/// Render the whole card for a project snapshot.
pub fn render_project(snapshot: &ProjectSnapshot, show_completed: bool) -> String {
    let mut content = String::new();

    for group in ordered_groups(snapshot) {
        if let Some(html) = render_section(snapshot, &group, show_completed) {
            content.push_str(&html);
        }
    }

    if snapshot.tasks.is_empty() {
        content.push_str(NO_TASKS);
    }

    card_document(&content)
}

/// Render one section block, or `None` when none of its tasks are visible.
fn render_section(
    snapshot: &ProjectSnapshot,
    group: &SectionGroup<'_>,
    show_completed: bool,
) -> Option<String> {
    let items: String = group
        .roots
        .iter()
        .map(|node| render_task(node, 0, show_completed))
        .collect();
    if items.is_empty() {
        return None;
    }

    let mut html = String::from(r#"<div class="section">"#);
    if let Some(title) = section_title(snapshot, &group.key) {
        html.push_str(&format!(
            r#"<div class="section-title">{}<hr class="separator"></div>"#,
            escape_html(title)
        ));
    }
    html.push_str(&items);
    html.push_str("</div>");
    Some(html)
}

/// Render a task and, nested beneath it, its visible subtasks.
///
/// A hidden completed task takes its whole subtree with it.
fn render_task(node: &TaskNode<'_>, depth: usize, show_completed: bool) -> String {
    let task = node.task;
    if task.completed && !show_completed {
        return String::new();
    }

    let mut html = format!(
        r#"<div class="task depth-{}{}">"#,
        depth,
        if task.completed { " completed" } else { "" }
    );
    html.push_str(&format!(
        r#"<div class="bullet {}"></div>"#,
        task.priority.css_class()
    ));
    html.push_str(r#"<div class="content"><div class="line">"#);
    html.push_str(&format!(
        r#"<span class="text">{}</span>"#,
        escape_html(&task.content)
    ));
    html.push_str(&render_labels(&task.labels));
    if let Some(ref due) = task.due {
        html.push_str(&render_due(due));
    }
    html.push_str("</div>");
    if let Some(ref desc) = task.description {
        html.push_str(&format!(r#"<div class="desc">{}</div>"#, escape_html(desc)));
    }
    html.push_str("</div></div>");

    let children: String = node
        .children
        .iter()
        .map(|child| render_task(child, depth + 1, show_completed))
        .collect();
    if !children.is_empty() {
        html.push_str(r#"<div class="children">"#);
        html.push_str(&children);
        html.push_str("</div>");
    }

    html
}

fn render_labels(labels: &[String]) -> String {
    labels
        .iter()
        .map(|label| format!(r#"<span class="label">#{}</span>"#, escape_html(label)))
        .collect()
}

fn render_due(due: &Due) -> String {
    format!(r#"<span class="due">{}</span>"#, escape_html(due.label()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Priority, Task};

    fn render_one(task: Task, show_completed: bool) -> String {
        let node = TaskNode {
            task: &task,
            children: Vec::new(),
        };
        render_task(&node, 0, show_completed)
    }

    #[test]
    fn test_task_line_parts() {
        let task = Task {
            priority: Priority::P4,
            labels: vec!["home".into(), "<x>".into()],
            due: Some(Due {
                string: Some("tomorrow".into()),
                ..Due::default()
            }),
            description: Some("2 litres".into()),
            ..Task::new("1", "Buy milk")
        };
        let html = render_one(task, false);
        assert!(html.starts_with(r#"<div class="task depth-0"><div class="bullet p4"></div>"#));
        assert!(html.contains(r#"<span class="text">Buy milk</span>"#));
        assert!(html.contains(r#"<span class="label">#home</span>"#));
        assert!(html.contains(r#"<span class="label">#&lt;x&gt;</span>"#));
        assert!(html.contains(r#"<span class="due">tomorrow</span>"#));
        assert!(html.contains(r#"<div class="desc">2 litres</div>"#));
    }

    #[test]
    fn test_optional_parts_omitted() {
        let html = render_one(Task::new("1", "Plain"), false);
        assert!(!html.contains("class=\"label\""));
        assert!(!html.contains("class=\"due\""));
        assert!(!html.contains("class=\"desc\""));
        assert!(!html.contains("class=\"children\""));
        assert!(html.contains("bullet p1"));
    }

    #[test]
    fn test_completed_task_visibility() {
        let task = Task {
            completed: true,
            ..Task::new("1", "Done")
        };
        assert_eq!(render_one(task.clone(), false), "");
        assert!(render_one(task, true).starts_with(r#"<div class="task depth-0 completed">"#));
    }

    #[test]
    fn test_children_nested_with_depth() {
        let parent = Task::new("1", "Parent");
        let child = Task::new("2", "Child");
        let node = TaskNode {
            task: &parent,
            children: vec![TaskNode {
                task: &child,
                children: Vec::new(),
            }],
        };
        let html = render_task(&node, 0, false);
        assert!(html.contains(r#"<div class="children"><div class="task depth-1">"#));
    }

    #[test]
    fn test_not_found_escapes_entity() {
        assert_eq!(
            render_not_found("sensor.<x>"),
            r#"<ha-card><div class="empty">Entity sensor.&lt;x&gt; not found</div></ha-card>"#
        );
    }
}
