//! Grouping of root tasks by section and section display order.

use crate::tree::{TaskNode, build_forest, cmp_order};
use crate::types::{ProjectSnapshot, Section};

/// Title of a section the sensor does not name.
pub const DEFAULT_SECTION_TITLE: &str = "Section";

/// Section bucket a root task falls into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKey {
    /// Tasks without a section.
    Unsectioned,
    Id(String),
}

impl SectionKey {
    pub fn from_task_section(section_id: Option<&str>) -> Self {
        match section_id {
            Some(id) if !id.is_empty() => SectionKey::Id(id.to_string()),
            _ => SectionKey::Unsectioned,
        }
    }
}

/// Root tasks of one section, in sibling order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGroup<'a> {
    pub key: SectionKey,
    pub roots: Vec<TaskNode<'a>>,
}

/// Group roots by section, keeping first-encountered group order and root order.
pub fn group_roots(roots: Vec<TaskNode<'_>>) -> Vec<SectionGroup<'_>> {
    let mut groups: Vec<SectionGroup<'_>> = Vec::new();
    for node in roots {
        let key = SectionKey::from_task_section(node.task.section_id.as_deref());
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.roots.push(node),
            None => groups.push(SectionGroup {
                key,
                roots: vec![node],
            }),
        }
    }
    groups
}

/// Order in which section groups are displayed.
///
/// Known sections come first by ascending `order` (ties keep mapping order),
/// followed by the groups that only task data refers to, in the order they
/// were first seen.
pub fn display_order(sections: &[Section], groups: &[SectionGroup<'_>]) -> Vec<SectionKey> {
    let mut known: Vec<&Section> = sections.iter().collect();
    known.sort_by(|a, b| cmp_order(a.order, b.order));

    let mut keys: Vec<SectionKey> = Vec::with_capacity(known.len() + groups.len());
    for section in known {
        let key = SectionKey::from_task_section(section.id.as_deref());
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    for group in groups {
        if !keys.contains(&group.key) {
            keys.push(group.key.clone());
        }
    }
    keys
}

/// Title row of a section block; `None` omits the row.
pub fn section_title<'s>(snapshot: &'s ProjectSnapshot, key: &SectionKey) -> Option<&'s str> {
    match key {
        SectionKey::Unsectioned => None,
        SectionKey::Id(id) => Some(
            snapshot
                .section(id)
                .and_then(|s| s.name.as_deref())
                .unwrap_or(DEFAULT_SECTION_TITLE),
        ),
    }
}

/// Sections of a snapshot paired with their root trees, in display order.
///
/// Empty groups are not returned.
pub fn ordered_groups(snapshot: &ProjectSnapshot) -> Vec<SectionGroup<'_>> {
    let mut groups = group_roots(build_forest(&snapshot.tasks));
    let order = display_order(&snapshot.sections, &groups);

    let mut ordered = Vec::with_capacity(groups.len());
    for key in order {
        if let Some(pos) = groups.iter().position(|g| g.key == key) {
            ordered.push(groups.swap_remove(pos));
        }
    }
    ordered
}
