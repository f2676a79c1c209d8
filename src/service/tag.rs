use serenity::all::ForumTagId;

use crate::model::tag::{StatusTag, TagTable};

/// Computes the tag list for a thread moving to `target`.
///
/// Every status tag is removed, the remaining tags keep their order with repeats dropped, and
/// the target's tag is appended. Applying the result again with the same target yields the
/// same list.
pub fn compute_transition(
    current: &[ForumTagId],
    target: StatusTag,
    table: &TagTable,
) -> Vec<ForumTagId> {
    let mut tags: Vec<ForumTagId> = Vec::with_capacity(current.len() + 1);

    for tag in current {
        if !table.is_status(*tag) && !tags.contains(tag) {
            tags.push(*tag);
        }
    }

    tags.push(table.id(target));
    tags
}
