// src/search.rs
//
// Client-side teacher filtering and pagination. The server has a /search
// endpoint too; this mirrors its matching rule for the already-loaded list.

use crate::model::Teacher;

/// Case-insensitive match against the teacher's name or any alias.
pub fn matches(teacher: &Teacher, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    teacher.name.to_lowercase().contains(&q)
        || teacher.aliases.iter().any(|a| a.to_lowercase().contains(&q))
}

/// Indices of matching teachers, preserving order.
pub fn filter_indices(teachers: &[Teacher], query: &str) -> Vec<usize> {
    teachers
        .iter()
        .enumerate()
        .filter(|(_, t)| matches(t, query))
        .map(|(i, _)| i)
        .collect()
}

/// Ceil division; at least one page even when empty.
pub fn page_count(items: usize, per_page: usize) -> usize {
    items.div_ceil(per_page).max(1)
}

/// Slice of `ix` for the 1-based page `page`.
pub fn page_slice(ix: &[usize], page: usize, per_page: usize) -> &[usize] {
    let start = (page.saturating_sub(1)) * per_page;
    if start >= ix.len() {
        return &[];
    }
    let end = (start + per_page).min(ix.len());
    &ix[start..end]
}
