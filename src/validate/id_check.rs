use std::collections::BTreeMap;

use serde::Serialize;

use crate::element::element_model::{Element, Screen};

// ============================================================================
// Identifier uniqueness pass — diagnostic only, never enforced at build time
// ============================================================================

/// Result of scanning one tree for duplicate element ids.
#[derive(Debug, Clone, Serialize)]
pub struct IdReport {
    /// Total number of nodes scanned (screen included)
    pub total_nodes: usize,

    /// Ids that occur more than once, sorted by id
    pub duplicates: Vec<DuplicateId>,
}

/// One identifier that appears on more than one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateId {
    pub id: String,
    pub count: usize,
}

impl IdReport {
    /// Whether every id in the tree is unique.
    pub fn all_unique(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Count id occurrences across a finalized tree.
///
/// Construction never rejects duplicate ids; this pass exists for callers
/// that want to treat them as a defect. The screen's own id participates in
/// the scan. BTreeMap keeps the duplicate list deterministic.
pub fn check_unique_ids(screen: &Screen) -> IdReport {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0;

    *counts.entry(screen.id().to_string()).or_insert(0) += 1;
    total += 1;

    for child in screen.children() {
        count_element(child, &mut counts, &mut total);
    }

    let duplicates = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, count)| DuplicateId { id, count })
        .collect();

    IdReport {
        total_nodes: total,
        duplicates,
    }
}

fn count_element(element: &Element, counts: &mut BTreeMap<String, usize>, total: &mut usize) {
    *counts.entry(element.id().to_string()).or_insert(0) += 1;
    *total += 1;

    if let Element::Container(container) = element {
        for child in container.children() {
            count_element(child, counts, total);
        }
    }
}
