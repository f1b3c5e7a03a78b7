use indexmap::IndexSet;

use crate::core::types::BubblePoint;

/// Minimal create/update/remove operations that bring a retained keyed
/// scene in sync with the next point collection. Key equality is `label`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReconcilePlan {
    pub create: Vec<BubblePoint>,
    pub update: Vec<BubblePoint>,
    pub remove: Vec<String>,
}

impl ReconcilePlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update.is_empty() && self.remove.is_empty()
    }
}

/// Diffs the previously retained keys against the next collection.
///
/// Points present on both sides become updates (the scene animates them),
/// new keys become creates, and keys absent from `next` are removals.
/// Duplicate labels in `next` keep the last occurrence, matching keyed
/// join semantics.
#[must_use]
pub fn reconcile<'a>(
    prev_keys: impl IntoIterator<Item = &'a str>,
    next: &[BubblePoint],
) -> ReconcilePlan {
    let prev: IndexSet<&str> = prev_keys.into_iter().collect();
    let mut plan = ReconcilePlan::default();

    let mut deduped: indexmap::IndexMap<&str, &BubblePoint> =
        indexmap::IndexMap::with_capacity(next.len());
    for point in next {
        deduped.insert(point.label.as_str(), point);
    }

    for (key, point) in &deduped {
        if prev.contains(key) {
            plan.update.push((*point).clone());
        } else {
            plan.create.push((*point).clone());
        }
    }

    for key in prev {
        if !deduped.contains_key(key) {
            plan.remove.push(key.to_owned());
        }
    }

    plan
}
