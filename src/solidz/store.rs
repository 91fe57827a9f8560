//! # Container
//!
//! The ordered collection of [`Solid`]s. It is the only holder of state in
//! the crate.
//!
//! Insertion order is append-only and is also the traversal order for both
//! removal and printing. Removal makes a single pass and keeps the survivors
//! in their original relative order, whichever positions matched (first,
//! last, adjacent, or all of them).
//!
//! The container does no I/O and emits no event text; the command layer turns
//! the solids it returns into messages.

use crate::attributes::Condition;
use crate::model::{ShapeKind, Solid};
use tracing::{debug, trace};

/// Ordered, exclusively-owning collection of solids.
#[derive(Debug, Default, Clone)]
pub struct Container {
    solids: Vec<Solid>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a solid at the end.
    pub fn add(&mut self, solid: Solid) {
        trace!(kind = %solid.kind(), owner = %solid.owner, "append");
        self.solids.push(solid);
    }

    /// Remove every solid matching the condition.
    ///
    /// Returns the removed solids in traversal order.
    pub fn remove_by_condition(&mut self, condition: &Condition) -> Vec<Solid> {
        let removed = self.remove_where(|solid| condition.matches(solid));
        debug!(
            %condition,
            removed = removed.len(),
            remaining = self.solids.len(),
            "remove by condition"
        );
        removed
    }

    /// Remove every solid of the given variant.
    pub fn remove_by_type(&mut self, kind: ShapeKind) -> Vec<Solid> {
        let removed = self.remove_where(|solid| solid.kind() == kind);
        debug!(
            %kind,
            removed = removed.len(),
            remaining = self.solids.len(),
            "remove by type"
        );
        removed
    }

    fn remove_where<F>(&mut self, predicate: F) -> Vec<Solid>
    where
        F: Fn(&Solid) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.solids)
            .into_iter()
            .partition(|solid| predicate(solid));
        self.solids = kept;
        removed
    }

    /// Traverse start to end.
    pub fn iter(&self) -> std::slice::Iter<'_, Solid> {
        self.solids.iter()
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Solid;
    type IntoIter = std::slice::Iter<'a, Solid>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Spheres with radius 1..=n, all owned by "A" with density 1.
    pub fn spheres(n: usize) -> Container {
        let mut container = Container::new();
        for i in 1..=n {
            container.add(Solid::sphere(i as f64, 1.0, "A"));
        }
        container
    }

    /// One solid of each variant, owners "S", "B", "C".
    pub fn mixed() -> Container {
        let mut container = Container::new();
        container.add(Solid::sphere(5.0, 2.5, "S"));
        container.add(Solid::cuboid(1.0, 2.0, 3.0, 1.0, "B"));
        container.add(Solid::cylinder((0.0, 0.0, 0.0), 2.0, 10.0, 3.0, "C"));
        container
    }
}
