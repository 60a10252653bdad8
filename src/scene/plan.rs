use glam::Vec3;

use super::instance::TileInstance;

/// Stable handle to one pooled tile instance.
///
/// Instance ids are assigned monotonically by the owning pool and survive
/// removals, so a handle emitted in a plan stays valid for the renderer
/// even as the pool compacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceRef {
    /// Catalog key of the owning pool.
    pub atomic_number: u32,
    /// Pool-assigned instance id.
    pub instance: u32,
}

/// Display state a morph or appear interpolates toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTarget {
    /// Target center position.
    pub position: Vec3,
    /// Target scale multiplier.
    pub scale: f32,
    /// Target fill opacity.
    pub opacity: f32,
}

/// One step of a transition plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Interpolate an existing instance toward a new display state.
    Morph {
        /// The instance to move.
        instance: InstanceRef,
        /// Where it ends up.
        target: DisplayTarget,
    },
    /// A freshly spawned instance fading in toward a display state.
    Appear {
        /// Handle of the new instance.
        instance: InstanceRef,
        /// The instance's spawn state (zero opacity).
        spawn: TileInstance,
        /// Where it ends up.
        target: DisplayTarget,
    },
    /// Fade an instance out; its pool slot is gone once the plan applies.
    Disappear {
        /// The instance to remove.
        instance: InstanceRef,
    },
}

/// The unordered operation set transforming one display state into another.
///
/// Operations carry no ordering dependency among themselves; the external
/// renderer executes them together as one logical transaction. This crate
/// does not schedule, retry, or cancel that execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionPlan {
    operations: Vec<Operation>,
}

impl TransitionPlan {
    /// An empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations, in no meaningful order.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the plan contains no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of [`Operation::Morph`] steps.
    #[must_use]
    pub fn morph_count(&self) -> usize {
        self.count(|op| matches!(op, Operation::Morph { .. }))
    }

    /// Number of [`Operation::Appear`] steps.
    #[must_use]
    pub fn appear_count(&self) -> usize {
        self.count(|op| matches!(op, Operation::Appear { .. }))
    }

    /// Number of [`Operation::Disappear`] steps.
    #[must_use]
    pub fn disappear_count(&self) -> usize {
        self.count(|op| matches!(op, Operation::Disappear { .. }))
    }

    /// Absorb another plan's operations.
    pub fn merge(&mut self, other: Self) {
        self.operations.extend(other.operations);
    }

    pub(super) fn push(&mut self, op: Operation) {
        self.operations.push(op);
    }

    fn count(&self, matcher: impl Fn(&Operation) -> bool) -> usize {
        self.operations.iter().filter(|op| matcher(op)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ref(instance: u32) -> InstanceRef {
        InstanceRef {
            atomic_number: 8,
            instance,
        }
    }

    fn sample_target() -> DisplayTarget {
        DisplayTarget {
            position: Vec3::ZERO,
            scale: 1.0,
            opacity: 0.8,
        }
    }

    #[test]
    fn test_counts_by_kind() {
        let mut plan = TransitionPlan::new();
        plan.push(Operation::Morph {
            instance: sample_ref(0),
            target: sample_target(),
        });
        plan.push(Operation::Disappear {
            instance: sample_ref(1),
        });
        plan.push(Operation::Disappear {
            instance: sample_ref(2),
        });
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.morph_count(), 1);
        assert_eq!(plan.appear_count(), 0);
        assert_eq!(plan.disappear_count(), 2);
    }

    #[test]
    fn test_merge_absorbs_operations() {
        let mut plan = TransitionPlan::new();
        plan.push(Operation::Disappear {
            instance: sample_ref(0),
        });
        let mut other = TransitionPlan::new();
        other.push(Operation::Morph {
            instance: sample_ref(1),
            target: sample_target(),
        });
        plan.merge(other);
        assert_eq!(plan.len(), 2);
        assert!(!plan.is_empty());
    }
}
