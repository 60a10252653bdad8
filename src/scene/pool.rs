use glam::Vec3;

use super::instance::TileInstance;
use super::plan::{DisplayTarget, InstanceRef, Operation, TransitionPlan};
use crate::error::KemioError;

/// One pool entry: a stable instance id paired with the tile it tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Slot {
    id: u32,
    tile: TileInstance,
}

/// All positioned tiles of a single catalog element.
///
/// Slots keep insertion order; instance ids are assigned monotonically and
/// never reused, so removals compact the slot list without invalidating
/// handles already emitted in plans.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementPool {
    atomic_number: u32,
    slots: Vec<Slot>,
    next_instance_id: u32,
}

impl ElementPool {
    /// An empty pool for one element.
    #[must_use]
    pub fn new(atomic_number: u32) -> Self {
        Self {
            atomic_number,
            slots: Vec::new(),
            next_instance_id: 0,
        }
    }

    /// A pool with one tile per position, all sharing scale and opacity.
    #[must_use]
    pub fn from_positions(
        atomic_number: u32,
        positions: &[Vec3],
        scale: f32,
        opacity: f32,
    ) -> Self {
        let mut pool = Self::new(atomic_number);
        for &position in positions {
            let _ = pool.push_tile(TileInstance::new(
                atomic_number,
                position,
                scale,
                opacity,
            ));
        }
        pool
    }

    /// Catalog key shared by every tile in this pool.
    #[must_use]
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Add a tile.
    ///
    /// # Errors
    ///
    /// Returns [`KemioError::MismatchedKind`] when the tile's catalog key
    /// differs from the pool's.
    pub fn add(&mut self, tile: TileInstance) -> Result<InstanceRef, KemioError> {
        if tile.atomic_number != self.atomic_number {
            return Err(KemioError::MismatchedKind {
                expected: self.atomic_number,
                found: tile.atomic_number,
            });
        }
        let id = self.push_tile(tile);
        Ok(self.instance_ref(id))
    }

    /// Tile state for an instance id, if the slot still exists.
    #[must_use]
    pub fn get(&self, instance: u32) -> Option<&TileInstance> {
        self.slots
            .iter()
            .find(|slot| slot.id == instance)
            .map(|slot| &slot.tile)
    }

    /// Tiles with their handles, in slot order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (InstanceRef, &TileInstance)> + '_ {
        self.slots
            .iter()
            .map(|slot| (self.instance_ref(slot.id), &slot.tile))
    }

    /// Plan the transition carrying this pool's tiles onto `target`'s.
    ///
    /// Nearest-neighbor matching: source tiles are walked in slot order and
    /// each claims the unclaimed target tile at minimum Euclidean distance
    /// (the first-found minimum wins ties). Surplus source tiles fade out;
    /// surplus target tiles fade in from a zero-opacity spawn beside the
    /// nearest pre-existing source tile. The plan holds exactly
    /// `min(N, M)` morphs, `max(0, N - M)` disappears, and `max(0, M - N)`
    /// appears.
    ///
    /// The pool is compacted to the applied end state before returning, so
    /// a later transition measures distances from where this plan leaves
    /// the tiles.
    ///
    /// # Errors
    ///
    /// Returns [`KemioError::MismatchedKind`] when the pools are keyed to
    /// different elements; no partial plan is produced.
    pub fn transition(
        &mut self,
        target: &Self,
    ) -> Result<TransitionPlan, KemioError> {
        if self.atomic_number != target.atomic_number {
            return Err(KemioError::MismatchedKind {
                expected: self.atomic_number,
                found: target.atomic_number,
            });
        }
        let target_count = target.slots.len();
        let mut plan = TransitionPlan::new();
        let mut claimed = vec![false; target_count];
        let mut end_states: Vec<Option<DisplayTarget>> =
            vec![None; self.slots.len()];

        // Source tiles in slot order; each claims its nearest unclaimed
        // target. Sources past the target count fade out instead.
        for (idx, slot) in self.slots.iter().enumerate() {
            if idx < target_count {
                let chosen = nearest_unclaimed(
                    &target.slots,
                    &claimed,
                    slot.tile.position,
                );
                claimed[chosen] = true;
                let end = target.slots[chosen].tile.display_target();
                plan.push(Operation::Morph {
                    instance: self.instance_ref(slot.id),
                    target: end,
                });
                end_states[idx] = Some(end);
            } else {
                plan.push(Operation::Disappear {
                    instance: self.instance_ref(slot.id),
                });
            }
        }

        // Unclaimed targets spawn invisible beside the nearest pre-existing
        // source tile, or in place when the pool started empty.
        let mut appeared: Vec<(Slot, DisplayTarget)> = Vec::new();
        for (idx, target_slot) in target.slots.iter().enumerate() {
            if claimed[idx] {
                continue;
            }
            let end = target_slot.tile.display_target();
            let spawn = match self.nearest_tile(end.position) {
                Some(neighbor) => neighbor.respawned_at(neighbor.position, 0.0),
                None => target_slot.tile.respawned_at(end.position, 0.0),
            };
            let id = self.allocate_id();
            plan.push(Operation::Appear {
                instance: self.instance_ref(id),
                spawn,
                target: end,
            });
            appeared.push((Slot { id, tile: spawn }, end));
        }

        self.compact(&end_states, appeared);
        log::debug!(
            "pool {} transition: {} morphs, {} appears, {} disappears",
            self.atomic_number,
            plan.morph_count(),
            plan.appear_count(),
            plan.disappear_count()
        );
        Ok(plan)
    }

    /// Drop unmatched slots and land every survivor on its end state.
    fn compact(
        &mut self,
        end_states: &[Option<DisplayTarget>],
        appeared: Vec<(Slot, DisplayTarget)>,
    ) {
        let mut survivors =
            Vec::with_capacity(end_states.len() + appeared.len());
        for (slot, end) in self.slots.iter().zip(end_states) {
            if let Some(end) = end {
                let mut slot = *slot;
                slot.tile.apply(*end);
                survivors.push(slot);
            }
        }
        for (mut slot, end) in appeared {
            slot.tile.apply(end);
            survivors.push(slot);
        }
        self.slots = survivors;
    }

    /// The tile nearest to `to`, scanning slots in order (first-found
    /// minimum). `None` for an empty pool.
    fn nearest_tile(&self, to: Vec3) -> Option<&TileInstance> {
        let mut best: Option<&TileInstance> = None;
        let mut best_distance = f32::INFINITY;
        for slot in &self.slots {
            let distance = to.distance(slot.tile.position);
            if best.is_none() || distance < best_distance {
                best = Some(&slot.tile);
                best_distance = distance;
            }
        }
        best
    }

    fn push_tile(&mut self, tile: TileInstance) -> u32 {
        let id = self.allocate_id();
        self.slots.push(Slot { id, tile });
        id
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_instance_id;
        self.next_instance_id += 1;
        id
    }

    fn instance_ref(&self, id: u32) -> InstanceRef {
        InstanceRef {
            atomic_number: self.atomic_number,
            instance: id,
        }
    }
}

/// Index of the unclaimed slot nearest to `from`, scanning in slot order
/// so the first-found minimum wins ties. Callers guarantee at least one
/// unclaimed slot.
fn nearest_unclaimed(slots: &[Slot], claimed: &[bool], from: Vec3) -> usize {
    let mut best_idx = 0;
    let mut best_distance = f32::INFINITY;
    for (idx, slot) in slots.iter().enumerate() {
        if claimed[idx] {
            continue;
        }
        let distance = from.distance(slot.tile.position);
        if distance < best_distance {
            best_distance = distance;
            best_idx = idx;
        }
    }
    best_idx
}
