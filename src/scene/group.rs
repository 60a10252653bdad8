use std::collections::BTreeMap;

use super::instance::LiteralGlyph;
use super::plan::{Operation, TransitionPlan};
use super::pool::ElementPool;
use crate::error::KemioError;
use crate::layout::{PhraseLayout, RenderTransform};
use crate::options::{DisplayOptions, LayoutOptions};

/// A keyed collection of element pools, one per catalog key in use.
///
/// Keys are unique by construction. Pools are kept in a sorted map so
/// group-to-group transitions walk the key union in ascending atomic
/// number, which keeps plans deterministic and reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementGroup {
    pools: BTreeMap<u32, ElementPool>,
}

impl ElementGroup {
    /// An empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a group from pools.
    ///
    /// # Errors
    ///
    /// Returns [`KemioError::DuplicateKey`] when two pools share an atomic
    /// number.
    pub fn from_pools(pools: Vec<ElementPool>) -> Result<Self, KemioError> {
        let mut group = Self::new();
        for pool in pools {
            group.insert(pool)?;
        }
        Ok(group)
    }

    /// Build a group from a phrase layout: one pool per used element, tiles
    /// at their render positions with unit scale and the configured
    /// opacity.
    #[must_use]
    pub fn from_layout(
        layout: &PhraseLayout,
        transform: &RenderTransform,
        display: &DisplayOptions,
    ) -> Self {
        let mut group = Self::new();
        for (&atomic_number, positions) in &layout.element_positions(transform)
        {
            let pool = ElementPool::from_positions(
                atomic_number,
                positions,
                1.0,
                display.tile_opacity,
            );
            // Keys are unique here: the layout buckets by atomic number.
            let _ = group.pools.insert(atomic_number, pool);
        }
        group
    }

    /// Add a pool.
    ///
    /// # Errors
    ///
    /// Returns [`KemioError::DuplicateKey`] when the group already holds a
    /// pool for the same atomic number.
    pub fn insert(&mut self, pool: ElementPool) -> Result<(), KemioError> {
        let key = pool.atomic_number();
        if self.pools.contains_key(&key) {
            return Err(KemioError::DuplicateKey(key));
        }
        let _ = self.pools.insert(key, pool);
        Ok(())
    }

    /// The pool for an atomic number, if present.
    #[must_use]
    pub fn pool(&self, atomic_number: u32) -> Option<&ElementPool> {
        self.pools.get(&atomic_number)
    }

    /// Atomic numbers in use, ascending.
    pub fn atomic_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.pools.keys().copied()
    }

    /// Number of pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether the group holds no pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Total tile count across pools.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.pools.values().map(ElementPool::len).sum()
    }

    /// Plan the transition carrying this group's tiles onto `target`'s.
    ///
    /// Walks the union of atomic numbers in ascending order: keys present
    /// on both sides delegate to [`ElementPool::transition`]; keys only in
    /// the target fade in as a zero-opacity pool copy; keys only on this
    /// side fade out and their pool is dropped. The group reflects the
    /// applied plan afterwards.
    ///
    /// # Errors
    ///
    /// Propagates pool-level failures; none occur for well-formed groups
    /// since delegation always pairs pools of equal atomic number.
    pub fn transition(
        &mut self,
        target: &Self,
    ) -> Result<TransitionPlan, KemioError> {
        let mut keys: Vec<u32> = self.atomic_numbers().collect();
        keys.extend(target.atomic_numbers());
        keys.sort_unstable();
        keys.dedup();

        let mut plan = TransitionPlan::new();
        for key in keys {
            match (self.pools.contains_key(&key), target.pools.get(&key)) {
                (true, Some(target_pool)) => {
                    if let Some(pool) = self.pools.get_mut(&key) {
                        plan.merge(pool.transition(target_pool)?);
                    }
                }
                (false, Some(target_pool)) => {
                    plan.merge(self.adopt_appearing(target_pool)?);
                }
                (true, None) => {
                    plan.merge(self.drop_disappearing(key));
                }
                (false, None) => {}
            }
        }
        log::debug!(
            "group transition: {} ops across {} pools",
            plan.len(),
            self.pools.len()
        );
        Ok(plan)
    }

    /// Fade in a target-only pool: every tile spawns in place at zero
    /// opacity and rises to its recorded opacity. The adopted pool stores
    /// the applied state so chained transitions start from it.
    fn adopt_appearing(
        &mut self,
        target_pool: &ElementPool,
    ) -> Result<TransitionPlan, KemioError> {
        let mut plan = TransitionPlan::new();
        let mut pool = ElementPool::new(target_pool.atomic_number());
        for (_, tile) in target_pool.iter() {
            let handle = pool.add(*tile)?;
            plan.push(Operation::Appear {
                instance: handle,
                spawn: tile.respawned_at(tile.position, 0.0),
                target: tile.display_target(),
            });
        }
        let _ = self.pools.insert(pool.atomic_number(), pool);
        Ok(plan)
    }

    /// Fade out a self-only pool and drop it.
    fn drop_disappearing(&mut self, key: u32) -> TransitionPlan {
        let mut plan = TransitionPlan::new();
        if let Some(pool) = self.pools.remove(&key) {
            for (handle, _) in pool.iter() {
                plan.push(Operation::Disappear { instance: handle });
            }
        }
        plan
    }
}

/// Caller-owned letter glyph placements for a layout's leftover literals,
/// ordered by character then layout order. Glyphs scale with the tile
/// footprint times the configured letter scale.
#[must_use]
pub fn literal_glyphs(
    layout: &PhraseLayout,
    transform: &RenderTransform,
    layout_options: &LayoutOptions,
    display: &DisplayOptions,
) -> Vec<LiteralGlyph> {
    let scale = layout_options.tile_width * display.letter_scale;
    let positions = layout.literal_positions(transform);
    let mut characters: Vec<char> = positions.keys().copied().collect();
    characters.sort_unstable();
    characters
        .into_iter()
        .flat_map(|character| {
            positions[&character].iter().map(move |&position| {
                LiteralGlyph {
                    character,
                    position,
                    scale,
                }
            })
        })
        .collect()
}
