//! Per-slot color weights

use crate::codec::tileset::Tileset;
use crate::io::error::{HerringboneError, Result};

/// Number of boundary slots a weighting can address
pub const SLOT_COUNT: usize = 6;

/// Optional relative frequencies for the colors of each boundary slot
///
/// Slots without weights draw their colors uniformly. Weights are relative;
/// only their ratios matter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Weighting {
    slots: [Option<Vec<u32>>; SLOT_COUNT],
}

impl Weighting {
    /// Weighting with every slot uniform
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weights of one slot
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeighting` if `slot` is not a boundary slot.
    pub fn set_slot(&mut self, slot: usize, weights: Vec<u32>) -> Result<()> {
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or_else(|| HerringboneError::InvalidWeighting {
                slot,
                reason: format!("there are only {SLOT_COUNT} slots"),
            })?;
        *entry = Some(weights);
        Ok(())
    }

    /// Builder form of [`Self::set_slot`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeighting` if `slot` is not a boundary slot.
    pub fn with_slot(mut self, slot: usize, weights: Vec<u32>) -> Result<Self> {
        self.set_slot(slot, weights)?;
        Ok(self)
    }

    /// Weights of one slot, if any were given
    pub fn slot(&self, slot: usize) -> Option<&[u32]> {
        self.slots.get(slot).and_then(Option::as_deref)
    }

    /// Weight of one color in a weighted slot
    ///
    /// `None` when the slot is uniform.
    pub fn weight(&self, slot: usize, color: usize) -> Option<u32> {
        self.slot(slot)
            .map(|weights| weights.get(color).copied().unwrap_or(0))
    }

    /// Check every weighted slot used by the tileset covers its colors
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeighting` if a slot has fewer weights than colors
    /// or all of its weights are zero.
    pub fn validate(&self, tileset: &Tileset) -> Result<()> {
        let used = tileset.model().slot_count();
        for (slot, &count) in tileset.num_color().iter().enumerate().take(used) {
            let Some(weights) = self.slot(slot) else {
                continue;
            };
            let Some(active) = weights.get(..count) else {
                return Err(HerringboneError::InvalidWeighting {
                    slot,
                    reason: format!("{} weights given for {count} colors", weights.len()),
                });
            };
            if active.iter().all(|&w| w == 0) {
                return Err(HerringboneError::InvalidWeighting {
                    slot,
                    reason: "all weights are zero".to_string(),
                });
            }
        }
        Ok(())
    }
}
