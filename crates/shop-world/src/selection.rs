//! The viewed brand subset and its display slots.
//!
//! The hosting UI supplies a list of brand names; the engine simulates only
//! those brands.  Selection order is meaningful: it fixes each brand's shelf
//! slot and display colour, so the same selection always renders the same
//! floor.

use shop_core::{BrandId, ShopError, ShopResult};
use shop_data::BrandRoster;

/// The upstream viewer's brand palette, assigned by selection slot
/// (wrapping past 23 brands).
pub const BRAND_PALETTE: [&str; 23] = [
    "#f97316", "#3b82f6", "#8b5cf6", "#10b981", "#ef4444", "#f59e0b",
    "#06b6d4", "#ec4899", "#84cc16", "#6366f1", "#14b8a6", "#f43f5e",
    "#a855f7", "#22c55e", "#eab308", "#0ea5e9", "#d946ef", "#64748b",
    "#78716c", "#dc2626", "#2563eb", "#7c3aed", "#059669",
];

/// An ordered subset of the roster: slot index ↔ brand id.
#[derive(Debug, Clone, Default)]
pub struct BrandSelection {
    /// Brands in display order; the position is the shelf/colour slot.
    ids: Vec<BrandId>,
    /// Reverse map, indexed by `BrandId` over the whole roster.
    slots: Vec<Option<usize>>,
}

impl BrandSelection {
    /// Resolve `names` against the roster, preserving order.
    ///
    /// Unknown names are an error — the UI's brand list and the dataset come
    /// from the same service, so a mismatch means mis-wired inputs, not bad
    /// data.
    pub fn from_names(roster: &BrandRoster, names: &[String]) -> ShopResult<Self> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            let id = roster
                .id_of(name)
                .ok_or_else(|| ShopError::UnknownBrand(name.clone()))?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(Self::from_ids(roster.len(), ids))
    }

    /// Build directly from ids (deduplicated, order preserved).
    pub fn from_ids(roster_len: usize, ids: Vec<BrandId>) -> Self {
        let mut slots = vec![None; roster_len];
        for (slot, &id) in ids.iter().enumerate() {
            if let Some(entry) = slots.get_mut(id.index()) {
                *entry = Some(slot);
            }
        }
        Self { ids, slots }
    }

    /// Every selected brand in slot order.
    pub fn ids(&self) -> &[BrandId] {
        &self.ids
    }

    /// Display slot for `brand`, or `None` when it is not selected.
    pub fn slot_of(&self, brand: BrandId) -> Option<usize> {
        self.slots.get(brand.index()).copied().flatten()
    }

    pub fn contains(&self, brand: BrandId) -> bool {
        self.slot_of(brand).is_some()
    }

    /// Display colour for a selection slot.
    pub fn color_of_slot(slot: usize) -> &'static str {
        BRAND_PALETTE[slot % BRAND_PALETTE.len()]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
