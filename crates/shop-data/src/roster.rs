//! Brand-name interning.
//!
//! The upstream records key everything by brand name strings with
//! inconsistent casing ("NIKE" in daily rows, "Nike" in a config form).
//! `BrandRoster` interns each distinct name (case-insensitively) to a dense
//! [`BrandId`] so the ledger and every per-brand array can be a plain `Vec`
//! indexed by `id.index()` instead of a string-keyed map in the hot tick
//! path.

use rustc_hash::FxHashMap;

use shop_core::BrandId;

/// Bidirectional map between brand names and dense `BrandId`s.
///
/// The display name stored is the casing of the *first* occurrence; lookups
/// are case-insensitive thereafter.
#[derive(Debug, Default, Clone)]
pub struct BrandRoster {
    names: Vec<String>,
    index: FxHashMap<String, BrandId>,
}

impl BrandRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name`, returning its id (existing or freshly assigned).
    pub fn intern(&mut self, name: &str) -> BrandId {
        let key = name.to_lowercase();
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = BrandId(self.names.len() as u16);
        self.names.push(name.to_string());
        self.index.insert(key, id);
        id
    }

    /// Case-insensitive lookup.  `None` for names never seen by `intern`.
    pub fn id_of(&self, name: &str) -> Option<BrandId> {
        self.index.get(&name.to_lowercase()).copied()
    }

    /// Display name for `id`, or `None` if out of range.
    pub fn name_of(&self, id: BrandId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterator over all `(BrandId, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (BrandId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (BrandId(i as u16), n.as_str()))
    }
}
