// ---------------------------------------------------------------------------
// SelectionSet – the ordered list of picked spice indices
// ---------------------------------------------------------------------------

/// An ordered multiset of spice indices. Picks keep insertion order and the
/// same index may appear any number of times; each occurrence counts once
/// when the selection is averaged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    picks: Vec<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        SelectionSet::default()
    }

    /// Append `index` to the selection. Returns `false` (selection unchanged)
    /// when the index does not address a row of a table with `table_len` rows.
    pub fn push(&mut self, index: usize, table_len: usize) -> bool {
        if index >= table_len {
            return false;
        }
        self.picks.push(index);
        true
    }

    /// Remove the pick at position `pos` in the selection (not the spice
    /// index). Out-of-range positions are ignored.
    pub fn remove_at(&mut self, pos: usize) {
        if pos < self.picks.len() {
            self.picks.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// The picked indices in pick order.
    pub fn indices(&self) -> &[usize] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
