use heapless::Vec as HeaplessVec;

use super::{CatalogError, PageEntry, PageRegistry};

/// Fixed-capacity catalog validated once at startup.
#[derive(Debug, Clone)]
pub struct StaticCatalog<const N: usize> {
    entries: HeaplessVec<PageEntry, N>,
}

impl<const N: usize> StaticCatalog<N> {
    pub fn new(entries: &[PageEntry]) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut stored = HeaplessVec::new();
        for (idx, entry) in entries.iter().enumerate() {
            if entries[..idx].iter().any(|seen| seen.id == entry.id) {
                return Err(CatalogError::DuplicatePage(entry.id));
            }
            stored
                .push(*entry)
                .map_err(|_| CatalogError::CapacityExceeded { capacity: N })?;
        }

        Ok(Self { entries: stored })
    }
}

impl<const N: usize> PageRegistry for StaticCatalog<N> {
    fn page_count(&self) -> u16 {
        self.entries.len().min(u16::MAX as usize) as u16
    }

    fn page_at(&self, index: u16) -> Option<&PageEntry> {
        self.entries.get(index as usize)
    }
}
