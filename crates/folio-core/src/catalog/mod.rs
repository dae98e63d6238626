//! Ordered page catalog and its static content.

mod static_catalog;


use core::fmt;

use crate::intent::Direction;

pub use static_catalog::StaticCatalog;

/// Identifier of one page. Equality is by the id string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PageId(&'static str);

impl PageId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One piece of static page content, rendered top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentBlock {
    Heading(&'static str),
    Paragraph(&'static str),
    Item(&'static str),
    Link {
        label: &'static str,
        target: PageId,
    },
}

/// A catalog entry: the id, the tab label and the content renderer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageEntry {
    pub id: PageId,
    pub label: &'static str,
    pub blocks: &'static [ContentBlock],
}

impl PageEntry {
    pub const fn new(id: PageId, label: &'static str, blocks: &'static [ContentBlock]) -> Self {
        Self { id, label, blocks }
    }
}

/// Catalog construction and lookup failures. All of them are configuration
/// errors, never runtime conditions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogError {
    Empty,
    DuplicatePage(PageId),
    CapacityExceeded { capacity: usize },
    UnknownPage(PageId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("page catalog is empty"),
            Self::DuplicatePage(id) => write!(f, "page `{id}` appears twice in the catalog"),
            Self::CapacityExceeded { capacity } => {
                write!(f, "page catalog holds at most {capacity} pages")
            }
            Self::UnknownPage(id) => write!(f, "page `{id}` is not in the catalog"),
        }
    }
}

impl core::error::Error for CatalogError {}

/// Read-only, ordered page lookup. Order defines "next" and "previous".
pub trait PageRegistry {
    fn page_count(&self) -> u16;
    fn page_at(&self, index: u16) -> Option<&PageEntry>;

    fn index_of(&self, id: PageId) -> Option<u16> {
        (0..self.page_count()).find(|&idx| self.page_at(idx).is_some_and(|entry| entry.id == id))
    }

    fn entry(&self, id: PageId) -> Option<&PageEntry> {
        self.index_of(id).and_then(|idx| self.page_at(idx))
    }

    fn contains(&self, id: PageId) -> bool {
        self.index_of(id).is_some()
    }

    fn first(&self) -> Option<PageId> {
        self.page_at(0).map(|entry| entry.id)
    }

    /// The adjacent page in `direction`, or `None` past either end.
    fn neighbor(&self, id: PageId, direction: Direction) -> Option<PageId> {
        let index = self.index_of(id)?;
        let next = match direction {
            Direction::Forward => index.checked_add(1)?,
            Direction::Backward => index.checked_sub(1)?,
        };
        self.page_at(next).map(|entry| entry.id)
    }
}
