//! Navigation intent: which way a page change travels through the catalog.

use crate::catalog::{CatalogError, PageId, PageRegistry};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `+1` for forward, `-1` for backward.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// `Forward` when `target` sits after `current` in catalog order, otherwise
/// `Backward`. Both ids must be catalog members.
pub fn resolve_direction<R>(
    registry: &R,
    current: PageId,
    target: PageId,
) -> Result<Direction, CatalogError>
where
    R: PageRegistry + ?Sized,
{
    let current_idx = registry
        .index_of(current)
        .ok_or(CatalogError::UnknownPage(current))?;
    let target_idx = registry
        .index_of(target)
        .ok_or(CatalogError::UnknownPage(target))?;

    Ok(if target_idx > current_idx {
        Direction::Forward
    } else {
        Direction::Backward
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PageEntry, StaticCatalog};

    const IDS: [PageId; 5] = [
        PageId::new("home"),
        PageId::new("about"),
        PageId::new("experience"),
        PageId::new("projects"),
        PageId::new("contact"),
    ];

    fn catalog() -> StaticCatalog<5> {
        let entries = IDS.map(|id| PageEntry::new(id, id.as_str(), &[]));
        StaticCatalog::new(&entries).unwrap()
    }

    #[test]
    fn later_pages_are_forward() {
        let catalog = catalog();
        assert_eq!(
            resolve_direction(&catalog, IDS[0], IDS[3]),
            Ok(Direction::Forward)
        );
        assert_eq!(
            resolve_direction(&catalog, IDS[4], IDS[1]),
            Ok(Direction::Backward)
        );
    }

    #[test]
    fn direction_is_antisymmetric_over_every_pair() {
        let catalog = catalog();
        for a in IDS {
            for b in IDS.into_iter().filter(|&b| b != a) {
                let there = resolve_direction(&catalog, a, b).unwrap();
                let back = resolve_direction(&catalog, b, a).unwrap();
                assert_eq!(there.opposite(), back, "{a} -> {b}");
            }
        }
    }

    #[test]
    fn unknown_ids_are_configuration_errors() {
        let catalog = catalog();
        let blog = PageId::new("blog");
        assert_eq!(
            resolve_direction(&catalog, IDS[0], blog),
            Err(CatalogError::UnknownPage(blog))
        );
        assert_eq!(
            resolve_direction(&catalog, blog, IDS[0]),
            Err(CatalogError::UnknownPage(blog))
        );
    }
}
