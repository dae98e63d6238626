//! Host callbacks fired when a page is left.

use crate::catalog::PageId;

/// Side effects the host performs around a page commit.
pub trait HostHooks {
    /// Release scroll-triggered effects bound to `page` before its content is
    /// detached.
    fn release_effects(&mut self, page: PageId);

    /// Return the document to the top. Called once per commit.
    fn reset_scroll(&mut self) {}
}

#[derive(Default, Debug, Clone, Copy)]
pub struct NoopHooks;

impl HostHooks for NoopHooks {
    fn release_effects(&mut self, _page: PageId) {}
}
