//! Host-side handles: the content view and the surface presenting it.

use std::fmt;
use std::sync::{Arc, Weak};

use horizon_sheet_core::Size;
use parking_lot::Mutex;

/// The surface a sheet is presented over.
///
/// The host owns it; screens only query its bounds.
pub trait PresentingSurface: Send + Sync {
    /// Current bounds of the surface, which is the sheet's container size.
    fn bounds(&self) -> Size;
}

/// A presenting surface whose bounds the host sets explicitly.
#[derive(Debug, Default)]
pub struct HostSurface {
    bounds: Mutex<Size>,
}

impl HostSurface {
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds: Mutex::new(bounds),
        }
    }

    /// Update the bounds, e.g. after a rotation or window resize.
    pub fn set_bounds(&self, bounds: Size) {
        *self.bounds.lock() = bounds;
    }
}

impl PresentingSurface for HostSurface {
    fn bounds(&self) -> Size {
        *self.bounds.lock()
    }
}

/// Handle to the host-rendered view wrapped by a screen.
///
/// Carries a lookup-only link to the surface presenting it. The link is weak:
/// it never keeps the surface alive.
#[derive(Clone, Default)]
pub struct ContentView {
    tag: u64,
    parent: Option<Weak<dyn PresentingSurface>>,
}

impl fmt::Debug for ContentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentView")
            .field("tag", &self.tag)
            .field("has_parent", &self.parent().is_some())
            .finish()
    }
}

impl ContentView {
    /// Wrap the host view identified by `tag`.
    pub fn new(tag: u64) -> Self {
        Self { tag, parent: None }
    }

    /// The host's identifier for the view.
    #[inline]
    pub fn tag(&self) -> u64 {
        self.tag
    }

    /// The surface presenting this view, if it is still alive.
    pub fn parent(&self) -> Option<Arc<dyn PresentingSurface>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn set_parent(&mut self, surface: &Arc<dyn PresentingSurface>) {
        self.parent = Some(Arc::downgrade(surface));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_is_weak() {
        let mut content = ContentView::new(7);
        assert!(content.parent().is_none());

        let surface: Arc<dyn PresentingSurface> = Arc::new(HostSurface::new(Size::new(400.0, 800.0)));
        content.set_parent(&surface);
        assert_eq!(content.parent().map(|s| s.bounds()), Some(Size::new(400.0, 800.0)));

        drop(surface);
        assert!(content.parent().is_none());
        assert_eq!(content.tag(), 7);
    }

    #[test]
    fn test_host_surface_bounds() {
        let surface = HostSurface::new(Size::new(400.0, 800.0));
        surface.set_bounds(Size::new(800.0, 400.0));
        assert_eq!(surface.bounds(), Size::new(800.0, 400.0));
    }
}
