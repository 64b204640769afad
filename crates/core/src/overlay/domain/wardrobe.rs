use super::overlay_descriptor::OverlayDescriptor;

/// Ordered overlay list with a single active selection.
///
/// Navigation clamps at both ends — it never wraps — and the enabled state
/// a UI shows for its next/previous controls derives from the same index
/// via `can_next`/`can_prev`, so the two cannot disagree.
pub struct Wardrobe {
    overlays: Vec<OverlayDescriptor>,
    active: usize,
}

impl Wardrobe {
    pub fn new(overlays: Vec<OverlayDescriptor>) -> Result<Self, &'static str> {
        if overlays.is_empty() {
            return Err("wardrobe must contain at least one overlay");
        }
        Ok(Self {
            overlays,
            active: 0,
        })
    }

    pub fn active(&self) -> &OverlayDescriptor {
        &self.overlays[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn can_next(&self) -> bool {
        self.active + 1 < self.overlays.len()
    }

    pub fn can_prev(&self) -> bool {
        self.active > 0
    }

    /// Advances the selection; a no-op at the high end. Returns whether the
    /// active index changed.
    pub fn select_next(&mut self) -> bool {
        if self.can_next() {
            self.active += 1;
            true
        } else {
            false
        }
    }

    /// Moves the selection back; a no-op at the low end. Returns whether the
    /// active index changed.
    pub fn select_prev(&mut self) -> bool {
        if self.can_prev() {
            self.active -= 1;
            true
        } else {
            false
        }
    }
}
