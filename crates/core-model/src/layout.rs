//! Pane geometry.
//!
//! Panes are stacked vertically and share the full width. Each pane's height is proportional to
//! its weight; the last region absorbs the rounding remainder so the regions tile the area
//! exactly. Coordinates are terminal cells.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl LayoutRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Layout {
    regions: Vec<LayoutRegion>,
}

impl Layout {
    /// Create a layout representing a single full-screen region.
    pub fn single(width: u16, height: u16) -> Self {
        Self {
            regions: vec![LayoutRegion::new(0, 0, width, height)],
        }
    }

    /// One region per weight, top to bottom.
    pub fn stacked(width: u16, height: u16, weights: &[u16]) -> Self {
        if weights.len() <= 1 {
            return Self::single(width, height);
        }
        let total: u32 = weights.iter().map(|w| u32::from((*w).max(1))).sum();
        let mut regions = Vec::with_capacity(weights.len());
        let mut y = 0u16;
        for (i, w) in weights.iter().enumerate() {
            let h = if i + 1 == weights.len() {
                height - y
            } else {
                (u32::from(height) * u32::from((*w).max(1)) / total) as u16
            };
            regions.push(LayoutRegion::new(0, y, width, h));
            y += h;
        }
        Self { regions }
    }

    /// First region.
    pub fn primary(&self) -> &LayoutRegion {
        &self.regions[0]
    }

    pub fn regions(&self) -> &[LayoutRegion] {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_layout_invariants() {
        let l = Layout::single(80, 24);
        assert_eq!(l.regions().len(), 1);
        let r = l.primary();
        assert_eq!(r.x, 0);
        assert_eq!(r.y, 0);
        assert_eq!(r.width, 80);
        assert_eq!(r.height, 24);
    }

    #[test]
    fn equal_weights_split_evenly_and_tile() {
        let l = Layout::stacked(80, 25, &[4, 4, 4]);
        let heights: Vec<u16> = l.regions().iter().map(|r| r.height).collect();
        assert_eq!(heights, vec![8, 8, 9]);
        let ys: Vec<u16> = l.regions().iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![0, 8, 16]);
    }

    #[test]
    fn heavier_pane_gets_more_rows() {
        let l = Layout::stacked(80, 30, &[8, 4]);
        assert_eq!(l.regions()[0].height, 20);
        assert_eq!(l.regions()[1].height, 10);
    }
}
