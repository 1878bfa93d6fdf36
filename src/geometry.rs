//! Size-derived proportions of the icon.
//!
//! Everything here is a pure function of the icon size so it can be tested
//! without touching any pixels.

/// Smallest size that carries the centered glyph.
pub const GLYPH_MIN_SIZE: u32 = 32;

/// Smallest size that also carries the label under the glyph.
pub const LABEL_MIN_SIZE: u32 = 64;

/// Vertical gap between the glyph's ink box and the label.
pub const LABEL_GAP: i64 = 2;

/// Integer proportions for one icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub size: u32,
    pub border_radius: u32,
    pub outer_margin: u32,
    pub inner_margin: u32,
}

/// Axis-aligned rectangle with circular corners. Both corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
    pub radius: i64,
}

impl Geometry {
    pub fn for_size(size: u32) -> Self {
        Self {
            size,
            border_radius: (size / 8).max(4),
            outer_margin: (size / 16).max(2),
            inner_margin: (size / 8).max(4),
        }
    }

    pub fn outer_rect(&self) -> RoundedRect {
        let radius = self.border_radius as i64;
        RoundedRect::inset(self.size, self.outer_margin, radius)
    }

    pub fn inner_rect(&self) -> RoundedRect {
        let radius = self.border_radius as i64 - 2;
        RoundedRect::inset(self.size, self.inner_margin, radius)
    }

    /// Pixel size requested for the glyph. Only a scalable font honors it.
    pub fn glyph_font_size(&self) -> f32 {
        (self.size / 4).max(12) as f32
    }

    /// Pixel size requested for the label. Only a scalable font honors it.
    pub fn label_font_size(&self) -> f32 {
        (self.size / 8).max(8) as f32
    }

    pub fn shows_glyph(&self) -> bool {
        self.size >= GLYPH_MIN_SIZE
    }

    pub fn shows_label(&self) -> bool {
        self.size >= LABEL_MIN_SIZE
    }

    /// Top-left of the glyph's ink box: horizontally centered, nudged up by
    /// a sixteenth of the size.
    pub fn glyph_origin(&self, text_width: u32, text_height: u32) -> (i64, i64) {
        let size = self.size as i64;
        let x = (size - text_width as i64).div_euclid(2);
        let y = (size - text_height as i64).div_euclid(2) - size / 16;
        (x, y)
    }

    /// Top-left of the label's ink box, just under the glyph placed at
    /// `glyph_y` with height `glyph_height`.
    pub fn label_origin(&self, label_width: u32, glyph_y: i64, glyph_height: u32) -> (i64, i64) {
        let size = self.size as i64;
        let x = (size - label_width as i64).div_euclid(2);
        (x, glyph_y + glyph_height as i64 + LABEL_GAP)
    }
}

impl RoundedRect {
    fn inset(size: u32, margin: u32, radius: i64) -> Self {
        let (lo, hi) = (margin as i64, size as i64 - margin as i64);
        Self {
            x0: lo,
            y0: lo,
            x1: hi,
            y1: hi,
            radius: radius.max(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Corner radius actually drawn; never more than half of either extent.
    pub fn effective_radius(&self) -> i64 {
        let half_w = (self.x1 - self.x0) / 2;
        let half_h = (self.y1 - self.y0) / 2;
        self.radius.min(half_w).min(half_h).max(0)
    }

    pub fn contains(&self, px: i64, py: i64) -> bool {
        if self.is_empty() || px < self.x0 || px > self.x1 || py < self.y0 || py > self.y1 {
            return false;
        }

        let r = self.effective_radius();
        let cx = if px < self.x0 + r {
            self.x0 + r
        } else if px > self.x1 - r {
            self.x1 - r
        } else {
            return true;
        };
        let cy = if py < self.y0 + r {
            self.y0 + r
        } else if py > self.y1 - r {
            self.y1 - r
        } else {
            return true;
        };

        let (dx, dy) = (px - cx, py - cy);
        dx * dx + dy * dy <= r * r
    }
}
