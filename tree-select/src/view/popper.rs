use crate::render::{Brush, Buffer, Cell, Palette, Rect, TextStyle};
use crate::render::text::truncate_to_width;

use super::AnchoredPanel;

/// Where a placed panel ended up relative to its anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    /// Below the anchor, left edges aligned (default).
    #[default]
    BottomStart,
    /// Above the anchor, used when there is no room below.
    TopStart,
}

/// Sizing for an anchored panel.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Maximum total height in rows, border included.
    pub max_height: u16,
    /// Rows left empty between anchor and panel.
    pub gap: u16,
    /// Draw a border around the panel.
    pub border: bool,
    /// Minimum width in columns, used when the anchor is narrower.
    pub min_width: u16,
    /// Flip above the anchor when the panel does not fit below.
    pub flip: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            max_height: 12,
            gap: 0,
            border: true,
            min_width: 20,
            flip: true,
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum height.
    pub fn max_height(mut self, rows: u16) -> Self {
        self.max_height = rows;
        self
    }

    /// Set the gap between anchor and panel.
    pub fn gap(mut self, rows: u16) -> Self {
        self.gap = rows;
        self
    }

    /// Disable the border.
    pub fn borderless(mut self) -> Self {
        self.border = false;
        self
    }

    /// Set the minimum width.
    pub fn min_width(mut self, cols: u16) -> Self {
        self.min_width = cols;
        self
    }

    /// Never flip above the anchor.
    pub fn no_flip(mut self) -> Self {
        self.flip = false;
        self
    }
}

/// Default [`AnchoredPanel`]: a bordered box matching its anchor's width.
#[derive(Debug, Clone, Default)]
pub struct Popper {
    config: PanelConfig,
}

impl Popper {
    pub fn new(config: PanelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    fn chrome(&self) -> u16 {
        if self.config.border { 2 } else { 0 }
    }

    /// Which side of the anchor a panel of `height` rows goes on.
    pub fn placement(&self, anchor: Rect, viewport: Rect, height: u16) -> Placement {
        let below = viewport
            .bottom()
            .saturating_sub(anchor.bottom().saturating_add(self.config.gap));
        let above = anchor
            .y
            .saturating_sub(viewport.y)
            .saturating_sub(self.config.gap);
        if self.config.flip && below < height && above > below {
            Placement::TopStart
        } else {
            Placement::BottomStart
        }
    }
}

impl AnchoredPanel for Popper {
    fn place(&self, anchor: Rect, viewport: Rect, content_height: u16) -> Rect {
        let wanted = content_height
            .max(1)
            .saturating_add(self.chrome())
            .min(self.config.max_height.max(self.chrome() + 1));
        let width = anchor.width.max(self.config.min_width);

        let placement = self.placement(anchor, viewport, wanted);
        let (y, room) = match placement {
            Placement::BottomStart => {
                let y = anchor.bottom().saturating_add(self.config.gap);
                (y, viewport.bottom().saturating_sub(y))
            }
            Placement::TopStart => {
                let room = anchor
                    .y
                    .saturating_sub(viewport.y)
                    .saturating_sub(self.config.gap);
                let height = wanted.min(room);
                (
                    anchor
                        .y
                        .saturating_sub(self.config.gap)
                        .saturating_sub(height),
                    room,
                )
            }
        };
        let height = wanted.min(room);

        // Shift left if the panel would run past the right edge.
        let x = if anchor.x.saturating_add(width) > viewport.right() {
            viewport.right().saturating_sub(width).max(viewport.x)
        } else {
            anchor.x
        };

        Rect::new(x, y, width, height).clamp_to(viewport)
    }

    fn render_frame(&self, area: Rect, title: &str, buf: &mut Buffer, palette: &Palette) -> Rect {
        buf.fill(area, palette.surface);
        if !self.config.border || area.width < 2 || area.height < 2 {
            return area;
        }

        let border = |c: char| Cell::new(c).with_fg(palette.border).with_bg(palette.surface);
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        for x in area.x + 1..right {
            buf.set(x, area.y, border('─'));
            buf.set(x, bottom, border('─'));
        }
        for y in area.y + 1..bottom {
            buf.set(area.x, y, border('│'));
            buf.set(right, y, border('│'));
        }
        buf.set(area.x, area.y, border('┌'));
        buf.set(right, area.y, border('┐'));
        buf.set(area.x, bottom, border('└'));
        buf.set(right, bottom, border('┘'));

        if !title.is_empty() && area.width > 4 {
            let max = (area.width - 4) as usize;
            let title = format!(" {} ", truncate_to_width(title, max.saturating_sub(2)));
            buf.set_string(
                area.x + 1,
                area.y,
                &title,
                area.width - 2,
                Brush::new(palette.muted, palette.surface).with_style(TextStyle::dim()),
            );
        }

        area.inner()
    }
}
