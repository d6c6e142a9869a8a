#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            italic: false,
            underline: false,
        }
    }

    pub const fn bold() -> Self {
        Self {
            bold: true,
            ..Self::new()
        }
    }

    pub const fn dim() -> Self {
        Self {
            dim: true,
            ..Self::new()
        }
    }

    pub const fn underline() -> Self {
        Self {
            underline: true,
            ..Self::new()
        }
    }
}

/// Foreground, background and attributes applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Brush {
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
}

impl Brush {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            style: TextStyle::new(),
        }
    }

    pub const fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// Named colors used when drawing fields and panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub primary: Rgb,
    pub error: Rgb,
    pub border: Rgb,
    /// Background of the row under the tree cursor.
    pub hover: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(24, 24, 28),
            surface: Rgb::new(36, 36, 42),
            text: Rgb::new(230, 230, 235),
            muted: Rgb::new(130, 130, 145),
            primary: Rgb::new(100, 160, 255),
            error: Rgb::new(240, 90, 90),
            border: Rgb::new(80, 80, 95),
            hover: Rgb::new(55, 55, 68),
        }
    }
}
