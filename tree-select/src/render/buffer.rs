use super::text::char_width;
use super::{Brush, Cell, Rect, Rgb};

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Fill `area` with blank cells on the given background.
    pub fn fill(&mut self, area: Rect, bg: Rgb) {
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, Cell::default().with_bg(bg));
            }
        }
    }

    /// Write `text` starting at `(x, y)`, clipped to `max_width` columns.
    ///
    /// Wide characters occupy two cells; the second is marked as a
    /// continuation. Returns the number of columns written.
    pub fn set_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_width: u16,
        brush: Brush,
    ) -> u16 {
        let mut col = 0u16;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if col + w > max_width {
                break;
            }
            self.set(
                x + col,
                y,
                Cell::new(ch)
                    .with_fg(brush.fg)
                    .with_bg(brush.bg)
                    .with_style(brush.style),
            );
            if w == 2 {
                let mut cont = Cell::new(' ')
                    .with_fg(brush.fg)
                    .with_bg(brush.bg)
                    .with_style(brush.style);
                cont.wide_continuation = true;
                self.set(x + col + 1, y, cont);
            }
            col += w;
        }
        col
    }

    /// The characters of row `y`, right-trimmed. Wide-char continuations are skipped.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let row: String = self.cells[start..start + self.width as usize]
            .iter()
            .filter(|c| !c.wide_continuation)
            .map(|c| c.char)
            .collect();
        row.trim_end().to_string()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
