//! Maze grid: parsing, wall lookup and cell-to-pixel mapping.
use crate::error::{RenderError, Result};
use crate::render::framebuffer::Block;

pub const WALL_SYMBOL: char = '-';
pub const OPEN_SYMBOL: char = ' ';

/// The 16x16 map the reference scene is rendered from.
const REFERENCE_MAP: [&str; 16] = [
    "----------------",
    "-              -",
    "-              -",
    "-   -----      -",
    "-     -        -",
    "-     -        -",
    "-     - ----   -",
    "-     -    -   -",
    "-     -    -   -",
    "-     -    -   -",
    "-   ---    -   -",
    "-          -   -",
    "-          -   -",
    "-              -",
    "-              -",
    "----------------",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
}

impl Cell {
    /// Only the wall symbol is solid; everything else is walkable.
    pub fn from_symbol(ch: char) -> Self {
        if ch == WALL_SYMBOL { Cell::Wall } else { Cell::Empty }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Maze {
    /// Row-major run of exactly `rows * cols` symbols, optionally followed by a `'\0'`.
    pub fn parse(rows: usize, cols: usize, symbols: &str) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "map must have at least one cell, got {rows}x{cols}"
            )));
        }
        let symbols = symbols.strip_suffix('\0').unwrap_or(symbols);
        let cells: Vec<Cell> = symbols.chars().map(Cell::from_symbol).collect();
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(RenderError::MapSize { expected, actual: cells.len() });
        }
        Ok(Self { rows, cols, cells })
    }

    /// One string per row; all rows must be the same width.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let cols = lines.first().map(|l| l.as_ref().chars().count()).unwrap_or(0);
        if let Some((i, bad)) = lines
            .iter()
            .enumerate()
            .find(|(_, l)| l.as_ref().chars().count() != cols)
        {
            return Err(RenderError::InvalidConfig(format!(
                "map row {i} is {} cells wide, expected {cols}",
                bad.as_ref().chars().count()
            )));
        }
        let flat: String = lines.iter().map(|l| l.as_ref()).collect();
        Self::parse(lines.len(), cols, &flat)
    }

    pub fn reference() -> Self {
        let cells = REFERENCE_MAP
            .iter()
            .flat_map(|row| row.chars())
            .map(Cell::from_symbol)
            .collect();
        Self { rows: REFERENCE_MAP.len(), cols: REFERENCE_MAP[0].len(), cells }
    }

    /// A grid with no walls at all.
    pub fn open(rows: usize, cols: usize) -> Result<Self> {
        Self::parse(rows, cols, &OPEN_SYMBOL.to_string().repeat(rows * cols))
    }

    #[inline] pub fn rows(&self) -> usize { self.rows }
    #[inline] pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            return Some(self.cells[row * self.cols + col]);
        }
        None
    }

    /// Cells outside the grid count as wall.
    #[inline]
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none_or(|c| c == Cell::Wall)
    }

    /// Cell under a continuous world point: row from `floor(x)`, column from `floor(y)`.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Cell> {
        let (row, col) = (x.floor(), y.floor());
        if !(row >= 0.0 && col >= 0.0) {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    pub fn walls(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Wall)
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }

    /// Pixel size of one cell in the top-down view: `(width, height)`.
    ///
    /// Columns get half the width share so the map fits in the left half of the image.
    #[inline]
    pub fn cell_size(&self, image_width: usize, image_height: usize) -> (usize, usize) {
        (image_width / (self.cols * 2), image_height / self.rows)
    }

    pub fn to_pixel_block(&self, row: usize, col: usize, image_width: usize, image_height: usize) -> Block {
        let (cell_w, cell_h) = self.cell_size(image_width, image_height);
        Block::new((row * cell_h) as i64, (col * cell_w) as i64, cell_w, cell_h)
    }
}
