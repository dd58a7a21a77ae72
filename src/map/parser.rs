//! Parsing of the whitespace-separated maze grids.
//!
//! A maze ships as two grids of identical dimensions: the tile symbols, which the graph
//! builder and the collectible loader read, and a rotation index per tile (0-3) that only
//! the renderer cares about.

use crate::error::ParseError;

/// A rectangular grid of single-character symbols, indexed by `(col, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolGrid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl SymbolGrid {
    /// Builds a grid from rows of symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows or the rows differ in width.
    pub fn from_rows(cells: Vec<Vec<char>>) -> Result<Self, ParseError> {
        let cols = cells.first().map(Vec::len).ok_or(ParseError::Empty)?;
        if cols == 0 {
            return Err(ParseError::Empty);
        }
        if let Some((row, found)) = cells.iter().map(Vec::len).enumerate().find(|&(_, len)| len != cols) {
            return Err(ParseError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Self { cells, cols })
    }

    /// Parses text where every whitespace-separated token is one cell.
    ///
    /// Multi-character tokens contribute their first character; blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let cells = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split_whitespace().filter_map(|token| token.chars().next()).collect())
            .collect();
        Self::from_rows(cells)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterates over every cell as `(col, row, symbol)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, line)| line.iter().enumerate().map(move |(col, &symbol)| (col, row, symbol)))
    }
}

/// A parsed maze: tile symbols plus the renderer's rotation indices.
#[derive(Debug, Clone)]
pub struct MazeGrids {
    pub tiles: SymbolGrid,
    pub rotation: Vec<Vec<u8>>,
}

impl MazeGrids {
    /// Parses both grids and checks that they line up.
    ///
    /// # Errors
    ///
    /// Returns an error if either grid is malformed, a rotation is outside 0-3, or the
    /// dimensions differ.
    pub fn parse(tiles: &str, rotation: &str) -> Result<Self, ParseError> {
        let tiles = SymbolGrid::parse(tiles)?;
        let symbols = SymbolGrid::parse(rotation)?;

        if symbols.cols() != tiles.cols() || symbols.rows() != tiles.rows() {
            return Err(ParseError::DimensionMismatch {
                cols: tiles.cols(),
                rows: tiles.rows(),
                found_cols: symbols.cols(),
                found_rows: symbols.rows(),
            });
        }

        let mut rotation = vec![vec![0u8; tiles.cols()]; tiles.rows()];
        for (col, row, symbol) in symbols.cells() {
            rotation[row][col] = match symbol.to_digit(10) {
                Some(digit @ 0..=3) => digit as u8,
                _ => return Err(ParseError::InvalidRotation { symbol, col, row }),
            };
        }

        Ok(Self { tiles, rotation })
    }
}
