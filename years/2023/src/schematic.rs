//! Engine schematics.
//!
//! A schematic is a rectangular grid where runs of digits form numbers and
//! anything that isn't a digit or a `.` is a symbol. A number touching a
//! symbol, including diagonally, is a part number. A `*` touching exactly two
//! numbers is a gear.
//!
//! ```
//! use y2023::schematic::Schematic;
//!
//! let schematic = Schematic::from_lines(["12*34", "....."])?;
//! let extraction = schematic.extract()?;
//!
//! assert_eq!(extraction.part_number_sum(), 46);
//! assert_eq!(extraction.gear_ratio_sum(&schematic), 408);
//!
//! // A third number touching the gear disqualifies it.
//! let schematic = Schematic::from_lines(["12*34", "..5.."])?;
//! let extraction = schematic.extract()?;
//!
//! assert_eq!(extraction.part_number_sum(), 51);
//! assert_eq!(extraction.gear_ratio_sum(&schematic), 0);
//! # Ok::<_, y2023::schematic::SchematicError>(())
//! ```

#[cfg(test)]
mod tests;

use core::ops::{Range, RangeInclusive};
use std::collections::HashSet;

use lib::prelude::ArrayVec;
use thiserror::Error;

/// Marker for an empty cell.
const BLANK: u8 = b'.';

/// Marker for a symbol which might be a gear.
const GEAR: u8 = b'*';

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchematicError {
    /// Rows must all have the same width.
    #[error("malformed grid: row {row} has {actual} columns, but expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("number starting at row {row}, column {col} is too large")]
    Overflow { row: usize, col: usize },
}

/// A position in the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// The `*` symbol.
    Gear,
    Other(u8),
}

/// A single classified cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A decimal digit with its value.
    Digit(u8),
    Space,
    Symbol(Symbol),
}

impl Cell {
    /// Classify a single byte of input.
    #[inline]
    pub fn from_byte(b: u8) -> Self {
        match b {
            BLANK => Cell::Space,
            b'0'..=b'9' => Cell::Digit(b - b'0'),
            GEAR => Cell::Symbol(Symbol::Gear),
            b => Cell::Symbol(Symbol::Other(b)),
        }
    }
}

/// A grid of cells.
///
/// Each byte of a line is one cell, so non-ASCII characters occupy one cell
/// per byte and are all treated as symbols.
#[derive(Debug, Clone, Default)]
pub struct Schematic {
    cells: Vec<Cell>,
    rows: usize,
    columns: usize,
}

impl Schematic {
    /// Build a schematic out of lines of input.
    ///
    /// Errors with [SchematicError::Ragged] if any line differs in width from
    /// the first one.
    pub fn from_lines<I>(lines: I) -> Result<Self, SchematicError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut cells = Vec::new();
        let mut columns = None;
        let mut rows = 0;

        for (row, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let expected = *columns.get_or_insert(line.len());

            if line.len() != expected {
                return Err(SchematicError::Ragged {
                    row,
                    expected,
                    actual: line.len(),
                });
            }

            cells.extend(line.iter().copied().map(Cell::from_byte));
            rows += 1;
        }

        Ok(Self {
            cells,
            rows,
            columns: columns.unwrap_or_default(),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Access the cells of the given row.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        let start = row.checked_mul(self.columns)?;
        self.cells.get(start..start.checked_add(self.columns)?)
    }

    /// Get the cell at the given position.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.row(pos.row)?.get(pos.col).copied()
    }

    /// Iterate over every cell along with its position.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let columns = self.columns;

        self.cells
            .iter()
            .enumerate()
            .map(move |(n, &cell)| (Pos::new(n / columns, n % columns), cell))
    }

    /// Iterate over the positions of all gear symbols.
    pub fn gears(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells()
            .filter(|(_, cell)| matches!(cell, Cell::Symbol(Symbol::Gear)))
            .map(|(pos, _)| pos)
    }

    /// The positions surrounding `pos`, including diagonals, which are inside
    /// of the schematic. Does not include `pos` itself.
    pub fn neighbours(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        let rows = pos.row.saturating_sub(1)..pos.row.saturating_add(2).min(self.rows);
        let cols = pos.col.saturating_sub(1)..pos.col.saturating_add(2).min(self.columns);

        rows.flat_map(move |row| cols.clone().map(move |col| Pos::new(row, col)))
            .filter(move |&n| n != pos)
    }

    /// Scan the schematic once, collecting every number and every position
    /// which is adjacent to a symbol.
    ///
    /// Errors with [SchematicError::Overflow] if a run of digits doesn't fit
    /// in a `u64`.
    pub fn extract(&self) -> Result<Extraction, SchematicError> {
        let mut adjacent = AdjacencySet::new(self.columns);
        let mut tokens = Vec::new();
        let mut rows = Vec::with_capacity(self.rows);

        for row in 0..self.rows {
            let cells = self.row(row).unwrap_or_default();
            let first = tokens.len();
            let mut run = None::<Run>;

            for (col, &cell) in cells.iter().enumerate() {
                if let Cell::Digit(d) = cell {
                    run.get_or_insert(Run::new(col)).push(row, d)?;
                    continue;
                }

                if let Some(run) = run.take() {
                    tokens.push(run.close(row, col - 1));
                }

                if let Cell::Symbol(..) = cell {
                    adjacent.extend(self.neighbours(Pos::new(row, col)));
                }
            }

            if let Some(run) = run.take() {
                tokens.push(run.close(row, cells.len() - 1));
            }

            log::trace!("row {row}: {} numbers", tokens.len() - first);
            rows.push(first..tokens.len());
        }

        log::debug!(
            "extracted {} numbers, {} positions adjacent to symbols",
            tokens.len(),
            adjacent.len()
        );

        Ok(Extraction {
            adjacent,
            tokens,
            rows,
        })
    }
}

/// An in-progress run of digits.
struct Run {
    start: usize,
    value: u64,
}

impl Run {
    #[inline]
    fn new(start: usize) -> Self {
        Self { start, value: 0 }
    }

    #[inline]
    fn push(&mut self, row: usize, d: u8) -> Result<(), SchematicError> {
        self.value = self
            .value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(d)))
            .ok_or(SchematicError::Overflow {
                row,
                col: self.start,
            })?;

        Ok(())
    }

    #[inline]
    fn close(self, row: usize, end: usize) -> NumberToken {
        NumberToken {
            row,
            start: self.start,
            end,
            value: self.value,
        }
    }
}

/// A number spanning the inclusive columns `start..=end` of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberToken {
    pub row: usize,
    pub start: usize,
    pub end: usize,
    pub value: u64,
}

impl NumberToken {
    /// Columns covered by the number.
    #[inline]
    pub fn span(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Test if the number covers the given position.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.row == pos.row && self.span().contains(&pos.col)
    }
}

/// Positions adjacent to at least one symbol.
///
/// Positions are stored by their offset in the row-major grid.
#[derive(Debug, Clone)]
pub struct AdjacencySet {
    columns: usize,
    offsets: HashSet<usize>,
}

impl AdjacencySet {
    fn new(columns: usize) -> Self {
        Self {
            columns,
            offsets: HashSet::new(),
        }
    }

    #[inline]
    fn offset(&self, pos: Pos) -> Option<usize> {
        if pos.col >= self.columns {
            return None;
        }

        pos.row.checked_mul(self.columns)?.checked_add(pos.col)
    }

    /// Test if the given position is adjacent to a symbol.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        match self.offset(pos) {
            Some(offset) => self.offsets.contains(&offset),
            None => false,
        }
    }

    /// Number of distinct positions in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Extend<Pos> for AdjacencySet {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Pos>,
    {
        for pos in iter {
            if let Some(offset) = self.offset(pos) {
                self.offsets.insert(offset);
            }
        }
    }
}

/// Numbers and symbol adjacency extracted from a [Schematic].
///
/// Queries only read the extraction, so they can be evaluated in any order or
/// concurrently.
#[derive(Debug, Clone)]
pub struct Extraction {
    adjacent: AdjacencySet,
    /// Numbers in row-major order.
    tokens: Vec<NumberToken>,
    /// Range of `tokens` belonging to each row.
    rows: Vec<Range<usize>>,
}

impl Extraction {
    /// All numbers in the schematic, ordered by row and column.
    #[inline]
    pub fn tokens(&self) -> &[NumberToken] {
        &self.tokens
    }

    /// Positions adjacent to a symbol.
    #[inline]
    pub fn adjacent(&self) -> &AdjacencySet {
        &self.adjacent
    }

    /// Iterate over numbers adjacent to any symbol.
    pub fn part_numbers(&self) -> impl Iterator<Item = &NumberToken> + '_ {
        self.tokens.iter().filter(|token| {
            token
                .span()
                .any(|col| self.adjacent.contains(Pos::new(token.row, col)))
        })
    }

    /// Sum of all part numbers.
    pub fn part_number_sum(&self) -> u128 {
        self.part_numbers().map(|token| u128::from(token.value)).sum()
    }

    /// The product of the two numbers adjacent to the gear at `gear`, or `0`
    /// unless there are exactly two of them.
    pub fn gear_ratio(&self, schematic: &Schematic, gear: Pos) -> u128 {
        let mut found = ArrayVec::<usize, 2>::new();

        for pos in schematic.neighbours(gear) {
            let Some(index) = self.token_at(pos) else {
                continue;
            };

            if found.contains(&index) {
                continue;
            }

            if found.try_push(index).is_err() {
                return 0;
            }
        }

        let [a, b] = found[..] else {
            return 0;
        };

        u128::from(self.tokens[a].value) * u128::from(self.tokens[b].value)
    }

    /// Sum of the ratios of all gears in the schematic.
    ///
    /// Saturates at `u128::MAX`, which takes at least two gears between
    /// twenty digit numbers.
    pub fn gear_ratio_sum(&self, schematic: &Schematic) -> u128 {
        schematic
            .gears()
            .map(|gear| self.gear_ratio(schematic, gear))
            .fold(0, u128::saturating_add)
    }

    /// Index of the number covering `pos`, if any.
    fn token_at(&self, pos: Pos) -> Option<usize> {
        let range = self.rows.get(pos.row)?.clone();
        let tokens = self.tokens.get(range.clone())?;

        // Numbers in a row are sorted and never overlap.
        let n = tokens.partition_point(|token| token.end < pos.col);
        let token = tokens.get(n)?;

        if !token.contains(pos) {
            return None;
        }

        Some(range.start + n)
    }
}
