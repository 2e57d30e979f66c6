//! A bounds-checked 2D grid with independently sized rows.

use std::fmt;
use std::ops::{Deref, Index, IndexMut};

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::index::{Column, Line, Point};

mod row;

pub use self::row::Row;

/// Out-of-bounds access to a grid.
///
/// Carries the offending index and the relevant extent of the grid's
/// current shape. The extent is the one the index was checked against:
/// the grid's line count for a line index, the length of the addressed
/// line for a column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A line index at or past the grid's line count.
    LineOutOfBounds { line: Line, num_lines: Line },

    /// A column index at or past the end of its line.
    ColumnOutOfBounds { line: Line, column: Column, num_columns: Column },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::LineOutOfBounds { line, num_lines } => {
                write!(f, "line {} out of bounds ({} lines)", line, num_lines)
            },
            Error::ColumnOutOfBounds { line, column, num_columns } => {
                write!(
                    f,
                    "column {} out of bounds on line {} ({} columns)",
                    column, line, num_columns
                )
            },
        }
    }
}

impl std::error::Error for Error {}

/// An item in the grid along with its Line and Column.
pub struct Indexed<T> {
    pub inner: T,
    pub line: Line,
    pub column: Column,
}

impl<T> Deref for Indexed<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.inner
    }
}

/// A 2D grid of value slots.
///
/// Rows own their storage independently, so the grid may be jagged:
/// two lines can have different lengths, and every operation tolerates
/// that. Slots hold `Option<T>`, with `None` marking a slot that has
/// never been set.
///
/// Cloning a grid copies the row and slot storage; the values
/// themselves are cloned with `T::clone`, so shared-ownership values
/// such as `Rc` keep pointing at the same referent in both grids.
/// "No grid" is spelled `Option<Grid<T>>`, which clones to `None`
/// without any special casing here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid<T> {
    /// Lines in the grid. Each row holds the slots for the columns in
    /// that line.
    raw: Vec<Row<T>>,
}

impl<T> Grid<T> {
    /// Create a grid of `lines` rows with `columns` absent slots each.
    pub fn new(lines: Line, columns: Column) -> Grid<T> {
        debug!("Creating grid: lines={}, columns={}", lines, columns);

        let mut raw = Vec::with_capacity(lines.0);
        raw.resize_with(lines.0, || Row::new(columns));

        Grid { raw }
    }

    /// Build a grid from explicit rows.
    ///
    /// The rows may differ in length; the result is jagged.
    pub fn from_rows(rows: Vec<Row<T>>) -> Grid<T> {
        Grid { raw: rows }
    }

    /// Reserved capacity of the outer line storage.
    ///
    /// A storage hint, not a logical bound; [`Grid::num_lines`] is the
    /// number of lines actually present.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Number of lines in the grid.
    #[inline]
    pub fn num_lines(&self) -> Line {
        Line(self.raw.len())
    }

    /// Checked access to the row at `line`.
    ///
    /// The reference borrows the grid's live storage rather than
    /// copying it; writing goes through [`Grid::row_mut`].
    pub fn row(&self, line: Line) -> Result<&Row<T>, Error> {
        match self.raw.get(line.0) {
            Some(row) => Ok(row),
            None => Err(Error::LineOutOfBounds { line, num_lines: self.num_lines() }),
        }
    }

    /// Checked mutable access to the row at `line`.
    pub fn row_mut(&mut self, line: Line) -> Result<&mut Row<T>, Error> {
        let num_lines = self.num_lines();
        match self.raw.get_mut(line.0) {
            Some(row) => Ok(row),
            None => Err(Error::LineOutOfBounds { line, num_lines }),
        }
    }

    /// Checked access to the slot at `point`.
    ///
    /// `Ok(None)` means the slot exists but has never been set.
    pub fn get(&self, point: Point) -> Result<Option<&T>, Error> {
        let row = self.row(point.line)?;
        if point.column >= row.len() {
            return Err(Error::ColumnOutOfBounds {
                line: point.line,
                column: point.column,
                num_columns: Column(row.len()),
            });
        }

        Ok(row[point.column].as_ref())
    }

    /// Checked write to the slot at `point`.
    ///
    /// Returns the value the slot previously held. A failed write
    /// leaves the grid unmodified.
    pub fn set(&mut self, point: Point, value: T) -> Result<Option<T>, Error> {
        let row = self.row_mut(point.line)?;
        if point.column >= row.len() {
            return Err(Error::ColumnOutOfBounds {
                line: point.line,
                column: point.column,
                num_columns: Column(row.len()),
            });
        }

        Ok(row[point.column].replace(value))
    }

    /// Collect the slot at `column` from every line, in line order.
    ///
    /// Fails on the first line shorter than the requested column; no
    /// partial column is returned.
    pub fn column(&self, column: Column) -> Result<Vec<Option<T>>, Error>
    where
        T: Clone,
    {
        let mut slots = Vec::with_capacity(self.raw.len());
        for (line, row) in self.raw.iter().enumerate() {
            if column >= row.len() {
                return Err(Error::ColumnOutOfBounds {
                    line: Line(line),
                    column,
                    num_columns: Column(row.len()),
                });
            }

            slots.push(row[column].clone());
        }

        Ok(slots)
    }

    /// Copy a `lines` × `columns` region starting at `origin` into a
    /// new grid.
    ///
    /// Slot `(i, j)` of the result is a clone of the source slot at
    /// `(origin.line + i, origin.column + j)`. The first source
    /// coordinate outside the grid aborts the copy, returning the error
    /// of the underlying [`Grid::get`] unchanged; a zero-sized request
    /// succeeds without touching the source.
    pub fn subgrid(&self, origin: Point, lines: Line, columns: Column) -> Result<Grid<T>, Error>
    where
        T: Clone,
    {
        trace!(
            "Copying subgrid: origin=({}, {}), lines={}, columns={}",
            origin.line,
            origin.column,
            lines,
            columns
        );

        let mut raw = Vec::with_capacity(lines.0);
        for i in 0..lines.0 {
            let mut slots = Vec::with_capacity(columns.0);
            for j in 0..columns.0 {
                let point = Point::new(origin.line + i, origin.column + j);
                slots.push(self.get(point)?.cloned());
            }
            raw.push(Row::from_vec(slots));
        }

        Ok(Grid::from_rows(raw))
    }

    /// Iterate every slot in line-major order, each row to its own
    /// length.
    pub fn iter(&self) -> GridIterator<'_, T> {
        GridIterator { grid: self, point: Point::default() }
    }

    /// Invoke `visit` once per slot, lines ascending and columns
    /// ascending within a line.
    ///
    /// The visitor cannot fail; fallible visitation goes through
    /// [`Grid::iter`] and a `for` loop instead.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(Line, Column, Option<&T>),
    {
        for slot in self.iter() {
            visit(slot.line, slot.column, slot.inner.as_ref());
        }
    }

    /// Draw the grid as text.
    ///
    /// The first line lists column indices up to the length of the
    /// longest row; each following line shows the line index and that
    /// row's slots, with `_` standing in for absent slots. `fmt_value`
    /// maps a present value to its text.
    pub fn render<F>(&self, mut fmt_value: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        let num_columns = self.raw.iter().map(Row::len).max().unwrap_or(0);

        let mut out = String::from("   ");
        for column in 0..num_columns {
            out.push_str(&format!(" {} ", column));
        }
        out.push('\n');

        for (line, row) in self.raw.iter().enumerate() {
            out.push_str(&format!("{} [", line));
            for slot in row {
                match slot {
                    Some(value) => out.push_str(&format!(" {} ", fmt_value(value))),
                    None => out.push_str(" _ "),
                }
            }
            out.push_str("]\n");
        }

        out
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(ToString::to_string))
    }
}

/// A line-major iterator over every slot of a grid.
///
/// Jagged grids are walked to each row's own length; zero-length rows
/// contribute nothing.
pub struct GridIterator<'a, T> {
    /// Immutable grid reference.
    grid: &'a Grid<T>,

    /// Position of the next slot to yield.
    point: Point,
}

impl<'a, T> Iterator for GridIterator<'a, T> {
    type Item = Indexed<&'a Option<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.point.line < self.grid.num_lines() {
            let row = &self.grid.raw[self.point.line.0];
            if self.point.column < row.len() {
                let slot = Indexed {
                    inner: &row[self.point.column],
                    line: self.point.line,
                    column: self.point.column,
                };
                self.point.column += 1;
                return Some(slot);
            }

            // Row exhausted (or empty); move to the next one.
            self.point.line += 1;
            self.point.column = Column(0);
        }

        None
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type IntoIter = GridIterator<'a, T>;
    type Item = Indexed<&'a Option<T>>;

    #[inline]
    fn into_iter(self) -> GridIterator<'a, T> {
        self.iter()
    }
}

/// Direct access to the row at `line`.
///
/// Panics when `line` is out of range; [`Grid::row`] is the checked
/// equivalent.
impl<T> Index<Line> for Grid<T> {
    type Output = Row<T>;

    #[inline]
    fn index(&self, line: Line) -> &Row<T> {
        &self.raw[line.0]
    }
}

impl<T> IndexMut<Line> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, line: Line) -> &mut Row<T> {
        &mut self.raw[line.0]
    }
}

impl<'point, T> Index<&'point Point> for Grid<T> {
    type Output = Option<T>;

    #[inline]
    fn index(&self, point: &Point) -> &Option<T> {
        &self[point.line][point.column]
    }
}

impl<'point, T> IndexMut<&'point Point> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, point: &Point) -> &mut Option<T> {
        &mut self[point.line][point.column]
    }
}
