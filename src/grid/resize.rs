//! Grid structural resize.
//!
//! Insertion and deletion of whole lines and columns. Validation happens
//! before any mutation; a call that fails leaves the grid untouched.

use log::trace;

use crate::grid::row::Row;
use crate::grid::{Error, Grid};
use crate::index::{Column, Line};

impl<T: Clone> Grid<T> {
    /// Insert a template-filled line at `at`, shifting that line and all
    /// later ones down.
    ///
    /// `at == self.lines()` appends a line at the bottom.
    pub fn insert_line(&mut self, at: Line) -> Result<(), Error> {
        if at > self.lines {
            return Err(Error::OutOfBounds);
        }

        trace!("Inserting line at {}; lines={}", at, self.lines);

        let row = Row::new(self.cols, &self.template);
        self.raw.insert(at.0, row);
        self.lines += 1;

        Ok(())
    }

    /// Insert a line at `at` taking `cells` verbatim.
    ///
    /// `cells` must hold exactly one cell per column.
    pub fn insert_line_with(&mut self, at: Line, cells: Vec<T>) -> Result<(), Error> {
        if at > self.lines {
            return Err(Error::OutOfBounds);
        }
        if cells.len() != self.cols.0 {
            return Err(Error::SizeMismatch { expected: self.cols.0, got: cells.len() });
        }

        trace!("Inserting line at {} from {} cells", at, cells.len());

        self.raw.insert(at.0, Row::from_vec(cells));
        self.lines += 1;

        Ok(())
    }

    /// Delete the line at `at`, shifting later lines up.
    ///
    /// Always fails on an empty grid.
    pub fn delete_line(&mut self, at: Line) -> Result<(), Error> {
        if at >= self.lines {
            return Err(Error::OutOfBounds);
        }

        trace!("Deleting line {}; lines={}", at, self.lines);

        self.raw.remove(at.0);
        self.lines -= 1;

        Ok(())
    }

    /// Insert a template-filled column at `at` in every line, shifting that
    /// column and all later ones right.
    ///
    /// `at == self.columns()` appends a column at the right edge.
    pub fn insert_column(&mut self, at: Column) -> Result<(), Error> {
        if at > self.cols {
            return Err(Error::OutOfBounds);
        }

        trace!("Inserting column at {}; columns={}", at, self.cols);

        let template = self.template.clone();
        for row in &mut self.raw {
            row.insert(at, template.clone());
        }
        self.cols += 1;

        Ok(())
    }

    /// Insert a column at `at` taking `cells` verbatim, top line first.
    ///
    /// `cells` must hold exactly one cell per line.
    pub fn insert_column_with(&mut self, at: Column, cells: Vec<T>) -> Result<(), Error> {
        if at > self.cols {
            return Err(Error::OutOfBounds);
        }
        if cells.len() != self.lines.0 {
            return Err(Error::SizeMismatch { expected: self.lines.0, got: cells.len() });
        }

        trace!("Inserting column at {} from {} cells", at, cells.len());

        for (row, cell) in self.raw.iter_mut().zip(cells) {
            row.insert(at, cell);
        }
        self.cols += 1;

        Ok(())
    }

    /// Delete the column at `at` from every line, shifting later columns
    /// left.
    pub fn delete_column(&mut self, at: Column) -> Result<(), Error> {
        if at >= self.cols {
            return Err(Error::OutOfBounds);
        }

        trace!("Deleting column {}; columns={}", at, self.cols);

        for row in &mut self.raw {
            row.remove(at);
        }
        self.cols -= 1;

        Ok(())
    }
}
