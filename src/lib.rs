//! A generic dense 2d grid container.
//!
//! `cellgrid` stores one value of an arbitrary element type per
//! (line, column) cell. The container supports structural resizing (line and
//! column insertion and deletion), bulk value assignment over rectangular
//! regions and stepped paths, and value-based equality, hashing, and cloning.
//! It is a storage primitive, not a numeric library; cell values are opaque
//! payloads and no arithmetic is performed on them.

#![warn(rust_2018_idioms, future_incompatible)]
#![deny(clippy::all, clippy::if_not_else, clippy::enum_glob_use)]

pub mod grid;
pub mod index;

pub use crate::grid::{Error, Grid, Row};
pub use crate::index::{Column, Line, Point};
