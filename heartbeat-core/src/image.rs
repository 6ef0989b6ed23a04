//! Image buffer
//!
//! Eight row bitmaps, top to bottom. The buffer holds the pattern as the
//! animations compute it; what the display shows is each row made
//! symmetric with [`bitmap::symmetric`].

use heartbeat_protocol::ROW_COUNT;

use crate::bitmap;

/// Eight rows of 32 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageBuffer {
    rows: [u32; ROW_COUNT],
}

impl ImageBuffer {
    /// All LEDs off
    pub const fn new() -> Self {
        Self {
            rows: [0; ROW_COUNT],
        }
    }

    /// Buffer with the given rows
    pub const fn from_rows(rows: [u32; ROW_COUNT]) -> Self {
        Self { rows }
    }

    /// Stored bitmap of a row
    ///
    /// # Panics
    /// If `row >= ROW_COUNT`.
    pub fn row(&self, row: usize) -> u32 {
        self.rows[row]
    }

    /// Overwrite a row
    ///
    /// # Panics
    /// If `row >= ROW_COUNT`.
    pub fn set_row(&mut self, row: usize, bitmap: u32) {
        self.rows[row] = bitmap;
    }

    /// All stored rows
    pub fn rows(&self) -> &[u32; ROW_COUNT] {
        &self.rows
    }

    /// The row as it appears on the matrix (mirrored into both halves)
    pub fn rendered_row(&self, row: usize) -> u32 {
        bitmap::symmetric(self.rows[row])
    }

    /// Every rendered row, top to bottom, paired with its index
    pub fn rendered(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, &row)| (i as u8, bitmap::symmetric(row)))
    }

    /// OR the row above into `row`, growing a filled silhouette downwards
    ///
    /// Row 0 has nothing above it and is left unchanged.
    pub fn merge_from_above(&mut self, row: usize) {
        if row > 0 && row < ROW_COUNT {
            self.rows[row] |= self.rows[row - 1];
        }
    }
}
