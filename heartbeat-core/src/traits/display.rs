//! Display driver trait for the LED matrix chain

use heartbeat_protocol::{Command, ROW_COUNT};

use crate::image::ImageBuffer;

/// Trait for an 8x32 matrix made of chained drivers
///
/// Both operations are complete transactions: when they return, every
/// chip in the chain has latched the new value.
pub trait MatrixDisplay {
    /// Error type for display operations
    type Error;

    /// Write the same control command to every chip
    fn send_command(&mut self, cmd: Command, value: u8) -> Result<(), Self::Error>;

    /// Write one row across the chain
    ///
    /// - `row`: Row number (0-7)
    /// - `bitmap`: 32 columns, bit 31 leftmost
    fn send_row(&mut self, row: u8, bitmap: u32) -> Result<(), Self::Error>;
}

impl<T: MatrixDisplay + ?Sized> MatrixDisplay for &mut T {
    type Error = T::Error;

    fn send_command(&mut self, cmd: Command, value: u8) -> Result<(), Self::Error> {
        (**self).send_command(cmd, value)
    }

    fn send_row(&mut self, row: u8, bitmap: u32) -> Result<(), Self::Error> {
        (**self).send_row(row, bitmap)
    }
}

/// Typed helpers on top of the two raw operations
pub trait MatrixDisplayExt: MatrixDisplay {
    /// Push a whole image, rows top to bottom, rendered symmetric
    fn draw(&mut self, image: &ImageBuffer) -> Result<(), Self::Error> {
        for (row, bitmap) in image.rendered() {
            self.send_row(row, bitmap)?;
        }
        Ok(())
    }

    /// Turn every LED off
    fn clear(&mut self) -> Result<(), Self::Error> {
        for row in 0..ROW_COUNT as u8 {
            self.send_row(row, 0)?;
        }
        Ok(())
    }

    /// Set brightness (0-15)
    fn set_brightness(&mut self, level: u8) -> Result<(), Self::Error> {
        self.send_command(Command::Intensity, level & 0x0F)
    }

    /// Leave (`true`) or enter (`false`) shutdown mode
    fn set_power(&mut self, on: bool) -> Result<(), Self::Error> {
        self.send_command(Command::Shutdown, on as u8)
    }

    /// Light every LED regardless of the row registers
    fn set_test_mode(&mut self, on: bool) -> Result<(), Self::Error> {
        self.send_command(Command::DisplayTest, on as u8)
    }

    /// Number of scanned rows (1-8)
    fn set_scan_rows(&mut self, rows: u8) -> Result<(), Self::Error> {
        let rows = rows.clamp(1, ROW_COUNT as u8);
        self.send_command(Command::ScanLimit, rows - 1)
    }

    /// Raw segment data (`false`) or BCD decoding on every digit (`true`)
    fn set_decode(&mut self, bcd: bool) -> Result<(), Self::Error> {
        self.send_command(Command::DecodeMode, if bcd { 0xFF } else { 0x00 })
    }
}

// Blanket implementation for all MatrixDisplay types
impl<T: MatrixDisplay + ?Sized> MatrixDisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Write {
        Command(Command, u8),
        Row(u8, u32),
    }

    #[derive(Default)]
    struct Recorder {
        writes: Vec<Write, 16>,
    }

    impl MatrixDisplay for Recorder {
        type Error = ();

        fn send_command(&mut self, cmd: Command, value: u8) -> Result<(), ()> {
            self.writes.push(Write::Command(cmd, value)).map_err(|_| ())
        }

        fn send_row(&mut self, row: u8, bitmap: u32) -> Result<(), ()> {
            self.writes.push(Write::Row(row, bitmap)).map_err(|_| ())
        }
    }

    #[test]
    fn test_draw_sends_rendered_rows_in_order() {
        let mut image = ImageBuffer::new();
        image.set_row(0, 0x0000_8000);

        let mut display = Recorder::default();
        display.draw(&image).unwrap();

        assert_eq!(display.writes.len(), ROW_COUNT);
        assert_eq!(display.writes[0], Write::Row(0, 0x0001_8000));
        for (i, write) in display.writes.iter().enumerate() {
            assert!(matches!(write, Write::Row(row, _) if *row as usize == i));
        }
    }

    #[test]
    fn test_typed_commands() {
        let mut display = Recorder::default();
        display.set_brightness(0x1F).unwrap();
        display.set_power(true).unwrap();
        display.set_test_mode(false).unwrap();
        display.set_scan_rows(8).unwrap();
        display.set_decode(false).unwrap();

        assert_eq!(
            display.writes.as_slice(),
            &[
                Write::Command(Command::Intensity, 0x0F),
                Write::Command(Command::Shutdown, 0x01),
                Write::Command(Command::DisplayTest, 0x00),
                Write::Command(Command::ScanLimit, 0x07),
                Write::Command(Command::DecodeMode, 0x00),
            ]
        );
    }

    #[test]
    fn test_scan_rows_clamped() {
        let mut display = Recorder::default();
        display.set_scan_rows(0).unwrap();
        display.set_scan_rows(20).unwrap();

        assert_eq!(
            display.writes.as_slice(),
            &[
                Write::Command(Command::ScanLimit, 0),
                Write::Command(Command::ScanLimit, 7),
            ]
        );
    }

    #[test]
    fn test_clear_blanks_all_rows() {
        let mut display = Recorder::default();
        display.clear().unwrap();

        assert_eq!(display.writes.len(), ROW_COUNT);
        assert!(display
            .writes
            .iter()
            .all(|w| matches!(w, Write::Row(_, 0))));
    }
}
