//! Heart animations
//!
//! An animation is a [`RowTransform`] run by a [`FrameSequence`]: for each
//! frame index, from a start value down to 0, every row of the image is
//! recomputed (bottom row first) before the frame is handed out.

mod pulse;
mod transforms;

pub use pulse::{PulseCurve, PulseStep, PULSE_STEPS};
pub use transforms::{DoubleHeart, MergeHearts, OneHeart, HEART};

use heartbeat_protocol::ROW_COUNT;

use crate::image::ImageBuffer;

/// Computes one row of one animation frame
pub trait RowTransform {
    /// New bitmap for `row` in frame `frame`
    ///
    /// `current` is the value the row holds before this frame. Transforms
    /// that generate from the template ignore it.
    fn apply(&self, row: usize, frame: u8, current: u32) -> u32;
}

impl<T: RowTransform + ?Sized> RowTransform for &T {
    fn apply(&self, row: usize, frame: u8, current: u32) -> u32 {
        (**self).apply(row, frame, current)
    }
}

/// Finite run of frames for one animation
///
/// Yields `start + 1` frames. Each item is the frame index together with a
/// snapshot of the fully updated image; the buffer is never handed out
/// half-written. Once exhausted it stays exhausted.
pub struct FrameSequence<'a, T> {
    image: &'a mut ImageBuffer,
    transform: T,
    next: Option<u8>,
}

impl<'a, T: RowTransform> FrameSequence<'a, T> {
    /// Start a sequence at frame `start`
    pub fn new(image: &'a mut ImageBuffer, start: u8, transform: T) -> Self {
        Self {
            image,
            transform,
            next: Some(start),
        }
    }

    /// Frames left to produce
    pub fn remaining(&self) -> usize {
        self.next.map_or(0, |frame| frame as usize + 1)
    }
}

impl<T: RowTransform> Iterator for FrameSequence<'_, T> {
    type Item = (u8, ImageBuffer);

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next?;

        for row in (0..ROW_COUNT).rev() {
            let current = self.image.row(row);
            self.image
                .set_row(row, self.transform.apply(row, frame, current));
        }

        self.next = frame.checked_sub(1);
        Some((frame, *self.image))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: RowTransform> ExactSizeIterator for FrameSequence<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the frame index into every row
    struct FrameStamp;

    impl RowTransform for FrameStamp {
        fn apply(&self, row: usize, frame: u8, _current: u32) -> u32 {
            (frame as u32) << 8 | row as u32
        }
    }

    /// Adds one to every row
    struct Increment;

    impl RowTransform for Increment {
        fn apply(&self, _row: usize, _frame: u8, current: u32) -> u32 {
            current + 1
        }
    }

    #[test]
    fn test_sequence_counts_down_inclusive() {
        let mut image = ImageBuffer::new();
        let frames: heapless::Vec<u8, 16> = FrameSequence::new(&mut image, 3, FrameStamp)
            .map(|(frame, _)| frame)
            .collect();

        assert_eq!(frames.as_slice(), &[3, 2, 1, 0]);
    }

    #[test]
    fn test_each_frame_fully_written() {
        let mut image = ImageBuffer::new();
        for (frame, snapshot) in FrameSequence::new(&mut image, 2, FrameStamp) {
            for row in 0..ROW_COUNT {
                assert_eq!(snapshot.row(row), (frame as u32) << 8 | row as u32);
            }
        }
        // Buffer keeps the last frame
        assert_eq!(image.row(5), 5);
    }

    #[test]
    fn test_transform_sees_previous_frame() {
        let mut image = ImageBuffer::new();
        let last = FrameSequence::new(&mut image, 6, Increment).last();

        assert_eq!(last.map(|(_, img)| img.row(0)), Some(7));
        assert_eq!(image.row(7), 7);
    }

    #[test]
    fn test_sequence_not_restartable() {
        let mut image = ImageBuffer::new();
        let mut seq = FrameSequence::new(&mut image, 0, FrameStamp);

        assert_eq!(seq.len(), 1);
        assert!(seq.next().is_some());
        assert_eq!(seq.len(), 0);
        assert!(seq.next().is_none());
        assert!(seq.next().is_none());
    }
}
