//! Heart row transforms
//!
//! All three work on the unmirrored pattern; the symmetric heart only
//! appears once a row is rendered. Every transform commutes with
//! mirroring, so rendering late gives the same picture as mirroring first.

use heartbeat_protocol::ROW_COUNT;

use super::RowTransform;
use crate::bitmap;

/// Left half of a heart, one byte per row, top to bottom
///
/// ```text
/// 0x80  #.......
/// 0x40  .#......
/// 0x20  ..#.....
/// 0x10  ...#....
/// 0x08  ....#...
/// 0x08  ....#...
/// 0x88  #...#...
/// 0x70  .###....
/// ```
pub const HEART: [u8; ROW_COUNT] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x08, 0x88, 0x70];

/// A single heart closing in from the outer edges (frame 15) to the center (frame 0)
///
/// Row value is `HEART[row] << 8 >> frame`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneHeart;

impl RowTransform for OneHeart {
    fn apply(&self, row: usize, frame: u8, _current: u32) -> u32 {
        ((HEART[row] as u32) << 8)
            .checked_shr(frame as u32)
            .unwrap_or(0)
    }
}

/// Two hearts converging toward the center as the frame counts down
///
/// Row value is `(HEART[row] >> frame) | (HEART[row] << (16 - frame))`.
/// Frames past 16 only keep the right-shifted copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleHeart;

impl RowTransform for DoubleHeart {
    fn apply(&self, row: usize, frame: u8, _current: u32) -> u32 {
        let half = HEART[row] as u32;
        let frame = frame as u32;

        let inner = half.checked_shr(frame).unwrap_or(0);
        let outer = 16u32
            .checked_sub(frame)
            .and_then(|shift| half.checked_shl(shift))
            .unwrap_or(0);

        inner | outer
    }
}

/// Slides both 16-bit halves of every row one column toward the center
///
/// The low half moves up and the high half moves down; bits pushed past
/// the center fall off. The frame index is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeHearts;

impl RowTransform for MergeHearts {
    fn apply(&self, _row: usize, _frame: u8, current: u32) -> u32 {
        let (high, low) = bitmap::halves(current);
        bitmap::join(high >> 1, low << 1)
    }
}
