// Frame sequencing: throttled cycling through one spritesheet row

use super::{Frame, SpriteSheet};

/// Cycles through a fixed run of frames taken from one row of a
/// [`SpriteSheet`].
///
/// The cursor `key` always stays in `[0, frame_count)` and wraps modulo the
/// frame count. `slowdown` is the number of extra calls each frame is held
/// for, so a frame is returned for `slowdown + 1` consecutive [`advance`]
/// calls before the cursor moves on.
///
/// [`advance`]: FrameSequencer::advance
#[derive(Debug, Clone)]
pub struct FrameSequencer {
    sheet: SpriteSheet,
    row: u32,
    frame_count: u32,
    key: u32,
    subkey: u32,
    slowdown: u32,
}

impl FrameSequencer {
    /// Create a sequencer over `frame_count` frames of `row`, advancing on
    /// every call.
    ///
    /// Panics if the run does not fit the sheet's grid.
    pub fn new(sheet: SpriteSheet, row: u32, frame_count: u32) -> Self {
        assert!(frame_count > 0, "animation needs at least one frame");
        assert!(
            frame_count <= sheet.columns(),
            "{} frames do not fit a {}-column sheet",
            frame_count,
            sheet.columns(),
        );
        assert!(
            row < sheet.rows(),
            "row {} outside a {}-row sheet",
            row,
            sheet.rows(),
        );

        Self {
            sheet,
            row,
            frame_count,
            key: 0,
            subkey: 0,
            slowdown: 0,
        }
    }

    /// Hold every frame for `slowdown` extra calls
    pub fn with_slowdown(mut self, slowdown: u32) -> Self {
        self.slowdown = slowdown;
        self
    }

    /// Jump the cursor to `index` and return that frame.
    ///
    /// This is not read-only: the cursor is left at `index`. Out-of-range
    /// indices panic.
    pub fn frame_at(&mut self, index: u32) -> Frame {
        assert!(
            index < self.frame_count,
            "frame {} outside animation of {} frames",
            index,
            self.frame_count,
        );
        self.key = index;
        self.sheet.frame(index, self.row)
    }

    /// Return the frame under the cursor, then step the sequence.
    ///
    /// The sub-step counter ticks up until it reaches the slowdown
    /// threshold; only then does the cursor move, wrapping at the end of
    /// the run.
    pub fn advance(&mut self) -> Frame {
        let frame = self.sheet.frame(self.key, self.row);
        if self.subkey < self.slowdown {
            self.subkey += 1;
        } else {
            self.key = (self.key + 1) % self.frame_count;
            self.subkey = 0;
        }
        frame
    }

    /// The frame under the cursor, without stepping the sequence
    pub fn current(&mut self) -> Frame {
        self.frame_at(self.key)
    }

    /// Rewind to frame 0 and clear the sub-step counter
    pub fn reset(&mut self) {
        self.key = 0;
        self.subkey = 0;
    }

    /// Switch to another sheet row, keeping the cursor and cadence.
    ///
    /// Lets direction or state variants of one animation share a timing
    /// state. Panics if the row is outside the sheet.
    pub fn set_row(&mut self, row: u32) {
        assert!(
            row < self.sheet.rows(),
            "row {} outside a {}-row sheet",
            row,
            self.sheet.rows(),
        );
        self.row = row;
    }

    /// Number of frames in the run
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Current cursor position
    pub fn frame_index(&self) -> u32 {
        self.key
    }

    /// Sheet row the frames are taken from
    pub fn row(&self) -> u32 {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// 4-column, 2-row sheet of 32x32 frames; each frame's red channel
    /// encodes its column so returned frames are distinguishable.
    fn test_sheet() -> SpriteSheet {
        let mut img = RgbaImage::new(128, 64);
        for y in 0..64 {
            for x in 0..128 {
                img.put_pixel(x, y, Rgba([(x / 32) as u8, (y / 32) as u8, 0, 255]));
            }
        }
        SpriteSheet::new(img, 32, 32)
    }

    fn column_of(frame: &Frame) -> u8 {
        frame.pixel(0, 0)[0]
    }

    #[test]
    fn test_advance_holds_each_frame_for_slowdown_plus_one_calls() {
        let mut seq = FrameSequencer::new(test_sheet(), 1, 4).with_slowdown(2);

        let produced: Vec<u8> = (0..12).map(|_| column_of(&seq.advance())).collect();
        assert_eq!(produced, vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3]);

        // 13th call wraps back to the first frame
        assert_eq!(column_of(&seq.advance()), 0);
    }

    #[test]
    fn test_advance_without_slowdown_steps_every_call() {
        let mut seq = FrameSequencer::new(test_sheet(), 0, 4);

        let produced: Vec<u8> = (0..5).map(|_| column_of(&seq.advance())).collect();
        assert_eq!(produced, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_full_cycle_is_periodic() {
        let mut seq = FrameSequencer::new(test_sheet(), 0, 4).with_slowdown(2);

        // N * (slowdown + 1) calls return the sequencer to its initial state
        for _ in 0..12 {
            seq.advance();
        }
        assert_eq!(seq.frame_index(), 0);
        assert_eq!(column_of(&seq.advance()), 0);
    }

    #[test]
    fn test_current_is_idempotent() {
        let mut seq = FrameSequencer::new(test_sheet(), 0, 4).with_slowdown(1);
        seq.advance();
        seq.advance(); // frame 0's hold consumed, cursor now at frame 1

        for _ in 0..4 {
            assert_eq!(column_of(&seq.current()), 1);
        }
        assert_eq!(seq.frame_index(), 1);
        // The hold counter was untouched: frame 1 still gets its full hold
        assert_eq!(column_of(&seq.advance()), 1);
        assert_eq!(column_of(&seq.advance()), 1);
        assert_eq!(column_of(&seq.advance()), 2);
    }

    #[test]
    fn test_frame_at_moves_the_cursor() {
        let mut seq = FrameSequencer::new(test_sheet(), 0, 4);

        assert_eq!(column_of(&seq.frame_at(2)), 2);
        assert_eq!(seq.frame_index(), 2);
        assert_eq!(column_of(&seq.advance()), 2);
        assert_eq!(column_of(&seq.advance()), 3);
    }

    #[test]
    fn test_reset_rewinds_to_frame_zero() {
        let mut seq = FrameSequencer::new(test_sheet(), 0, 4).with_slowdown(3);
        for _ in 0..7 {
            seq.advance();
        }

        seq.reset();
        assert_eq!(seq.frame_index(), 0);
        assert_eq!(column_of(&seq.current()), 0);
        // Sub-step counter was cleared too: full hold starts over
        let produced: Vec<u8> = (0..4).map(|_| column_of(&seq.advance())).collect();
        assert_eq!(produced, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_set_row_keeps_cursor() {
        let mut seq = FrameSequencer::new(test_sheet(), 0, 4);
        seq.advance();
        seq.set_row(1);

        assert_eq!(seq.row(), 1);
        assert_eq!(seq.frame_index(), 1);
        assert_eq!(seq.current().pixel(0, 0)[1], 1);
    }

    #[test]
    #[should_panic(expected = "outside animation")]
    fn test_frame_at_out_of_range_panics() {
        FrameSequencer::new(test_sheet(), 0, 4).frame_at(4);
    }

    #[test]
    #[should_panic(expected = "at least one frame")]
    fn test_zero_frames_rejected() {
        FrameSequencer::new(test_sheet(), 0, 0);
    }
}
