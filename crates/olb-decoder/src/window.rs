use std::fmt;

use tracing::{debug, trace};

use olb_wire::{Cursor, PREAMBLE_STRIDE, WireError};

use crate::error::DecodeError;

/// One declared-but-not-yet-verified byte region `[start, stop)`.
///
/// A window is created the instant a preamble announcing a region is
/// read: the content starts [`PREAMBLE_STRIDE`] bytes after the preamble
/// itself and spans the declared size. It flips to verified when a later
/// checkpoint finds the cursor exactly at `stop`, and is never otherwise
/// mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    start: usize,
    stop: usize,
    verified: bool,
}

impl Window {
    fn new(preamble_offset: usize, declared_size: usize) -> Self {
        let start = preamble_offset + PREAMBLE_STRIDE;
        Self {
            start,
            stop: start + declared_size,
            verified: false,
        }
    }

    /// Absolute offset where the declared content begins.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Absolute offset one past the declared content's last byte.
    pub fn stop(&self) -> usize {
        self.stop
    }

    pub fn byte_len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#010x} -> {:#010x}: {} byte(s){}",
            self.start,
            self.stop,
            self.byte_len(),
            if self.verified {
                " (verified by checkpoint)"
            } else {
                ""
            }
        )
    }
}

/// The set of open byte-window obligations of one structure's decode.
///
/// A tracker is created fresh for each structure and is visible only to
/// that structure and its trailing segments; nested records recurse with
/// trackers of their own. By the time the structure finishes, every
/// window here must have been verified by a checkpoint (or explicitly
/// removed by the structure that consumed it) — anything else is a
/// reported defect, not an ignorable condition.
#[derive(Debug, Default)]
pub struct WindowTracker {
    windows: Vec<Window>,
}

impl WindowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Open a window for a region announced by the preamble at
    /// `preamble_offset` declaring `declared_size` content bytes.
    ///
    /// Never fails; the returned copy carries the computed bounds.
    pub fn open(&mut self, preamble_offset: usize, declared_size: usize) -> Window {
        let window = Window::new(preamble_offset, declared_size);
        trace!("opened window {window}");
        self.windows.push(window);
        window
    }

    pub fn find_by_start(&self, offset: usize) -> Option<&Window> {
        self.windows.iter().find(|w| w.start == offset)
    }

    pub fn find_by_stop(&self, offset: usize) -> Option<&Window> {
        self.windows.iter().find(|w| w.stop == offset)
    }

    /// Remove the first window starting at `offset`; reports whether one
    /// was found.
    pub fn remove_by_start(&mut self, offset: usize) -> bool {
        match self.windows.iter().position(|w| w.start == offset) {
            Some(index) => {
                self.windows.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the first window stopping at `offset`; reports whether one
    /// was found.
    pub fn remove_by_stop(&mut self, offset: usize) -> bool {
        match self.windows.iter().position(|w| w.stop == offset) {
            Some(index) => {
                self.windows.remove(index);
                true
            }
            None => false,
        }
    }

    /// Verify that `offset` lands exactly on some window's stop.
    ///
    /// A match marks that window verified. No match while obligations
    /// exist means a decoder consumed the wrong number of bytes — fatal
    /// for the enclosing structure. An empty tracker always succeeds:
    /// there is nothing to contradict yet.
    ///
    /// # Errors
    ///
    /// [`DecodeError::CheckpointMismatch`] as described above.
    pub fn checkpoint(&mut self, offset: usize) -> Result<(), DecodeError> {
        if let Some(window) = self.windows.iter_mut().find(|w| w.stop == offset) {
            window.verified = true;
            trace!("checkpoint at {offset:#010x} verified a declared region");
            return Ok(());
        }
        if self.windows.is_empty() {
            trace!("checkpoint at {offset:#010x}: no open obligations");
            return Ok(());
        }
        Err(DecodeError::CheckpointMismatch { offset })
    }

    /// End-of-structure check that every window was individually
    /// verified.
    ///
    /// A structure that under-shoots overall but happens to land on one
    /// window's stop by coincidence must still have visited every
    /// declared sub-region; this is what catches it.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnverifiedWindows`] naming every offending range.
    pub fn sanitize(&self) -> Result<(), DecodeError> {
        let ranges: Vec<(usize, usize)> = self
            .windows
            .iter()
            .filter(|w| !w.verified)
            .map(|w| (w.start, w.stop))
            .collect();

        if ranges.is_empty() {
            return Ok(());
        }
        for (start, stop) in &ranges {
            debug!("checkpoint missing for {start:#010x} -> {stop:#010x}");
        }
        Err(DecodeError::UnverifiedWindows { ranges })
    }

    /// Skip forward to the innermost window whose stop is still ahead of
    /// the cursor, emitting the skipped span as unparsed content.
    ///
    /// "Innermost" is most-recently-opened: the scan runs newest to
    /// oldest. If no window lies ahead, nothing is pending and the cursor
    /// stays put.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if the buffer ends inside the span to
    /// skip — the declaration pointed past the end of the file.
    pub fn advance_to_next_window(&self, cursor: &mut Cursor<'_>) -> Result<(), WireError> {
        let pos = cursor.offset();
        match self.windows.iter().rev().find(|w| pos < w.stop) {
            Some(window) => cursor.skip(window.stop - pos, "unparsed declared content"),
            None => {
                trace!("no declared region ahead of {pos:#010x}");
                Ok(())
            }
        }
    }

    /// End-of-structure reconciliation against the furthest declared end.
    ///
    /// Shortfall (`expected > actual`) means the structure implementation
    /// is too small — recoverable, because every field already read was
    /// read against assumptions that still matched. The gap is skipped
    /// with a diagnostic and decode continues. Reading past the end is
    /// fatal: see [`DecodeError::Overrun`]. An empty tracker is a no-op —
    /// every obligation was already discharged by explicit removal.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Overrun`], or a wire error if the shortfall skip
    /// runs off the buffer.
    pub fn reconcile_end(&self, cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
        let Some(expected) = self.windows.iter().map(|w| w.stop).max() else {
            trace!("no windows left to reconcile");
            return Ok(());
        };
        let actual = cursor.offset();

        if expected > actual {
            let shortfall = expected - actual;
            debug!(
                "structure implementation too small: expected end {expected:#010x}, \
                 ended at {actual:#010x}; too small by {shortfall} byte(s)"
            );
            cursor.skip(shortfall, "rest of declared structure")?;
        } else if actual > expected {
            return Err(DecodeError::Overrun { expected, actual });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Window arithmetic ─────────────────────────────────────────────────

    #[test]
    fn open_computes_bounds_from_preamble_offset() {
        let mut tracker = WindowTracker::new();
        for (preamble_offset, declared_size) in [(0, 0), (0, 20), (91, 7), (4096, 1)] {
            let window = tracker.open(preamble_offset, declared_size);
            assert_eq!(window.start(), preamble_offset + PREAMBLE_STRIDE);
            assert_eq!(window.stop(), window.start() + declared_size);
            assert_eq!(window.byte_len(), declared_size);
            assert!(!window.is_verified());
        }
        assert_eq!(tracker.len(), 4);
    }

    // ── Checkpoint ────────────────────────────────────────────────────────

    #[test]
    fn checkpoint_on_empty_tracker_never_fails() {
        let mut tracker = WindowTracker::new();
        for offset in [0, 1, 150, usize::MAX] {
            tracker.checkpoint(offset).unwrap();
        }
    }

    #[test]
    fn checkpoint_exactness() {
        // Window [100, 150): preamble at 91, 50 declared bytes.
        let mut tracker = WindowTracker::new();
        tracker.open(91, 50);

        assert!(matches!(
            tracker.checkpoint(149),
            Err(DecodeError::CheckpointMismatch { offset: 149 })
        ));
        assert!(matches!(
            tracker.checkpoint(151),
            Err(DecodeError::CheckpointMismatch { offset: 151 })
        ));

        tracker.checkpoint(150).unwrap();
        assert!(tracker.find_by_stop(150).unwrap().is_verified());
    }

    // ── End-of-structure reconciliation ───────────────────────────────────

    #[test]
    fn underrun_skips_exactly_the_shortfall() {
        let buf = [0u8; 256];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(180, "setup").unwrap();

        let mut tracker = WindowTracker::new();
        tracker.open(191, 0); // stop = 200

        tracker.reconcile_end(&mut cursor).unwrap();
        assert_eq!(cursor.offset(), 200);
    }

    #[test]
    fn overrun_is_fatal_with_magnitude() {
        let buf = [0u8; 256];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(210, "setup").unwrap();

        let mut tracker = WindowTracker::new();
        tracker.open(191, 0); // stop = 200

        let result = tracker.reconcile_end(&mut cursor);
        assert!(matches!(
            result,
            Err(DecodeError::Overrun {
                expected: 200,
                actual: 210
            })
        ));
    }

    #[test]
    fn exact_end_is_a_no_op() {
        let buf = [0u8; 256];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(200, "setup").unwrap();

        let mut tracker = WindowTracker::new();
        tracker.open(191, 0);

        tracker.reconcile_end(&mut cursor).unwrap();
        assert_eq!(cursor.offset(), 200);
    }

    #[test]
    fn reconcile_against_furthest_stop() {
        let buf = [0u8; 256];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(60, "setup").unwrap();

        let mut tracker = WindowTracker::new();
        tracker.open(11, 30); // stop = 50
        tracker.open(41, 50); // stop = 100

        tracker.reconcile_end(&mut cursor).unwrap();
        assert_eq!(cursor.offset(), 100);
    }

    #[test]
    fn reconcile_on_empty_tracker_is_a_no_op() {
        let buf = [0u8; 16];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(10, "setup").unwrap();

        let tracker = WindowTracker::new();
        tracker.reconcile_end(&mut cursor).unwrap();
        assert_eq!(cursor.offset(), 10);
    }

    // ── Sanitize ──────────────────────────────────────────────────────────

    #[test]
    fn sanitize_names_only_unverified_ranges() {
        // Two adjacent regions; only the first gets checkpointed.
        let mut tracker = WindowTracker::new();
        tracker.open(0, 1); // [9, 10)
        tracker.open(1, 20); // [10, 30)
        tracker.checkpoint(10).unwrap();

        match tracker.sanitize() {
            Err(DecodeError::UnverifiedWindows { ranges }) => {
                assert_eq!(ranges, vec![(10, 30)]);
            }
            other => panic!("expected UnverifiedWindows, got {other:?}"),
        }
    }

    #[test]
    fn sanitize_passes_when_all_verified() {
        let mut tracker = WindowTracker::new();
        tracker.open(0, 5);
        tracker.open(14, 6);
        tracker.checkpoint(14).unwrap();
        tracker.checkpoint(29).unwrap();
        tracker.sanitize().unwrap();
    }

    // ── Lookup / removal ──────────────────────────────────────────────────

    #[test]
    fn open_remove_find_roundtrip() {
        let mut tracker = WindowTracker::new();
        let a = tracker.open(0, 10); // [9, 19)
        let b = tracker.open(30, 5); // [39, 44)

        assert!(tracker.remove_by_start(a.start()));
        assert!(tracker.find_by_start(a.start()).is_none());
        assert!(tracker.find_by_stop(a.stop()).is_none());

        assert!(tracker.remove_by_stop(b.stop()));
        assert!(tracker.find_by_start(b.start()).is_none());
        assert!(tracker.find_by_stop(b.stop()).is_none());

        assert!(tracker.is_empty());
    }

    #[test]
    fn removal_of_absent_offsets_reports_false() {
        let mut tracker = WindowTracker::new();
        tracker.open(0, 10);
        assert!(!tracker.remove_by_start(1234));
        assert!(!tracker.remove_by_stop(1234));
        assert_eq!(tracker.len(), 1);
    }

    // ── Advance-to-next-window ────────────────────────────────────────────

    #[test]
    fn advance_picks_the_most_recently_opened_window_ahead() {
        let buf = [0u8; 128];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(40, "setup").unwrap();

        let mut tracker = WindowTracker::new();
        tracker.open(1, 90); // [10, 100), outer
        tracker.open(31, 20); // [40, 60), inner (newest)

        tracker.advance_to_next_window(&mut cursor).unwrap();
        assert_eq!(cursor.offset(), 60);
    }

    #[test]
    fn advance_with_nothing_ahead_stays_put() {
        let buf = [0u8; 128];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(100, "setup").unwrap();

        let mut tracker = WindowTracker::new();
        tracker.open(1, 40); // [10, 50), already behind

        tracker.advance_to_next_window(&mut cursor).unwrap();
        assert_eq!(cursor.offset(), 100);
    }

    #[test]
    fn window_display_marks_verification() {
        let mut tracker = WindowTracker::new();
        tracker.open(0, 20);
        assert!(!tracker.find_by_stop(29).unwrap().to_string().contains("verified"));
        tracker.checkpoint(29).unwrap();
        let text = tracker.find_by_stop(29).unwrap().to_string();
        assert!(text.contains("0x00000009"), "{text}");
        assert!(text.contains("verified by checkpoint"), "{text}");
    }
}
