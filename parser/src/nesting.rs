//! Tracking of nested items.
//!
//! An item with a defined length ends at a known offset,
//! and is closed as soon as the read cursor reaches it.
//! An item of undefined length stays open
//! until an item delimitation element is read.
//! The current depth is always the number of entries on the stack.

use crate::error::{NestingOverflowSnafu, Result};
use smallvec::SmallVec;

/// One open item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestEntry {
    /// The item ends at this absolute offset.
    Bounded(u64),
    /// The item ends at the next item delimiter.
    Open,
}

/// A stack of open items with a bounded depth.
///
/// ```
/// # use dcmstream_parser::nesting::NestingTracker;
/// let mut nesting = NestingTracker::new(8);
/// nesting.enter_item(Some(100)).unwrap();
/// nesting.enter_item(None).unwrap();
/// assert_eq!(nesting.depth(), 2);
/// assert_eq!(nesting.close_item(), 1);
/// assert_eq!(nesting.leave_passed(100), 1);
/// assert_eq!(nesting.depth(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct NestingTracker {
    stack: SmallVec<[NestEntry; 16]>,
    max_depth: usize,
}

impl NestingTracker {
    pub fn new(max_depth: usize) -> Self {
        NestingTracker {
            stack: SmallVec::new(),
            max_depth,
        }
    }

    /// The number of currently open items.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open an item, ending at `end` if its length is defined.
    ///
    /// Fails without changing the depth if the bound would be exceeded.
    pub fn enter_item(&mut self, end: Option<u64>) -> Result<()> {
        if self.stack.len() >= self.max_depth {
            return NestingOverflowSnafu {
                depth: self.stack.len() + 1,
            }
            .fail();
        }
        self.stack.push(match end {
            Some(end) => NestEntry::Bounded(end),
            None => NestEntry::Open,
        });
        Ok(())
    }

    /// Close every item whose end lies at or before `position`,
    /// along with everything nested inside it.
    ///
    /// Returns the number of items closed.
    pub fn leave_passed(&mut self, position: u64) -> usize {
        let outermost = self
            .stack
            .iter()
            .position(|entry| matches!(entry, NestEntry::Bounded(end) if *end <= position));
        match outermost {
            Some(index) => {
                let closed = self.stack.len() - index;
                self.stack.truncate(index);
                closed
            }
            None => 0,
        }
    }

    /// Close the innermost open-ended item
    /// and everything still nested inside it.
    ///
    /// Returns the number of items closed,
    /// which is zero on a stray delimiter.
    pub fn close_item(&mut self) -> usize {
        match self
            .stack
            .iter()
            .rposition(|entry| *entry == NestEntry::Open)
        {
            Some(index) => {
                let closed = self.stack.len() - index;
                self.stack.truncate(index);
                closed
            }
            None => 0,
        }
    }
}
