//! Replay of a circular status-word log.
//!
//! The firmware keeps the last [`PHYS_STATE_SIZE`](crate::PHYS_STATE_SIZE)
//! status words in a ring and overwrites the oldest slot on every update.
//! Replaying from the write position therefore yields the words oldest first.
//! The walk starts at `start`, wraps modulo the ring capacity and stops after
//! the slot just before `start`, so every slot is visited exactly once.

use crate::error::{Error, Result};
use crate::flags::FlagTable;
use serde::Serialize;
use std::fmt;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// One decoded slot of the ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayRecord<'a> {
    /// Position of the slot in the ring.
    pub index: usize,
    pub raw: u16,
    pub flags: Vec<&'a str>,
}

impl fmt::Display for ReplayRecord<'_> {
    /// `<raw> <flag> <flag> ... ` with a trailing space after every field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.raw)?;
        for flag in &self.flags {
            write!(f, "{} ", flag)?;
        }
        Ok(())
    }
}

/// Iterator over the records of a ring, in circular order from the start slot.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    buffer: &'a [u16],
    table: &'a FlagTable,
    cursor: usize,
    end: usize,
    remaining: usize,
}

impl Replay<'_> {
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Last slot the replay will visit.
    pub fn end(&self) -> usize {
        self.end
    }
}

impl<'a> Iterator for Replay<'a> {
    type Item = ReplayRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let index = self.cursor;
        let raw = self.buffer[index];
        let flags = self.table.decode(raw);
        trace!(index, raw, ?flags, "Decoded ring slot");

        // Body first, then the termination check: a one-slot ring still yields its slot.
        if index == self.end {
            self.remaining = 0;
        } else {
            self.cursor = (index + 1) % self.buffer.len();
            self.remaining -= 1;
        }

        Some(ReplayRecord { index, raw, flags })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Replay<'_> {}

impl FusedIterator for Replay<'_> {}

/// Start a replay of `buffer` at slot `start`, decoding each word with `table`.
///
/// The ring capacity is the buffer length. Fails with
/// [`Error::StartOutOfRange`] if `start` is not a valid slot, which includes
/// every `start` on an empty buffer.
pub fn replay<'a>(buffer: &'a [u16], start: usize, table: &'a FlagTable) -> Result<Replay<'a>> {
    let capacity = buffer.len();
    if start >= capacity {
        return Err(Error::StartOutOfRange { start, capacity });
    }

    let end = (start + capacity - 1) % capacity;
    debug!(start, end, capacity, "Replaying status ring");

    Ok(Replay {
        buffer,
        table,
        cursor: start,
        end,
        remaining: capacity,
    })
}
