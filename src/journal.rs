//! # Journal Engine
//!
//! The journal is what makes appends crash-safe. The data region is pure
//! append-only text with no framing, so after a reset the logger has no way
//! to tell committed rows from a torn tail, except by asking the journal:
//! a circular ring of fixed 8-byte entries that records how many data bytes
//! were durable at the last commit.
//!
//! ## Entry Lifecycle
//!
//! Each slot moves one way through three states, driven entirely by
//! bit-clearing programs plus a page erase per lap:
//!
//! ```text
//! erased (0xFF…) ──program hex──> live ("0001A400") ──program zeros──> invalidated (0x00…)
//!        ▲                                                                   │
//!        └──────────────────── page erase on ring rotation ─────────────────┘
//! ```
//!
//! ## Commit Protocol
//!
//! Writing a commit record for a new committed length:
//!
//! 1. advance to the next slot, wrapping to the ring start when the slot
//!    would land on `data_start`;
//! 2. if the slot sits on a page boundary, erase that page (cache and
//!    medium) first;
//! 3. program the new live entry;
//! 4. only then invalidate the previous live entry.
//!
//! The new entry is durable before the old one dies, so a crash between
//! steps 3 and 4 leaves two live entries. Recovery tolerates that by
//! letting the later one win.
//!
//! ## Commit Granularity
//!
//! Entry values are multiples of the cache block size; sub-block progress
//! is deliberately not journalled. Mount recovers the finer tail by
//! byte-scanning the data region forward from the committed length.

use eyre::Result;
use tracing::debug;

use crate::config::JOURNAL_ENTRY_SIZE;
use crate::format::JournalEntry;
use crate::storage::BlockCache;

/// The circular commit ring between `journal_start` and `data_start`.
pub(crate) struct JournalRing {
    start: u32,
    data_start: u32,
    page_size: u32,
    head: u32,
}

impl JournalRing {
    pub fn new(start: u32, data_start: u32, page_size: u32) -> Self {
        Self {
            start,
            data_start,
            page_size,
            head: start,
        }
    }

    /// Address of the currently live entry.
    pub fn head(&self) -> u32 {
        self.head
    }

    /// Writes the initial live entry (value 0) at the ring start. Called
    /// once per format, after the ring pages have been erased.
    pub fn format_head(&mut self, cache: &mut BlockCache) -> Result<()> {
        self.head = self.start;
        cache.write(self.head, JournalEntry::with_value(0).as_bytes())
    }

    /// Records `committed` durable data bytes: programs a new live entry,
    /// then invalidates the previous one.
    pub fn commit(&mut self, cache: &mut BlockCache, committed: u32) -> Result<()> {
        let old_head = self.head;
        let mut next = self.head + JOURNAL_ENTRY_SIZE as u32;

        if next % self.page_size == 0 {
            if next == self.data_start {
                debug!(ring_start = self.start, "journal ring wrapping");
                next = self.start;
            }
            cache.erase_page(next)?;
        }

        cache.write(next, JournalEntry::with_value(committed).as_bytes())?;
        cache.write(old_head, JournalEntry::INVALIDATED.as_bytes())?;
        self.head = next;
        Ok(())
    }

    /// Scans the ring linearly and settles on the last live entry,
    /// returning its committed byte count (0 when no commit survives).
    ///
    /// The scan keeps going past the first live entry on purpose: a crash
    /// mid-commit leaves two live entries and the later one is the truth.
    /// An erased slot seen before any live entry also counts as live with
    /// value 0, so a ring whose first page was erased right before power
    /// loss still mounts as an empty-but-valid log.
    pub fn scan(&mut self, cache: &mut BlockCache) -> Result<u32> {
        self.head = self.start;
        let mut committed = 0u32;
        let mut valid = false;

        let mut addr = self.start;
        while addr < self.data_start {
            let mut raw = [0u8; JOURNAL_ENTRY_SIZE];
            cache.read(addr, &mut raw)?;
            let entry = JournalEntry(raw);

            if entry.is_erased() && valid {
                break;
            }
            if !entry.is_invalidated() {
                self.head = addr;
                committed = entry.value();
                valid = true;
            }

            addr += JOURNAL_ENTRY_SIZE as u32;
        }

        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{NvmDevice, SimNvm};
    use std::sync::Arc;

    const PAGE: u32 = 1024;

    fn ring_fixture() -> (Arc<SimNvm>, BlockCache, JournalRing) {
        let nvm = Arc::new(SimNvm::new(PAGE, 4));
        let cache = BlockCache::new(Arc::clone(&nvm) as Arc<dyn NvmDevice>);
        let ring = JournalRing::new(PAGE, 2 * PAGE, PAGE);
        (nvm, cache, ring)
    }

    #[test]
    fn format_head_writes_live_zero_entry() {
        let (nvm, mut cache, mut ring) = ring_fixture();
        ring.format_head(&mut cache).unwrap();

        assert_eq!(nvm.peek(PAGE, 8), b"00000000".to_vec());
        assert_eq!(ring.head(), PAGE);
    }

    #[test]
    fn commit_invalidates_predecessor_after_writing_successor() {
        let (nvm, mut cache, mut ring) = ring_fixture();
        ring.format_head(&mut cache).unwrap();
        ring.commit(&mut cache, 256).unwrap();

        assert_eq!(nvm.peek(PAGE, 8), vec![0x00; 8]);
        assert_eq!(nvm.peek(PAGE + 8, 8), b"00000100".to_vec());
        assert_eq!(ring.head(), PAGE + 8);
    }

    #[test]
    fn ring_wraps_and_erases_its_page() {
        let (nvm, mut cache, mut ring) = ring_fixture();
        ring.format_head(&mut cache).unwrap();

        let slots = PAGE / JOURNAL_ENTRY_SIZE as u32;
        for i in 1..=slots {
            ring.commit(&mut cache, i * 256).unwrap();
        }

        // The final commit wrapped to the ring start on a freshly erased
        // page; every other slot is erased except the invalidated one.
        assert_eq!(ring.head(), PAGE);
        assert_eq!(nvm.peek(PAGE, 8), b"00008000".to_vec());
        assert_eq!(nvm.peek(2 * PAGE - 8, 8), vec![0x00; 8]);
        assert!(nvm.peek(PAGE + 8, (PAGE - 16) as usize).iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn scan_settles_on_later_of_two_live_entries() {
        let (nvm, mut cache, mut ring) = ring_fixture();
        nvm.program(PAGE, b"00000100").unwrap();
        nvm.program(PAGE + 8, b"00000200").unwrap();

        let committed = ring.scan(&mut cache).unwrap();
        assert_eq!(committed, 0x200);
        assert_eq!(ring.head(), PAGE + 8);
    }

    #[test]
    fn scan_skips_invalidated_entries() {
        let (nvm, mut cache, mut ring) = ring_fixture();
        nvm.program(PAGE, &[0x00; 8]).unwrap();
        nvm.program(PAGE + 8, &[0x00; 8]).unwrap();
        nvm.program(PAGE + 16, b"00000300").unwrap();

        let committed = ring.scan(&mut cache).unwrap();
        assert_eq!(committed, 0x300);
        assert_eq!(ring.head(), PAGE + 16);
    }

    #[test]
    fn scan_of_erased_ring_reports_empty_log() {
        let (_nvm, mut cache, mut ring) = ring_fixture();

        let committed = ring.scan(&mut cache).unwrap();
        assert_eq!(committed, 0);
        assert_eq!(ring.head(), PAGE);
    }
}
