//! # The Data Logger
//!
//! This module ties the storage, format, journal and schema layers together
//! into the public [`DataLog`] type: a crash-safe, append-only CSV logger
//! over a block-erasable medium that doubles as a host-readable document.
//!
//! ## Append Pipeline
//!
//! ```text
//! log("temp", "21.5")          caller
//!     │
//!     ▼
//! ColumnSet                    clean fields, keep column order
//!     │  end_row()
//!     ▼
//! append path                  page-chunked programs, pre-erase on spill
//!     │  block boundary crossed
//!     ▼
//! JournalRing::commit          new live entry, then invalidate the old
//! ```
//!
//! ## Durability Ordering
//!
//! Three orderings make a power cut at any byte recoverable:
//!
//! 1. Row bytes are programmed (write-through, no dirty cache) before the
//!    journal commit that covers them.
//! 2. A new live journal entry is durable before its predecessor is
//!    invalidated; recovery resolves two live entries to the later one.
//! 3. A new heading line is durable before the first row that references
//!    its added column.
//!
//! Sub-block progress is never journalled. Mount instead byte-scans the
//! data region forward from the last committed length and adopts every
//! programmed byte it finds, losing at most the bytes of a program that
//! never completed.
//!
//! ## Heading Persistence
//!
//! The current column list lives in two places. The *recovery scratch*
//! sits in the metadata page right after the metadata record: on every
//! schema change the previous heading line there is tombstoned with zero
//! bytes and the new complete line written after it; mount parses this area
//! (skip zeros, read to `0xFF`). The *CSV stream* in the data region gets
//! the same tombstone run appended, followed by the new heading line, so a
//! host reading the container sees each schema era introduced by its own
//! header row, with retired headers blanked out.
//!
//! ## Concurrency
//!
//! Single writer, cooperative. Every public operation serialises on one
//! `parking_lot::Mutex` around the whole mutable state; host-side readers
//! are out-of-band and see either a valid prefix of committed rows or a
//! mid-invalidation medium. `DataLog` is `Send + Sync`.
//!
//! ## Lifecycle
//!
//! State is undefined before the first operation; every mutating entry
//! point runs the idempotent mount-or-format step first. `clear` reformats
//! in place; `invalidate` zeroes the metadata so the next operation
//! reformats lazily.

use std::sync::Arc;
use std::time::Instant;

use eyre::ensure;
use parking_lot::Mutex;
use tracing::{debug, info, warn};
use zerocopy::IntoBytes;

use crate::config::{
    BLOCK_SIZE, FULL_MARKER, JOURNAL_PAGES, META_RECORD_SIZE, VOLUME_FILE_NAME,
};
use crate::error::{Error, Result};
use crate::format::header::HEADER_HTML;
use crate::format::MetaRecord;
use crate::journal::JournalRing;
use crate::schema::{clean_field, clean_text, render_timestamp, ColumnSet, TimeUnit};
use crate::storage::{BlockCache, NvmDevice, VolumeConfig};

/// Monotonic time source for the synthesised timestamp column.
pub trait Clock: Send + Sync {
    /// Milliseconds elapsed since an arbitrary fixed origin.
    fn now_millis(&self) -> u64;
}

/// Default clock: milliseconds since the logger was constructed.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Builder for [`DataLog`].
pub struct DataLogBuilder {
    nvm: Arc<dyn NvmDevice>,
    journal_pages: u32,
    clock: Arc<dyn Clock>,
}

impl DataLogBuilder {
    /// Number of pages reserved for the journal ring at format time.
    pub fn journal_pages(mut self, pages: u32) -> Self {
        self.journal_pages = pages;
        self
    }

    /// Replaces the timestamp clock. Mainly useful for tests.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> DataLog {
        DataLog {
            inner: Mutex::new(Inner {
                cache: BlockCache::new(Arc::clone(&self.nvm)),
                clock: self.clock,
                journal_pages: self.journal_pages,
                start_address: 0,
                journal_start: 0,
                data_start: 0,
                data_end: 0,
                log_end: 0,
                heading_start: 0,
                heading_length: 0,
                journal: JournalRing::new(0, 0, 1),
                columns: ColumnSet::default(),
                time_unit: TimeUnit::None,
                initialized: false,
                row_open: false,
                full: false,
            }),
        }
    }
}

/// Append-only CSV logger over a block-erasable non-volatile medium.
///
/// ```ignore
/// use std::sync::Arc;
/// use flashlog::{DataLog, SimNvm, TimeUnit};
///
/// let nvm = Arc::new(SimNvm::new(4096, 32));
/// let log = DataLog::new(nvm);
///
/// log.set_time_unit(TimeUnit::Seconds)?;
/// log.begin_row()?;
/// log.log("temperature", "21.5")?;
/// log.log("humidity", "40")?;
/// log.end_row()?;
/// ```
pub struct DataLog {
    inner: Mutex<Inner>,
}

impl DataLog {
    /// Creates a logger over `nvm` with default settings.
    pub fn new(nvm: Arc<dyn NvmDevice>) -> Self {
        Self::builder(nvm).build()
    }

    /// Starts building a logger over `nvm`.
    pub fn builder(nvm: Arc<dyn NvmDevice>) -> DataLogBuilder {
        DataLogBuilder {
            nvm,
            journal_pages: JOURNAL_PAGES,
            clock: Arc::new(SystemClock::new()),
        }
    }

    /// Mounts an existing log store or formats a fresh one. Idempotent;
    /// every other operation runs this implicitly.
    pub fn init(&self) -> Result<()> {
        self.inner.lock().ensure_init()
    }

    /// Selects the timestamp column granularity for subsequent rows.
    pub fn set_time_unit(&self, unit: TimeUnit) -> Result<()> {
        self.inner.lock().set_time_unit(unit)
    }

    /// Opens a new row. An already-open row is implicitly completed first.
    pub fn begin_row(&self) -> Result<()> {
        self.inner.lock().begin_row()
    }

    /// Sets `key`'s cell in the current row, opening a row if none is open
    /// and appending a new column if `key` is unknown.
    pub fn log(&self, key: &str, value: &str) -> Result<()> {
        self.inner.lock().log(key, value)
    }

    /// Completes the current row and pushes it to persistent storage.
    pub fn end_row(&self) -> Result<()> {
        self.inner.lock().end_row()
    }

    /// Appends free-form text to the log, bypassing the row machinery.
    /// Commas and newlines survive; `-->` and tabs are still substituted.
    pub fn log_string(&self, s: &str) -> Result<()> {
        self.inner.lock().log_string(s)
    }

    /// Reformats the log store, discarding all recorded data. With
    /// `full_erase` every data page is erased; otherwise only the pages up
    /// to the start of the data region are, and stale data beyond is
    /// unreachable but left in place to save wear.
    pub fn clear(&self, full_erase: bool) -> Result<()> {
        self.inner.lock().format(full_erase)
    }

    /// Marks the log store invalid. The next operation will observe absent
    /// metadata and format a fresh log.
    pub fn invalidate(&self) -> Result<()> {
        self.inner.lock().invalidate()
    }

    /// Whether a valid log store is present on the medium.
    pub fn is_present(&self) -> bool {
        self.inner.lock().is_present().unwrap_or(false)
    }

    /// Whether the log has latched its FULL state this session.
    pub fn is_full(&self) -> bool {
        self.inner.lock().full
    }
}

struct Inner {
    cache: BlockCache,
    clock: Arc<dyn Clock>,
    journal_pages: u32,
    start_address: u32,
    journal_start: u32,
    data_start: u32,
    data_end: u32,
    log_end: u32,
    heading_start: u32,
    heading_length: u32,
    journal: JournalRing,
    columns: ColumnSet,
    time_unit: TimeUnit,
    initialized: bool,
    row_open: bool,
    full: bool,
}

/// Cache blocks must tile adapter pages exactly; every address computation
/// in the journal and the data writer assumes it.
fn check_geometry(page_size: u32) -> eyre::Result<()> {
    ensure!(
        page_size as usize % BLOCK_SIZE == 0,
        "page size {page_size} is not a multiple of the cache block size {BLOCK_SIZE}"
    );
    Ok(())
}

impl Inner {
    fn page_size(&self) -> u32 {
        self.cache.nvm().page_size()
    }

    fn ensure_init(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        if self.probe_metadata()? {
            self.mount()
        } else {
            self.format(false)
        }
    }

    fn is_present(&mut self) -> Result<bool> {
        if self.initialized {
            return Ok(true);
        }
        self.probe_metadata()
    }

    /// Direct-reads and validates the metadata record, adopting its region
    /// boundaries on success. Bypasses the cache so a probe of a stale or
    /// absent store does not pollute it.
    fn probe_metadata(&mut self) -> Result<bool> {
        let nvm = Arc::clone(self.cache.nvm());
        let page_size = nvm.page_size();
        let header_len = HEADER_HTML.len() as u32;

        self.start_address = if header_len % page_size == 0 {
            header_len
        } else {
            (1 + header_len / page_size) * page_size
        };
        self.journal_start = self.start_address + page_size;

        let mut raw = [0u8; META_RECORD_SIZE];
        nvm.read(self.start_address, &mut raw)?;
        let record = MetaRecord::from_bytes(&raw)?;

        let data_start = record.data_start();
        let log_end = record.log_end();
        let valid = record.version_matches()
            && data_start >= self.start_address + 2 * page_size
            && data_start < log_end
            && log_end < nvm.flash_end();

        if valid {
            self.data_start = data_start;
            self.log_end = log_end;
        }
        Ok(valid)
    }

    /// Reconstructs the durable state of a validated store: journal scan,
    /// uncommitted-tail byte scan, heading parse.
    fn mount(&mut self) -> Result<()> {
        let page_size = self.page_size();
        check_geometry(page_size)?;

        self.journal_pages = (self.data_start - self.start_address) / page_size - 1;
        self.journal = JournalRing::new(self.journal_start, self.data_start, page_size);

        let committed = self.journal.scan(&mut self.cache)?;
        // A corrupt entry must not place the tail outside the data region.
        self.data_end = self.data_start.saturating_add(committed).min(self.log_end);

        // Walk past the committed length and adopt the uncommitted tail.
        while self.data_end < self.log_end {
            if self.cache.read_byte(self.data_end)? == 0xFF {
                break;
            }
            self.data_end += 1;
        }

        self.columns.reset();
        self.heading_start = 0;
        self.heading_length = 0;
        self.parse_headings()?;

        self.initialized = true;
        info!(
            data_end = self.data_end,
            committed,
            journal_head = self.journal.head(),
            columns = self.columns.len(),
            "mounted existing log store"
        );
        Ok(())
    }

    /// Parses the recovery scratch area beside the metadata record: skip
    /// tombstone zeros of retired schemas, then read the current heading
    /// line up to the first erased byte.
    fn parse_headings(&mut self) -> Result<()> {
        let mut start = self.start_address + META_RECORD_SIZE as u32;
        while self.cache.read_byte(start)? == 0x00 {
            start += 1;
        }
        let mut end = start;
        while self.cache.read_byte(end)? != 0xFF {
            end += 1;
        }

        self.heading_length = end - start;
        if self.heading_length == 0 {
            return Ok(());
        }
        self.heading_start = start;

        let mut raw = vec![0u8; self.heading_length as usize];
        self.cache.read(start, &mut raw)?;

        let mut keys = Vec::new();
        let mut begin = 0usize;
        for (i, &b) in raw.iter().enumerate() {
            if b == b',' || b == b'\n' {
                keys.push(String::from_utf8_lossy(&raw[begin..i]).into_owned());
                begin = i + 1;
            }
        }
        self.columns.load_keys(keys);
        Ok(())
    }

    /// Formats a fresh log store in place.
    fn format(&mut self, full_erase: bool) -> Result<()> {
        let nvm = Arc::clone(self.cache.nvm());
        let page_size = nvm.page_size();
        check_geometry(page_size)?;

        let header_len = HEADER_HTML.len() as u32;
        self.start_address = if header_len % page_size == 0 {
            header_len
        } else {
            (1 + header_len / page_size) * page_size
        };
        self.journal_start = self.start_address + page_size;
        self.data_start = self.journal_start + self.journal_pages * page_size;
        self.data_end = self.data_start;
        self.log_end = nvm.flash_end() - page_size - 4;
        self.journal = JournalRing::new(self.journal_start, self.data_start, page_size);

        self.initialized = false;
        self.row_open = false;
        self.full = false;
        self.columns.reset();
        self.heading_start = 0;
        self.heading_length = 0;

        // Retire any FULL sentinel with a plain program; erasing its page
        // here would cost a wear cycle for four bytes.
        nvm.program(self.log_end, &[0u8; 4])?;

        self.cache.drop_all();
        let erase_limit = if full_erase { self.log_end } else { self.data_start };
        let mut page = nvm.flash_start();
        while page <= erase_limit {
            nvm.erase_page(page)?;
            page += page_size;
        }

        // The header goes straight to the medium; it is never read back,
        // so routing it through the cache would only evict useful blocks.
        nvm.program(nvm.flash_start(), &HEADER_HTML)?;

        let record = MetaRecord::new(self.data_start, self.log_end);
        self.cache.write(self.start_address, record.as_bytes())?;

        self.journal.format_head(&mut self.cache)?;

        nvm.set_configuration(&VolumeConfig {
            file_name: VOLUME_FILE_NAME.to_string(),
            file_size: nvm.flash_end() - nvm.flash_start() - page_size,
            visible: true,
        })?;
        nvm.remount()?;

        self.initialized = true;
        info!(
            data_start = self.data_start,
            log_end = self.log_end,
            full_erase,
            "formatted log store"
        );
        Ok(())
    }

    fn invalidate(&mut self) -> Result<()> {
        if self.is_present()? {
            warn!("invalidating log store");
            let nvm = self.cache.nvm();
            nvm.program(self.start_address, &[0u8; META_RECORD_SIZE])?;
            nvm.program(self.log_end, &[0u8; 4])?;
        }
        self.initialized = false;
        Ok(())
    }

    fn set_time_unit(&mut self, unit: TimeUnit) -> Result<()> {
        self.ensure_init()?;
        self.time_unit = unit;
        if let Some(name) = unit.column_name() {
            self.columns.ensure(name);
        }
        Ok(())
    }

    fn begin_row(&mut self) -> Result<()> {
        self.ensure_init()?;
        if self.row_open {
            // An open transaction is implicitly completed first; its
            // outcome is reported by the interrupted end_row, not here.
            let _ = self.end_row();
        }
        self.columns.reset_values();
        self.row_open = true;
        Ok(())
    }

    fn log(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_init()?;
        if !self.row_open {
            self.begin_row()?;
        }
        self.columns.put(clean_field(key), clean_field(value));
        Ok(())
    }

    fn end_row(&mut self) -> Result<()> {
        if !self.row_open {
            return Err(Error::InvalidState);
        }
        self.ensure_init()?;

        if let Some(name) = self.time_unit.column_name() {
            let stamp = render_timestamp(self.clock.now_millis(), self.time_unit);
            self.columns.put(clean_field(&name), clean_field(&stamp));
        }

        let mut outcome = Ok(());

        if self.columns.changed() {
            if self.heading_start == 0 {
                self.heading_start = self.start_address + META_RECORD_SIZE as u32;
            }
            let header = self.columns.render_header();
            let retired = self.heading_length;
            let tombstone = vec![0u8; retired as usize];
            debug!(header = header.trim_end(), retired, "column schema changed");

            // Recovery scratch: tombstone the previous heading line and
            // write the new one after it.
            if retired > 0 {
                self.cache.write(self.heading_start, &tombstone)?;
            }
            self.heading_start += retired;
            self.cache.write(self.heading_start, header.as_bytes())?;

            // CSV stream: the same tombstone run, then the new heading
            // line, appended so the host sees the schema change in place.
            if retired > 0 {
                if let Err(e) = self.append_raw(&tombstone) {
                    outcome = Err(e);
                }
            }
            if let Err(e) = self.append_text(&header) {
                outcome = Err(e);
            }

            self.heading_length = header.len() as u32;
            self.columns.clear_changed();
        }

        if let Some(row) = self.columns.render_row() {
            if let Err(e) = self.append_text(&row) {
                outcome = Err(e);
            }
        }

        self.row_open = false;

        if self.full {
            return Err(Error::NoResources);
        }
        outcome
    }

    fn log_string(&mut self, s: &str) -> Result<()> {
        self.ensure_init()?;
        self.append_text(s)
    }

    fn append_text(&mut self, s: &str) -> Result<()> {
        let cleaned = clean_text(s);
        self.append_raw(cleaned.as_bytes())
    }

    /// The data writer: page-chunked append with pre-erase on spill and a
    /// journal commit when the write crosses a cache-block boundary.
    fn append_raw(&mut self, bytes: &[u8]) -> Result<()> {
        let len = bytes.len() as u32;
        if len > self.log_end - self.data_end {
            self.latch_full()?;
            return Err(Error::NoResources);
        }

        let page_size = self.page_size();
        let old_data_end = self.data_end;
        let mut offset = 0usize;

        while offset < bytes.len() {
            let space_on_page = page_size - (self.data_end % page_size);
            let remaining = (bytes.len() - offset) as u32;
            let chunk = remaining.min(space_on_page) as usize;

            // About to fill or spill this page: the next one must be
            // erased before anything lands on it.
            if space_on_page <= remaining && self.data_end + space_on_page < self.log_end {
                let next_page = (self.data_end / page_size + 1) * page_size;
                self.cache.erase_page(next_page)?;
            }

            self.cache.write(self.data_end, &bytes[offset..offset + chunk])?;
            self.data_end += chunk as u32;
            offset += chunk;
        }

        let block = BLOCK_SIZE as u32;
        if self.data_end / block != old_data_end / block {
            let committed = ((self.data_end - self.data_start) / block) * block;
            self.journal.commit(&mut self.cache, committed)?;
        }

        Ok(())
    }

    fn latch_full(&mut self) -> Result<()> {
        if !self.full {
            warn!(
                data_end = self.data_end,
                log_end = self.log_end,
                "log store is full"
            );
            self.cache.write(self.log_end + 1, FULL_MARKER)?;
            self.full = true;
        }
        Ok(())
    }
}
