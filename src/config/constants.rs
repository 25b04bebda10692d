//! # Configuration Constants
//!
//! All tunables of the log store in one place. Several of these values are
//! part of the persisted format contract (the host-side viewer embedded in
//! the container header parses them out of raw bytes) and must never change
//! without a version bump of [`FORMAT_VERSION`].
//!
//! ## Dependency Graph
//!
//! ```text
//! BLOCK_SIZE (256 bytes)
//!       │
//!       ├─> journal commit granularity: every live journal entry value is
//!       │   a multiple of BLOCK_SIZE (committed bytes round down to it)
//!       │
//!       └─> META_RECORD_SIZE must fit in one block (the metadata record
//!           is read and written as a unit through the cache)
//!
//! JOURNAL_ENTRY_SIZE (8 bytes)
//!       │
//!       └─> must divide the page size so a ring page holds a whole number
//!           of entries; checked at format time against adapter geometry
//!
//! JOURNAL_PAGES (1)
//!       │
//!       └─> ring capacity = JOURNAL_PAGES * page_size / JOURNAL_ENTRY_SIZE
//! ```
//!
//! ## Format Contract
//!
//! `FORMAT_VERSION`, `VOLUME_FILE_NAME`, `JOURNAL_ENTRY_SIZE`, the FULL
//! marker and the metadata field encodings are parsed by the fixed script in
//! the container header. They are byte-exact constants, not preferences.

/// Cache block size in bytes. Also the journal's commit granularity.
pub const BLOCK_SIZE: usize = 256;

/// Number of resident blocks held by the write-through cache.
pub const CACHE_BLOCK_COUNT: usize = 4;

/// Default number of pages reserved for the journal ring.
pub const JOURNAL_PAGES: u32 = 1;

/// Size of one journal entry: 8 ASCII hex digits, no terminator.
pub const JOURNAL_ENTRY_SIZE: usize = 8;

/// On-medium metadata record size: 18-byte version + two 11-byte addresses.
pub const META_RECORD_SIZE: usize = 40;

/// Version string stored at the head of the metadata record. The first 17
/// bytes are compared on mount; the trailing newline keeps the record
/// legible when the host views the raw container.
pub const FORMAT_VERSION: &[u8; 18] = b"UBIT_LOG_FS_V_001\n";

/// Marker programmed at `log_end + 1` when the log latches its FULL state.
pub const FULL_MARKER: &[u8; 3] = b"FUL";

/// Filename under which the container is presented to the host.
pub const VOLUME_FILE_NAME: &str = "MY_DATA.HTM";

/// Byte substituted for sequences that would corrupt the host container
/// (`-->`, tabs, and in delimited fields commas and newlines).
pub const REPLACEMENT_BYTE: u8 = b'#';

const _: () = assert!(META_RECORD_SIZE <= BLOCK_SIZE);
const _: () = assert!(BLOCK_SIZE % JOURNAL_ENTRY_SIZE == 0);
const _: () = assert!(BLOCK_SIZE.is_power_of_two());
const _: () = assert!(FORMAT_VERSION.len() == 18);
