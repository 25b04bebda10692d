//! # On-Medium Format
//!
//! Pure codecs for the three records the logger persists, plus the fixed
//! host-visible header blob. Everything here is ASCII by design: the
//! container doubles as an HTML document, and the script embedded in the
//! header parses these records back out of raw text. The encodings are a
//! byte-exact contract: two implementations must produce identical bytes.
//!
//! ## Medium Layout
//!
//! ```text
//! flash_start
//! ┌──────────────────────────────────────────────┐
//! │ Header blob (2048 B, page-aligned up)        │  immutable HTML/script
//! ├──────────────────────────────────────────────┤ start_address
//! │ MetaRecord (40 B) │ heading scratch │ 0xFF…  │  one page
//! ├──────────────────────────────────────────────┤ journal_start
//! │ Journal ring: 8-byte entries                 │  JOURNAL_PAGES pages
//! ├──────────────────────────────────────────────┤ data_start
//! │ CSV body: header lines, rows, tombstones     │
//! │                  …                           │
//! │ log_end ─ "FUL" sentinel at log_end+1        │
//! ├──────────────────────────────────────────────┤ flash_end - page_size
//! │ reserved page                                │
//! └──────────────────────────────────────────────┘ flash_end
//! ```
//!
//! ## Records
//!
//! - [`MetaRecord`]: the format version plus the two region boundaries the
//!   host script needs, as human-legible hex (`"0x" + 8 digits + "\n"`).
//! - [`JournalEntry`]: 8 uppercase hex digits, most significant nibble
//!   first, no terminator. All-`0xFF` means erased, all-`0x00` means
//!   invalidated, anything else is a live commit record.
//! - [`header::HEADER_HTML`]: the opaque 2048-byte host viewer document.
//!
//! Parsing mirrors `strtoul(_, _, 16)`: the longest leading run of hex
//! digits wins and the first non-digit terminates the value. Recovery
//! relies on that leniency: a torn journal entry still parses to a usable
//! prefix value and the byte-scan fixes up the rest.

pub mod header;

use eyre::{ensure, Result};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::config::{FORMAT_VERSION, JOURNAL_ENTRY_SIZE, META_RECORD_SIZE};

/// Encodes `value` as exactly 8 uppercase hex digits, MSB first.
pub fn write_hex32(buf: &mut [u8; 8], value: u32) {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    for (i, slot) in buf.iter_mut().enumerate() {
        let shift = 28 - 4 * i;
        *slot = DIGITS[((value >> shift) & 0xF) as usize];
    }
}

/// Parses the longest hex-digit prefix of `bytes`, skipping one optional
/// `0x`/`0X` prefix. Returns 0 when no digit is present.
pub fn parse_hex(bytes: &[u8]) -> u32 {
    let digits = match bytes {
        [b'0', b'x' | b'X', rest @ ..] => rest,
        other => other,
    };

    let mut value: u32 = 0;
    for &b in digits {
        let nibble = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => break,
        };
        value = (value << 4) | u32::from(nibble);
    }
    value
}

/// The 40-byte metadata record stored at `start_address`.
///
/// All three fields are ASCII so the host script (and a curious human with
/// a text editor) can read them straight out of the container file.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct MetaRecord {
    version: [u8; 18],
    data_start: [u8; 11],
    log_end: [u8; 11],
}

const _: () = assert!(std::mem::size_of::<MetaRecord>() == META_RECORD_SIZE);

impl MetaRecord {
    /// Builds a fresh record for the given region boundaries.
    pub fn new(data_start: u32, log_end: u32) -> Self {
        let mut record = Self {
            version: *FORMAT_VERSION,
            data_start: *b"0x00000000\n",
            log_end: *b"0x00000000\n",
        };
        let mut hex = [0u8; 8];
        write_hex32(&mut hex, data_start);
        record.data_start[2..10].copy_from_slice(&hex);
        write_hex32(&mut hex, log_end);
        record.log_end[2..10].copy_from_slice(&hex);
        record
    }

    /// Reinterprets a raw byte slice as a metadata record. Only the length
    /// is checked here; callers decide validity via [`Self::version_matches`]
    /// and the parsed region boundaries.
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        ensure!(
            bytes.len() >= META_RECORD_SIZE,
            "buffer too small for MetaRecord: {} < {}",
            bytes.len(),
            META_RECORD_SIZE
        );
        Self::ref_from_bytes(&bytes[..META_RECORD_SIZE])
            .map_err(|e| eyre::eyre!("failed to reinterpret MetaRecord: {e:?}"))
    }

    /// Compares the stored version against the format literal. The trailing
    /// newline is excluded: 17 significant bytes decide validity.
    pub fn version_matches(&self) -> bool {
        self.version[..17] == FORMAT_VERSION[..17]
    }

    /// Parsed `data_start` address.
    pub fn data_start(&self) -> u32 {
        parse_hex(&self.data_start)
    }

    /// Parsed `log_end` address.
    pub fn log_end(&self) -> u32 {
        parse_hex(&self.log_end)
    }
}

/// One 8-byte slot in the journal ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalEntry(pub [u8; JOURNAL_ENTRY_SIZE]);

impl JournalEntry {
    /// The erased slot pattern: never programmed since the last page erase.
    pub const ERASED: Self = Self([0xFF; JOURNAL_ENTRY_SIZE]);

    /// The invalidated slot pattern: retired by a successor commit.
    pub const INVALIDATED: Self = Self([0x00; JOURNAL_ENTRY_SIZE]);

    /// Builds a live entry recording `value` committed data bytes.
    pub fn with_value(value: u32) -> Self {
        let mut digits = [0u8; JOURNAL_ENTRY_SIZE];
        write_hex32(&mut digits, value);
        Self(digits)
    }

    pub fn is_erased(&self) -> bool {
        self.0.iter().all(|&b| b == 0xFF)
    }

    pub fn is_invalidated(&self) -> bool {
        self.0.iter().all(|&b| b == 0x00)
    }

    /// The committed byte count a live entry records.
    pub fn value(&self) -> u32 {
        parse_hex(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_encoding_is_uppercase_msb_first() {
        let mut buf = [0u8; 8];
        write_hex32(&mut buf, 0x0001_2ABF);
        assert_eq!(&buf, b"00012ABF");
    }

    #[test]
    fn hex_parse_accepts_prefix_and_stops_at_terminator() {
        assert_eq!(parse_hex(b"0x00012ABF\n"), 0x0001_2ABF);
        assert_eq!(parse_hex(b"00000100"), 0x100);
        assert_eq!(parse_hex(b"12\nAB"), 0x12);
        assert_eq!(parse_hex(&[0xFF; 8]), 0);
    }

    #[test]
    fn meta_record_encodes_legible_addresses() {
        let record = MetaRecord::new(0x1000, 0x0003_BF7C);

        let bytes = record.as_bytes();
        assert_eq!(bytes.len(), META_RECORD_SIZE);
        assert_eq!(&bytes[..18], b"UBIT_LOG_FS_V_001\n");
        assert_eq!(&bytes[18..29], b"0x00001000\n");
        assert_eq!(&bytes[29..40], b"0x0003BF7C\n");
    }

    #[test]
    fn meta_record_roundtrip() {
        let record = MetaRecord::new(0x1000, 0xBC00);
        let parsed = MetaRecord::from_bytes(record.as_bytes()).unwrap();

        assert!(parsed.version_matches());
        assert_eq!(parsed.data_start(), 0x1000);
        assert_eq!(parsed.log_end(), 0xBC00);
    }

    #[test]
    fn meta_record_rejects_wrong_version() {
        let mut bytes: [u8; META_RECORD_SIZE] =
            MetaRecord::new(0x1000, 0xBC00).as_bytes().try_into().unwrap();
        bytes[0] = b'X';
        let parsed = MetaRecord::from_bytes(&bytes).unwrap();

        assert!(!parsed.version_matches());
    }

    #[test]
    fn erased_metadata_does_not_validate() {
        let bytes = [0xFF; META_RECORD_SIZE];
        let parsed = MetaRecord::from_bytes(&bytes).unwrap();

        assert!(!parsed.version_matches());
    }

    #[test]
    fn journal_entry_classification() {
        assert!(JournalEntry::ERASED.is_erased());
        assert!(JournalEntry::INVALIDATED.is_invalidated());

        let live = JournalEntry::with_value(512);
        assert!(!live.is_erased());
        assert!(!live.is_invalidated());
        assert_eq!(live.as_bytes(), b"00000200");
        assert_eq!(live.value(), 512);
    }

    #[test]
    fn torn_journal_entry_parses_to_digit_prefix() {
        // A crash mid-program can leave trailing erased bytes; the parse
        // mirrors strtoul and keeps whatever digits made it to the medium.
        let torn = JournalEntry(*b"0001\xFF\xFF\xFF\xFF");
        assert_eq!(torn.value(), 0x1);
    }
}
