//! # Storage Module
//!
//! This module provides the storage layer of the log store: the adapter
//! contract for the physical non-volatile medium, an in-RAM simulation of
//! that medium, and the small write-through block cache everything above it
//! reads and writes through.
//!
//! ## Architecture Overview
//!
//! The logger never touches the medium directly. All accesses flow through
//! a narrow, copy-based adapter trait so the same core runs against real
//! flash hardware, a vendor driver, or the in-RAM simulator:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Logger (journal, CSV)        │
//! ├─────────────────────────────────────┤
//! │   BlockCache (write-through, LRU)   │
//! ├─────────────────────────────────────┤
//! │        NvmDevice (adapter)          │
//! ├───────────────────┬─────────────────┤
//! │  hardware driver  │     SimNvm      │
//! └───────────────────┴─────────────────┘
//! ```
//!
//! ## Medium Model
//!
//! The adapter models NOR-style flash:
//!
//! - **Program clears bits.** `program` can only turn `1` bits into `0`
//!   bits; programming over already-programmed bytes ANDs the new data in.
//! - **Erase is page-granular.** `erase_page` restores one whole page to
//!   `0xFF`. It is the only way to bring bits back to `1`, and it is the
//!   expensive operation in wear terms.
//! - **Power can fail between any two operations.** The layers above order
//!   their writes so that any prefix of issued operations mounts to a
//!   consistent state.
//!
//! The adapter does not enforce erase-before-program; the core guarantees
//! it never programs a byte that needs stale `0` bits raised.
//!
//! ## Host Presentation
//!
//! The medium is concurrently exposed to a host computer as a read-only
//! file. `set_configuration` and `remount` let the core name that file,
//! bound its size and force the host to re-read it after a reformat.
//!
//! ## Thread Safety
//!
//! `NvmDevice` requires `Send + Sync` and takes `&self` everywhere;
//! implementations use interior mutability. The logger serialises all
//! mutation behind its own writer mutex, so adapters never see concurrent
//! programs or erases.

mod cache;
pub mod sim;

pub use cache::BlockCache;
pub use sim::{MediumOp, SimNvm};

use eyre::Result;

/// Host-visible presentation of the medium as a mass-storage file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeConfig {
    /// Filename shown to the host, e.g. `MY_DATA.HTM`.
    pub file_name: String,
    /// Size in bytes of the file the host sees.
    pub file_size: u32,
    /// Whether the file is visible to the host at all.
    pub visible: bool,
}

/// Adapter contract for a block-erasable non-volatile medium.
///
/// Addresses are absolute byte addresses within
/// `[flash_start(), flash_end())`. In practice the address space is
/// zero-based; the logger computes its own region layout from the header
/// size and `page_size()` alone.
pub trait NvmDevice: Send + Sync {
    /// Erase-page size in bytes. Must be a power of two.
    fn page_size(&self) -> u32;

    /// First byte address of the medium.
    fn flash_start(&self) -> u32;

    /// One past the last byte address of the medium.
    fn flash_end(&self) -> u32;

    /// Reads `buf.len()` bytes starting at `addr`.
    fn read(&self, addr: u32, buf: &mut [u8]) -> Result<()>;

    /// Programs `data` at `addr`. Bit-clearing only: the medium retains
    /// `old & new` for every byte. Callers must have erased the range if
    /// they need `1` bits raised.
    fn program(&self, addr: u32, data: &[u8]) -> Result<()>;

    /// Restores the page starting at `addr` (page-aligned) to all `0xFF`.
    fn erase_page(&self, addr: u32) -> Result<()>;

    /// Updates the host-visible file name, size and visibility.
    fn set_configuration(&self, config: &VolumeConfig) -> Result<()>;

    /// Forces the host to re-read the medium after a configuration or
    /// content change it cannot observe incrementally.
    fn remount(&self) -> Result<()>;
}

/// Returns the start address of the page containing `addr`.
#[inline]
pub(crate) fn page_base(addr: u32, page_size: u32) -> u32 {
    addr - (addr % page_size)
}
