//! # Simulated NVM Backend
//!
//! In-RAM implementation of [`NvmDevice`] with the same failure surface as
//! real NOR flash: programs AND bits in, erases are page-granular, and every
//! mutation is observable as a discrete operation.
//!
//! ## Crash Simulation
//!
//! The simulator can record every mutating operation it performs. A test
//! snapshots the medium, enables recording, runs one logger operation, then
//! replays an arbitrary prefix of the recorded operations onto a fork of the
//! snapshot. Mounting the fork answers the only question that matters for
//! durability: what state does a device that lost power at exactly that
//! point recover to?
//!
//! ```ignore
//! let nvm = Arc::new(SimNvm::new(1024, 32));
//! let image = nvm.snapshot();
//! nvm.set_recording(true);
//! log.end_row()?;
//! let ops = nvm.take_ops();
//!
//! for cut in 0..=ops.len() {
//!     let fork = SimNvm::from_image(1024, image.clone());
//!     fork.replay(&ops[..cut]);
//!     // mount a fresh logger on `fork` and inspect what it recovered
//! }
//! ```
//!
//! ## Host Presentation
//!
//! `set_configuration` and `remount` are captured (last configuration, call
//! count) so formatting behavior can be asserted without a USB stack.

use eyre::{ensure, Result};
use parking_lot::Mutex;

use super::{NvmDevice, VolumeConfig};

/// One mutating operation applied to the medium, in issue order.
#[derive(Debug, Clone)]
pub enum MediumOp {
    /// `program(addr, data)`: bits were ANDed in at `addr`.
    Program { addr: u32, data: Vec<u8> },
    /// `erase_page(addr)`: the page at `addr` was restored to `0xFF`.
    ErasePage { addr: u32 },
}

struct SimState {
    bytes: Vec<u8>,
    ops: Vec<MediumOp>,
    recording: bool,
    config: Option<VolumeConfig>,
    remounts: u32,
}

/// In-RAM NOR flash simulator.
pub struct SimNvm {
    page_size: u32,
    state: Mutex<SimState>,
}

impl SimNvm {
    /// Creates a fully erased medium of `page_count` pages.
    pub fn new(page_size: u32, page_count: u32) -> Self {
        Self::from_image(page_size, vec![0xFF; (page_size * page_count) as usize])
    }

    /// Creates a medium from an existing byte image. The image length must
    /// be a whole number of pages.
    pub fn from_image(page_size: u32, image: Vec<u8>) -> Self {
        assert!(page_size.is_power_of_two(), "page size must be a power of two");
        assert_eq!(
            image.len() % page_size as usize,
            0,
            "image must be a whole number of pages"
        );
        Self {
            page_size,
            state: Mutex::new(SimState {
                bytes: image,
                ops: Vec::new(),
                recording: false,
                config: None,
                remounts: 0,
            }),
        }
    }

    /// Returns a copy of the entire medium.
    pub fn snapshot(&self) -> Vec<u8> {
        self.state.lock().bytes.clone()
    }

    /// Copies out `len` bytes at `addr` without going through the adapter
    /// error path. Test convenience.
    pub fn peek(&self, addr: u32, len: usize) -> Vec<u8> {
        let state = self.state.lock();
        state.bytes[addr as usize..addr as usize + len].to_vec()
    }

    /// Starts or stops operation recording. Starting drops any previously
    /// recorded operations.
    pub fn set_recording(&self, on: bool) {
        let mut state = self.state.lock();
        state.recording = on;
        state.ops.clear();
    }

    /// Drains the recorded operations.
    pub fn take_ops(&self) -> Vec<MediumOp> {
        std::mem::take(&mut self.state.lock().ops)
    }

    /// Applies previously recorded operations to this medium.
    pub fn replay(&self, ops: &[MediumOp]) {
        let mut state = self.state.lock();
        for op in ops {
            match op {
                MediumOp::Program { addr, data } => {
                    let start = *addr as usize;
                    for (i, b) in data.iter().enumerate() {
                        state.bytes[start + i] &= b;
                    }
                }
                MediumOp::ErasePage { addr } => {
                    let start = *addr as usize;
                    let end = start + self.page_size as usize;
                    state.bytes[start..end].fill(0xFF);
                }
            }
        }
    }

    /// Last configuration passed to `set_configuration`, if any.
    pub fn config(&self) -> Option<VolumeConfig> {
        self.state.lock().config.clone()
    }

    /// Number of `remount` calls observed.
    pub fn remount_count(&self) -> u32 {
        self.state.lock().remounts
    }

    fn check_range(&self, addr: u32, len: usize, what: &str) -> Result<()> {
        let end = addr as u64 + len as u64;
        ensure!(
            end <= self.flash_end() as u64,
            "{} of {} bytes at {:#010X} runs past end of medium ({:#010X})",
            what,
            len,
            addr,
            self.flash_end()
        );
        Ok(())
    }
}

impl NvmDevice for SimNvm {
    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn flash_start(&self) -> u32 {
        0
    }

    fn flash_end(&self) -> u32 {
        self.state.lock().bytes.len() as u32
    }

    fn read(&self, addr: u32, buf: &mut [u8]) -> Result<()> {
        self.check_range(addr, buf.len(), "read")?;
        let state = self.state.lock();
        let start = addr as usize;
        buf.copy_from_slice(&state.bytes[start..start + buf.len()]);
        Ok(())
    }

    fn program(&self, addr: u32, data: &[u8]) -> Result<()> {
        self.check_range(addr, data.len(), "program")?;
        let mut state = self.state.lock();
        if state.recording {
            state.ops.push(MediumOp::Program {
                addr,
                data: data.to_vec(),
            });
        }
        let start = addr as usize;
        for (i, b) in data.iter().enumerate() {
            state.bytes[start + i] &= b;
        }
        Ok(())
    }

    fn erase_page(&self, addr: u32) -> Result<()> {
        ensure!(
            addr % self.page_size == 0,
            "erase address {:#010X} is not page-aligned (page size {})",
            addr,
            self.page_size
        );
        self.check_range(addr, self.page_size as usize, "erase")?;
        let mut state = self.state.lock();
        if state.recording {
            state.ops.push(MediumOp::ErasePage { addr });
        }
        let start = addr as usize;
        let end = start + self.page_size as usize;
        state.bytes[start..end].fill(0xFF);
        Ok(())
    }

    fn set_configuration(&self, config: &VolumeConfig) -> Result<()> {
        self.state.lock().config = Some(config.clone());
        Ok(())
    }

    fn remount(&self) -> Result<()> {
        self.state.lock().remounts += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_medium_is_erased() {
        let nvm = SimNvm::new(1024, 4);
        assert_eq!(nvm.flash_end(), 4096);
        assert!(nvm.peek(0, 4096).iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn program_only_clears_bits() {
        let nvm = SimNvm::new(1024, 1);
        nvm.program(0, &[0b1010_1010]).unwrap();
        nvm.program(0, &[0b1100_1100]).unwrap();

        assert_eq!(nvm.peek(0, 1), vec![0b1000_1000]);
    }

    #[test]
    fn erase_restores_page_to_ff() {
        let nvm = SimNvm::new(1024, 2);
        nvm.program(1024, &[0x00; 16]).unwrap();
        nvm.erase_page(1024).unwrap();

        assert!(nvm.peek(1024, 1024).iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn erase_rejects_unaligned_address() {
        let nvm = SimNvm::new(1024, 2);
        assert!(nvm.erase_page(100).is_err());
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let nvm = SimNvm::new(1024, 1);
        let mut buf = [0u8; 8];
        assert!(nvm.read(1020, &mut buf).is_err());
        assert!(nvm.program(1023, &[0, 0]).is_err());
    }

    #[test]
    fn replayed_prefix_reproduces_partial_state() {
        let nvm = SimNvm::new(1024, 2);
        let image = nvm.snapshot();
        nvm.set_recording(true);
        nvm.program(0, b"first").unwrap();
        nvm.erase_page(1024).unwrap();
        nvm.program(1024, b"second").unwrap();
        let ops = nvm.take_ops();
        assert_eq!(ops.len(), 3);

        let fork = SimNvm::from_image(1024, image);
        fork.replay(&ops[..1]);
        assert_eq!(fork.peek(0, 5), b"first".to_vec());
        assert_eq!(fork.peek(1024, 6), vec![0xFF; 6]);
    }

    #[test]
    fn configuration_and_remount_are_captured() {
        let nvm = SimNvm::new(1024, 1);
        let config = VolumeConfig {
            file_name: "DATA.HTM".to_string(),
            file_size: 512,
            visible: true,
        };
        nvm.set_configuration(&config).unwrap();
        nvm.remount().unwrap();

        assert_eq!(nvm.config(), Some(config));
        assert_eq!(nvm.remount_count(), 1);
    }
}
