//! # Write-Through Block Cache
//!
//! A small set of fixed-size blocks over the NVM adapter. The cache exists
//! for two reasons, and durability is deliberately not one of them:
//!
//! - **Read coalescing.** Mount-time recovery walks the medium a byte at a
//!   time (journal entries, the uncommitted data tail, the stored heading
//!   line). Loading one aligned block per miss turns those walks into a
//!   handful of adapter reads.
//! - **Program coalescing in RAM.** Appends arrive as many small writes.
//!   Keeping the surrounding block resident means the bytes just written
//!   can be re-read without touching the adapter.
//!
//! ## Write-Through, Always
//!
//! Every `write` issues the adapter program before returning; resident
//! blocks the range intersects are then patched in place. The cache never
//! holds dirty data and never delays durability: when `write` returns, the
//! bytes are on the medium. Crash-safety reasoning above this layer depends
//! on exactly that property.
//!
//! ## Eviction
//!
//! Least-recently-used by access stamp. With only a few resident blocks
//! (see [`CACHE_BLOCK_COUNT`](crate::config::CACHE_BLOCK_COUNT)) anything
//! cleverer buys nothing; the access pattern is two or three hot spots (the
//! journal head, the data tail, the metadata block).
//!
//! ## Alignment
//!
//! Blocks are aligned to [`BLOCK_SIZE`](crate::config::BLOCK_SIZE) within
//! the adapter address space. The logger checks at format/mount time that
//! the page size is a multiple of the block size, so a block never
//! straddles a page boundary and an aligned block load never runs past the
//! end of the medium.

use std::sync::Arc;

use eyre::{Result, WrapErr};

use super::{page_base, NvmDevice};
use crate::config::{BLOCK_SIZE, CACHE_BLOCK_COUNT};

struct CacheBlock {
    base: u32,
    stamp: u64,
    data: Box<[u8; BLOCK_SIZE]>,
}

/// Write-through cache of [`BLOCK_SIZE`]-byte blocks over an [`NvmDevice`].
pub struct BlockCache {
    nvm: Arc<dyn NvmDevice>,
    blocks: Vec<CacheBlock>,
    tick: u64,
}

impl BlockCache {
    pub fn new(nvm: Arc<dyn NvmDevice>) -> Self {
        Self {
            nvm,
            blocks: Vec::with_capacity(CACHE_BLOCK_COUNT),
            tick: 0,
        }
    }

    /// The adapter this cache fronts.
    pub fn nvm(&self) -> &Arc<dyn NvmDevice> {
        &self.nvm
    }

    fn next_stamp(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn resident(&mut self, base: u32) -> Option<usize> {
        self.blocks.iter().position(|b| b.base == base)
    }

    /// Returns the index of a block holding `base`, loading it on a miss.
    fn load(&mut self, base: u32) -> Result<usize> {
        if let Some(idx) = self.resident(base) {
            let stamp = self.next_stamp();
            self.blocks[idx].stamp = stamp;
            return Ok(idx);
        }

        let mut data = Box::new([0u8; BLOCK_SIZE]);
        self.nvm
            .read(base, data.as_mut_slice())
            .wrap_err_with(|| format!("failed to load cache block at {base:#010X}"))?;

        let stamp = self.next_stamp();
        if self.blocks.len() < CACHE_BLOCK_COUNT {
            self.blocks.push(CacheBlock { base, stamp, data });
            Ok(self.blocks.len() - 1)
        } else {
            // INVARIANT: blocks is non-empty here, so min_by_key always finds a victim.
            let idx = self
                .blocks
                .iter()
                .enumerate()
                .min_by_key(|(_, b)| b.stamp)
                .map(|(i, _)| i)
                .expect("cache has at least one resident block");
            self.blocks[idx] = CacheBlock { base, stamp, data };
            Ok(idx)
        }
    }

    /// Reads `buf.len()` bytes at `addr`, loading aligned blocks on misses.
    pub fn read(&mut self, addr: u32, buf: &mut [u8]) -> Result<()> {
        let mut addr = addr;
        let mut filled = 0usize;

        while filled < buf.len() {
            let base = addr - (addr % BLOCK_SIZE as u32);
            let offset = (addr - base) as usize;
            let take = (BLOCK_SIZE - offset).min(buf.len() - filled);

            let idx = self.load(base)?;
            buf[filled..filled + take]
                .copy_from_slice(&self.blocks[idx].data[offset..offset + take]);

            filled += take;
            addr += take as u32;
        }

        Ok(())
    }

    /// Reads a single byte at `addr`.
    pub fn read_byte(&mut self, addr: u32) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read(addr, &mut buf)?;
        Ok(buf[0])
    }

    /// Programs `data` at `addr` and patches any resident block the range
    /// intersects. The adapter write completes before this returns.
    pub fn write(&mut self, addr: u32, data: &[u8]) -> Result<()> {
        self.nvm
            .program(addr, data)
            .wrap_err_with(|| format!("failed to program {} bytes at {addr:#010X}", data.len()))?;

        let start = addr as u64;
        let end = start + data.len() as u64;
        for block in &mut self.blocks {
            let block_start = block.base as u64;
            let block_end = block_start + BLOCK_SIZE as u64;
            if start < block_end && end > block_start {
                let from = start.max(block_start);
                let to = end.min(block_end);
                let src = (from - start) as usize..(to - start) as usize;
                let dst = (from - block_start) as usize..(to - block_start) as usize;
                block.data[dst].copy_from_slice(&data[src]);
            }
        }

        Ok(())
    }

    /// Erases the page containing `addr`: drops every resident block that
    /// intersects it, then issues the adapter page erase.
    pub fn erase_page(&mut self, addr: u32) -> Result<()> {
        let page_size = self.nvm.page_size();
        let base = page_base(addr, page_size);
        self.blocks
            .retain(|b| b.base < base || b.base >= base + page_size);
        self.nvm
            .erase_page(base)
            .wrap_err_with(|| format!("failed to erase page at {base:#010X}"))
    }

    /// Drops every resident block without touching the medium.
    pub fn drop_all(&mut self) {
        self.blocks.clear();
    }
}
