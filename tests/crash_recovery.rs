//! # Mount, Recovery and Crash-Safety Tests
//!
//! The durability contract: mounting the medium after power loss at any
//! point yields either the state before the interrupted row or the state
//! after it, never a torn row. These tests exercise that contract by
//! snapshotting the simulated medium, recording every program/erase the
//! logger issues during one operation, and replaying operation prefixes
//! onto forks of the snapshot. Each fork is a device that lost power at
//! exactly that point.

use std::sync::Arc;

use flashlog::storage::MediumOp;
use flashlog::{DataLog, NvmDevice, SimNvm};

const PAGE: u32 = 1024;
const START_ADDRESS: u32 = 2048;
const JOURNAL_START: u32 = 3072;
const DATA_START: u32 = 4096;
const PAGES: u32 = 48;

fn log_end() -> u32 {
    PAGE * PAGES - PAGE - 4
}

fn fixture() -> (Arc<SimNvm>, DataLog) {
    let nvm = Arc::new(SimNvm::new(PAGE, PAGES));
    let log = DataLog::new(Arc::clone(&nvm) as Arc<dyn NvmDevice>);
    (nvm, log)
}

fn remount(nvm: &Arc<SimNvm>) -> DataLog {
    let log = DataLog::new(Arc::clone(nvm) as Arc<dyn NvmDevice>);
    log.init().unwrap();
    log
}

fn fork_at(image: &[u8], ops: &[MediumOp], cut: usize) -> Arc<SimNvm> {
    let fork = SimNvm::from_image(PAGE, image.to_vec());
    fork.replay(&ops[..cut]);
    Arc::new(fork)
}

/// Everything programmed into the data region, up to the first erased byte.
fn data_bytes(nvm: &SimNvm) -> Vec<u8> {
    let raw = nvm.peek(DATA_START, (log_end() - DATA_START) as usize);
    let end = raw.iter().position(|&b| b == 0xFF).unwrap_or(raw.len());
    raw[..end].to_vec()
}

mod remounting {
    use super::*;

    #[test]
    fn mount_recovers_columns_and_tail_position() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();
        log.log("x", "1").unwrap();
        log.log("y", "2").unwrap();
        log.end_row().unwrap();
        drop(log);

        let relog = remount(&nvm);
        // Mount is idempotent; a second init must change nothing.
        relog.init().unwrap();

        relog.begin_row().unwrap();
        relog.log("y", "5").unwrap();
        relog.end_row().unwrap();

        // Column order survived the remount: no header rewrite, x empty.
        assert_eq!(data_bytes(&nvm), b"x,y\n1,2\n,5\n".to_vec());
    }

    #[test]
    fn mount_skips_tombstoned_headers() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();
        log.log("x", "1").unwrap();
        log.log("y", "2").unwrap();
        log.end_row().unwrap();
        log.log("x", "3").unwrap();
        log.log("z", "9").unwrap();
        log.end_row().unwrap();
        drop(log);

        let relog = remount(&nvm);
        relog.begin_row().unwrap();
        relog.log("z", "7").unwrap();
        relog.end_row().unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(b"x,y\n1,2\n");
        expected.extend_from_slice(&[0u8; 4]);
        expected.extend_from_slice(b"x,y,z\n3,,9\n,,7\n");
        assert_eq!(data_bytes(&nvm), expected);
    }

    #[test]
    fn uncommitted_tail_is_recovered_by_byte_scan() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();
        // Four bytes: far below the journal's block-granular commit.
        log.log_string("abc\n").unwrap();
        assert_eq!(nvm.peek(JOURNAL_START, 8), b"00000000".to_vec());
        drop(log);

        let relog = remount(&nvm);
        relog.log_string("def\n").unwrap();

        assert_eq!(data_bytes(&nvm), b"abc\ndef\n".to_vec());
    }

    #[test]
    fn corrupt_metadata_reformats_lazily() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();
        log.log("x", "1").unwrap();
        log.end_row().unwrap();
        drop(log);

        // Clear one version byte; the store no longer validates.
        nvm.program(START_ADDRESS, &[0x00]).unwrap();

        let relog = DataLog::new(Arc::clone(&nvm) as Arc<dyn NvmDevice>);
        assert!(!relog.is_present());

        relog.log("fresh", "1").unwrap();
        relog.end_row().unwrap();

        assert!(relog.is_present());
        assert_eq!(data_bytes(&nvm), b"fresh\n1\n".to_vec());
    }

    #[test]
    fn invalidate_forces_reformat_on_next_use() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();
        log.log("x", "1").unwrap();
        log.end_row().unwrap();

        log.invalidate().unwrap();

        assert!(nvm.peek(START_ADDRESS, 40).iter().all(|&b| b == 0x00));
        assert!(!log.is_present());

        log.log("fresh", "1").unwrap();
        log.end_row().unwrap();

        assert!(log.is_present());
        assert_eq!(data_bytes(&nvm), b"fresh\n1\n".to_vec());
    }

    #[test]
    fn full_erase_wipes_data_region() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();
        log.log("x", "1").unwrap();
        log.end_row().unwrap();

        log.clear(true).unwrap();

        assert!(data_bytes(&nvm).is_empty());
        assert_eq!(nvm.peek(log_end() + 1, 3), vec![0xFF; 3]);

        log.log("y", "2").unwrap();
        log.end_row().unwrap();
        assert_eq!(data_bytes(&nvm), b"y\n2\n".to_vec());
    }
}

mod crash_prefixes {
    use super::*;

    #[test]
    fn crash_before_invalidation_resolves_to_later_entry() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();
        log.log("x", "1").unwrap();
        log.log("y", "2").unwrap();
        log.end_row().unwrap();

        let image = nvm.snapshot();
        nvm.set_recording(true);
        log.log_string(&"d".repeat(300)).unwrap();
        let ops = nvm.take_ops();
        let reference = data_bytes(&nvm);

        // data program, new journal entry, old entry invalidation
        assert_eq!(ops.len(), 3);
        let fork = fork_at(&image, &ops, 2);

        // Both journal entries are live on the crashed medium.
        assert_eq!(fork.peek(JOURNAL_START, 8), b"00000000".to_vec());
        assert_eq!(fork.peek(JOURNAL_START + 8, 8), b"00000100".to_vec());

        let relog = remount(&fork);
        assert_eq!(data_bytes(&fork), reference, "later live entry SHOULD win");

        // Appends continue exactly at the recovered tail.
        relog.log_string("Z").unwrap();
        let mut expected = reference.clone();
        expected.push(b'Z');
        assert_eq!(data_bytes(&fork), expected);
    }

    #[test]
    fn small_row_append_is_atomic_under_any_crash_prefix() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();
        log.log("x", "1").unwrap();
        log.log("y", "2").unwrap();
        log.end_row().unwrap();
        let before = data_bytes(&nvm);

        let image = nvm.snapshot();
        nvm.set_recording(true);
        log.begin_row().unwrap();
        log.log("x", "3").unwrap();
        log.log("y", "4").unwrap();
        log.end_row().unwrap();
        let ops = nvm.take_ops();
        let after = data_bytes(&nvm);

        for cut in 0..=ops.len() {
            let fork = fork_at(&image, &ops, cut);
            remount(&fork);
            let recovered = data_bytes(&fork);
            assert!(
                recovered == before || recovered == after,
                "cut {cut} recovered a torn state: {:?}",
                String::from_utf8_lossy(&recovered)
            );
        }
    }

    #[test]
    fn block_crossing_row_recovers_whole_under_any_crash_prefix() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();
        log.log("x", "1").unwrap();
        log.log("y", "2").unwrap();
        log.end_row().unwrap();
        let before = data_bytes(&nvm);

        let image = nvm.snapshot();
        nvm.set_recording(true);
        log.begin_row().unwrap();
        log.log("x", &"d".repeat(300)).unwrap();
        log.end_row().unwrap();
        let ops = nvm.take_ops();
        let after = data_bytes(&nvm);

        for cut in 0..=ops.len() {
            let fork = fork_at(&image, &ops, cut);
            remount(&fork);
            let recovered = data_bytes(&fork);
            assert!(
                recovered == before || recovered == after,
                "cut {cut} recovered a torn state: {:?}",
                String::from_utf8_lossy(&recovered)
            );
        }
    }
}

mod journal_ring {
    use super::*;

    #[test]
    fn ring_wraps_after_filling_its_page() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();

        let chunk = "c".repeat(256);
        for _ in 0..128 {
            log.log_string(&chunk).unwrap();
        }

        // The 128th commit wrapped onto a freshly erased ring page.
        assert_eq!(nvm.peek(JOURNAL_START, 8), b"00008000".to_vec());
        assert_eq!(nvm.peek(DATA_START - 8, 8), vec![0x00; 8]);
        assert!(nvm
            .peek(JOURNAL_START + 8, (PAGE - 16) as usize)
            .iter()
            .all(|&b| b == 0xFF));
        drop(log);

        let relog = remount(&nvm);
        relog.log_string("tail").unwrap();

        let data = data_bytes(&nvm);
        assert_eq!(data.len(), 128 * 256 + 4);
        assert!(data.ends_with(b"tail"));
    }

    #[test]
    fn each_block_crossing_commits_exactly_once() {
        let (nvm, log) = fixture();
        log.clear(false).unwrap();

        nvm.set_recording(true);
        log.log_string(&"c".repeat(300)).unwrap();
        let ops = nvm.take_ops();

        let journal_writes = ops
            .iter()
            .filter(|op| {
                matches!(op, MediumOp::Program { addr, .. }
                    if (JOURNAL_START..DATA_START).contains(addr))
            })
            .count();
        // One new entry plus one invalidation.
        assert_eq!(journal_writes, 2);
        assert_eq!(nvm.peek(JOURNAL_START + 8, 8), b"00000100".to_vec());
    }
}
