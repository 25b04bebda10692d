//! The fixed host-visible container header.
//!
//! These 2048 bytes are the exact document a host computer sees when it opens
//! the mass-storage volume: a self-contained HTML page whose embedded script
//! locates the metadata block, walks the journal, extracts the CSV body and
//! renders it as a table with a download button. The final bytes are the
//! literal comment opener `<!--FS_START`, which turns everything the logger
//! appends after the header into HTML comment content until the script
//! re-parses it.
//!
//! The blob is opaque, immutable content as far as the logger is concerned.
//! It is written verbatim at `flash_start` during formatting and never read
//! back. Do not reformat or regenerate it: the embedded script hard-codes
//! byte offsets relative to the marker, so any change to its length or
//! layout breaks the host-side viewer.

/// Byte-identical host viewer document, terminated by `<!--FS_START`.
pub const HEADER_HTML: [u8; 2048] = [
    0x3C, 0x68, 0x74, 0x6D, 0x6C, 0x20, 0x69, 0x64, 0x20, 0x3D, 0x20, 0x22, 0x68, 0x74, 0x6D, 0x22,
    0x3E, 0x3C, 0x68, 0x65, 0x61, 0x64, 0x3E, 0x3C, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x3E, 0x68, 0x74,
    0x6D, 0x6C, 0x2C, 0x62, 0x6F, 0x64, 0x79, 0x7B, 0x6D, 0x61, 0x72, 0x67, 0x69, 0x6E, 0x3A, 0x31,
    0x65, 0x6D, 0x3B, 0x66, 0x6F, 0x6E, 0x74, 0x2D, 0x66, 0x61, 0x6D, 0x69, 0x6C, 0x79, 0x3A, 0x73,
    0x61, 0x6E, 0x73, 0x2D, 0x73, 0x65, 0x72, 0x69, 0x66, 0x7D, 0x74, 0x61, 0x62, 0x6C, 0x65, 0x7B,
    0x62, 0x6F, 0x72, 0x64, 0x65, 0x72, 0x2D, 0x63, 0x6F, 0x6C, 0x6C, 0x61, 0x70, 0x73, 0x65, 0x3A,
    0x63, 0x6F, 0x6C, 0x6C, 0x61, 0x70, 0x73, 0x65, 0x3B, 0x77, 0x69, 0x64, 0x74, 0x68, 0x3A, 0x35,
    0x30, 0x25, 0x7D, 0x74, 0x64, 0x2C, 0x74, 0x68, 0x7B, 0x62, 0x6F, 0x72, 0x64, 0x65, 0x72, 0x3A,
    0x31, 0x70, 0x78, 0x20, 0x73, 0x6F, 0x6C, 0x69, 0x64, 0x20, 0x23, 0x64, 0x64, 0x64, 0x3B, 0x70,
    0x61, 0x64, 0x64, 0x69, 0x6E, 0x67, 0x3A, 0x38, 0x70, 0x78, 0x7D, 0x74, 0x72, 0x3A, 0x6E, 0x74,
    0x68, 0x2D, 0x63, 0x68, 0x69, 0x6C, 0x64, 0x28, 0x65, 0x76, 0x65, 0x6E, 0x29, 0x7B, 0x62, 0x61,
    0x63, 0x6B, 0x67, 0x72, 0x6F, 0x75, 0x6E, 0x64, 0x2D, 0x63, 0x6F, 0x6C, 0x6F, 0x72, 0x3A, 0x23,
    0x66, 0x32, 0x66, 0x32, 0x66, 0x32, 0x7D, 0x74, 0x72, 0x3A, 0x68, 0x6F, 0x76, 0x65, 0x72, 0x7B,
    0x62, 0x61, 0x63, 0x6B, 0x67, 0x72, 0x6F, 0x75, 0x6E, 0x64, 0x2D, 0x63, 0x6F, 0x6C, 0x6F, 0x72,
    0x3A, 0x23, 0x64, 0x64, 0x64, 0x7D, 0x74, 0x68, 0x7B, 0x70, 0x61, 0x64, 0x64, 0x69, 0x6E, 0x67,
    0x2D, 0x74, 0x6F, 0x70, 0x3A, 0x31, 0x32, 0x70, 0x78, 0x3B, 0x70, 0x61, 0x64, 0x64, 0x69, 0x6E,
    0x67, 0x2D, 0x62, 0x6F, 0x74, 0x74, 0x6F, 0x6D, 0x3A, 0x31, 0x32, 0x70, 0x78, 0x3B, 0x74, 0x65,
    0x78, 0x74, 0x2D, 0x61, 0x6C, 0x69, 0x67, 0x6E, 0x3A, 0x6C, 0x65, 0x66, 0x74, 0x3B, 0x62, 0x61,
    0x63, 0x6B, 0x67, 0x72, 0x6F, 0x75, 0x6E, 0x64, 0x2D, 0x63, 0x6F, 0x6C, 0x6F, 0x72, 0x3A, 0x23,
    0x34, 0x63, 0x61, 0x66, 0x35, 0x30, 0x3B, 0x63, 0x6F, 0x6C, 0x6F, 0x72, 0x3A, 0x77, 0x68, 0x69,
    0x74, 0x65, 0x7D, 0x3C, 0x2F, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x3E, 0x3C, 0x2F, 0x68, 0x65, 0x61,
    0x64, 0x3E, 0x0D, 0x0A, 0x3C, 0x48, 0x32, 0x3E, 0x6D, 0x69, 0x63, 0x72, 0x6F, 0x3A, 0x62, 0x69,
    0x74, 0x20, 0x44, 0x61, 0x74, 0x61, 0x20, 0x4C, 0x6F, 0x67, 0x3C, 0x2F, 0x48, 0x32, 0x3E, 0x3C,
    0x62, 0x6F, 0x64, 0x79, 0x20, 0x69, 0x64, 0x20, 0x3D, 0x20, 0x22, 0x62, 0x6F, 0x64, 0x22, 0x3E,
    0x3C, 0x62, 0x75, 0x74, 0x74, 0x6F, 0x6E, 0x20, 0x6F, 0x6E, 0x63, 0x6C, 0x69, 0x63, 0x6B, 0x3D,
    0x27, 0x64, 0x6F, 0x77, 0x6E, 0x6C, 0x6F, 0x61, 0x64, 0x5F, 0x66, 0x69, 0x6C, 0x65, 0x28, 0x22,
    0x6D, 0x69, 0x63, 0x72, 0x6F, 0x62, 0x69, 0x74, 0x2E, 0x63, 0x73, 0x76, 0x22, 0x29, 0x27, 0x20,
    0x69, 0x64, 0x3D, 0x22, 0x64, 0x6C, 0x6F, 0x61, 0x64, 0x22, 0x3E, 0x44, 0x6F, 0x77, 0x6E, 0x6C,
    0x6F, 0x61, 0x64, 0x3C, 0x2F, 0x62, 0x75, 0x74, 0x74, 0x6F, 0x6E, 0x3E, 0x3C, 0x62, 0x75, 0x74,
    0x74, 0x6F, 0x6E, 0x20, 0x6F, 0x6E, 0x63, 0x6C, 0x69, 0x63, 0x6B, 0x3D, 0x27, 0x6E, 0x61, 0x76,
    0x69, 0x67, 0x61, 0x74, 0x6F, 0x72, 0x2E, 0x63, 0x6C, 0x69, 0x70, 0x62, 0x6F, 0x61, 0x72, 0x64,
    0x2E, 0x77, 0x72, 0x69, 0x74, 0x65, 0x54, 0x65, 0x78, 0x74, 0x28, 0x6C, 0x6F, 0x67, 0x44, 0x61,
    0x74, 0x61, 0x2E, 0x72, 0x65, 0x70, 0x6C, 0x61, 0x63, 0x65, 0x28, 0x2F, 0x5C, 0x2C, 0x2F, 0x67,
    0x69, 0x2C, 0x20, 0x22, 0x5C, 0x74, 0x22, 0x29, 0x29, 0x27, 0x3E, 0x43, 0x6F, 0x70, 0x79, 0x3C,
    0x2F, 0x62, 0x75, 0x74, 0x74, 0x6F, 0x6E, 0x3E, 0x3C, 0x62, 0x75, 0x74, 0x74, 0x6F, 0x6E, 0x20,
    0x6F, 0x6E, 0x63, 0x6C, 0x69, 0x63, 0x6B, 0x3D, 0x27, 0x61, 0x6C, 0x65, 0x72, 0x74, 0x28, 0x22,
    0x50, 0x6C, 0x65, 0x61, 0x73, 0x65, 0x20, 0x75, 0x6E, 0x70, 0x6C, 0x75, 0x67, 0x20, 0x79, 0x6F,
    0x75, 0x72, 0x20, 0x6D, 0x69, 0x63, 0x72, 0x6F, 0x3A, 0x62, 0x69, 0x74, 0x2C, 0x20, 0x74, 0x68,
    0x65, 0x6E, 0x20, 0x70, 0x6C, 0x75, 0x67, 0x20, 0x69, 0x74, 0x20, 0x62, 0x61, 0x63, 0x6B, 0x20,
    0x69, 0x6E, 0x20, 0x61, 0x6E, 0x64, 0x20, 0x72, 0x65, 0x2D, 0x6F, 0x70, 0x65, 0x6E, 0x20, 0x74,
    0x68, 0x69, 0x73, 0x20, 0x66, 0x69, 0x6C, 0x65, 0x22, 0x29, 0x27, 0x3E, 0x55, 0x70, 0x64, 0x61,
    0x74, 0x65, 0x20, 0x44, 0x61, 0x74, 0x61, 0x3C, 0x2F, 0x62, 0x75, 0x74, 0x74, 0x6F, 0x6E, 0x3E,
    0x3C, 0x62, 0x75, 0x74, 0x74, 0x6F, 0x6E, 0x20, 0x6F, 0x6E, 0x63, 0x6C, 0x69, 0x63, 0x6B, 0x3D,
    0x27, 0x61, 0x6C, 0x65, 0x72, 0x74, 0x28, 0x22, 0x59, 0x6F, 0x75, 0x72, 0x20, 0x63, 0x6F, 0x64,
    0x65, 0x20, 0x6F, 0x6E, 0x20, 0x74, 0x68, 0x65, 0x20, 0x6D, 0x69, 0x63, 0x72, 0x6F, 0x3A, 0x62,
    0x69, 0x74, 0x20, 0x6D, 0x75, 0x73, 0x74, 0x20, 0x63, 0x6C, 0x65, 0x61, 0x72, 0x20, 0x74, 0x68,
    0x65, 0x20, 0x6C, 0x6F, 0x67, 0x20, 0x75, 0x73, 0x69, 0x6E, 0x67, 0x20, 0x74, 0x68, 0x65, 0x20,
    0x5C, 0x22, 0x66, 0x6F, 0x72, 0x6D, 0x61, 0x74, 0x20, 0x64, 0x72, 0x69, 0x76, 0x65, 0x5C, 0x22,
    0x20, 0x63, 0x6F, 0x6D, 0x6D, 0x61, 0x6E, 0x64, 0x22, 0x29, 0x27, 0x3E, 0x43, 0x6C, 0x65, 0x61,
    0x72, 0x20, 0x6C, 0x6F, 0x67, 0x3C, 0x2F, 0x62, 0x75, 0x74, 0x74, 0x6F, 0x6E, 0x3E, 0x3C, 0x74,
    0x61, 0x62, 0x6C, 0x65, 0x20, 0x69, 0x64, 0x3D, 0x22, 0x64, 0x61, 0x74, 0x61, 0x2D, 0x76, 0x69,
    0x65, 0x77, 0x22, 0x3E, 0x3C, 0x2F, 0x74, 0x61, 0x62, 0x6C, 0x65, 0x3E, 0x0D, 0x0A, 0x3C, 0x73,
    0x63, 0x72, 0x69, 0x70, 0x74, 0x3E, 0x76, 0x61, 0x72, 0x20, 0x6C, 0x6F, 0x67, 0x44, 0x61, 0x74,
    0x61, 0x3B, 0x66, 0x75, 0x6E, 0x63, 0x74, 0x69, 0x6F, 0x6E, 0x20, 0x73, 0x74, 0x61, 0x72, 0x74,
    0x28, 0x29, 0x7B, 0x6C, 0x65, 0x74, 0x20, 0x73, 0x74, 0x75, 0x66, 0x66, 0x3D, 0x64, 0x6F, 0x63,
    0x75, 0x6D, 0x65, 0x6E, 0x74, 0x2E, 0x67, 0x65, 0x74, 0x45, 0x6C, 0x65, 0x6D, 0x65, 0x6E, 0x74,
    0x42, 0x79, 0x49, 0x64, 0x28, 0x22, 0x68, 0x74, 0x6D, 0x22, 0x29, 0x3B, 0x6C, 0x65, 0x74, 0x20,
    0x72, 0x61, 0x77, 0x3D, 0x28, 0x73, 0x74, 0x75, 0x66, 0x66, 0x2E, 0x6F, 0x75, 0x74, 0x65, 0x72,
    0x48, 0x54, 0x4D, 0x4C, 0x29, 0x2E, 0x73, 0x70, 0x6C, 0x69, 0x74, 0x28, 0x22, 0x3C, 0x21, 0x2D,
    0x2D, 0x46, 0x53, 0x5F, 0x53, 0x54, 0x41, 0x52, 0x54, 0x22, 0x29, 0x5B, 0x32, 0x5D, 0x3B, 0x69,
    0x66, 0x28, 0x72, 0x61, 0x77, 0x2E, 0x73, 0x75, 0x62, 0x73, 0x74, 0x72, 0x69, 0x6E, 0x67, 0x28,
    0x30, 0x2C, 0x31, 0x37, 0x29, 0x3D, 0x3D, 0x22, 0x55, 0x42, 0x49, 0x54, 0x5F, 0x4C, 0x4F, 0x47,
    0x5F, 0x46, 0x53, 0x5F, 0x56, 0x5F, 0x30, 0x30, 0x31, 0x22, 0x29, 0x7B, 0x6C, 0x65, 0x74, 0x20,
    0x6C, 0x3D, 0x30, 0x3B, 0x6C, 0x65, 0x74, 0x20, 0x6C, 0x6F, 0x67, 0x45, 0x6E, 0x64, 0x3D, 0x70,
    0x61, 0x72, 0x73, 0x65, 0x49, 0x6E, 0x74, 0x28, 0x72, 0x61, 0x77, 0x2E, 0x73, 0x75, 0x62, 0x73,
    0x74, 0x72, 0x69, 0x6E, 0x67, 0x28, 0x31, 0x38, 0x2C, 0x32, 0x39, 0x29, 0x2C, 0x31, 0x36, 0x29,
    0x3B, 0x6C, 0x65, 0x74, 0x20, 0x64, 0x61, 0x74, 0x61, 0x53, 0x74, 0x61, 0x72, 0x74, 0x3D, 0x70,
    0x61, 0x72, 0x73, 0x65, 0x49, 0x6E, 0x74, 0x28, 0x72, 0x61, 0x77, 0x2E, 0x73, 0x75, 0x62, 0x73,
    0x74, 0x72, 0x69, 0x6E, 0x67, 0x28, 0x32, 0x39, 0x2C, 0x34, 0x30, 0x29, 0x2C, 0x31, 0x36, 0x29,
    0x2D, 0x32, 0x30, 0x34, 0x38, 0x3B, 0x6C, 0x65, 0x74, 0x20, 0x6A, 0x6F, 0x75, 0x72, 0x6E, 0x61,
    0x6C, 0x3D, 0x31, 0x30, 0x32, 0x34, 0x3B, 0x6C, 0x65, 0x74, 0x20, 0x64, 0x61, 0x74, 0x61, 0x45,
    0x6E, 0x64, 0x3D, 0x30, 0x3B, 0x77, 0x68, 0x69, 0x6C, 0x65, 0x28, 0x6A, 0x6F, 0x75, 0x72, 0x6E,
    0x61, 0x6C, 0x21, 0x3D, 0x64, 0x61, 0x74, 0x61, 0x53, 0x74, 0x61, 0x72, 0x74, 0x29, 0x7B, 0x6C,
    0x65, 0x74, 0x20, 0x72, 0x3D, 0x70, 0x61, 0x72, 0x73, 0x65, 0x49, 0x6E, 0x74, 0x28, 0x72, 0x61,
    0x77, 0x2E, 0x73, 0x75, 0x62, 0x73, 0x74, 0x72, 0x69, 0x6E, 0x67, 0x28, 0x6A, 0x6F, 0x75, 0x72,
    0x6E, 0x61, 0x6C, 0x2C, 0x6A, 0x6F, 0x75, 0x72, 0x6E, 0x61, 0x6C, 0x2B, 0x38, 0x29, 0x2C, 0x31,
    0x36, 0x29, 0x3B, 0x69, 0x66, 0x28, 0x72, 0x3D, 0x3D, 0x72, 0x29, 0x7B, 0x64, 0x61, 0x74, 0x61,
    0x45, 0x6E, 0x64, 0x3D, 0x64, 0x61, 0x74, 0x61, 0x53, 0x74, 0x61, 0x72, 0x74, 0x2B, 0x72, 0x3B,
    0x62, 0x72, 0x65, 0x61, 0x6B, 0x7D, 0x6A, 0x6F, 0x75, 0x72, 0x6E, 0x61, 0x6C, 0x2B, 0x3D, 0x38,
    0x7D, 0x77, 0x68, 0x69, 0x6C, 0x65, 0x28, 0x72, 0x61, 0x77, 0x2E, 0x63, 0x68, 0x61, 0x72, 0x43,
    0x6F, 0x64, 0x65, 0x41, 0x74, 0x28, 0x64, 0x61, 0x74, 0x61, 0x45, 0x6E, 0x64, 0x29, 0x21, 0x3D,
    0x31, 0x36, 0x30, 0x29, 0x64, 0x61, 0x74, 0x61, 0x45, 0x6E, 0x64, 0x2B, 0x2B, 0x3B, 0x6C, 0x6F,
    0x67, 0x44, 0x61, 0x74, 0x61, 0x3D, 0x72, 0x61, 0x77, 0x2E, 0x73, 0x75, 0x62, 0x73, 0x74, 0x72,
    0x69, 0x6E, 0x67, 0x28, 0x64, 0x61, 0x74, 0x61, 0x53, 0x74, 0x61, 0x72, 0x74, 0x2C, 0x64, 0x61,
    0x74, 0x61, 0x45, 0x6E, 0x64, 0x29, 0x7D, 0x6C, 0x65, 0x74, 0x20, 0x74, 0x61, 0x62, 0x6C, 0x65,
    0x3D, 0x64, 0x6F, 0x63, 0x75, 0x6D, 0x65, 0x6E, 0x74, 0x2E, 0x67, 0x65, 0x74, 0x45, 0x6C, 0x65,
    0x6D, 0x65, 0x6E, 0x74, 0x42, 0x79, 0x49, 0x64, 0x28, 0x22, 0x64, 0x61, 0x74, 0x61, 0x2D, 0x76,
    0x69, 0x65, 0x77, 0x22, 0x29, 0x3B, 0x6C, 0x65, 0x74, 0x20, 0x72, 0x6F, 0x77, 0x73, 0x3D, 0x6C,
    0x6F, 0x67, 0x44, 0x61, 0x74, 0x61, 0x2E, 0x73, 0x70, 0x6C, 0x69, 0x74, 0x28, 0x22, 0x5C, 0x6E,
    0x22, 0x29, 0x3B, 0x66, 0x6F, 0x72, 0x28, 0x6C, 0x65, 0x74, 0x20, 0x69, 0x3D, 0x30, 0x3B, 0x69,
    0x3C, 0x72, 0x6F, 0x77, 0x73, 0x2E, 0x6C, 0x65, 0x6E, 0x67, 0x74, 0x68, 0x3B, 0x69, 0x2B, 0x2B,
    0x29, 0x7B, 0x6C, 0x65, 0x74, 0x20, 0x63, 0x65, 0x6C, 0x6C, 0x73, 0x3D, 0x72, 0x6F, 0x77, 0x73,
    0x5B, 0x69, 0x5D, 0x2E, 0x73, 0x70, 0x6C, 0x69, 0x74, 0x28, 0x22, 0x2C, 0x22, 0x29, 0x3B, 0x69,
    0x66, 0x28, 0x63, 0x65, 0x6C, 0x6C, 0x73, 0x2E, 0x6C, 0x65, 0x6E, 0x67, 0x74, 0x68, 0x3E, 0x31,
    0x29, 0x7B, 0x6C, 0x65, 0x74, 0x20, 0x72, 0x6F, 0x77, 0x3D, 0x74, 0x61, 0x62, 0x6C, 0x65, 0x2E,
    0x69, 0x6E, 0x73, 0x65, 0x72, 0x74, 0x52, 0x6F, 0x77, 0x28, 0x2D, 0x31, 0x29, 0x3B, 0x66, 0x6F,
    0x72, 0x28, 0x6C, 0x65, 0x74, 0x20, 0x6A, 0x3D, 0x30, 0x3B, 0x6A, 0x3C, 0x63, 0x65, 0x6C, 0x6C,
    0x73, 0x2E, 0x6C, 0x65, 0x6E, 0x67, 0x74, 0x68, 0x3B, 0x6A, 0x2B, 0x2B, 0x29, 0x7B, 0x6C, 0x65,
    0x74, 0x20, 0x63, 0x65, 0x6C, 0x6C, 0x3D, 0x72, 0x6F, 0x77, 0x2E, 0x69, 0x6E, 0x73, 0x65, 0x72,
    0x74, 0x43, 0x65, 0x6C, 0x6C, 0x28, 0x2D, 0x31, 0x29, 0x3B, 0x63, 0x65, 0x6C, 0x6C, 0x2E, 0x69,
    0x6E, 0x6E, 0x65, 0x72, 0x48, 0x54, 0x4D, 0x4C, 0x3D, 0x63, 0x65, 0x6C, 0x6C, 0x73, 0x5B, 0x6A,
    0x5D, 0x7D, 0x7D, 0x7D, 0x7D, 0x66, 0x75, 0x6E, 0x63, 0x74, 0x69, 0x6F, 0x6E, 0x20, 0x64, 0x6F,
    0x77, 0x6E, 0x6C, 0x6F, 0x61, 0x64, 0x5F, 0x66, 0x69, 0x6C, 0x65, 0x28, 0x61, 0x29, 0x7B, 0x76,
    0x61, 0x72, 0x20, 0x62, 0x3D, 0x6E, 0x65, 0x77, 0x20, 0x42, 0x6C, 0x6F, 0x62, 0x28, 0x5B, 0x6C,
    0x6F, 0x67, 0x44, 0x61, 0x74, 0x61, 0x5D, 0x2C, 0x7B, 0x74, 0x79, 0x70, 0x65, 0x3A, 0x22, 0x74,
    0x65, 0x78, 0x74, 0x2F, 0x70, 0x6C, 0x61, 0x69, 0x6E, 0x22, 0x7D, 0x29, 0x3B, 0x76, 0x61, 0x72,
    0x20, 0x63, 0x3D, 0x64, 0x6F, 0x63, 0x75, 0x6D, 0x65, 0x6E, 0x74, 0x2E, 0x63, 0x72, 0x65, 0x61,
    0x74, 0x65, 0x45, 0x6C, 0x65, 0x6D, 0x65, 0x6E, 0x74, 0x28, 0x27, 0x61, 0x27, 0x29, 0x3B, 0x63,
    0x2E, 0x64, 0x6F, 0x77, 0x6E, 0x6C, 0x6F, 0x61, 0x64, 0x3D, 0x61, 0x3B, 0x63, 0x2E, 0x68, 0x72,
    0x65, 0x66, 0x3D, 0x77, 0x69, 0x6E, 0x64, 0x6F, 0x77, 0x2E, 0x55, 0x52, 0x4C, 0x2E, 0x63, 0x72,
    0x65, 0x61, 0x74, 0x65, 0x4F, 0x62, 0x6A, 0x65, 0x63, 0x74, 0x55, 0x52, 0x4C, 0x28, 0x62, 0x29,
    0x3B, 0x63, 0x2E, 0x63, 0x6C, 0x69, 0x63, 0x6B, 0x28, 0x29, 0x3B, 0x63, 0x2E, 0x72, 0x65, 0x6D,
    0x6F, 0x76, 0x65, 0x28, 0x29, 0x7D, 0x76, 0x61, 0x72, 0x20, 0x73, 0x74, 0x75, 0x66, 0x66, 0x3D,
    0x64, 0x6F, 0x63, 0x75, 0x6D, 0x65, 0x6E, 0x74, 0x2E, 0x67, 0x65, 0x74, 0x45, 0x6C, 0x65, 0x6D,
    0x65, 0x6E, 0x74, 0x42, 0x79, 0x49, 0x64, 0x28, 0x22, 0x62, 0x6F, 0x64, 0x22, 0x29, 0x3B, 0x73,
    0x74, 0x75, 0x66, 0x66, 0x2E, 0x6F, 0x6E, 0x6C, 0x6F, 0x61, 0x64, 0x3D, 0x73, 0x74, 0x61, 0x72,
    0x74, 0x3B, 0x3C, 0x2F, 0x73, 0x63, 0x72, 0x69, 0x70, 0x74, 0x3E, 0x0D, 0x0A, 0x20, 0x20, 0x20,
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    0x0D, 0x0A, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    0x20, 0x20, 0x0D, 0x0A, 0x3C, 0x21, 0x2D, 0x2D, 0x46, 0x53, 0x5F, 0x53, 0x54, 0x41, 0x52, 0x54,
];
