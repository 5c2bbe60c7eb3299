use std::{fs, io, path::Path};

use log::{info, warn};

// Fixed header offsets (gbdev.io/pandocs/The_Cartridge_Header.html).
const TITLE_OFFSET: u16 = 0x0134;
const TITLE_LEN: u16 = 16;
const LICENSE_OFFSET: u16 = 0x0144;
const CART_TYPE_OFFSET: u16 = 0x0147;
const CHECKSUM_START: u16 = 0x0134;
const CHECKSUM_END: u16 = 0x014C;
const CHECKSUM_OFFSET: u16 = 0x014D;

/// Fields extracted from the fixed-offset cartridge header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Game title, up to 16 NUL-padded bytes.
    pub title: String,
    /// Cartridge type byte (mapper/peripheral code).
    pub cart_type: u8,
    /// Little-endian new licensee code.
    pub license_code: u16,
}

/// An immutable cartridge ROM image.
///
/// Created once at load time and read-only thereafter. No magic number is
/// checked; any file is accepted and only the header checksum signals
/// corruption.
#[derive(Debug)]
pub struct Cartridge {
    pub rom: Vec<u8>,
}

impl Cartridge {
    /// Read a ROM image from disk. I/O failures surface as the error; a
    /// failed header checksum is only logged, since real units still run
    /// such cartridges.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let data = fs::read(&path)?;
        let cart = Self::from_bytes(data);
        let header = cart.header();
        info!(
            "loaded ROM: {:?} (type {:#04X}, license {:#06X}, {} bytes)",
            header.title,
            header.cart_type,
            header.license_code,
            cart.rom.len()
        );
        if !cart.verify_checksum() {
            warn!(
                "header checksum mismatch for {}; running anyway",
                path.as_ref().display()
            );
        }
        Ok(cart)
    }

    /// Wrap an in-memory ROM image.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { rom: data }
    }

    /// Bounds-checked byte access into the image. Reads past the end of a
    /// short image return 0xFF, like an open bus.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    /// Extract the header fields. Pure; never fails, even on images too
    /// short to hold a header.
    pub fn header(&self) -> Header {
        let title_bytes: Vec<u8> = (TITLE_OFFSET..TITLE_OFFSET + TITLE_LEN)
            .map(|addr| self.rom.get(addr as usize).copied().unwrap_or(0))
            .collect();
        let end = title_bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(title_bytes.len());
        let title = String::from_utf8_lossy(&title_bytes[..end]).into_owned();

        let license_code = self.rom.get(LICENSE_OFFSET as usize).copied().unwrap_or(0) as u16
            | (self.rom.get(LICENSE_OFFSET as usize + 1).copied().unwrap_or(0) as u16) << 8;

        Header {
            title,
            cart_type: self.rom.get(CART_TYPE_OFFSET as usize).copied().unwrap_or(0),
            license_code,
        }
    }

    /// Verify the header checksum the boot ROM computes: every byte of the
    /// header region contributes `-byte - 1`, truncated to 8 bits after
    /// each step.
    pub fn verify_checksum(&self) -> bool {
        let mut checksum = 0u8;
        for addr in CHECKSUM_START..=CHECKSUM_END {
            checksum = checksum.wrapping_sub(self.read(addr)).wrapping_sub(1);
        }
        checksum == self.read(CHECKSUM_OFFSET)
    }
}
