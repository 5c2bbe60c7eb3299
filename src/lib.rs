//! Emulation core for the DMG-class 8-bit handheld game console.
//!
//! This crate contains the platform-agnostic machine logic (CPU, memory,
//! timer, cartridge). Frontends live elsewhere and drive the core through
//! the [`gameboy`] facade: step the machine a frame at a time, blit and
//! poll input on the frame boundaries.

/// Cartridge ROM images, header parsing and the header checksum.
pub mod cartridge;

/// LR35902 CPU core: opcode dispatch, flags, stack, interrupts.
pub mod cpu;

/// High-level facade that wires the CPU and MMU into a single machine.
pub mod gameboy;

/// Flat 64 KiB memory map and the memory-mapped register contract.
pub mod mmu;

/// CPU register pairs with split 8-bit and combined 16-bit access.
pub mod register;

/// Divider/timer unit.
pub mod timer;
