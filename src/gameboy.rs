use std::{io, path::Path};

use crate::{
    cartridge::Cartridge,
    cpu::Cpu,
    mmu::Mmu,
    timer::{CLOCK_SPEED, T_CYCLES_PER_M_CYCLE},
};

pub const FRAMES_PER_SECOND: u32 = 60;

/// T-cycle budget of one video frame.
pub const CYCLES_PER_FRAME: u32 = CLOCK_SPEED / FRAMES_PER_SECOND;

/// High-level facade that wires the CPU and MMU into a single machine and
/// drives it a frame at a time.
///
/// The whole machine is a plain value: several instances can coexist, and
/// everything runs on the caller's thread. External collaborators hook in
/// on the boundaries this type exposes: a renderer consumes the T-cycle
/// counts returned per [`GameBoy::step`], and an input source writes the
/// joypad register through the MMU between frames.
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
    pub cartridge: Option<Cartridge>,
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            mmu: Mmu::new(),
            cartridge: None,
        }
    }

    /// Map a cartridge image into ROM space and keep the image for header
    /// access. Memory is fully loaded before the CPU fetches anything.
    pub fn insert_cartridge(&mut self, cartridge: Cartridge) {
        self.mmu.load_rom(&cartridge.rom);
        self.cartridge = Some(cartridge);
    }

    /// Convenience: read a ROM from disk and insert it.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let cartridge = Cartridge::from_file(path)?;
        self.insert_cartridge(cartridge);
        Ok(())
    }

    /// Execute one instruction, then bring the timer up to date and
    /// dispatch at most one pending interrupt. Returns the elapsed
    /// T-cycles, the per-instruction hand-off for peripheral collaborators.
    pub fn step(&mut self) -> u32 {
        let m_cycles = self.cpu.step(&mut self.mmu);
        self.cpu.update_timer(&mut self.mmu, m_cycles);

        let dispatch_cycles = self.cpu.handle_interrupts(&mut self.mmu);
        if dispatch_cycles > 0 {
            self.cpu.update_timer(&mut self.mmu, dispatch_cycles);
        }

        u32::from(m_cycles + dispatch_cycles) * T_CYCLES_PER_M_CYCLE
    }

    /// Run instructions until one frame's worth of T-cycles has elapsed,
    /// then return the cycles actually consumed so the caller can render.
    pub fn step_frame(&mut self) -> u32 {
        let mut cycles = 0;
        while cycles < CYCLES_PER_FRAME {
            cycles += self.step();
        }
        cycles
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}
