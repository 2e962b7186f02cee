//! Fetch-decode-execute stepping.
//!
//! One [`Machine::step`] call performs exactly one instruction cycle:
//! 1. **Fetch:** Read two bytes at `pc`, big-endian, into the opcode latch.
//! 2. **Advance:** Move `pc` past the word *before* executing, so control
//!    flow overwrites the default advance instead of adding to it.
//! 3. **Decode:** Build one [`Instr`] value from the word.
//! 4. **Execute:** A single exhaustive match over the decoded instruction.
//!
//! The interpreter has no notion of ticks or wall-clock time; it is driven
//! synchronously one instruction per call.

use tracing::{trace, warn};

use crate::common::constants::{
    ADDR_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG_REGISTER, FONT_GLYPH_SIZE, FONT_START,
    INSTRUCTION_SIZE, SPRITE_WIDTH, STACK_DEPTH,
};
use crate::common::Fault;
use crate::isa::{decode, Instr};
use crate::machine::Machine;
use rand::Rng;

impl Machine {
    /// Executes exactly one instruction.
    ///
    /// Returns the redraw flag for the just-executed instruction: `true`
    /// when the framebuffer was cleared or drawn to. The flag is also left
    /// in [`Machine::redraw`] until the next step resets it.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::StackOverflow`] when a call executes with the stack
    /// at capacity, and [`Fault::StackUnderflow`] when a return executes
    /// with an empty stack. Both leave the machine exactly as the faulting
    /// instruction found it, apart from the consumed fetch.
    pub fn step(&mut self) -> Result<bool, Fault> {
        self.redraw = false;

        let word = self.fetch();
        self.opcode = word;
        self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE) & ADDR_MASK;

        trace!(pc = self.pc, opcode = word, "execute");

        match decode(word) {
            Instr::Cls => {
                self.gfx.fill(0);
                self.redraw = true;
            }
            Instr::Ret => self.pc = self.pop()?,
            Instr::Jp { addr } => self.pc = addr,
            Instr::Call { addr } => {
                self.push(self.pc)?;
                self.pc = addr;
            }
            Instr::SeImm { x, kk } => {
                if self.v[x] == kk {
                    self.skip();
                }
            }
            Instr::SneImm { x, kk } => {
                if self.v[x] != kk {
                    self.skip();
                }
            }
            Instr::SeReg { x, y } => {
                if self.v[x] == self.v[y] {
                    self.skip();
                }
            }
            Instr::LdImm { x, kk } => self.v[x] = kk,
            Instr::AddImm { x, kk } => self.v[x] = self.v[x].wrapping_add(kk),
            Instr::LdReg { x, y } => self.v[x] = self.v[y],
            Instr::Or { x, y } => self.v[x] |= self.v[y],
            Instr::And { x, y } => self.v[x] &= self.v[y],
            Instr::Xor { x, y } => self.v[x] ^= self.v[y],
            Instr::AddReg { x, y } => {
                let (vx, vy) = (self.v[x], self.v[y]);
                let (sum, carry) = vx.overflowing_add(vy);
                self.v[FLAG_REGISTER] = u8::from(carry);
                self.v[x] = sum;
            }
            Instr::Sub { x, y } => {
                let (vx, vy) = (self.v[x], self.v[y]);
                self.v[FLAG_REGISTER] = u8::from(vx > vy);
                self.v[x] = vx.wrapping_sub(vy);
            }
            Instr::Shr { x } => {
                let vx = self.v[x];
                self.v[FLAG_REGISTER] = vx & 1;
                self.v[x] = vx >> 1;
            }
            Instr::Subn { x, y } => {
                let (vx, vy) = (self.v[x], self.v[y]);
                self.v[FLAG_REGISTER] = u8::from(vy > vx);
                self.v[x] = vy.wrapping_sub(vx);
            }
            Instr::Shl { x } => {
                let vx = self.v[x];
                self.v[FLAG_REGISTER] = vx >> 7;
                self.v[x] = vx << 1;
            }
            Instr::SneReg { x, y } => {
                if self.v[x] != self.v[y] {
                    self.skip();
                }
            }
            Instr::LdI { addr } => self.i = addr,
            Instr::JpV0 { addr } => {
                self.pc = addr.wrapping_add(u16::from(self.v[0])) & ADDR_MASK;
            }
            Instr::Rnd { x, kk } => self.v[x] = self.rng.gen::<u8>() & kk,
            Instr::Drw { x, y, n } => self.blit(x, y, n),
            Instr::Skp { x } => {
                if self.key[usize::from(self.v[x] & 0xF)] {
                    self.skip();
                }
            }
            Instr::Sknp { x } => {
                if !self.key[usize::from(self.v[x] & 0xF)] {
                    self.skip();
                }
            }
            Instr::LdDelay { x } => self.v[x] = self.delay_timer,
            Instr::WaitKey { x } => match self.key.iter().position(|&pressed| pressed) {
                Some(symbol) => self.v[x] = symbol as u8,
                // Rewind so the same instruction re-executes next call: a
                // cooperative busy-wait, never a true block.
                None => self.pc = self.pc.wrapping_sub(INSTRUCTION_SIZE) & ADDR_MASK,
            },
            Instr::SetDelay { x } => self.delay_timer = self.v[x],
            Instr::SetSound { x } => self.sound_timer = self.v[x],
            Instr::AddI { x } => self.i = self.i.wrapping_add(u16::from(self.v[x])),
            Instr::FontAddr { x } => {
                self.i = FONT_START + u16::from(self.v[x] & 0xF) * FONT_GLYPH_SIZE;
            }
            Instr::Bcd { x } => {
                let vx = self.v[x];
                self.write_mem(self.i, vx / 100);
                self.write_mem(self.i.wrapping_add(1), (vx / 10) % 10);
                self.write_mem(self.i.wrapping_add(2), vx % 10);
            }
            Instr::StoreRegs { x } => {
                for idx in 0..=x {
                    self.write_mem(self.i.wrapping_add(idx as u16), self.v[idx]);
                }
            }
            Instr::LoadRegs { x } => {
                for idx in 0..=x {
                    self.v[idx] = self.read_mem(self.i.wrapping_add(idx as u16));
                }
            }
            Instr::Invalid(word) => {
                // Tolerated for compatibility: pc has already advanced.
                warn!(pc = self.pc, opcode = word, "undefined instruction treated as no-op");
            }
        }

        Ok(self.redraw)
    }

    /// Reads the big-endian instruction word at `pc`.
    fn fetch(&self) -> u16 {
        let hi = self.read_mem(self.pc);
        let lo = self.read_mem(self.pc.wrapping_add(1));
        u16::from_be_bytes([hi, lo])
    }

    /// Skips over the next instruction.
    fn skip(&mut self) {
        self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE) & ADDR_MASK;
    }

    /// Pushes a return address, faulting instead of wrapping at capacity.
    fn push(&mut self, addr: u16) -> Result<(), Fault> {
        if self.sp == STACK_DEPTH {
            return Err(Fault::StackOverflow { pc: self.pc });
        }
        self.stack[self.sp] = addr;
        self.sp += 1;
        Ok(())
    }

    /// Pops a return address, faulting on an empty stack.
    fn pop(&mut self) -> Result<u16, Fault> {
        if self.sp == 0 {
            return Err(Fault::StackUnderflow { pc: self.pc });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }

    /// Reads one byte; addresses wrap within the 12-bit space.
    fn read_mem(&self, addr: u16) -> u8 {
        self.memory[usize::from(addr & ADDR_MASK)]
    }

    /// Writes one byte; addresses wrap within the 12-bit space.
    fn write_mem(&mut self, addr: u16, value: u8) {
        self.memory[usize::from(addr & ADDR_MASK)] = value;
    }

    /// XOR-blits an 8×`n` sprite from `memory[I..]` at `(V[x], V[y])`.
    ///
    /// Placement is toroidal: both the origin and every drawn pixel wrap
    /// modulo the framebuffer dimensions. The flag register is cleared
    /// first and set to 1 if any drawn pixel erases one that was lit.
    fn blit(&mut self, x: usize, y: usize, n: u8) {
        let col = usize::from(self.v[x]);
        let row = usize::from(self.v[y]);
        self.v[FLAG_REGISTER] = 0;

        for dy in 0..usize::from(n) {
            let bits = self.read_mem(self.i.wrapping_add(dy as u16));
            for dx in 0..SPRITE_WIDTH {
                if (bits >> (SPRITE_WIDTH - 1 - dx)) & 1 == 0 {
                    continue;
                }
                let px = (col + dx) % DISPLAY_WIDTH;
                let py = (row + dy) % DISPLAY_HEIGHT;
                let cell = py * DISPLAY_WIDTH + px;
                if self.gfx[cell] == 1 {
                    self.v[FLAG_REGISTER] = 1;
                }
                self.gfx[cell] ^= 1;
            }
        }
        self.redraw = true;
    }
}
