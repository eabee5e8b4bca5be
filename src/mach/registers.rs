use super::Address;

/// ## Register set
///
/// Every piece of per-instance machine state that isn't memory or
/// the loop stack.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    /// Address of the next instruction.
    pub pc: Address,
    /// End of program. Reaching it halts the machine.
    pub pcend: Address,
    /// Data pointer.
    pub ptr: Address,
    /// Watched program address.
    pub bkpt: Option<Address>,
    /// Bracket nesting depth.
    pub bktid: usize,
    /// Depth of the loop being skipped, zero when not skipping.
    pub bktctr: usize,
    /// Inside a line comment.
    pub comt: bool,
    /// One-deep stack register.
    pub ss: u8,
}

impl Registers {
    /// Zero everything but the breakpoint.
    pub fn initialize(&mut self, pcend: Address) {
        *self = Registers {
            pcend,
            bkpt: self.bkpt,
            ..Registers::default()
        };
    }

    pub fn is_skipping(&self) -> bool {
        self.bktctr > 0
    }

    pub fn is_halted(&self) -> bool {
        self.pc >= self.pcend
    }
}
