use super::{Address, Memory, Registers, Rom, Stack, SysCall, SysCallIndex, SysCalls};
use crate::error;
use crate::lang::{Error, Opcode};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Ready,
    Running,
    Halted,
    Faulted,
    BreakpointHit,
}

enum Flow {
    Next,
    Jump(Address),
}

/// ## Execution engine
///
/// Fetches one byte at `PC`, decodes it and executes it. Loops are matched
/// lazily: an entered `[` pushes its own address, the matching `]` pops it
/// and branches back to it while the cell is non-zero, so the `[` runs
/// again on every iteration. A `[` over a zero cell opens a skip region
/// that counts brackets until its own `]` comes around.

pub struct Cpu {
    rom: Rom,
    memory: Memory,
    registers: Registers,
    stack: Stack<Address>,
    syscalls: SysCalls,
    extension: bool,
    state: State,
    bkpt_latched: bool,
}

impl std::fmt::Debug for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cpu")
            .field("state", &self.state)
            .field("registers", &self.registers)
            .field("stack", &self.stack)
            .field("memory", &self.memory)
            .field("syscalls", &self.syscalls)
            .finish()
    }
}

impl Cpu {
    pub fn new(memory: Memory, rom: Rom, extension: bool) -> Cpu {
        Cpu {
            rom,
            memory,
            registers: Registers::default(),
            stack: Stack::new("LOOPS NESTED TOO DEEP"),
            syscalls: SysCalls::new(),
            extension,
            state: State::Uninitialized,
            bkpt_latched: false,
        }
    }

    pub fn initialize(&mut self) -> Result<()> {
        if self.memory.is_empty() {
            self.state = State::Uninitialized;
            return Err(error!(InitializationFault; "NO DATA MEMORY"));
        }
        self.registers.initialize(self.rom.len());
        self.stack.clear();
        self.bkpt_latched = false;
        self.state = State::Ready;
        debug!(
            program_len = self.rom.len(),
            memory_len = self.memory.len(),
            extension = self.extension,
            "cpu initialized"
        );
        Ok(())
    }

    /// Zero data memory in place and initialize again.
    pub fn reset(&mut self) -> Result<()> {
        self.memory.clear();
        self.initialize()
    }

    /// Execute one instruction. `Ok(false)` means the program has ended.
    pub fn step(&mut self) -> Result<bool> {
        let pc = self.registers.pc;
        match self.state {
            State::Uninitialized | State::Faulted => return Err(error!(NotReady, pc)),
            _ => {}
        }
        if self.registers.bkpt == Some(pc) {
            if self.bkpt_latched {
                self.bkpt_latched = false;
            } else {
                debug!(pc, "breakpoint hit");
                self.bkpt_latched = true;
                self.state = State::BreakpointHit;
                return Err(error!(Breakpoint, pc));
            }
        }
        if self.registers.is_halted() {
            self.state = State::Halted;
            return Ok(false);
        }
        self.state = State::Running;
        match self.execute(pc) {
            Ok(Flow::Next) => self.registers.pc = pc + 1,
            Ok(Flow::Jump(addr)) => self.registers.pc = addr,
            Err(error) => {
                debug!(%error, "cpu fault");
                self.state = State::Faulted;
                return Err(error);
            }
        }
        Ok(true)
    }

    /// Step until the program ends or faults. Does not return for a
    /// program that never ends.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        Ok(())
    }

    pub fn set_breakpoint(&mut self, addr: Address) {
        debug!(addr, "breakpoint set");
        self.registers.bkpt = Some(addr);
        self.bkpt_latched = false;
    }

    pub fn clear_breakpoint(&mut self) {
        debug!("breakpoint cleared");
        self.registers.bkpt = None;
        self.bkpt_latched = false;
    }

    pub fn set_sys_call(&mut self, index: SysCallIndex, action: SysCall) {
        self.syscalls.set(index, action);
    }

    pub fn clear_sys_call(&mut self, index: SysCallIndex) {
        self.syscalls.clear(index);
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn rom(&self) -> &Rom {
        &self.rom
    }

    pub fn is_extension(&self) -> bool {
        self.extension
    }

    /// Number of loops currently entered.
    pub fn loop_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn cell(&self) -> Result<u8> {
        self.memory.read(self.registers.ptr)
    }

    fn set_cell(&mut self, byte: u8) -> Result<()> {
        self.memory.write(self.registers.ptr, byte)
    }

    fn sys_call(&mut self, index: SysCallIndex, args: &[u8]) -> i32 {
        match self.syscalls.take(index) {
            None => 0,
            Some(mut action) => {
                let val = action(&*self, args);
                self.syscalls.restore(index, action);
                val
            }
        }
    }

    fn execute(&mut self, pc: Address) -> Result<Flow> {
        let byte = self.rom.byte_at(pc)?;
        if self.extension && self.registers.comt && byte != b'\n' {
            return Ok(Flow::Next);
        }
        let opcode = Opcode::decode(byte, self.extension);
        if self.registers.is_skipping() {
            if let Opcode::Invalid(byte) = opcode {
                return Err(error!(InvalidInstruction, pc, byte));
            }
            self.skip(opcode);
            return Ok(Flow::Next);
        }
        match opcode {
            Opcode::PtrInc => {
                let ptr = self.registers.ptr + 1;
                if ptr >= self.memory.len() {
                    return Err(error!(PointerOutOfRange, pc));
                }
                self.registers.ptr = ptr;
            }
            Opcode::PtrDec => match self.registers.ptr.checked_sub(1) {
                Some(ptr) => self.registers.ptr = ptr,
                None => return Err(error!(PointerOutOfRange, pc)),
            },
            Opcode::ReadPtrInc => {
                let val = self.cell()?;
                self.set_cell(val.wrapping_add(1))?;
            }
            Opcode::ReadPtrDec => {
                let val = self.cell()?;
                self.set_cell(val.wrapping_sub(1))?;
            }
            Opcode::PutChar => {
                let val = self.cell()?;
                self.sys_call(SysCallIndex::Output, &[val]);
            }
            Opcode::GetChar => {
                let val = self.sys_call(SysCallIndex::Input, &[]);
                self.set_cell(val as u8)?;
            }
            Opcode::LoopStart => {
                self.registers.bktid += 1;
                if self.cell()? != 0 {
                    self.stack.push(pc).map_err(|e| e.at_address(pc))?;
                } else {
                    trace!(pc, depth = self.registers.bktid, "skip region opened");
                    self.registers.bktctr = self.registers.bktid;
                }
            }
            Opcode::LoopEnd => {
                let addr = self.stack.pop().map_err(|e| e.at_address(pc))?;
                self.registers.bktid = self.registers.bktid.saturating_sub(1);
                if self.cell()? != 0 {
                    trace!(pc, addr, "loop branch");
                    return Ok(Flow::Jump(addr));
                }
            }
            Opcode::Comment => self.registers.comt = true,
            Opcode::CommentEnd => self.registers.comt = false,
            Opcode::Whitespace | Opcode::PushStack | Opcode::SysCall => {}
            Opcode::PopStack => self.registers.ss = self.cell()?,
            Opcode::ReadPtrJmp => {
                let addr = self.cell()? as Address + 1;
                if addr > self.registers.pcend {
                    return Err(error!(AddressOutOfRange, pc; "JUMP PAST END OF PROGRAM"));
                }
                trace!(pc, addr, "indirect jump");
                return Ok(Flow::Jump(addr));
            }
            Opcode::Invalid(byte) => return Err(error!(InvalidInstruction, pc, byte)),
        }
        Ok(Flow::Next)
    }

    fn skip(&mut self, opcode: Opcode) {
        match opcode {
            Opcode::LoopStart => self.registers.bktid += 1,
            Opcode::LoopEnd => {
                if self.registers.bktid == self.registers.bktctr {
                    trace!(pc = self.registers.pc, "skip region closed");
                    self.registers.bktctr = 0;
                }
                self.registers.bktid = self.registers.bktid.saturating_sub(1);
            }
            Opcode::Comment => self.registers.comt = true,
            Opcode::CommentEnd => self.registers.comt = false,
            _ => {}
        }
    }
}
