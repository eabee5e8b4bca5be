use super::{Address, Cpu, Memory, Options, Registers, Rom, State, SysCallIndex};
use crate::lang::Error;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Events
///
/// What happened during a call to `Runtime::execute`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The cycle budget ran out, call `execute` again to continue.
    Running,
    /// The program ran to its end.
    Stopped,
    /// Execution paused before the instruction at this address.
    Breakpoint(Address),
    Fault(Error),
}

#[derive(Default)]
struct Hooks {
    stdout: Vec<Box<dyn FnMut(u8)>>,
    stdin: Vec<Box<dyn FnMut(&mut u8)>>,
}

/// ## Host facing machine
///
/// Owns a `Cpu` and routes its syscalls to any number of subscribers.
/// Output subscribers each see every byte. Input subscribers are called
/// in order with a byte that starts at zero, whatever the last one
/// leaves there lands in the current cell.

pub struct Runtime {
    cpu: Cpu,
    hooks: Rc<RefCell<Hooks>>,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Runtime {{ {:?} }}", self.cpu)
    }
}

impl Runtime {
    pub fn new(code: &str, options: Options) -> Result<Runtime> {
        let memory = Memory::new(options.memory_size);
        let rom = Rom::new(code.as_bytes());
        let mut cpu = Cpu::new(memory, rom, options.enable_extension);
        let hooks = Rc::new(RefCell::new(Hooks::default()));

        let stdout = Rc::clone(&hooks);
        cpu.set_sys_call(
            SysCallIndex::Output,
            Box::new(move |_: &Cpu, args: &[u8]| {
                if let Some(byte) = args.first() {
                    for hook in stdout.borrow_mut().stdout.iter_mut() {
                        hook(*byte);
                    }
                }
                0
            }),
        );
        let stdin = Rc::clone(&hooks);
        cpu.set_sys_call(
            SysCallIndex::Input,
            Box::new(move |_: &Cpu, _: &[u8]| {
                let mut byte = 0;
                for hook in stdin.borrow_mut().stdin.iter_mut() {
                    hook(&mut byte);
                }
                byte as i32
            }),
        );

        cpu.initialize()?;
        debug!(?options, "runtime created");
        Ok(Runtime { cpu, hooks })
    }

    pub fn on_output<F: FnMut(u8) + 'static>(&mut self, hook: F) {
        self.hooks.borrow_mut().stdout.push(Box::new(hook));
    }

    pub fn on_input<F: FnMut(&mut u8) + 'static>(&mut self, hook: F) {
        self.hooks.borrow_mut().stdin.push(Box::new(hook));
    }

    pub fn run(&mut self) -> Result<()> {
        self.cpu.run()
    }

    pub fn step(&mut self) -> Result<bool> {
        self.cpu.step()
    }

    pub fn reset(&mut self) -> Result<()> {
        self.cpu.reset()
    }

    /// Runs at most `cycles` instructions. Hosts that need to interrupt
    /// a program call this in a loop and stop calling it.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            match self.cpu.step() {
                Ok(true) => {}
                Ok(false) => return Event::Stopped,
                Err(error) => {
                    return match error.address() {
                        Some(addr) if error.is_breakpoint() => Event::Breakpoint(addr),
                        _ => Event::Fault(error),
                    }
                }
            }
        }
        Event::Running
    }

    pub fn set_breakpoint(&mut self, addr: Address) {
        self.cpu.set_breakpoint(addr)
    }

    pub fn clear_breakpoint(&mut self) {
        self.cpu.clear_breakpoint()
    }

    pub fn state(&self) -> State {
        self.cpu.state()
    }

    pub fn registers(&self) -> &Registers {
        self.cpu.registers()
    }

    pub fn memory(&self) -> &Memory {
        self.cpu.memory()
    }

    pub fn is_extension(&self) -> bool {
        self.cpu.is_extension()
    }

    pub fn program(&self) -> &Rom {
        self.cpu.rom()
    }
}
