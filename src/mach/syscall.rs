use super::Cpu;

/// Host function slot. Receives the machine (read only) and the call
/// arguments, returns a value the opcode may use.
pub type SysCall = Box<dyn FnMut(&Cpu, &[u8]) -> i32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysCallIndex {
    Output,
    Input,
}

/// ## Host callback table
///
/// An empty slot is not an error. Calling it returns 0 so a machine
/// with nothing attached runs silently.

#[derive(Default)]
pub struct SysCalls {
    output: Option<SysCall>,
    input: Option<SysCall>,
}

impl std::fmt::Debug for SysCalls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SysCalls")
            .field("output", &self.output.is_some())
            .field("input", &self.input.is_some())
            .finish()
    }
}

impl SysCalls {
    pub fn new() -> SysCalls {
        SysCalls::default()
    }

    pub fn set(&mut self, index: SysCallIndex, action: SysCall) {
        *self.slot(index) = Some(action);
    }

    pub fn clear(&mut self, index: SysCallIndex) {
        *self.slot(index) = None;
    }

    /// Removes the function so it can run while the caller holds the `Cpu`.
    pub(super) fn take(&mut self, index: SysCallIndex) -> Option<SysCall> {
        self.slot(index).take()
    }

    pub(super) fn restore(&mut self, index: SysCallIndex, action: SysCall) {
        let slot = self.slot(index);
        if slot.is_none() {
            *slot = Some(action);
        }
    }

    fn slot(&mut self, index: SysCallIndex) -> &mut Option<SysCall> {
        match index {
            SysCallIndex::Output => &mut self.output,
            SysCallIndex::Input => &mut self.input,
        }
    }
}
