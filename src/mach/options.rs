/// ## Machine configuration

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Recognize comments, whitespace and the stack/jump opcodes.
    pub enable_extension: bool,
    /// Data memory size in bytes.
    pub memory_size: usize,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            enable_extension: false,
            memory_size: 0x4000,
        }
    }
}

impl Options {
    pub fn with_extension(self, enable_extension: bool) -> Options {
        Options {
            enable_extension,
            ..self
        }
    }

    pub fn with_memory_size(self, memory_size: usize) -> Options {
        Options {
            memory_size,
            ..self
        }
    }
}
