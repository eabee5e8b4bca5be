/// ## Instruction set
///
/// Eight core operators plus the extension set. Extension bytes only
/// decode to their own variants when extension mode is enabled, every
/// other byte becomes `Invalid` and faults when executed.
///
/// See <https://en.wikipedia.org/wiki/Brainfuck>

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Core
    /// `>` move the data pointer right.
    PtrInc,
    /// `<` move the data pointer left.
    PtrDec,
    /// `+` increment the current cell, wrapping.
    ReadPtrInc,
    /// `-` decrement the current cell, wrapping.
    ReadPtrDec,
    /// `.` send the current cell to the output syscall.
    PutChar,
    /// `,` store the input syscall result in the current cell.
    GetChar,
    /// `[` enter the loop or skip to the matching `]`.
    LoopStart,
    /// `]` branch back to the matching `[` while the cell is not zero.
    LoopEnd,

    // *** Extension
    /// `#` start of a line comment.
    Comment,
    /// `\n` end of a line comment.
    CommentEnd,
    /// `\t`, `\r` or space.
    Whitespace,
    /// `(` reserved.
    PushStack,
    /// `)` load the stack register from the current cell.
    PopStack,
    /// `@` jump to the program address held in the current cell.
    ReadPtrJmp,
    /// `&` reserved.
    SysCall,

    Invalid(u8),
}

impl Opcode {
    pub fn decode(byte: u8, extension: bool) -> Opcode {
        use Opcode::*;
        match byte {
            b'>' => PtrInc,
            b'<' => PtrDec,
            b'+' => ReadPtrInc,
            b'-' => ReadPtrDec,
            b'.' => PutChar,
            b',' => GetChar,
            b'[' => LoopStart,
            b']' => LoopEnd,
            _ if !extension => Invalid(byte),
            b'#' => Comment,
            b'\n' => CommentEnd,
            b'\t' | b'\r' | b' ' => Whitespace,
            b'(' => PushStack,
            b')' => PopStack,
            b'@' => ReadPtrJmp,
            b'&' => SysCall,
            _ => Invalid(byte),
        }
    }

    pub fn is_extension(&self) -> bool {
        use Opcode::*;
        matches!(
            self,
            Comment | CommentEnd | Whitespace | PushStack | PopStack | ReadPtrJmp | SysCall
        )
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            PtrInc => write!(f, "PTRINC"),
            PtrDec => write!(f, "PTRDEC"),
            ReadPtrInc => write!(f, "INC"),
            ReadPtrDec => write!(f, "DEC"),
            PutChar => write!(f, "PUTCHAR"),
            GetChar => write!(f, "GETCHAR"),
            LoopStart => write!(f, "LOOP"),
            LoopEnd => write!(f, "ENDLOOP"),

            Comment => write!(f, "REM"),
            CommentEnd => write!(f, "ENDREM"),
            Whitespace => write!(f, "NOP"),
            PushStack => write!(f, "PUSH"),
            PopStack => write!(f, "POP"),
            ReadPtrJmp => write!(f, "JUMP"),
            SysCall => write!(f, "SYSCALL"),

            Invalid(b) => write!(f, "INVALID({:#04x})", b),
        }
    }
}
