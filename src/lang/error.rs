use super::Address;

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: u16,
    address: Option<Address>,
    byte: Option<u8>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident, $addr:expr, $byte:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .with_byte($byte)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            address: None,
            byte: None,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn is_breakpoint(&self) -> bool {
        self.is(ErrorCode::Breakpoint)
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn byte(&self) -> Option<u8> {
        self.byte
    }

    pub fn at_address(&self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            address: Some(address),
            ..self.clone()
        }
    }

    pub fn with_byte(&self, byte: u8) -> Error {
        debug_assert!(self.byte.is_none());
        Error {
            byte: Some(byte),
            ..self.clone()
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InitializationFault = 1,
    Breakpoint = 2,
    InvalidInstruction = 3,
    Underflow = 4,
    Overflow = 5,
    PointerOutOfRange = 6,
    AddressOutOfRange = 7,
    NotReady = 8,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "INITIALIZATION FAULT",
            2 => "BREAKPOINT",
            3 => "INVALID INSTRUCTION",
            4 => "LOOP STACK UNDERFLOW",
            5 => "LOOP STACK OVERFLOW",
            6 => "POINTER OUT OF RANGE",
            7 => "ADDRESS OUT OF RANGE",
            8 => "CPU NOT READY",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {}", address));
        }
        if let Some(byte) = self.byte {
            if byte.is_ascii_graphic() {
                suffix.push_str(&format!(" BYTE {:#04x} '{}'", byte, byte as char));
            } else {
                suffix.push_str(&format!(" BYTE {:#04x}", byte));
            }
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "CPU FAULT {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
