use super::Address;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Read-only program memory
///
/// Holds a private copy of the program bytes, one byte per source
/// character. Nothing mutates it after construction.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rom {
    data: Vec<u8>,
}

impl Rom {
    pub fn new(binary: &[u8]) -> Rom {
        Rom {
            data: binary.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn byte_at(&self, addr: Address) -> Result<u8> {
        match self.data.get(addr) {
            Some(byte) => Ok(*byte),
            None => Err(error!(AddressOutOfRange, addr; "PROGRAM")),
        }
    }
}

impl From<&str> for Rom {
    fn from(code: &str) -> Rom {
        Rom::new(code.as_bytes())
    }
}
