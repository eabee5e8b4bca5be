use super::Address;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Data memory
///
/// Fixed size and zero filled. Never resized after construction,
/// `clear` zeroes it in place.

#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    data: Vec<u8>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Memory {{ {} bytes }}", self.data.len())
    }
}

impl Memory {
    pub fn new(size: usize) -> Memory {
        Memory {
            data: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn read(&self, addr: Address) -> Result<u8> {
        match self.data.get(addr) {
            Some(byte) => Ok(*byte),
            None => Err(self.out_of_range(addr)),
        }
    }

    pub fn write(&mut self, addr: Address, byte: u8) -> Result<()> {
        match self.data.get_mut(addr) {
            Some(cell) => {
                *cell = byte;
                Ok(())
            }
            None => Err(self.out_of_range(addr)),
        }
    }

    /// Copies `bytes` in at `addr` and returns the count written.
    /// Nothing is written unless all of it fits.
    pub fn write_slice(&mut self, addr: Address, bytes: &[u8]) -> Result<usize> {
        let end = match addr.checked_add(bytes.len()) {
            Some(end) if end <= self.data.len() => end,
            _ => return Err(self.out_of_range(addr)),
        };
        self.data[addr..end].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    fn out_of_range(&self, addr: Address) -> Error {
        error!(AddressOutOfRange, addr; "MEMORY")
    }
}
