use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    fn overflow_error(&self) -> Error {
        error!(Overflow; self.overflow_message)
    }
    fn underflow_error(&self) -> Error {
        error!(Underflow)
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len() {
            return Err(self.overflow_error());
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_stack_is_lifo() {
        let mut s: Stack<usize> = Stack::new("LOOPS NESTED TOO DEEP");
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.last(), Some(&2));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert!(s.pop().unwrap_err().is(ErrorCode::Underflow));
    }

    #[test]
    fn test_stack_overflow() {
        let mut s: Stack<u8> = Stack::new("LOOPS NESTED TOO DEEP");
        for _ in 0..u16::max_value() {
            s.push(0).unwrap();
        }
        let error = s.push(0).unwrap_err();
        assert!(error.is(ErrorCode::Overflow));
        assert_eq!(s.len(), u16::max_value() as usize);
    }
}
