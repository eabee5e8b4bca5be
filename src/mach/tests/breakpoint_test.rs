use super::*;
use crate::mach::State;

#[test]
fn test_breakpoint_stops_before_instruction() {
    let mut c = cpu("+++.");
    let out = capture(&mut c);
    c.set_breakpoint(2);
    let error = c.run().unwrap_err();
    assert!(error.is_breakpoint());
    assert_eq!(error.address(), Some(2));
    assert_eq!(c.state(), State::BreakpointHit);
    assert_eq!(c.cell(), Ok(2));
    c.run().unwrap();
    assert_eq!(*out.borrow(), vec![3]);
}

#[test]
fn test_breakpoint_hits_once_per_pass() {
    let mut c = cpu("+++[-]");
    c.set_breakpoint(4);
    let mut hits = 0;
    loop {
        match c.run() {
            Ok(()) => break,
            Err(error) if error.is_breakpoint() => hits += 1,
            Err(error) => panic!("{}", error),
        }
    }
    assert_eq!(hits, 3);
}

#[test]
fn test_breakpoint_at_address_zero() {
    let mut c = cpu("+");
    c.set_breakpoint(0);
    assert!(c.step().unwrap_err().is_breakpoint());
    assert_eq!(c.cell(), Ok(0));
    assert_eq!(c.step(), Ok(true));
    assert_eq!(c.cell(), Ok(1));
}

#[test]
fn test_breakpoint_at_end_of_program() {
    let mut c = cpu("+");
    c.set_breakpoint(1);
    assert_eq!(c.step(), Ok(true));
    assert!(c.step().unwrap_err().is_breakpoint());
    assert_eq!(c.step(), Ok(false));
}

#[test]
fn test_clear_breakpoint() {
    let mut c = cpu("++");
    c.set_breakpoint(1);
    c.clear_breakpoint();
    assert_eq!(c.registers().bkpt, None);
    c.run().unwrap();
    assert_eq!(c.cell(), Ok(2));
}

#[test]
fn test_breakpoint_survives_reset() {
    let mut c = cpu("++");
    c.set_breakpoint(1);
    assert!(c.run().unwrap_err().is_breakpoint());
    c.reset().unwrap();
    assert_eq!(c.registers().bkpt, Some(1));
    assert!(c.run().unwrap_err().is_breakpoint());
    assert_eq!(c.cell(), Ok(1));
}
