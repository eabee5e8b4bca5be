mod common;
use brainphuck::lang::ErrorCode;
use brainphuck::mach::{Event, Options, Runtime, State};
use common::*;

#[test]
fn test_output_is_count_difference_mod_256() {
    for (inc, dec) in [(0, 0), (5, 2), (2, 5), (255, 0), (256, 0), (300, 1), (0, 513)].iter() {
        let code = format!("{}{}.", "+".repeat(*inc), "-".repeat(*dec));
        let expected = ((*inc as i64 - *dec as i64).rem_euclid(256)) as u8;
        assert_eq!(exec(&code), vec![expected], "{} + and {} -", inc, dec);
    }
}

#[test]
fn test_reset_reproduces_output() {
    let code = "++++++++[>++++++++<-]>+.+.>-[+.]";
    let mut r = Runtime::new(code, Options::default()).unwrap();
    let out = attach(&mut r, &[]);
    r.run().unwrap();
    let first = out.borrow().clone();
    assert_eq!(first, vec![65, 66, 0]);
    r.reset().unwrap();
    assert_eq!(r.state(), State::Ready);
    r.run().unwrap();
    assert_eq!(*out.borrow(), [first.clone(), first].concat());
}

#[test]
fn test_reset_recovers_from_fault() {
    let mut r = Runtime::new("+.]", Options::default()).unwrap();
    let out = attach(&mut r, &[]);
    assert!(r.run().unwrap_err().is(ErrorCode::Underflow));
    assert_eq!(r.state(), State::Faulted);
    r.reset().unwrap();
    assert!(r.run().unwrap_err().is(ErrorCode::Underflow));
    assert_eq!(*out.borrow(), vec![1, 1]);
}

#[test]
fn test_bytes_outside_core_set_always_fault() {
    for size in [1, 0x2000, 0x4000].iter() {
        let options = Options::default().with_memory_size(*size);
        for byte in 0..=255u8 {
            if b"><+-.,[]".contains(&byte) || byte >= 0x80 {
                continue;
            }
            let code = (byte as char).to_string();
            let mut r = Runtime::new(&code, options).unwrap();
            let error = r.run().unwrap_err();
            assert!(error.is(ErrorCode::InvalidInstruction), "{:?}", code);
            assert_eq!(error.byte(), Some(byte));
            assert_eq!(error.address(), Some(0));
        }
    }
}

#[test]
fn test_non_ascii_source_faults() {
    let mut r = Runtime::new("+é", Options::default()).unwrap();
    let error = r.run().unwrap_err();
    assert!(error.is(ErrorCode::InvalidInstruction));
    assert_eq!(error.address(), Some(1));
    assert_eq!(error.byte(), Some(0xC3));
}

#[test]
fn test_breakpoint_once_per_pass() {
    let mut r = Runtime::new("+++[>+<-]>.", Options::default()).unwrap();
    let out = attach(&mut r, &[]);
    r.set_breakpoint(5);
    let mut cells = vec![];
    loop {
        match exec_n(&mut r, 100, 10) {
            Event::Breakpoint(addr) => {
                assert_eq!(addr, 5);
                cells.push(r.memory().read(1).unwrap());
            }
            Event::Stopped => break,
            event => panic!("{:?}", event),
        }
    }
    assert_eq!(cells, vec![0, 1, 2]);
    assert_eq!(*out.borrow(), vec![3]);
}

#[test]
fn test_infinite_loop_keeps_running() {
    let mut r = Runtime::new("+[]", Options::default()).unwrap();
    assert_eq!(exec_n(&mut r, 1000, 5), Event::Running);
    assert_eq!(r.state(), State::Running);
    assert_eq!(r.registers().bktid, 1);
}

#[test]
fn test_step_until_done() {
    let mut r = Runtime::new("++.", Options::default()).unwrap();
    let out = attach(&mut r, &[]);
    let mut steps = 0;
    while r.step().unwrap() {
        steps += 1;
    }
    assert_eq!(steps, 3);
    assert_eq!(*out.borrow(), vec![2]);
    assert_eq!(r.execute(10), Event::Stopped);
}
