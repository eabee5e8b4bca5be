#![allow(dead_code)]

use brainphuck::mach::{Event, Options, Runtime};
use std::cell::RefCell;
use std::rc::Rc;

pub fn exec(code: &str) -> Vec<u8> {
    exec_with(code, Options::default(), &[])
}

pub fn exec_with(code: &str, options: Options, input: &[u8]) -> Vec<u8> {
    let mut runtime = Runtime::new(code, options).unwrap();
    let out = attach(&mut runtime, input);
    runtime.run().unwrap();
    let bytes = out.borrow().clone();
    bytes
}

pub fn attach(runtime: &mut Runtime, input: &[u8]) -> Rc<RefCell<Vec<u8>>> {
    let out = Rc::new(RefCell::new(Vec::new()));
    let sink = out.clone();
    runtime.on_output(move |byte| sink.borrow_mut().push(byte));
    let mut input = input.to_vec().into_iter();
    runtime.on_input(move |byte| {
        if let Some(b) = input.next() {
            *byte = b;
        }
    });
    out
}

/// Executes until something other than `Event::Running` happens or
/// `rounds` slices of `cycles` instructions have gone by.
pub fn exec_n(runtime: &mut Runtime, cycles: usize, rounds: usize) -> Event {
    for _ in 0..rounds {
        match runtime.execute(cycles) {
            Event::Running => {}
            event => return event,
        }
    }
    Event::Running
}
