use super::{Cpu, Memory, Rom, SysCallIndex};
use std::cell::RefCell;
use std::rc::Rc;

mod breakpoint_test;

fn cpu(code: &str) -> Cpu {
    cpu_with(code, false)
}

fn cpu_with(code: &str, extension: bool) -> Cpu {
    let mut cpu = Cpu::new(Memory::new(64), Rom::from(code), extension);
    cpu.initialize().unwrap();
    cpu
}

fn capture(cpu: &mut Cpu) -> Rc<RefCell<Vec<u8>>> {
    let out = Rc::new(RefCell::new(vec![]));
    let moved = out.clone();
    cpu.set_sys_call(
        SysCallIndex::Output,
        Box::new(move |_: &Cpu, args: &[u8]| {
            moved.borrow_mut().extend_from_slice(args);
            0
        }),
    );
    out
}

fn feed(cpu: &mut Cpu, bytes: &[u8]) {
    let mut input = bytes.to_vec().into_iter();
    cpu.set_sys_call(
        SysCallIndex::Input,
        Box::new(move |_: &Cpu, _: &[u8]| input.next().map(i32::from).unwrap_or(0)),
    );
}

fn run(cpu: &mut Cpu) -> Vec<u8> {
    let out = capture(cpu);
    cpu.run().unwrap();
    let bytes = out.borrow().clone();
    bytes
}
