extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::Opcode;
use crate::mach::{Address, Event, Options, Runtime};
use ansi_term::{Colour, Style};
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "brainphuck")]
#[command(about = "Run a BrainPhuck program", long_about = None)]
pub struct Args {
    /// Program source file
    pub file: PathBuf,

    /// Allow comments, whitespace and the extension opcodes
    #[arg(short = 'x', long)]
    pub extension: bool,

    /// Data memory size in bytes
    #[arg(short = 'm', long, default_value_t = Options::default().memory_size)]
    pub memory_size: usize,

    /// Pause and dump registers before executing this program address
    #[arg(short = 'b', long)]
    pub breakpoint: Option<Address>,

    /// Instructions executed between interrupt checks
    #[arg(long, default_value = "5000")]
    pub cycles: usize,
}

impl Args {
    fn options(&self) -> Options {
        Options::default()
            .with_extension(self.extension)
            .with_memory_size(self.memory_size)
    }
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    match main_loop(&args, interrupted) {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            std::process::exit(1);
        }
    }
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> std::io::Result<i32> {
    let code = std::fs::read_to_string(&args.file)?;
    let mut runtime = match Runtime::new(&code, args.options()) {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return Ok(1);
        }
    };

    runtime.on_output(|byte| {
        let mut stdout = std::io::stdout();
        let result = stdout.write_all(&[byte]).and_then(|_| {
            if byte == b'\n' {
                stdout.flush()
            } else {
                Ok(())
            }
        });
        if let Err(error) = result {
            warn!(%error, "stdout write failed");
        }
    });

    let input = Rc::new(RefCell::new(Input::new(interrupted.clone())?));
    runtime.on_input(move |byte| match input.borrow_mut().next_byte() {
        Ok(Some(b)) => *byte = b,
        Ok(None) => {}
        Err(error) => warn!(%error, "stdin read failed"),
    });

    if let Some(addr) = args.breakpoint {
        runtime.set_breakpoint(addr);
    }

    let status = loop {
        if interrupted.load(Ordering::SeqCst) {
            eprintln!(
                "{}",
                Style::new()
                    .bold()
                    .paint(format!("BREAK AT {}", runtime.registers().pc))
            );
            break 130;
        }
        match runtime.execute(args.cycles) {
            Event::Running => {}
            Event::Stopped => break 0,
            Event::Breakpoint(addr) => dump(&runtime, addr),
            Event::Fault(error) => {
                std::io::stdout().flush()?;
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                break 1;
            }
        }
    };
    std::io::stdout().flush()?;
    Ok(status)
}

fn dump(runtime: &Runtime, addr: Address) {
    let r = runtime.registers();
    let op = match runtime.program().byte_at(addr) {
        Ok(byte) => Opcode::decode(byte, runtime.is_extension()).to_string(),
        Err(_) => "END".to_string(),
    };
    let cell = match runtime.memory().read(r.ptr) {
        Ok(byte) => byte.to_string(),
        Err(_) => "?".to_string(),
    };
    let _ = std::io::stdout().flush();
    eprintln!(
        "{} {}",
        Colour::Yellow.bold().paint(format!("BREAK AT {}", addr)),
        Style::new().dimmed().paint(format!(
            "OP {} PTR {} CELL {} BKTID {} BKTCTR {} SS {}",
            op, r.ptr, cell, r.bktid, r.bktctr, r.ss
        )),
    );
}

enum Reader {
    Line(Interface<DefaultTerminal>),
    Raw(std::io::Stdin),
}

/// Bytes for `,` come from a line editor when stdin is a terminal,
/// otherwise straight from stdin. End of input reads as zero.
struct Input {
    reader: Reader,
    pending: VecDeque<u8>,
    eof: bool,
    interrupted: Arc<AtomicBool>,
}

impl Input {
    fn new(interrupted: Arc<AtomicBool>) -> std::io::Result<Input> {
        let reader = if std::io::stdin().is_terminal() {
            let interface = Interface::new("brainphuck")?;
            interface.set_prompt("")?;
            interface.set_report_signal(Signal::Interrupt, true);
            Reader::Line(interface)
        } else {
            Reader::Raw(std::io::stdin())
        };
        Ok(Input {
            reader,
            pending: VecDeque::new(),
            eof: false,
            interrupted,
        })
    }

    fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        if self.pending.is_empty() && !self.eof {
            std::io::stdout().flush()?;
            self.fill()?;
        }
        Ok(self.pending.pop_front())
    }

    fn fill(&mut self) -> std::io::Result<()> {
        match &mut self.reader {
            Reader::Line(interface) => match interface.read_line()? {
                ReadResult::Input(line) => {
                    self.pending.extend(line.bytes());
                    self.pending.push_back(b'\n');
                }
                ReadResult::Signal(Signal::Interrupt) => {
                    self.interrupted.store(true, Ordering::SeqCst);
                    self.eof = true;
                }
                ReadResult::Signal(_) | ReadResult::Eof => self.eof = true,
            },
            Reader::Raw(stdin) => {
                let mut buf = [0; 256];
                let len = stdin.lock().read(&mut buf)?;
                if len == 0 {
                    self.eof = true;
                }
                self.pending.extend(&buf[..len]);
            }
        }
        Ok(())
    }
}
