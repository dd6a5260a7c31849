use ls8::core::processor::{CycleStatus, Processor};
use ls8::core::program::Program;
use ls8::errors::LoadError;
use ls8::external::output::ConsoleDriver;
use ls8::external::trace::{LogTracer, TraceSink};
use simple_logger::SimpleLogger;
use std::env;
use std::process::ExitCode;

const EXIT_FAULT: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let trace = args.iter().any(|arg| arg == "--trace");
    let paths: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();
    if paths.len() != 1 {
        eprintln!("usage: ls8 [--trace] <program.ls8>");
        return Ok(ExitCode::from(EXIT_FAULT));
    }

    let level = if trace {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).env().init()?;

    let prog = match Program::from_path(paths[0]) {
        Ok(prog) => prog,
        Err(err @ LoadError::ProgramNotFound(_)) => {
            log::error!("{}", err);
            return Ok(ExitCode::from(EXIT_NOT_FOUND));
        }
        Err(err) => return Err(err.into()),
    };

    let mut ls8 = Processor::default();
    ls8.init_ram(&prog)?;
    let mut console = ConsoleDriver::stdout(&ls8.console);
    let mut tracer = LogTracer;

    loop {
        if trace {
            tracer.record(&ls8.trace_frame());
        }
        match ls8.cycle() {
            Ok(CycleStatus::FlushOutput) => console.flush()?,
            Ok(CycleStatus::Continue) => {}
            Ok(CycleStatus::Halted) => break,
            Err(err) => {
                console.flush()?;
                log::error!("{}", err);
                return Ok(ExitCode::from(EXIT_FAULT));
            }
        }
    }
    console.flush()?;
    Ok(ExitCode::SUCCESS)
}
