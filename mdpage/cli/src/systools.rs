//! The `systools` command stub.
//!
//! A minimal option parser that runs a named command. The only command with
//! behaviour of its own is `date`, which also prints the local time.
//!
//! Everything is expressed through [`run`], which takes the arguments and the
//! output streams and returns the process exit code, so the parser can be
//! tested without spawning a process.

use chrono::{Local, NaiveDateTime};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Exit code for malformed options.
pub const EXIT_USAGE: i32 = 2;

/// Exit code when the command's output cannot be written.
pub const EXIT_FAILURE: i32 = 1;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// systools - system admin tools
#[derive(Parser, Debug)]
#[command(name = "systools", version, disable_version_flag = true)]
pub struct SysTools {
    /// Command name to execute
    #[arg(short, long, value_name = "NAME")]
    pub cmd: Option<String>,

    /// Dump output to FILE ("-" for stdout)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub output: PathBuf,

    /// Print version
    #[arg(short = 'v', long)]
    pub version: bool,
}

/// Runs the stub with the system clock.
///
/// `args` includes the program name, as with [`std::env::args_os`].
///
/// ## Examples
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = mdpage_cli::systools::run(["systools", "--cmd", "ls"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "command: ls\n");
/// ```
pub fn run<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with_clock(args, out, err, || Local::now().naive_local())
}

/// Runs the stub, reading the time from `now` when the `date` command needs it.
pub fn run_with_clock<I, T, C>(args: I, out: &mut dyn Write, err: &mut dyn Write, now: C) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    C: FnOnce() -> NaiveDateTime,
{
    let cli = match SysTools::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    if cli.version {
        let written = writeln!(out, "systools {}", env!("CARGO_PKG_VERSION"));
        return if written.is_ok() { 0 } else { EXIT_FAILURE };
    }

    let Some(cmd) = cli.cmd.as_deref() else {
        return 0;
    };

    let result = if cli.output.as_os_str() == "-" {
        run_command(cmd, now, out)
    } else {
        File::create(&cli.output).and_then(|mut file| run_command(cmd, now, &mut file))
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "error: {}: {e}", cli.output.display());
            EXIT_FAILURE
        }
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", e.render());
        }
        _ => {
            let _ = write!(err, "{}", e.render());
            let _ = writeln!(err);
            let _ = write!(err, "{}", SysTools::command().render_help());
        }
    }
    e.exit_code()
}

/// Prints the command name and, for `date`, the current time.
///
/// ## Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mdpage_cli::systools::run_command;
///
/// let at = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
/// let mut out = Vec::new();
/// run_command("date", || at, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "command: date\n2024-01-02 03:04:05\n");
/// ```
pub fn run_command<W, C>(cmd: &str, now: C, out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
    C: FnOnce() -> NaiveDateTime,
{
    writeln!(out, "command: {cmd}")?;
    if cmd == "date" {
        writeln!(out, "{}", now().format(TIMESTAMP_FORMAT))?;
    }
    out.flush()
}
