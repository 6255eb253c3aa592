//! Entry point for the `systools` command stub.

use std::io;

fn main() {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = mdpage_cli::systools::run(
        std::env::args_os(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    std::process::exit(code);
}
