use std::env;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    // Generated passwords live in this process's memory; keep them out
    // of core dumps.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let args: Vec<String> = env::args().collect();
    cli::run(&args)
}
