use clap::Parser;

use classpass::cli::{self, CliFlags};

fn main() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    let flags = CliFlags::parse();
    std::process::exit(cli::run(flags));
}
