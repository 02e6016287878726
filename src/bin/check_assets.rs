//! Reports whether `assets/icon.png` exists next to this executable.
//!
//! Always exits successfully; problems are printed, never returned.

use std::io;

use ai_chat::assets::{check_assets, executable_dir};

fn main() {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    check_assets(executable_dir(), &mut out);
}
