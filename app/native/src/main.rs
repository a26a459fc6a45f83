//! Tessera - edit yabai, skhd and macOS animation settings from the terminal.

fn main() {
    if let Err(err) = tessera_lib::cli::run() {
        eprintln!("tessera: {err}");
        std::process::exit(1);
    }
}
