use std::io;

fn main() {
    pokerhud_cli::logging::init_logging();
    let code = pokerhud_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
