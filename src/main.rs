fn main() {
    if let Err(err) = folio::cli::main() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
