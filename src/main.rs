fn main() {
    if let Err(e) = country_explorer::cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
