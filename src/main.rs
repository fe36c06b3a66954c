fn main() {
    if let Err(err) = tok::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
