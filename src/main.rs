use std::process;

fn main() {
    if let Err(e) = routefinder::solver() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
