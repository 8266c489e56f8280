use std::process;

fn main() {
    match notebook_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("notebook-convert error: {err:#}");
            process::exit(1);
        }
    }
}
