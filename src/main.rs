use roman_calc::{Calculator, logging, run};

fn main() {
    logging::init_logger();
    tracing::debug!("starting calculator");

    if let Err(e) = run(&Calculator::default()) {
        tracing::error!("i/o failure: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
