use clap::Parser;
use significant_bits::significant_bit;

fn main() {
    significant_bit::init_tracing();
    let args = significant_bit::Args::parse();

    let result = significant_bit::run(&args);
    std::process::exit(significant_bit::exit_status(&result));
}
