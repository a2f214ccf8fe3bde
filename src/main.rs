use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    portfolio_assistant::cli::main()
}
