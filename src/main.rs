use clickmate::cli::CliHandler;

fn main() {
    let mut cli = CliHandler::new();
    cli.run().unwrap();
}
