use std::io;

use clap::Parser;
use directory_core::DirectoryClient;

use directory_cli::{App, UreqTransport};

/// Interactive client for the employee directory service.
#[derive(Parser, Debug)]
#[command(name = "directory", about = "Employee directory client", long_about = None)]
struct Args {
    /// Base URL of the directory service
    #[arg(long, default_value = "http://localhost:5500")]
    base_url: String,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let client = DirectoryClient::new(&args.base_url);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(client, UreqTransport::new(), stdin.lock(), stdout.lock());
    app.run()
}
