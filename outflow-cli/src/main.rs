use anyhow::Result;
use structopt::StructOpt;

use outflow_cli::Outflow;

fn main() -> Result<()> {
    Outflow::from_args().run()
}
