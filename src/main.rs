//! CLI entry point for synthetic rectangle dataset generation

use clap::Parser;
use mutinfo::io::cli::{Cli, DatasetExporter};
use mutinfo::io::logging::init_logging;

fn main() -> mutinfo::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let exporter = DatasetExporter::new(cli);
    exporter.run().map(|_| ())
}
