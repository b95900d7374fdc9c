use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::Path;
use sxs::areas::workspace::Workspace;
use sxs::artifacts::core::PagerWriter;
use sxs::artifacts::diff::differencer::TextDifferencer;
use sxs::commands::diff::SideBySide;

#[derive(Parser)]
#[command(
    name = "sxs",
    version = "0.1.0",
    about = "A side-by-side text differencer",
    long_about = "Computes a side-by-side diff between two versions of a text document, \
    aligning them first line by line and then word by word inside changed regions, \
    so that small edits are shown exactly where they happened.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "Path to the original (left) document")]
    left: String,
    #[arg(index = 2, help = "Path to the modified (right) document")]
    right: String,
    #[arg(long, help = "Print directly to stdout without paging")]
    no_pager: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let workspace = Workspace;
    let left = workspace.read_document(Path::new(&cli.left))?;
    let right = workspace.read_document(Path::new(&cli.right))?;

    let text_diff = TextDifferencer::new(&left, &right).text_diff();

    if cli.no_pager || !std::io::stdout().is_terminal() {
        SideBySide::new(Box::new(std::io::stdout())).render(&text_diff)?;
    } else {
        let pager = Pager::new();
        SideBySide::new(Box::new(PagerWriter::new(pager.clone()))).render(&text_diff)?;
        minus::page_all(pager)?;
    }

    Ok(())
}
