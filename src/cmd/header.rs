use clap::Args;
use keylabels::error::KlResult;
use keylabels::header;
use keylabels::layouts::KnownLayout;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct HeaderArgs {
    #[arg(short, long)]
    pub layout: KnownLayout,

    /// File to write, or a directory to write `<stem>.h` into.
    /// Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: HeaderArgs) -> KlResult<()> {
    let text = header::render_layout(args.layout);

    let Some(mut path) = args.output else {
        print!("{}", text);
        return Ok(());
    };
    if path.is_dir() {
        path.push(format!("{}.h", args.layout.header_stem()));
    }
    fs::write(&path, text)?;
    info!("Wrote {} header to {}", args.layout.display_name(), path.display());
    Ok(())
}
