use clap::Args;
use keylabels::config::GeneratorConfig;
use keylabels::error::KlResult;
use keylabels::geometry::{self, ergogen};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// ergogen `points.yaml` (YAML or JSON).
    pub points: PathBuf,

    /// Write the ZMK physical layout here.
    #[arg(long)]
    pub dtsi: Option<PathBuf>,

    /// Write the keymap-drawer layout here.
    #[arg(long)]
    pub json: Option<PathBuf>,

    #[command(flatten)]
    pub config: GeneratorConfig,
}

pub fn run(args: GenerateArgs) -> KlResult<()> {
    let points = ergogen::load_points(&args.points)?;
    let layout = ergogen::generate(&points, &args.config)?;

    if let Some(path) = &args.dtsi {
        geometry::write_dtsi(path, &layout.dts)?;
    }
    if let Some(path) = &args.json {
        geometry::write_drawer_json(path, &layout.drawer, &args.config)?;
    }

    let xs = layout.dts.iter().map(|k| k.x);
    let ys = layout.dts.iter().map(|k| k.y);
    println!("\nDTS Layout dimensions:");
    println!(
        "  X range: {} - {} units",
        xs.clone().min().unwrap_or(0),
        xs.max().unwrap_or(0)
    );
    println!(
        "  Y range: {} - {} units",
        ys.clone().min().unwrap_or(0),
        ys.max().unwrap_or(0)
    );

    let jx = || layout.drawer.iter().map(|k| k.x);
    let jy = || layout.drawer.iter().map(|k| k.y);
    println!("\nJSON Layout dimensions:");
    println!(
        "  X range: {:.2} - {:.2}",
        jx().fold(f64::INFINITY, f64::min),
        jx().fold(f64::NEG_INFINITY, f64::max)
    );
    println!(
        "  Y range: {:.2} - {:.2}",
        jy().fold(f64::INFINITY, f64::min),
        jy().fold(f64::NEG_INFINITY, f64::max)
    );
    println!("  Matrix positions: {} keys total", layout.drawer.len());
    Ok(())
}
