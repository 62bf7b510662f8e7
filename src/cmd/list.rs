use crate::reports;
use clap::Args;
use keylabels::layouts::KnownLayout;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[arg(short, long)]
    pub layout: KnownLayout,
}

pub fn run_list() {
    let layouts: Vec<KnownLayout> = KnownLayout::iter().collect();
    reports::print_summary(&layouts);
    for layout in layouts {
        reports::print_layout_grid(&layout.table());
    }
}

pub fn run_show(args: ShowArgs) {
    let table = args.layout.table();
    reports::print_layout_grid(&table);
    reports::print_groupings(&table);
}
