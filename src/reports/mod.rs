use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keylabels::labels::{Grouping, KeyLabel};
use keylabels::layouts::{KnownLayout, LayoutTable};
use keylabels::verifier::TableIssue;
use strum::IntoEnumIterator;

fn key_cell(table: &LayoutTable, label: KeyLabel) -> Cell {
    let cell = match table.index_of(label) {
        Some(i) => Cell::new(format!("{}\n{}", label, i)),
        None => Cell::new(format!("{}\n--", label)).fg(Color::Red),
    };
    cell.set_alignment(CellAlignment::Center)
}

fn blank() -> Cell {
    Cell::new("")
}

/// Prints the board as a 13-column grid: six keys per half with a spacer
/// column between, thumbs centred under the inner columns.
pub fn print_layout_grid(table: &LayoutTable) {
    println!("\nLayout: {}", table.name);
    let mut grid = Table::new();
    grid.load_preset(ASCII_FULL);

    let labels: Vec<KeyLabel> = KeyLabel::iter().collect();
    for row in labels[..36].chunks(12) {
        let mut cells: Vec<Cell> = row[..6].iter().map(|&l| key_cell(table, l)).collect();
        cells.push(blank());
        cells.extend(row[6..].iter().map(|&l| key_cell(table, l)));
        grid.add_row(cells);
    }

    let mut thumbs: Vec<Cell> = (0..3).map(|_| blank()).collect();
    thumbs.extend(labels[36..39].iter().map(|&l| key_cell(table, l)));
    thumbs.push(blank());
    thumbs.extend(labels[39..].iter().map(|&l| key_cell(table, l)));
    thumbs.extend((0..3).map(|_| blank()));
    grid.add_row(thumbs);

    println!("{}", grid);
}

pub fn print_groupings(table: &LayoutTable) {
    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec![
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("Indices"),
    ]);

    for group in Grouping::iter() {
        let indices: Vec<String> = table.group(group).iter().map(|i| i.to_string()).collect();
        out.add_row(vec![
            Cell::new(group.to_string()).fg(Color::Cyan),
            Cell::new(indices.join(" ")),
        ]);
    }
    println!("{}", out);
}

/// One line per layout: name, key count, highest index and unused slots.
pub fn print_summary(layouts: &[KnownLayout]) {
    let mut out = Table::new();
    out.load_preset(ASCII_FULL);
    out.set_header(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Id"),
        Cell::new("Header"),
        Cell::new("Keys"),
        Cell::new("Max"),
        Cell::new("Gaps"),
    ]);

    for layout in layouts {
        let indices = layout.indices();
        let max = indices.iter().copied().max().unwrap_or(0);
        let gaps: Vec<String> = (0..=max)
            .filter(|i| !indices.contains(i))
            .map(|i| i.to_string())
            .collect();
        out.add_row(vec![
            Cell::new(layout.display_name()),
            Cell::new(layout.to_string()),
            Cell::new(format!("{}.h", layout.header_stem())),
            Cell::new(indices.len()).set_alignment(CellAlignment::Right),
            Cell::new(max).set_alignment(CellAlignment::Right),
            Cell::new(if gaps.is_empty() {
                "-".to_string()
            } else {
                gaps.join(",")
            }),
        ]);
    }
    println!("{}", out);
}

pub fn print_issues(name: &str, issues: &[TableIssue]) {
    if issues.is_empty() {
        println!("✅ {}: OK", name);
        return;
    }
    println!("❌ {}: {} issue(s)", name, issues.len());
    for issue in issues {
        println!("   - {}", issue);
    }
}
