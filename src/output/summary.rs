use comfy_table::Color;

use crate::cli::Commands;
use crate::core::Summary;
use crate::output::format::{YELLOW, create_styled_table, header_cell, paint, right_cell};

fn count_color(count: usize, color: Color, use_color: bool) -> Option<Color> {
    (use_color && count > 0).then_some(color)
}

pub(crate) fn render_summary_table(
    summary: &Summary,
    command: Commands,
    dry_run: bool,
    use_color: bool,
) -> String {
    let done_label = match (command, dry_run) {
        (Commands::Reorganize, false) => "Moved",
        (Commands::Reorganize, true) => "Would move",
        (Commands::Rename, false) => "Renamed",
        (Commands::Rename, true) => "Would rename",
    };

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell(done_label, use_color),
        header_cell("Skipped", use_color),
        header_cell("Errors", use_color),
    ]);
    table.add_row(vec![
        right_cell(
            &summary.moved.to_string(),
            count_color(summary.moved, Color::Green, use_color),
            false,
        ),
        right_cell(
            &summary.skipped.to_string(),
            count_color(summary.skipped, Color::Yellow, use_color),
            false,
        ),
        right_cell(
            &summary.errors.to_string(),
            count_color(summary.errors, Color::Red, use_color),
            summary.errors > 0,
        ),
    ]);
    table.to_string()
}

/// Git commands to run by hand once files have changed; never executed
pub(crate) fn next_steps(command: Commands) -> Vec<String> {
    vec![
        "Next steps:".to_string(),
        "  1. Review the changes".to_string(),
        "  2. Commit them:".to_string(),
        "     git add .".to_string(),
        format!("     git commit -m \"{}\"", command.commit_message()),
        "     git push origin main".to_string(),
    ]
}

pub(crate) fn print_summary(summary: &Summary, command: Commands, dry_run: bool, use_color: bool) {
    println!();
    println!("{}", render_summary_table(summary, command, dry_run, use_color));

    if dry_run {
        println!("\nDry run: no files were changed.");
        return;
    }
    if summary.changed_anything() {
        println!();
        for line in next_steps(command) {
            println!("{line}");
        }
    } else {
        let hint = match command {
            Commands::Reorganize => "No files were moved; the tree may already be reorganized.",
            Commands::Rename => "No files were renamed.",
        };
        println!("\n{}", paint(hint, YELLOW, use_color));
    }
}
