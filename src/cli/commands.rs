use crate::demo_screen;
use crate::render::console::format_screen;
use crate::snapshot::codec::{load_screen, screen_fingerprint, to_json};
use crate::validate::id_check::{check_unique_ids, IdReport};

// ============================================================================
// demo subcommand
// ============================================================================

pub fn cmd_demo(
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let screen = demo_screen();

    if verbose > 0 {
        eprintln!(
            "Built demo screen '{}' ({} top-level children)",
            screen.id(),
            screen.children().len()
        );
        eprintln!("Fingerprint: {}", screen_fingerprint(&screen)?);
    }

    let content = match format {
        "json" => to_json(&screen)?,
        _ => format_screen(&screen),
    };

    match output {
        Some(path) => std::fs::write(path, &content)?,
        None => print!("{}", content),
    }

    Ok(())
}

// ============================================================================
// render subcommand
// ============================================================================

pub fn cmd_render(input: &str, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let screen = load_screen(input)?;

    if verbose > 0 {
        eprintln!("Loaded screen '{}' from {}", screen.id(), input);
    }

    print!("{}", format_screen(&screen));
    Ok(())
}

// ============================================================================
// check subcommand
// ============================================================================

/// Run the id uniqueness pass and return whether all ids were unique.
pub fn cmd_check(input: &str, verbose: u8) -> Result<bool, Box<dyn std::error::Error>> {
    let screen = load_screen(input)?;

    if verbose > 0 {
        eprintln!("Checking screen '{}' from {}", screen.id(), input);
    }

    let report = check_unique_ids(&screen);
    print!("{}", format_id_report(&report));

    Ok(report.all_unique())
}

/// Format an id report for terminal output.
pub fn format_id_report(report: &IdReport) -> String {
    let mut out = String::new();

    if report.all_unique() {
        out.push_str(&format!(
            "\u{2713} PASS  all {} node ids unique\n",
            report.total_nodes
        ));
    } else {
        out.push_str(&format!(
            "\u{2717} FAIL  {} duplicate id(s) across {} nodes\n",
            report.duplicates.len(),
            report.total_nodes
        ));
        for dup in &report.duplicates {
            out.push_str(&format!("    [DUP] '{}' used {} times\n", dup.id, dup.count));
        }
    }

    out
}
