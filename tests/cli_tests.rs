use clap::Parser;
use screen_layout::builder::screen_builder::define_screen;
use screen_layout::cli::commands::format_id_report;
use screen_layout::cli::config::{load_config, Cli, Commands};
use screen_layout::validate::id_check::check_unique_ids;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_demo_minimal() {
    let cli = Cli::parse_from(["screen-layout", "demo"]);
    match cli.command {
        Commands::Demo { format, output } => {
            assert!(format.is_none(), "Unset format falls back to config");
            assert!(output.is_none());
        }
        _ => panic!("Expected Demo command"),
    }
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_demo_all_args() {
    let cli = Cli::parse_from([
        "screen-layout",
        "demo",
        "--format",
        "json",
        "-o",
        "screen.json",
        "-vv",
    ]);
    match cli.command {
        Commands::Demo { format, output } => {
            assert_eq!(format.as_deref(), Some("json"));
            assert_eq!(output.as_deref(), Some("screen.json"));
        }
        _ => panic!("Expected Demo command"),
    }
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_parse_render() {
    let cli = Cli::parse_from(["screen-layout", "render", "--input", "screen.json"]);
    match cli.command {
        Commands::Render { input } => assert_eq!(input, "screen.json"),
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_parse_check_with_config() {
    let cli = Cli::parse_from([
        "screen-layout",
        "check",
        "--input",
        "screen.json",
        "--config",
        "custom.yaml",
    ]);
    match cli.command {
        Commands::Check { input } => assert_eq!(input, "screen.json"),
        _ => panic!("Expected Check command"),
    }
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
}

// ============================================================================
// Config File Loading Tests
// ============================================================================

#[test]
fn load_config_missing_file_returns_defaults() {
    let config = load_config(Some("/nonexistent/screen-layout.yaml"));

    assert_eq!(config.demo.format, "text");
    assert!(config.demo.output.is_none());
}

#[test]
fn load_config_reads_yaml_values() {
    let path = std::env::temp_dir().join(format!("screen_layout_config_{}.yaml", std::process::id()));
    std::fs::write(&path, "demo:\n  format: json\n  output: out.json\n")
        .expect("write temp config");

    let config = load_config(Some(&path.to_string_lossy()));
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.demo.format, "json");
    assert_eq!(config.demo.output.as_deref(), Some("out.json"));
}

#[test]
fn load_config_partial_yaml_fills_defaults() {
    let path = std::env::temp_dir().join(format!("screen_layout_partial_{}.yaml", std::process::id()));
    std::fs::write(&path, "demo:\n  output: only-output.json\n").expect("write temp config");

    let config = load_config(Some(&path.to_string_lossy()));
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.demo.format, "text", "Missing format keeps default");
    assert_eq!(config.demo.output.as_deref(), Some("only-output.json"));
}

// ============================================================================
// Id report formatting
// ============================================================================

#[test]
fn id_report_formats_pass_line() {
    let screen = define_screen("ok", |screen| {
        screen.add_text("a", "1");
        screen.add_text("b", "2");
    });

    let formatted = format_id_report(&check_unique_ids(&screen));
    assert_eq!(formatted, "\u{2713} PASS  all 3 node ids unique\n");
}

#[test]
fn id_report_formats_failures_with_counts() {
    let screen = define_screen("bad", |screen| {
        screen.add_text("dup", "1");
        screen.add_text("dup", "2");
    });

    let formatted = format_id_report(&check_unique_ids(&screen));
    assert!(formatted.starts_with("\u{2717} FAIL  1 duplicate id(s) across 3 nodes\n"));
    assert!(formatted.contains("    [DUP] 'dup' used 2 times\n"));
}
