use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use marker_sheet_core::{
    LayoutMode, LayoutRegistry, PaperSize, SheetConfig, build_sheet, output_file_name,
    plan_sheet, to_json,
};
use serde::Deserialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "marker-sheet",
    about = "Render fiducial markers onto a printable PDF page",
    version,
    author
)]
struct Cli {
    /// Marker codes. A single code is repeated into every position of the layout
    #[arg(required = true, allow_negative_numbers = true, help_heading = "Input/Output")]
    codes: Vec<i64>,
    /// Output file prefix (file is <prefix>-<codes>.pdf)
    #[arg(short = 'o', long, default_value = "marker", help_heading = "Input/Output")]
    prefix: String,
    /// Output directory
    #[arg(long, default_value = ".", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// YAML config file path (values override the options below; an explicit layout number
    /// from either source wins over any four_up flag)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Layout
    /// Put four markers on the page in a 2x2 grid
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    four_up: bool,
    /// Markers per page (registered layout mode); overrides --four-up
    #[arg(long, help_heading = "Layout")]
    layout: Option<u32>,
    /// Paper size: A0..A6 | letter | legal
    #[arg(short, long, default_value = "A4", value_parser = parse_paper, help_heading = "Layout")]
    paper: PaperSize,
    /// Marker width in millimetres
    #[arg(short, long, default_value_t = 100, help_heading = "Layout")]
    width: u32,

    // Marker
    /// Descriptive text printed under each marker
    #[arg(short, long, default_value = "", help_heading = "Marker")]
    description: String,
    /// Do not draw the orientation dot
    #[arg(long, default_value_t = false, help_heading = "Marker")]
    no_dot: bool,
    /// Do not print any text
    #[arg(long, default_value_t = false, help_heading = "Marker")]
    no_text: bool,
    /// Do not draw the outline border
    #[arg(long, default_value_t = false, help_heading = "Marker")]
    no_outline: bool,

    // Export
    /// Write the computed layout as JSON instead of the PDF
    #[arg(long, default_value_t = false, help_heading = "Export")]
    layout_only: bool,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
    /// Dry run: compute layout and render, but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = if let Some(path) = &cli.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        y.into_sheet_config(config_from_cli(cli), cli.layout.is_some())?
    } else {
        config_from_cli(cli)
    };

    if cli.print_config {
        match cli.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let registry = LayoutRegistry::with_defaults();
    let file_name = output_file_name(&cfg.output_prefix, &cli.codes);

    if cli.layout_only {
        let layout = plan_sheet(&cli.codes, &cfg, &registry)?;
        let json = serde_json::to_string_pretty(&to_json(&layout))?;
        if cli.dry_run {
            println!("{json}");
            return Ok(());
        }
        let json_path = cli.out_dir.join(file_name).with_extension("json");
        write_output(&json_path, json.as_bytes())?;
        info!(?json_path, markers = layout.assignments.len(), "layout written");
        return Ok(());
    }

    let out = build_sheet(&cli.codes, &cfg, &registry)?;
    info!(
        paper = %out.layout.paper,
        mode = %out.layout.mode,
        markers = out.layout.assignments.len(),
        "sheet ready"
    );
    if cli.dry_run {
        return Ok(());
    }
    let pdf_path = cli.out_dir.join(file_name);
    write_output(&pdf_path, &out.pdf)?;
    info!(?pdf_path, bytes = out.pdf.len(), "pdf written");
    Ok(())
}

fn config_from_cli(cli: &Cli) -> SheetConfig {
    let layout = match cli.layout {
        Some(n) => LayoutMode(n),
        None if cli.four_up => LayoutMode::FOUR_UP,
        None => LayoutMode::SINGLE,
    };
    SheetConfig {
        paper: cli.paper,
        marker_width_mm: f64::from(cli.width),
        layout,
        description: cli.description.clone(),
        show_text: !cli.no_text,
        corner_dot: !cli.no_dot,
        outline: !cli.no_outline,
        output_prefix: cli.prefix.clone(),
    }
}

fn write_output(path: &std::path::Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create out_dir {}", dir.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

fn parse_paper(s: &str) -> Result<PaperSize, String> {
    s.parse().map_err(|_| {
        let known: Vec<&str> = PaperSize::ALL.iter().map(|p| p.name()).collect();
        format!("unknown paper size '{}' (expected one of {})", s, known.join(", "))
    })
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct YamlConfig {
    paper: Option<String>,
    marker_width_mm: Option<f64>,
    layout: Option<u32>,
    four_up: Option<bool>,
    description: Option<String>,
    show_text: Option<bool>,
    corner_dot: Option<bool>,
    outline: Option<bool>,
    output_prefix: Option<String>,
}

impl YamlConfig {
    /// Overlays the file onto `cfg`. `explicit_layout` is set when `cfg.layout` came from
    /// `--layout`, which `four_up` must not replace.
    fn into_sheet_config(
        self,
        mut cfg: SheetConfig,
        explicit_layout: bool,
    ) -> anyhow::Result<SheetConfig> {
        if let Some(v) = self.paper {
            cfg.paper = parse_paper(&v).map_err(anyhow::Error::msg)?;
        }
        if let Some(v) = self.marker_width_mm {
            cfg.marker_width_mm = v;
        }
        if let Some(v) = self.four_up.filter(|_| !explicit_layout && self.layout.is_none()) {
            cfg.layout = if v {
                LayoutMode::FOUR_UP
            } else {
                LayoutMode::SINGLE
            };
        }
        if let Some(v) = self.layout {
            cfg.layout = LayoutMode(v);
        }
        if let Some(v) = self.description {
            cfg.description = v;
        }
        if let Some(v) = self.show_text {
            cfg.show_text = v;
        }
        if let Some(v) = self.corner_dot {
            cfg.corner_dot = v;
        }
        if let Some(v) = self.outline {
            cfg.outline = v;
        }
        if let Some(v) = self.output_prefix {
            cfg.output_prefix = v;
        }
        Ok(cfg)
    }
}
