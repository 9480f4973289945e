use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use ivp_rs::analysis::{SweepRange, asymptotic_tail};
use ivp_rs::output::export::{CsvExporter, Exporter};
use ivp_rs::output::visualization::fonts_available;
use ivp_rs::output::{CsvConfig, CsvMetadata, FilePlotter, ImageFormat, PlotConfig};
use ivp_rs::problem::{Line, Preset};
use ivp_rs::service::{self, ComparisonReport, GTE_TITLE, LTE_TITLE, SOLUTIONS_TITLE};
use ivp_rs::solver::{InitialConditions, Method};

#[derive(Parser)]
#[command(name = "ivp")]
#[command(about = "IVP solver - method comparison and truncation error analysis", long_about = None)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in equations
    Presets,
    /// Solve with several methods and write the Solutions, LTE and GTE charts
    Compare(CompareArgs),
}

#[derive(Args)]
struct CompareArgs {
    /// Equation preset (quadratic, logistic, riccati)
    #[arg(long, default_value = "quadratic")]
    preset: Preset,

    /// Initial abscissa (defaults to the preset's)
    #[arg(long, allow_negative_numbers = true)]
    x0: Option<f64>,

    /// Initial value (defaults to the preset's)
    #[arg(long, allow_negative_numbers = true)]
    y0: Option<f64>,

    /// End of the interval (defaults to the preset's)
    #[arg(long, allow_negative_numbers = true)]
    x_end: Option<f64>,

    /// Number of steps for the Solutions and LTE charts
    #[arg(short, long, default_value_t = 10)]
    n: usize,

    /// Smallest step count of the GTE sweep (defaults to the preset's)
    #[arg(long)]
    n_min: Option<usize>,

    /// Largest step count of the GTE sweep (defaults to the preset's)
    #[arg(long)]
    n_max: Option<usize>,

    /// Methods to compare, comma separated
    #[arg(long, value_delimiter = ',', default_values = ["euler", "improved-euler", "rk4"])]
    methods: Vec<Method>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Image format (svg or png)
    #[arg(long, default_value = "svg")]
    format: ImageFormat,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Also write solutions.csv, lte.csv and gte.csv
    #[arg(long)]
    csv: bool,

    /// CSV with ';' delimiter and ',' decimal separator
    #[arg(long, requires = "csv")]
    european: bool,

    /// Decimal places in the CSV tables
    #[arg(long, default_value_t = 6, requires = "csv")]
    precision: usize,
}

impl CompareArgs {
    fn conditions(&self) -> InitialConditions {
        let defaults = self.preset.default_conditions();
        InitialConditions::new(
            self.x0.unwrap_or(defaults.x0),
            self.y0.unwrap_or(defaults.y0),
            self.x_end.unwrap_or(defaults.x_end),
        )
    }

    fn sweep(&self) -> Result<SweepRange> {
        let (n_min, n_max) = self.preset.default_sweep();
        Ok(SweepRange::new(self.n_min.unwrap_or(n_min), self.n_max.unwrap_or(n_max))?)
    }

    fn csv_config(&self) -> CsvConfig {
        let base = if self.european { CsvConfig::european() } else { CsvConfig::default() };
        base.precision(self.precision)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Presets => cmd_presets(),
        Commands::Compare(args) => cmd_compare(&args),
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn cmd_presets() -> Result<()> {
    for preset in Preset::ALL {
        println!(
            "{:<10} {:<24} {}",
            preset.id(),
            preset.equation_text(),
            preset.default_conditions()
        );
    }
    Ok(())
}

fn cmd_compare(args: &CompareArgs) -> Result<()> {
    let conditions = args.conditions();
    let scenario = args.preset.scenario(conditions);
    let range = args.sweep()?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create output directory {}", args.out.display()))?;

    if !fonts_available() {
        log::warn!("no system font found, chart text cannot be rendered");
    }
    let plotter = FilePlotter::new(&args.out, args.format).with_config(PlotConfig {
        width: args.width,
        height: args.height,
        ..PlotConfig::default()
    });
    let solvers = Method::solvers(&args.methods);

    println!("{} with {}", args.preset.equation_text(), conditions);

    let report = service::compare(&plotter, &scenario, args.n, range, &solvers)
        .with_context(|| format!("Comparison of {} failed", args.preset))?;

    for title in [SOLUTIONS_TITLE, LTE_TITLE, GTE_TITLE] {
        println!("  wrote {}", plotter.path_for(title).display());
    }

    if args.csv {
        write_tables(args, conditions, range, &report)?;
    }

    println!("Convergence order, sweep N in {range}:");
    let fits = report.orders().into_iter().zip(&report.global_errors).zip(&args.methods);
    for (((name, order), gte), method) in fits {
        let tail = asymptotic_tail(gte);
        match (order, tail.first(), tail.last()) {
            (Some(order), Some(first), Some(last)) => println!(
                "  {name:<26} {order:.3} (theory: {}, fit over N in {}..={})",
                method.order(),
                first.x,
                last.x
            ),
            _ => println!("  {name:<26} n/a"),
        }
    }

    Ok(())
}

fn write_tables(
    args: &CompareArgs,
    conditions: InitialConditions,
    range: SweepRange,
    report: &ComparisonReport,
) -> Result<()> {
    let mut metadata = CsvMetadata::from_problem(
        args.preset.equation_text(),
        conditions.x0,
        conditions.y0,
        conditions.x_end,
        args.n,
    );
    metadata.add_custom("Preset", args.preset.id());
    let grid_table = CsvExporter::new(args.csv_config().with_metadata(metadata.clone()));

    metadata.steps = None;
    metadata.sweep = Some((range.n_min(), range.n_max()));
    let sweep_table = CsvExporter::new(args.csv_config().x_header("N").with_metadata(metadata));

    let tables: [(&str, &[Line], &CsvExporter); 3] = [
        ("solutions.csv", report.solutions.as_slice(), &grid_table),
        ("lte.csv", report.local_errors.as_slice(), &grid_table),
        ("gte.csv", report.global_errors.as_slice(), &sweep_table),
    ];

    for (file_name, lines, exporter) in tables {
        let path = args.out.join(file_name);
        exporter
            .export(lines, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  wrote {}", path.display());
    }

    Ok(())
}
