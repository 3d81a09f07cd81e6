use std::fs;
use std::path::PathBuf;

use scatter_marginals::api::{MarginalStyle, PlotConfig, ScatterPlotEngine};
use scatter_marginals::data::{
    CsvColumns, CsvLoadOptions, default_synthetic_conditions, generate_records,
    load_records_from_path,
};
use scatter_marginals::render::{Color, SvgRenderer};
use scatter_marginals::telemetry::init_default_tracing;

const DEFAULT_OUTPUT_PATH: &str = "scatter_marginals.svg";
const DEFAULT_SEED: u64 = 7;

#[derive(Debug)]
struct CliArgs {
    input: Option<PathBuf>,
    output: PathBuf,
    config_path: Option<PathBuf>,
    snapshot_path: Option<PathBuf>,
    columns: CsvColumns,
    seed: u64,
    style: Option<MarginalStyle>,
    hidden: Vec<String>,
    colors: Vec<(String, Color)>,
    axis_labels: Option<(String, String)>,
    plot_size: Option<f64>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            PlotConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => PlotConfig::default(),
    };
    if let Some(style) = args.style {
        config = config.with_marginal_style(style);
    }
    if let Some(plot_size) = args.plot_size {
        config = config.with_plot_size(plot_size);
    }
    if let Some((x_label, y_label)) = args.axis_labels.clone() {
        config = config.with_axis_labels(x_label, y_label);
    }

    let records = match &args.input {
        Some(path) => {
            let options = CsvLoadOptions {
                columns: args.columns.clone(),
                ..CsvLoadOptions::default()
            };
            let (records, report) = load_records_from_path(path, &options)
                .map_err(|err| format!("failed to load `{}`: {err}", path.display()))?;
            println!(
                "loaded {} record(s) from {} ({} row(s) skipped)",
                report.records_kept,
                path.display(),
                report.rows_skipped
            );
            records
        }
        None => generate_records(&default_synthetic_conditions(), args.seed)
            .map_err(|err| format!("failed to generate synthetic records: {err}"))?,
    };

    let renderer = match config.title.clone() {
        Some(title) => SvgRenderer::new().with_title(title),
        None => SvgRenderer::new(),
    };
    let mut engine = ScatterPlotEngine::new(renderer, config).map_err(|err| err.to_string())?;
    engine.set_records(records).map_err(|err| err.to_string())?;
    if !args.colors.is_empty() {
        let mut palette = engine.palette().clone();
        for (condition, color) in &args.colors {
            palette.set_color(condition.clone(), *color);
        }
        engine.set_palette(palette);
    }
    for condition in &args.hidden {
        engine.set_condition_visible(condition, false);
    }

    engine.render().map_err(|err| format!("render failed: {err}"))?;
    engine
        .renderer()
        .write_to(&args.output)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))?;
    println!("wrote {}", args.output.display());

    if let Some(path) = &args.snapshot_path {
        let json = engine.snapshot_json_pretty().map_err(|err| err.to_string())?;
        fs::write(path, json)
            .map_err(|err| format!("failed to write snapshot `{}`: {err}", path.display()))?;
        println!("wrote snapshot {}", path.display());
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        input: None,
        output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        config_path: None,
        snapshot_path: None,
        columns: CsvColumns::default(),
        seed: DEFAULT_SEED,
        style: None,
        hidden: Vec::new(),
        colors: Vec::new(),
        axis_labels: None,
        plot_size: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match arg.as_str() {
            "--input" => parsed.input = Some(PathBuf::from(value("--input")?)),
            "--output" => parsed.output = PathBuf::from(value("--output")?),
            "--config" => parsed.config_path = Some(PathBuf::from(value("--config")?)),
            "--snapshot" => parsed.snapshot_path = Some(PathBuf::from(value("--snapshot")?)),
            "--x-column" => parsed.columns.x = value("--x-column")?,
            "--y-column" => parsed.columns.y = value("--y-column")?,
            "--condition-column" => parsed.columns.condition = value("--condition-column")?,
            "--hide" => parsed.hidden.push(value("--hide")?),
            "--color" => {
                let raw = value("--color")?;
                let (condition, hex) = raw
                    .split_once('=')
                    .ok_or_else(|| format!("invalid --color `{raw}` (expected NAME=#rrggbb)"))?;
                let color = Color::from_hex(hex).map_err(|err| err.to_string())?;
                parsed.colors.push((condition.to_owned(), color));
            }
            "--axis-labels" => {
                let raw = value("--axis-labels")?;
                let (x_label, y_label) = raw
                    .split_once(',')
                    .ok_or_else(|| format!("invalid --axis-labels `{raw}` (expected X,Y)"))?;
                parsed.axis_labels = Some((x_label.to_owned(), y_label.to_owned()));
            }
            "--plot-size" => {
                let raw = value("--plot-size")?;
                parsed.plot_size = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --plot-size value `{raw}`"))?,
                );
            }
            "--seed" => {
                let raw = value("--seed")?;
                parsed.seed = raw
                    .parse()
                    .map_err(|_| format!("invalid --seed value `{raw}`"))?;
            }
            "--style" => {
                parsed.style = Some(match value("--style")?.as_str() {
                    "bars" => MarginalStyle::Bars,
                    "curve" => MarginalStyle::Curve,
                    other => return Err(format!("unknown --style `{other}` (bars|curve)")),
                });
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(parsed)
}

fn usage_message() -> String {
    format!(
        "Usage: render_scatter_svg [options]\n\nOptions:\n  --input <csv>              Records CSV (default: synthetic records)\n  --output <svg>             Output path (default: {DEFAULT_OUTPUT_PATH})\n  --config <json>            Plot config JSON\n  --snapshot <json>          Also write a state snapshot\n  --x-column <name>          X column header (default: area)\n  --y-column <name>          Y column header (default: D)\n  --condition-column <name>  Condition column header (default: condition)\n  --hide <condition>         Start with a condition hidden (repeatable)\n  --color <name=#rrggbb>     Override a condition color (repeatable)\n  --axis-labels <x,y>        Axis titles\n  --plot-size <px>           Side of the square plot area\n  --seed <n>                 Synthetic data seed (default: {DEFAULT_SEED})\n  --style <bars|curve>       Marginal style\n  -h, --help                 Show this message"
    )
}
