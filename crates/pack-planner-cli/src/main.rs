use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use handlebars::Handlebars;
use pack_planner_core::catalog::{
    InMemoryPackSizeRepository, PackSizeRecord, PackSizeRepository, snapshot,
};
use pack_planner_core::ledger::{load_orders, load_pack_sizes, save_orders, save_pack_sizes};
use pack_planner_core::orders::{InMemoryOrderRepository, Order, OrderService};
use pack_planner_core::{
    CombinationResult, PlannerConfig, calculate, compute_batch, orders_to_json_hash, to_json,
    to_json_batch,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "pack-planner",
    about = "Split item orders into the fewest whole packs",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show progress bars (disable with --progress false or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, global=true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plan packs for one order size
    Calc(CalcArgs),
    /// Plan packs for every order size in a file (one per line)
    Batch(BatchArgs),
    /// Create and inspect orders kept in a JSON ledger
    Orders(OrdersArgs),
    /// List, add and update the stored pack sizes
    PackSizes(PackSizesArgs),
    /// Simple timing bench (plans once, prints packs + time)
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct CatalogArgs {
    /// Pack sizes, comma separated (any order)
    #[arg(long, value_delimiter = ',', help_heading = "Catalog")]
    pack_sizes: Vec<u32>,
    /// Largest order size accepted
    #[arg(long, help_heading = "Catalog")]
    max_items: Option<u64>,
    /// Disable the order size limit
    #[arg(long, default_value_t = false, help_heading = "Catalog")]
    no_limit: bool,
    /// YAML config file path (overrides catalog options)
    #[arg(long, help_heading = "Catalog")]
    config: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Catalog")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Catalog")]
    print_config_format: String,
}

#[derive(Parser, Debug, Clone)]
struct CalcArgs {
    /// Number of items ordered
    #[arg(allow_negative_numbers = true)]
    items: i64,
    #[command(flatten)]
    catalog: CatalogArgs,
    /// Output format: text | json | template
    #[arg(long, default_value = "text", value_parser = ["text", "json", "template"], help_heading = "Export")]
    format: String,
    /// Built-in template: slip | csv (used when --format template)
    #[arg(long, help_heading = "Export")]
    preset: Option<String>,
    /// External template file (handlebars), used when --format template
    #[arg(long, help_heading = "Export")]
    template: Option<PathBuf>,
    /// Write output to this file instead of stdout
    #[arg(short, long, help_heading = "Export")]
    out: Option<PathBuf>,
    /// Export shipment stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
struct BatchArgs {
    /// File with one order size per line ('#' starts a comment)
    input: PathBuf,
    #[command(flatten)]
    catalog: CatalogArgs,
    /// Write JSON results to this file instead of stdout
    #[arg(short, long, help_heading = "Export")]
    out: Option<PathBuf>,
    /// Evaluate orders in parallel (requires core feature `parallel`)
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

#[derive(Parser, Debug, Clone)]
struct OrdersArgs {
    /// Ledger file (created on first write)
    #[arg(long, default_value = "orders.json")]
    ledger: PathBuf,
    /// Stored pack sizes; seeded from the catalog options while the file is missing
    #[arg(long, default_value = "pack_sizes.json")]
    catalog_file: PathBuf,
    #[command(flatten)]
    catalog: CatalogArgs,
    #[command(subcommand)]
    action: OrderAction,
}

#[derive(Subcommand, Debug, Clone)]
enum OrderAction {
    /// Plan an order and append it to the ledger
    Create {
        #[arg(allow_negative_numbers = true)]
        items: i64,
    },
    /// List all orders in the ledger
    List {
        /// Output format: text | json | json-hash
        #[arg(long, default_value = "text", value_parser = ["text", "json", "json-hash"])]
        format: String,
    },
    /// Show one order by id
    Show { id: String },
}

#[derive(Parser, Debug, Clone)]
struct PackSizesArgs {
    /// Stored pack sizes (created on first write, seeded from the catalog options)
    #[arg(long, default_value = "pack_sizes.json")]
    catalog_file: PathBuf,
    #[command(flatten)]
    catalog: CatalogArgs,
    #[command(subcommand)]
    action: PackSizeAction,
}

#[derive(Subcommand, Debug, Clone)]
enum PackSizeAction {
    /// List stored pack sizes with their ids
    List {
        /// Output format: text | json
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Add a pack size
    Add { size: u32 },
    /// Change the size of an existing record
    Update { id: String, size: u32 },
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of items ordered
    #[arg(allow_negative_numbers = true)]
    items: i64,
    #[command(flatten)]
    catalog: CatalogArgs,
    /// Repeat the computation this many times and report the mean
    #[arg(long, default_value_t = 1)]
    iterations: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Calc(args) => run_calc(args),
        Commands::Batch(args) => run_batch(args, cli.progress && !cli.quiet),
        Commands::Orders(args) => run_orders(args),
        Commands::PackSizes(args) => run_pack_sizes(args),
        Commands::Bench(args) => run_bench(args),
    }
}

fn run_calc(args: &CalcArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.catalog)?;
    if print_config(&args.catalog, &cfg)? {
        return Ok(());
    }

    let result = calculate(args.items, &cfg)?;
    let stats = result.stats(args.items);
    info!(summary = %stats.summary(), "order planned");

    let rendered = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(&to_json(&result, args.items))?,
        "template" => render_template(args, &result)?,
        _ => format!("{} items -> {}", args.items, result.summary()),
    };
    emit(args.out.as_deref(), &rendered)?;

    if let Some(stats_path) = &args.export_stats {
        let json = serde_json::to_string_pretty(&stats)?;
        fs::write(stats_path, json).with_context(|| format!("write {}", stats_path.display()))?;
        info!(?stats_path, "stats written");
    }
    Ok(())
}

fn run_batch(args: &BatchArgs, show_progress: bool) -> anyhow::Result<()> {
    let cfg = build_config(&args.catalog)?;
    if print_config(&args.catalog, &cfg)? {
        return Ok(());
    }

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let requests = parse_requests(&text)?;
    for &requested in &requests {
        cfg.check_request(requested)?;
    }
    let catalog = cfg.catalog()?;
    info!(count = requests.len(), sizes = ?catalog.sizes(), "loaded order sizes");

    let start = Instant::now();
    let results = if args.parallel && cfg!(feature = "parallel") {
        compute_batch(&requests, &catalog)
    } else {
        if args.parallel {
            warn!("--parallel needs the `parallel` feature; planning sequentially");
        }
        plan_with_progress(&requests, &cfg, show_progress)?
    };
    info!(elapsed = %fmt_dur(start.elapsed()), "batch planned");

    let entries: Vec<(i64, CombinationResult)> = requests.into_iter().zip(results).collect();
    let json = serde_json::to_string_pretty(&to_json_batch(&entries))?;
    emit(args.out.as_deref(), &json)
}

fn run_orders(args: &OrdersArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.catalog)?;
    if print_config(&args.catalog, &cfg)? {
        return Ok(());
    }

    let pack_sizes = open_pack_sizes(&args.catalog_file, &cfg)?;
    let orders = InMemoryOrderRepository::from_orders(
        load_orders(&args.ledger).with_context(|| format!("read {}", args.ledger.display()))?,
    );
    let service = OrderService::new(orders, pack_sizes).with_max_items(cfg.max_items);

    match &args.action {
        OrderAction::Create { items } => {
            let order = service.create_order(*items)?;
            let (orders, _) = service.into_parts();
            save_orders(&args.ledger, &orders.into_orders())
                .with_context(|| format!("write {}", args.ledger.display()))?;
            println!("{}", format_order(&order));
        }
        OrderAction::List { format } => {
            let orders = service.list_orders()?;
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&orders)?),
                "json-hash" => println!(
                    "{}",
                    serde_json::to_string_pretty(&orders_to_json_hash(&orders))?
                ),
                _ => {
                    if orders.is_empty() {
                        info!(ledger = ?args.ledger, "no orders yet");
                    }
                    for order in &orders {
                        println!("{}", format_order(order));
                    }
                }
            }
        }
        OrderAction::Show { id } => {
            let id = Uuid::parse_str(id).with_context(|| format!("invalid order id: {id}"))?;
            let order = service.get_order(id)?;
            println!("{}", serde_json::to_string_pretty(&order)?);
        }
    }
    Ok(())
}

fn run_pack_sizes(args: &PackSizesArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.catalog)?;
    if print_config(&args.catalog, &cfg)? {
        return Ok(());
    }

    let repo = open_pack_sizes(&args.catalog_file, &cfg)?;
    match &args.action {
        PackSizeAction::List { format } => {
            let records = repo.list_pack_sizes()?;
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&records)?);
                return Ok(());
            }
            if records.is_empty() {
                warn!(file = ?args.catalog_file, "no pack sizes stored");
                return Ok(());
            }
            for record in &records {
                println!("{}  size={}", record.id, record.size);
            }
            let catalog = snapshot(&repo)?;
            println!(
                "{} sizes, smallest={} largest={}",
                catalog.len(),
                catalog.smallest(),
                catalog.largest()
            );
        }
        PackSizeAction::Add { size } => {
            let record = repo.create_pack_size(PackSizeRecord::new(*size))?;
            store_pack_sizes(&args.catalog_file, repo)?;
            println!("{}  size={}", record.id, record.size);
        }
        PackSizeAction::Update { id, size } => {
            let id = Uuid::parse_str(id).with_context(|| format!("invalid pack size id: {id}"))?;
            let record = repo.update_pack_size(PackSizeRecord { id, size: *size })?;
            store_pack_sizes(&args.catalog_file, repo)?;
            println!("{}  size={}", record.id, record.size);
        }
    }
    Ok(())
}

fn run_bench(args: &BenchArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.catalog)?;
    if print_config(&args.catalog, &cfg)? {
        return Ok(());
    }
    let iterations = args.iterations.max(1);
    let start = Instant::now();
    let mut result = CombinationResult::empty();
    for _ in 0..iterations {
        result = calculate(args.items, &cfg)?;
    }
    let dur = start.elapsed() / iterations;
    println!(
        "items={} packs={} shipped={} setup=\"{}\" time={}",
        args.items,
        result.total_packs,
        result.total_items(),
        result.summary(),
        fmt_dur(dur)
    );
    Ok(())
}

fn plan_with_progress(
    requests: &[i64],
    cfg: &PlannerConfig,
    progress: bool,
) -> anyhow::Result<Vec<CombinationResult>> {
    use indicatif::{ProgressBar, ProgressStyle};
    let bar = if progress {
        let b = ProgressBar::new(requests.len() as u64);
        b.set_style(ProgressStyle::with_template(
            "{spinner:.green} planning {pos}/{len} [{elapsed_precise}] {wide_msg}",
        )?);
        Some(b)
    } else {
        None
    };
    let mut out = Vec::with_capacity(requests.len());
    for &requested in requests {
        if let Some(b) = &bar {
            b.set_message(requested.to_string());
        }
        out.push(calculate(requested, cfg)?);
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    Ok(out)
}

fn parse_requests(text: &str) -> anyhow::Result<Vec<i64>> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let value: i64 = line
            .parse()
            .with_context(|| format!("line {}: not an order size: {line:?}", idx + 1))?;
        out.push(value);
    }
    Ok(out)
}

/// Stored pack sizes, or the configured catalog when nothing has been stored yet.
fn open_pack_sizes(
    path: &Path,
    cfg: &PlannerConfig,
) -> anyhow::Result<InMemoryPackSizeRepository> {
    let stored = load_pack_sizes(path).with_context(|| format!("read {}", path.display()))?;
    let repo = match stored {
        Some(records) => InMemoryPackSizeRepository::from_records(records)
            .with_context(|| format!("invalid pack sizes in {}", path.display()))?,
        None => {
            debug!(?path, "no stored pack sizes, seeding from config");
            InMemoryPackSizeRepository::with_sizes(cfg.catalog()?.sizes().iter().copied())?
        }
    };
    Ok(repo)
}

fn store_pack_sizes(path: &Path, repo: InMemoryPackSizeRepository) -> anyhow::Result<()> {
    save_pack_sizes(path, &repo.into_records())
        .with_context(|| format!("write {}", path.display()))
}

fn format_order(order: &Order) -> String {
    format!(
        "{}  items={}  packs={}  shipped={}  setup={}",
        order.id, order.items_count, order.total_packs, order.total_items, order.pack_setup
    )
}

fn emit(out: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
            info!(?path, "output written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
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
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------- config ----------

fn build_config(args: &CatalogArgs) -> anyhow::Result<PlannerConfig> {
    let mut cfg = PlannerConfig::default();
    if !args.pack_sizes.is_empty() {
        cfg.pack_sizes = args.pack_sizes.clone();
    }
    if args.no_limit {
        cfg.max_items = None;
    } else if let Some(v) = args.max_items {
        cfg.max_items = Some(v);
    }

    // config file sets catalog options en bloc
    if let Some(path) = &args.config {
        let file = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg = y.into_planner_config(cfg);
    }

    cfg.validate().context("invalid planner configuration")?;
    Ok(cfg)
}

fn print_config(args: &CatalogArgs, cfg: &PlannerConfig) -> anyhow::Result<bool> {
    if !args.print_config {
        return Ok(false);
    }
    match args.print_config_format.as_str() {
        "yaml" => println!("{}", serde_yaml::to_string(cfg)?),
        _ => println!("{}", serde_json::to_string_pretty(cfg)?),
    }
    Ok(true)
}

#[derive(Debug, Default, Deserialize)]
struct YamlConfig {
    pack_sizes: Option<Vec<u32>>,
    max_items: Option<u64>,
    unlimited: Option<bool>,
}

impl YamlConfig {
    fn into_planner_config(self, mut cfg: PlannerConfig) -> PlannerConfig {
        if let Some(v) = self.pack_sizes {
            cfg.pack_sizes = v;
        }
        if let Some(v) = self.max_items {
            cfg.max_items = Some(v);
        }
        if self.unlimited == Some(true) {
            cfg.max_items = None;
        }
        cfg
    }
}

// ---------- templates ----------

#[derive(Serialize)]
struct TemplatePack {
    size: u32,
    count: u64,
    items: u64,
}

#[derive(Serialize)]
struct TemplateContext {
    requested: i64,
    shipped: u64,
    overshoot: u64,
    total_packs: u64,
    summary: String,
    packs: Vec<TemplatePack>,
}

fn build_template_context(result: &CombinationResult, requested: i64) -> TemplateContext {
    let packs = result
        .packs
        .iter()
        .map(|(&size, &count)| TemplatePack {
            size,
            count,
            items: size as u64 * count,
        })
        .collect();
    TemplateContext {
        requested,
        shipped: result.total_items(),
        overshoot: result.overshoot(requested),
        total_packs: result.total_packs,
        summary: result.summary(),
        packs,
    }
}

fn render_template(args: &CalcArgs, result: &CombinationResult) -> anyhow::Result<String> {
    let ctx = build_template_context(result, args.items);

    let tpl_owned_from_file: Option<String> = if let Some(path) = &args.template {
        Some(fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?)
    } else {
        None
    };
    let tpl_ref: &str = if let Some(preset) = &args.preset {
        match preset.to_ascii_lowercase().as_str() {
            "slip" => include_str!("templates/packing_slip.hbs"),
            "csv" => include_str!("templates/packs.csv.hbs"),
            other => anyhow::bail!("unknown template preset: {}", other),
        }
    } else if let Some(ref s) = tpl_owned_from_file {
        s.as_str()
    } else {
        warn!("no --preset or --template given, using packing slip");
        include_str!("templates/packing_slip.hbs")
    };

    let mut reg = Handlebars::new();
    reg.set_strict_mode(true);
    reg.register_template_string("tpl", tpl_ref)?;
    Ok(reg.render("tpl", &ctx)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_args() -> CatalogArgs {
        CatalogArgs {
            pack_sizes: vec![],
            max_items: None,
            no_limit: false,
            config: None,
            print_config: false,
            print_config_format: "json".into(),
        }
    }

    #[test]
    fn parse_requests_skips_blank_and_comments() {
        let parsed = parse_requests("1\n\n# header\n251 # tricky\n  12001  \n").unwrap();
        assert_eq!(parsed, vec![1, 251, 12001]);
    }

    #[test]
    fn parse_requests_reports_line() {
        let err = parse_requests("10\nabc\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn build_config_defaults() {
        let cfg = build_config(&catalog_args()).unwrap();
        assert_eq!(cfg, PlannerConfig::default());
    }

    #[test]
    fn build_config_flags_override_defaults() {
        let mut args = catalog_args();
        args.pack_sizes = vec![53, 23, 31];
        args.no_limit = true;
        let cfg = build_config(&args).unwrap();
        assert_eq!(cfg.pack_sizes, vec![53, 23, 31]);
        assert_eq!(cfg.max_items, None);
    }

    #[test]
    fn yaml_overrides_flags() {
        let y: YamlConfig = serde_yaml::from_str("pack_sizes: [10, 20]\nmax_items: 99\n").unwrap();
        let cfg = y.into_planner_config(PlannerConfig::default());
        assert_eq!(cfg.pack_sizes, vec![10, 20]);
        assert_eq!(cfg.max_items, Some(99));
    }

    #[test]
    fn bench_accepts_negative_items() {
        let cli = Cli::try_parse_from(["pack-planner", "bench", "-5", "--print-config"]).unwrap();
        match cli.command {
            Commands::Bench(args) => {
                assert_eq!(args.items, -5);
                assert!(args.catalog.print_config);
            }
            other => panic!("Expected bench, got {other:?}"),
        }
    }

    #[test]
    fn pack_sizes_update_parses_id_and_size() {
        let id = Uuid::new_v4().to_string();
        let cli = Cli::try_parse_from([
            "pack-planner",
            "pack-sizes",
            "--catalog-file",
            "sizes.json",
            "update",
            id.as_str(),
            "750",
        ])
        .unwrap();
        match cli.command {
            Commands::PackSizes(args) => {
                assert_eq!(args.catalog_file, PathBuf::from("sizes.json"));
                match args.action {
                    PackSizeAction::Update { id: parsed, size } => {
                        assert_eq!(parsed, id);
                        assert_eq!(size, 750);
                    }
                    other => panic!("Expected update, got {other:?}"),
                }
            }
            other => panic!("Expected pack-sizes, got {other:?}"),
        }
    }

    #[test]
    fn open_pack_sizes_seeds_from_config_until_stored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pack_sizes.json");
        let mut args = catalog_args();
        args.pack_sizes = vec![53, 23, 31];
        let cfg = build_config(&args).unwrap();

        let repo = open_pack_sizes(&path, &cfg).unwrap();
        assert!(!path.exists());
        repo.create_pack_size(PackSizeRecord::new(100)).unwrap();
        store_pack_sizes(&path, repo).unwrap();

        // the stored file now wins over the configured sizes
        let reopened = open_pack_sizes(&path, &PlannerConfig::default()).unwrap();
        assert_eq!(snapshot(&reopened).unwrap().sizes(), &[23, 31, 53, 100]);
    }

    #[test]
    fn orders_plan_against_stored_pack_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pack_sizes.json");
        let cfg = PlannerConfig::default();
        let repo = open_pack_sizes(&path, &cfg).unwrap();
        let small = repo
            .list_pack_sizes()
            .unwrap()
            .into_iter()
            .find(|r| r.size == 250)
            .unwrap();
        repo.update_pack_size(PackSizeRecord { id: small.id, size: 100 })
            .unwrap();
        store_pack_sizes(&path, repo).unwrap();

        let service = OrderService::new(
            InMemoryOrderRepository::new(),
            open_pack_sizes(&path, &cfg).unwrap(),
        )
        .with_max_items(cfg.max_items);
        assert_eq!(service.create_order(101).unwrap().pack_setup, "2x100");
    }

    #[test]
    fn corrupt_pack_size_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pack_sizes.json");
        fs::write(&path, "[{\"size\": 1}]").unwrap();
        let err = open_pack_sizes(&path, &PlannerConfig::default()).unwrap_err();
        assert!(err.to_string().contains("pack_sizes.json"), "{err}");
    }

    #[test]
    fn template_context_lists_packs_ascending() {
        let result = pack_planner_core::compute_for_sizes(12001, &[5000, 2000, 250]).unwrap();
        let ctx = build_template_context(&result, 12001);
        let sizes: Vec<u32> = ctx.packs.iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![250, 2000, 5000]);
        assert_eq!(ctx.packs[2].items, 10000);
        assert_eq!(ctx.overshoot, 249);
    }

    #[test]
    fn builtin_templates_render() {
        let result = pack_planner_core::compute_for_sizes(501, &[250, 500]).unwrap();
        let ctx = build_template_context(&result, 501);
        let mut reg = Handlebars::new();
        reg.set_strict_mode(true);
        reg.register_template_string("slip", include_str!("templates/packing_slip.hbs"))
            .unwrap();
        reg.register_template_string("csv", include_str!("templates/packs.csv.hbs"))
            .unwrap();
        let slip = reg.render("slip", &ctx).unwrap();
        assert!(slip.contains("Requested: 501"), "{slip}");
        let csv = reg.render("csv", &ctx).unwrap();
        assert!(csv.contains("250,1,250"), "{csv}");
        assert!(csv.contains("500,1,500"), "{csv}");
    }
}
