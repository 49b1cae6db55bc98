//! adrotor CLI entry point

use anyhow::{Context, Result};
use adrotor::catalog::{AdSource, FileCatalog};
use adrotor::config::cli::{Cli, ExecutionMode, ReportFormat};
use adrotor::config::Config;
use adrotor::link::decorate_target_url;
use adrotor::model::Displayable;
use adrotor::pool::cache::PoolCache;
use adrotor::rotation::RotationScheduler;
use adrotor::select::Selector;
use adrotor::sim::simulate;

fn main() -> Result<()> {
    println!("adrotor v{}", env!("CARGO_PKG_VERSION"));
    println!("Weighted advertisement distribution and rotation engine");
    println!();

    // Parse CLI arguments
    let cli = Cli::parse_args();
    cli.validate()?;

    let config = Config::from_cli(&cli).context("Failed to build configuration")?;
    adrotor::config::validator::validate_config(&config)
        .context("Configuration validation failed")?;

    print_configuration(&config);

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    match cli.mode {
        ExecutionMode::Simulate => run_simulate(&config),
        ExecutionMode::Rotate => run_rotate(&config),
    }
}

/// Display the effective configuration
fn print_configuration(config: &Config) {
    println!("Configuration:");
    println!("  Catalog:  {}", config.catalog_path.display());
    println!("  Position: {}", config.position);
    println!("  Date:     {}", config.reference_date);
    println!("  Vendors:  {} configured weight(s)", config.weights.len());
    println!("  Trials:   {}", config.simulation.trials);
    println!("  Interval: {:?}", config.rotation.interval);
}

/// Build the pool and run the distribution simulator
fn run_simulate(config: &Config) -> Result<()> {
    let catalog = FileCatalog::new(&config.catalog_path);
    let ads = catalog.ads_for(config.position, config.reference_date)?;

    let mut cache = match config.simulation.seed {
        Some(seed) => PoolCache::with_seed(seed),
        None => PoolCache::new(),
    };
    let pool = cache
        .get_or_build(&ads, &config.weights, config.position)
        .clone();

    let mut selector = match config.simulation.seed {
        Some(seed) => Selector::with_seed(seed),
        None => Selector::new(),
    };

    println!();
    println!("Running {} trials...", config.simulation.trials);
    println!();

    let report = simulate(&pool, &config.weights, config.simulation.trials, &mut selector);

    match config.output.format {
        ReportFormat::Text => adrotor::output::text::print_report(&report),
        ReportFormat::Json => println!("{}", adrotor::output::json::to_json_string(&report)?),
        ReportFormat::Csv => print!("{}", adrotor::output::csv::to_csv_string(&report)),
    }

    if let Some(path) = &config.output.json_output {
        adrotor::output::json::write_json(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    if let Some(path) = &config.output.csv_output {
        adrotor::output::csv::write_csv(path, &report)?;
        println!("CSV report written to {}", path.display());
    }

    Ok(())
}

/// Build the pool and drive the live rotation timer for a fixed tick count
fn run_rotate(config: &Config) -> Result<()> {
    let catalog = FileCatalog::new(&config.catalog_path);
    let ads = catalog.ads_for(config.position, config.reference_date)?;

    let mut cache = match config.simulation.seed {
        Some(seed) => PoolCache::with_seed(seed),
        None => PoolCache::new(),
    };
    let pool = cache
        .get_or_build(&ads, &config.weights, config.position)
        .clone();

    println!();
    if pool.is_empty() {
        println!("Pool is empty - nothing to display.");
        return Ok(());
    }

    println!(
        "Rotating {} entries every {:?} for {} tick(s)",
        pool.len(),
        config.rotation.interval,
        config.rotation.ticks
    );
    println!();

    let mut scheduler = RotationScheduler::new(config.rotation.interval);
    scheduler.install_pool(pool.len());

    // Fresh pools always start at index 0
    if let Some(index) = scheduler.active_index() {
        print_active_entry(&pool, index, 0);
    }

    let ticks = scheduler
        .ticks()
        .context("rotation timer failed to start")?;
    for tick in 1..=config.rotation.ticks {
        let index = ticks
            .recv()
            .context("rotation timer stopped unexpectedly")?;
        print_active_entry(&pool, index, tick);
    }

    scheduler.shutdown();
    Ok(())
}

/// Print the display entry for one rotation tick
fn print_active_entry(pool: &adrotor::pool::Pool, index: usize, tick: u64) {
    let Some(entry) = pool.get(index) else {
        return;
    };

    let art = match &entry.displayable {
        Displayable::Single(img) => img.image_url.clone(),
        Displayable::Responsive(pair) => {
            let mobile = pair.mobile.as_ref().map(|i| i.image_url.as_str()).unwrap_or("-");
            let desktop = pair.desktop.as_ref().map(|i| i.image_url.as_str()).unwrap_or("-");
            format!("mobile: {} / desktop: {}", mobile, desktop)
        }
    };

    println!(
        "[tick {:3}] slot {:3}  ad {:4}  {:<20} {}",
        tick,
        index,
        entry.ad.id,
        entry.ad.vendor_slug,
        decorate_target_url(&entry.ad.target_url)
    );
    println!("           {}", art);
}
