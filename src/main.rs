use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use flywheel_ballistics::config::{self, SolverConfig};
use flywheel_ballistics::core::{PhysicalConfig, ShotGeometry, ShotSolution, solve};
use flywheel_ballistics::plot::render_arc;
use flywheel_ballistics::report::{
    intermediate_results, write_summary, write_sweep, writer_for_path,
};
use tracing::{Level, info, warn};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Flywheel speed and launch angle for a ballistic shot"
)]
struct Cli {
    /// TOML file with physical properties and shot defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log solver internals to stderr
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one shot and print every intermediate value
    Solve(ShotArgs),
    /// Solve a range of floor distances and log one row per distance
    Sweep(SweepArgs),
    /// Render the fitted arc of one shot to a PNG
    Plot(PlotArgs),
}

#[derive(Args)]
struct ShotArgs {
    /// Floor distance to the near edge of the target (ft)
    #[arg(long)]
    distance: f64,

    #[command(flatten)]
    target: TargetArgs,
}

#[derive(Args)]
struct TargetArgs {
    /// Distance past the near edge to land the shot (ft)
    #[arg(long)]
    offset: Option<f64>,

    /// Height at which the arc crosses the near edge (ft)
    #[arg(long)]
    height_above: Option<f64>,

    /// Height of the landing point (ft)
    #[arg(long)]
    target_height: Option<f64>,

    /// Use the ideal launch angle even outside the mechanism's range
    #[arg(long, default_value_t = false)]
    no_clamp: bool,
}

#[derive(Args)]
struct SweepArgs {
    /// Nearest floor distance (ft)
    #[arg(long)]
    near: f64,

    /// Farthest floor distance (ft)
    #[arg(long)]
    far: f64,

    /// Distance increment (ft)
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Crossing height at the nearest distance (ft, defaults to config)
    #[arg(long)]
    hah_near: Option<f64>,

    /// Crossing height at the farthest distance (ft, defaults to config)
    #[arg(long)]
    hah_far: Option<f64>,

    #[command(flatten)]
    target: TargetArgs,

    /// Output CSV path ("-" for stdout, default logs/sweep-<timestamp>.csv)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write the shot summary log (header plus one row per distance)
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(Args)]
struct PlotArgs {
    #[command(flatten)]
    shot: ShotArgs,

    #[arg(long, default_value = "artifacts/arc.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 1200)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn physical_for(config: &SolverConfig, target: &TargetArgs) -> PhysicalConfig {
    let mut physical = config.physical;
    if target.no_clamp {
        physical.clamp_angle = false;
    }
    physical
}

fn geometry_for(
    config: &SolverConfig,
    distance_ft: f64,
    height_above_ft: Option<f64>,
    target: &TargetArgs,
) -> ShotGeometry {
    let shot = &config.shot;
    ShotGeometry::from_feet(
        distance_ft,
        target.offset.unwrap_or(shot.target_offset_ft),
        height_above_ft
            .or(target.height_above)
            .unwrap_or(shot.height_above_reference_ft),
        target.target_height.unwrap_or(shot.target_height_ft),
    )
}

/// Crossing height that moves linearly from `hah_near` at `near` to
/// `hah_far` at `far`.
fn interpolate_height(distance: f64, near: f64, far: f64, hah_near: f64, hah_far: f64) -> f64 {
    if far == near {
        return hah_near;
    }
    let slope = (hah_far - hah_near) / (far - near);
    hah_near + slope * (distance - near)
}

fn sweep_distances(near: f64, far: f64, step: f64) -> anyhow::Result<Vec<f64>> {
    if !near.is_finite() || !far.is_finite() {
        bail!("--near and --far must be finite, got {near} and {far}");
    }
    if !(step > 0.0) {
        bail!("--step must be positive, got {step}");
    }
    if far < near {
        bail!("--far ({far}) must not be less than --near ({near})");
    }
    let count = ((far - near) / step + 1e-9).floor() as usize;
    Ok((0..=count).map(|i| near + i as f64 * step).collect())
}

fn report_non_finite(solution: &ShotSolution) {
    if !solution.result.is_finite() {
        warn!(
            rpm = solution.result.rpm,
            launch_angle = solution.result.launch_angle_deg,
            "shot has no finite solution; check the geometry before using it"
        );
    }
}

fn run_solve(config: &SolverConfig, args: &ShotArgs) {
    let physical = physical_for(config, &args.target);
    let geometry = geometry_for(config, args.distance, None, &args.target);
    let solution = solve(&geometry, &physical);
    report_non_finite(&solution);

    println!("{}", intermediate_results(&solution, &physical));
    println!(
        "\nFlywheel: {:.1} rpm | Launch angle: {:.1} deg | Landing angle: {:.1} deg",
        solution.result.rpm, solution.result.launch_angle_deg, solution.result.landing_angle_deg
    );
}

fn run_sweep(config: &SolverConfig, args: &SweepArgs) -> anyhow::Result<()> {
    let physical = physical_for(config, &args.target);
    let default_hah = args
        .target
        .height_above
        .unwrap_or(config.shot.height_above_reference_ft);
    let hah_near = args.hah_near.unwrap_or(default_hah);
    let hah_far = args.hah_far.unwrap_or(default_hah);

    let solutions: Vec<ShotSolution> = sweep_distances(args.near, args.far, args.step)?
        .into_iter()
        .map(|distance| {
            let hah = interpolate_height(distance, args.near, args.far, hah_near, hah_far);
            let solution = solve(
                &geometry_for(config, distance, Some(hah), &args.target),
                &physical,
            );
            report_non_finite(&solution);
            solution
        })
        .collect();

    let output = args.output.clone().unwrap_or_else(|| {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        PathBuf::from(format!("logs/sweep-{stamp}.csv"))
    });
    let mut writer = writer_for_path(&output)
        .with_context(|| format!("cannot open {}", output.display()))?;
    write_sweep(writer.as_mut(), &solutions)?;
    info!(rows = solutions.len(), output = %output.display(), "sweep written");

    if let Some(log) = &args.log {
        let mut writer =
            writer_for_path(log).with_context(|| format!("cannot open {}", log.display()))?;
        write_summary(writer.as_mut(), &solutions)?;
        info!(rows = solutions.len(), path = %log.display(), "summary log written");
    }
    Ok(())
}

fn run_plot(config: &SolverConfig, args: &PlotArgs) -> anyhow::Result<()> {
    let physical = physical_for(config, &args.shot.target);
    let geometry = geometry_for(config, args.shot.distance, None, &args.shot.target);
    let solution = solve(&geometry, &physical);
    report_non_finite(&solution);

    render_arc(&args.output, &solution, &physical, (args.width, args.height))?;
    info!(output = %args.output.display(), "arc rendered");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => config::load(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => SolverConfig::default(),
    };

    match &cli.command {
        Command::Solve(args) => run_solve(&config, args),
        Command::Sweep(args) => run_sweep(&config, args)?,
        Command::Plot(args) => run_plot(&config, args)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{interpolate_height, sweep_distances};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn crossing_height_follows_the_line() {
        assert_close(interpolate_height(4.0, 4.0, 15.0, 9.7, 9.2), 9.7, 1e-12);
        assert_close(interpolate_height(15.0, 4.0, 15.0, 9.7, 9.2), 9.2, 1e-12);
        assert_close(interpolate_height(9.5, 4.0, 15.0, 9.7, 9.2), 9.45, 1e-12);
    }

    #[test]
    fn single_distance_sweep_keeps_near_height() {
        assert_eq!(interpolate_height(8.0, 8.0, 8.0, 9.7, 9.2), 9.7);
    }

    #[test]
    fn sweep_includes_both_ends() {
        let distances = sweep_distances(4.0, 6.0, 0.5).expect("valid range");
        assert_eq!(distances, vec![4.0, 4.5, 5.0, 5.5, 6.0]);
    }

    #[test]
    fn sweep_tolerates_float_steps() {
        let distances = sweep_distances(1.0, 2.0, 0.1).expect("valid range");
        assert_eq!(distances.len(), 11);
    }

    #[test]
    fn rejects_bad_sweep_ranges() {
        let err = sweep_distances(4.0, 6.0, 0.0).expect_err("zero step should fail");
        assert!(err.to_string().contains("--step"));

        let err = sweep_distances(6.0, 4.0, 1.0).expect_err("reversed range should fail");
        assert!(err.to_string().contains("--far"));
    }

    #[test]
    fn rejects_non_finite_sweep_bounds() {
        let err = sweep_distances(4.0, f64::INFINITY, 1.0).expect_err("infinite far should fail");
        assert!(err.to_string().contains("finite"));

        let err = sweep_distances(f64::NAN, 6.0, 1.0).expect_err("NaN near should fail");
        assert!(err.to_string().contains("finite"));
    }
}
