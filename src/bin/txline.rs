//! txline CLI - transmission-line R/L/C/G from the command line.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use txline::prelude::*;

#[derive(Parser)]
#[command(name = "txline")]
#[command(about = "Transmission-line parameter calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Log every evaluation to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parameters of a parallel two-wire line
    TwoWire {
        #[command(flatten)]
        geometry: TwoWireArgs,
        #[command(flatten)]
        material: MaterialArgs,
        #[command(flatten)]
        point: PointArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Parameters of a coaxial line
    Coax {
        /// Inner conductor radius a (m)
        #[arg(long, default_value_t = 0.000_813)]
        inner_radius: f64,
        /// Outer conductor radius b (m)
        #[arg(long, default_value_t = 0.02)]
        outer_radius: f64,
        #[command(flatten)]
        material: MaterialArgs,
        #[command(flatten)]
        point: PointArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Sweep the length of a two-wire line and tabulate the results
    Sweep {
        #[command(flatten)]
        geometry: TwoWireArgs,
        #[command(flatten)]
        material: MaterialArgs,
        /// Signal frequency (Hz)
        #[arg(short, long, default_value_t = 60.0)]
        frequency: f64,
        /// First length (m)
        #[arg(long, default_value_t = 100.0)]
        start: f64,
        /// Last length (m)
        #[arg(long, default_value_t = 5000.0)]
        stop: f64,
        /// Length increment (m)
        #[arg(long, default_value_t = 100.0)]
        step: f64,
        /// Write the table as CSV to this file
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
        /// Skip the console table
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Print a JSON object instead of text
    #[arg(long)]
    json: bool,
    /// Also report characteristic impedance, attenuation and phase velocity
    #[arg(long)]
    impedance: bool,
}

#[derive(Args)]
struct TwoWireArgs {
    /// Conductor radius d (m)
    #[arg(long, default_value_t = 0.000_813)]
    radius: f64,
    /// Center-to-center spacing D (m)
    #[arg(long, default_value_t = 0.02)]
    spacing: f64,
}

#[derive(Args)]
struct MaterialArgs {
    /// Relative permittivity of the insulator
    #[arg(long, default_value_t = 1.0)]
    relative_permittivity: f64,
    /// Relative permeability of the insulator
    #[arg(long, default_value_t = 1.0)]
    insulator_permeability: f64,
    /// Relative permeability of the conductors
    #[arg(long, default_value_t = 1.0)]
    conductor_permeability: f64,
    /// Conductor conductivity (S/m)
    #[arg(long, default_value_t = COPPER_CONDUCTIVITY)]
    conductor_conductivity: f64,
    /// Insulator conductivity (S/m); enables the G output
    #[arg(long)]
    insulator_conductivity: Option<f64>,
}

impl MaterialArgs {
    fn to_material(&self) -> MaterialProperties {
        MaterialProperties {
            relative_permittivity: self.relative_permittivity,
            insulator_permeability: self.insulator_permeability,
            conductor_permeability: self.conductor_permeability,
            conductor_conductivity: self.conductor_conductivity,
            insulator_conductivity: self.insulator_conductivity,
        }
    }
}

#[derive(Args)]
struct PointArgs {
    /// Signal frequency (Hz)
    #[arg(short, long, default_value_t = 60.0)]
    frequency: f64,
    /// Cable length (m)
    #[arg(short, long, default_value_t = 2500.0)]
    length: f64,
}

impl PointArgs {
    fn to_point(&self) -> OperatingPoint {
        OperatingPoint::new(self.frequency, self.length)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::TwoWire {
            geometry,
            material,
            point,
            output,
        } => {
            let model = TwoWireLineModel::new(TwoWireGeometry::new(geometry.radius, geometry.spacing));
            handle_single(&model, &material, &point, &output)
        }
        Commands::Coax {
            inner_radius,
            outer_radius,
            material,
            point,
            output,
        } => {
            let model = CoaxialLineModel::new(CoaxialGeometry::new(inner_radius, outer_radius));
            handle_single(&model, &material, &point, &output)
        }
        Commands::Sweep {
            geometry,
            material,
            frequency,
            start,
            stop,
            step,
            csv,
            quiet,
        } => {
            let config = SweepConfig {
                range: LengthRange::new(start, stop, step),
                frequency_hz: frequency,
                csv_path: csv,
            };
            let model = TwoWireLineModel::new(TwoWireGeometry::new(geometry.radius, geometry.spacing));
            handle_sweep(model, &material, &config, quiet)
        }
    };

    process::exit(exit_code);
}

fn handle_single<M: LineModel>(model: &M, material: &MaterialArgs, point: &PointArgs, output: &OutputArgs) -> i32 {
    match report_single(model, &material.to_material(), &point.to_point(), output) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn report_single<M: LineModel>(
    model: &M,
    material: &MaterialProperties,
    point: &OperatingPoint,
    output: &OutputArgs,
) -> Result<(), LineError> {
    let params = model.compute(material, point)?;
    let wave = if output.impedance {
        let per_m = model.per_unit_length(material, point.frequency_hz)?;
        Some(WaveSummary::new(
            &TransmissionLine::new(point.length_m, per_m.into()),
            angular_frequency(point.frequency_hz),
        ))
    } else {
        None
    };

    if output.json {
        let mut value = params_json(&params);
        if let Some(wave) = &wave {
            value["Z0"] = serde_json::json!(wave.z0);
            value["Zc"] = serde_json::json!([wave.zc.re, wave.zc.im]);
            value["attenuation_dB"] = serde_json::json!(wave.attenuation_db);
            value["velocity"] = serde_json::json!(wave.velocity);
        }
        println!("{value}");
        return Ok(());
    }

    println!("R: {:.6e}", params.r);
    println!("L: {:.6e}", params.l);
    println!("C: {:.6e}", params.c);
    if let Some(g) = params.g {
        println!("G: {g:.6e}");
    }
    if let Some(wave) = wave {
        println!("Z0: {:.6e} Ohm", wave.z0);
        println!("Zc: {:.6e} {:+.6e}j Ohm", wave.zc.re, wave.zc.im);
        println!("attenuation: {:.6e} dB", wave.attenuation_db);
        match wave.velocity {
            Some(v) => println!("velocity: {v:.6e} m/s"),
            None => println!("velocity: -"),
        }
    }
    Ok(())
}

struct WaveSummary {
    z0: f64,
    zc: CScalar,
    attenuation_db: f64,
    velocity: Option<f64>,
}

impl WaveSummary {
    fn new(line: &TransmissionLine, omega: f64) -> Self {
        Self {
            z0: line.lossless_impedance(),
            zc: line.characteristic_impedance(omega),
            attenuation_db: line.attenuation_db(omega),
            velocity: line.phase_velocity(omega),
        }
    }
}

fn params_json(params: &LineParameters) -> serde_json::Value {
    let mut value = serde_json::json!({
        "R": params.r,
        "L": params.l,
        "C": params.c,
    });
    if let Some(g) = params.g {
        value["G"] = serde_json::json!(g);
    }
    value
}

fn handle_sweep(model: TwoWireLineModel, material: &MaterialArgs, config: &SweepConfig, quiet: bool) -> i32 {
    let runner = SweepRunner::new(model, material.to_material(), config.frequency_hz);
    let table = match runner.run(&config.range) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if !quiet {
        print!("{}", render_console(&table));
    }

    if let Some(path) = &config.csv_path {
        if let Err(e) = write_csv_file(path, &table) {
            eprintln!("Error: cannot write {}: {e}", path.display());
            return 1;
        }
        if !quiet {
            println!("Wrote {} rows to {}", table.len(), path.display());
        }
    }
    0
}
