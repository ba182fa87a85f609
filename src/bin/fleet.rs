use std::path::PathBuf;

use clap::Parser;
use payload_calculator::catalog::load_fleet;
use payload_calculator::vehicle::cargo::CargoVehicle;
use payload_calculator::vehicle::passenger::PassengerVehicle;
use payload_calculator::vehicle::{Aircraft, FlyingVehicle};

#[derive(Parser)]
#[command(author, version, about = "Describe a fleet and its payload figures")]
struct Cli {
    /// Fleet catalog YAML to describe instead of the built-in sample fleet
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.catalog {
        Some(path) => describe_catalog(path),
        None => describe_sample_fleet(),
    }
}

fn describe_catalog(path: PathBuf) -> anyhow::Result<()> {
    let fleet = load_fleet(path)?;
    for mut aircraft in fleet {
        println!("{}", aircraft.describe());
        println!("Max kinetic energy: {}", aircraft.max_kinetic_energy());
        let takeoff_weight = aircraft.airframe().empty_weight_tonnes() * 1.5;
        println!("Payload: {}", aircraft.calculate_payload(takeoff_weight)?);
    }
    Ok(())
}

fn describe_sample_fleet() -> anyhow::Result<()> {
    let utility = FlyingVehicle::new("Antonov", "yellow", 2000.0, 1500)?;
    println!("{utility}");

    let mut passenger = PassengerVehicle::new("economy-liner", "white", 4.0, 280, 1)?;
    println!("{passenger}");
    println!("Payload: {} kg", passenger.calculate_payload(5.0)?);

    let mut cargo = CargoVehicle::new("freighter", "white", 300.0, 800, false)?;
    println!("{cargo}");
    println!("Max kinetic energy: {}", cargo.max_kinetic_energy());
    println!("Overload: {}", cargo.calculate_payload(450.0)?);

    Ok(())
}
