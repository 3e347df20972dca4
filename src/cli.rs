use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::energy_source::EnergySource;
use crate::units::EnergyUnit;

#[derive(Debug, Parser)]
#[command(author, version, about = "Levelized Cost Of Energy calculator", long_about = None)]
pub struct Args {
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[arg(short, long, global = true, allow_hyphen_values = true, help = "Override the discount factor from the config file")]
    pub discount_factor: Option<f64>,

    #[arg(short, long, global = true, help = "Report unit: kWh, MWh, GWh or TWh")]
    pub unit: Option<EnergyUnit>,

    #[arg(short, long, global = true, help = "Log the discounted cash flow of every year")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List configured energy sources
    List,
    /// Calculate the LCOE of configured sources (all of them when none is named)
    Calc {
        names: Vec<String>,
        #[arg(short, long, default_value_t = false)]
        breakdown: bool,
    },
    /// Calculate the LCOE of a source given on the command line
    Custom(CustomSource),
    /// Enter the source parameters interactively
    Interactive,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CustomSource {
    #[arg(long)]
    pub cost_per_gw: f64,
    #[arg(long)]
    pub max_power_perc: f64,
    #[arg(long, default_value_t = 0.0)]
    pub o_and_m_per_gw_per_year: f64,
    #[arg(long, default_value_t = 0.0)]
    pub o_and_m_per_twh: f64,
    #[arg(long)]
    pub years_to_launch: u32,
    #[arg(long)]
    pub years_of_operation: u32,
    #[arg(short, long, default_value_t = false)]
    pub breakdown: bool,
}

impl From<&CustomSource> for EnergySource {
    fn from(value: &CustomSource) -> Self {
        EnergySource::new(
            value.cost_per_gw,
            value.max_power_perc,
            value.o_and_m_per_gw_per_year,
            value.o_and_m_per_twh,
            value.years_to_launch,
            value.years_of_operation,
        )
    }
}
