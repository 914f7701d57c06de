use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::sensitivity::BoundSide;

/// Meal bar optimizer — finds the cheapest recipe that meets nutritional bounds.
#[derive(Parser, Debug)]
#[command(name = "meal_bar_optimizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Problem JSON file; the built-in 120 g sample is used when omitted.
    #[arg(short, long, global = true)]
    pub problem: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve for the minimum-cost recipe.
    Solve {
        /// Print the recipe as JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Return the first cost optimum instead of preferring earlier ingredient names.
        #[arg(long)]
        no_tie_break: bool,
    },

    /// Re-solve while sweeping one nutrient bound.
    Sensitivity {
        /// Nutrient whose bound is swept.
        #[arg(long, default_value = "Protein")]
        nutrient: String,

        /// Which side of the bound to sweep.
        #[arg(long, value_enum, default_value = "min")]
        bound: BoundSide,

        /// Bound levels in grams (comma-separated); defaults to 15,18,20,22,25,28,30.
        #[arg(long)]
        levels: Option<String>,

        /// Output CSV file for the sweep.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output JSON file for the sweep.
        #[arg(long)]
        out_json: Option<PathBuf>,
    },

    /// Print the ingredient tables and requirements.
    Show,

    /// Write the built-in sample problem to a JSON file.
    Sample {
        /// Destination file.
        #[arg(long, default_value = "meal_bar.json")]
        out: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Solve {
            json: false,
            no_tie_break: false,
        }
    }
}
