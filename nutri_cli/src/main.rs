use clap::{Args, Parser, Subcommand};
use nutri_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nutri")]
#[command(about = "Offline daily nutrition goal calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate daily nutrition goals
    Calc(CalcArgs),

    /// Map a legacy weight goal string to its canonical value
    MapGoal {
        /// Legacy or canonical goal (e.g. lose_heavy, gain)
        goal: String,
    },

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct CalcArgs {
    /// Read the profile from a JSON file; flags below override its fields
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Body weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Height in centimeters
    #[arg(long)]
    height: Option<f64>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Gender (male, female, other)
    #[arg(long)]
    gender: Option<String>,

    /// Activity level (sedentary, light, moderate, active, very_active)
    #[arg(long)]
    activity: Option<String>,

    /// Weight goal, canonical or legacy (defaults to maintain)
    #[arg(long)]
    goal: Option<String>,

    /// Target weight in kilograms (echoed only)
    #[arg(long)]
    target_weight: Option<f64>,

    /// Print goals as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Also write goals as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    nutri_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Calc(args) => {
            let config = match cli.config {
                Some(ref path) => load_config(path)?,
                None => Config::load()?,
            };
            cmd_calc(args, &config)
        }
        Commands::MapGoal { goal } => {
            println!("{}", map_weight_goal(&goal));
            Ok(())
        }
        Commands::InitConfig { force } => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::default_config_path()?,
            };
            cmd_init_config(&path, force)
        }
    }
}

/// Load an explicitly named config file, falling back to defaults if absent
fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::load_from(path)
    } else {
        tracing::info!("No config file found at {:?}, using defaults", path);
        Ok(Config::default())
    }
}

fn cmd_calc(args: CalcArgs, config: &Config) -> Result<()> {
    let mut profile = match args.profile {
        Some(ref path) => load_profile(path)?,
        None => UserProfile::default(),
    };

    // Command-line flags take precedence over the profile file
    if args.weight.is_some() {
        profile.weight = args.weight;
    }
    if args.height.is_some() {
        profile.height = args.height;
    }
    if args.age.is_some() {
        profile.age = args.age;
    }
    if args.gender.is_some() {
        profile.gender = args.gender;
    }
    if args.activity.is_some() {
        profile.activity_level = args.activity;
    }
    if args.goal.is_some() {
        profile.weight_goal = args.goal;
    }
    if args.target_weight.is_some() {
        profile.target_weight = args.target_weight;
    }

    profile.resolve_age(chrono::Local::now().date_naive());

    let calc = calculate_with(&profile, config)
        .ok_or_else(|| Error::InsufficientProfile(profile.missing_fields()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&calc.goals)?);
    } else {
        display_goals(&calc);
    }

    if let Some(ref path) = args.output {
        save_goals(&calc.goals, path)?;
        if !args.json {
            println!("✓ Goals written to {}", path.display());
        }
    }

    Ok(())
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

fn display_goals(calc: &GoalCalculation) {
    let goals = &calc.goals;
    let split = &calc.macro_split;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  DAILY NUTRITION GOALS");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  BMR:  {:.0} kcal", calc.bmr);
    println!(
        "  TDEE: {:.0} kcal ({})",
        calc.tdee,
        goals.activity_level.as_str()
    );
    println!("  Goal: {}", goals.weight_goal);
    println!();
    println!("  Calories:      {} kcal", goals.daily_calorie_goal);
    println!(
        "  Protein:       {} g ({:.1}%)",
        goals.protein_goal,
        split.protein_pct * 100.0
    );
    println!(
        "  Carbohydrate:  {} g ({:.1}%)",
        goals.carb_goal,
        split.carb_pct * 100.0
    );
    println!(
        "  Fat:           {} g ({:.1}%)",
        goals.fat_goal,
        split.fat_pct * 100.0
    );
    println!();
    println!("  Fiber:         {} g", goals.fiber_goal);
    println!("  Sugar (max):   {} g", goals.sugar_goal);
    println!("  Saturated fat: {} g", goals.saturated_fat_goal);
    println!("  Sodium:        {} mg", goals.sodium_goal);
    println!("  Potassium:     {} mg", goals.potassium_goal);
    println!("  Cholesterol:   {} mg", goals.cholesterol_goal);

    if let Some(target) = goals.target_weight {
        println!();
        println!("  Target weight: {} kg", target);
    }

    if calc.defaulted.activity_level {
        println!();
        println!("  ⚠ Activity level not recognised, calculated as sedentary");
    }
    if calc.defaulted.weight_goal {
        println!();
        println!("  ⚠ Weight goal not recognised, calculated as maintain");
    }

    println!();
}
