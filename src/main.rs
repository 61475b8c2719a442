use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitbox_calc_rs::cli::{Cli, Command, LogFormat};
use fitbox_calc_rs::engine::{
    calculate_bmi, calculate_bmr, calculate_complete_profile, calculate_profile_from,
    calculate_tdee, get_bmi_interpretation, tdee_for, ActivityLevel, FitnessGoal,
};
use fitbox_calc_rs::error::{FitboxError, Result};
use fitbox_calc_rs::export::{
    load_profile_json, run_batch_files, save_profile_json, save_report,
};
use fitbox_calc_rs::interface::{
    collect_user_inputs, display_activity_levels, display_goals, display_profile,
    prompt_activity_level, prompt_age, prompt_bmr, prompt_height, prompt_menu, prompt_path,
    prompt_sex, prompt_weight, prompt_yes_no, suggest_key, MenuChoice,
};
use fitbox_calc_rs::models::Sex;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_format, cli.verbose);

    if let Err(e) = run(cli.command.unwrap_or_default()) {
        report_error(&e);
        std::process::exit(1);
    }
}

fn init_tracing(format: LogFormat, verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "fitbox_calc_rs=debug,fitbox=debug".into()
        } else {
            "fitbox_calc_rs=warn,fitbox=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => subscriber
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

/// Print an error, with a suggestion when a key looks mistyped.
fn report_error(e: &FitboxError) {
    eprintln!("Error: {}", e);

    if let FitboxError::UnknownKey { kind, value, .. } = e {
        let keys = match *kind {
            "activity level" => ActivityLevel::keys(),
            "goal" => FitnessGoal::keys(),
            _ => Sex::KEYS.to_vec(),
        };
        if let Some(suggestion) = suggest_key(value, &keys) {
            eprintln!("Did you mean '{}'?", suggestion);
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Interactive => cmd_interactive(),
        Command::Profile {
            age,
            sex,
            weight,
            height,
            activity,
            goal,
            json,
            save,
        } => {
            let profile = calculate_complete_profile(age, &sex, weight, height, &activity, &goal)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                display_profile(&profile);
            }
            if let Some(path) = save {
                if json {
                    save_profile_json(&path, &profile)?;
                } else {
                    save_report(&path, &profile)?;
                }
                println!("Saved to {}", path.display());
            }
            Ok(())
        }
        Command::Report { from } => {
            let profile = load_profile_json(&from)?;
            display_profile(&profile);
            Ok(())
        }
        Command::Bmi { weight, height } => {
            let bmi = calculate_bmi(weight, height)?;
            print_bmi(bmi);
            Ok(())
        }
        Command::Bmr {
            age,
            sex,
            weight,
            height,
        } => {
            let bmr = calculate_bmr(weight, height, age, &sex)?;
            println!("BMR: {:.0} kcal/day", bmr);
            Ok(())
        }
        Command::Tdee { bmr, activity } => {
            let tdee = calculate_tdee(bmr, &activity)?;
            println!("TDEE: {:.0} kcal/day", tdee);
            Ok(())
        }
        Command::Levels => {
            display_activity_levels();
            Ok(())
        }
        Command::Goals => {
            display_goals();
            Ok(())
        }
        Command::Batch { input, output } => {
            let summary = run_batch_files(&input, &output)?;
            println!(
                "Profiled {} rows ({} skipped) -> {}",
                summary.processed,
                summary.skipped,
                output.display()
            );
            Ok(())
        }
    }
}

fn print_bmi(bmi: f64) {
    let interp = get_bmi_interpretation(bmi);
    println!();
    println!("BMI: {:.2} [{}]", interp.value, interp.indicator);
    println!("Category: {}", interp.category);
    println!("{}", interp.recommendation);
    println!();
}

/// Menu loop. A failed action is reported and the menu is shown again.
fn cmd_interactive() -> Result<()> {
    println!("=== FitBox physiological calculator ===");

    loop {
        let choice = prompt_menu()?;
        let outcome = match choice {
            MenuChoice::FullProfile => interactive_profile(),
            MenuChoice::BmiOnly => interactive_bmi(),
            MenuChoice::BmrOnly => interactive_bmr(),
            MenuChoice::TdeeOnly => interactive_tdee(),
            MenuChoice::ActivityLevels => {
                display_activity_levels();
                Ok(())
            }
            MenuChoice::Goals => {
                display_goals();
                Ok(())
            }
            MenuChoice::Quit => break,
        };

        match outcome {
            Ok(()) => {}
            // Terminal errors end the session.
            Err(e @ FitboxError::Prompt(_)) => return Err(e),
            Err(e) => report_error(&e),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn interactive_profile() -> Result<()> {
    let inputs = collect_user_inputs()?;
    let profile = calculate_profile_from(&inputs)?;
    display_profile(&profile);

    if prompt_yes_no("Save this report?", false)? {
        let path = prompt_path("File name", "my_profile.txt")?;
        save_report(&path, &profile)?;
        println!("Saved to {}", path);
    }
    Ok(())
}

fn interactive_bmi() -> Result<()> {
    let weight = prompt_weight()?;
    let height = prompt_height()?;
    print_bmi(calculate_bmi(weight, height)?);
    Ok(())
}

fn interactive_bmr() -> Result<()> {
    let age = prompt_age()?;
    let sex = prompt_sex()?;
    let weight = prompt_weight()?;
    let height = prompt_height()?;

    let bmr = calculate_bmr(weight, height, age, sex.key())?;
    println!();
    println!("BMR: {:.0} kcal/day", bmr);
    println!("Calories your body burns at rest for vital functions.");
    println!();
    Ok(())
}

fn interactive_tdee() -> Result<()> {
    let bmr = prompt_bmr()?;
    let level = prompt_activity_level()?;

    let tdee = tdee_for(bmr, level);
    println!();
    println!("TDEE: {:.0} kcal/day", tdee);
    println!("Total calories burned per day at this activity level.");
    println!();
    Ok(())
}
