use clap::{CommandFactory, Parser};
use streaks::application::{ExclusionService, HabitService, MarkService, StatusService};
use streaks::cli::{format_status_list, format_week_header, Cli, Commands};
use streaks::domain::Calendar;
use streaks::error::StreaksError;
use streaks::infrastructure::{Config, FileSystemRepository};
use streaks::logging;

fn main() {
    let cli = Cli::parse();

    logging::init_with_level(logging::default_level(cli.verbose));

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), StreaksError> {
    if let Some(Commands::Help) = cli.command {
        Cli::command().print_help()?;
        return Ok(());
    }

    let repo = FileSystemRepository::discover()?;
    // Every command in one run agrees on "today"
    let calendar = match Config::today_override()? {
        Some(date) => Calendar::anchored(date),
        None => Calendar::local(),
    };
    tracing::debug!(data_dir = %repo.root.display(), today = %calendar.today(), "starting");

    match cli.command {
        None | Some(Commands::List) => {
            let statuses = StatusService::new(repo, calendar).execute()?;
            println!("{}", format_week_header(&calendar));
            print!("{}", format_status_list(&statuses));
            Ok(())
        }
        Some(Commands::Add { name }) => {
            let habit = HabitService::new(repo).add(&name)?;
            println!("Added {}", habit);
            Ok(())
        }
        Some(Commands::Delete { number }) => {
            let habit = HabitService::new(repo).delete(number)?;
            println!("Deleted {}", habit);
            Ok(())
        }
        Some(Commands::Rename { number, name }) => {
            let (old, new) = HabitService::new(repo).rename(number, &name)?;
            println!("Renamed {} -> {}", old, new);
            Ok(())
        }
        Some(Commands::Toggle { number, date }) => {
            let outcome = MarkService::new(repo, calendar).toggle(number, date.as_deref())?;
            let verb = if outcome.marked { "Marked" } else { "Unmarked" };
            println!("{} {} on {}", verb, outcome.habit, outcome.date);
            Ok(())
        }
        Some(Commands::Since { number, days }) => {
            let (habit, created) = MarkService::new(repo, calendar).backfill(number, days)?;
            println!("Marked {} days for {} ({} new)", days, habit, created);
            Ok(())
        }
        Some(Commands::Days { number, values }) => {
            let (habit, set) = ExclusionService::new(repo).set(number, values.as_deref())?;
            if set.is_empty() {
                println!("Cleared excluded days for {}", habit);
            } else {
                println!("Excluded days for {}: {}", habit, set);
            }
            Ok(())
        }
        Some(Commands::Help) => unreachable!(),
    }
}
