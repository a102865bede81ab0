mod profile;

use std::path::PathBuf;

use anka_base::{
    ALL_CATEGORIES, ALL_CHARACTERISTICS, ALL_LINES, BioLevel, CategoryId, NumerologyContext,
    PRIMARY_CYCLES, SECONDARY_CYCLES, SecondaryLevel, SyncLevel, ZodiacSign,
    achievement_period, biorhythm, calculate_all, calculate_for_category, cell_counts,
    chart_series, compare_lines, content_keys, couple_sync, daily_lucky_number,
    life_path_compat_key, life_path_number, life_path_pair, line_values,
    love_compatibility_number, love_number, partner_life_path, personal_day, personal_month,
    personal_year, psychomatrix, secondary_biorhythm, soul_number, wedding_number,
};
use anka_time::{Clock, DateParts, FixedClock, SystemClock};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use crate::profile::Profile;

#[derive(Parser)]
#[command(name = "anka", about = "Anka numerology CLI")]
struct Cli {
    #[command(flatten)]
    person: PersonArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct PersonArgs {
    /// TOML profile with the person's data
    #[arg(long, global = true)]
    profile: Option<PathBuf>,
    /// Language code (en, ru, de, es, fr, it, pt)
    #[arg(long, global = true)]
    lang: Option<String>,
    /// Date of birth (DD/MM/YYYY)
    #[arg(long, global = true)]
    dob: Option<String>,
    /// First name
    #[arg(long, global = true)]
    first: Option<String>,
    /// Last name
    #[arg(long, global = true)]
    last: Option<String>,
    /// Middle name or patronymic
    #[arg(long, global = true)]
    middle: Option<String>,
    /// Partner's date of birth (DD/MM/YYYY)
    #[arg(long = "partner-dob", global = true)]
    partner_dob: Option<String>,
    /// Wedding day (DD/MM/YYYY)
    #[arg(long = "wedding-day", global = true)]
    wedding_day: Option<String>,
    /// Dates use the legacy 0-based month (00 = January)
    #[arg(long, global = true)]
    zero_based_months: bool,
    /// Pin today's date (DD/MM/YYYY) instead of the system clock
    #[arg(long, global = true)]
    today: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all categories
    Categories,
    /// Compute one category
    Calc {
        /// Category identifier (see `categories`)
        category: String,
        /// Also print content lookup keys
        #[arg(long)]
        keys: bool,
    },
    /// Compute every category
    All,
    /// Personal year, month and day with optional offsets
    Cycles {
        /// Years from now
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        year_offset: i32,
        /// Months from now
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        month_offset: i32,
        /// Days from today
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        day_offset: i64,
    },
    /// Biorhythm values for one day
    Biorhythm {
        /// Days from today (1 = tomorrow)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        offset: i64,
        /// Show the four secondary cycles instead
        #[arg(long)]
        secondary: bool,
    },
    /// Biorhythm chart around today
    Chart {
        /// Days before today
        #[arg(long, default_value = "7")]
        back: i64,
        /// Number of days
        #[arg(long, default_value = "15")]
        days: usize,
    },
    /// Compatibility with the partner
    Couple,
    /// Psychomatrix grid, cells and lines
    Psychomatrix,
    /// Western zodiac sign
    Zodiac,
    /// Birth-date numbers not covered by a category
    Extras,
}

fn parse_date_arg(s: &str, what: &str) -> DateParts {
    match DateParts::parse(s) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Invalid {what}: {e}");
            std::process::exit(1);
        }
    }
}

fn make_clock(today: Option<&str>) -> Box<dyn Clock> {
    match today {
        Some(s) => Box::new(FixedClock(parse_date_arg(s, "--today"))),
        None => Box::new(SystemClock),
    }
}

fn load_context(args: &PersonArgs) -> NumerologyContext {
    let base = match &args.profile {
        Some(path) => match Profile::load(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Profile::default(),
    };
    let flags = Profile {
        language: args.lang.clone(),
        date_of_birth: args.dob.clone(),
        first_name: args.first.clone(),
        last_name: args.last.clone(),
        middle_name: args.middle.clone(),
        partner_date_of_birth: args.partner_dob.clone(),
        wedding_day: args.wedding_day.clone(),
        zero_based_months: args.zero_based_months.then_some(true),
    };
    match base.overlay(flags).into_context() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Invalid person data: {e}");
            std::process::exit(1);
        }
    }
}

fn require_partner(ctx: &NumerologyContext) -> DateParts {
    match ctx.partner_date_of_birth {
        Some(d) => d,
        None => {
            eprintln!("This command needs a partner date of birth (--partner-dob)");
            std::process::exit(1);
        }
    }
}

fn print_category(id: CategoryId, ctx: &NumerologyContext, clock: &dyn Clock, keys: bool) {
    let def = id.definition();
    let result = calculate_for_category(id, ctx, clock);
    let mut note = String::new();
    if def.needs_partner && ctx.partner_date_of_birth.is_none() {
        note.push_str("  (no partner date)");
    }
    if def.needs_name && ctx.first_name.is_empty() && ctx.last_name.is_empty() {
        note.push_str("  (no name)");
    }
    println!("{:<22} {result}{note}", id.id());
    if keys {
        for key in content_keys(id, &result, ctx.language) {
            match key.characteristic {
                Some(c) => println!("  {}/{}/{c}/{}", key.table, key.locale, key.number),
                None => println!("  {}/{}/{}", key.table, key.locale, key.number),
            }
        }
    }
}

fn list_categories() {
    println!("{:<22} {:<22} {:<13} flags", "id", "table", "arity");
    for id in ALL_CATEGORIES {
        let def = id.definition();
        let mut flags = Vec::new();
        if def.needs_name {
            flags.push("name");
        }
        if def.needs_partner {
            flags.push("partner");
        }
        println!(
            "{:<22} {:<22} {:<13} {}",
            id.id(),
            def.table,
            def.arity.name(),
            flags.join(",")
        );
    }
}

fn main() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    // Listing the registry needs no person data.
    if let Commands::Categories = cli.command {
        list_categories();
        return;
    }

    let ctx = load_context(&cli.person);
    let clock = make_clock(cli.person.today.as_deref());
    run(cli.command, &ctx, clock.as_ref());
}

fn run(command: Commands, ctx: &NumerologyContext, clock: &dyn Clock) {
    match command {
        Commands::Categories => list_categories(),

        Commands::Calc { category, keys } => {
            let id = match category.parse::<CategoryId>() {
                Ok(id) => id,
                Err(e) => {
                    eprintln!("{e}");
                    eprintln!("Run `anka categories` for the list");
                    std::process::exit(1);
                }
            };
            print_category(id, ctx, clock, keys);
        }

        Commands::All => {
            for (id, _) in calculate_all(ctx, clock) {
                print_category(id, ctx, clock, false);
            }
        }

        Commands::Cycles {
            year_offset,
            month_offset,
            day_offset,
        } => {
            println!("Today:          {}", clock.today());
            println!("Personal year:  {}", personal_year(ctx, clock, year_offset));
            println!("Personal month: {}", personal_month(ctx, clock, month_offset));
            println!("Personal day:   {}", personal_day(ctx, clock, day_offset));
            println!("Lucky number:   {}", daily_lucky_number(ctx, clock, day_offset));
        }

        Commands::Biorhythm { offset, secondary } => {
            let birth = ctx.date_of_birth;
            if secondary {
                let values = secondary_biorhythm(&birth, clock, offset);
                for (cycle, v) in SECONDARY_CYCLES.iter().zip(values) {
                    println!(
                        "{:<13} {v:>8.2}%  {}",
                        cycle.name(),
                        SecondaryLevel::classify(v).name()
                    );
                }
            } else {
                let values = biorhythm(&birth, clock, offset);
                for (cycle, v) in PRIMARY_CYCLES.iter().zip(values) {
                    println!("{:<13} {v:>8.2}%  {}", cycle.name(), BioLevel::classify(v).name());
                }
            }
        }

        Commands::Chart { back, days } => {
            println!(
                "{:>5}  {:<10}  {:>9} {:>9} {:>12}",
                "day", "date", "physical", "emotional", "intellectual"
            );
            for point in chart_series(&ctx.date_of_birth, clock, back, days) {
                let [p, e, i] = point.values;
                println!(
                    "{:>+5}  {}  {p:>9.2} {e:>9.2} {i:>12.2}",
                    point.offset, point.date
                );
            }
        }

        Commands::Couple => {
            let partner = require_partner(ctx);
            println!(
                "Life paths:         {} / {}",
                life_path_number(ctx),
                partner_life_path(ctx)
            );
            println!("Love number:        {}", love_number(ctx));
            println!("Love compatibility: {}", love_compatibility_number(ctx));
            if let Some(key) = life_path_compat_key(life_path_pair(ctx), ctx.language) {
                println!(
                    "Compat key:         {}/{}/{}-{}",
                    key.table, key.locale, key.low, key.high
                );
            }
            println!();
            println!("Biorhythm sync:");
            for (cycle, v) in PRIMARY_CYCLES.iter().zip(couple_sync(&ctx.date_of_birth, &partner)) {
                println!("  {:<13} {v:>6.2}%  {}", cycle.name(), SyncLevel::classify(v).name());
            }
            if let Some(lines) = compare_lines(ctx) {
                println!();
                println!("Psychomatrix lines:");
                for cmp in lines {
                    println!(
                        "  {:<13} {:>2} / {:<2} {}",
                        cmp.line.name(),
                        cmp.user,
                        cmp.partner,
                        cmp.strength.name()
                    );
                }
            }
        }

        Commands::Psychomatrix => {
            let grid = psychomatrix(ctx);
            for row in grid.chunks(3) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|&v| if v == 0 { "-".to_string() } else { v.to_string() })
                    .collect();
                println!("{:>10} {:>10} {:>10}", cells[0], cells[1], cells[2]);
            }
            println!();
            for (c, count) in ALL_CHARACTERISTICS.iter().zip(cell_counts(&grid)) {
                println!("{:<12} {count}", c.name());
            }
            println!();
            for (line, value) in ALL_LINES.iter().zip(line_values(&grid)) {
                println!("{:<13} {value}", line.name());
            }
        }

        Commands::Zodiac => {
            println!("{}", ZodiacSign::of(&ctx.date_of_birth).name());
        }

        Commands::Extras => {
            println!("Soul number (day):  {}", soul_number(ctx));
            println!("Achievement period: {}", achievement_period(ctx));
            println!("Wedding number:     {}", wedding_number(ctx));
        }
    }
}
