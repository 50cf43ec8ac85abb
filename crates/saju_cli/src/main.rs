use clap::{Parser, Subcommand};
use saju_base::{
    CaseCheck, GanJi, MidnightPolicy, PillarConfig, Stem, active_boundary,
    calculate_pillars_with, check_reference_cases, hour_branch,
};
use saju_rs::{BirthInput, Gender, SajuReport, SubmissionPayload, ValidationConfig, report_for_with};
use saju_time::{BirthMoment, parse_date};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (사주) calendar CLI")]
struct Cli {
    /// Keep 23:00-23:59 on the calendar day instead of rolling to the next
    #[arg(long, global = true)]
    same_day_midnight: bool,
    /// Accept dates like Feb 30 (only month 1-12 and day 1-31 are checked)
    #[arg(long, global = true)]
    lenient: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a local birth date and time
    Pillars {
        /// Local datetime (YYYY-MM-DDThh:mm)
        datetime: String,
    },
    /// Full reading: pillars, labels and interpretation
    Report {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (hh:mm); noon when omitted
        #[arg(long)]
        time: Option<String>,
        /// Name shown in the reading
        #[arg(long, default_value = "익명")]
        name: String,
        /// Gender: male/female or 남/여
        #[arg(long, default_value = "male")]
        gender: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Look up a sexagenary term by index (0-59) or name (e.g. 庚申, 경신)
    Ganji {
        /// Index or two-character name
        value: String,
    },
    /// Month branch and governing solar term for a calendar day
    MonthBranch {
        /// Month (1-12)
        month: i32,
        /// Day of month
        day: i32,
    },
    /// Hour branch for a clock hour
    HourBranch {
        /// Hour (0-23)
        hour: i32,
    },
    /// Spreadsheet submission record as JSON
    Submission {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (hh:mm); noon when omitted
        #[arg(long)]
        time: Option<String>,
        /// Respondent name
        #[arg(long)]
        name: String,
        /// Gender: male/female or 남/여
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// Recompute the pinned reference moments
    Verify,
}

fn pillar_config(same_day_midnight: bool) -> PillarConfig {
    PillarConfig {
        midnight: if same_day_midnight {
            MidnightPolicy::SameDay
        } else {
            MidnightPolicy::NextDay
        },
    }
}

fn validation_config(lenient: bool) -> ValidationConfig {
    ValidationConfig {
        strict_calendar: !lenient,
        ..ValidationConfig::default()
    }
}

fn parse_hm(s: &str) -> Result<(i32, i32), String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("expected hh:mm, got {s}"))?;
    let hour: i32 = h.trim().parse().map_err(|e| format!("{e}"))?;
    let minute: i32 = m.trim().parse().map_err(|e| format!("{e}"))?;
    Ok((hour, minute))
}

fn build_input(
    name: &str,
    date: &str,
    time: Option<&str>,
    gender: &str,
) -> Result<BirthInput, String> {
    let (year, month, day) = parse_date(date).map_err(|e| e.to_string())?;
    let gender: Gender = gender.parse().map_err(|e| format!("{e}"))?;
    let mut input = BirthInput::new(name, year, month, day).with_gender(gender);
    if let Some(t) = time {
        let (hour, minute) = parse_hm(t)?;
        input = input.with_time(hour, minute);
    }
    Ok(input)
}

fn print_report(r: &SajuReport) {
    println!("{}", r.type_name);
    println!(
        "  {} {} {} {}",
        r.pillars.year_han, r.pillars.month_han, r.pillars.day_han, r.pillars.hour_han
    );
    println!("{} - {}", r.day_pillar_name, r.title);
    println!("  {}", r.description);
    println!("  키워드: {}", r.keywords.join(", "));
    println!("  조언: {}", r.advice);
    if r.is_notable_day {
        println!("  (경신일)");
    }
}

fn stem_line(s: Stem) -> String {
    format!(
        "{} {} ({}, {}{}, {})",
        s.hanja(),
        s.name(),
        s.element_name(),
        s.element().hanja(),
        s.element().name(),
        if s.is_yang() { "양" } else { "음" }
    )
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("{e}");
    std::process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pillars_cfg = pillar_config(cli.same_day_midnight);
    let validation_cfg = validation_config(cli.lenient);

    match cli.command {
        Commands::Pillars { datetime } => {
            let moment: BirthMoment = datetime.parse().unwrap_or_else(|e| fail(e));
            moment
                .validate(validation_cfg.strict_calendar)
                .unwrap_or_else(|e| fail(e));
            let r = calculate_pillars_with(&moment, &pillars_cfg);
            let p = &r.pillars;
            println!("{}", p.hanja());
            println!("{}", p.type_label());
            println!("Day pillar: {} (index {})", p.day_label(), p.day.index());
            if r.is_notable_day {
                println!("Notable day: 庚申");
            }
            if r.matches_reference_case {
                println!("Reference moment");
            }
        }

        Commands::Report {
            date,
            time,
            name,
            gender,
            json,
        } => {
            let input = build_input(&name, &date, time.as_deref(), &gender)
                .unwrap_or_else(|e| fail(e));
            let r = report_for_with(&input, &validation_cfg, &pillars_cfg)
                .unwrap_or_else(|e| fail(e));
            if json {
                println!("{}", r.to_json().unwrap_or_else(|e| fail(e)));
            } else {
                print_report(&r);
            }
        }

        Commands::Ganji { value } => {
            let g: GanJi = value.parse().unwrap_or_else(|e| fail(e));
            let s = g.stem();
            let b = g.branch();
            println!("{} {} (index {}, order {})", g.hanja(), g.name(), g.index(), g.order());
            println!("  Stem:   {}", stem_line(s));
            println!("  Branch: {} {} ({})", b.hanja(), b.name(), b.animal());
        }

        Commands::MonthBranch { month, day } => {
            let boundary = active_boundary(month, day);
            let b = boundary.branch;
            println!(
                "{} {} - {} {} (from {:02}-{:02})",
                b.hanja(),
                b.name(),
                boundary.term.hanja(),
                boundary.term.name(),
                boundary.month,
                boundary.day
            );
        }

        Commands::HourBranch { hour } => {
            if !(0..=23).contains(&hour) {
                fail(format!("hour must be 0-23, got {hour}"));
            }
            let b = hour_branch(hour);
            println!(
                "{} {} ({}시, from {:02}:00)",
                b.hanja(),
                b.name(),
                b.name(),
                b.start_hour()
            );
        }

        Commands::Submission {
            date,
            time,
            name,
            gender,
        } => {
            let input = build_input(&name, &date, time.as_deref(), &gender)
                .unwrap_or_else(|e| fail(e));
            let moment = input
                .validate_with(&validation_cfg)
                .unwrap_or_else(|e| fail(e));
            let report = saju_rs::report_for_moment(&moment, &pillars_cfg);
            let payload = SubmissionPayload::now(&input, &moment, &report);
            debug!(name = %payload.name, "submission built");
            println!("{}", payload.to_json().unwrap_or_else(|e| fail(e)));
        }

        Commands::Verify => {
            let checks = check_reference_cases();
            for c in &checks {
                let mark = if c.passed() { "ok" } else { "MISMATCH" };
                println!("{}  {}  expected {}  {mark}", c.case.moment, c.got, c.case.expected);
            }
            if checks.iter().all(CaseCheck::passed) {
                info!("all reference moments match");
                println!("OK");
            } else {
                fail("reference check failed");
            }
        }
    }
}
