use anyhow::Context;
use clap::Parser;
use course_overview_lite::config::cli::{CliArgs, Command};
use course_overview_lite::utils::{logger, validation::Validate};
use course_overview_lite::{
    select_course_records, CourseOverview, EnrolmentCourseProvider, FilePreferenceStore,
    NavigationTree, OverviewError, SortedCourses, TomlConfig,
};

fn main() {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if let Err(e) = run(args) {
        tracing::error!("❌ course-overview failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        if let Some(overview_error) = e.downcast_ref::<OverviewError>() {
            eprintln!("💡 {}", overview_error.recovery_suggestion());
        }
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path.display()))?
        }
        None => TomlConfig::default(),
    };
    config.validate()?;
    tracing::debug!("Block config: {:?}", config.block);

    let store = FilePreferenceStore::new(&args.prefs);
    let wwwroot = config.wwwroot().to_string();
    let mut overview = CourseOverview::new(store, config.block);

    match args.command {
        Command::SetLimit { number } => {
            overview.set_max_courses_preference(number)?;
            tracing::info!("✅ Course limit preference set to {}", number);
        }
        Command::SetOrder { order } => {
            overview.set_course_order_preference(&order)?;
            tracing::info!("✅ Course order preference saved ({} courses)", order.len());
        }
        Command::List {
            courses,
            navigation,
            json,
        } => {
            let tree = navigation
                .map(|path| {
                    NavigationTree::from_file(&path)
                        .with_context(|| format!("failed to read navigation tree '{}'", path.display()))
                })
                .transpose()?;
            let enrolment = courses
                .map(|path| {
                    EnrolmentCourseProvider::from_path(&path, &wwwroot)
                        .with_context(|| format!("failed to read enrolments '{}'", path.display()))
                })
                .transpose()?;

            let records = select_course_records(tree.as_ref(), enrolment.as_ref())?;
            let sorted = overview.sorted_courses(records);
            print_courses(&sorted, json)?;
        }
    }

    Ok(())
}

fn print_courses(sorted: &SortedCourses, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(sorted)?);
        return Ok(());
    }

    for course in &sorted.courses {
        let marker = if course.current { "*" } else { " " };
        let hidden = if course.hidden { " (hidden)" } else { "" };
        println!(
            "{}{}\t{}\t{}{}",
            marker, course.id, course.shortname, course.fullname, hidden
        );
    }
    println!("{} course(s)", sorted.count);
    Ok(())
}
