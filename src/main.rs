use clap::Parser;
use skill_match::config::Command;
use skill_match::core::recommend::DEFAULT_TOP_K;
use skill_match::core::report::{render_text, title_case};
use skill_match::core::Pipeline;
use skill_match::utils::{logger, validation::Validate};
use skill_match::{
    recommend, CliConfig, JobCatalog, LocalStorage, MatchConfig, MatchEngine, MatchError,
    MatchPipeline,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入設定檔，未指定時使用預設值
    let mut config = match &cli.config {
        Some(path) => match MatchConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => MatchConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 初始化日誌
    let level = config.logging.level.clone();
    if config.log_as_json() {
        logger::init_json_logger(cli.verbose, level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, level.as_deref());
    }

    tracing::info!("🚀 Starting skill-match");
    if cli.verbose {
        tracing::debug!("Effective config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    if let Err(e) = run(&cli, config).await {
        fail(&e);
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: MatchConfig) -> skill_match::Result<()> {
    let engine = MatchEngine::new(MatchPipeline::new(LocalStorage::new("."), config));

    match &cli.command {
        Command::Domains => {
            let catalog = engine.pipeline().extract().await?;
            for domain in catalog.domains() {
                println!("{}", domain);
            }
        }
        Command::Roles { domain } => {
            let catalog = engine.pipeline().extract().await?;
            for role in catalog.roles(domain)? {
                println!("{}", role);
            }
        }
        Command::Skills => {
            let catalog = engine.pipeline().extract().await?;
            for skill in catalog.skill_vocabulary() {
                println!("{}", title_case(skill));
            }
        }
        Command::Recommend { .. } => {
            let catalog = engine.pipeline().extract().await?;
            print_recommendations(&catalog, engine.pipeline().config())?;
        }
        Command::Evaluate(args) => {
            let outcome = engine.evaluate_only().await?;
            print!("{}", render_text(&outcome));

            if args.dry_run {
                tracing::info!("🔍 DRY RUN MODE - no report written");
                return Ok(());
            }

            let output_path = engine.pipeline().load(outcome).await?;
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("📁 Report saved to: {}", output_path);
        }
    }

    Ok(())
}

fn print_recommendations(catalog: &JobCatalog, config: &MatchConfig) -> skill_match::Result<()> {
    let k = config.request.top_k.unwrap_or(DEFAULT_TOP_K);
    let picks = recommend(catalog, &config.request.selected, k)?;

    println!("✅ Recommended roles:");
    for pick in &picks {
        println!("- {} ({})", pick.role, pick.domain);
    }

    println!();
    println!("📊 Distances to roles:");
    for pick in &picks {
        println!(
            "{} → Distance: {:.2}, Match: {:.2}%",
            pick.role, pick.distance, pick.percent
        );
    }

    Ok(())
}

fn fail(e: &MatchError) -> ! {
    tracing::error!(
        "❌ skill-match failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
