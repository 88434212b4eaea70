pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use toml_config::MatchConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "skill-match")]
#[command(about = "Score self-reported skills against the skills a job role requires")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Role catalog CSV (overrides catalog.roles_file)
    #[arg(long, global = true)]
    pub roles_file: Option<String>,

    /// Company directory CSV (overrides catalog.companies_file)
    #[arg(long, global = true)]
    pub companies_file: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log format: text or json
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List job domains
    Domains,
    /// List roles in a domain
    Roles {
        #[arg(long)]
        domain: String,
    },
    /// List every skill in the catalog
    Skills,
    /// Score skills against a role and write a report
    Evaluate(EvaluateArgs),
    /// Show the roles closest to a skill selection
    Recommend {
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,

        #[arg(long)]
        top: Option<usize>,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct EvaluateArgs {
    #[arg(long)]
    pub domain: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long, value_delimiter = ',')]
    pub skills: Vec<String>,

    /// Also list the closest roles
    #[arg(long)]
    pub top: Option<usize>,

    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Bundle report files into a single ZIP
    #[arg(long)]
    pub zip: bool,

    /// Print the result without writing report files
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, config: &mut MatchConfig) {
        if let Some(roles_file) = &self.roles_file {
            config.catalog.roles_file = roles_file.clone();
        }
        if let Some(companies_file) = &self.companies_file {
            config.catalog.companies_file = Some(companies_file.clone());
        }
        if let Some(format) = &self.log_format {
            config.logging.format = Some(format.clone());
        }

        match &self.command {
            Command::Evaluate(args) => args.apply_overrides(config),
            Command::Recommend { skills, top } => {
                if !skills.is_empty() {
                    config.request.selected = skills.clone();
                }
                if top.is_some() {
                    config.request.top_k = *top;
                }
            }
            Command::Domains | Command::Roles { .. } | Command::Skills => {}
        }
    }
}

#[cfg(feature = "cli")]
impl EvaluateArgs {
    fn apply_overrides(&self, config: &mut MatchConfig) {
        if let Some(domain) = &self.domain {
            config.request.domain = domain.clone();
        }
        if let Some(role) = &self.role {
            config.request.role = role.clone();
        }
        if !self.skills.is_empty() {
            config.request.selected = self.skills.clone();
        }
        if self.top.is_some() {
            config.request.top_k = self.top;
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if !self.format.is_empty() {
            config.output.formats = self.format.clone();
        }
        if self.zip {
            config.output.compress = true;
        }
    }
}
