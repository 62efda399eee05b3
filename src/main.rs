// SPDX-License-Identifier: PMPL-1.0-or-later

//! treeline: census forms, surname traditions, locale tables and module
//! settings from the command line.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use treeline::census::{self, generate_transcript, CensusTranscript};
use treeline::config::Config;
use treeline::locale::{self, format_number, format_percent};
use treeline::module::{
    AccessLevel, CensusAssistantModule, MemorySettingsStore, ModuleBase, SettingsStore, SqlSettingsStore,
    ViewRegistry,
};
use treeline::report::{self, ReportFormatter, ReportOutputFormat};
use treeline::surname::{NameFields, SurnameTradition, Tradition};
use treeline::types::{Sex, Tree};

#[derive(Parser)]
#[command(name = "treeline")]
#[command(version)]
#[command(about = "Census forms, surname traditions, locale tables and module settings")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (default: ./treeline.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Census forms and transcripts
    Census {
        #[command(subcommand)]
        action: CensusCommand,
    },

    /// Suggested name fields for a new relative
    Names {
        /// Surname tradition (default from the configuration)
        #[arg(short, long)]
        tradition: Option<Tradition>,

        /// Print as JSON or YAML instead of tag lines
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,

        #[command(subcommand)]
        action: NamesCommand,
    },

    /// Module and block settings
    Settings {
        /// Database URL (overrides configuration and environment)
        #[arg(long)]
        database: Option<String>,

        /// Table prefix
        #[arg(long)]
        prefix: Option<String>,

        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Locale metadata
    Locale {
        #[command(subcommand)]
        action: LocaleCommand,
    },
}

#[derive(Subcommand)]
enum CensusCommand {
    /// List every country and its census years
    List,

    /// Show the columns of one census
    Columns {
        place: String,
        /// Census date or year (`1871`, `02 APR 1871`)
        date: String,
    },

    /// Transcribe a household from a JSON tree
    Transcript {
        /// Tree file (JSON with `individuals` and `families`)
        #[arg(short, long)]
        tree: PathBuf,

        #[arg(short, long)]
        place: String,

        #[arg(short, long)]
        date: String,

        /// Head of household
        #[arg(long)]
        head: String,

        /// Other household members, in order
        #[arg(short, long, value_delimiter = ',')]
        members: Vec<String>,

        /// Print as JSON or YAML instead of a table
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,

        /// Save to file (format from the extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also render the census assistant page to this HTML file
        #[arg(long)]
        html: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum NamesCommand {
    /// Names for a new child
    Child {
        #[arg(long, default_value = "")]
        father: String,
        #[arg(long, default_value = "")]
        mother: String,
        #[arg(short, long, value_enum, default_value = "u")]
        sex: SexArg,
    },

    /// Names for a new parent of `child`
    Parent {
        child: String,
        #[arg(short, long, value_enum, default_value = "u")]
        sex: SexArg,
    },

    /// Names for a new spouse of `spouse`
    Spouse {
        spouse: String,
        #[arg(short, long, value_enum, default_value = "u")]
        sex: SexArg,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Read a module setting
    Get {
        #[arg(short, long)]
        module: String,
        key: String,
        #[arg(long, default_value = "")]
        default: String,
    },

    /// Write a module setting
    Set {
        #[arg(short, long)]
        module: String,
        key: String,
        value: String,
    },

    /// Read a block setting
    BlockGet {
        block_id: i64,
        key: String,
        #[arg(long, default_value = "")]
        default: String,
    },

    /// Write a block setting
    BlockSet { block_id: i64, key: String, value: String },

    /// Read, or with LEVEL write, a module's access level for a component
    Access {
        #[arg(short, long)]
        module: String,
        #[arg(long, default_value = "1")]
        tree_id: i64,
        component: String,
        #[arg(value_enum)]
        level: Option<AccessLevelArg>,
    },
}

#[derive(Subcommand)]
enum LocaleCommand {
    /// Show a locale with its language and territory
    Show { code: String },

    /// Format a ratio as a percentage (`0.5` -> `50%`)
    Percent {
        code: String,
        value: f64,
        #[arg(long, default_value = "0")]
        digits: usize,
    },

    /// Format a number
    Number {
        code: String,
        value: f64,
        #[arg(long, default_value = "0")]
        digits: usize,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SexArg {
    M,
    F,
    U,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::M => Sex::Male,
            SexArg::F => Sex::Female,
            SexArg::U => Sex::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum AccessLevelArg {
    Hide,
    None,
    User,
    Private,
}

impl From<AccessLevelArg> for AccessLevel {
    fn from(arg: AccessLevelArg) -> Self {
        match arg {
            AccessLevelArg::Hide => AccessLevel::Hide,
            AccessLevelArg::None => AccessLevel::None,
            AccessLevelArg::User => AccessLevel::User,
            AccessLevelArg::Private => AccessLevel::Private,
        }
    }
}

fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => std::env::var("TREELINE_LOG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::WARN),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose, cli.quiet))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    debug!(?config, "configuration");

    match cli.command {
        Commands::Census { action } => run_census(&config, action)?,
        Commands::Names {
            tradition,
            format,
            action,
        } => run_names(tradition.unwrap_or(config.surname_tradition), format, action)?,
        Commands::Settings {
            database,
            prefix,
            action,
        } => {
            let url = database.unwrap_or_else(|| config.database_url.clone());
            let prefix = prefix.unwrap_or_else(|| config.table_prefix.clone());
            run_settings(&url, &prefix, action)?
        }
        Commands::Locale { action } => run_locale(action)?,
    }

    Ok(())
}

fn run_census(config: &Config, action: CensusCommand) -> Result<()> {
    let formatter = ReportFormatter::with_language(config.language);
    match action {
        CensusCommand::List => formatter.print_places(census::census_places()),

        CensusCommand::Columns { place, date } => {
            let definition = census::find_census(&place, &date)
                .ok_or_else(|| anyhow!("no census of {} on {}", place, date))?;
            println!(
                "{} {} ({})",
                definition.census_place(),
                definition.census_date(),
                definition.census_language()
            );
            for column in definition.columns() {
                println!("  {:<12} {}", column.abbreviation(), column.title());
            }
        }

        CensusCommand::Transcript {
            tree,
            place,
            date,
            head,
            members,
            format,
            output,
            html,
        } => {
            let tree = load_tree(&tree)?;
            let definition = census::find_census(&place, &date)
                .ok_or_else(|| anyhow!("no census of {} on {}", place, date))?;
            let head = tree
                .individual(&head)
                .ok_or_else(|| anyhow!("no individual {} in the tree", head))?;
            let members = members
                .iter()
                .map(|xref| {
                    tree.individual(xref)
                        .ok_or_else(|| anyhow!("no individual {} in the tree", xref))
                })
                .collect::<Result<Vec<_>>>()?;

            let transcript = generate_transcript(definition, head, &members);
            match format {
                Some(format) => println!("{}", format.serialize(&transcript)?),
                None => formatter.print_transcript(&transcript),
            }
            if let Some(path) = output {
                report::save_transcript(&transcript, &path)?;
                println!("Transcript saved to: {}", path.display());
            }
            if let Some(path) = html {
                save_transcript_page(config, &transcript, &path)?;
                println!("Page saved to: {}", path.display());
            }
        }
    }
    Ok(())
}

fn save_transcript_page(config: &Config, transcript: &CensusTranscript, path: &Path) -> Result<()> {
    let mut views = ViewRegistry::with_default_layout();
    if let Some(dir) = &config.views_dir {
        let loaded = views.load_dir(dir)?;
        debug!(loaded, dir = %dir.display(), "custom views");
    }
    CensusAssistantModule::register_views(&mut views);

    let base = ModuleBase::new("census-assistant", Rc::new(MemorySettingsStore::new()))
        .with_layout(&config.layout);
    let response = CensusAssistantModule::new(base).transcript_response(&views, transcript)?;
    fs::write(path, response.body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn load_tree(path: &Path) -> Result<Tree> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading tree {}", path.display()))?;
    let tree: Tree = serde_json::from_str(&content)
        .with_context(|| format!("parsing tree {}", path.display()))?;
    debug!(individuals = tree.individual_count(), "tree loaded");
    Ok(tree)
}

fn run_names(tradition: Tradition, format: Option<ReportOutputFormat>, action: NamesCommand) -> Result<()> {
    let rules = tradition.build();
    let fields: NameFields = match action {
        NamesCommand::Child { father, mother, sex } => {
            rules.new_child_names(&father, &mother, sex.into())
        }
        NamesCommand::Parent { child, sex } => rules.new_parent_names(&child, sex.into()),
        NamesCommand::Spouse { spouse, sex } => rules.new_spouse_names(&spouse, sex.into()),
    };
    match format {
        Some(format) => println!("{}", format.serialize(&fields)?),
        None => {
            println!("{} ({})", tradition.id(), tradition.description());
            ReportFormatter::new().print_name_fields(&fields);
        }
    }
    Ok(())
}

fn run_settings(url: &str, prefix: &str, action: SettingsCommand) -> Result<()> {
    let store = SqlSettingsStore::connect(url, prefix)
        .with_context(|| format!("opening settings database {}", url))?;
    store.create_schema().context("creating settings tables")?;
    let store = Rc::new(store);

    match action {
        SettingsCommand::Get {
            module,
            key,
            default,
        } => {
            let module = ModuleBase::new(&module, store);
            println!("{}", module.get_preference(&key, &default)?);
        }
        SettingsCommand::Set { module, key, value } => {
            let module = ModuleBase::new(&module, store);
            module.set_preference(&key, &value)?;
        }
        SettingsCommand::BlockGet {
            block_id,
            key,
            default,
        } => {
            let value = store
                .block_setting(block_id, &key)?
                .unwrap_or(default);
            println!("{}", value);
        }
        SettingsCommand::BlockSet {
            block_id,
            key,
            value,
        } => store.set_block_setting(block_id, &key, &value)?,
        SettingsCommand::Access {
            module,
            tree_id,
            component,
            level,
        } => {
            let module = ModuleBase::new(&module, store);
            match level {
                Some(level) => module.set_access_level(tree_id, &component, level.into())?,
                None => println!(
                    "{}",
                    module.access_level(tree_id, &component, AccessLevel::default())?
                ),
            }
        }
    }
    Ok(())
}

fn run_locale(action: LocaleCommand) -> Result<()> {
    let find = |code: &str| {
        locale::locale_from_code(code).ok_or_else(|| anyhow!("unknown locale {}", code))
    };
    match action {
        LocaleCommand::Show { code } => {
            let data = find(&code)?;
            println!("{}", serde_yaml::to_string(data)?);
            println!("{}", serde_yaml::to_string(&data.language())?);
            println!("{}", serde_yaml::to_string(&data.territory())?);
            if let Some(name) = locale::language_name(data.language) {
                println!("language name: {}", name);
            }
        }
        LocaleCommand::Percent {
            code,
            value,
            digits,
        } => println!("{}", format_percent(find(&code)?, value, digits)),
        LocaleCommand::Number {
            code,
            value,
            digits,
        } => {
            if !value.is_finite() {
                bail!("not a number: {}", value);
            }
            println!("{}", format_number(find(&code)?, value, digits))
        }
    }
    Ok(())
}
