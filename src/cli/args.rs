use clap::{Parser, Subcommand};

/// Command-line arguments for stylemigrate
#[derive(Parser, Debug, Clone)]
#[command(name = "stylemigrate")]
#[command(about = "Resolve, validate and migrate clang-format style configurations")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Migrate a configuration from one schema version to another
    Migrate(MigrateArgs),
    /// Parse and validate a configuration, printing its minimal form
    Check(CheckArgs),
    /// Print a named style, in full or as a diff against another style
    Resolve(ResolveArgs),
    /// List the schema versions that accept a configuration
    Compatible(CompatibleArgs),
    /// List style names for a version or a range of versions
    Styles(StylesArgs),
    /// Migrate every file listed in a manifest
    Batch(BatchArgs),
}

/// Where configuration text comes from
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Configuration file to read, or `-` for standard input
    #[arg(long, short, value_name = "PATH", default_value = "-")]
    pub input: String,

    /// Language whose configuration is selected
    #[arg(long, short, value_name = "LANGUAGE", default_value = "Cpp")]
    pub language: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct MigrateArgs {
    /// Schema version the input is written for
    #[arg(long, value_name = "VERSION")]
    pub from: String,

    /// Schema version to write
    #[arg(long, value_name = "VERSION")]
    pub to: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Style used when the input names none, or when its style is missing in
    /// a later version
    #[arg(
        long,
        value_name = "STYLE",
        env = "STYLEMIGRATE_FALLBACK_STYLE",
        default_value = "llvm"
    )]
    pub fallback_style: String,

    /// Write every option, not only those that differ from the style
    #[arg(long)]
    pub keep_same: bool,

    /// File to write; standard output when omitted
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Schema version the input is written for
    #[arg(long = "version", value_name = "VERSION")]
    pub schema: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Style the input starts from when it names none
    #[arg(
        long,
        value_name = "STYLE",
        env = "STYLEMIGRATE_FALLBACK_STYLE",
        default_value = "llvm"
    )]
    pub fallback_style: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Schema version
    #[arg(long = "version", value_name = "VERSION")]
    pub schema: String,

    /// Style name, such as llvm or google
    #[arg(long, value_name = "STYLE")]
    pub style: String,

    /// Language tag
    #[arg(long, short, value_name = "LANGUAGE", default_value = "Cpp")]
    pub language: String,

    /// Print only the options that differ from this style
    #[arg(long, value_name = "STYLE")]
    pub diff_from: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CompatibleArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct StylesArgs {
    /// Schema version
    #[arg(
        long = "version",
        value_name = "VERSION",
        conflicts_with_all = ["from", "to"],
        required_unless_present = "from"
    )]
    pub schema: Option<String>,

    /// First version of a range; lists styles present in every version
    #[arg(long, value_name = "VERSION", requires = "to")]
    pub from: Option<String>,

    /// Last version of a range
    #[arg(long, value_name = "VERSION", requires = "from")]
    pub to: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct BatchArgs {
    /// Manifest file path
    #[arg(long, short, value_name = "PATH", default_value = "./stylemigrate.yaml")]
    pub manifest: String,

    /// Preview the planned migrations without writing files
    #[arg(long)]
    pub dry_run: bool,
}
