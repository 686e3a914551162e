// args.rs - Command line arguments definition

use argh::FromArgs;

pub const DEFAULT_FORMAT: &str = "json";
pub const DEFAULT_PRINTER: &str = "stderr";

#[derive(FromArgs, Debug, Default)]
/// argspec - parse and validate command-line tokens against a declarative schema
pub struct Args {
    /// path to schema file (.toml or .json)
    #[argh(option)]
    pub schema: Option<String>,

    /// output format: json, tsv, toml (default: json)
    #[argh(option, default = "String::from(DEFAULT_FORMAT)")]
    pub format: String,

    /// diagnostic printer: stderr, stdout, silent (default: stderr)
    #[argh(option, default = "String::from(DEFAULT_PRINTER)")]
    pub printer: String,

    /// reject positional tokens that no option declares a slot for
    #[argh(switch)]
    pub strict: bool,

    /// write parsed options to a file instead of stdout
    #[argh(option)]
    pub output: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// load and validate the schema file, print a summary and exit
    #[argh(switch)]
    pub check_schema: bool,

    /// print a sample schema file and exit
    #[argh(switch)]
    pub generate_schema: bool,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// tokens to parse; place them after `--` so flags reach the schema
    #[argh(positional)]
    pub tokens: Vec<String>,
}
