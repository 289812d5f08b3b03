use clap::Parser;

use crate::translation::Backend;

#[derive(Parser, Debug)]
#[command(name = "polyglot")]
#[command(about = "Translate a UI string into every catalog language")]
#[command(version)]
pub struct Args {
    /// Text to translate; prefix with a two-letter code and a colon to set the
    /// source language (e.g. de:Guten Morgen)
    #[arg(value_name = "TEXT", trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Translation backend [default: google]
    #[arg(short = 'b', long, value_enum)]
    pub backend: Option<Backend>,

    /// List the target languages of the selected backend and exit
    #[arg(long)]
    pub languages: bool,

    /// Suppress progress output; print only the catalog blocks
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
