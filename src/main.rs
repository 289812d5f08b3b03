use clap::Parser;

use polyglot_cli::cli::Args;
use polyglot_cli::cli::commands::{languages, translate, usage};
use polyglot_cli::output::{self, OutputConfig};
use polyglot_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    let result = if args.languages {
        languages::run_languages(args.backend)
    } else if args.text.is_empty() {
        usage::print_usage();
        std::process::exit(1);
    } else {
        let options = translate::TranslateOptions {
            text: args.text,
            backend: args.backend,
        };
        translate::run_translate(options).await
    };

    if let Err(err) = result {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(1);
    }
}
