use clap::Parser;

use line_guard::checks::Registry;
use line_guard::cli::Cli;
use line_guard::config::{Config, ConfigLoader, FileConfigLoader};
use line_guard::engine::ScanEngine;
use line_guard::output::{ColorMode, ErrorOutput, TextReporter};
use line_guard::runner::scan_all;
use line_guard::{EXIT_CONFIG_ERROR, logging};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let color: ColorMode = cli.color.into();
    let errors = ErrorOutput::new(color);

    let _logger = match logging::init(cli.verbose, cli.quiet) {
        Ok(handle) => handle,
        Err(e) => {
            errors.print_fatal(&e.to_string());
            return EXIT_CONFIG_ERROR;
        }
    };

    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => {
            errors.print_fatal(&e.to_string());
            return EXIT_CONFIG_ERROR;
        }
    };

    let registry = Registry::default().without(config.disabled_checks());
    log::debug!("active checks: {:?}", registry.names());

    let mut engine = ScanEngine::new(registry);
    let mut reporter = TextReporter::stdout(color);
    let summary = scan_all(&mut engine, &cli.files, &mut reporter, |path, _| {
        errors.print_read_failure(path);
    });

    summary.exit_code(reporter.count())
}

fn load_config(cli: &Cli) -> line_guard::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    cli.config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}
