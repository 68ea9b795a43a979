use crate::adapters::process::compose_runner::SystemRunner;
use crate::cli::{Cli, output};
use crate::core::app::DocApp;
use crate::core::errors::Result;

/// Execute `doc <command> [env] [-- args...]`.
///
/// Builds the app for the context, then either prints the docker-compose
/// command (`--dry-run`) or runs it and prints its combined output.
pub fn execute(args: &Cli) -> Result<()> {
    let context = crate::cli::context::resolve(args.context.as_deref())?;
    let app = DocApp::new(&context, args.env.as_deref(), SystemRunner::from_env())?;

    for file in app.compose_files() {
        log::debug!("compose file: {}", file.display());
    }

    if args.dry_run {
        app.check_compose_files()?;
        print_plan(&app, args);
        return Ok(());
    }

    let captured = app.run(&args.command, &args.args)?;
    output::passthrough(&captured);
    Ok(())
}

fn print_plan(app: &DocApp<SystemRunner>, args: &Cli) {
    output::project(&app.config().fullname(), app.env());
    for file in app.compose_files() {
        output::compose_file(&file.display().to_string());
    }
    output::planned(&app.invocation(&args.command, &args.args).to_string());
}
