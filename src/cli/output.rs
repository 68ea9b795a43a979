use colored::Colorize;

use crate::core::errors::DocError;

/// Print the project banner: `user/project (env)`.
pub fn project(fullname: &str, env: &str) {
    let env = if env.is_empty() { "no environment" } else { env };
    println!("\n{} {}", fullname.bold(), format!("({env})").cyan());
}

/// Print one compose file of the plan.
pub fn compose_file(path: &str) {
    println!("  {} {}", "-f".dimmed(), path);
}

/// Print the command line `doc` would run.
pub fn planned(command_line: &str) {
    println!("  {} {}", "→".green(), command_line);
}

/// Report the error that ended the run.
pub fn failure(err: &DocError) {
    eprintln!("  {} {}", "✗ Error:".red().bold(), err);
}

/// Print output captured from the child process as-is, newline-terminated.
pub fn passthrough(captured: &str) {
    if captured.is_empty() {
        return;
    }
    if captured.ends_with('\n') {
        print!("{captured}");
    } else {
        println!("{captured}");
    }
}
