use crate::cli::{Cli, Commands};
use projdash::{config, engine, ui};
use anyhow::{Context, Result, anyhow};
use std::process;

pub fn run(cli: Cli) {
    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::Add {
                title,
                description,
                people,
                json,
            } => handle_add(&title, &description, &people, json),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    let config = config::Config::load().unwrap_or_default();

    match engine::log::init_file_logging(&config.logging) {
        Ok(path) => tracing::info!(path = %path.display(), "logging to file"),
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }

    // Launch TUI (default behavior)
    if let Err(e) = ui::run_ui_with_config(&config) {
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

fn handle_add(title: &str, description: &str, people: &str, json: bool) {
    if let Err(e) = engine::log::init_stderr_logging("warn") {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    match add_report(title, description, people, json) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    }
}

/// Submit one project on a fresh board and render what the lists show
fn add_report(title: &str, description: &str, people: &str, json: bool) -> Result<String> {
    let mut board = ui::Board::new();
    board.form = ui::InputForm::with_values(title, description, people);

    if let Err(e) = board.submit() {
        let ui::SubmitError::InvalidInput { failed } = &e;
        let names: Vec<&str> = failed.iter().map(|f| f.label()).collect();
        return Err(anyhow!("{} ({})", e, names.join(", ")));
    }

    if json {
        return serde_json::to_string_pretty(board.store.projects())
            .context("Failed to serialize projects");
    }

    let mut lines = Vec::new();
    for list in [&board.active_list, &board.finished_list] {
        lines.push(list.kind().heading());
        for title in list.rendered_items() {
            lines.push(format!("- {}", title));
        }
    }
    Ok(lines.join("\n"))
}

fn handle_init_config() {
    match config::Config::load() {
        Ok(cfg) => {
            match config::Config::config_path() {
                Ok(path) if config::Config::exists() => {
                    println!("Config loaded successfully from {}", path.display())
                }
                Ok(path) => println!("Using built-in defaults; could not write {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            println!("{:#?}", cfg);
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            } else {
                match config::Config::config_path() {
                    Ok(path) => println!("Default config saved to {}", path.display()),
                    Err(e) => println!("Default config saved (path unknown): {:#}", e),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projdash::engine::{Project, ProjectStatus};

    #[test]
    fn test_add_report_lists_new_project() {
        let out = add_report("Build API", "Design and implement", "3", false).unwrap();
        assert_eq!(out, "ACTIVE PROJECTS\n- Build API\nFINISHED PROJECTS");
    }

    #[test]
    fn test_add_report_json() {
        let out = add_report("Build API", "Design and implement", "3", true).unwrap();
        let projects: Vec<Project> = serde_json::from_str(&out).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Build API");
        assert_eq!(projects[0].people, 3);
        assert_eq!(projects[0].status, ProjectStatus::Active);
    }

    #[test]
    fn test_add_report_rejects_invalid_input() {
        let err = add_report("Build API", "Design and implement", "12", false).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input (People)");

        let err = add_report("", "shrt", "5", true).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input (Title, Description)");
    }
}
