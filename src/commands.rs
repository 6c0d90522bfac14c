use crate::common::CommonParams;
use crate::config::Config;
use crate::log_debug;
use crate::release::{Pipeline, RawRelease, ReleaseParser, ReleaseRenderer, ReleaseValidator};
use crate::ui;
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a release record from a JSON file, or from stdin when no path is given
fn read_record(input: Option<&Path>) -> Result<RawRelease> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read release record from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read release record from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).context("Release record is not valid JSON ({title, body, tag, url})")
}

fn load_config(common: &CommonParams) -> Result<Config> {
    let mut config = Config::load()?;
    common.apply_to_config(&mut config)?;
    Ok(config)
}

/// Handle the `process` command: run the full pipeline and emit the labeled map
pub fn handle_process_command(
    common: &CommonParams,
    input: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    log_debug!("Handling 'process' command, input: {:?}", input);

    let config = load_config(common)?;
    let record = read_record(input)?;
    let output = Pipeline::new(&config).process(&record);

    if pretty {
        ui::print_info(&format!("Release: {}", record.title));
        ui::print_newline();
        ui::print_message(&format!("{} {}", "Subject:".cyan().bold(), output.email_subject));
        ui::print_newline();
        ui::print_message(&"Email body (HTML):".cyan().bold().to_string());
        ui::print_bordered_content(&output.email_body);
        ui::print_newline();
        ui::print_message(&"Jira comment:".cyan().bold().to_string());
        ui::print_bordered_content(&output.jira_comment);
        print_verdict(&output.validation_errors, &output.validation_warnings, output.is_valid);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

/// Handle the `validate` command: parse and gate without rendering
pub fn handle_validate_command(common: &CommonParams, input: Option<&Path>) -> Result<()> {
    log_debug!("Handling 'validate' command, input: {:?}", input);

    let config = load_config(common)?;
    let record = read_record(input)?;

    let facts = ReleaseParser::new(&config).parse(&record);
    let verdict = ReleaseValidator::new(&config).validate(&facts, &record.body);

    print_verdict(&verdict.errors, &verdict.warnings, verdict.is_valid);

    if verdict.is_valid {
        Ok(())
    } else {
        Err(anyhow!("Release rejected by validation"))
    }
}

/// Handle the `render` command: best-effort artifacts without gating
pub fn handle_render_command(common: &CommonParams, input: Option<&Path>) -> Result<()> {
    log_debug!("Handling 'render' command, input: {:?}", input);

    let config = load_config(common)?;
    let record = read_record(input)?;

    let facts = ReleaseParser::new(&config).parse(&record);
    let content =
        ReleaseRenderer::new(&config).render(&record, &facts.release_type, &facts.customer_emails);

    ui::print_message(&format!("{} {}", "Subject:".cyan().bold(), content.email_subject));
    ui::print_newline();
    ui::print_message(&"Email body (HTML):".cyan().bold().to_string());
    ui::print_bordered_content(&content.email_body_html);
    ui::print_newline();
    ui::print_message(&"Jira comment:".cyan().bold().to_string());
    ui::print_bordered_content(&content.jira_comment);

    Ok(())
}

fn print_verdict(errors: &[String], warnings: &[String], is_valid: bool) {
    for warning in warnings {
        ui::print_warning(&format!("warning: {warning}"));
    }
    for error in errors {
        ui::print_error(&format!("error: {error}"));
    }
    if is_valid {
        ui::print_success("Validation passed");
    } else {
        ui::print_error("Validation failed");
    }
}

/// Handle the `config` command: apply overrides and persist them
pub fn handle_config_command(common: &CommonParams, print: bool) -> Result<()> {
    log_debug!("Handling 'config' command with: {:?}", common);

    let mut config = Config::load()?;
    let changes_made = common.apply_to_config(&mut config)?;

    if changes_made {
        config.save()?;
        ui::print_success("Configuration updated");
    }

    if print || !changes_made {
        print_config(&config);
    }

    Ok(())
}

/// Handle the `project-config` command: manage the `.heraldconfig` file
pub fn handle_project_config_command(common: &CommonParams, print: bool) -> Result<()> {
    log_debug!("Handling 'project-config' command with: {:?}", common);

    if print {
        let config = Config::load_project_config()
            .context("No project configuration file found in the current directory")?;
        print_config(&config);
        return Ok(());
    }

    let mut config = Config::load()?;
    common.apply_to_config(&mut config)?;
    config.save_as_project_config()?;
    ui::print_success(&format!(
        "Project configuration saved to {}",
        Config::get_project_config_path()?.display()
    ));

    Ok(())
}

fn print_config(config: &Config) {
    ui::print_message(&format!(
        "{} {}",
        "Ticket prefix:".cyan().bold(),
        config.ticket_prefix
    ));
    ui::print_message(&format!(
        "{} {}",
        "Team signature:".cyan().bold(),
        config.team_signature
    ));
}
