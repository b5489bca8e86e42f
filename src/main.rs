//! formsmith's main application entry point.
//! Handles command-line argument parsing and drives a project through
//! load, edit, save, preview and export.

use formsmith::{
    cli::{get_args, parse_override, Args},
    error::{default_error_handler, Result},
    export::{ensure_output_dir, write_rendered},
    logger::init_logger,
    project::Project,
    prompt::{fill_form, DialoguerPrompter, Prompter},
};
use log::info;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the manifest and scans its templates
/// 2. Applies a saved blob, then `--set` overrides
/// 3. Optionally fills out the form interactively
/// 4. Lists entries, saves the blob, previews and exports as requested
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let mut project = Project::open(&args.manifest)?;
    println!("{}", project.banner());

    if let Some(path) = &args.load {
        project.load_blob(path)?;
        info!("Configuration loaded from {}", path.display());
    }

    for raw in &args.overrides {
        let (key, value) = parse_override(raw)?;
        project.set(&key, &value);
    }

    if args.interactive {
        fill_form(&prompt, &mut project)?;
    }

    if args.list {
        for entry in project.entries() {
            let value = project.value(&entry.identifier).unwrap_or_default();
            println!("{} [{}] = {}", entry.description, entry.identifier, value);
        }
    }

    if let Some(path) = &args.save {
        project.save_blob(path)?;
        println!("Configuration saved to {}", path.display());
    }

    let nothing_else = args.output.is_none() && !args.list && args.save.is_none();
    if args.preview || nothing_else {
        print!("{}", project.preview()?);
    }

    if let Some(dir) = &args.output {
        export(&prompt, &project, &args, dir)?;
    }

    Ok(())
}

fn export(
    prompt: &dyn Prompter,
    project: &Project,
    args: &Args,
    dir: &std::path::Path,
) -> Result<()> {
    let export_root = ensure_output_dir(project.export_root(dir), args.force)?;
    let proceed = prompt.confirm(
        args.yes,
        format!(
            "Export configuration to '{}'? Existing files will be overwritten.",
            export_root.display()
        ),
    )?;
    if !proceed {
        println!("Export cancelled.");
        return Ok(());
    }

    let files = project.render(Some(&export_root))?;
    for path in write_rendered(&files)? {
        println!("File {} written", path.display());
    }
    println!("Configuration exported to {}", export_root.display());
    Ok(())
}
