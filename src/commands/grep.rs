use crate::core::{
    config::GrepConfig,
    error::{GitGrepError, Result},
    git::{DiscoverLocator, GitGrepBackend, RepoLocator, SearchBackend},
    navigator::{Location, Outcome, TreeNavigator},
    output::{print_info, print_location, print_row},
    render::{colorize_row, visible_rows},
    result_index::{OpenSet, ResultIndex},
    terminal::{TerminalInput, TerminalSurface},
};
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, Default)]
pub struct GrepOptions {
    pub pattern: String,
    pub ignore_case: bool,
    /// Print every group expanded instead of browsing
    pub list: bool,
    /// Open the confirmed match in an editor
    pub open: bool,
    /// Print the confirmed match as JSON
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LocationReport<'a> {
    filename: &'a str,
    line_number: &'a str,
    path: String,
}

pub fn execute_grep(options: GrepOptions) -> Result<()> {
    let config = GrepConfig::load()?;
    let current_dir = env::current_dir()?;

    let locator = DiscoverLocator::new(current_dir);
    let backend = GitGrepBackend::new()
        .with_ignore_case(options.ignore_case || config.ignore_case)
        .with_extra_args(config.extra_args.clone());

    let (root, index) = collect_results(&locator, &backend, &options.pattern)?;

    if index.is_empty() {
        print_info(&format!("No matches for '{}'", options.pattern));
        return Ok(());
    }

    if options.list {
        list_results(&index);
        return Ok(());
    }

    let outcome = browse(&index)?;
    match outcome {
        Outcome::Confirmed(location) => {
            if options.open || config.open_in_editor {
                open_in_editor(&config.editor_command(), &root, &location)
            } else {
                report_location(&root, &location, options.json)
            }
        }
        Outcome::Cancelled => {
            log::debug!("Browsing cancelled, nothing selected");
            Ok(())
        }
    }
}

/// Find the repository root, run the search there and group the output
pub fn collect_results<L, B>(locator: &L, backend: &B, pattern: &str) -> Result<(PathBuf, ResultIndex)>
where
    L: RepoLocator + ?Sized,
    B: SearchBackend + ?Sized,
{
    let root = locator.find_root().ok_or(GitGrepError::NotInGitRepo)?;
    log::debug!("Searching for '{pattern}' under {}", root.display());

    let lines = backend.search(&root, pattern)?;
    let index = ResultIndex::build(&lines)?;
    log::debug!(
        "{} matches in {} files",
        index.total_matches(),
        index.groups().len()
    );
    Ok((root, index))
}

fn list_results(index: &ResultIndex) {
    let all_open: OpenSet = (0..index.groups().len()).collect();
    for row in visible_rows(index, &all_open) {
        print_row(&colorize_row(&row));
    }
}

fn browse(index: &ResultIndex) -> Result<Outcome> {
    // The surface restores the screen when it goes out of scope
    let mut surface = TerminalSurface::enter()?;
    let mut input = TerminalInput;
    TreeNavigator::new(index).run(&mut input, &mut surface)
}

fn report_location(root: &Path, location: &Location, json: bool) -> Result<()> {
    let path = location.path(root);
    if json {
        let report = LocationReport {
            filename: &location.filename,
            line_number: &location.line_number,
            path: path.to_string_lossy().into_owned(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        print_location(&path.to_string_lossy(), &location.line_number);
    }
    Ok(())
}

/// Split an editor command and append `+<line> <path>`
fn editor_invocation(editor: &str, path: &Path, line_number: &str) -> Result<(String, Vec<String>)> {
    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| GitGrepError::editor_error("empty editor command"))?
        .to_string();

    let mut args: Vec<String> = words.map(str::to_string).collect();
    args.push(format!("+{line_number}"));
    args.push(path.to_string_lossy().into_owned());
    Ok((program, args))
}

fn open_in_editor(editor: &str, root: &Path, location: &Location) -> Result<()> {
    let path = location.path(root);
    let (program, args) = editor_invocation(editor, &path, &location.line_number)?;
    log::debug!("Opening {} with {program} {args:?}", path.display());

    let status = Command::new(&program)
        .args(&args)
        .status()
        .map_err(|e| GitGrepError::editor_error(format!("{program}: {e}")))?;

    if !status.success() {
        return Err(GitGrepError::editor_error(format!(
            "{program} exited with {status}"
        )));
    }
    Ok(())
}
