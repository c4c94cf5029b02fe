mod plan;

use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::ProbeArgs;
use crate::error::{AppError, AppResult, HttpError};
use crate::http::{RequestDescriptor, build_client, run_requests};
use crate::report::{summary_line, write_delays};
use crate::session::Session;

use plan::ProbePlan;

/// Runs the CLI: parse flags, merge config, measure, report, store.
///
/// # Errors
///
/// Returns the first error; a failed run leaves no session file behind.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose);

    let session_files: Vec<&Path> = [args.restore.as_deref(), args.store.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    let config = crate::config::load_config(args.config.as_deref(), &session_files)?;
    if let Some(config) = config {
        crate::config::apply_config(&mut args, &matches, &config)?;
    }

    let plan = ProbePlan::from_args(args)?;
    execute_plan(plan)
}

fn parse_args() -> AppResult<(ProbeArgs, ArgMatches)> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = ProbeArgs::command().get_matches_from(raw_args);
    let args = ProbeArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn execute_plan(plan: ProbePlan) -> AppResult<()> {
    let mut session = match plan.restore.as_deref() {
        Some(path) => {
            let restored = Session::load(path)?;
            println!("Read session with {} data points", restored.delays().len());
            restored
        }
        None => Session::default(),
    };
    session.apply_overrides(plan.overrides);

    let (target, method) = session.validate()?;
    let descriptor = RequestDescriptor::new(target, method, session.parameters())?;
    tracing::debug!(
        "Request: {} {} body={:?} nreqs={} wait={:?}",
        descriptor.method(),
        descriptor.url(),
        descriptor.body(),
        plan.run.nreqs,
        plan.run.wait
    );
    tracing::debug!("Client: {:?}", plan.client);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::http(HttpError::Runtime { source: err }))?;
    let delays = runtime.block_on(async {
        let client = build_client(&plan.client)?;
        run_requests(&client, &descriptor, plan.run).await
    })?;
    session.record(delays);

    let total = session.delays().len();
    if let Some(line) = summary_line(session.delays()) {
        println!("{}", line);
    }

    if let Some(path) = plan.out.as_deref() {
        write_delays(path, session.delays())?;
        println!("Wrote {} data points to {}", total, path.display());
    }

    if let Some(path) = plan.store.as_deref() {
        session.save(path)?;
        println!("Saved session with {} data points to {}", total, path.display());
    }

    Ok(())
}
