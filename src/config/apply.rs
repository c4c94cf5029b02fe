use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{ProbeArgs, wait_from_seconds};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments that were not given on the command line.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut ProbeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "method")
        && let Some(method) = config.method
    {
        args.method = Some(method);
    }

    if !is_cli(matches, "params")
        && let Some(params) = config.params.clone()
    {
        args.params = Some(params);
    }

    if !is_cli(matches, "append")
        && let Some(append) = config.append
    {
        args.append = append;
    }

    if !is_cli(matches, "restore")
        && let Some(path) = config.restore.clone()
    {
        args.restore = Some(path);
    }

    if !is_cli(matches, "store")
        && let Some(path) = config.store.clone()
    {
        args.store = Some(path);
    }

    if !is_cli(matches, "out")
        && let Some(path) = config.out.clone()
    {
        args.out = Some(path);
    }

    if !is_cli(matches, "nreqs")
        && let Some(nreqs) = config.nreqs
    {
        args.nreqs = nreqs;
    }

    if !is_cli(matches, "wait")
        && let Some(seconds) = config.wait
    {
        let wait = wait_from_seconds(seconds)
            .ok_or_else(|| AppError::config(ConfigError::InvalidWait { value: seconds }))?;
        args.wait = Some(wait);
    }

    if !is_cli(matches, "http_proxy")
        && let Some(proxy) = config.proxy.clone()
    {
        args.http_proxy = Some(proxy);
    }

    if !is_cli(matches, "https_proxy")
        && let Some(proxy) = config.sproxy.clone()
    {
        args.https_proxy = Some(proxy);
    }

    // --cert and --no-verify are one setting; a CLI value for either hides both config keys.
    if !is_cli(matches, "cert") && !is_cli(matches, "no_verify") {
        if let Some(path) = config.cert.clone() {
            args.cert = Some(path);
        }
        if let Some(no_verify) = config.no_verify {
            args.no_verify = no_verify;
        }
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}
