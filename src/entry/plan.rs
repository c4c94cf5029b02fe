use std::path::PathBuf;

use crate::args::{ProbeArgs, TlsVerification, parse_params};
use crate::error::{AppError, AppResult};
use crate::http::{ClientSettings, RunPlan};
use crate::session::SessionOverrides;

/// Everything a run needs, resolved from the CLI and config before any I/O.
#[derive(Debug)]
pub(super) struct ProbePlan {
    pub(super) overrides: SessionOverrides,
    pub(super) restore: Option<PathBuf>,
    pub(super) store: Option<PathBuf>,
    pub(super) out: Option<PathBuf>,
    pub(super) run: RunPlan,
    pub(super) client: ClientSettings,
}

impl ProbePlan {
    pub(super) fn from_args(args: ProbeArgs) -> AppResult<Self> {
        let parameters = args
            .params
            .as_ref()
            .map(parse_params)
            .transpose()
            .map_err(AppError::validation)?;
        let tls = TlsVerification::resolve(args.no_verify, args.cert.as_deref())?;

        Ok(Self {
            overrides: SessionOverrides {
                target: args.url,
                method: args.method,
                parameters,
                append: args.append,
            },
            restore: args.restore,
            store: args.store,
            out: args.out,
            run: RunPlan {
                nreqs: args.nreqs,
                wait: args.wait,
            },
            client: ClientSettings {
                http_proxy: args.http_proxy,
                https_proxy: args.https_proxy,
                tls,
            },
        })
    }
}
