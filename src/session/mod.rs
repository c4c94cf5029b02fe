//! Persistent measurement sessions: target, method, parameters and every delay
//! sample collected so far.
mod store;


use std::collections::BTreeMap;

use crate::args::RequestMethod;
use crate::error::{AppError, AppResult, ValidationError};

pub use store::SESSION_FORMAT_VERSION;

/// A measurement session. `delays` only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    target: String,
    method: Option<RequestMethod>,
    parameters: BTreeMap<String, String>,
    delays: Vec<u64>,
}

/// Values supplied for this run; `None` leaves the restored value untouched.
#[derive(Debug, Clone, Default)]
pub struct SessionOverrides {
    pub target: Option<String>,
    pub method: Option<RequestMethod>,
    pub parameters: Option<BTreeMap<String, String>>,
    pub append: bool,
}

impl Session {
    #[must_use]
    pub const fn new(
        target: String,
        method: Option<RequestMethod>,
        parameters: BTreeMap<String, String>,
        delays: Vec<u64>,
    ) -> Self {
        Self {
            target,
            method,
            parameters,
            delays,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub const fn method(&self) -> Option<RequestMethod> {
        self.method
    }

    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    #[must_use]
    pub fn delays(&self) -> &[u64] {
        &self.delays
    }

    /// Merges run values over the restored ones.
    ///
    /// Parameters replace the restored map, unless `append` is set, in which case
    /// they are inserted over it and unmentioned keys are kept.
    pub fn apply_overrides(&mut self, overrides: SessionOverrides) {
        if let Some(target) = overrides.target {
            self.target = target;
        }
        if let Some(method) = overrides.method {
            self.method = Some(method);
        }
        if let Some(parameters) = overrides.parameters {
            if !overrides.append {
                self.parameters.clear();
            }
            self.parameters.extend(parameters);
        }
    }

    /// Returns the target and method to measure.
    ///
    /// # Errors
    ///
    /// Returns `MissingTarget` when the target is empty and `MissingMethod` when no
    /// method is set, checked in that order.
    pub fn validate(&self) -> AppResult<(&str, RequestMethod)> {
        if self.target.is_empty() {
            return Err(AppError::validation(ValidationError::MissingTarget));
        }
        let method = self
            .method
            .ok_or_else(|| AppError::validation(ValidationError::MissingMethod))?;
        Ok((&self.target, method))
    }

    /// Appends new samples after the existing ones.
    pub fn record<I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = u64>,
    {
        self.delays.extend(samples);
    }
}
