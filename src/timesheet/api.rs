//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every timesheet operation, whatever the UI.
//!
//! It resolves per-call overrides against the loaded [`TimesheetConfig`]
//! (default client, style prompt, whether to use the remote backend) and
//! dispatches to `commands/*.rs`. It does no printing and no rendering.
//!
//! ## Generic Over RewriteBackend
//!
//! `TimesheetApi<B: RewriteBackend>` is generic over the remote backend:
//! - Production: `TimesheetApi<LlmBackend>`
//! - Testing: `TimesheetApi<ScriptedBackend>`
//!
//! The remote slot may also hold the reason a backend could not be built
//! (typically missing credentials). Rewrites then use the rule engine and
//! carry a warning, so valid input always produces output.

use crate::backend::RewriteBackend;
use crate::commands;
use crate::commands::rewrite::RewriteOptions;
use crate::config::TimesheetConfig;
use crate::error::{Result, TimesheetError};
use std::path::{Path, PathBuf};

/// State of the optional remote backend.
pub enum Remote<B> {
    Disabled,
    Ready(B),
    Unavailable(String),
}

impl<B> Remote<B> {
    /// Wraps a backend construction result.
    pub fn from_result(result: Result<B>) -> Self {
        match result {
            Ok(backend) => Remote::Ready(backend),
            Err(e) => Remote::Unavailable(e.to_string()),
        }
    }
}

/// Per-call overrides for [`TimesheetApi::rewrite`].
#[derive(Debug, Clone, Default)]
pub struct RewriteRequest {
    pub client: Option<String>,
    pub style: Option<String>,
    /// Ask the remote backend first.
    pub use_remote: bool,
}

/// The main API facade for timesheet operations.
pub struct TimesheetApi<B: RewriteBackend> {
    config: TimesheetConfig,
    config_dir: PathBuf,
    remote: Remote<B>,
}

impl<B: RewriteBackend> TimesheetApi<B> {
    pub fn new(config: TimesheetConfig, config_dir: PathBuf, remote: Remote<B>) -> Self {
        Self {
            config,
            config_dir,
            remote,
        }
    }

    pub fn rewrite(&self, raw: &str, request: RewriteRequest) -> Result<commands::CmdResult> {
        let options = RewriteOptions {
            default_client: request
                .client
                .or_else(|| self.config.default_client.clone()),
            style: request.style.unwrap_or_else(|| self.config.style.clone()),
        };

        if !request.use_remote {
            return commands::rewrite::run(raw, &options);
        }

        match &self.remote {
            Remote::Ready(backend) => {
                commands::rewrite::run_with(Some(backend as &dyn RewriteBackend), raw, &options)
            }
            Remote::Disabled => commands::rewrite::run(raw, &options),
            Remote::Unavailable(reason) => {
                tracing::warn!(%reason, "remote backend unavailable, using local rules");
                let mut result = commands::rewrite::run(raw, &options)?;
                result.messages.insert(
                    0,
                    commands::CmdMessage::warning(format!(
                        "Remote rewrite unavailable ({}); used local rules instead.",
                        reason
                    )),
                );
                Ok(result)
            }
        }
    }

    pub fn classify(&self, raw: &str) -> Result<commands::CmdResult> {
        commands::classify::run(raw)
    }

    /// Backfills with `client`, or the configured default client.
    pub fn backfill(&self, text: &str, client: Option<&str>) -> Result<commands::CmdResult> {
        let code = client
            .map(str::to_string)
            .or_else(|| self.config.default_client.clone())
            .ok_or_else(|| {
                TimesheetError::Api(
                    "No client given and no default-client configured".to_string(),
                )
            })?;
        commands::backfill::run(text, &code)
    }

    pub fn clients(&self) -> Result<commands::CmdResult> {
        commands::clients::run()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn settings(&self) -> &TimesheetConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::scripted::ScriptedBackend;

    fn api(remote: Remote<ScriptedBackend>) -> TimesheetApi<ScriptedBackend> {
        let config = TimesheetConfig {
            default_client: Some("NR".to_string()),
            style: "configured style".to_string(),
            ..TimesheetConfig::default()
        };
        TimesheetApi::new(config, PathBuf::from("/nonexistent"), remote)
    }

    #[test]
    fn rewrite_uses_configured_default_client() {
        let result = api(Remote::Disabled)
            .rewrite("weekly sync", RewriteRequest::default())
            .unwrap();
        assert_eq!(result.output.unwrap(), "weekly sync. – NR\n");
    }

    #[test]
    fn request_client_overrides_config() {
        let request = RewriteRequest {
            client: Some("tcg".to_string()),
            ..RewriteRequest::default()
        };
        let result = api(Remote::Disabled).rewrite("weekly sync", request).unwrap();
        assert_eq!(result.output.unwrap(), "weekly sync. – TCG\n");
    }

    #[test]
    fn remote_only_used_when_requested() {
        let api = api(Remote::Ready(ScriptedBackend::replying("Remote line.")));
        let local = api.rewrite("weekly sync", RewriteRequest::default()).unwrap();
        assert_eq!(local.output.unwrap(), "weekly sync. – NR\n");

        let request = RewriteRequest {
            use_remote: true,
            ..RewriteRequest::default()
        };
        let remote = api.rewrite("weekly sync", request).unwrap();
        assert_eq!(remote.output.unwrap(), "Remote line. – NR\n");
    }

    #[test]
    fn remote_receives_configured_style_unless_overridden() {
        let api = api(Remote::Ready(ScriptedBackend::replying("ok")));
        let request = RewriteRequest {
            use_remote: true,
            ..RewriteRequest::default()
        };
        api.rewrite("weekly sync", request).unwrap();

        let request = RewriteRequest {
            use_remote: true,
            style: Some("terse".to_string()),
            ..RewriteRequest::default()
        };
        api.rewrite("weekly sync", request).unwrap();

        if let Remote::Ready(backend) = &api.remote {
            let styles: Vec<String> = backend.requests().into_iter().map(|(_, s)| s).collect();
            assert_eq!(styles, vec!["configured style".to_string(), "terse".to_string()]);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn unavailable_remote_falls_back_with_warning() {
        let api = api(Remote::Unavailable("missing credentials".to_string()));
        let request = RewriteRequest {
            use_remote: true,
            ..RewriteRequest::default()
        };
        let result = api.rewrite("weekly sync", request).unwrap();
        assert!(result.has_warnings());
        assert!(result.messages[0].content.contains("missing credentials"));
        assert_eq!(result.output.unwrap(), "weekly sync. – NR\n");
    }

    #[test]
    fn backfill_needs_a_client() {
        let mut api = api(Remote::Disabled);
        assert!(api.backfill("Did work.", None).is_ok());
        api.config.default_client = None;
        assert!(api.backfill("Did work.", None).is_err());
        let result = api.backfill("Did work.", Some("kb")).unwrap();
        assert_eq!(result.output.unwrap(), "Did work. – KOBOLD\n");
    }

    #[test]
    fn from_result_keeps_error_text() {
        let remote: Remote<ScriptedBackend> =
            Remote::from_result(Err(TimesheetError::Llm("no key".to_string())));
        assert!(matches!(remote, Remote::Unavailable(msg) if msg == "LLM error: no key"));
    }
}
