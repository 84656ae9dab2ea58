use super::logging;
use super::render::{print_listing, print_messages, print_rewrites, print_text};
use super::setup::{Cli, Commands, InputArgs, OutputArgs, RewriteArgs};
use clap::Parser;
use std::io::IsTerminal;
use timesheet::api::{CmdMessage, ConfigAction, Remote, RewriteRequest, TimesheetApi};
use timesheet::backend::llm::LlmBackend;
use timesheet::config::{config_dir, TimesheetConfig};
use timesheet::error::Result;
use timesheet::io::{InputSource, OutputTargets};

struct AppContext {
    api: TimesheetApi<LlmBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let rewrite_args = match &cli.command {
        Some(Commands::Rewrite(args)) => Some(args),
        None => Some(&cli.rewrite),
        _ => None,
    };
    let ctx = init_context(rewrite_args)?;

    match cli.command {
        Some(Commands::Rewrite(args)) => handle_rewrite(&ctx, args),
        Some(Commands::Classify { input, json }) => handle_classify(&ctx, input, json),
        Some(Commands::Backfill {
            input,
            output,
            client,
        }) => handle_backfill(&ctx, input, output, client),
        Some(Commands::Clients) => handle_clients(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_rewrite(&ctx, cli.rewrite),
    }
}

/// `--llm` forces the remote backend, `--no-llm` disables it, otherwise the
/// `llm-enabled` setting decides.
fn wants_remote(args: &RewriteArgs, config: &TimesheetConfig) -> bool {
    args.llm || (config.llm.enabled && !args.no_llm)
}

fn init_context(rewrite_args: Option<&RewriteArgs>) -> Result<AppContext> {
    let dir = config_dir()?;
    let config = TimesheetConfig::load(&dir)?;

    // Only build the HTTP client when a rewrite will use it.
    let remote = if rewrite_args.is_some_and(|args| wants_remote(args, &config)) {
        Remote::from_result(LlmBackend::from_config(&config.llm))
    } else {
        Remote::Disabled
    };

    Ok(AppContext {
        api: TimesheetApi::new(config, dir, remote),
    })
}

fn read_input(input: InputArgs) -> Result<String> {
    let source = InputSource::select(
        input.input,
        input.stdin,
        input.paste,
        std::io::stdin().is_terminal(),
    )?;
    tracing::debug!(?source, "reading input");
    source.read()
}

fn handle_rewrite(ctx: &AppContext, args: RewriteArgs) -> Result<()> {
    let use_remote = wants_remote(&args, ctx.api.settings());
    let raw = read_input(args.input)?;

    let request = RewriteRequest {
        client: args.client,
        style: args.style,
        use_remote,
    };
    let mut result = ctx.api.rewrite(&raw, request)?;
    let text = result.output.take().unwrap_or_default();

    deliver(&text, args.output, &mut result.messages)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_classify(ctx: &AppContext, input: InputArgs, json: bool) -> Result<()> {
    let raw = read_input(input)?;
    let result = ctx.api.classify(&raw)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.rewrites)?);
    } else {
        print_rewrites(&result.rewrites);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_backfill(
    ctx: &AppContext,
    input: InputArgs,
    output: OutputArgs,
    client: Option<String>,
) -> Result<()> {
    let text = read_input(input)?;
    let mut result = ctx.api.backfill(&text, client.as_deref())?;
    let filled = result.output.take().unwrap_or_default();

    deliver(&filled, output, &mut result.messages)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clients(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.clients()?;
    print_listing(&result.listing, "->");
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    print_listing(&result.listing, "=");
    print_messages(&result.messages);
    Ok(())
}

/// Sends finished text to stdout, the output file and the clipboard.
/// A clipboard failure is reported as a warning, not an error.
fn deliver(text: &str, output: OutputArgs, messages: &mut Vec<CmdMessage>) -> Result<()> {
    if !output.quiet {
        print_text(text);
    }

    let targets = OutputTargets {
        file: output.output,
        clipboard: output.copy,
    };
    if let Some(path) = targets.write_file(text)? {
        messages.push(CmdMessage::success(format!("Wrote {}", path.display())));
    }
    match targets.copy(text) {
        Ok(true) => messages.push(CmdMessage::success("Copied to clipboard.")),
        Ok(false) => {}
        Err(e) => messages.push(CmdMessage::warning(format!(
            "Failed to copy to clipboard: {}",
            e
        ))),
    }
    Ok(())
}
