use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use leadfunnel::analytics::{EventSink, FunnelEvent, TracingSink};
use leadfunnel::attribution::AttributionTracker;
use leadfunnel::config::FunnelConfig;
use leadfunnel::content::industry_content;
use leadfunnel::quiz::{Answers, QuizState, QUESTIONS};
use leadfunnel::routing::query::to_query_string;
use leadfunnel::routing::RoutingProfile;
use leadfunnel::session::SessionManager;
use leadfunnel::storage::{FileStore, KeyValueStore};
use leadfunnel::submit::{
    LeadRecord, LeadSink, Outbox, RateLimiter, SubmitOutcome, Submitter, WebhookSink,
};
use leadfunnel::validate::{check_email, EmailCheck};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Lead-qualification quiz funnel engine
#[derive(Parser)]
#[command(name = "leadfunnel")]
#[command(about = "Run the qualification quiz, score leads, and submit them", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a funnel.toml config file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the quiz interactively and save the session
    Ask,
    /// Compute the routing profile from the saved session or an answers file
    Score {
        /// JSON file with the six answers; defaults to the saved session
        #[arg(long)]
        answers: Option<PathBuf>,
        /// Landing-page query string to capture attribution from
        #[arg(long)]
        landing_query: Option<String>,
    },
    /// Validate and submit the saved completed session to the webhook
    Submit {
        /// Honeypot field value, normally empty
        #[arg(long, default_value = "", hide = true)]
        website: String,
    },
    /// Inspect or clear the saved session
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Retry leads queued in the outbox
    Outbox {
        #[command(subcommand)]
        command: OutboxCommands,
    },
    /// Show the content bundle for an industry
    Content {
        /// Industry answer value (entertainment, professional, ecommerce, multi, other)
        industry: String,
    },
}

#[derive(Subcommand)]
enum SessionCommands {
    /// Print the saved session and its routing profile
    Show,
    /// Remove the saved session and bridge responses (retake)
    Clear,
}

#[derive(Subcommand)]
enum OutboxCommands {
    /// Attempt delivery of every queued lead
    Flush,
    /// Count queued leads
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    let config = FunnelConfig::load(cli.config.as_deref())?;
    debug!("data dir: {}", config.resolved_data_dir().display());

    match cli.command {
        Commands::Ask => run_ask(&config),
        Commands::Score {
            answers,
            landing_query,
        } => run_score(&config, answers, landing_query),
        Commands::Submit { website } => run_submit(&config, &website).await,
        Commands::Session { command } => run_session(&config, command),
        Commands::Outbox { command } => run_outbox(&config, command).await,
        Commands::Content { industry } => {
            print_content(&industry);
            Ok(())
        }
    }
}

fn store(config: &FunnelConfig) -> Result<Arc<dyn KeyValueStore>> {
    let store = FileStore::new(config.resolved_data_dir().join("store"))
        .context("failed to open session store")?;
    Ok(Arc::new(store))
}

fn session_manager(config: &FunnelConfig) -> Result<SessionManager> {
    Ok(SessionManager::with_expiry_days(
        store(config)?,
        config.session_expiry_days,
    ))
}

fn submitter(config: &FunnelConfig) -> Result<Submitter> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let sink: Option<Arc<dyn LeadSink>> = match &config.webhook_url {
        Some(url) => Some(Arc::new(WebhookSink::new(url.clone(), timeout)?)),
        None => None,
    };
    let outbox = Outbox::new(config.resolved_data_dir().join("outbox"))?;
    let rate_limiter = RateLimiter::new(
        store(config)?,
        config.rate_limit_window_secs,
        config.rate_limit_max,
    );
    Ok(Submitter::new(sink, outbox, rate_limiter, timeout))
}

fn run_ask(config: &FunnelConfig) -> Result<()> {
    let sessions = session_manager(config)?;
    let events = TracingSink;

    if sessions.has_completed_quiz() {
        let name = sessions.return_visitor_name().unwrap_or_default();
        events.track_event(FunnelEvent::ReturnVisitorDetected);
        println!("Welcome back, {name}. Run `leadfunnel session show` to see your results,");
        println!("or `leadfunnel session clear` to retake the quiz.");
        return Ok(());
    }

    let mut state = sessions.load().unwrap_or_else(QuizState::new);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    events.track_event(FunnelEvent::QuizStart);

    while let Some(question) = state.current_question() {
        println!();
        println!("{}", question.prompt);
        if let Some(subtext) = question.subtext {
            println!("  ({subtext})");
        }
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option.label);
        }
        if state.current_step > 0 {
            println!("  b. Back");
        }
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                events.track_event(FunnelEvent::QuizAbandon);
                return Ok(());
            }
        };
        let input = line.trim();

        if input.eq_ignore_ascii_case("b") && state.current_step > 0 {
            state.back();
            sessions.save(&state);
            events.track_event(FunnelEvent::QuizBack);
            continue;
        }

        let choice = match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= question.options.len() => &question.options[n - 1],
            _ => {
                println!("Pick a number between 1 and {}.", question.options.len());
                continue;
            }
        };
        if let Some(copy) = choice.micro_copy {
            println!("  {copy}");
        }
        state.select(choice.value)?;
        sessions.save(&state);
        events.track_event(FunnelEvent::QuizAnswer);
    }

    // Email gate.
    events.track_event(FunnelEvent::QuizEmailView);
    println!();
    println!("Let's see what this means.");
    state.contact.first_name = prompt_line(&mut lines, "First name")?;
    state.contact.email = loop {
        let email = prompt_line(&mut lines, "Work email")?;
        match check_email(&email) {
            EmailCheck::Valid { suggestion } => {
                if let Some(suggested) = suggestion {
                    println!("  Did you mean {suggested}?");
                }
                break email;
            }
            EmailCheck::Malformed => println!("  That doesn't look like an email address."),
            EmailCheck::Disposable => println!("  Please use a non-disposable email address."),
        }
    };
    state.contact.company = prompt_line(&mut lines, "Company name")?;
    sessions.save(&state);
    events.track_event(FunnelEvent::QuizComplete);

    let profile = RoutingProfile::from_state(&state);
    print_profile(&profile);
    println!();
    println!("results query: ?{}", to_query_string(&state, &profile));
    println!("Run `leadfunnel submit` to send this lead.");
    Ok(())
}

fn prompt_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let line = lines
        .next()
        .context("input closed before the form was finished")??;
    Ok(line.trim().to_string())
}

fn run_score(
    config: &FunnelConfig,
    answers_path: Option<PathBuf>,
    landing_query: Option<String>,
) -> Result<()> {
    if let Some(query) = landing_query {
        AttributionTracker::new(store(config)?).capture(&query);
    }

    let state = match answers_path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            let answers: Answers = serde_json::from_str(&raw)
                .with_context(|| format!("invalid answers in {}", path.display()))?;
            QuizState {
                current_step: QUESTIONS.len(),
                answers,
                ..Default::default()
            }
        }
        None => session_manager(config)?
            .load()
            .context("no saved session; run `leadfunnel ask` or pass --answers")?,
    };

    let profile = RoutingProfile::from_state(&state);
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

async fn run_submit(config: &FunnelConfig, honeypot: &str) -> Result<()> {
    let sessions = session_manager(config)?;
    let state = sessions
        .load()
        .context("no saved session; run `leadfunnel ask` first")?;
    if !sessions.is_complete(&state) {
        anyhow::bail!("saved session is incomplete; finish the quiz first");
    }

    let profile = RoutingProfile::from_state(&state);
    let attribution = AttributionTracker::new(store(config)?).attribution();
    let record = LeadRecord::from_quiz(
        &state,
        &profile,
        sessions.bridge_responses(),
        attribution,
    );

    let outcome = submitter(config)?.submit(&record, honeypot).await?;
    match outcome {
        SubmitOutcome::Sent => {
            println!("Lead submitted.");
            sessions.clear();
        }
        SubmitOutcome::Queued => {
            println!("Webhook unreachable; lead queued for retry (`leadfunnel outbox flush`).");
        }
        SubmitOutcome::NotConfigured => {
            println!("No webhook configured; nothing sent.");
        }
        SubmitOutcome::Suppressed => {
            // Deliberately indistinguishable from success.
            println!("Lead submitted.");
        }
    }
    Ok(())
}

fn run_session(config: &FunnelConfig, command: SessionCommands) -> Result<()> {
    let sessions = session_manager(config)?;
    match command {
        SessionCommands::Show => match sessions.load() {
            Some(state) => {
                println!("{}", serde_json::to_string_pretty(&state)?);
                print_profile(&RoutingProfile::from_state(&state));
            }
            None => println!("No saved session."),
        },
        SessionCommands::Clear => {
            sessions.clear();
            println!("Session cleared.");
        }
    }
    Ok(())
}

async fn run_outbox(config: &FunnelConfig, command: OutboxCommands) -> Result<()> {
    let submitter = submitter(config)?;
    match command {
        OutboxCommands::Flush => {
            let stats = submitter.flush_outbox().await?;
            println!(
                "Delivered {} lead(s), {} still queued.",
                stats.delivered, stats.remaining
            );
        }
        OutboxCommands::List => {
            println!("{} lead(s) queued.", submitter.outbox_len());
        }
    }
    Ok(())
}

fn print_profile(profile: &RoutingProfile) {
    println!();
    println!("maturity score : {}", profile.maturity_score);
    println!("tier           : {}", profile.tier.as_str());
    println!("pain level     : {}", profile.pain_level.as_str());
    println!("urgency        : {}", profile.urgency.as_str());
    println!("case study     : {}", profile.case_study_route.as_str());
    println!("industry label : {}", profile.industry_label);
}

fn print_content(industry: &str) {
    let content = industry_content(industry);
    println!("{} — {}", content.label, content.tagline);
    println!();
    println!("{}", content.hidden_cost_headline);
    println!("{}", content.hidden_cost_detail);
    println!();
    for insight in &content.insights {
        println!("- {insight}");
    }
    println!();
    let cs = &content.case_study;
    println!("Case study: {} ({})", cs.company, cs.industry);
    println!("  {}", cs.challenge);
    for metric in &cs.metrics {
        println!("  {}: {} -> {}", metric.label, metric.before, metric.after);
    }
    println!("  \"{}\" — {}, {}", cs.quote, cs.quote_name, cs.quote_role);
    println!();
    println!("{}", content.cta_headline);
    println!("{}", content.cta_subtext);
}
