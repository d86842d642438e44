use clap::Parser;
use skillmatch::{
    email::ResendEmailSender,
    router,
    services::{contact::ContactService, quiz::QuizService, EmailSender},
    store::SessionStore,
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Operator name used in the quiz summary greeting.
    #[clap(env)]
    contact_name: String,

    /// Inbox that receives quiz summaries and contact messages.
    #[clap(env)]
    contact_email: String,

    /// Resend API key; without one, sending falls back to a mailto: draft.
    #[arg(long, env)]
    resend_api_key: Option<String>,

    /// From address for outbound mail.
    #[arg(long, env, default_value = "Skill Matcher <noreply@localhost>")]
    email_from: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Mark session cookies Secure (serve behind HTTPS).
    #[arg(long, env, default_value_t = false)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,skillmatch=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let email = ResendEmailSender::new(args.resend_api_key, args.email_from);
    if !email.is_enabled() {
        tracing::warn!("no Resend API key configured; quiz results will use the mailto fallback");
    }

    let state = AppState {
        sessions: SessionStore::new(),
        quiz: QuizService::new(email.clone(), args.contact_name, args.contact_email.clone()),
        contact: ContactService::new(email, args.contact_email),
        secure_cookies: args.secure_cookies,
    };

    let routes = router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, routes).await?;

    Ok(())
}
