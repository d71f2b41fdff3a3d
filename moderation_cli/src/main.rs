use std::env;
use std::process;

use anyhow::Result;
use dotenvy::dotenv;
use getopts::Options;
use log::{error, info};

use moderation_core::{
    config::{API_URL_VAR, ClientConfig},
    render::render,
    services::handler::ModerationService,
    session::{dto::ViewState, handler::Session},
};

const TOKEN_VAR: &str = "MODERATION_TOKEN";

fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [OPTIONS]", program);
    print!("{}", opts.usage(&brief));
    println!("\nEnvironment variables:");
    println!("  {}    Base URL of the moderation service (required)", API_URL_VAR);
    println!("  {}      API token used when --token is not given", TOKEN_VAR);
    println!("  RUST_LOG              Log filter, e.g. info or debug");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("t", "token", "API token sent as a bearer credential", "TOKEN");
    opts.optopt("f", "file", "Image to moderate (jpeg, png or gif)", "PATH");
    opts.optflag("", "health", "Check that the moderation service is up");
    opts.optflag("h", "help", "Show this help message");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("Error parsing arguments: {}", f);
            print_usage(&program, opts);
            process::exit(1);
        }
    };

    if matches.opt_present("h") {
        print_usage(&program, opts);
        return Ok(());
    }

    let config = ClientConfig::from_env()?;
    let service = ModerationService::new(config);

    if matches.opt_present("health") {
        let health = service.health().await?;
        println!("Service is {} ({})", health.status, health.timestamp);
        return Ok(());
    }

    let mut session = Session::new(service);

    if let Some(token) = matches.opt_str("t").or_else(|| env::var(TOKEN_VAR).ok()) {
        session.set_token(token);
    }

    if let Some(path) = matches.opt_str("f") {
        if let Err(e) = session.select_path(&path).await {
            error!("Could not select {}: {}", path, e);
            eprintln!("Error: {}", e.display_message());
            process::exit(1);
        }
    }

    info!("Submitting image for moderation");
    let view = session.submit().await;
    println!("{}", render(&view));

    if matches!(view, ViewState::Errored(_)) {
        process::exit(1);
    }

    Ok(())
}
