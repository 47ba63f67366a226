// gouache-studio - interactive gouache illustration generator for the Gemini image API

use anyhow::Result;
use clap::Parser;
use gouache_studio::cli::Args;
use gouache_studio::config::AppConfig;
use gouache_studio::export::FileExporter;
use gouache_studio::gemini::GeminiClient;
use gouache_studio::session::{Phase, Session};
use gouache_studio::utils::logging;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration and apply CLI overrides
    let mut config = AppConfig::load()?;
    config.apply_args(&args);

    // Initialize logging
    logging::init(&config.logging)?;
    info!("Starting gouache-studio v{}", env!("CARGO_PKG_VERSION"));

    let client = GeminiClient::new(&config.gemini)?;
    info!("Using image model {}", client.model());

    let exporter = FileExporter::new(config.studio.output_dir.clone());
    let mut session = Session::new(client, config.studio.aspect_ratio.clone());

    println!("gouache-studio — describe a subject to illustrate it.");
    println!("Commands: /edit <text>  /save  /help  /quit");

    if let Some(subject) = args.subject {
        session.set_subject(subject);
        run_generate(&mut session).await;
        report(&session);
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        prompt_marker(&session).await?;
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let line = line.trim().to_string();

        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('/') {
            let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
            match name {
                "edit" => {
                    session.set_refinement(rest);
                    if !session.can_edit() {
                        if session.current_image().is_none() {
                            println!("Nothing to edit yet — generate an image first.");
                        } else {
                            println!("Usage: /edit <refinement text>");
                        }
                        continue;
                    }
                    run_edit(&mut session).await;
                    report(&session);
                }
                "save" => {
                    if !session.can_download() {
                        println!("Nothing to save yet.");
                        continue;
                    }
                    match session.download(&exporter) {
                        Ok(()) => println!("Saved {}", session.download_file_name()),
                        Err(e) => println!("Save failed: {}", e),
                    }
                }
                "help" => {
                    println!("Type a subject to generate a fresh illustration.");
                    println!("/edit <text>  refine the current image");
                    println!("/save         write the current image to disk");
                    println!("/quit         exit");
                }
                "quit" | "exit" => break,
                other => println!("Unknown command: /{}", other),
            }
        } else {
            session.set_subject(line);
            run_generate(&mut session).await;
            report(&session);
        }
    }

    info!("Session ended");
    Ok(())
}

async fn run_generate<M: gouache_studio::gemini::ImageModel>(session: &mut Session<M>) {
    if !session.can_generate() {
        println!("Give me a non-empty subject first.");
        return;
    }
    println!("Painting \"{}\"...", session.subject().trim());
    session.submit_generate().await;
}

async fn run_edit<M: gouache_studio::gemini::ImageModel>(session: &mut Session<M>) {
    println!("Refining: {}...", session.refinement().trim());
    session.submit_edit().await;
}

fn report<M>(session: &Session<M>) {
    if let Some(error) = session.error() {
        println!("Error: {}", error);
    } else if session.current_image().is_some() {
        println!(
            "Done — current image ready ({} base64 chars). /edit to refine, /save to keep it.",
            session
                .current_image()
                .map(|image| image.data.len())
                .unwrap_or(0)
        );
    }
}

async fn prompt_marker<M>(session: &Session<M>) -> Result<()> {
    let marker = match session.phase() {
        Phase::Idle if session.current_image().is_some() => "gouache*> ",
        Phase::Idle => "gouache> ",
        // The loop awaits transitions to completion, so these are not
        // reachable from here; kept for exhaustiveness.
        Phase::Generating | Phase::Editing => "... ",
    };
    let mut stdout = tokio::io::stdout();
    stdout.write_all(marker.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
