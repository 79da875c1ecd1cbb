use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wicket_adapters::gateway::{SandboxConfig, SandboxGateway};
use wicket_adapters::notify::TracingNotifier;
use wicket_app::auth_flow::AuthFlow;
use wicket_core::{phone, token};
use wicket_ports::types::WalletActivation;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wicket_adapters=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SandboxConfig::default();
    let flow = AuthFlow::new(SandboxGateway::new(config), TracingNotifier);
    tracing::info!(session = %flow.session(), "enrollment session started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Terms come first; enrollment cannot proceed until they are accepted.
    match flow.load_terms().await {
        Some(Ok(text)) => {
            println!("--- terms of use ---");
            println!("{}", text.trim());
            println!("--------------------");
        }
        Some(Err(error)) => return Err(error).context("loading terms of use"),
        None => anyhow::bail!("terms fetch already in flight"),
    }

    loop {
        let answer = read_line(&mut lines, "accept the terms of use? [y/n] ").await?;
        match answer.as_str() {
            "y" | "yes" => {
                flow.set_terms_accepted(true);
                break;
            }
            "n" | "no" => {
                println!("enrollment cancelled");
                return Ok(());
            }
            _ => continue,
        }
    }

    // Phone step: normalize every entry, submit once the number is full.
    loop {
        let raw = read_line(&mut lines, "phone number (+7 / 8 / 10 digits): ").await?;
        flow.on_phone_input(&raw);

        let digits = flow.phone_input().digits().to_string();
        if !flow.can_verify_phone() {
            println!(
                "need {} digits, got {} ({digits:?})",
                phone::NATIONAL_LEN,
                digits.len()
            );
            continue;
        }

        match flow.verify_phone().await {
            Some(Ok(())) => {
                println!("sms code sent to {}{digits}", phone::COUNTRY_CODE);
                break;
            }
            Some(Err(error)) => {
                match flow.phone_input().error() {
                    Some(message) => println!("{message}"),
                    None => println!("{error}"),
                }
                continue;
            }
            None => continue,
        }
    }

    // Token step.
    loop {
        let raw = read_line(&mut lines, "sms code (6 digits): ").await?;
        flow.on_token_input(&raw);

        if !flow.can_verify_token() {
            println!(
                "need {} digits, got {}",
                token::TOKEN_LEN,
                flow.token_input().digits().len()
            );
            continue;
        }

        match flow.verify_token().await {
            Some(Ok(activation)) => {
                println!("wallet {} activated", activation.wallet_id);
                break;
            }
            Some(Err(error)) => {
                match flow.token_input().error() {
                    Some(message) => println!("{message}"),
                    None => println!("{error}"),
                }
                continue;
            }
            None => continue,
        }
    }

    if flow.step().is_done() {
        if let Some(WalletActivation { wallet_id, active }) = flow.activation() {
            tracing::info!(session = %flow.session(), wallet_id = %wallet_id, active, "enrollment finished");
        }
        println!("enrollment complete");
    }
    Ok(())
}

async fn read_line(lines: &mut Lines<BufReader<Stdin>>, prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let line = lines
        .next_line()
        .await?
        .context("stdin closed before the flow finished")?;
    Ok(line.trim().to_string())
}
