// src/main.rs
//
// Calculatrice durées — point d’entrée
// ------------------------------------
// - sans argument        : console interactive (invite, "=> résultat", "Bye!")
// - avec une expression  : évaluation unique, code de sortie 1 en cas d’erreur
// - --gui (feature gui)  : fenêtre egui
//
// Journal (tracing) sur stderr : RUST_LOG, sinon --log-level, sinon config `journal`.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "gui")]
mod app;
mod config;
mod console;
mod noyau;

use config::Config;

/// Calculatrice de durées (hh:mm:ss) et de distances (to_km, to_miles).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Fichier de configuration (sinon <config_dir>/calculatrice_duree/config.toml).
    #[arg(short, long, value_name = "FICHIER")]
    config: Option<PathBuf>,

    /// Affiche les jetons et la forme postfixe avant chaque résultat.
    #[arg(short, long)]
    trace: bool,

    /// Pas de bannière au démarrage.
    #[arg(short, long)]
    quiet: bool,

    /// Filtre du journal (ex: "debug", "calculatrice_duree=trace").
    #[arg(short, long, value_name = "FILTRE")]
    log_level: Option<String>,

    /// Ouvre la fenêtre au lieu de la console.
    #[cfg(feature = "gui")]
    #[arg(long)]
    gui: bool,

    /// Expression à évaluer une seule fois (les mots sont joints par des espaces).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = Config::charger(args.config.as_deref())?;
    if args.trace {
        config.trace = true;
    }
    if args.quiet {
        config.banniere = false;
    }

    init_journal(args.log_level.as_deref().unwrap_or(&config.journal))?;
    debug!(?config, "configuration");

    #[cfg(feature = "gui")]
    {
        if args.gui {
            info!("démarrage de la fenêtre");
            app::lancer().map_err(|e| anyhow::anyhow!("fenêtre: {e}"))?;
            return Ok(ExitCode::SUCCESS);
        }
    }

    if !args.expression.is_empty() {
        let expression = args.expression.join(" ");
        let issue = console::une_fois(
            &expression,
            config.trace,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )
        .context("écriture du résultat")?;

        return Ok(match issue {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        });
    }

    info!("console interactive");
    console::boucle(io::stdin().lock(), &mut io::stdout().lock(), &config)
        .context("console interactive")?;

    Ok(ExitCode::SUCCESS)
}

fn init_journal(defaut: &str) -> Result<()> {
    let filtre = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(defaut)
            .with_context(|| format!("filtre de journal invalide: {defaut:?}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
