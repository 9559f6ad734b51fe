//! src/console.rs
//!
//! Boucle lecture -> résultat, ligne par ligne.
//!
//! Contrats :
//! - une ligne = un passage complet du pipeline, rien n’est gardé d’une ligne à l’autre
//! - Syntax Error / Eval Error : une ligne "<Genre>: <message>", puis on continue
//! - fin d’entrée : "Bye!" et sortie normale (jamais une erreur)

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::config::Config;
use crate::noyau::{eval_expression, CalcError, Demarche};

pub const BANNIERE: [&str; 2] = [
    "Time format: \"hh:mm:ss\" (can omit unnecessary parts).",
    "Use <miles> to_km and <km> to_miles to convert distances.",
];

pub const AU_REVOIR: &str = "Bye!";

/// Lance la boucle interactive jusqu’à la fin de `entree`.
pub fn boucle<R: BufRead, W: Write>(mut entree: R, sortie: &mut W, config: &Config) -> io::Result<()> {
    if config.banniere {
        for ligne in BANNIERE {
            writeln!(sortie, "{ligne}")?;
        }
    }

    let mut tampon = String::new();
    loop {
        write!(sortie, "{}", config.invite)?;
        sortie.flush()?;

        tampon.clear();
        match entree.read_line(&mut tampon) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                // entrée illisible (ex: UTF-8 invalide) : même sortie qu’une fin d’entrée
                warn!(erreur = %e, "lecture interrompue");
                break;
            }
        }

        let ligne = tampon.trim_end_matches(['\n', '\r']);
        if ligne.trim().is_empty() {
            continue;
        }

        match eval_expression(ligne) {
            Ok((resultat, demarche)) => {
                if config.trace {
                    ecrire_demarche(sortie, &demarche)?;
                }
                writeln!(sortie, "=> {resultat}")?;
            }
            Err(e) => {
                debug!(ligne, erreur = %e, "ligne rejetée");
                writeln!(sortie, "{e}")?;
            }
        }
    }

    writeln!(sortie, "{AU_REVOIR}")?;
    sortie.flush()
}

/// Évaluation unique (ligne de commande) : résultat sur `sortie`, erreur sur `erreurs`.
pub fn une_fois<W: Write, E: Write>(
    expression: &str,
    trace: bool,
    sortie: &mut W,
    erreurs: &mut E,
) -> io::Result<Result<(), CalcError>> {
    match eval_expression(expression) {
        Ok((resultat, demarche)) => {
            if trace {
                ecrire_demarche(sortie, &demarche)?;
            }
            writeln!(sortie, "{resultat}")?;
            Ok(Ok(()))
        }
        Err(e) => {
            writeln!(erreurs, "{e}")?;
            Ok(Err(e))
        }
    }
}

fn ecrire_demarche<W: Write>(sortie: &mut W, d: &Demarche) -> io::Result<()> {
    writeln!(sortie, "Tokens: {}", d.jetons)?;
    writeln!(sortie, "Postfix: {}", d.postfixe)
}
