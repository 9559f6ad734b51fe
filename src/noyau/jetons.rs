// src/noyau/jetons.rs
//
// Lecteur de jetons (automate à états, un caractère à la fois).
//
// États :
// - Initial  : rien en cours
// - Nombre   : chiffres + au plus un '.'
// - Duree    : nombre ayant rencontré au moins un ':' (au plus deux)
// - Symbole  : début d’un opérateur à plusieurs caractères (to_km, to_miles)
//
// Les positions rapportées dans les erreurs sont en caractères, à partir de 1.

use std::fmt;

use super::erreur::CalcError;
use super::format::{format_duree, format_nombre};
use super::operateurs::Op;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Nombre(f64),
    /// Durée littérale, en secondes.
    Duree(f64),
    Op(Op),
}

impl Tok {
    pub fn est_operande(&self) -> bool {
        matches!(self, Tok::Nombre(_) | Tok::Duree(_))
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Nombre(x) => f.write_str(&format_nombre(*x)),
            Tok::Duree(s) => f.write_str(&format_duree(*s)),
            Tok::Op(op) => f.write_str(op.symbole()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Etat {
    Initial,
    Nombre,
    Duree,
    Symbole,
}

/// Tokenize une ligne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5)
/// - durées [[hh:]mm:]ss (ex: 1:30, 1:02:03.5)
/// - opérateurs + - * / to_km to_miles
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, CalcError> {
    let mut out = Vec::new();
    let mut etat = Etat::Initial;
    let mut cur = String::new();
    let mut debut_symbole: usize = 0;

    for (i, c) in s.chars().enumerate() {
        let pos = i + 1;

        etat = match etat {
            Etat::Initial => {
                if c.is_ascii_digit() {
                    cur.push(c);
                    Etat::Nombre
                } else {
                    ouvrir(c, pos, &mut cur, &mut debut_symbole, &mut out)?
                }
            }

            Etat::Symbole => {
                cur.push(c);
                if let Some(op) = Op::depuis_symbole(&cur) {
                    out.push(Tok::Op(op));
                    cur.clear();
                    Etat::Initial
                } else if Op::est_prefixe(&cur) {
                    Etat::Symbole
                } else {
                    return Err(symbole_inconnu(&cur, debut_symbole));
                }
            }

            Etat::Nombre => match c {
                '0'..='9' => {
                    cur.push(c);
                    Etat::Nombre
                }
                '.' => {
                    if cur.contains('.') {
                        return Err(CalcError::syntaxe("Multiple \".\" in number."));
                    }
                    cur.push(c);
                    Etat::Nombre
                }
                ':' => {
                    if cur.contains('.') {
                        return Err(CalcError::syntaxe("Invalid time format."));
                    }
                    cur.push(c);
                    Etat::Duree
                }
                _ => {
                    fermer(&mut cur, &mut out)?;
                    ouvrir(c, pos, &mut cur, &mut debut_symbole, &mut out)?
                }
            },

            Etat::Duree => match c {
                '0'..='9' => {
                    cur.push(c);
                    Etat::Duree
                }
                '.' => {
                    if cur.contains('.') {
                        return Err(CalcError::syntaxe("Multiple \".\" in number."));
                    }
                    cur.push(c);
                    Etat::Duree
                }
                ':' => {
                    if cur.contains('.') {
                        return Err(CalcError::syntaxe("Invalid time format."));
                    }
                    // avec ce caractère on aurait trois ':'
                    if cur.matches(':').count() == 2 {
                        return Err(CalcError::syntaxe(
                            "Invalid number (too many \":\" delimiters).",
                        ));
                    }
                    if cur.ends_with(':') {
                        return Err(CalcError::syntaxe("Consecutive \":\" chars."));
                    }
                    cur.push(c);
                    Etat::Duree
                }
                _ => {
                    fermer(&mut cur, &mut out)?;
                    ouvrir(c, pos, &mut cur, &mut debut_symbole, &mut out)?
                }
            },
        };
    }

    // fin de ligne
    if etat == Etat::Symbole {
        return Err(symbole_inconnu(&cur, debut_symbole));
    }
    if !cur.is_empty() {
        fermer(&mut cur, &mut out)?;
    }

    Ok(out)
}

/// Traite un caractère hors nombre : opérateur complet, début de symbole, espace, ou erreur.
fn ouvrir(
    c: char,
    pos: usize,
    cur: &mut String,
    debut_symbole: &mut usize,
    out: &mut Vec<Tok>,
) -> Result<Etat, CalcError> {
    let mut tampon = [0u8; 4];
    let un = c.encode_utf8(&mut tampon);

    if let Some(op) = Op::depuis_symbole(un) {
        out.push(Tok::Op(op));
        return Ok(Etat::Initial);
    }
    if Op::est_prefixe(un) {
        cur.push(c);
        *debut_symbole = pos;
        return Ok(Etat::Symbole);
    }
    if c == ' ' {
        return Ok(Etat::Initial);
    }

    Err(CalcError::syntaxe(format!("Unexpected \"{c}\" (char {pos})")))
}

/// Ferme l’accumulateur : émet un Nombre ou une Duree, refuse '.' ou ':' final.
fn fermer(cur: &mut String, out: &mut Vec<Tok>) -> Result<(), CalcError> {
    if cur.ends_with('.') {
        return Err(CalcError::syntaxe("Trailing \".\" in number."));
    }
    if cur.ends_with(':') {
        return Err(CalcError::syntaxe("Trailing \":\" in number."));
    }

    let tok = if cur.contains(':') {
        Tok::Duree(secondes_duree(cur)?)
    } else {
        Tok::Nombre(lire_f64(cur)?)
    };
    out.push(tok);
    cur.clear();
    Ok(())
}

/// "h:m:s" -> secondes ; la dernière partie est en secondes, les absentes valent 0.
pub fn secondes_duree(texte: &str) -> Result<f64, CalcError> {
    let parties: Vec<&str> = texte.split(':').collect();
    let n = parties.len();

    let mut total = 0.0;
    for (i, p) in parties.iter().enumerate() {
        total += lire_f64(p)? * 60f64.powi((n - i - 1) as i32);
    }
    Ok(total)
}

fn lire_f64(texte: &str) -> Result<f64, CalcError> {
    texte
        .parse::<f64>()
        .map_err(|_| CalcError::syntaxe(format!("Invalid number \"{texte}\".")))
}

fn symbole_inconnu(texte: &str, debut: usize) -> CalcError {
    CalcError::syntaxe(format!(
        "Unknown symbol beginning with \"{texte}\" (starting at char {debut})"
    ))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
