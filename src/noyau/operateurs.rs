// src/noyau/operateurs.rs
//
// Table fixe des opérateurs : symbole -> (arité, précédence, fonction).
// Arité et précédence ne dépendent jamais du contexte.

use super::erreur::CalcError;

/// Milles par kilomètre.
pub const MILES_PAR_KM: f64 = 0.621371;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Div,
    VersKm,
    VersMiles,

    ParOuv,
    ParFerm,
}

/// Tous les symboles connus (un ou plusieurs caractères).
pub const SYMBOLES: [(&str, Op); 8] = [
    ("+", Op::Plus),
    ("-", Op::Moins),
    ("*", Op::Fois),
    ("/", Op::Div),
    ("(", Op::ParOuv),
    (")", Op::ParFerm),
    ("to_km", Op::VersKm),
    ("to_miles", Op::VersMiles),
];

impl Op {
    /// Recherche exacte d’un symbole.
    pub fn depuis_symbole(s: &str) -> Option<Op> {
        SYMBOLES
            .iter()
            .find(|(sym, _)| *sym == s)
            .map(|(_, op)| *op)
    }

    /// Vrai si `s` est le début (strict ou non) d’au moins un symbole.
    pub fn est_prefixe(s: &str) -> bool {
        !s.is_empty() && SYMBOLES.iter().any(|(sym, _)| sym.starts_with(s))
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Moins => "-",
            Op::Fois => "*",
            Op::Div => "/",
            Op::VersKm => "to_km",
            Op::VersMiles => "to_miles",
            Op::ParOuv => "(",
            Op::ParFerm => ")",
        }
    }

    /// Nombre d’opérandes consommés ; None pour les parenthèses.
    pub fn arite(self) -> Option<usize> {
        match self {
            Op::Plus | Op::Moins | Op::Fois | Op::Div => Some(2),
            Op::VersKm | Op::VersMiles => Some(1),
            Op::ParOuv | Op::ParFerm => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::VersKm | Op::VersMiles => 3,
            Op::Fois | Op::Div => 2,
            Op::Plus | Op::Moins => 1,
            Op::ParOuv | Op::ParFerm => 0,
        }
    }

    /// Applique l’opérateur aux valeurs brutes, dans l’ordre gauche -> droite.
    pub fn appliquer(self, args: &[f64]) -> Result<f64, CalcError> {
        match (self, args) {
            (Op::Plus, [a, b]) => Ok(a + b),
            (Op::Moins, [a, b]) => Ok(a - b),
            (Op::Fois, [a, b]) => Ok(a * b),
            (Op::Div, [a, b]) => {
                if *b == 0.0 {
                    return Err(CalcError::eval("Division by zero."));
                }
                Ok(a / b)
            }
            (Op::VersKm, [x]) => Ok(x / MILES_PAR_KM),
            (Op::VersMiles, [x]) => Ok(x * MILES_PAR_KM),
            _ => Err(CalcError::eval("Unknown operator arity.")),
        }
    }
}
