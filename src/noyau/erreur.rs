// src/noyau/erreur.rs
//
// Deux familles d’erreurs seulement :
// - Syntaxe : texte mal formé (levée par le lecteur de jetons)
// - Eval    : jetons valides mais irréductibles (rpn / évaluation)
//
// Affichage : "<Genre>: <message>", ex. "Syntax Error: Trailing "." in number."

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Syntax Error: {0}")]
    Syntaxe(String),

    #[error("Eval Error: {0}")]
    Eval(String),
}

impl CalcError {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }

    pub fn eval(msg: impl Into<String>) -> Self {
        Self::Eval(msg.into())
    }

    /// Genre lisible ("Syntax Error" / "Eval Error").
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Syntaxe(_) => "Syntax Error",
            Self::Eval(_) => "Eval Error",
        }
    }

    /// Message seul, sans le genre.
    pub fn message(&self) -> &str {
        match self {
            Self::Syntaxe(m) | Self::Eval(m) => m,
        }
    }
}
