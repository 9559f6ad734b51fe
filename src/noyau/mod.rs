//! Noyau durées + distances
//!
//! Organisation interne :
//! - erreur.rs     : Syntax Error / Eval Error
//! - operateurs.rs : table des symboles (arité, précédence, fonction)
//! - jetons.rs     : tokenisation (automate)
//! - rpn.rs        : shunting-yard -> postfixe
//! - valeur.rs     : Nombre | Duree + promotion
//! - format.rs     : affichage 3.00 / [hh:]mm:ss
//! - eval.rs       : réduction + pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;
pub mod valeur;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::CalcError;
pub use eval::{eval_expression, Demarche};
