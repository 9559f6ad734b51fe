// src/noyau/valeur.rs
//
// Valeur étiquetée : nombre simple ou durée (en secondes).
// Règle de promotion : un résultat est une durée dès qu’UN opérande l’est.

use std::fmt;

use super::format::{format_duree, format_nombre};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Valeur {
    Nombre(f64),
    Duree(f64),
}

impl Valeur {
    /// Charge numérique (les secondes pour une durée).
    pub fn brut(self) -> f64 {
        match self {
            Valeur::Nombre(x) | Valeur::Duree(x) => x,
        }
    }

    pub fn est_duree(self) -> bool {
        matches!(self, Valeur::Duree(_))
    }

    /// Étiquette le résultat `x` selon les opérandes consommés.
    pub fn promouvoir(operandes: &[Valeur], x: f64) -> Valeur {
        if operandes.iter().any(|v| v.est_duree()) {
            Valeur::Duree(x)
        } else {
            Valeur::Nombre(x)
        }
    }
}

impl fmt::Display for Valeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valeur::Nombre(x) => f.write_str(&format_nombre(*x)),
            Valeur::Duree(s) => f.write_str(&format_duree(*s)),
        }
    }
}
