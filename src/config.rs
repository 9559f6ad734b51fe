//! src/config.rs
//!
//! Configuration (fichier TOML optionnel).
//!
//! Emplacement par défaut : <config_dir>/calculatrice_duree/config.toml
//! Fichier absent => valeurs par défaut ; fichier illisible ou invalide => erreur.
//! Les options de la ligne de commande passent par-dessus (voir main.rs).
//! Rien n’est journalisé ici : le journal n’est initialisé qu’après lecture du filtre.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

const NOM_APP: &str = "calculatrice_duree";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Invite affichée avant chaque lecture.
    pub invite: String,
    /// Deux lignes d’aide au démarrage.
    pub banniere: bool,
    /// Affiche jetons + postfixe avant le résultat.
    pub trace: bool,
    /// Filtre tracing (ex: "warn", "calculatrice_duree=debug").
    pub journal: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            invite: "> ".to_string(),
            banniere: true,
            trace: false,
            journal: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn chemin_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(NOM_APP).join("config.toml"))
    }

    pub fn depuis_toml(texte: &str) -> Result<Self> {
        toml::from_str(texte).context("configuration TOML invalide")
    }

    /// Charge `chemin` s’il est donné (doit exister), sinon le chemin par défaut (facultatif).
    pub fn charger(chemin: Option<&Path>) -> Result<Self> {
        let (chemin, explicite) = match chemin {
            Some(c) => (c.to_path_buf(), true),
            None => match Self::chemin_defaut() {
                Some(c) => (c, false),
                None => return Ok(Self::default()),
            },
        };

        if !chemin.exists() {
            if explicite {
                bail!("fichier de configuration introuvable: {}", chemin.display());
            }
            return Ok(Self::default());
        }

        let texte = fs::read_to_string(&chemin)
            .with_context(|| format!("lecture de {}", chemin.display()))?;
        Self::depuis_toml(&texte).with_context(|| format!("dans {}", chemin.display()))
    }
}
