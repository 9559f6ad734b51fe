//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> réduction -> affichage
//!
//! La réduction prend toujours le PREMIER opérateur de la suite postfixe,
//! consomme ses `arité` opérandes juste avant lui et les remplace par un seul
//! jeton résultat (étiqueté durée si un opérande l’était).

use tracing::{debug, trace};

use super::erreur::CalcError;
use super::jetons::{format_tokens, tokenize, Tok};
use super::operateurs::Op;
use super::rpn::to_rpn;
use super::valeur::Valeur;

/// Démarche : jetons lus + forme postfixe, pour affichage/trace.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub postfixe: String,
}

/// API publique : évalue une ligne et retourne:
/// - le résultat formaté (3.00, 01:30, ...)
/// - la démarche (jetons, postfixe)
pub fn eval_expression(ligne: &str) -> Result<(String, Demarche), CalcError> {
    // 1) Jetons
    let jetons = tokenize(ligne)?;
    let jetons_txt = format_tokens(&jetons);
    debug!(jetons = %jetons_txt, "lecture");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let postfixe_txt = format_tokens(&rpn);
    debug!(postfixe = %postfixe_txt, "réordonnancement");

    // 3) Réduction
    let valeur = reduire(&rpn)?;
    debug!(?valeur, "résultat");

    let d = Demarche {
        jetons: jetons_txt,
        postfixe: postfixe_txt,
    };
    Ok((valeur.to_string(), d))
}

/// Réduit une suite postfixe à une seule valeur.
///
/// On reprend la recherche à la position du résultat : tout ce qui précède
/// est déjà composé d’opérandes, l’ordre “premier opérateur trouvé” est conservé.
pub fn reduire(postfixe: &[Tok]) -> Result<Valeur, CalcError> {
    if postfixe.is_empty() {
        return Err(CalcError::eval("Empty expression."));
    }

    let mut seq: Vec<Tok> = postfixe.to_vec();
    let mut i: usize = 0;

    while seq.len() > 1 {
        let pos = seq[i..]
            .iter()
            .position(|t| !t.est_operande())
            .map(|p| p + i)
            .ok_or_else(|| CalcError::eval("Missing operator."))?;

        let op = match seq[pos] {
            Tok::Op(op) => op,
            _ => return Err(CalcError::eval("Missing operator.")),
        };
        let arite = op
            .arite()
            .ok_or_else(|| CalcError::eval("Unknown operator arity."))?;
        if pos < arite {
            return Err(operande_manquant(op));
        }

        let debut = pos - arite;
        let operandes = seq[debut..pos]
            .iter()
            .map(|t| valeur_de(t, op))
            .collect::<Result<Vec<Valeur>, CalcError>>()?;
        let bruts: Vec<f64> = operandes.iter().map(|v| v.brut()).collect();

        let resultat = Valeur::promouvoir(&operandes, op.appliquer(&bruts)?);
        trace!(op = op.symbole(), ?operandes, ?resultat, "réduction");

        seq.drain(debut..=pos);
        seq.insert(debut, jeton_de(resultat));
        i = debut;
    }

    match seq[0] {
        Tok::Nombre(x) => Ok(Valeur::Nombre(x)),
        Tok::Duree(s) => Ok(Valeur::Duree(s)),
        Tok::Op(op) => Err(operande_manquant(op)),
    }
}

fn valeur_de(t: &Tok, op: Op) -> Result<Valeur, CalcError> {
    match *t {
        Tok::Nombre(x) => Ok(Valeur::Nombre(x)),
        Tok::Duree(s) => Ok(Valeur::Duree(s)),
        Tok::Op(_) => Err(operande_manquant(op)),
    }
}

fn jeton_de(v: Valeur) -> Tok {
    match v {
        Valeur::Nombre(x) => Tok::Nombre(x),
        Valeur::Duree(s) => Tok::Duree(s),
    }
}

fn operande_manquant(op: Op) -> CalcError {
    CalcError::eval(format!("Missing operand for \"{}\".", op.symbole()))
}
