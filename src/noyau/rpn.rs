// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - opérande            : sortie directe
// - '('                 : empilée
// - ')'                 : dépile vers la sortie jusqu’à '(' (jetée) ; pile vide => parenthèses déséquilibrées
// - autre opérateur t   : pile vide ou '(' au sommet => empile ; sinon on compare à la précédence du sommet :
//     - plus forte      => empile
//     - égale, binaire  => sort le sommet puis empile (associativité à gauche)
//     - égale, unaire   => empile sans sortir (to_km to_miles s’enchaînent)
//     - plus faible     => sort le sommet et recompare t au nouveau sommet (sans avancer)
//
// Les conversions (to_km, to_miles) s’écrivent APRÈS leur opérande et ont la précédence
// la plus forte : elles s’appliquent avant toute arithmétique en attente.

use std::cmp::Ordering;

use tracing::trace;

use super::erreur::CalcError;
use super::jetons::Tok;
use super::operateurs::Op;

fn desequilibre() -> CalcError {
    CalcError::eval("Unbalanced parentheses.")
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, CalcError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Op> = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let tok = tokens[i];

        match tok {
            Tok::Nombre(_) | Tok::Duree(_) => out.push(tok),

            Tok::Op(Op::ParOuv) => ops.push(Op::ParOuv),

            Tok::Op(Op::ParFerm) => loop {
                match ops.pop() {
                    Some(Op::ParOuv) => break,
                    Some(op) => out.push(Tok::Op(op)),
                    None => return Err(desequilibre()),
                }
            },

            Tok::Op(op) => {
                let sommet = match ops.last() {
                    None | Some(Op::ParOuv) => None,
                    Some(s) => Some(*s),
                };

                if let Some(sommet) = sommet {
                    match op.precedence().cmp(&sommet.precedence()) {
                        Ordering::Greater => ops.push(op),

                        Ordering::Equal => match op.arite() {
                            Some(2) => {
                                ops.pop();
                                out.push(Tok::Op(sommet));
                                ops.push(op);
                            }
                            Some(1) => ops.push(op),
                            _ => return Err(CalcError::eval("Unknown operator arity.")),
                        },

                        Ordering::Less => {
                            ops.pop();
                            out.push(Tok::Op(sommet));
                            trace!(op = op.symbole(), sorti = sommet.symbole(), "recomparaison");
                            // même jeton, nouveau sommet
                            continue;
                        }
                    }
                } else {
                    ops.push(op);
                }
            }
        }

        i += 1;
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Op::ParOuv {
            return Err(desequilibre());
        }
        out.push(Tok::Op(op));
    }

    Ok(out)
}
