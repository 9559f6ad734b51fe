//! Tests scientifiques (campagne) : propriétés du pipeline complet.
//!
//! - durées : lecture puis affichage canonique (1:2:3 -> 01:02:03)
//! - précédence et parenthèses
//! - conversions aller-retour (to_km puis to_miles)
//! - promotion : un seul opérande durée suffit
//! - erreurs : genre + message attendus
//! - stress borné : budget temps global

use std::time::{Duration, Instant};

use super::erreur::CalcError;
use super::eval_expression;

fn eval_ok(expr: &str) -> String {
    let (r, _d) = eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    r
}

fn eval_err(expr: &str) -> CalcError {
    match eval_expression(expr) {
        Err(e) => e,
        Ok((r, _)) => panic!("expr={expr:?} : erreur attendue, obtenu {r:?}"),
    }
}

fn valeur_nombre(expr: &str) -> f64 {
    let r = eval_ok(expr);
    r.parse::<f64>()
        .unwrap_or_else(|_| panic!("expr={expr:?} : nombre attendu, obtenu {r:?}"))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Durées : forme canonique ------------------------ */

#[test]
fn sci_durees_canoniques() {
    for h in [1, 2, 9, 10, 23] {
        for m in [0, 1, 7, 30, 59] {
            for s in [0, 3, 45, 59] {
                let entree = format!("{h}:{m}:{s}");
                let attendu = format!("{h:02}:{m:02}:{s:02}");
                assert_eq!(eval_ok(&entree), attendu, "entree={entree:?}");
            }
        }
    }

    // parties de tête omises
    assert_eq!(eval_ok("2:3"), "02:03");
    // minutes >= 60 : renormalisées
    assert_eq!(eval_ok("90:00"), "01:30:00");
    // secondes fractionnaires
    assert_eq!(eval_ok("1:02:03.5"), "01:02:03.50");
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_precedence_et_parentheses() {
    assert_eq!(eval_ok("2+3*4"), "14.00");
    assert_eq!(eval_ok("(2+3)*4"), "20.00");
    assert_eq!(eval_ok("2*(3+4)*5"), "70.00");
    assert_eq!(eval_ok("100/10/5"), "2.00");
    assert_eq!(eval_ok("((((1))))+1"), "2.00");
}

/* ------------------------ Conversions ------------------------ */

#[test]
fn sci_conversions_aller_retour() {
    for x in ["0.5", "1", "5", "42", "26.2188"] {
        let aller_retour = valeur_nombre(&format!("{x} to_km to_miles"));
        let attendu: f64 = x.parse().unwrap();
        assert!(
            (aller_retour - attendu).abs() < 0.01,
            "x={x} aller-retour={aller_retour}"
        );

        let inverse = valeur_nombre(&format!("{x} to_miles to_km"));
        assert!((inverse - attendu).abs() < 0.01, "x={x} inverse={inverse}");
    }

    // marathon : 26.2188 miles ≈ 42.195 km
    assert_eq!(eval_ok("26.2188 to_km"), "42.20");
}

/* ------------------------ Promotion durée ------------------------ */

#[test]
fn sci_promotion_duree() {
    assert_eq!(eval_ok("1:00 + 30"), "01:30");
    assert_eq!(eval_ok("2 * 0:45"), "01:30");
    assert_eq!(eval_ok("(1 + 2) * 1:00"), "03:00");
    // une durée dans une sous-expression contamine le tout
    assert_eq!(eval_ok("1 + 2 * (0:30 - 30)"), "00:01");
    // allure : 50:00 pour 10 km -> 05:00 par km
    assert_eq!(eval_ok("50:00 / 10"), "05:00");
    // allure en min/mile depuis des km
    assert_eq!(eval_ok("50:00 / (10 to_miles)"), "08:02.80");
    // sans durée : nombre
    assert!(!eval_ok("60 + 30").contains(':'));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs_genres_et_messages() {
    let e = eval_err("(1+2");
    assert_eq!(e.kind(), "Eval Error");
    assert!(e.message().contains("Unbalanced parentheses"));

    let e = eval_err("3.");
    assert_eq!(e.kind(), "Syntax Error");
    assert!(e.message().contains("Trailing"));

    let e = eval_err("3:");
    assert_eq!(e.kind(), "Syntax Error");
    assert!(e.message().contains("Trailing"));

    let e = eval_err("3::");
    assert_eq!(e.kind(), "Syntax Error");
    assert!(e.message().contains("\":\""));

    let e = eval_err("1/0");
    assert_eq!(e.to_string(), "Eval Error: Division by zero.");
}

#[test]
fn sci_pas_d_etat_entre_lignes() {
    // une erreur ne laisse aucune trace pour la ligne suivante
    assert!(eval_expression("(1+2").is_err());
    assert_eq!(eval_ok("1+2"), "3.00");
    assert!(eval_expression("1:2:3:4").is_err());
    assert_eq!(eval_ok("1:2:3"), "01:02:03");
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = vec!["0:30"; 400].join(" + ");
    budget(t0, max);

    // 400 * 30 s = 3 h 20
    assert_eq!(eval_ok(&expr), "03:20:00");
    budget(t0, max);
}

#[test]
fn sci_stress_imbrication() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let n = 200;
    let expr = format!("{}1{}", "(".repeat(n), " + 1)".repeat(n));
    budget(t0, max);

    assert_eq!(eval_ok(&expr), "201.00");
    budget(t0, max);
}
