//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, caractère inattendu, etc.)
//! - invariant clé : résultat au format durée <=> au moins une durée dans l’entrée

use std::time::{Duration, Instant};

use super::eval_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(msg: &str) -> bool {
    // Liste blanche : erreurs *normales* pour un fuzz.
    msg.contains("Division by zero")
        || msg.contains("Unexpected")
        || msg.contains("Unknown symbol")
        || msg.contains("Trailing")
        || msg.contains("Multiple \".\"")
        || msg.contains("Consecutive")
        || msg.contains("too many")
        || msg.contains("Invalid time format")
        || msg.contains("Unbalanced parentheses")
        || msg.contains("Missing")
        || msg.contains("Empty expression")
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(60);
    if rng.coin() {
        format!("{a}")
    } else {
        format!("{a}.{}", rng.pick(100))
    }
}

fn gen_duree(rng: &mut Rng) -> String {
    let mm = rng.pick(60);
    let ss = rng.pick(60);
    if rng.coin() {
        format!("{}:{mm:02}:{ss:02}", rng.pick(5))
    } else {
        format!("{mm}:{ss:02}")
    }
}

fn gen_expr(rng: &mut Rng, depth: usize, avec_duree: bool) -> String {
    if depth == 0 {
        return if avec_duree && rng.coin() {
            gen_duree(rng)
        } else {
            gen_nombre(rng)
        };
    }

    let a = gen_expr(rng, depth - 1, avec_duree);
    let b = gen_expr(rng, depth - 1, avec_duree);
    match rng.pick(7) {
        0 => format!("({a} + {b})"),
        1 => format!("{a} - {b}"),
        2 => format!("{a} * {b}"),
        3 => format!("({a}) / ({b})"),
        4 => format!("({a}) to_km"),
        5 => format!("({a}) to_miles"),
        _ => a,
    }
}

/// Mutation grossière : insère un caractère pris dans un alphabet piégé.
fn mute(rng: &mut Rng, s: &str) -> String {
    const PIEGES: [char; 10] = ['.', ':', '(', ')', 't', 'x', '+', ' ', '9', '/'];
    let chars: Vec<char> = s.chars().collect();
    let pos = rng.pick(chars.len() as u32 + 1) as usize;
    let c = PIEGES[rng.pick(PIEGES.len() as u32) as usize];

    let mut out: String = chars[..pos].iter().collect();
    out.push(c);
    out.extend(chars[pos..].iter());
    out
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariant_promotion() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut seen_ok = 0usize;

    for k in 0..200 {
        budget(t0, max);

        let avec_duree = k % 2 == 0;
        let expr = gen_expr(&mut rng, 4, avec_duree);
        let contient_duree = expr.contains(':');

        match eval_expression(&expr) {
            Ok((r, _d)) => {
                assert_eq!(
                    r.contains(':'),
                    contient_duree,
                    "promotion: expr={expr:?} résultat={r:?}"
                );
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(e.message()),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
            }
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_mutations_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let base = gen_expr(&mut rng, 3, true);
        let expr = mute(&mut rng, &base);

        if let Err(e) = eval_expression(&expr) {
            assert!(
                is_erreur_attendue(e.message()),
                "erreur non attendue: expr={expr:?} err={e}"
            );
            seen_err += 1;
        }
    }

    // Le fuzz doit balayer des erreurs, sinon il est trop “sage”.
    assert!(seen_err > 0, "aucune erreur vue");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);

    for _ in 0..50 {
        let ea = gen_expr(&mut a, 3, true);
        let eb = gen_expr(&mut b, 3, true);
        assert_eq!(ea, eb);
        assert_eq!(
            eval_expression(&ea).map(|(r, _)| r),
            eval_expression(&eb).map(|(r, _)| r)
        );
    }
}
