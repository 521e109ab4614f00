//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * jamais de panique, même sur du texte arbitraire fait de touches autorisées
//!   * un résultat affiché, ré-évalué, redonne le même texte
//!   * normalize est idempotent une fois les glyphes retirés
//!   * en + - * / ( ), le résultat est celui de l’arithmétique f64 directe

use std::time::{Duration, Instant};

use super::edition::toggle_sign;
use super::eval::evaluate;
use super::format::{format_nombre, DisplayResult};
use super::jetons::normalize;
use super::trig::AngleMode;

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

/* ------------------------ Génération (bornée) ------------------------ */

const FONCTIONS: &[&str] = &[
    "sin(", "cos(", "tan(", "asin(", "acos(", "atan(", "sinh(", "cosh(", "tanh(", "log10(",
    "ln(", "exp(", "sqrt(", "factorial(", "abs(", "square(", "cube(",
];

const OPERATEURS: &[&str] = &[" + ", " - ", " × ", " ÷ ", " ^ "];

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(100);
    match rng.pick(4) {
        0 => format!("{n}.{}", rng.pick(10)),
        1 => format!("{n}%"),
        _ => format!("{n}"),
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "pi".to_string(),
        1 => "e".to_string(),
        _ => gen_nombre(rng),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(6) {
        0 => gen_atom(rng),
        1 => format!("({})", gen_expr(rng, depth - 1)),
        2 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}{})", gen_expr(rng, depth - 1))
        }
        3 => toggle_sign(&gen_expr(rng, depth - 1)),
        _ => {
            let op = OPERATEURS[rng.pick(OPERATEURS.len() as u32) as usize];
            format!(
                "{}{op}{}",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
    }
}

/// Expression en + - * / ( ) seulement, avec sa valeur f64 attendue.
/// Chaque opération binaire est parenthésée : l’ordre d’évaluation est celui de l’arbre généré.
fn gen_arith(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        let txt = match rng.pick(3) {
            0 => format!("{}.{}", rng.pick(100), rng.pick(100)),
            _ => format!("{}", rng.pick(50)),
        };
        let v = txt
            .parse::<f64>()
            .unwrap_or_else(|_| panic!("littéral généré invalide {txt:?}"));
        return (txt, v);
    }

    if rng.pick(6) == 0 {
        let (txt, v) = gen_arith(rng, depth - 1);
        return (format!("-({txt})"), -v);
    }

    let (a, va) = gen_arith(rng, depth - 1);
    let (b, vb) = gen_arith(rng, depth - 1);
    match rng.pick(4) {
        0 => (format!("({a} + {b})"), va + vb),
        1 => (format!("({a} - {b})"), va - vb),
        2 => (format!("({a} * {b})"), va * vb),
        _ => (format!("({a} / {b})"), va / vb),
    }
}

/// Suite de touches quelconque (comme un utilisateur qui tape au hasard).
fn gen_touches(rng: &mut Rng, n: usize) -> String {
    const TOUCHES: &[&str] = &[
        "0", "1", "2", "7", "9", ".", "(", ")", "%", " + ", " - ", " × ", " ÷ ", " ^ ", "pi",
        "e", "sin(", "sqrt(", "factorial(",
    ];
    let mut s = String::new();
    for _ in 0..n {
        s.push_str(TOUCHES[rng.pick(TOUCHES.len() as u32) as usize]);
    }
    s
}

fn mode_au_hasard(rng: &mut Rng) -> AngleMode {
    if rng.coin() {
        AngleMode::Degrees
    } else {
        AngleMode::Radians
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_reevaluation() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = mode_au_hasard(&mut rng);

        let r1 = evaluate(&expr, mode);
        let r2 = evaluate(&expr, mode);
        assert_eq!(r1, r2, "non déterministe: {expr:?}");

        match r1 {
            DisplayResult::Ok(txt) => {
                let v: f64 = txt
                    .parse()
                    .unwrap_or_else(|_| panic!("sortie non numérique {txt:?} pour {expr:?}"));
                assert!(v.is_finite());
                assert!(!txt.ends_with(".0"), "repli entier manqué: {txt:?}");

                // un résultat affiché se ré-évalue en lui-même
                assert_eq!(
                    evaluate(&txt, mode),
                    DisplayResult::Ok(txt.clone()),
                    "ré-évaluation de {txt:?} (depuis {expr:?})"
                );
                seen_ok += 1;
            }
            DisplayResult::MathError => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_arithmetique_conforme_aux_flottants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;
    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_arith(&mut rng, 5);
        let mode = mode_au_hasard(&mut rng);

        let voulu = if attendu.is_finite() {
            seen_ok += 1;
            DisplayResult::Ok(format_nombre(attendu))
        } else {
            DisplayResult::MathError
        };
        assert_eq!(evaluate(&expr, mode), voulu, "expression {expr:?}");
    }

    assert!(seen_ok > 100, "trop peu de résultats finis: {seen_ok}");
}

#[test]
fn fuzz_safe_touches_quelconques_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let n = 1 + rng.pick(12) as usize;
        let s = gen_touches(&mut rng, n);
        let mode = mode_au_hasard(&mut rng);

        // seul compte : pas de panique, et un résultat bien formé
        match evaluate(&s, mode) {
            DisplayResult::Ok(txt) => assert!(txt.parse::<f64>().is_ok(), "{s:?} -> {txt:?}"),
            DisplayResult::MathError => {}
        }

        // +/- deux fois = identité dès qu’un nombre termine le texte
        if s.ends_with(|c: char| c.is_ascii_digit()) {
            assert_eq!(toggle_sign(&toggle_sign(&s)), s);
        }
    }
}

#[test]
fn fuzz_safe_normalize_idempotent() {
    let mut rng = Rng::new(42);
    for _ in 0..200 {
        let s = gen_touches(&mut rng, 8);
        let une = normalize(&s);
        assert_eq!(normalize(&une), une, "entrée {s:?}");
    }
}

#[test]
fn fuzz_safe_imbrication_profonde_bornee() {
    let t0 = Instant::now();

    // très profond : refusé proprement (pas de débordement de pile)
    let s = format!("{}1{}", "sqrt(".repeat(5_000), ")".repeat(5_000));
    assert_eq!(evaluate(&s, AngleMode::Degrees), DisplayResult::MathError);

    // raisonnable : accepté
    let s = format!("{}16{}", "abs(".repeat(50), ")".repeat(50));
    assert_eq!(evaluate(&s, AngleMode::Degrees), DisplayResult::Ok("16".into()));

    budget(t0, Duration::from_millis(500));
}
