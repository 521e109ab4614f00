//! Tests de bout en bout : texte tapé -> texte affiché.

use super::edition::toggle_sign;
use super::eval::evaluate;
use super::format::DisplayResult;
use super::jetons::normalize;
use super::memoire::{memory_op, MemOp, MemoryRegister};
use super::trig::AngleMode;

const DEG: AngleMode = AngleMode::Degrees;
const RAD: AngleMode = AngleMode::Radians;

fn ok(s: &str, mode: AngleMode) -> String {
    match evaluate(s, mode) {
        DisplayResult::Ok(v) => v,
        DisplayResult::MathError => panic!("evaluate({s:?}) => Math Error"),
    }
}

fn math_error(s: &str) {
    assert_eq!(
        evaluate(s, DEG),
        DisplayResult::MathError,
        "Math Error attendu pour {s:?}"
    );
}

// --- Arithmétique ---

#[test]
fn precedence_et_associativite() {
    assert_eq!(ok("1 + 2 × 3", DEG), "7");
    assert_eq!(ok("(1 + 2) × 3", DEG), "9");
    assert_eq!(ok("10 - 4 - 3", DEG), "3");
    assert_eq!(ok("100 ÷ 10 ÷ 5", DEG), "2");
    assert_eq!(ok("2 ^ 3 ^ 2", DEG), "512");
    assert_eq!(ok("-3 ^ 2", DEG), "-9");
}

#[test]
fn repli_entier() {
    assert_eq!(ok("6/3", DEG), "2");
    assert_eq!(ok("0.5 + 0.5", DEG), "1");
    assert_eq!(ok("7/2", DEG), "3.5");
    assert_eq!(ok("0.1 + 0.2", DEG), "0.30000000000000004");
    assert_eq!(ok("-0", DEG), "0");
}

// --- Pourcentage textuel ---

#[test]
fn pourcentage() {
    assert_eq!(ok("50%", DEG), "0.5");
    assert_eq!(evaluate("50%", DEG), evaluate("50/100", DEG));
    // pas "50 % de 200" : réécriture purement textuelle
    assert_eq!(ok("200+50%", DEG), "200.5");
    assert_eq!(ok("50%%", DEG), "0.005");
    assert_eq!(normalize("50%%"), "50/100/100");
}

// --- Trigonométrie ---

#[test]
fn trig_selon_mode() {
    assert_eq!(ok("sin(90)", DEG), "1");
    assert!(ok("sin(90)", RAD).starts_with("0.893996"));
    assert_eq!(ok("cos(180)", DEG), "-1");
    assert_eq!(ok("tan(45)", DEG), "1");
    assert_eq!(ok("asin(1)", DEG), "90");
    assert_eq!(ok("acos(0.5)", DEG), "60");
    assert_eq!(ok("atan(1)", DEG), "45");
    assert_eq!(ok("sin(pi/2)", RAD), "1");
    assert!(ok("asin(1)", RAD).starts_with("1.5707963267948"));
}

#[test]
fn hyperboliques_independantes_du_mode() {
    for mode in [DEG, RAD] {
        assert_eq!(ok("sinh(0)", mode), "0");
        assert_eq!(ok("cosh(0)", mode), "1");
        assert_eq!(ok("tanh(0)", mode), "0");
    }
    assert_eq!(ok("sinh(1)", DEG), ok("sinh(1)", RAD));
}

// --- Fonctions ---

#[test]
fn fonctions_unaires() {
    assert_eq!(ok("sqrt(16)", DEG), "4");
    assert_eq!(ok("square(3)", DEG), "9");
    assert_eq!(ok("cube(-2)", DEG), "-8");
    assert_eq!(ok("abs(-4.5)", DEG), "4.5");
    assert_eq!(ok("factorial(5)", DEG), "120");
    assert_eq!(ok("factorial(0)", DEG), "1");
    assert_eq!(ok("log10(1000)", DEG), "3");
    assert_eq!(ok("ln(e)", DEG), "1");
    assert_eq!(ok("exp(0)", DEG), "1");
    assert_eq!(ok("pow(2, 10)", DEG), "1024");
    assert!(ok("pi", DEG).starts_with("3.14159265358979"));
}

// --- Erreurs ---

#[test]
fn constructions_refusees() {
    math_error("sqrt(4, 5)");
    math_error("1+");
    math_error("");
    math_error("   ");
    math_error("sqrt(x=4)");
    math_error("x");
    math_error("Math Error");
    math_error("(1 + 2");
    math_error("2 ÷ ÷ 2");
    math_error("1 ÷ %");
}

#[test]
fn domaine_et_division() {
    math_error("1/0");
    math_error("1 ÷ 0");
    math_error("asin(2)");
    math_error("factorial(-1)");
    math_error("factorial(2.5)");
    math_error("factorial(171)");
    math_error("sqrt(-1)");
    math_error("log10(0)");
    math_error("10 ^ 400");
}

// --- Mémoire ---

#[test]
fn memoire_aller_retour() {
    let mut reg = MemoryRegister::new();
    let mr = |reg: &mut MemoryRegister| memory_op(reg, MemOp::Recall, "", DEG).display;

    memory_op(&mut reg, MemOp::Add, "5", DEG);
    assert_eq!(mr(&mut reg).as_deref(), Some("5"));

    memory_op(&mut reg, MemOp::Subtract, "2", DEG);
    assert_eq!(mr(&mut reg).as_deref(), Some("3"));

    memory_op(&mut reg, MemOp::Clear, "", DEG);
    assert_eq!(mr(&mut reg).as_deref(), Some("0"));
}

// --- +/- ---

#[test]
fn bascule_de_signe_puis_evaluation() {
    assert_eq!(toggle_sign("12+3"), "12+-3");
    assert_eq!(toggle_sign(&toggle_sign("12+3")), "12+3");
    assert_eq!(ok(&toggle_sign("12+3"), DEG), "9");
    assert_eq!(ok(&toggle_sign("2 × 4"), DEG), "-8");
}
