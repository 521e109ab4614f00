//! Noyau — évaluation (pipeline réel)
//!
//! texte -> normalize -> parse -> AstNode -> evaluate_ast (Environment) -> contrôle NaN/∞ -> format
//!
//! Toute erreur (analyse, évaluation, résultat invalide) devient "Math Error" à la frontière
//! `evaluate`. `evaluate_detailed` garde l’erreur typée (tests + journaux).

use tracing::debug;

use super::analyse::parse;
use super::arbre::{AstNode, BinOp, Sign};
use super::env::Environment;
use super::erreurs::{CalcError, EvalError};
use super::format::{format_nombre, DisplayResult};
use super::jetons::normalize;
use super::trig::AngleMode;

/// Parcours post-ordre : les enfants d’abord, puis la combinaison.
pub fn evaluate_ast(node: &AstNode, env: &Environment) -> Result<f64, EvalError> {
    match node {
        AstNode::NumberLiteral(v) => Ok(*v),

        AstNode::Identifier(name) => env
            .constante(name)
            .ok_or_else(|| EvalError::UnknownIdentifier(name.clone())),

        AstNode::UnaryOp(sign, x) => {
            let v = evaluate_ast(x, env)?;
            Ok(match sign {
                Sign::Plus => v,
                Sign::Minus => -v,
            })
        }

        AstNode::BinaryOp(op, a, b) => {
            let l = evaluate_ast(a, env)?;
            let r = evaluate_ast(b, env)?;
            Ok(match op {
                BinOp::Add => l + r,
                BinOp::Sub => l - r,
                BinOp::Mul => l * r,
                // division par zéro : ±∞ / NaN, filtrés après coup
                BinOp::Div => l / r,
                BinOp::Pow => l.powf(r),
                BinOp::Mod => modulo(l, r),
            })
        }

        AstNode::Call(name, args) => {
            let f = env
                .fonction(name)
                .ok_or_else(|| EvalError::UnknownIdentifier(name.clone()))?;

            if args.len() != f.arite() {
                return Err(EvalError::ArityMismatch {
                    name: name.clone(),
                    attendu: f.arite(),
                    recu: args.len(),
                });
            }

            let valeurs = args
                .iter()
                .map(|a| evaluate_ast(a, env))
                .collect::<Result<Vec<f64>, EvalError>>()?;

            env.appliquer(f, &valeurs)
        }
    }
}

/// Reste "plancher" : le signe suit le diviseur (-7 % 3 = 2, 7 % -3 = -2).
fn modulo(l: f64, r: f64) -> f64 {
    let m = l % r;
    if m != 0.0 && (m < 0.0) != (r < 0.0) {
        m + r
    } else {
        m
    }
}

/// Valeur numérique d’une expression telle que tapée (glyphes compris).
/// NaN / ±∞ => CalcError::NumericInvalid.
pub fn valeur(text: &str, mode: AngleMode) -> Result<f64, CalcError> {
    let normal = normalize(text.trim());
    let arbre = parse(&normal)?;
    debug!(texte = %normal, arbre = %arbre, mode = %mode, "expression analysée");

    let env = Environment::new(mode);
    let r = evaluate_ast(&arbre, &env)?;

    if !r.is_finite() {
        return Err(CalcError::NumericInvalid(r));
    }
    Ok(r)
}

/// Comme `evaluate`, mais sans effacer la cause de l’échec.
pub fn evaluate_detailed(text: &str, mode: AngleMode) -> Result<String, CalcError> {
    valeur(text, mode).map(format_nombre)
}

/// API publique : texte affiché -> résultat affichable.
pub fn evaluate(text: &str, mode: AngleMode) -> DisplayResult {
    match evaluate_detailed(text, mode) {
        Ok(s) => DisplayResult::Ok(s),
        Err(e) => {
            debug!(texte = %text, kind = e.kind(), erreur = %e, "Math Error");
            DisplayResult::MathError
        }
    }
}
