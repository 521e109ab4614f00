// src/noyau/env.rs
//
// Environnement d’évaluation : liste blanche FERMÉE de constantes et de fonctions.
// - résolution par nom via une table fixe (pas de dispatch dynamique)
// - reconstruit à chaque évaluation à partir du mode d’angle courant

use std::f64::consts;

use super::erreurs::EvalError;
use super::trig::{AngleMode, TrigFn};

/// Au-delà, n! déborde f64 : on sature à +∞ sans boucler.
pub const FACTORIELLE_MAX: f64 = 170.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Trig(TrigFn),
    Sinh,
    Cosh,
    Tanh,
    Log10,
    Ln,
    Exp,
    Sqrt,
    Factorial,
    Abs,
    Square,
    Cube,
    Pow,
}

const CONSTANTES: &[(&str, f64)] = &[("pi", consts::PI), ("e", consts::E)];

const FONCTIONS: &[(&str, Fonction)] = &[
    ("sin", Fonction::Trig(TrigFn::Sin)),
    ("cos", Fonction::Trig(TrigFn::Cos)),
    ("tan", Fonction::Trig(TrigFn::Tan)),
    ("asin", Fonction::Trig(TrigFn::Asin)),
    ("acos", Fonction::Trig(TrigFn::Acos)),
    ("atan", Fonction::Trig(TrigFn::Atan)),
    ("sinh", Fonction::Sinh),
    ("cosh", Fonction::Cosh),
    ("tanh", Fonction::Tanh),
    ("log10", Fonction::Log10),
    ("ln", Fonction::Ln),
    ("exp", Fonction::Exp),
    ("sqrt", Fonction::Sqrt),
    ("factorial", Fonction::Factorial),
    ("abs", Fonction::Abs),
    ("square", Fonction::Square),
    ("cube", Fonction::Cube),
    ("pow", Fonction::Pow),
];

impl Fonction {
    pub fn arite(self) -> usize {
        match self {
            Fonction::Pow => 2,
            _ => 1,
        }
    }
}

/// Environnement immuable, valable pour UNE évaluation.
#[derive(Clone, Copy, Debug)]
pub struct Environment {
    mode: AngleMode,
}

impl Environment {
    pub fn new(mode: AngleMode) -> Self {
        Self { mode }
    }

    pub fn constante(&self, name: &str) -> Option<f64> {
        CONSTANTES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }

    pub fn fonction(&self, name: &str) -> Option<Fonction> {
        FONCTIONS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, f)| f)
    }

    /// Applique une fonction déjà résolue. L’arité doit être vérifiée par l’appelant.
    pub fn appliquer(&self, f: Fonction, args: &[f64]) -> Result<f64, EvalError> {
        let x = args.first().copied().unwrap_or(f64::NAN);

        let v = match f {
            Fonction::Trig(t) => t.appliquer(self.mode, x),
            Fonction::Sinh => x.sinh(),
            Fonction::Cosh => x.cosh(),
            Fonction::Tanh => x.tanh(),
            Fonction::Log10 => x.log10(),
            Fonction::Ln => x.ln(),
            Fonction::Exp => x.exp(),
            Fonction::Sqrt => x.sqrt(),
            Fonction::Factorial => factorielle(x)?,
            Fonction::Abs => x.abs(),
            Fonction::Square => x * x,
            Fonction::Cube => x * x * x,
            Fonction::Pow => x.powf(args.get(1).copied().unwrap_or(f64::NAN)),
        };
        Ok(v)
    }
}

/// n! pour n entier naturel (porté par un f64).
/// - négatif / non entier / non fini => DomainError
/// - n > FACTORIELLE_MAX => +∞ (rejeté plus loin comme résultat invalide)
pub fn factorielle(x: f64) -> Result<f64, EvalError> {
    if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
        return Err(EvalError::DomainError(format!(
            "factorial({x}) : entier naturel attendu"
        )));
    }
    if x > FACTORIELLE_MAX {
        return Ok(f64::INFINITY);
    }

    let mut acc = 1.0_f64;
    let mut k = 2.0_f64;
    while k <= x {
        acc *= k;
        k += 1.0;
    }
    Ok(acc)
}
