// src/noyau/format.rs
//
// Résultat affichable + formatage des nombres.
// - NaN / ±∞ ne sont jamais formatés : ils deviennent "Math Error" avant d’arriver ici
// - à moins de 1e-12 d’un entier => affiché comme cet entier ("2", pas "2.0")

use std::fmt;

/// Texte affiché pour toute erreur (analyse, évaluation ou résultat invalide).
pub const MATH_ERROR: &str = "Math Error";

/// Tolérance du repli vers l’entier le plus proche.
pub const TOLERANCE_ENTIER: f64 = 1e-12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayResult {
    Ok(String),
    MathError,
}

impl DisplayResult {
    /// Texte à déposer dans l’affichage.
    pub fn texte(&self) -> &str {
        match self {
            DisplayResult::Ok(s) => s,
            DisplayResult::MathError => MATH_ERROR,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, DisplayResult::Ok(_))
    }
}

impl fmt::Display for DisplayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.texte())
    }
}

/// Formate un f64 FINI pour l’affichage.
pub fn format_nombre(v: f64) -> String {
    let entier = v.round();
    if (v - entier).abs() < TOLERANCE_ENTIER {
        // + 0.0 : évite "-0"
        format!("{:.0}", entier + 0.0)
    } else {
        format!("{v}")
    }
}
