// src/noyau/trig.rs
//
// Mode d’angle (DEG / RAD) + adaptation des fonctions trigonométriques
// --------------------------------------------------------------------
// - sin/cos/tan   : argument converti degrés -> radians en mode DEG
// - asin/acos/atan: résultat converti radians -> degrés en mode DEG
// - sinh/cosh/tanh: jamais convertis (hyperboliques, indépendantes du mode)

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Libellé du bouton / de l’API ("DEG" | "RAD").
    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Degrees => "DEG",
            AngleMode::Radians => "RAD",
        }
    }

    pub fn basculer(self) -> Self {
        match self {
            AngleMode::Degrees => AngleMode::Radians,
            AngleMode::Radians => AngleMode::Degrees,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degrees" | "degres" => Ok(AngleMode::Degrees),
            "rad" | "radians" => Ok(AngleMode::Radians),
            autre => Err(format!("mode d’angle inconnu: '{autre}' (attendu: deg | rad)")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl TrigFn {
    /// Applique la fonction en respectant le mode d’angle.
    pub fn appliquer(self, mode: AngleMode, x: f64) -> f64 {
        match self {
            TrigFn::Sin => vers_radians(mode, x).sin(),
            TrigFn::Cos => vers_radians(mode, x).cos(),
            TrigFn::Tan => vers_radians(mode, x).tan(),
            TrigFn::Asin => depuis_radians(mode, x.asin()),
            TrigFn::Acos => depuis_radians(mode, x.acos()),
            TrigFn::Atan => depuis_radians(mode, x.atan()),
        }
    }
}

fn vers_radians(mode: AngleMode, x: f64) -> f64 {
    match mode {
        AngleMode::Degrees => x.to_radians(),
        AngleMode::Radians => x,
    }
}

fn depuis_radians(mode: AngleMode, x: f64) -> f64 {
    match mode {
        AngleMode::Degrees => x.to_degrees(),
        AngleMode::Radians => x,
    }
}
