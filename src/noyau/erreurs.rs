//! Noyau — taxonomie des erreurs
//!
//! Trois familles :
//! - ParseError : la chaîne ne respecte pas la grammaire (ou sort de la liste blanche)
//! - EvalError  : l’arbre est valide mais l’environnement refuse (nom, arité, domaine)
//! - CalcError  : enveloppe du pipeline complet, + résultat numérique invalide (NaN/∞)
//!
//! Toutes ces erreurs deviennent "Math Error" à la frontière `evaluate` ;
//! la distinction reste disponible pour les tests et les journaux.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Grammaire non respectée : vide, parenthèses, jetons en trop, littéral mal formé.
    #[error("syntaxe: {0}")]
    Syntax(String),

    /// Construction reconnue mais hors liste blanche (mot-clé, attribut, indice, argument nommé…).
    #[error("construction interdite: {0}")]
    DisallowedConstruct(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("identifiant inconnu: {0}")]
    UnknownIdentifier(String),

    #[error("{name}: {attendu} argument(s) attendu(s), {recu} reçu(s)")]
    ArityMismatch {
        name: String,
        attendu: usize,
        recu: usize,
    },

    #[error("hors domaine: {0}")]
    DomainError(String),
}

/// Erreur du pipeline complet (normalise -> analyse -> évalue -> contrôle du résultat).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Résultat NaN ou infini (division par zéro, asin(2), débordement…).
    #[error("résultat numérique invalide: {0}")]
    NumericInvalid(f64),
}

impl CalcError {
    /// Nom court de la catégorie (journaux).
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::Parse(ParseError::Syntax(_)) => "Syntax",
            CalcError::Parse(ParseError::DisallowedConstruct(_)) => "DisallowedConstruct",
            CalcError::Eval(EvalError::UnknownIdentifier(_)) => "UnknownIdentifier",
            CalcError::Eval(EvalError::ArityMismatch { .. }) => "ArityMismatch",
            CalcError::Eval(EvalError::DomainError(_)) => "DomainError",
            CalcError::NumericInvalid(_) => "NumericInvalid",
        }
    }
}
