// src/noyau/jetons.rs
//
// Normalisation (glyphes d’affichage -> opérateurs) puis tokenisation.
//
// Ordre de la normalisation (important) :
// 1) × -> *   ÷ -> /
// 2) ^ -> **
// 3) % -> /100  (substitution purement textuelle, caractère par caractère)
//
// La tokenisation reconnaît aussi des symboles hors liste blanche ('=', '[', '//', mots-clés…)
// pour que l’analyseur puisse les refuser comme "construction interdite" plutôt que
// comme simple faute de syntaxe.

use super::erreurs::ParseError;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Constantes + fonctions : la résolution se fait à l’évaluation.
    Ident(String),

    Plus,
    Minus,
    Star,
    DoubleStar, // **
    Slash,
    Percent, // modulo (le % d’affichage ne survit pas à normalize)

    LPar,
    RPar,
    Comma,
    Egal, // '=' seul : affectation ou argument nommé

    // Symbole ou mot reconnu mais jamais autorisé (attribut, indice, comparaison, mot-clé…)
    Interdit(String),
}

/// Mots réservés du langage hôte : jamais des identifiants.
const MOTS_CLES: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/* ------------------------ Normalisation ------------------------ */

/// Réécrit les glyphes d’affichage en opérateurs canoniques.
///
/// Exemple : "200 + 50%" -> "200 + 50/100" (pas "50 % de 200").
pub fn normalize(text: &str) -> String {
    let s = text.replace('×', "*").replace('÷', "/");
    let s = s.replace('^', "**");
    transform_percent(&s)
}

/// % -> "/100", gauche à droite, sans regarder le contexte ("%%" -> "/100/100").
fn transform_percent(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if c == '%' {
            out.push_str("/100");
        } else {
            out.push(c);
        }
    }
    out
}

/* ------------------------ Tokenisation ------------------------ */

/// Tokenize une chaîne DÉJÀ normalisée.
/// Supporte:
/// - nombres décimaux (12, 1.5, .5, 5., 1e3, 2.5E-2)
/// - opérateurs + - * ** / %
/// - parenthèses ( ) et virgule
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (sensibles à la casse)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ParseError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];
        let suivant = chars.get(i + 1).copied();

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombres (y compris ".5")
        if c.is_ascii_digit() || (c == '.' && suivant.is_some_and(|d| d.is_ascii_digit())) {
            let (v, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(v));
            i = fin;
            continue;
        }

        // Identifiants / mots-clés
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if MOTS_CLES.contains(&word.as_str()) {
                out.push(Tok::Interdit(word));
            } else {
                out.push(Tok::Ident(word));
            }
            continue;
        }

        // '.' après un nom ou une ')' : accès d’attribut ; ailleurs, littéral mal formé
        if c == '.' {
            if matches!(out.last(), Some(Tok::Ident(_) | Tok::RPar)) {
                out.push(Tok::Interdit(".".into()));
                i += 1;
                continue;
            }
            return Err(ParseError::Syntax("point isolé".into()));
        }

        // Opérateurs sur deux caractères d’abord
        let (tok, largeur) = match (c, suivant) {
            ('*', Some('*')) => (Tok::DoubleStar, 2),
            ('/', Some('/')) => (Tok::Interdit("//".into()), 2),
            ('=', Some('=')) => (Tok::Interdit("==".into()), 2),
            ('<' | '>' | '!', Some('=')) => (Tok::Interdit(format!("{c}=")), 2),

            ('+', _) => (Tok::Plus, 1),
            ('-', _) => (Tok::Minus, 1),
            ('*', _) => (Tok::Star, 1),
            ('/', _) => (Tok::Slash, 1),
            ('%', _) => (Tok::Percent, 1),
            ('(', _) => (Tok::LPar, 1),
            (')', _) => (Tok::RPar, 1),
            (',', _) => (Tok::Comma, 1),
            ('=', _) => (Tok::Egal, 1),

            (
                '[' | ']' | '{' | '}' | '<' | '>' | '!' | '@' | '~' | '&' | '|' | '^' | ':'
                | ';' | '\'' | '"',
                _,
            ) => (Tok::Interdit(c.to_string()), 1),

            _ => return Err(ParseError::Syntax(format!("caractère inattendu: '{c}'"))),
        };

        out.push(tok);
        i += largeur;
    }

    Ok(out)
}

/// Lit un littéral à partir de `start`. Retourne (valeur, index de fin).
///
/// Un littéral collé à une lettre, un chiffre ou un second point est refusé : "2e", "1.2.3", "3sin".
fn lire_nombre(chars: &[char], start: usize) -> Result<(f64, usize), ParseError> {
    let mut i = start;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    // Exposant seulement si suivi d’un chiffre (éventuellement signé)
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    let texte: String = chars[start..i].iter().collect();

    if let Some(&c) = chars.get(i) {
        if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            return Err(ParseError::Syntax(format!(
                "littéral invalide: '{texte}{c}'"
            )));
        }
    }

    let v = texte
        .parse::<f64>()
        .map_err(|_| ParseError::Syntax(format!("nombre invalide: '{texte}'")))?;
    Ok((v, i))
}

/// Format utilitaire (journaux) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::DoubleStar => "**".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Comma => ",".to_string(),
            Tok::Egal => "=".to_string(),
            Tok::Interdit(s) => format!("!{s}"),
        };
        out.push(s);
    }
    out.join(" ")
}
