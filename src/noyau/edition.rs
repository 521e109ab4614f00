// src/noyau/edition.rs
//
// Transformations purement textuelles du texte affiché (hors grammaire) :
// - toggle_sign : +/- sur le dernier nombre
// - touche_clavier : caractère tapé -> texte à ajouter (ou rien)

/// Caractères acceptés depuis le clavier physique (les lettres sont ignorées).
const TOUCHES_AUTORISEES: &str = "0123456789.+-*/()^%";

/// +/- : bascule un '-' juste avant la suite finale de chiffres/points.
///
/// "12+3" -> "12+-3" -> "12+3" ; "5" -> "-5" ; "" -> "".
/// Seule la suite CONTIGUË de [0-9.] en fin de texte compte comme "le dernier nombre" :
/// tout autre caractère (opérateur, espace, lettre de fonction) arrête le balayage.
pub fn toggle_sign(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Balayage en octets : chiffres, '.' et '-' sont ASCII ; un octet non ASCII arrête tout.
    let octets = text.as_bytes();
    let debut = octets
        .iter()
        .rposition(|b| !(b.is_ascii_digit() || *b == b'.'))
        .map_or(0, |i| i + 1);

    let mut out = String::with_capacity(text.len() + 1);
    if debut > 0 && octets[debut - 1] == b'-' {
        out.push_str(&text[..debut - 1]);
        out.push_str(&text[debut..]);
    } else {
        out.push_str(&text[..debut]);
        out.push('-');
        out.push_str(&text[debut..]);
    }
    out
}

/// Touche physique -> texte à ajouter à l’affichage.
/// '*', '/', '^' deviennent les glyphes d’affichage entourés d’espaces.
pub fn touche_clavier(c: char) -> Option<String> {
    if !TOUCHES_AUTORISEES.contains(c) {
        return None;
    }
    let s = match c {
        '*' => " × ".to_string(),
        '/' => " ÷ ".to_string(),
        '^' => " ^ ".to_string(),
        autre => autre.to_string(),
    };
    Some(s)
}
