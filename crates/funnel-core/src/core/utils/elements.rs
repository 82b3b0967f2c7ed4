use phf::{Map, Set, phf_map, phf_set};

// Standard atomic weights (IUPAC, abridged), keyed by upper-cased symbol.
static ATOMIC_MASSES: Map<&'static str, f64> = phf_map! {
    "H" => 1.008, "D" => 2.014,
    "LI" => 6.94, "B" => 10.81, "C" => 12.011, "N" => 14.007, "O" => 15.999, "F" => 18.998,
    "NA" => 22.990, "MG" => 24.305, "AL" => 26.982, "SI" => 28.085, "P" => 30.974,
    "S" => 32.06, "CL" => 35.45, "K" => 39.098, "CA" => 40.078,
    "MN" => 54.938, "FE" => 55.845, "CO" => 58.933, "NI" => 58.693, "CU" => 63.546,
    "ZN" => 65.38, "SE" => 78.971, "BR" => 79.904, "I" => 126.904,
};

// Two-letter symbols that can be recognised from an atom name without ambiguity
// against common organic names (e.g. "CA" is alpha-carbon, not calcium).
static TWO_LETTER_FROM_NAME: Set<&'static str> = phf_set! {
    "CL", "BR", "ZN", "FE", "MG", "MN", "CU", "SE", "LI",
};

pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ATOMIC_MASSES
        .get(symbol.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Guesses an element symbol from an atom name such as "CA", "1HB2" or "CL3".
pub fn element_from_atom_name(atom_name: &str) -> String {
    let letters: String = atom_name
        .trim()
        .chars()
        .skip_while(|c| c.is_ascii_digit())
        .take_while(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if letters.len() >= 2 && TWO_LETTER_FROM_NAME.contains(&letters[..2]) {
        return letters[..2].to_string();
    }
    letters.chars().next().map(String::from).unwrap_or_default()
}

/// Element symbol from a DREIDING-style force-field type such as "C_3", "O_2" or "Cl".
pub fn element_from_force_field_type(ff_type: &str) -> String {
    ff_type
        .trim()
        .split('_')
        .next()
        .unwrap_or("")
        .to_ascii_uppercase()
}
