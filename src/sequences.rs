//! Utility code for working with nucleotide and amino acid sequences.

use rustc_hash::FxHashMap;

pub use crate::sequences::error::Error;

mod error {
    /// Error type for sequence operations.
    #[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        #[error("invalid 1-letter aminoacid: {0} at {1}")]
        InvalidOneLetterAminoAcid(String, usize),
        #[error("codon is undefined in codon table: {0}")]
        UndefinedCodon(String),
    }
}

/// Remove the common prefix of `reference` and `alternative`.
///
/// Returns the number of trimmed characters and the trimmed strings.
pub fn trim_common_prefixes(reference: &str, alternative: &str) -> (usize, String, String) {
    let trim = reference
        .bytes()
        .zip(alternative.bytes())
        .take_while(|(r, a)| r == a)
        .count();

    (
        trim,
        reference[trim..].to_string(),
        alternative[trim..].to_string(),
    )
}

/// Remove the common suffix of `reference` and `alternative`.
///
/// Returns the number of trimmed characters and the trimmed strings.
pub fn trim_common_suffixes(reference: &str, alternative: &str) -> (usize, String, String) {
    let trim = reference
        .bytes()
        .rev()
        .zip(alternative.bytes().rev())
        .take_while(|(r, a)| r == a)
        .count();

    (
        trim,
        reference[..(reference.len() - trim)].to_string(),
        alternative[..(alternative.len() - trim)].to_string(),
    )
}

/// Reverse complementing shortcut.
pub fn revcomp(seq: &str) -> String {
    bio::alphabets::dna::revcomp(seq.as_bytes())
        .into_iter()
        .map(char::from)
        .collect()
}

/// Standard genetic code, indexed by the 2-bit encoding of the codon (`A=0, C=1, G=2, T=3`).
const CODON_2BIT_TO_AA1: &[u8; 64] =
    b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// IUPAC codes that make a codon ambiguous.
static IUPAC_AMBIGUITY_CODES: &[u8] = b"BDHVNRYSWKMbdhvnryswkm";

/// Pairs of 3-letter and 1-letter amino acid codes.
pub static AA3_TO_AA1_VEC: &[(&str, &str)] = &[
    ("Ala", "A"),
    ("Arg", "R"),
    ("Asn", "N"),
    ("Asp", "D"),
    ("Cys", "C"),
    ("Gln", "Q"),
    ("Glu", "E"),
    ("Gly", "G"),
    ("His", "H"),
    ("Ile", "I"),
    ("Leu", "L"),
    ("Lys", "K"),
    ("Met", "M"),
    ("Phe", "F"),
    ("Pro", "P"),
    ("Ser", "S"),
    ("Thr", "T"),
    ("Trp", "W"),
    ("Tyr", "Y"),
    ("Val", "V"),
    ("Xaa", "X"),
    ("Ter", "*"),
    ("Sec", "U"),
];

lazy_static::lazy_static! {
    static ref AA1_TO_AA3: FxHashMap<u8, &'static str> = AA3_TO_AA1_VEC
        .iter()
        .map(|(aa3, aa1)| (aa1.as_bytes()[0], *aa3))
        .collect();
}

fn base_to_2bit(c: u8) -> Option<usize> {
    match c.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Translate a single codon to its 1-letter amino acid.
///
/// Codons containing IUPAC ambiguity codes translate to `X`.
pub fn translate_codon(codon: &[u8]) -> Result<u8, Error> {
    let mut idx = 0;
    for c in codon.iter().take(3) {
        match base_to_2bit(*c) {
            Some(bits) => idx = (idx << 2) | bits,
            None if IUPAC_AMBIGUITY_CODES.contains(c) => return Ok(b'X'),
            None => {
                return Err(Error::UndefinedCodon(
                    String::from_utf8_lossy(codon).into_owned(),
                ))
            }
        }
    }
    if codon.len() != 3 {
        return Err(Error::UndefinedCodon(
            String::from_utf8_lossy(codon).into_owned(),
        ));
    }
    Ok(CODON_2BIT_TO_AA1[idx])
}

/// Translates a DNA or RNA sequence into a single-letter amino acid sequence.
///
/// Trailing bases that do not form a full codon are ignored.
pub fn translate_cds(seq: &str) -> Result<String, Error> {
    seq.as_bytes()
        .chunks_exact(3)
        .map(|codon| translate_codon(codon).map(char::from))
        .collect()
}

/// Converts string of 1-letter amino acids to 3-letter amino acids.
pub fn aa1_to_aa3(seq: &str) -> Result<String, Error> {
    let mut result = String::with_capacity(seq.len() * 3);
    for (i, aa1) in seq.bytes().enumerate() {
        let aa3 = AA1_TO_AA3
            .get(&aa1)
            .ok_or_else(|| Error::InvalidOneLetterAminoAcid(char::from(aa1).to_string(), i + 1))?;
        result.push_str(aa3);
    }
    Ok(result)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn suffix_trimming() {
        assert_eq!(
            trim_common_suffixes("", ""),
            (0, "".to_string(), "".to_string())
        );
        assert_eq!(
            trim_common_suffixes("", "C"),
            (0, "".to_string(), "C".to_string())
        );
        assert_eq!(
            trim_common_suffixes("A", "AA"),
            (1, "".to_string(), "A".to_string())
        );
        assert_eq!(
            trim_common_suffixes("AT", "AG"),
            (0, "AT".to_string(), "AG".to_string())
        );
        assert_eq!(
            trim_common_suffixes("ATCG", "AGCG"),
            (2, "AT".to_string(), "AG".to_string())
        );
    }

    #[test]
    fn prefix_trimming() {
        assert_eq!(
            trim_common_prefixes("", "C"),
            (0, "".to_string(), "C".to_string())
        );
        assert_eq!(
            trim_common_prefixes("TA", "GA"),
            (0, "TA".to_string(), "GA".to_string())
        );
        assert_eq!(
            trim_common_prefixes("CGTA", "CGGA"),
            (2, "TA".to_string(), "GA".to_string())
        );
    }

    #[test]
    fn revcomp_cases() {
        assert_eq!(revcomp(""), "");
        assert_eq!(revcomp("A"), "T");
        assert_eq!(revcomp("AG"), "CT");
        assert_eq!(revcomp("CGAG"), "CTCG");
    }

    #[test]
    fn translate_standard_code() -> Result<(), Error> {
        assert_eq!(translate_cds("")?, "");
        assert_eq!(translate_cds("ATGTAA")?, "M*");
        assert_eq!(translate_cds("TGGTGATAG")?, "W**");
        assert_eq!(translate_cds("AAAGCTCTGTTT")?, "KALF");
        // trailing partial codon is dropped
        assert_eq!(translate_cds("ATGGC")?, "M");
        assert_eq!(translate_cds("atgNNN")?, "MX");
        assert!(translate_cds("AT!").is_err());

        Ok(())
    }

    #[test]
    fn amino_acid_codes() -> Result<(), Error> {
        assert_eq!(aa1_to_aa3("")?, "");
        assert_eq!(aa1_to_aa3("MK*")?, "MetLysTer");
        assert_eq!(aa1_to_aa3("X")?, "Xaa");
        assert!(aa1_to_aa3("J").is_err());

        Ok(())
    }
}
