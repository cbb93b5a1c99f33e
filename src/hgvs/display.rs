//! Implementation of Display trait.
//!
//! Protein changes are rendered with 3-letter amino acid codes by default; the `AaCode`
//! newtype selects the code explicitly.

use std::fmt::Display;

use super::*;
use crate::{config::AminoAcidCode, sequences::aa1_to_aa3};

/// Newtype that renders a protein change with the given amino acid code.
pub struct AaCode<'a, T>(pub &'a T, pub AminoAcidCode);

/// Render 1-letter amino acids in the requested code.
fn aa(seq: &str, code: AminoAcidCode) -> String {
    match code {
        AminoAcidCode::OneLetter => seq.to_string(),
        AminoAcidCode::ThreeLetter => aa1_to_aa3(seq).unwrap_or_else(|_| seq.to_string()),
    }
}

impl Display for CdsPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cds_from == CdsFrom::End {
            write!(f, "*")?;
        }

        write!(f, "{}", self.base)?;

        if let Some(offset) = self.offset {
            if offset > 0 {
                write!(f, "+")?;
            }
            write!(f, "{offset}")?;
        }

        Ok(())
    }
}

impl Display for CdsInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.begin)?;
        if self.begin != self.end {
            write!(f, "_{}", self.end)?;
        }
        Ok(())
    }
}

impl Display for NaEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NaEdit::RefAlt {
                reference,
                alternative,
            } => match (reference.len(), alternative.len()) {
                (1, 1) => write!(f, "{reference}>{alternative}"),
                (_, _) => write!(f, "delins{alternative}"),
            },
            NaEdit::Del { .. } => write!(f, "del"),
            NaEdit::Ins { alternative } => write!(f, "ins{alternative}"),
            NaEdit::Dup { .. } => write!(f, "dup"),
            NaEdit::Inv => write!(f, "inv"),
        }
    }
}

impl Display for NaChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.coordinates {
            NaCoordinates::Coding => "c",
            NaCoordinates::NonCoding => "n",
        };
        write!(f, "{prefix}.{}{}", self.loc, self.edit)
    }
}

impl Display for UncertainLengthChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UncertainLengthChange::None => write!(f, ""),
            UncertainLengthChange::Unknown => write!(f, "?"),
            UncertainLengthChange::Known(count) => write!(f, "{count}"),
        }
    }
}

impl Display for AaCode<'_, ProtPos> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let AaCode(pos, code) = self;
        write!(f, "{}{}", aa(&pos.aa, *code), pos.number)
    }
}

impl Display for AaCode<'_, ProtInterval> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let AaCode(interval, code) = self;
        write!(f, "{}", AaCode(&interval.begin, *code))?;
        if interval.begin != interval.end {
            write!(f, "_{}", AaCode(&interval.end, *code))?;
        }
        Ok(())
    }
}

impl Display for AaCode<'_, ProteinEdit> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let AaCode(edit, code) = self;
        let code = *code;
        let ter = aa("*", code);
        match edit {
            ProteinEdit::Fs {
                alternative,
                length,
            } => {
                if let Some(alternative) = alternative {
                    write!(f, "{}", aa(alternative, code))?;
                }
                write!(f, "fs{ter}{length}")
            }
            ProteinEdit::Ext {
                aa_ext,
                ext_aa,
                change,
            } => {
                if let Some(aa_ext) = aa_ext {
                    write!(f, "{}", aa(aa_ext, code))?;
                }
                write!(f, "ext")?;
                if let Some(ext_aa) = ext_aa {
                    write!(f, "{}", aa(ext_aa, code))?;
                }
                write!(f, "{change}")
            }
            ProteinEdit::Subst { alternative } => write!(f, "{}", aa(alternative, code)),
            ProteinEdit::DelIns { alternative } => write!(f, "delins{}", aa(alternative, code)),
            ProteinEdit::Ins { alternative } => write!(f, "ins{}", aa(alternative, code)),
            ProteinEdit::Del => write!(f, "del"),
            ProteinEdit::Dup => write!(f, "dup"),
            ProteinEdit::Ident => write!(f, "="),
        }
    }
}

impl Display for AaCode<'_, ProtLocEdit> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let AaCode(loc_edit, code) = self;
        match loc_edit {
            ProtLocEdit::Ordinary { loc, edit } => {
                write!(f, "{}{}", AaCode(loc, *code), AaCode(edit, *code))
            }
            ProtLocEdit::NoChange => write!(f, "="),
            ProtLocEdit::NoProtein => write!(f, "0"),
            ProtLocEdit::Unknown => write!(f, "?"),
            ProtLocEdit::InitiationUncertain => write!(f, "{}1?", aa("M", *code)),
        }
    }
}

impl Display for ProtLocEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", AaCode(self, AminoAcidCode::ThreeLetter))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::AaCode;
    use crate::{
        config::AminoAcidCode,
        hgvs::{
            CdsFrom, CdsInterval, CdsPos, NaEdit, ProtInterval, ProtLocEdit, ProtPos, ProteinEdit,
            UncertainLengthChange,
        },
    };

    fn pos(aa: &str, number: i32) -> ProtPos {
        ProtPos {
            aa: aa.to_string(),
            number,
        }
    }

    fn at(aa: &str, number: i32, edit: ProteinEdit) -> ProtLocEdit {
        ProtLocEdit::Ordinary {
            loc: ProtInterval {
                begin: pos(aa, number),
                end: pos(aa, number),
            },
            edit,
        }
    }

    #[test]
    fn cds_pos() {
        assert_eq!(
            format!(
                "{}",
                CdsPos {
                    base: 42,
                    offset: Some(-3),
                    cds_from: CdsFrom::Start,
                }
            ),
            "42-3"
        );
        assert_eq!(
            format!(
                "{}",
                CdsInterval {
                    begin: CdsPos {
                        base: 7,
                        offset: None,
                        cds_from: CdsFrom::End,
                    },
                    end: CdsPos {
                        base: 9,
                        offset: Some(1),
                        cds_from: CdsFrom::End,
                    },
                }
            ),
            "*7_*9+1"
        );
    }

    #[test]
    fn na_edit() {
        assert_eq!(
            format!(
                "{}",
                NaEdit::RefAlt {
                    reference: "C".to_string(),
                    alternative: "T".to_string()
                }
            ),
            "C>T"
        );
        assert_eq!(
            format!(
                "{}",
                NaEdit::RefAlt {
                    reference: "CC".to_string(),
                    alternative: "T".to_string()
                }
            ),
            "delinsT"
        );
        assert_eq!(
            format!(
                "{}",
                NaEdit::Dup {
                    reference: "CC".to_string()
                }
            ),
            "dup"
        );
    }

    #[test]
    fn protein_three_letter() {
        let subst = at(
            "K",
            11,
            ProteinEdit::Subst {
                alternative: "*".to_string(),
            },
        );
        assert_eq!(format!("{}", subst), "Lys11Ter");

        let fs = at(
            "K",
            11,
            ProteinEdit::Fs {
                alternative: Some("E".to_string()),
                length: UncertainLengthChange::Known(5),
            },
        );
        assert_eq!(format!("{}", fs), "Lys11GlufsTer5");

        let ext = at(
            "*",
            70,
            ProteinEdit::Ext {
                aa_ext: Some("Q".to_string()),
                ext_aa: Some("*".to_string()),
                change: UncertainLengthChange::Unknown,
            },
        );
        assert_eq!(format!("{}", ext), "Ter70GlnextTer?");

        let ins = ProtLocEdit::Ordinary {
            loc: ProtInterval {
                begin: pos("K", 11),
                end: pos("W", 12),
            },
            edit: ProteinEdit::Ins {
                alternative: "RE".to_string(),
            },
        };
        assert_eq!(format!("{}", ins), "Lys11_Trp12insArgGlu");
        assert_eq!(
            format!("{}", ProtLocEdit::InitiationUncertain),
            "Met1?"
        );
    }

    #[test]
    fn protein_one_letter() {
        let subst = at(
            "K",
            11,
            ProteinEdit::Subst {
                alternative: "*".to_string(),
            },
        );
        assert_eq!(
            format!("{}", AaCode(&subst, AminoAcidCode::OneLetter)),
            "K11*"
        );
        let ident = at("L", 3, ProteinEdit::Ident);
        assert_eq!(
            format!("{}", AaCode(&ident, AminoAcidCode::OneLetter)),
            "L3="
        );
        assert_eq!(
            format!(
                "{}",
                AaCode(&ProtLocEdit::InitiationUncertain, AminoAcidCode::OneLetter)
            ),
            "M1?"
        );
    }
}
