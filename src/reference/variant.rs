//! Variant descriptions: simple replacements and structural variants.

use std::{fmt::Display, sync::Arc};

use super::{Error, GenomeInterval, GenomePosition, ReferenceDictionary, Strand};
use crate::sequences::{revcomp, trim_common_prefixes, trim_common_suffixes};

lazy_static::lazy_static! {
    static ref LITERAL_ALLELE: regex::Regex = regex::Regex::new("^[ACGTNacgtn]*$").unwrap();
}

/// Whether `allele` is a symbolic allele rather than a literal sequence.
///
/// Symbolic alleles are longer than one character and either enclosed in angle brackets
/// (`<DEL>`), single breakends (`.A`, `A.`), or mated breakends (`A[1:123[`).
pub fn is_symbolic_allele(allele: &str) -> bool {
    allele.len() > 1
        && (allele.starts_with('<')
            || allele.ends_with('>')
            || allele.starts_with('.')
            || allele.ends_with('.')
            || allele.contains('[')
            || allele.contains(']'))
}

fn check_literal_allele(allele: &str) -> Result<(), Error> {
    if is_symbolic_allele(allele) {
        Err(Error::UnexpectedSymbolicAllele(allele.to_string()))
    } else if !LITERAL_ALLELE.is_match(allele) {
        Err(Error::MalformedAllele(allele.to_string()))
    } else {
        Ok(())
    }
}

/// Shape of a simple variant after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleKind {
    /// Single-nucleotide variant.
    Snv,
    /// Multi-nucleotide variant of equal length.
    Mnv,
    /// Pure insertion; the reference allele is empty.
    Insertion,
    /// Pure deletion; the alternative allele is empty.
    Deletion,
    /// Replacement of bases by bases of a different count.
    BlockSubstitution,
}

/// Simple replacement of `reference` by `alternative` at `pos`.
///
/// Alleles are stored trimmed of their common suffix, then of their common prefix; `pos` is
/// moved past the trimmed prefix.  This is not left-normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeVariant {
    pos: GenomePosition,
    reference: String,
    alternative: String,
}

impl GenomeVariant {
    pub fn new(pos: GenomePosition, reference: &str, alternative: &str) -> Result<Self, Error> {
        check_literal_allele(reference)?;
        check_literal_allele(alternative)?;
        if pos.pos() + reference.len() as i32 > pos.chr_len() {
            return Err(Error::PositionOutOfRange(
                pos.chr_name().to_string(),
                pos.pos() + reference.len() as i32,
                pos.chr_len(),
            ));
        }

        let (_, reference, alternative) = trim_common_suffixes(reference, alternative);
        let (prefix, reference, alternative) = trim_common_prefixes(&reference, &alternative);
        if reference.is_empty() && alternative.is_empty() {
            return Err(Error::MalformedAllele(
                "reference and alternative allele are identical".to_string(),
            ));
        }
        let pos = pos.shifted(prefix as i32);

        Ok(Self {
            pos,
            reference: reference.to_uppercase(),
            alternative: alternative.to_uppercase(),
        })
    }

    /// Construct on the forward strand from a contig name and a zero-based position.
    ///
    /// Unlike [`GenomeVariant::new`], unknown contigs and out-of-range positions are data
    /// errors rather than panics.
    pub fn from_contig(
        ref_dict: Arc<ReferenceDictionary>,
        contig: &str,
        pos: i32,
        reference: &str,
        alternative: &str,
    ) -> Result<Self, Error> {
        let chr = ref_dict.contig_id(contig)?;
        let chr_len = ref_dict.contig_length(chr)?;
        if pos < 0 || pos + reference.len() as i32 > chr_len {
            return Err(Error::PositionOutOfRange(contig.to_string(), pos, chr_len));
        }
        Self::new(
            GenomePosition::new(ref_dict, Strand::Forward, chr, pos),
            reference,
            alternative,
        )
    }

    pub fn pos(&self) -> &GenomePosition {
        &self.pos
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn alternative(&self) -> &str {
        &self.alternative
    }

    /// Affected reference bases; empty for insertions.
    pub fn interval(&self) -> GenomeInterval {
        GenomeInterval::new(&self.pos, self.reference.len() as i32)
    }

    pub fn kind(&self) -> SimpleKind {
        match (self.reference.len(), self.alternative.len()) {
            (0, _) => SimpleKind::Insertion,
            (_, 0) => SimpleKind::Deletion,
            (1, 1) => SimpleKind::Snv,
            (r, a) if r == a => SimpleKind::Mnv,
            _ => SimpleKind::BlockSubstitution,
        }
    }

    /// The same variant on `strand`, with reverse-complemented alleles if the strand changes.
    pub fn with_strand(&self, strand: Strand) -> Self {
        if strand == self.pos.strand() {
            return self.clone();
        }
        let interval = self.interval().with_strand(strand);
        Self {
            pos: interval.start_pos(),
            reference: revcomp(&self.reference),
            alternative: revcomp(&self.alternative),
        }
    }
}

/// Kind of a structural variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SvKind {
    #[strum(serialize = "structural deletion")]
    Deletion,
    #[strum(serialize = "structural insertion")]
    Insertion,
    #[strum(serialize = "inversion")]
    Inversion,
    #[strum(serialize = "translocation")]
    Translocation,
}

/// Confidence interval around a breakpoint as signed deltas, e.g. `(-10, 10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfidenceInterval {
    pub left: i32,
    pub right: i32,
}

impl ConfidenceInterval {
    pub fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }
}

/// Structural variant with two breakpoints and confidence intervals around each.
///
/// Insertions have a single breakpoint (`pos2 == pos`); translocations may have their second
/// breakpoint on another contig.  Breakpoints are always on the forward strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralVariant {
    kind: SvKind,
    pos: GenomePosition,
    pos_ci: ConfidenceInterval,
    pos2: GenomePosition,
    pos2_ci: ConfidenceInterval,
    reference: String,
    alternative: String,
}

impl StructuralVariant {
    fn new(
        kind: SvKind,
        pos: GenomePosition,
        pos_ci: ConfidenceInterval,
        pos2: GenomePosition,
        pos2_ci: ConfidenceInterval,
        reference: &str,
        alternative: &str,
    ) -> Result<Self, Error> {
        if pos.strand() != Strand::Forward {
            return Err(Error::NotForwardStrand(pos.to_string()));
        }
        if pos2.strand() != Strand::Forward {
            return Err(Error::NotForwardStrand(pos2.to_string()));
        }
        if kind == SvKind::Deletion
            && is_symbolic_allele(alternative)
            && !reference.eq_ignore_ascii_case("N")
        {
            return Err(Error::SymbolicAltRequiresN(
                reference.to_string(),
                alternative.to_string(),
            ));
        }
        if kind != SvKind::Translocation && pos.chr() != pos2.chr() {
            return Err(Error::BreakpointsOnDifferentContigs(
                pos.to_string(),
                pos2.to_string(),
            ));
        }
        Ok(Self {
            kind,
            pos,
            pos_ci,
            pos2,
            pos2_ci,
            reference: reference.to_string(),
            alternative: alternative.to_string(),
        })
    }

    pub fn kind(&self) -> SvKind {
        self.kind
    }

    pub fn pos(&self) -> &GenomePosition {
        &self.pos
    }

    pub fn pos_ci(&self) -> ConfidenceInterval {
        self.pos_ci
    }

    pub fn pos2(&self) -> &GenomePosition {
        &self.pos2
    }

    pub fn pos2_ci(&self) -> ConfidenceInterval {
        self.pos2_ci
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn alternative(&self) -> &str {
        &self.alternative
    }

    /// Whether both breakpoints are on one contig and delimit one affected segment.
    pub fn is_linear(&self) -> bool {
        matches!(self.kind, SvKind::Deletion | SvKind::Inversion)
    }

    /// Interval between `pos + delta_left` and `pos2 + delta_right`, clamped to the contig.
    fn span(&self, delta_left: i32, delta_right: i32) -> GenomeInterval {
        let chr_len = self.pos.chr_len();
        let a = (self.pos.pos() + delta_left).clamp(0, chr_len);
        let b = if self.kind == SvKind::Translocation {
            (self.pos.pos() + delta_right.max(delta_left)).clamp(0, chr_len)
        } else {
            (self.pos2.pos() + delta_right).clamp(0, chr_len)
        };
        GenomeInterval::from_offsets(
            self.pos.ref_dict().clone(),
            Strand::Forward,
            self.pos.chr(),
            a.min(b),
            a.max(b),
        )
    }

    /// Interval around the first breakpoint expanded by its confidence interval.
    ///
    /// Empty for a precise breakpoint.
    pub fn outer_interval1(&self) -> GenomeInterval {
        around(&self.pos, self.pos_ci)
    }

    /// Interval around the second breakpoint expanded by its confidence interval.
    pub fn outer_interval2(&self) -> GenomeInterval {
        around(&self.pos2, self.pos2_ci)
    }
}

/// `pos` expanded by `ci`, clamped to the contig.
fn around(pos: &GenomePosition, ci: ConfidenceInterval) -> GenomeInterval {
    let chr_len = pos.chr_len();
    let a = (pos.pos() + ci.left).clamp(0, chr_len);
    let b = (pos.pos() + ci.right).clamp(0, chr_len);
    GenomeInterval::from_offsets(
        pos.ref_dict().clone(),
        Strand::Forward,
        pos.chr(),
        a.min(b),
        a.max(b),
    )
}

/// Normalized description of a variant, of any supported shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantDescription {
    Simple(GenomeVariant),
    SvDeletion(StructuralVariant),
    SvInsertion(StructuralVariant),
    SvInversion(StructuralVariant),
    SvTranslocation(StructuralVariant),
}

impl From<GenomeVariant> for VariantDescription {
    fn from(value: GenomeVariant) -> Self {
        VariantDescription::Simple(value)
    }
}

impl VariantDescription {
    /// Deletion of the bases between `pos` and `pos2`.
    pub fn sv_deletion(
        pos: GenomePosition,
        pos_ci: ConfidenceInterval,
        pos2: GenomePosition,
        pos2_ci: ConfidenceInterval,
        reference: &str,
        alternative: &str,
    ) -> Result<Self, Error> {
        StructuralVariant::new(
            SvKind::Deletion,
            pos,
            pos_ci,
            pos2,
            pos2_ci,
            reference,
            alternative,
        )
        .map(VariantDescription::SvDeletion)
    }

    /// Insertion of unknown or long sequence at `pos`.
    pub fn sv_insertion(
        pos: GenomePosition,
        pos_ci: ConfidenceInterval,
        reference: &str,
        alternative: &str,
    ) -> Result<Self, Error> {
        StructuralVariant::new(
            SvKind::Insertion,
            pos.clone(),
            pos_ci,
            pos,
            pos_ci,
            reference,
            alternative,
        )
        .map(VariantDescription::SvInsertion)
    }

    /// Inversion of the bases between `pos` and `pos2`.
    pub fn sv_inversion(
        pos: GenomePosition,
        pos_ci: ConfidenceInterval,
        pos2: GenomePosition,
        pos2_ci: ConfidenceInterval,
        reference: &str,
        alternative: &str,
    ) -> Result<Self, Error> {
        StructuralVariant::new(
            SvKind::Inversion,
            pos,
            pos_ci,
            pos2,
            pos2_ci,
            reference,
            alternative,
        )
        .map(VariantDescription::SvInversion)
    }

    /// Novel adjacency between `pos` and `pos2`, possibly on different contigs.
    pub fn sv_translocation(
        pos: GenomePosition,
        pos_ci: ConfidenceInterval,
        pos2: GenomePosition,
        pos2_ci: ConfidenceInterval,
        reference: &str,
        alternative: &str,
    ) -> Result<Self, Error> {
        StructuralVariant::new(
            SvKind::Translocation,
            pos,
            pos_ci,
            pos2,
            pos2_ci,
            reference,
            alternative,
        )
        .map(VariantDescription::SvTranslocation)
    }

    fn first_pos(&self) -> &GenomePosition {
        match self {
            VariantDescription::Simple(v) => v.pos(),
            VariantDescription::SvDeletion(sv)
            | VariantDescription::SvInsertion(sv)
            | VariantDescription::SvInversion(sv)
            | VariantDescription::SvTranslocation(sv) => sv.pos(),
        }
    }

    /// The structural variant, if this is one.
    pub fn structural(&self) -> Option<&StructuralVariant> {
        match self {
            VariantDescription::Simple(_) => None,
            VariantDescription::SvDeletion(sv)
            | VariantDescription::SvInsertion(sv)
            | VariantDescription::SvInversion(sv)
            | VariantDescription::SvTranslocation(sv) => Some(sv),
        }
    }

    pub fn chr(&self) -> usize {
        self.first_pos().chr()
    }

    pub fn chr_name(&self) -> &str {
        self.first_pos().chr_name()
    }

    pub fn ref_dict(&self) -> &Arc<ReferenceDictionary> {
        self.first_pos().ref_dict()
    }

    /// Zero-based position of the (first) breakpoint.
    pub fn pos(&self) -> i32 {
        self.first_pos().pos()
    }

    pub fn strand(&self) -> Strand {
        self.first_pos().strand()
    }

    pub fn reference(&self) -> &str {
        match self {
            VariantDescription::Simple(v) => v.reference(),
            _ => self.structural().map(|sv| sv.reference()).unwrap_or_default(),
        }
    }

    pub fn alternative(&self) -> &str {
        match self {
            VariantDescription::Simple(v) => v.alternative(),
            _ => self.structural().map(|sv| sv.alternative()).unwrap_or_default(),
        }
    }

    /// Number of reference bases, `-1` if not linear.
    pub fn ref_length(&self) -> i32 {
        match self {
            VariantDescription::Simple(v) => v.reference().len() as i32,
            VariantDescription::SvDeletion(_) | VariantDescription::SvInversion(_) => {
                self.mid_interval().length()
            }
            VariantDescription::SvInsertion(_) => 0,
            VariantDescription::SvTranslocation(_) => -1,
        }
    }

    /// Number of alternative bases, `-1` if not linear or unknown.
    pub fn alt_length(&self) -> i32 {
        match self {
            VariantDescription::Simple(v) => v.alternative().len() as i32,
            VariantDescription::SvDeletion(_) => 0,
            VariantDescription::SvInversion(_) => self.mid_interval().length(),
            VariantDescription::SvInsertion(_) | VariantDescription::SvTranslocation(_) => -1,
        }
    }

    /// The reported interval, without confidence intervals.
    pub fn mid_interval(&self) -> GenomeInterval {
        match self {
            VariantDescription::Simple(v) => v.interval(),
            _ => self
                .structural()
                .map(|sv| sv.span(0, 0))
                .unwrap_or_else(|| self.first_pos_interval()),
        }
    }

    /// The interval contracted by the confidence intervals.
    pub fn inner_interval(&self) -> GenomeInterval {
        match self.structural() {
            None => self.mid_interval(),
            Some(sv) if sv.kind == SvKind::Deletion || sv.kind == SvKind::Inversion => {
                let inner_begin = sv.pos.pos() + sv.pos_ci.right;
                let inner_end = sv.pos2.pos() + sv.pos2_ci.left;
                if inner_begin > inner_end {
                    // confidence intervals overlap, no base is certainly affected
                    let mid = inner_begin.min(sv.pos2.pos()).clamp(0, sv.pos.chr_len());
                    GenomeInterval::from_offsets(
                        sv.pos.ref_dict().clone(),
                        Strand::Forward,
                        sv.pos.chr(),
                        mid,
                        mid,
                    )
                } else {
                    sv.span(sv.pos_ci.right, sv.pos2_ci.left)
                }
            }
            Some(sv) => sv.span(0, 0),
        }
    }

    /// The interval expanded by the confidence intervals.
    pub fn outer_interval(&self) -> GenomeInterval {
        match self.structural() {
            None => self.mid_interval(),
            Some(sv) if sv.kind == SvKind::Deletion || sv.kind == SvKind::Inversion => {
                sv.span(sv.pos_ci.left, sv.pos2_ci.right)
            }
            Some(sv) => sv.span(sv.pos_ci.left, sv.pos_ci.right),
        }
    }

    fn first_pos_interval(&self) -> GenomeInterval {
        GenomeInterval::new(self.first_pos(), 0)
    }

    /// The same variant described on `strand`.
    ///
    /// Structural variants cannot change strand yet; asking for their own strand returns a
    /// copy.
    pub fn with_strand(&self, strand: Strand) -> Result<Self, Error> {
        match self {
            VariantDescription::Simple(v) => Ok(VariantDescription::Simple(v.with_strand(strand))),
            _ if strand == self.strand() => Ok(self.clone()),
            _ => Err(Error::UnsupportedStrandChange(
                self.structural()
                    .map(|sv| sv.kind.to_string())
                    .unwrap_or_default(),
            )),
        }
    }

    /// Whether the alternative allele is symbolic.
    pub fn is_symbolic(&self) -> bool {
        is_symbolic_allele(self.alternative())
    }
}

impl Display for VariantDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantDescription::Simple(v) => write!(
                f,
                "{}:{}:{}>{}",
                v.pos().chr_name(),
                v.pos().pos(),
                v.reference(),
                v.alternative()
            ),
            _ => {
                let outer = self.outer_interval();
                write!(
                    f,
                    "{}:{}-{}:{}>{}",
                    self.chr_name(),
                    outer.begin(),
                    outer.end(),
                    self.reference(),
                    self.alternative()
                )
            }
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{
        is_symbolic_allele, ConfidenceInterval, GenomeVariant, SimpleKind, VariantDescription,
    };
    use crate::reference::{test_helpers::ref_dict, Error, GenomePosition, Strand};

    fn fwd(pos: i32) -> GenomePosition {
        GenomePosition::new(ref_dict(), Strand::Forward, 1, pos)
    }

    #[rstest]
    #[case(100, "A", "AGGG", 101, "", "GGG", SimpleKind::Insertion)]
    #[case(100, "A", "AA", 100, "", "A", SimpleKind::Insertion)]
    #[case(100, "ACGT", "AT", 101, "CG", "", SimpleKind::Deletion)]
    #[case(100, "CGTA", "CGGA", 102, "T", "G", SimpleKind::Snv)]
    #[case(100, "ACG", "ATT", 101, "CG", "TT", SimpleKind::Mnv)]
    #[case(100, "ACG", "ATTTG", 101, "C", "TTT", SimpleKind::BlockSubstitution)]
    #[case(100, "a", "g", 100, "A", "G", SimpleKind::Snv)]
    fn trimming(
        #[case] pos: i32,
        #[case] reference: &str,
        #[case] alternative: &str,
        #[case] expected_pos: i32,
        #[case] expected_ref: &str,
        #[case] expected_alt: &str,
        #[case] kind: SimpleKind,
    ) -> Result<(), anyhow::Error> {
        let v = GenomeVariant::new(fwd(pos), reference, alternative)?;

        assert_eq!(v.pos().pos(), expected_pos);
        assert_eq!(v.reference(), expected_ref);
        assert_eq!(v.alternative(), expected_alt);
        assert_eq!(v.kind(), kind);

        // trimming again does not change anything
        let again = GenomeVariant::new(v.pos().clone(), v.reference(), v.alternative())?;
        assert_eq!(again, v);

        Ok(())
    }

    #[test]
    fn invalid_alleles() {
        assert_eq!(
            GenomeVariant::new(fwd(100), "N", "<DEL>"),
            Err(Error::UnexpectedSymbolicAllele("<DEL>".to_string()))
        );
        assert_eq!(
            GenomeVariant::new(fwd(100), "A", "X"),
            Err(Error::MalformedAllele("X".to_string()))
        );
        assert!(GenomeVariant::new(fwd(100), "A", "A").is_err());
        assert_eq!(
            GenomeVariant::from_contig(ref_dict(), "chr7", 100, "A", "C"),
            Err(Error::UnknownContigName("chr7".to_string()))
        );
        assert!(matches!(
            GenomeVariant::from_contig(ref_dict(), "chr1", 10_000, "A", "C"),
            Err(Error::PositionOutOfRange(..))
        ));
    }

    #[test]
    fn simple_with_strand() -> Result<(), anyhow::Error> {
        let v = GenomeVariant::new(fwd(100), "AC", "G")?;
        let rev = v.with_strand(Strand::Reverse);

        assert_eq!(rev.pos().pos(), 10_000 - 102);
        assert_eq!(rev.reference(), "GT");
        assert_eq!(rev.alternative(), "C");
        assert_eq!(rev.with_strand(Strand::Forward), v);

        Ok(())
    }

    #[rstest]
    #[case("<DEL>", true)]
    #[case("<INS:ME>", true)]
    #[case("A[1:100[", true)]
    #[case("]1:100]A", true)]
    #[case(".A", true)]
    #[case("A.", true)]
    #[case("ACGT", false)]
    #[case("<", false)]
    #[case("", false)]
    fn symbolic_alleles(#[case] allele: &str, #[case] expected: bool) {
        assert_eq!(is_symbolic_allele(allele), expected);
    }

    #[test]
    fn sv_deletion_intervals() -> Result<(), anyhow::Error> {
        let sv = VariantDescription::sv_deletion(
            fwd(1_000),
            ConfidenceInterval::new(-10, 20),
            fwd(2_000),
            ConfidenceInterval::new(-30, 40),
            "N",
            "<DEL>",
        )?;

        let mid = sv.mid_interval();
        assert_eq!((mid.begin(), mid.end()), (1_000, 2_000));
        let outer = sv.outer_interval();
        assert_eq!((outer.begin(), outer.end()), (990, 2_040));
        let inner = sv.inner_interval();
        assert_eq!((inner.begin(), inner.end()), (1_020, 1_970));
        assert_eq!(sv.ref_length(), 1_000);
        assert_eq!(sv.alt_length(), 0);
        assert!(sv.is_symbolic());

        Ok(())
    }

    #[test]
    fn sv_deletion_requires_n_reference() {
        let result = VariantDescription::sv_deletion(
            fwd(1_000),
            ConfidenceInterval::default(),
            fwd(2_000),
            ConfidenceInterval::default(),
            "A",
            "<DEL>",
        );

        assert_eq!(
            result,
            Err(Error::SymbolicAltRequiresN("A".to_string(), "<DEL>".to_string()))
        );
        assert!(VariantDescription::sv_deletion(
            fwd(1_000),
            ConfidenceInterval::default(),
            fwd(2_000),
            ConfidenceInterval::default(),
            "n",
            "<DEL>",
        )
        .is_ok());
    }

    #[test]
    fn symbolic_alleles_with_reference_base() -> Result<(), anyhow::Error> {
        let other = GenomePosition::new(ref_dict(), Strand::Forward, 2, 100);
        let bnd = VariantDescription::sv_translocation(
            fwd(1_000),
            ConfidenceInterval::default(),
            other,
            ConfidenceInterval::default(),
            "G",
            "G]2:100]",
        )?;
        assert_eq!(bnd.reference(), "G");

        let ins =
            VariantDescription::sv_insertion(fwd(1_000), ConfidenceInterval::default(), "A", "<INS>")?;
        assert_eq!(ins.alternative(), "<INS>");

        let inv = VariantDescription::sv_inversion(
            fwd(1_000),
            ConfidenceInterval::default(),
            fwd(2_000),
            ConfidenceInterval::default(),
            "T",
            "<INV>",
        )?;
        assert_eq!(inv.ref_length(), 1_000);

        Ok(())
    }

    #[test]
    fn sv_breakpoint_checks() {
        let rev = GenomePosition::new(ref_dict(), Strand::Reverse, 1, 1_000);
        assert!(matches!(
            VariantDescription::sv_inversion(
                rev,
                ConfidenceInterval::default(),
                fwd(2_000),
                ConfidenceInterval::default(),
                "N",
                "<INV>",
            ),
            Err(Error::NotForwardStrand(_))
        ));

        let other = GenomePosition::new(ref_dict(), Strand::Forward, 2, 100);
        assert!(matches!(
            VariantDescription::sv_deletion(
                fwd(1_000),
                ConfidenceInterval::default(),
                other.clone(),
                ConfidenceInterval::default(),
                "N",
                "<DEL>",
            ),
            Err(Error::BreakpointsOnDifferentContigs(..))
        ));
        assert!(VariantDescription::sv_translocation(
            fwd(1_000),
            ConfidenceInterval::default(),
            other,
            ConfidenceInterval::default(),
            "N",
            "N[2:100[",
        )
        .is_ok());
    }

    #[test]
    fn sv_strand_change_is_unsupported() -> Result<(), anyhow::Error> {
        let sv = VariantDescription::sv_insertion(
            fwd(500),
            ConfidenceInterval::new(-5, 5),
            "N",
            "<INS>",
        )?;

        assert_eq!(sv.with_strand(Strand::Forward)?, sv);
        assert_eq!(
            sv.with_strand(Strand::Reverse),
            Err(Error::UnsupportedStrandChange(
                "structural insertion".to_string()
            ))
        );
        let outer = sv.outer_interval();
        assert_eq!((outer.begin(), outer.end()), (495, 505));
        let structural = sv.structural().unwrap();
        assert_eq!(structural.outer_interval1(), outer);
        assert_eq!(structural.outer_interval2(), outer);
        assert_eq!(sv.mid_interval().length(), 0);

        Ok(())
    }
}
