//! Configuration of the annotation engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Amino acid code to use in protein notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AminoAcidCode {
    /// E.g., `p.Lys11Ter`.
    #[default]
    ThreeLetter,
    /// E.g., `p.K11*`.
    OneLetter,
}

/// Which annotations to keep per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    #[default]
    AllTranscripts,
    HighestImpactOnly,
}

/// Configuration for the annotation builders and the annotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exonic bases next to an exon/intron boundary that count as splice region.
    pub splice_region_exon_bases: i32,
    /// Intronic bases next to an exon/intron boundary that count as splice region.
    pub splice_region_intron_bases: i32,
    /// Intronic bases forming the splice donor/acceptor site.
    pub splice_site_bases: i32,
    /// Distance from the transcript within which a variant is up- or downstream.
    pub upstream_downstream_length: i32,
    pub amino_acid_code: AminoAcidCode,
    pub report: ReportMode,
    /// Run the per-transcript builders on the rayon thread pool.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            splice_region_exon_bases: 3,
            splice_region_intron_bases: 8,
            splice_site_bases: 2,
            upstream_downstream_length: 5_000,
            amino_acid_code: AminoAcidCode::ThreeLetter,
            report: ReportMode::AllTranscripts,
            parallel: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file; missing keys take their default values.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, crate::data::Error> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| crate::data::Error::Io(path.as_ref().display().to_string(), e))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| crate::data::Error::Json(path.as_ref().display().to_string(), e))
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::{AminoAcidCode, Config, ReportMode};

    #[test]
    fn partial_json() -> Result<(), anyhow::Error> {
        let config: Config = serde_json::from_str(
            r#"{"splice_region_intron_bases": 6, "amino_acid_code": "one_letter"}"#,
        )?;

        assert_eq!(
            config,
            Config {
                splice_region_intron_bases: 6,
                amino_acid_code: AminoAcidCode::OneLetter,
                ..Default::default()
            }
        );

        Ok(())
    }

    #[test]
    fn from_file() -> Result<(), anyhow::Error> {
        let mut tmp = tempfile::NamedTempFile::new()?;
        writeln!(tmp, r#"{{"report": "highest_impact_only", "parallel": true}}"#)?;

        let config = Config::from_json_path(tmp.path())?;
        assert_eq!(config.report, ReportMode::HighestImpactOnly);
        assert!(config.parallel);
        assert_eq!(config.splice_site_bases, 2);

        Ok(())
    }
}
