use super::{InstallLayout, InstallationError};
use crate::options::{OptionMap, OptionValue};
use std::path::{Path, PathBuf};

pub const LIBEXEC_DIR_KEY: &str = "libexecDir";

/// Tools and scripts that must be installed directly under the libexec root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Artifact {
    Bgzip,
    Samtools,
    Tabix,
    AlignmentStats,
    LocusGraph,
    LocusGraphMerge,
    CandidateGenerator,
    LocusGraphStats,
    ChromDepth,
    SortVcf,
}

impl Artifact {
    /// Resolution order.
    pub const ALL: [Artifact; 10] = [
        Self::Bgzip,
        Self::Samtools,
        Self::Tabix,
        Self::AlignmentStats,
        Self::LocusGraph,
        Self::LocusGraphMerge,
        Self::CandidateGenerator,
        Self::LocusGraphStats,
        Self::ChromDepth,
        Self::SortVcf,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Bgzip => "bgzip",
            Self::Samtools => "samtools",
            Self::Tabix => "tabix",
            Self::AlignmentStats => "GetAlignmentStats",
            Self::LocusGraph => "EstimateSVLoci",
            Self::LocusGraphMerge => "MergeSVLoci",
            Self::CandidateGenerator => "GenerateSVCandidates",
            Self::LocusGraphStats => "SummarizeSVLoci",
            Self::ChromDepth => "getBamAvgChromDepth.py",
            Self::SortVcf => "sortVcf.py",
        }
    }

    pub fn option_key(self) -> &'static str {
        match self {
            Self::Bgzip => "bgzipBin",
            Self::Samtools => "samtoolsBin",
            Self::Tabix => "tabixBin",
            Self::AlignmentStats => "mantaStatsBin",
            Self::LocusGraph => "mantaGraphBin",
            Self::LocusGraphMerge => "mantaGraphMergeBin",
            Self::CandidateGenerator => "mantaHyGenBin",
            Self::LocusGraphStats => "mantaGraphStatsBin",
            Self::ChromDepth => "mantaChromDepth",
            Self::SortVcf => "mantaSortVcf",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Bgzip => "bgzip",
            Self::Samtools => "samtools",
            Self::Tabix => "tabix",
            Self::AlignmentStats => "alignment statistics tool",
            Self::LocusGraph => "SV locus graph estimation tool",
            Self::LocusGraphMerge => "SV locus graph merge tool",
            Self::CandidateGenerator => "SV candidate generation tool",
            Self::LocusGraphStats => "SV locus graph summary tool",
            Self::ChromDepth => "chromosome depth script",
            Self::SortVcf => "VCF sorting script",
        }
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Defaults derived from the installation layout. Every path in here was a
/// regular file when the struct was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowDefaults {
    pub libexec_dir: PathBuf,
    pub bgzip_bin: PathBuf,
    pub samtools_bin: PathBuf,
    pub tabix_bin: PathBuf,
    pub manta_stats_bin: PathBuf,
    pub manta_graph_bin: PathBuf,
    pub manta_graph_merge_bin: PathBuf,
    pub manta_hygen_bin: PathBuf,
    pub manta_graph_stats_bin: PathBuf,
    pub manta_chrom_depth: PathBuf,
    pub manta_sort_vcf: PathBuf,
}

impl WorkflowDefaults {
    pub fn resolve(layout: &InstallLayout) -> Result<Self, InstallationError> {
        let root = &layout.libexec_dir;
        if !root.is_dir() {
            return Err(InstallationError::RootNotDirectory {
                path: root.display().to_string(),
            });
        }
        if root.to_str().is_none() {
            return Err(InstallationError::NonUtf8Root {
                path: root.display().to_string(),
            });
        }
        tracing::info!(libexec_dir = %root.display(), "resolving workflow defaults");

        let require = |artifact: Artifact| -> Result<PathBuf, InstallationError> {
            let path = layout.artifact_path(artifact.file_name());
            if !path.is_file() {
                return Err(InstallationError::MissingArtifact {
                    artifact: artifact.description(),
                    path: path.display().to_string(),
                });
            }
            tracing::debug!(artifact = %artifact, path = %path.display(), "resolved artifact");
            Ok(path)
        };

        Ok(Self {
            libexec_dir: root.clone(),
            bgzip_bin: require(Artifact::Bgzip)?,
            samtools_bin: require(Artifact::Samtools)?,
            tabix_bin: require(Artifact::Tabix)?,
            manta_stats_bin: require(Artifact::AlignmentStats)?,
            manta_graph_bin: require(Artifact::LocusGraph)?,
            manta_graph_merge_bin: require(Artifact::LocusGraphMerge)?,
            manta_hygen_bin: require(Artifact::CandidateGenerator)?,
            manta_graph_stats_bin: require(Artifact::LocusGraphStats)?,
            manta_chrom_depth: require(Artifact::ChromDepth)?,
            manta_sort_vcf: require(Artifact::SortVcf)?,
        })
    }

    pub fn artifact_path(&self, artifact: Artifact) -> &Path {
        match artifact {
            Artifact::Bgzip => &self.bgzip_bin,
            Artifact::Samtools => &self.samtools_bin,
            Artifact::Tabix => &self.tabix_bin,
            Artifact::AlignmentStats => &self.manta_stats_bin,
            Artifact::LocusGraph => &self.manta_graph_bin,
            Artifact::LocusGraphMerge => &self.manta_graph_merge_bin,
            Artifact::CandidateGenerator => &self.manta_hygen_bin,
            Artifact::LocusGraphStats => &self.manta_graph_stats_bin,
            Artifact::ChromDepth => &self.manta_chrom_depth,
            Artifact::SortVcf => &self.manta_sort_vcf,
        }
    }

    pub fn to_option_map(&self) -> OptionMap {
        // `resolve` rejects non-UTF-8 roots and artifact names are ASCII.
        let path_value = |path: &Path| OptionValue::Text(path.to_string_lossy().into_owned());
        OptionMap::from_iter([
            (LIBEXEC_DIR_KEY.to_string(), path_value(&self.libexec_dir)),
            ("bgzipBin".to_string(), path_value(&self.bgzip_bin)),
            ("samtoolsBin".to_string(), path_value(&self.samtools_bin)),
            ("tabixBin".to_string(), path_value(&self.tabix_bin)),
            ("mantaStatsBin".to_string(), path_value(&self.manta_stats_bin)),
            ("mantaGraphBin".to_string(), path_value(&self.manta_graph_bin)),
            (
                "mantaGraphMergeBin".to_string(),
                path_value(&self.manta_graph_merge_bin),
            ),
            ("mantaHyGenBin".to_string(), path_value(&self.manta_hygen_bin)),
            (
                "mantaGraphStatsBin".to_string(),
                path_value(&self.manta_graph_stats_bin),
            ),
            (
                "mantaChromDepth".to_string(),
                path_value(&self.manta_chrom_depth),
            ),
            ("mantaSortVcf".to_string(), path_value(&self.manta_sort_vcf)),
        ])
    }
}
