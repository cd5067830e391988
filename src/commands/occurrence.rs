use crate::{
    cli::OccurrenceArgs,
    commands::shared::{self, Args},
    frequency,
};
use anyhow::Result;
use std::path::Path;

impl Args for OccurrenceArgs {
    fn input_path(&self) -> &Path {
        &self.input_path
    }
    fn output_path(&self) -> &str {
        &self.output_path
    }
    fn mode_name(&self) -> &str {
        "occurrence"
    }
    fn with_reads(&self) -> bool {
        false
    }
}

pub fn occurrence(args: OccurrenceArgs) -> Result<()> {
    shared::run(&args, |observations| {
        Ok(frequency::count_occurrences(observations))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SharedArgs;
    use std::fs;

    fn args_for(dir: &Path, input: &str) -> OccurrenceArgs {
        let input_path = dir.join("allele_data.txt");
        fs::write(&input_path, input).unwrap();
        OccurrenceArgs {
            shared: SharedArgs {
                input_path,
                output_path: dir.join("freq.tsv").to_string_lossy().into_owned(),
            },
        }
    }

    #[test]
    fn test_occurrence_writes_sorted_counts() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(
            dir.path(),
            "Sample\tLocus\tASV\nS1\tL2\tA\nS1\tL1\tB\nS2\tL1\tA\nS3\tL1\tA\n",
        );
        occurrence(args.clone()).unwrap();
        assert_eq!(
            fs::read_to_string(&args.output_path).unwrap(),
            "Locus\tASV\tFreq\nL1\tA\t2\nL1\tB\t1\nL2\tA\t1\n"
        );
    }

    #[test]
    fn test_occurrence_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(dir.path(), "Locus\tASV\nL1\tA\nL1\tA\nL3\tC\nL2\tB\n");
        occurrence(args.clone()).unwrap();
        let first = fs::read(&args.output_path).unwrap();
        occurrence(args.clone()).unwrap();
        let second = fs::read(&args.output_path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_occurrence_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(dir.path(), "Locus\tASV\nL1\tA\n");
        fs::write(&args.output_path, "stale contents that are much longer than the result\n")
            .unwrap();
        occurrence(args.clone()).unwrap();
        assert_eq!(
            fs::read_to_string(&args.output_path).unwrap(),
            "Locus\tASV\tFreq\nL1\tA\t1\n"
        );
    }

    #[test]
    fn test_missing_asv_column_produces_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(dir.path(), "Locus\tAllele\nL1\tA\n");
        let err = occurrence(args.clone()).unwrap_err();
        assert!(err.to_string().contains("'ASV'"));
        assert!(!Path::new(&args.output_path).exists());
    }

    #[test]
    fn test_unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args_for(dir.path(), "Locus\tASV\nL1\tA\n");
        args.shared.output_path = dir.path().to_string_lossy().into_owned();
        let err = occurrence(args).unwrap_err();
        assert!(
            err.to_string().contains("Failed to create output file"),
            "{}",
            err
        );
    }

    #[test]
    fn test_input_is_validated_before_output_is_opened() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args_for(dir.path(), "Locus\nL1\n");
        args.shared.output_path = dir.path().to_string_lossy().into_owned();
        let err = occurrence(args).unwrap_err();
        assert!(err.to_string().contains("'ASV'"), "{}", err);
    }
}
