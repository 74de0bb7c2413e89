use std::fs;
use std::path::{Path, PathBuf};

use flipvar_batch::{BatchConfig, BatchError, BatchSummary, ItemError, run_batch};
use flipvar_core::{MismatchPolicy, VariantError};
use flipvar_io::{BatchLayout, FlipIoError};
use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
    layout: BatchLayout,
}

impl Workspace {
    fn ids_file(&self, ids: &[&str]) -> PathBuf {
        let path = self.dir.path().join("ids.txt");
        fs::write(&path, ids.join("\n")).unwrap();
        path
    }

    fn add(&self, id: &str, variants: &str, fasta: &str) {
        let item = self.layout.item(id);
        fs::write(item.in_variants, variants).unwrap();
        fs::write(item.in_fasta, fasta).unwrap();
    }

    fn out_fasta(&self, id: &str) -> PathBuf {
        self.layout.item(id).out_fasta
    }

    fn out_variants(&self, id: &str) -> PathBuf {
        self.layout.item(id).out_variants
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let layout = BatchLayout::new(
        root.join("var"),
        root.join("fasta"),
        root.join("out").join("var"),
        root.join("out").join("fasta"),
    );
    fs::create_dir_all(&layout.variant_dir).unwrap();
    fs::create_dir_all(&layout.fasta_dir).unwrap();

    Workspace { dir, layout }
}

fn get_test_path(file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data")
        .join(file_name)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[rstest]
fn test_fixture_batch() {
    let out = tempfile::tempdir().unwrap();
    let layout = BatchLayout::new(
        get_test_path("var"),
        get_test_path("fasta"),
        out.path().join("var"),
        out.path().join("fasta"),
    );
    let config = BatchConfig::new(get_test_path("ids.txt"), layout);

    let summary = run_batch(&config).unwrap();

    assert_eq!(
        summary,
        BatchSummary {
            items: 2,
            records: 2,
            applied: 2,
            skipped: 1
        }
    );
    assert_eq!(
        read(&out.path().join("fasta/seq1.fasta")),
        ">seq1 toy protein\nMGGK\n"
    );
    assert_eq!(read(&out.path().join("var/seq1.var")), "G2A\n");
    assert_eq!(read(&out.path().join("fasta/seq2.fasta")), ">seq2\nMGGK\n");
    assert_eq!(read(&out.path().join("var/seq2.var")), "G2A\n");
}

#[rstest]
fn test_creates_output_dirs(workspace: Workspace) {
    workspace.add("seq1", "A2G\n", ">seq1\nMAGK\n");
    let config = BatchConfig::new(workspace.ids_file(&["seq1"]), workspace.layout.clone());

    run_batch(&config).unwrap();

    assert!(workspace.layout.out_fasta_dir.is_dir());
    assert!(workspace.layout.out_variant_dir.is_dir());
    assert_eq!(read(&workspace.out_fasta("seq1")), ">seq1\nMGGK\n");
}

#[rstest]
fn test_existing_output_dirs_are_kept(workspace: Workspace) {
    workspace.add("seq1", "A2G\n", ">seq1\nMAGK\n");
    fs::create_dir_all(&workspace.layout.out_variant_dir).unwrap();
    let unrelated = workspace.layout.out_variant_dir.join("other.var");
    fs::write(&unrelated, "W5C\n").unwrap();
    let config = BatchConfig::new(workspace.ids_file(&["seq1"]), workspace.layout.clone());

    run_batch(&config).unwrap();
    run_batch(&config).unwrap();

    assert_eq!(read(&unrelated), "W5C\n");
    assert_eq!(read(&workspace.out_variants("seq1")), "G2A\n");
}

#[rstest]
fn test_missing_variant_file_stops_batch(workspace: Workspace) {
    workspace.add("seq0", "A2G\n", ">seq0\nMAGK\n");
    fs::write(workspace.layout.item("seq1").in_fasta, ">seq1\nMAGK\n").unwrap();
    workspace.add("seq2", "A2G\n", ">seq2\nMAGK\n");
    let config = BatchConfig::new(
        workspace.ids_file(&["seq0", "seq1", "seq2"]),
        workspace.layout.clone(),
    );

    let err = run_batch(&config).unwrap_err();

    assert_eq!(err.sequence_id(), Some("seq1"));
    assert!(matches!(
        err,
        BatchError::Item {
            source: ItemError::Io(FlipIoError::NotFound(_)),
            ..
        }
    ));
    assert!(workspace.out_fasta("seq0").exists());
    assert!(!workspace.out_fasta("seq1").exists());
    assert!(!workspace.out_fasta("seq2").exists());
    assert!(!workspace.out_variants("seq2").exists());
}

#[rstest]
fn test_malformed_variant_stops_batch(workspace: Workspace) {
    workspace.add("seq1", "123\n", ">seq1\nMAGK\n");
    let config = BatchConfig::new(workspace.ids_file(&["seq1"]), workspace.layout.clone());

    let err = run_batch(&config).unwrap_err();

    match err {
        BatchError::Item {
            id,
            source: ItemError::Io(FlipIoError::Variant { line, source, .. }),
        } => {
            assert_eq!(id, "seq1");
            assert_eq!(line, 1);
            assert!(matches!(source, VariantError::Malformed { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case(0)]
#[case(5)]
fn test_out_of_range_stops_batch(workspace: Workspace, #[case] position: usize) {
    // position 0 never parses, so it surfaces as a malformed line
    workspace.add("seq1", &format!("K{position}R\n"), ">seq1\nMAGK\n");
    let config = BatchConfig::new(workspace.ids_file(&["seq1"]), workspace.layout.clone());

    let err = run_batch(&config).unwrap_err();

    match (position, err) {
        (0, BatchError::Item { source, .. }) => {
            assert!(matches!(source, ItemError::Io(FlipIoError::Variant { .. })))
        }
        (_, BatchError::Item { source, .. }) => assert!(matches!(
            source,
            ItemError::Variant(VariantError::PositionOutOfRange { length: 4, .. })
        )),
        (_, other) => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn test_strict_policy_stops_batch(workspace: Workspace) {
    workspace.add("seq1", "A2G\nX3Q\n", ">seq1\nMAGK\n");
    let config = BatchConfig::new(workspace.ids_file(&["seq1"]), workspace.layout.clone())
        .with_policy(MismatchPolicy::Abort);

    let err = run_batch(&config).unwrap_err();

    assert!(matches!(
        err,
        BatchError::Item {
            source: ItemError::Variant(VariantError::ResidueMismatch { observed: 'G', .. }),
            ..
        }
    ));
    assert!(!workspace.out_fasta("seq1").exists());
}

#[rstest]
fn test_missing_id_list(workspace: Workspace) {
    let config = BatchConfig::new(workspace.dir.path().join("nope.txt"), workspace.layout.clone());

    let err = run_batch(&config).unwrap_err();

    assert!(matches!(err, BatchError::InputList(FlipIoError::NotFound(_))));
    assert!(!workspace.layout.out_fasta_dir.exists());
}

#[rstest]
fn test_empty_id_list(workspace: Workspace) {
    let config = BatchConfig::new(workspace.ids_file(&[]), workspace.layout.clone());

    let summary = run_batch(&config).unwrap();

    assert_eq!(summary, BatchSummary::default());
}

#[rstest]
fn test_parallel_matches_sequential(workspace: Workspace) {
    let ids: Vec<String> = (0..20).map(|i| format!("seq{i}")).collect();
    for (i, id) in ids.iter().enumerate() {
        let variants = if i % 3 == 0 { "A2G\nX3Q\n" } else { "A2G\nK4R\n" };
        workspace.add(id, variants, &format!(">{id}\nMAGK\n"));
    }
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let ids_file = workspace.ids_file(&id_refs);

    let sequential = BatchConfig::new(&ids_file, workspace.layout.clone());
    let sequential_summary = run_batch(&sequential).unwrap();
    let sequential_out: Vec<(String, String)> = ids
        .iter()
        .map(|id| (read(&workspace.out_fasta(id)), read(&workspace.out_variants(id))))
        .collect();

    fs::remove_dir_all(workspace.dir.path().join("out")).unwrap();

    let parallel = sequential.clone().with_parallel(true);
    let parallel_summary = run_batch(&parallel).unwrap();
    let parallel_out: Vec<(String, String)> = ids
        .iter()
        .map(|id| (read(&workspace.out_fasta(id)), read(&workspace.out_variants(id))))
        .collect();

    assert_eq!(parallel_summary, sequential_summary);
    assert_eq!(parallel_out, sequential_out);
    assert_eq!(sequential_summary.skipped, 7);
}

#[rstest]
fn test_parallel_still_fails(workspace: Workspace) {
    workspace.add("seq0", "A2G\n", ">seq0\nMAGK\n");
    workspace.add("seq1", "A2G\n", "");
    let config = BatchConfig::new(workspace.ids_file(&["seq0", "seq1"]), workspace.layout.clone())
        .with_parallel(true);

    let err = run_batch(&config).unwrap_err();

    assert!(matches!(
        err,
        BatchError::Item {
            source: ItemError::Io(FlipIoError::NoRecords(_)),
            ..
        }
    ));
}
