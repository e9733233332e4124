//! Property-style tests for the subject label extractor and manifest naming.
//!
//! These run against the public API only.

use intake_core::{Manifest, SUBJECT_MARKER, extract_sub_identifier};

const LABELS: &[&str] = &["XYZ", "042", "P12_task", "a", "control01"];
const TAILS: &[&str] = &["-rest", "-ses-01_scan.nii.gz", ".edf", ".tar.gz", ""];

#[test]
fn test_label_is_recovered_for_every_tail() {
    for label in LABELS {
        for tail in TAILS {
            let file_name = format!("{SUBJECT_MARKER}{label}{tail}");
            assert_eq!(
                extract_sub_identifier(&file_name),
                *label,
                "file name: {file_name}"
            );
        }
    }
}

#[test]
fn test_prefix_before_marker_is_ignored() {
    for prefix in ["", "eeg_", "2024-01-01_", "a.b."] {
        let file_name = format!("{prefix}sub-042.edf");
        assert_eq!(extract_sub_identifier(&file_name), "042", "file name: {file_name}");
    }
}

#[test]
fn test_unmarked_names_pass_through() {
    for name in ["recording.wav", "sub_01.edf", "su-b-01", "README", "subject-01.nii"] {
        assert_eq!(extract_sub_identifier(name), name);
    }
}

#[test]
fn test_idempotent_on_unmarked_output() {
    let inputs = [
        "sub-042-ses-01_scan.nii.gz",
        "recording.wav",
        "sub-XYZ",
        "x_sub-",
        "data.sub-7.bin",
    ];
    for input in inputs {
        let once = extract_sub_identifier(input);
        if !once.contains(SUBJECT_MARKER) {
            assert_eq!(extract_sub_identifier(once), once, "input: {input}");
        }
    }
}

#[test]
fn test_manifest_entries_map_to_local_names() {
    let body = br#"{
        "data": [
            {"nodeId": "N:package:a", "fileName": "sub-042-ses-01_scan.nii.gz", "path": [], "url": "https://s3/a"},
            {"nodeId": "N:package:b", "fileName": "recording.wav", "path": ["raw"], "url": "https://s3/b"},
            {"nodeId": "N:package:c", "fileName": "sub-007.edf", "path": null, "url": "https://s3/c"}
        ]
    }"#;

    let manifest = Manifest::from_slice(body).unwrap();
    let names: Vec<_> = manifest.data.iter().map(|e| e.local_file_name()).collect();

    assert_eq!(names, vec!["042", "recording.wav", "007"]);
    assert!(manifest.data[2].path.is_empty());
}
