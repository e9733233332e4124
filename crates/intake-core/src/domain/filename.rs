//! Filename-derived identifiers.
//!
//! Downloaded files are stored under a short label taken from the BIDS-style
//! subject entity in the original filename (`sub-<label>`).

/// Marker that introduces the subject label in a filename.
pub const SUBJECT_MARKER: &str = "sub-";

/// Separators that terminate the subject label.
const LABEL_TERMINATORS: [char; 2] = ['-', '.'];

/// Extract the subject label from a filename.
///
/// Returns the text between the first [`SUBJECT_MARKER`] and the next `-` or
/// `.`. When no terminator follows the marker, the whole remainder is
/// returned. Filenames without the marker are returned unchanged.
///
/// # Examples
///
/// ```
/// use intake_core::extract_sub_identifier;
///
/// assert_eq!(extract_sub_identifier("sub-042-ses-01_scan.nii.gz"), "042");
/// assert_eq!(extract_sub_identifier("recording.wav"), "recording.wav");
/// ```
pub fn extract_sub_identifier(file_name: &str) -> &str {
    let Some(marker_pos) = file_name.find(SUBJECT_MARKER) else {
        return file_name;
    };

    let rest = &file_name[marker_pos + SUBJECT_MARKER.len()..];
    rest.find(LABEL_TERMINATORS)
        .map_or(rest, |end| &rest[..end])
}
