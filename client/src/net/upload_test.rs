use super::*;

#[test]
fn percent_handles_unknown_total() {
    assert_eq!(UploadProgress { loaded: 10, total: 0 }.percent(), 0);
}

#[test]
fn percent_floors_and_clamps() {
    assert_eq!(UploadProgress { loaded: 1, total: 3 }.percent(), 33);
    assert_eq!(UploadProgress { loaded: 3, total: 3 }.percent(), 100);
    assert_eq!(UploadProgress { loaded: 9, total: 3 }.percent(), 100);
}

#[test]
fn extension_is_lowercased() {
    assert_eq!(extension("Bracket.DXF"), Some("dxf".to_owned()));
    assert_eq!(extension("archive.tar.gz"), Some("gz".to_owned()));
}

#[test]
fn extension_requires_stem_and_suffix() {
    assert_eq!(extension("README"), None);
    assert_eq!(extension(".env"), None);
    assert_eq!(extension("trailing."), None);
}

#[test]
fn check_files_accepts_allowed_batch() {
    let files = vec![PickedFile::from_meta("gate.pdf", 2_000), PickedFile::from_meta("rail.step", 9_000)];
    assert_eq!(check_files(&files, DOCUMENT_EXTENSIONS), Ok(()));
}

#[test]
fn check_files_rejects_unknown_type() {
    let files = vec![PickedFile::from_meta("script.exe", 10)];
    assert_eq!(
        check_files(&files, DOCUMENT_EXTENSIONS),
        Err(FileRejection::UnsupportedType { name: "script.exe".into() })
    );
}

#[test]
fn check_files_rejects_oversized_file() {
    let files = vec![PickedFile::from_meta("photo.jpg", MAX_FILE_BYTES + 1)];
    let err = check_files(&files, IMAGE_EXTENSIONS).unwrap_err();
    assert_eq!(err.key(), "upload.too_large");
}

#[test]
fn check_files_rejects_too_many() {
    let files: Vec<_> = (0..=MAX_FILES).map(|i| PickedFile::from_meta(&format!("f{i}.pdf"), 1)).collect();
    assert_eq!(check_files(&files, DOCUMENT_EXTENSIONS), Err(FileRejection::TooMany { max: MAX_FILES }));
}

#[test]
fn image_extensions_exclude_cad_formats() {
    let files = vec![PickedFile::from_meta("part.dwg", 1)];
    assert!(check_files(&files, IMAGE_EXTENSIONS).is_err());
}

#[test]
fn display_size_picks_unit() {
    assert_eq!(display_size(512), "512 B");
    assert_eq!(display_size(2_048), "2.0 KB");
    assert_eq!(display_size(5 * 1024 * 1024 / 2), "2.5 MB");
}

#[test]
fn upload_form_collects_fields_and_files() {
    let form = UploadForm::new()
        .text("title", "Railing")
        .optional_text("notes", None)
        .optional_text("deadline", Some("2026-12-01".into()))
        .files("attachments", vec![PickedFile::from_meta("a.pdf", 1), PickedFile::from_meta("b.pdf", 2)]);
    assert_eq!(
        form.fields,
        vec![("title".to_owned(), "Railing".to_owned()), ("deadline".to_owned(), "2026-12-01".to_owned())]
    );
    assert_eq!(form.files.len(), 2);
    assert!(form.files.iter().all(|(name, _)| name == "attachments"));
}
