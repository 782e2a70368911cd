//! Site archive
//!
//! Exactly two entries: the document at `index.html` and a catch-all
//! `_redirects` rule so client-side routes resolve to it.

use crate::error::DeployError;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const INDEX_ENTRY: &str = "index.html";
pub const REDIRECTS_ENTRY: &str = "_redirects";
pub const REDIRECTS_RULE: &str = "/* /index.html 200";

/// Build the deflated ZIP archive for `html`
///
/// # Errors
/// Returns [`DeployError::Package`] if the archive cannot be written.
pub fn package_site(html: &str) -> Result<Vec<u8>, DeployError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(INDEX_ENTRY, options)?;
    writer.write_all(html.as_bytes())?;

    writer.start_file(REDIRECTS_ENTRY, options)?;
    writer.write_all(REDIRECTS_RULE.as_bytes())?;

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut text = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        text
    }

    #[test]
    fn archive_holds_document_and_redirects() {
        let html = "<!DOCTYPE html><html><body>hi</body></html>";
        let bytes = package_site(html).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(entry(&mut archive, INDEX_ENTRY), html);
        assert_eq!(entry(&mut archive, REDIRECTS_ENTRY), REDIRECTS_RULE);
    }

    #[test]
    fn empty_document_still_packages() {
        let bytes = package_site("").unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(entry(&mut archive, INDEX_ENTRY), "");
    }
}
