use base64::engine::general_purpose::STANDARD;
use base64::Engine;

fn mime_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next().map(|ext| ext.to_lowercase()) {
        Some(ext) if ext == "pdf" => "application/pdf",
        Some(ext) if ext == "epub" => "application/epub+zip",
        Some(ext) if ext == "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Encodes the uploaded file as a data URL, usable both as the storage
/// payload and directly as a download link target.
pub fn encode(file_name: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_for(file_name),
        STANDARD.encode(bytes)
    )
}

/// Restores the mime type and original bytes from a data URL. `None` for
/// anything that isn't one of ours.
pub fn decode(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_round_trip() {
        let bytes = b"%PDF-1.4 pretend";
        let uri = encode("dune.pdf", bytes);
        assert!(uri.starts_with("data:application/pdf;base64,"));

        let (mime, decoded) = decode(&uri).unwrap();
        assert_eq!(mime, "application/pdf");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert!(encode("DUNE.PDF", b"x").starts_with("data:application/pdf;"));
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        let uri = encode("dune", b"x");
        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode("http://example.com/dune.pdf").is_none());
        assert!(decode("data:application/pdf;base64,@@@").is_none());
        assert!(decode("").is_none());
    }

    #[test]
    fn empty_file_still_encodes() {
        let uri = encode("empty.txt", b"");
        let (mime, bytes) = decode(&uri).unwrap();
        assert_eq!(mime, "text/plain");
        assert!(bytes.is_empty());
    }
}
