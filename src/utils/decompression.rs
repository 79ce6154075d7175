use flate2::read::GzDecoder;
use std::io::{self, Read};

/// Compression formats recognised by magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    Gzip,
    Uncompressed,
}

/// Magic byte detection and decompression for downloaded payloads
pub struct DecompressionService;

impl DecompressionService {
    pub fn detect_compression_format(data: &[u8]) -> CompressionFormat {
        match infer::get(data).map(|kind| kind.mime_type()) {
            Some("application/gzip") => CompressionFormat::Gzip,
            _ => CompressionFormat::Uncompressed,
        }
    }

    /// Decompress `data` if it carries a known compression header, otherwise
    /// return it unchanged
    pub fn decompress(data: &[u8]) -> io::Result<Vec<u8>> {
        match Self::detect_compression_format(data) {
            CompressionFormat::Gzip => Self::decompress_gzip(data),
            CompressionFormat::Uncompressed => Ok(data.to_vec()),
        }
    }

    fn decompress_gzip(data: &[u8]) -> io::Result<Vec<u8>> {
        let mut decoder = GzDecoder::new(data);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        Ok(decompressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_detect_uncompressed() {
        let data = b"#EXTM3U\n#EXTINF:-1,Test\nhttp://a.test/x";
        assert_eq!(
            DecompressionService::detect_compression_format(data),
            CompressionFormat::Uncompressed
        );
        assert_eq!(DecompressionService::decompress(data).unwrap(), data.to_vec());
    }

    #[test]
    fn test_detect_and_decompress_gzip() {
        let original = br#"{"regions":{}}"#;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(original).unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(
            DecompressionService::detect_compression_format(&compressed),
            CompressionFormat::Gzip
        );
        assert_eq!(
            DecompressionService::decompress(&compressed).unwrap(),
            original.to_vec()
        );
    }

    #[test]
    fn test_truncated_gzip_is_an_error() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[b'x'; 4096]).unwrap();
        let compressed = encoder.finish().unwrap();

        assert!(DecompressionService::decompress(&compressed[..compressed.len() / 2]).is_err());
    }
}
