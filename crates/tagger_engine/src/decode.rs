use std::io::{self, Read};

use encoding_rs::{Decoder, DecoderResult, UTF_8};

const CHUNK_BYTES: usize = 8 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid UTF-8 near byte {offset}")]
    InvalidUtf8 { offset: u64 },
}

/// Incremental strict UTF-8 decoder over any reader.
///
/// Multi-byte sequences split across reads are carried over by the
/// underlying `encoding_rs` decoder. A leading byte-order mark is dropped.
pub struct Utf8Decoder<R> {
    reader: R,
    decoder: Decoder,
    buf: Vec<u8>,
    text: String,
    consumed: u64,
    finished: bool,
}

impl<R: Read> Utf8Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            decoder: UTF_8.new_decoder_with_bom_removal(),
            buf: vec![0; CHUNK_BYTES],
            text: String::new(),
            consumed: 0,
            finished: false,
        }
    }

    /// Returns the next non-empty run of decoded text, or `None` at end of input.
    pub fn next_chunk(&mut self) -> Result<Option<&str>, DecodeError> {
        self.text.clear();
        while !self.finished && self.text.is_empty() {
            let read = match self.reader.read(&mut self.buf) {
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            let last = read == 0;
            let mut src = &self.buf[..read];
            loop {
                let room = self
                    .decoder
                    .max_utf8_buffer_length_without_replacement(src.len())
                    .unwrap_or(src.len());
                self.text.reserve(room);
                let (result, used) =
                    self.decoder
                        .decode_to_string_without_replacement(src, &mut self.text, last);
                src = &src[used..];
                self.consumed += used as u64;
                match result {
                    DecoderResult::InputEmpty => break,
                    DecoderResult::OutputFull => continue,
                    DecoderResult::Malformed(bad, after) => {
                        let offset = self
                            .consumed
                            .saturating_sub(u64::from(bad) + u64::from(after));
                        return Err(DecodeError::InvalidUtf8 { offset });
                    }
                }
            }
            self.finished = last;
        }
        if self.text.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.text.as_str()))
        }
    }
}

/// Decode a whole reader into a `String`, rejecting malformed UTF-8.
pub fn decode_to_string<R: Read>(reader: R) -> Result<String, DecodeError> {
    let mut decoder = Utf8Decoder::new(reader);
    let mut out = String::new();
    while let Some(chunk) = decoder.next_chunk()? {
        out.push_str(chunk);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{decode_to_string, DecodeError, Utf8Decoder};
    use std::io::{self, Read};

    /// Hands out at most `step` bytes per read to force split sequences.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn decodes_plain_utf8() {
        let text = decode_to_string("héllo wörld".as_bytes()).unwrap();
        assert_eq!(text, "héllo wörld");
    }

    #[test]
    fn strips_leading_bom() {
        let text = decode_to_string(&b"\xEF\xBB\xBFthe"[..]).unwrap();
        assert_eq!(text, "the");
    }

    #[test]
    fn multibyte_sequences_survive_split_reads() {
        let source = "日本語 テキスト";
        let text = decode_to_string(Trickle {
            data: source.as_bytes(),
            step: 1,
        })
        .unwrap();
        assert_eq!(text, source);
    }

    #[test]
    fn malformed_bytes_are_rejected_with_offset() {
        let err = decode_to_string(&b"abc\xFFdef"[..]).unwrap_err();
        match err {
            DecodeError::InvalidUtf8 { offset } => assert_eq!(offset, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn truncated_trailing_sequence_is_rejected() {
        let err = decode_to_string(&b"caf\xC3"[..]).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidUtf8 { .. }));
    }

    #[test]
    fn empty_reader_yields_no_chunks() {
        let mut decoder = Utf8Decoder::new(io::empty());
        assert!(decoder.next_chunk().unwrap().is_none());
        assert!(decoder.next_chunk().unwrap().is_none());
    }
}
