use std::collections::VecDeque;
use std::io::Read;
use std::mem;

use crate::decode::{DecodeError, Utf8Decoder};

/// Streams whitespace-delimited tokens out of a UTF-8 reader.
///
/// A token is a maximal run of non-whitespace characters; any run of
/// Unicode whitespace separates tokens. Tokens spanning read boundaries
/// are stitched back together. The first decoding error ends the stream.
pub struct Tokens<R> {
    decoder: Utf8Decoder<R>,
    partial: String,
    ready: VecDeque<String>,
    done: bool,
}

impl<R: Read> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            decoder: Utf8Decoder::new(reader),
            partial: String::new(),
            ready: VecDeque::new(),
            done: false,
        }
    }
}

impl<R: Read> Iterator for Tokens<R> {
    type Item = Result<String, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            match self.decoder.next_chunk() {
                Ok(Some(text)) => split_tokens(text, &mut self.partial, &mut self.ready),
                Ok(None) => {
                    self.done = true;
                    if !self.partial.is_empty() {
                        self.ready.push_back(mem::take(&mut self.partial));
                    }
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

fn split_tokens(text: &str, partial: &mut String, ready: &mut VecDeque<String>) {
    for c in text.chars() {
        if c.is_whitespace() {
            if !partial.is_empty() {
                ready.push_back(mem::take(partial));
            }
        } else {
            partial.push(c);
        }
    }
}
