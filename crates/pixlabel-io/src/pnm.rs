//! PNM (Portable Any Map) format support
//!
//! Reads PPM in both the ASCII (`P3`) and binary (`P6`) encodings and
//! writes either. Header comments (`#` to end of line) are accepted
//! anywhere whitespace is. Only a maxval of 255 is supported, so samples
//! map one-to-one onto [`Rgb`] channels.

use crate::{IoError, IoResult};
use pixlabel_core::{Rgb, RgbImage};
use std::io::{Read, Write};

/// Byte cursor over a PNM stream.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while self.pos < self.data.len() {
            match self.data[self.pos] {
                b'#' => {
                    while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                c if c.is_ascii_whitespace() => self.pos += 1,
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_whitespace_and_comments();
        let start = self.pos;
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        let data = self.data;
        if self.pos > start {
            Some(&data[start..self.pos])
        } else {
            None
        }
    }

    fn next_u32(&mut self, what: &str) -> IoResult<u32> {
        let token = self
            .next_token()
            .ok_or_else(|| IoError::MalformedPnm(format!("missing {}", what)))?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| IoError::MalformedPnm(format!("bad {}", what)))
    }
}

/// Read a PPM image (`P3` or `P6`) from a reader.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<RgbImage> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let mut tokens = Tokens::new(&data);

    let magic = tokens
        .next_token()
        .ok_or_else(|| IoError::MalformedPnm("empty stream".to_string()))?;
    let binary = match magic {
        b"P3" => false,
        b"P6" => true,
        other => {
            return Err(IoError::UnsupportedPnm(format!(
                "magic {:?}",
                String::from_utf8_lossy(other)
            )));
        }
    };

    let width = tokens.next_u32("width")?;
    let height = tokens.next_u32("height")?;
    let maxval = tokens.next_u32("maxval")?;
    if maxval != 255 {
        return Err(IoError::UnsupportedPnm(format!(
            "maxval {} (only 255 is supported)",
            maxval
        )));
    }

    let len = RgbImage::checked_len(width, height)?;

    let pixels: Vec<Rgb> = if binary {
        // Exactly one whitespace byte separates the header from the raster.
        let start = tokens.pos + 1;
        let raster = len
            .checked_mul(3)
            .and_then(|n| n.checked_add(start))
            .and_then(|end| data.get(start..end))
            .ok_or_else(|| IoError::MalformedPnm("truncated raster".to_string()))?;
        raster
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect()
    } else {
        // Every sample takes at least two bytes, so the stream bounds the
        // pixel count whatever the header claims.
        let mut pixels = Vec::with_capacity(len.min(data.len() / 6));
        for _ in 0..len {
            let mut rgb = [0u8; 3];
            for channel in rgb.iter_mut() {
                let v = tokens.next_u32("sample")?;
                *channel = u8::try_from(v)
                    .map_err(|_| IoError::MalformedPnm(format!("sample {} > 255", v)))?;
            }
            pixels.push(Rgb::from_array(rgb));
        }
        pixels
    };

    Ok(RgbImage::from_pixels(width, height, pixels)?)
}

/// Write an image as binary PPM (`P6`).
pub fn write_pnm<W: Write>(image: &RgbImage, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width(), image.height())?;
    let data: Vec<u8> = image.pixels().iter().flat_map(|c| c.to_array()).collect();
    writer.write_all(&data)?;
    Ok(())
}

/// Write an image as ASCII PPM (`P3`), one image row per line.
pub fn write_pnm_ascii<W: Write>(image: &RgbImage, mut writer: W) -> IoResult<()> {
    write!(writer, "P3\n{} {}\n255\n", image.width(), image.height())?;
    for y in 0..image.height() {
        let row = image.row(y).unwrap_or_default();
        let line: Vec<String> = row
            .iter()
            .map(|c| format!("{} {} {}", c.r, c.g, c.b))
            .collect();
        writeln!(writer, "{}", line.join("  "))?;
    }
    Ok(())
}
