//! PNG image format support
//!
//! Every PNG flavor is decoded to [`RgbImage`]: palettes and sub-byte
//! grayscale are expanded, 16-bit samples keep their high byte, and any
//! alpha channel is dropped. Images are always written as 8-bit RGB.

use crate::{IoError, IoResult};
use pixlabel_core::{Rgb, RgbImage};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RgbImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder.read_info()?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedPng(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedPng(format!(
                "{:?} at {:?}",
                color_type, other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::UnsupportedPng("output buffer size overflows".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader.next_frame(&mut buf)?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let stride = samples * bytes_per_sample;

    // High byte of sample `s` of pixel `x` in row `y` (PNG is big-endian).
    let sample = |x: u32, y: u32, s: usize| -> u8 {
        data[y as usize * bytes_per_row + x as usize * stride + s * bytes_per_sample]
    };

    let image = RgbImage::from_fn(width, height, |x, y| match color_type {
        ColorType::Grayscale | ColorType::GrayscaleAlpha => {
            let g = sample(x, y, 0);
            Rgb::new(g, g, g)
        }
        _ => Rgb::new(sample(x, y, 0), sample(x, y, 1), sample(x, y, 2)),
    })?;

    Ok(image)
}

/// Write a PNG image
pub fn write_png<W: Write>(image: &RgbImage, writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder.write_header()?;

    let data: Vec<u8> = image.pixels().iter().flat_map(|c| c.to_array()).collect();

    writer.write_image_data(&data)?;
    writer.finish()?;

    Ok(())
}
