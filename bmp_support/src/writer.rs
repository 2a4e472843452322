use std::convert::TryFrom;

use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use rt_core::models::image::Image;
use rt_core::models::io::{ImageIOError, ImageWriter, ImageWriterOptions};

use crate::common::*;

pub struct BMPWriter {
}

impl BMPWriter {

    pub fn new() -> Self {
        BMPWriter {}
    }
}

impl Default for BMPWriter {

    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for BMPWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        if image.width == 0 || image.height == 0 {
            return Err(ImageIOError::FailedToWrite {
                description: format!("cannot encode an empty image ({}x{})", image.width, image.height),
            });
        }

        let pixels_per_meter = options.get_u32(PIXELS_PER_METER_OPTION, DEFAULT_PIXELS_PER_METER)?;

        let stride = row_stride(image.width);
        let image_size = stride.checked_mul(image.height)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| too_large(image))?;
        let file_size = image_size.checked_add(PIXEL_DATA_OFFSET).ok_or_else(|| too_large(image))?;
        let width = i32::try_from(image.width).map_err(|_| too_large(image))?;
        let height = i32::try_from(image.height).map_err(|_| too_large(image))?;

        debug!("encoding {}x{} bmp image ({} bytes)", width, height, file_size);

        let mut bytes = vec![0u8; file_size as usize];
        write_header(&mut bytes[0..FILE_HEADER_SIZE as usize], file_size);
        write_info_header(
            &mut bytes[FILE_HEADER_SIZE as usize..PIXEL_DATA_OFFSET as usize],
            width,
            height,
            image_size,
            pixels_per_meter
        );
        write_pixel_array(&mut bytes[PIXEL_DATA_OFFSET as usize..], image, stride);

        Ok(bytes)
    }
}

fn too_large(image: &Image) -> ImageIOError {
    ImageIOError::FailedToWrite {
        description: format!("image is too large for bmp: {}x{}", image.width, image.height),
    }
}

fn write_header(header: &mut [u8], file_size: u32) {
    // 0 - 2 bytes - "BM"
    header[0] = 0x42;
    header[1] = 0x4D;
    // 2 - 4 bytes - size of BMP file in bytes
    LittleEndian::write_u32(&mut header[2..6], file_size);
    // 6 - 2 bytes - reserved
    // 8 - 2 bytes - reserved
    // 10 - 4 bytes - offset of the pixel array
    LittleEndian::write_u32(&mut header[10..14], PIXEL_DATA_OFFSET);
}

fn write_info_header(header: &mut [u8], width: i32, height: i32, image_size: u32, pixels_per_meter: u32) {
    LittleEndian::write_u32(&mut header[0..4], INFO_HEADER_SIZE);
    LittleEndian::write_i32(&mut header[4..8], width);
    // positive height means rows are stored bottom-up
    LittleEndian::write_i32(&mut header[8..12], height);
    // planes
    LittleEndian::write_u16(&mut header[12..14], 1);
    LittleEndian::write_u16(&mut header[14..16], BITS_PER_PIXEL);
    LittleEndian::write_u32(&mut header[16..20], COMPRESSION_NONE);
    LittleEndian::write_u32(&mut header[20..24], image_size);
    LittleEndian::write_u32(&mut header[24..28], pixels_per_meter);
    LittleEndian::write_u32(&mut header[28..32], pixels_per_meter);
    // 32 - 4 bytes - colors in palette
    // 36 - 4 bytes - important colors
}

fn write_pixel_array(data: &mut [u8], image: &Image, stride: usize) {
    for (row_index, row) in image.rows().rev().enumerate() {
        let row_data = &mut data[row_index * stride..(row_index + 1) * stride];

        for (x, pixel) in row.iter().enumerate() {
            let offset = x * BYTES_PER_PIXEL;
            row_data[offset] = pixel.blue;
            row_data[offset + 1] = pixel.green;
            row_data[offset + 2] = pixel.red;
        }
    }
}
