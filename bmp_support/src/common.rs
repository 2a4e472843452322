pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub const BITS_PER_PIXEL: u16 = 24;
pub const BYTES_PER_PIXEL: usize = 3;

// BI_RGB
pub const COMPRESSION_NONE: u32 = 0;

pub const PIXELS_PER_METER_OPTION: &str = "pixels_per_meter";
// 72 ppi
pub const DEFAULT_PIXELS_PER_METER: u32 = 2835;

const METERS_PER_INCH: f64 = 0.0254;

pub fn pixels_per_meter_from_ppi(ppi: u32) -> u32 {
    (ppi as f64 / METERS_PER_INCH).round() as u32
}

/// Every row of the pixel array is padded to a multiple of 4 bytes.
pub fn row_stride(width: usize) -> usize {
    (width * BYTES_PER_PIXEL + 3) & !3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_per_meter_from_ppi() {
        assert_eq!(pixels_per_meter_from_ppi(72), DEFAULT_PIXELS_PER_METER);
        assert_eq!(pixels_per_meter_from_ppi(80), 3150);
        assert_eq!(pixels_per_meter_from_ppi(0), 0);
    }

    #[test]
    fn test_row_stride() {
        assert_eq!(row_stride(1), 4);
        assert_eq!(row_stride(2), 8);
        assert_eq!(row_stride(4), 12);
        assert_eq!(row_stride(5), 16);
        assert_eq!(row_stride(1920), 5760);
    }
}
