//! Unit conversions for DrawingML values

/// EMUs per inch
pub const EMU_PER_INCH: i64 = 914_400;
/// Reference resolution used for pixel values
pub const DPI: i64 = 96;
/// EMUs per pixel at 96 DPI
pub const EMU_PER_PIXEL: i64 = EMU_PER_INCH / DPI;
/// DrawingML angles are in 60,000ths of a degree
pub const ANGLE_UNITS_PER_DEGREE: i64 = 60_000;

/// Convert EMUs to pixels, rounded to the nearest pixel
pub fn emu_to_pixels(emu: i64) -> i64 {
    (emu as f64 / EMU_PER_PIXEL as f64).round() as i64
}

/// Convert a DrawingML angle to whole degrees
pub fn angle_to_degrees(angle: i64) -> i64 {
    (angle as f64 / ANGLE_UNITS_PER_DEGREE as f64).round() as i64
}
