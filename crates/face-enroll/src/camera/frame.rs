use face_enroll_core::{CoreResult, EnrollError};

use std::panic::Location;

use error_location::ErrorLocation;
use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, Rgb};

/// One dequeued buffer, copied out of the driver's mmap area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawFrame {
    pub(crate) fourcc: [u8; 4],
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<u8>,
}

/// Decode a raw driver buffer at its native resolution.
#[track_caller]
pub(crate) fn decode_frame(frame: &RawFrame) -> CoreResult<DynamicImage> {
    let location = ErrorLocation::from(Location::caller());

    match &frame.fourcc {
        b"MJPG" | b"JPEG" => image::load_from_memory_with_format(&frame.data, ImageFormat::Jpeg)
            .map_err(|e| EnrollError::DeviceError {
                reason: format!("Failed to decode MJPG frame: {}", e),
                location,
            }),
        b"GREY" => {
            let needed = frame.width as usize * frame.height as usize;
            frame
                .data
                .get(..needed)
                .and_then(|pixels| {
                    ImageBuffer::<Luma<u8>, _>::from_raw(frame.width, frame.height, pixels.to_vec())
                })
                .map(DynamicImage::ImageLuma8)
                .ok_or_else(|| EnrollError::DeviceError {
                    reason: format!(
                        "Short GREY frame: {} bytes for {}x{}",
                        frame.data.len(),
                        frame.width,
                        frame.height
                    ),
                    location,
                })
        }
        b"YUYV" => yuyv_to_rgb(frame.width, frame.height, &frame.data)
            .map(DynamicImage::ImageRgb8)
            .ok_or_else(|| EnrollError::DeviceError {
                reason: format!(
                    "Short YUYV frame: {} bytes for {}x{}",
                    frame.data.len(),
                    frame.width,
                    frame.height
                ),
                location,
            }),
        other => Err(EnrollError::DeviceError {
            reason: format!("Unsupported pixel format {}", String::from_utf8_lossy(other)),
            location,
        }),
    }
}

/// Packed 4:2:2 (Y0 U Y1 V) to RGB, BT.601 limited range.
fn yuyv_to_rgb(width: u32, height: u32, data: &[u8]) -> Option<ImageBuffer<Rgb<u8>, Vec<u8>>> {
    let pixels = width as usize * height as usize;
    let packed = data.get(..pixels * 2)?;

    let mut rgb = Vec::with_capacity(pixels * 3);
    for chunk in packed.chunks_exact(4) {
        let (y0, u, y1, v) = (chunk[0], chunk[1], chunk[2], chunk[3]);
        rgb.extend_from_slice(&yuv_pixel(y0, u, v));
        rgb.extend_from_slice(&yuv_pixel(y1, u, v));
    }

    ImageBuffer::from_raw(width, height, rgb)
}

fn yuv_pixel(y: u8, u: u8, v: u8) -> [u8; 3] {
    let c = i32::from(y) - 16;
    let d = i32::from(u) - 128;
    let e = i32::from(v) - 128;

    let clamp = |value: i32| ((value + 128) >> 8).clamp(0, 255) as u8;

    [
        clamp(298 * c + 409 * e),
        clamp(298 * c - 100 * d - 208 * e),
        clamp(298 * c + 516 * d),
    ]
}
