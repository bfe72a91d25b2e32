//! Image stream encoders: PNG for single frames, GIF for sequences.

use gif::{DisposalMethod, Encoder, Frame, Repeat};

use crate::error::RenderError;
use crate::fb::PixelBuffer;

/// Color quantization speed (1 slowest/best .. 30 fastest).
pub const GIF_SPEED: i32 = 30;

/// Encode one frame as an RGBA8 PNG.
pub fn encode_png(fb: &PixelBuffer) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(fb.as_rgba())?;
        writer.finish()?;
    }
    Ok(out)
}

/// Milliseconds to GIF centiseconds, rounded to nearest.
fn delay_centis(delay_ms: u32) -> u16 {
    let cs = (u64::from(delay_ms) + 5) / 10;
    u16::try_from(cs).unwrap_or(u16::MAX)
}

/// Streaming GIF writer that loops forever with a fixed delay.
///
/// Fully transparent pixels become the frame's transparent color. Bytes are only
/// handed out by [`GifSequence::finish`], once the trailer is written.
pub struct GifSequence {
    encoder: Encoder<Vec<u8>>,
    width: u16,
    height: u16,
    delay_cs: u16,
    frames: usize,
}

impl GifSequence {
    pub fn new(width: u32, height: u32, delay_ms: u32) -> Result<Self, RenderError> {
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(RenderError::FrameSize { width, height });
        };

        let mut encoder = Encoder::new(Vec::new(), w, h, &[])?;
        encoder.set_repeat(Repeat::Infinite)?;
        Ok(Self {
            encoder,
            width: w,
            height: h,
            delay_cs: delay_centis(delay_ms),
            frames: 0,
        })
    }

    /// Append one frame. It must match the sequence dimensions.
    pub fn push(&mut self, fb: PixelBuffer) -> Result<(), RenderError> {
        if fb.width() != self.width as u32 || fb.height() != self.height as u32 {
            return Err(RenderError::FrameSize {
                width: fb.width(),
                height: fb.height(),
            });
        }
        let mut rgba = fb.into_rgba();
        let mut frame = Frame::from_rgba_speed(self.width, self.height, &mut rgba, GIF_SPEED);
        frame.delay = self.delay_cs;
        frame.dispose = DisposalMethod::Background;
        self.encoder.write_frame(&frame)?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Write the trailer and return the complete stream.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        Ok(self.encoder.into_inner()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_signature_and_size() {
        let fb = PixelBuffer::new(30, 20);
        let bytes = encode_png(&fb).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(&bytes[16..20], &30u32.to_be_bytes());
        assert_eq!(&bytes[20..24], &20u32.to_be_bytes());
    }

    #[test]
    fn test_gif_rejects_mismatched_frame() {
        let mut gif = GifSequence::new(10, 10, 100).unwrap();
        assert!(matches!(
            gif.push(PixelBuffer::new(10, 20)),
            Err(RenderError::FrameSize { width: 10, height: 20 })
        ));
        assert_eq!(gif.frames(), 0);
    }

    #[test]
    fn test_gif_rejects_oversized_canvas() {
        assert!(matches!(
            GifSequence::new(70_000, 10, 100),
            Err(RenderError::FrameSize { width: 70_000, height: 10 })
        ));
    }

    #[test]
    fn test_delay_rounds_to_nearest() {
        assert_eq!(delay_centis(500), 50);
        assert_eq!(delay_centis(105), 11);
        assert_eq!(delay_centis(104), 10);
        assert_eq!(delay_centis(5), 1);
        assert_eq!(delay_centis(4), 0);
        assert_eq!(delay_centis(u32::MAX), u16::MAX);
    }

    #[test]
    fn test_gif_header_and_trailer() {
        let mut gif = GifSequence::new(4, 4, 100).unwrap();
        gif.push(PixelBuffer::new(4, 4)).unwrap();
        let bytes = gif.finish().unwrap();
        assert_eq!(&bytes[..6], b"GIF89a");
        assert_eq!(bytes.last(), Some(&0x3B));
    }
}
