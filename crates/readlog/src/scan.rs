//! # Barcode Capture
//!
//! Reads an ISBN barcode off a live capture device. The device and the
//! decoder are traits so the loop can run against a camera, a directory of
//! images, or a scripted fake in tests.
//!
//! ## The Loop
//!
//! 1. Pull a frame from the device.
//! 2. Decode it.
//!    - Found: return the payload and its format label.
//!    - [`DecodeError::NotFound`]: normal, most frames have no barcode. Keep going.
//!    - [`DecodeError::Failed`]: abort with [`ReadlogError::Scan`].
//! 3. A device that runs out of frames aborts the scan.
//!
//! ## Releasing the Device
//!
//! The device is released exactly once when the scan ends, whatever the
//! outcome: success, decode failure, device error, or a panic in the decoder.
//! Release has no return value; a device that fails to shut down cleanly must
//! not turn a successful scan into an error.

use crate::error::{ReadlogError, Result};
use serde::Serialize;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub text: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No barcode in this frame.
    NotFound,
    /// The decoder itself failed.
    Failed(String),
}

pub trait CaptureDevice {
    type Frame;

    /// Next frame, or `None` once the stream has ended.
    fn next_frame(&mut self) -> Result<Option<Self::Frame>>;

    /// Stops the stream and frees the underlying hardware.
    fn release(&mut self);
}

pub trait FrameDecoder<F> {
    fn decode(&mut self, frame: &F) -> std::result::Result<ScanResult, DecodeError>;
}

struct ReleaseGuard<'a, D: CaptureDevice> {
    device: &'a mut D,
}

impl<D: CaptureDevice> Drop for ReleaseGuard<'_, D> {
    fn drop(&mut self) {
        self.device.release();
        debug!("capture device released");
    }
}

/// Scans frames until the first barcode is decoded.
pub fn scan_barcode<D, R>(device: &mut D, decoder: &mut R) -> Result<ScanResult>
where
    D: CaptureDevice,
    R: FrameDecoder<D::Frame>,
{
    let guard = ReleaseGuard { device };
    let mut skipped = 0usize;

    loop {
        let Some(frame) = guard.device.next_frame()? else {
            return Err(ReadlogError::Scan(
                "capture ended before a barcode was detected".to_string(),
            ));
        };

        match decoder.decode(&frame) {
            Ok(result) => {
                debug!(format = %result.format, skipped, "barcode detected");
                return Ok(result);
            }
            Err(DecodeError::NotFound) => {
                skipped += 1;
                trace!(skipped, "no barcode in frame");
            }
            Err(DecodeError::Failed(reason)) => {
                return Err(ReadlogError::Scan(reason));
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted device: yields the given frames, then either ends or errors.
    pub struct FakeDevice {
        pub frames: VecDeque<u32>,
        pub fail_when_empty: bool,
        pub releases: usize,
    }

    impl FakeDevice {
        pub fn new(frames: impl IntoIterator<Item = u32>) -> Self {
            Self {
                frames: frames.into_iter().collect(),
                fail_when_empty: false,
                releases: 0,
            }
        }
    }

    impl CaptureDevice for FakeDevice {
        type Frame = u32;

        fn next_frame(&mut self) -> Result<Option<u32>> {
            match self.frames.pop_front() {
                Some(frame) => Ok(Some(frame)),
                None if self.fail_when_empty => {
                    Err(ReadlogError::Scan("camera unplugged".to_string()))
                }
                None => Ok(None),
            }
        }

        fn release(&mut self) {
            self.releases += 1;
        }
    }

    /// Frame 0 has no barcode, frame 99 breaks the decoder, anything else
    /// decodes to an EAN-13 payload built from the frame number.
    pub struct FakeDecoder;

    impl FrameDecoder<u32> for FakeDecoder {
        fn decode(&mut self, frame: &u32) -> std::result::Result<ScanResult, DecodeError> {
            match frame {
                0 => Err(DecodeError::NotFound),
                99 => Err(DecodeError::Failed("checksum mismatch".to_string())),
                n => Ok(ScanResult {
                    text: format!("978000651032{}", n),
                    format: "EAN_13".to_string(),
                }),
            }
        }
    }
}
