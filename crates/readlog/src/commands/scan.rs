use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup::BookLookup;
use crate::scan::{scan_barcode, CaptureDevice, FrameDecoder};

/// Scans a barcode, then looks its payload up as an ISBN.
pub fn run<D, R, L>(device: &mut D, decoder: &mut R, lookup: &L) -> Result<CmdResult>
where
    D: CaptureDevice,
    R: FrameDecoder<D::Frame>,
    L: BookLookup + ?Sized,
{
    let scanned = scan_barcode(device, decoder)?;
    let found = lookup.by_isbn(&scanned.text)?;

    let mut result = CmdResult::default();
    match &found {
        Some(candidate) => result.add_message(CmdMessage::success(format!(
            "Scanned {} ({}): {} by {}",
            scanned.text, scanned.format, candidate.title, candidate.author
        ))),
        None => result.add_message(CmdMessage::warning(format!(
            "Scanned {} ({}) but no book was found",
            scanned.text, scanned.format
        ))),
    }
    result.candidate = found;
    result.scanned = Some(scanned);
    Ok(result)
}
