//! Device-frame HTML rendering.
//!
//! TRUST BOUNDARY: markup blocks (lead message, articles, requirements) are
//! admin-authored and interpolated verbatim — no sanitization happens here or
//! anywhere upstream. Callers must treat the admin as trusted; anything
//! injected into those fields reaches end users as-is.

use std::fmt::Write as _;

use koto_core::enums::{DeviceFrame, MediaKind};

use crate::document::{PreviewBlock, PreviewDocument};

/// Per-frame layout chrome. Frames differ only in proportions and shell.
struct FrameChrome {
    class: &'static str,
    max_width_px: u16,
    shell_open: &'static str,
    shell_close: &'static str,
}

const fn chrome(frame: DeviceFrame) -> FrameChrome {
    match frame {
        DeviceFrame::Mobile => FrameChrome {
            class: "frame-mobile",
            max_width_px: 375,
            shell_open: "<div class=\"bezel\"><div class=\"notch\"></div>",
            shell_close: "</div>",
        },
        DeviceFrame::Desktop => FrameChrome {
            class: "frame-desktop",
            max_width_px: 896,
            shell_open: "<div class=\"canvas\">",
            shell_close: "</div>",
        },
    }
}

/// Render the projected document inside the given device frame.
///
/// Both frames emit the identical block sequence with identical field values;
/// only the wrapping chrome differs.
#[must_use]
pub fn render_html(doc: &PreviewDocument, frame: DeviceFrame) -> String {
    let chrome = chrome(frame);
    let mut out = String::new();

    let _ = write!(
        out,
        "<div class=\"preview {}\" style=\"max-width:{}px\">{}",
        chrome.class, chrome.max_width_px, chrome.shell_open
    );

    for block in &doc.blocks {
        render_block(&mut out, block);
    }

    out.push_str(chrome.shell_close);
    out.push_str("</div>");
    out
}

fn render_block(out: &mut String, block: &PreviewBlock) {
    match block {
        PreviewBlock::Badges { names } => {
            out.push_str("<div class=\"badges\">");
            for name in names {
                let _ = write!(out, "<span class=\"badge\">{name}</span>");
            }
            out.push_str("</div>");
        }
        PreviewBlock::LeadMessage { markup } => {
            let _ = write!(out, "<div class=\"lead\">{markup}</div>");
        }
        PreviewBlock::Media { media_kind, location } => match media_kind {
            MediaKind::Video => {
                let _ = write!(
                    out,
                    "<video class=\"media\" src=\"{location}\" muted autoplay loop></video>"
                );
            }
            MediaKind::Image | MediaKind::None => {
                // None never reaches here; the projection filters empty slots.
                let _ = write!(out, "<img class=\"media\" src=\"{location}\">");
            }
        },
        PreviewBlock::Article { markup } => {
            let _ = write!(out, "<div class=\"article\">{markup}</div>");
        }
        PreviewBlock::Requirements { markup } => {
            let _ = write!(
                out,
                "<section class=\"requirements\"><h4>Requirements</h4>{markup}</section>"
            );
        }
        PreviewBlock::Field { label, value } => {
            let _ = write!(
                out,
                "<dl class=\"field\"><dt>{label}</dt><dd>{value}</dd></dl>"
            );
        }
    }
}
