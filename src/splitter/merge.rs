use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::core::config::SplitterConfig;

/// Greedily packs atomic pieces into chunks bounded by `chunk_size`.
///
/// Interior joins count toward a chunk's measured length. When a window
/// closes, its tail is carried into the next window as overlap, up to
/// `chunk_overlap`. A single piece larger than `chunk_size` is emitted as its
/// own oversized chunk rather than truncated; that is reported, not fatal.
pub fn merge_splits<I>(pieces: I, separator: &str, config: &SplitterConfig) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let separator_len = config.measure(separator);
    let mut chunks: Vec<String> = Vec::new();
    let mut window: VecDeque<String> = VecDeque::new();
    let mut total = 0usize;

    for piece in pieces {
        let piece_len = config.measure(&piece);
        let join_len = if window.is_empty() { 0 } else { separator_len };
        if total + piece_len + join_len > config.chunk_size {
            if total > config.chunk_size {
                warn!(
                    chunk_len = total,
                    chunk_size = config.chunk_size,
                    "produced a chunk longer than the configured chunk_size"
                );
            }
            if !window.is_empty() {
                if let Some(chunk) = join_pieces(&window, separator, config.strip_whitespace) {
                    chunks.push(chunk);
                }
                // Shed from the front until the tail fits inside the overlap
                // budget and leaves room for the incoming piece.
                loop {
                    let rejoin_len = if window.is_empty() { 0 } else { separator_len };
                    let over_overlap = total > config.chunk_overlap;
                    let no_room =
                        total > 0 && total + piece_len + rejoin_len > config.chunk_size;
                    if !over_overlap && !no_room {
                        break;
                    }
                    let Some(dropped) = window.pop_front() else {
                        break;
                    };
                    let dropped_len = config.measure(&dropped);
                    if dropped_len > config.chunk_overlap {
                        debug!(
                            piece_len = dropped_len,
                            chunk_overlap = config.chunk_overlap,
                            "piece too large to carry as overlap, dropped from seed"
                        );
                    }
                    total -= dropped_len;
                    if !window.is_empty() {
                        total -= separator_len;
                    }
                }
            }
        }
        window.push_back(piece);
        total += piece_len + if window.len() > 1 { separator_len } else { 0 };
    }

    if let Some(chunk) = join_pieces(&window, separator, config.strip_whitespace) {
        chunks.push(chunk);
    }
    chunks
}

fn join_pieces(
    pieces: &VecDeque<String>,
    separator: &str,
    strip_whitespace: bool,
) -> Option<String> {
    let joined = pieces
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator);
    let joined = if strip_whitespace {
        joined.trim().to_string()
    } else {
        joined
    };
    if joined.is_empty() { None } else { Some(joined) }
}
