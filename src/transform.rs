//! The whitespace and line-ending rewrite.

use crate::buffer::SpanBuilder;
use crate::options::{ConversionConfig, LineMode, SpaceMode};
use std::collections::TryReserveError;

const SPACE: u8 = b' ';
const TAB: u8 = b'\t';
const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Rewrites `input` according to `config` in one left-to-right scan.
///
/// For every byte the space rule is applied first and the line-ending rule
/// second; both look at the raw input byte, so both may splice at the same
/// index. Space-to-tab conversion only touches runs inside the leading
/// whitespace of a line. Everything that no rule matches is copied verbatim.
///
/// A `spaces_per_tab` of zero leaves spaces and tabs untouched.
///
/// # Errors
///
/// Fails if tab expansion needs more memory than can be allocated.
pub fn transform(input: &[u8], config: &ConversionConfig) -> Result<Vec<u8>, TryReserveError> {
    let spaces_per_tab = config.spaces_per_tab;
    let space_mode = if spaces_per_tab == 0 {
        SpaceMode::None
    } else {
        config.space_mode
    };

    let mut out = SpanBuilder::new(input);
    let mut leading = true;
    let mut run = 0usize;

    for (i, &byte) in input.iter().enumerate() {
        if byte != SPACE {
            run = 0;
        }
        if leading && byte != SPACE && byte != TAB {
            leading = false;
        }

        match space_mode {
            SpaceMode::SpacesToTabs => {
                if byte == SPACE && leading {
                    run += 1;
                }
                if run == spaces_per_tab {
                    // The run occupies input[i + 1 - run..=i].
                    out.splice(i + 1 - run, &[TAB], i + 1);
                    run = 0;
                }
            }
            SpaceMode::TabsToSpaces => {
                if byte == TAB {
                    out.splice_repeated(i, SPACE, spaces_per_tab, i + 1)?;
                }
            }
            SpaceMode::None => {}
        }

        let was_cr = i > 0 && input[i - 1] == CR;
        match config.line_mode {
            LineMode::ToDos if byte == LF && !was_cr => out.splice(i, b"\r\n", i + 1),
            LineMode::ToUnix if byte == LF && was_cr => out.splice(i - 1, b"\n", i + 1),
            _ => {}
        }

        if byte == LF {
            leading = true;
        }
    }

    Ok(out.finish())
}
