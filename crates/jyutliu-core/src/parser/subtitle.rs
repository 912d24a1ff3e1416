//! Subtitle-block parsing: one logical line per cue.

/// Marker identifying a timecode line inside a cue.
const TIMECODE_ARROW: &str = "-->";

/// Splits subtitle content into blocks of consecutive non-blank lines,
/// discards sequence-number and timecode lines inside each block, and
/// joins what remains with a single space.
#[must_use]
pub fn parse_subtitles(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            flush_block(&mut block, &mut out);
        } else {
            block.push(line);
        }
    }
    // Final cue without a trailing blank line
    flush_block(&mut block, &mut out);

    out
}

fn flush_block(block: &mut Vec<&str>, out: &mut Vec<String>) {
    if block.is_empty() {
        return;
    }

    let text = block
        .iter()
        .copied()
        .filter(|line| !is_timecode(line) && !is_sequence_number(line))
        .collect::<Vec<_>>()
        .join(" ");
    block.clear();

    let text = text.trim();
    if !text.is_empty() {
        out.push(text.to_string());
    }
}

fn is_timecode(line: &str) -> bool {
    line.contains(TIMECODE_ARROW)
}

fn is_sequence_number(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}
