use super::{hexdig_pair_at, push_decoded, triplet_at, Table};
use alloc::{borrow::Cow, string::String, vec::Vec};
use percent_encoding::percent_decode;

/// Decodes a component pass by pass until a pass changes nothing.
///
/// Each changing pass either shortens the string or only uppercases
/// re-encoded invalid UTF-8, so a fixed point is always reached. The pass
/// limit only bounds the work done on hostile input.
pub(super) fn decode(
    s: &str,
    reserved: Table,
    preserve_double: Table,
    max_passes: usize,
) -> Cow<'_, str> {
    let Some(mut buf) = decode_pass(s, reserved, preserve_double) else {
        return Cow::Borrowed(s);
    };

    let max_passes = max_passes.max(1);
    let mut passes = 1;
    while passes < max_passes {
        match decode_pass(&buf, reserved, preserve_double) {
            Some(next) => buf = next,
            None => return Cow::Owned(buf),
        }
        passes += 1;
    }

    if decode_pass(&buf, reserved, preserve_double).is_some() {
        log::warn!("percent-decoding did not settle after {max_passes} passes: {buf:?}");
    }
    Cow::Owned(buf)
}

/// Makes a single left-to-right pass, returning `None` if nothing changed.
fn decode_pass(s: &str, reserved: Table, preserve_double: Table) -> Option<String> {
    let bytes = s.as_bytes();
    let mut buf = String::with_capacity(s.len());
    let mut changed = false;

    // Start of the bytes not yet copied to `buf`.
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let Some(x) = triplet_at(bytes, i) else {
            i += 1;
            continue;
        };
        buf.push_str(&s[copied..i]);

        if x == b'%' {
            if let Some(y) = hexdig_pair_at(bytes, i + 3) {
                if preserve_double.allows(y) {
                    buf.push_str(&s[i..i + 3]);
                } else {
                    buf.push('%');
                    changed = true;
                }
                i += 3;
                copied = i;
                continue;
            }
        }

        if reserved.allows(x) {
            buf.push_str(&s[i..i + 3]);
            i += 3;
            copied = i;
            continue;
        }

        let end = run_end(bytes, i, reserved);
        let run = &s[i..end];
        let decoded: Vec<u8> = percent_decode(run.as_bytes()).collect();

        let start = buf.len();
        push_decoded(&mut buf, &decoded);
        if buf[start..] != *run {
            changed = true;
        }

        i = end;
        copied = i;
    }

    if changed {
        buf.push_str(&s[copied..]);
        Some(buf)
    } else {
        None
    }
}

/// Returns the end of the run of decodable triplets starting at `i`.
///
/// The run stops before a reserved triplet and before a `%25` that is
/// followed by two hex digits, both of which are handled one at a time.
fn run_end(bytes: &[u8], mut i: usize, reserved: Table) -> usize {
    while let Some(x) = triplet_at(bytes, i) {
        if reserved.allows(x) || (x == b'%' && hexdig_pair_at(bytes, i + 3).is_some()) {
            break;
        }
        i += 3;
    }
    i
}
