//! IPv6 group text with zero-run compression.

use itertools::Itertools;

/// Hex groups joined by `:` with no compression.
pub fn join_groups(groups: &[u16]) -> String {
    groups.iter().map(|g| format!("{g:x}")).join(":")
}

/// Render 16-bit groups with RFC 5952 shorthand.
///
/// The first longest run of two or more zero groups becomes `::`. Works on
/// any slice of groups, so a tail of an address compresses on its own.
pub fn compress_groups(groups: &[u16]) -> String {
    let (run_start, run_len) = longest_zero_run(groups);
    if run_len < 2 {
        return join_groups(groups);
    }
    format!(
        "{}::{}",
        join_groups(&groups[..run_start]),
        join_groups(&groups[run_start + run_len..])
    )
}

/// Start and length of the first longest run of zero groups.
fn longest_zero_run(groups: &[u16]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut i = 0;
    while i < groups.len() {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && groups[i] == 0 {
            i += 1;
        }
        if i - start > best.1 {
            best = (start, i - start);
        }
    }
    best
}

/// Block text for two different IPv6 addresses.
///
/// The leading groups both addresses share are written out in full, the
/// differing tails are compressed independently and bracketed:
/// `2001:db8:1:[1-2::5]`. A tail whose zero run starts right at the shared
/// prefix keeps its `::`, so the separator moves inside the brackets and each
/// alternative is the literal text following the prefix: `2001:db8[::5-:1::5]`.
pub fn render_block_groups(start: &[u16; 8], end: &[u16; 8]) -> String {
    let shared = start
        .iter()
        .zip(end.iter())
        .take_while(|(s, e)| s == e)
        .count();
    if shared == start.len() {
        return compress_groups(start);
    }

    let tail_start = compress_groups(&start[shared..]);
    let tail_end = compress_groups(&end[shared..]);
    if shared == 0 {
        return format!("[{tail_start}-{tail_end}]");
    }

    let prefix = join_groups(&start[..shared]);
    if tail_start.starts_with("::") || tail_end.starts_with("::") {
        format!(
            "{prefix}[{}-{}]",
            anchored(&tail_start),
            anchored(&tail_end)
        )
    } else {
        format!("{prefix}:[{tail_start}-{tail_end}]")
    }
}

/// Tail text as it follows the shared prefix directly.
fn anchored(tail: &str) -> String {
    if tail.starts_with("::") {
        tail.to_string()
    } else {
        format!(":{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    fn groups(s: &str) -> [u16; 8] {
        s.parse::<Ipv6Addr>().unwrap().segments()
    }

    #[test]
    fn test_compress_matches_std_display() {
        for text in [
            "::",
            "::1",
            "1::",
            "2001:db8::1",
            "2001:db8:0:1:0:0:0:1",
            "2001:0:0:1:0:0:0:1",
            "2001:db8:0:0:1:0:0:1",
            "1:0:2:0:3:0:4:0",
            "fe80::1:2:3:4",
            "1:2:3:4:5:6:7:8",
        ] {
            let ip: Ipv6Addr = text.parse().unwrap();
            assert_eq!(compress_groups(&ip.segments()), ip.to_string(), "{text}");
        }
    }

    #[test]
    fn test_single_zero_group_not_compressed() {
        assert_eq!(compress_groups(&[1, 0, 2]), "1:0:2");
        assert_eq!(compress_groups(&[0, 5]), "0:5");
        assert_eq!(compress_groups(&[0, 0, 5]), "::5");
        assert_eq!(compress_groups(&[5, 0, 0]), "5::");
        assert_eq!(compress_groups(&[0, 0]), "::");
        assert_eq!(compress_groups(&[]), "");
    }

    #[test]
    fn test_block_last_group() {
        let s = groups("2001:db8:0:0:0:0:0:5");
        let e = groups("2001:db8:0:0:0:0:0:6");
        assert_eq!(render_block_groups(&s, &e), "2001:db8:0:0:0:0:0:[5-6]");
    }

    #[test]
    fn test_block_tail_compressed_inside_brackets() {
        let s = groups("2001:db8:1:0:0:0:0:5");
        let e = groups("2001:db8:2:0:0:0:0:6");
        assert_eq!(render_block_groups(&s, &e), "2001:db8:[1::5-2::6]");
    }

    #[test]
    fn test_block_tail_starting_with_zero_run() {
        let s = groups("2001:db8:0:0:0:0:0:5");
        let e = groups("2001:db8:1:0:0:0:0:5");
        assert_eq!(render_block_groups(&s, &e), "2001:db8[::5-:1::5]");
    }

    #[test]
    fn test_block_tail_adjacent_to_prefix_single_zero() {
        // one zero group right after the prefix is not a run
        let s = groups("2001:db8:1:2:3:4:0:5");
        let e = groups("2001:db8:1:2:3:4:1:5");
        assert_eq!(render_block_groups(&s, &e), "2001:db8:1:2:3:4:[0:5-1:5]");
    }

    #[test]
    fn test_block_tail_all_zero() {
        let s = groups("2001:db8:1:2:3:0:0:0");
        let e = groups("2001:db8:1:2:3:1:0:0");
        assert_eq!(render_block_groups(&s, &e), "2001:db8:1:2:3[::-:1::]");
    }

    #[test]
    fn test_block_shared_zero_groups_stay_expanded() {
        let s = groups("2001:0:0:0:0:0:1:ff00");
        let e = groups("2001:0:0:0:0:0:1:ff0a");
        assert_eq!(render_block_groups(&s, &e), "2001:0:0:0:0:0:1:[ff00-ff0a]");
    }

    #[test]
    fn test_block_no_shared_groups() {
        let s = groups("::5");
        let e = groups("1::5");
        assert_eq!(render_block_groups(&s, &e), "[::5-1::5]");
    }
}
