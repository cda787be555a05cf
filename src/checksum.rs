const FIRST_CHUNK: usize = 9;
// The running remainder (at most two digits) is prefixed to every later chunk.
const NEXT_CHUNK: usize = 7;

pub fn expand_letters(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len() * 2);
    for ch in input.chars() {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if ch.is_ascii_uppercase() {
            let val = ch as u32 - 'A' as u32 + 10;
            out.push_str(&val.to_string());
        } else {
            return None;
        }
    }
    Some(out)
}

pub fn mod97(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut remainder: u64 = 0;
    let mut rest = digits;
    let mut width = FIRST_CHUNK;
    while !rest.is_empty() {
        let take = width.min(rest.len());
        let (chunk, tail) = rest.split_at(take);
        let value: u64 = chunk.parse().ok()?;
        remainder = (remainder * 10u64.pow(take as u32) + value) % 97;
        rest = tail;
        width = NEXT_CHUNK;
    }
    Some(remainder as u32)
}

pub fn is_valid_checksum(normalized: &str) -> bool {
    let (head, tail) = match (normalized.get(..4), normalized.get(4..)) {
        (Some(head), Some(tail)) if !tail.is_empty() => (head, tail),
        _ => return false,
    };
    let rearranged = format!("{tail}{head}");
    expand_letters(&rearranged)
        .and_then(|digits| mod97(&digits))
        .map(|remainder| remainder == 1)
        .unwrap_or(false)
}
