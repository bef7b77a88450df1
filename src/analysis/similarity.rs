use std::collections::HashMap;

/// Ratcliff/Obershelp similarity between two strings: twice the total size
/// of the recursively longest matching blocks, divided by the combined
/// length. Ranges over [0, 1]; deterministic and monotonic in shared
/// contiguous subsequences.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let matched = matched_total(&a, &b, 0, a.len(), 0, b.len());
    2.0 * matched as f64 / (a.len() + b.len()) as f64
}

fn matched_total(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
    let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
    if size == 0 {
        return 0;
    }
    size + matched_total(a, b, alo, i, blo, j) + matched_total(a, b, i + size, ahi, j + size, bhi)
}

/// Longest contiguous matching block within the given bounds. Ties resolve
/// to the earliest position in `a`, then in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0usize);
    // Lengths of matches ending at each `b` index for the previous `a` index.
    let mut prev_lengths: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut lengths: HashMap<usize, usize> = HashMap::new();
        for j in blo..bhi {
            if b[j] != a[i] {
                continue;
            }
            let len = if j > blo {
                prev_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
            } else {
                1
            };
            lengths.insert(j, len);
            if len > best.2 {
                best = (i + 1 - len, j + 1 - len, len);
            }
        }
        prev_lengths = lengths;
    }
    best
}
