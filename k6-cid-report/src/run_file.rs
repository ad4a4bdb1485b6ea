/// Sort key parsed from a summary file name such as `10vu_1024B_<time>.json`.
///
/// Ordering is by virtual users, then by byte size; runs without a size
/// (anything other than range requests) sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunFileName {
    pub vus: u64,
    pub bytes: Option<u64>,
}

impl RunFileName {
    /// Returns `None` unless the name starts with `<digits>vu_`.
    pub fn parse(name: &str) -> Option<Self> {
        let (vus, rest) = split_digits(name);
        let rest = rest.strip_prefix("vu_")?;
        let vus = vus.parse().ok()?;

        let (size, after) = split_digits(rest);
        let bytes = match after.strip_prefix('B') {
            Some(_) if !size.is_empty() => size.parse().ok(),
            _ => None,
        };

        Some(Self { vus, bytes })
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}
