/// Compute the effective result cap: global `--limit` flag, then configured cap.
pub fn effective_limit(flag: Option<u32>, configured: usize) -> anyhow::Result<usize> {
    match flag {
        Some(0) => anyhow::bail!("--limit must be greater than zero"),
        Some(limit) => Ok(usize::try_from(limit)?),
        None => Ok(configured),
    }
}
