/// Counts from one digest run.
#[derive(Debug, Default)]
pub struct DigestStats {
    pub posts_scanned: u32,
    pub platform_before_merge: u32,
    pub platform_after_merge: u32,
    pub external_before_merge: u32,
    pub external_after_merge: u32,
}

impl std::fmt::Display for DigestStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Link Digest Complete ===")?;
        writeln!(f, "Posts scanned:            {}", self.posts_scanned)?;
        writeln!(
            f,
            "Facebook links:           {} -> {} after merge",
            self.platform_before_merge, self.platform_after_merge
        )?;
        writeln!(
            f,
            "External links:           {} -> {} after merge",
            self.external_before_merge, self.external_after_merge
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reports_both_buckets() {
        let stats = DigestStats {
            posts_scanned: 10,
            platform_before_merge: 7,
            platform_after_merge: 4,
            external_before_merge: 3,
            external_after_merge: 3,
        };
        let text = stats.to_string();
        assert!(text.contains("Posts scanned:            10"));
        assert!(text.contains("7 -> 4 after merge"));
        assert!(text.contains("3 -> 3 after merge"));
    }
}
