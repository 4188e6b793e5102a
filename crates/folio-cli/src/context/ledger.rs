//! The reader's vote record for `folio feedback vote`, kept in
//! `.folio/votes.json`.

use std::path::Path;

use anyhow::Context;
use folio_core::vote::VoteLedger;

/// Load the ledger at `path`. A missing file is an empty ledger.
pub fn load_ledger(path: &Path) -> anyhow::Result<VoteLedger> {
    match std::fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse vote ledger {}", path.display())),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(VoteLedger::new()),
        Err(error) => {
            Err(error).with_context(|| format!("failed to read vote ledger {}", path.display()))
        }
    }
}

pub fn save_ledger(path: &Path, ledger: &VoteLedger) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(ledger)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write vote ledger {}", path.display()))
}

#[cfg(test)]
mod tests {
    use folio_core::enums::Verdict;
    use folio_core::vote::VoteState;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = load_ledger(&dir.path().join("votes.json")).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn votes_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("votes.json");

        let mut ledger = VoteLedger::new();
        ledger.click("art-1", Verdict::Unhelpful);
        save_ledger(&path, &ledger).unwrap();

        let back = load_ledger(&path).unwrap();
        assert_eq!(back.state("art-1"), VoteState::Unhelpful);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("votes.json");
        std::fs::write(&path, "not json").unwrap();
        let err = load_ledger(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse vote ledger"));
    }
}
