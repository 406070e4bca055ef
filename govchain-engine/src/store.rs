use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use govchain_common::{GovError, Proposal, Result};

/// Authoritative proposal collection, owned by the caller.
///
/// Readers get an immutable snapshot; writers build a whole new collection
/// and swap it in under one write lock, so a snapshot never contains a
/// half-applied change.
#[derive(Debug, Default)]
pub struct ProposalStore {
    proposals: RwLock<Arc<Vec<Proposal>>>,
}

impl ProposalStore {
    pub fn new(proposals: Vec<Proposal>) -> Self {
        Self {
            proposals: RwLock::new(Arc::new(proposals)),
        }
    }

    /// Current snapshot of the collection.
    pub fn get(&self) -> Result<Arc<Vec<Proposal>>> {
        Ok(Arc::clone(&*self.read()?))
    }

    /// Swaps the whole collection for `proposals`.
    pub fn replace(&self, proposals: Vec<Proposal>) -> Result<()> {
        *self.write()? = Arc::new(proposals);
        Ok(())
    }

    pub fn find(&self, id: &str) -> Result<Option<Proposal>> {
        Ok(self.read()?.iter().find(|p| p.id == id).cloned())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Inserts a new proposal at the front of the list (newest first).
    pub fn prepend(&self, proposal: Proposal) -> Result<()> {
        let mut guard = self.write()?;
        if guard.iter().any(|p| p.id == proposal.id) {
            return Err(GovError::InvalidProposal(format!(
                "duplicate proposal id: {}",
                proposal.id
            )));
        }
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.push(proposal);
        next.extend(guard.iter().cloned());
        *guard = Arc::new(next);
        Ok(())
    }

    /// Read-modify-write of a single proposal.
    ///
    /// `f` sees the current value and returns its replacement plus a result
    /// for the caller. The write lock is held throughout, so two updates to
    /// the same proposal cannot interleave. If `f` fails the collection is
    /// left untouched.
    pub fn update<T, F>(&self, id: &str, f: F) -> Result<T>
    where
        F: FnOnce(&Proposal) -> Result<(Proposal, T)>,
    {
        let mut guard = self.write()?;
        let index = guard
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| GovError::ProposalNotFound(id.to_string()))?;

        let (replacement, out) = f(&guard[index])?;

        let mut next: Vec<Proposal> = (**guard).clone();
        next[index] = replacement;
        *guard = Arc::new(next);
        Ok(out)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Arc<Vec<Proposal>>>> {
        self.proposals
            .read()
            .map_err(|e| GovError::Store(format!("proposal store lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Arc<Vec<Proposal>>>> {
        self.proposals
            .write()
            .map_err(|e| GovError::Store(format!("proposal store lock poisoned: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use govchain_common::NewProposal;

    fn proposal(id: &str) -> Proposal {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        Proposal::from_form(NewProposal::new("t", "d", "c"), "0xprop", id.to_string(), now)
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = ProposalStore::new(vec![proposal("1"), proposal("2")]);
        let before = store.get().unwrap();

        store.replace(vec![proposal("3")]).unwrap();

        assert_eq!(before.len(), 2);
        let after = store.get().unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, "3");
    }

    #[test]
    fn test_get_shares_snapshot_until_write() {
        let store = ProposalStore::new(vec![proposal("1")]);
        let first = store.get().unwrap();
        let second = store.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        store.prepend(proposal("2")).unwrap();
        assert!(!Arc::ptr_eq(&first, &store.get().unwrap()));
    }

    #[test]
    fn test_prepend_puts_newest_first_and_rejects_duplicates() {
        let store = ProposalStore::new(vec![proposal("1")]);
        store.prepend(proposal("2")).unwrap();

        let ids: Vec<String> = store.get().unwrap().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["2", "1"]);

        assert!(matches!(
            store.prepend(proposal("1")),
            Err(GovError::InvalidProposal(_))
        ));
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_update_replaces_one_proposal() {
        let store = ProposalStore::new(vec![proposal("1"), proposal("2")]);
        let title = store
            .update("2", |p| {
                let mut next = p.clone();
                next.title = "renamed".to_string();
                Ok((next, p.title.clone()))
            })
            .unwrap();

        assert_eq!(title, "t");
        assert_eq!(store.find("2").unwrap().unwrap().title, "renamed");
        assert_eq!(store.find("1").unwrap().unwrap().title, "t");
    }

    #[test]
    fn test_failed_update_leaves_store_untouched() {
        let store = ProposalStore::new(vec![proposal("1")]);
        let before = store.get().unwrap();

        let result: Result<()> = store.update("1", |_| Err(GovError::Store("boom".to_string())));
        assert!(result.is_err());
        assert!(Arc::ptr_eq(&before, &store.get().unwrap()));

        let missing: Result<()> = store.update("nope", |p| Ok((p.clone(), ())));
        assert!(matches!(missing, Err(GovError::ProposalNotFound(_))));
    }
}
