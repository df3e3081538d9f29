//! Outbox for leads that could not be delivered
//!
//! A record that fails or times out on its first delivery attempt is written
//! here, one JSON file per lead, and retried best-effort on `flush`. The
//! worst case stays "lead recorded locally for manual follow-up" instead of
//! "lead lost".

use super::{LeadRecord, LeadSink};
use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use uuid::Uuid;

pub struct Outbox {
    dir: PathBuf,
}

/// What a flush pass accomplished.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FlushStats {
    pub delivered: usize,
    pub remaining: usize,
}

impl Outbox {
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .map_err(|e| Error::Storage(format!("create outbox {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    /// Queue a record for later delivery.
    pub fn push(&self, record: &LeadRecord) -> Result<PathBuf> {
        let path = self.dir.join(format!("lead-{}.json", Uuid::new_v4()));
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)
            .map_err(|e| Error::Storage(format!("write {}: {e}", path.display())))?;
        info!("queued lead in outbox: {}", path.display());
        Ok(path)
    }

    /// Queued records, skipping anything unreadable.
    pub fn entries(&self) -> Result<Vec<(PathBuf, LeadRecord)>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .map_err(|e| Error::Storage(format!("read outbox {}: {e}", self.dir.display())))?
        {
            let path = entry
                .map_err(|e| Error::Storage(format!("read outbox entry: {e}")))?
                .path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match fs::read_to_string(&path)
                .ok()
                .and_then(|raw| serde_json::from_str::<LeadRecord>(&raw).ok())
            {
                Some(record) => entries.push((path, record)),
                None => warn!("skipping unreadable outbox entry {}", path.display()),
            }
        }
        Ok(entries)
    }

    /// Try to deliver every queued record, removing the ones that get
    /// through. Failures stay queued for the next pass.
    pub async fn flush(&self, sink: &dyn LeadSink) -> Result<FlushStats> {
        let mut stats = FlushStats::default();
        for (path, record) in self.entries()? {
            match sink.deliver(&record).await {
                Ok(()) => {
                    if let Err(e) = fs::remove_file(&path) {
                        warn!("delivered but could not remove {}: {e}", path.display());
                    }
                    stats.delivered += 1;
                }
                Err(e) => {
                    warn!("outbox delivery failed, keeping {}: {e}", path.display());
                    stats.remaining += 1;
                }
            }
        }
        Ok(stats)
    }

    /// Number of queued records.
    pub fn len(&self) -> usize {
        self.entries().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
