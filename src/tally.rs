//! A file-backed count of finished games by winner

use anyhow::{Context, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use tracing::debug;

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::service::{WinRecorder, Winner};

/// Win counters, one per [`Winner`] code, stored as big-endian `u64`s
#[derive(Clone, Debug)]
pub struct WinTally {
    path: PathBuf,
    counts: [u64; 3],
}

impl WinTally {
    /// Opens the tally at `path`, a missing file counts as no games played
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut counts = [0; 3];

        if path.exists() {
            let mut file = BufReader::new(
                File::open(&path)
                    .with_context(|| format!("opening win tally {}", path.display()))?,
            );
            for count in counts.iter_mut() {
                *count = file
                    .read_u64::<BigEndian>()
                    .with_context(|| format!("reading win tally {}", path.display()))?;
            }
        }
        debug!(path = %path.display(), ?counts, "opened win tally");

        Ok(Self { path, counts })
    }

    pub fn count(&self, winner: Winner) -> u64 {
        self.counts[winner.code() as usize]
    }

    fn save(&self) -> Result<()> {
        let mut file = BufWriter::new(
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)
                .with_context(|| format!("writing win tally {}", self.path.display()))?,
        );
        for &count in self.counts.iter() {
            file.write_u64::<BigEndian>(count)?;
        }
        file.flush()?;
        Ok(())
    }
}

impl WinRecorder for WinTally {
    fn record(&mut self, winner: Winner) -> Result<()> {
        self.counts[winner.code() as usize] += 1;
        self.save()
    }
}
