use std::collections::{BTreeMap, BTreeSet};
use crate::tracker::structs::inventory_report::InventoryReport;

impl InventoryReport {
    /// Returns a copy whose shared files, piece sets and seeder bits name
    /// the same files, plus the names that `is_known_file` rejected.
    ///
    /// A file mentioned in any of the three collections counts as shared;
    /// a missing piece set is empty and a missing seeder bit is false.
    pub fn normalised<F>(&self, is_known_file: F) -> (InventoryReport, Vec<String>)
    where
        F: Fn(&str) -> bool,
    {
        let mut seen = BTreeSet::new();
        let mut shared_files = Vec::new();
        let mut rejected = Vec::new();
        let mentioned = self.shared_files.iter()
            .chain(self.pieces.keys())
            .chain(self.seeder_bits.keys());
        for file_name in mentioned {
            if !seen.insert(file_name.as_str()) {
                continue;
            }
            if is_known_file(file_name) {
                shared_files.push(file_name.clone());
            } else {
                rejected.push(file_name.clone());
            }
        }

        let mut pieces = BTreeMap::new();
        let mut seeder_bits = BTreeMap::new();
        for file_name in &shared_files {
            pieces.insert(file_name.clone(), self.pieces.get(file_name).cloned().unwrap_or_default());
            seeder_bits.insert(file_name.clone(), self.seeder_bits.get(file_name).copied().unwrap_or(false));
        }

        (InventoryReport {
            ip: self.ip.clone(),
            port: self.port,
            shared_files,
            pieces,
            seeder_bits,
        }, rejected)
    }
}
