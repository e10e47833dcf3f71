use crate::render::Package;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PackageStat {
    pub package: Package,
    pub template: String,
    pub output: PathBuf,
    pub bytes: usize,
    pub crc_value: u32,
}

#[derive(Debug)]
pub struct GenerationStats {
    pub packages_generated: usize,
    pub flag_types: usize,
    pub total_bytes: usize,
    pub total_duration: Duration,
    pub package_stats: Vec<PackageStat>,
}

impl GenerationStats {
    pub fn new(flag_types: usize) -> Self {
        Self {
            packages_generated: 0,
            flag_types,
            total_bytes: 0,
            total_duration: Duration::from_secs(0),
            package_stats: Vec::new(),
        }
    }

    pub fn add_package(&mut self, stat: PackageStat) {
        self.packages_generated += 1;
        self.total_bytes += stat.bytes;
        self.package_stats.push(stat);
    }
}
