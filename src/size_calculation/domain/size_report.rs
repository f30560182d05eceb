use crate::size_calculation::domain::VisitedPackages;

/// Bytes in one mebibyte
pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Artifact size of one package reached during a traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSize {
    pub name: String,
    pub size_bytes: u64,
}

/// One row of the final report: a requested package and everything it pulls in
#[derive(Debug, Clone, PartialEq)]
pub struct PackageSizeReport {
    name: String,
    total_bytes: u64,
    dependency_count: usize,
    packages: Vec<PackageSize>,
}

impl PackageSizeReport {
    pub fn from_visited(name: &str, visited: &VisitedPackages) -> Self {
        Self {
            name: name.to_string(),
            total_bytes: visited.total_bytes(),
            dependency_count: visited.dependency_count(),
            packages: visited
                .iter()
                .map(|(name, size_bytes)| PackageSize {
                    name: name.to_string(),
                    size_bytes,
                })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn size_mib(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MIB
    }

    pub fn dependency_count(&self) -> usize {
        self.dependency_count
    }

    /// Every package counted in the total, root first.
    pub fn packages(&self) -> &[PackageSize] {
        &self.packages
    }
}
