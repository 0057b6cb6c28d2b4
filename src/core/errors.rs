use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanoiError {
    #[error("disk {above} cannot rest on disk {below} (height {height} of the rod)")]
    RodOrder { height: usize, below: u32, above: u32 },

    #[error("rod {rod} does not exist, the tower has {rod_count} rods")]
    RodOutOfRange { rod: usize, rod_count: usize },

    #[error("cannot move a disk from rod {rod} onto itself")]
    SameRod { rod: usize },

    #[error("the top disk of rod {from} cannot be moved onto rod {to}")]
    IllegalMove { from: usize, to: usize },

    #[error("disk sizes start at 1")]
    ZeroSizedDisk,

    #[error("a tower of {disk_count} disks must hold sizes 1..={disk_count} once each, found {found:?}")]
    DiskSet { disk_count: usize, found: Vec<u32> },

    #[error("malformed tower label {label:?}: {reason}")]
    MalformedLabel { label: String, reason: String },
}
