use crate::core::{Disk, HanoiError, Rod, Tower};

impl Disk {
    /// Panics on size 0; the smallest disk has size 1.
    pub const fn new(size: u32) -> Disk {
        assert!(size > 0, "disk sizes start at 1");
        Disk { size }
    }

    pub fn try_new(size: u32) -> Result<Disk, HanoiError> {
        if size == 0 {
            return Err(HanoiError::ZeroSizedDisk);
        }
        Ok(Disk { size })
    }

    pub const fn size(self) -> u32 {
        self.size
    }
}

impl Rod {
    /// Builds a rod from disks listed bottom to top.
    ///
    /// Panics if the sizes are not strictly decreasing: that can only happen when a tower was
    /// assembled from disks in the wrong sequence.
    pub fn new(disks: Vec<Disk>) -> Rod {
        match Rod::try_new(disks) {
            Ok(rod) => rod,
            Err(err) => panic!("invalid rod: {err}"),
        }
    }

    pub fn try_new(disks: Vec<Disk>) -> Result<Rod, HanoiError> {
        if let Some(height) = disks
            .windows(2)
            .position(|pair| pair[0].size() <= pair[1].size())
        {
            return Err(HanoiError::RodOrder {
                height: height + 1,
                below: disks[height].size(),
                above: disks[height + 1].size(),
            });
        }
        Ok(Rod { disks })
    }

    pub fn empty() -> Rod {
        Rod { disks: Vec::new() }
    }

    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// The only rule of the puzzle: a disk may land on an empty rod or on a larger disk.
    pub fn can_shift_to(&self, dst: &Rod) -> bool {
        match (self.top(), dst.top()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(moving), Some(resting)) => moving.size() < resting.size(),
        }
    }

    /// Moves the top disk onto `dst`. Panics if `can_shift_to` does not allow it.
    pub fn shift_to(&mut self, dst: &mut Rod) {
        assert!(
            self.can_shift_to(dst),
            "illegal shift of {:?} onto {:?}",
            self.top(),
            dst.top()
        );
        if let Some(disk) = self.disks.pop() {
            dst.disks.push(disk);
        }
    }
}

impl Tower {
    /// Assembles a tower from its rods. The disks across all rods must be exactly the sizes
    /// `1..=n`, each once.
    pub fn from_rods(rods: Vec<Rod>) -> Result<Tower, HanoiError> {
        let mut found: Vec<u32> = rods.iter().flat_map(Rod::disks).map(|d| d.size()).collect();
        found.sort_unstable();
        if found.iter().zip(1..).any(|(&size, expected)| size != expected) {
            return Err(HanoiError::DiskSet {
                disk_count: found.len(),
                found,
            });
        }
        Ok(Tower { rods })
    }

    /// All disks stacked largest first on rod 0, every other rod empty.
    ///
    /// A tower without rods has nowhere to put the disks, so it stays empty.
    /// Panics if `disk_count` does not fit in a `u32`.
    pub fn origin(disk_count: usize, rod_count: usize) -> Tower {
        let largest = match u32::try_from(disk_count) {
            Ok(largest) => largest,
            Err(_) => panic!("{disk_count} disks do not fit in a tower"),
        };
        let rods = (0..rod_count)
            .map(|rod| {
                if rod == 0 {
                    Rod::new((1..=largest).rev().map(Disk::new).collect())
                } else {
                    Rod::empty()
                }
            })
            .collect();
        Tower { rods }
    }

    pub fn rods(&self) -> &[Rod] {
        &self.rods
    }

    pub fn rod_count(&self) -> usize {
        self.rods.len()
    }

    pub fn disk_count(&self) -> usize {
        self.rods.iter().map(Rod::len).sum()
    }
}
