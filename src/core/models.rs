#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Disk {
    pub(crate) size: u32,
}

/// A stack of disks, bottom first. Sizes strictly decrease towards the top.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rod {
    pub(crate) disks: Vec<Disk>,
}

/// One full puzzle configuration.
///
/// Towers are values: they are compared and hashed by the disk sizes on each rod, in rod order,
/// and are never changed once built. A neighbouring configuration is always produced from a copy.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Tower {
    pub(crate) rods: Vec<Rod>,
}

/// Moves the top disk of rod `from` onto rod `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}
