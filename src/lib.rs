// State graph of the generalized Tower of Hanoi.
// `core` holds the puzzle (disks, rods, towers and legal moves), `state_graph` saturates the
// graph of towers reachable from the origin and exports it.

pub mod console_interface;
pub mod core;
pub mod state_graph;

#[cfg(test)]
mod test;
